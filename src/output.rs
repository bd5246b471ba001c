//! Output driver backed by a `smart-leds` writer.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use smart_leds::SmartLedsWrite;

use crate::OutputDriver;
use crate::color::{Frame, OFF_FRAME, PixelColor};

/// Buffers pixel writes and flushes them to a [`SmartLedsWrite`] strip on
/// commit.
///
/// Works with RGB (`RGB8`) and RGBW (`RGBW<u8>`) writers. Write errors are
/// counted, not propagated: the fade engine has no way to act on them.
pub struct SmartLedsOutput<W> {
    writer: W,
    frame: Frame,
    write_failures: u32,
}

impl<W> SmartLedsOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            frame: OFF_FRAME,
            write_failures: 0,
        }
    }

    /// Colors of the last committed frame
    pub const fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Number of failed writes since creation
    pub const fn write_failures(&self) -> u32 {
        self.write_failures
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: From<PixelColor>,
{
    fn set_channels(&mut self, pixel: usize, channels: &[u8]) {
        if let Some(slot) = self.frame.get_mut(pixel) {
            *slot = PixelColor::from_channels(channels);
        }
    }

    fn commit(&mut self) {
        if self.writer.write(self.frame.iter().copied()).is_err() {
            self.write_failures = self.write_failures.saturating_add(1);
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsOutput.commit] write failed ({} so far)", self.write_failures);
        }
    }
}
