//! Pixel colors for the three-slot status indicator.
//!
//! Colors are carried as four `u8` channels (R, G, B, W). How many of them a
//! pixel actually has is decided by [`ColorMode`] at construction time, the
//! white channel of an RGB strip is simply ignored.

mod palette;

pub use palette::{AMBER, GREEN, RED, rgb_from_u32};
use smart_leds::{RGB8, RGBW, White};

use crate::math8::scale8;

pub type Rgb = RGB8;

/// Number of pixel slots on the indicator
pub const PIXEL_COUNT: usize = 3;

/// Maximum number of channels per pixel (RGBW)
pub const MAX_CHANNELS: usize = 4;

/// One color vector per pixel slot
pub type Frame = [PixelColor; PIXEL_COUNT];

/// Frame with every channel of every pixel at zero
pub const OFF_FRAME: Frame = [PixelColor::OFF; PIXEL_COUNT];

/// Channel layout of the attached pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Red, green and blue
    #[default]
    Rgb,
    /// Red, green, blue and a dedicated white die
    Rgbw,
}

impl ColorMode {
    /// Number of active channels per pixel
    pub const fn channel_count(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgbw => 4,
        }
    }
}

/// Absolute color of a single pixel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub w: u8,
}

impl PixelColor {
    pub const OFF: Self = Self::new(0, 0, 0);

    /// Create an RGB color, white channel stays dark
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, w: 0 }
    }

    pub const fn new_rgbw(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self { r, g, b, w }
    }

    /// Channels in R, G, B, W order
    pub const fn channels(self) -> [u8; MAX_CHANNELS] {
        [self.r, self.g, self.b, self.w]
    }

    pub const fn from_array(channels: [u8; MAX_CHANNELS]) -> Self {
        Self {
            r: channels[0],
            g: channels[1],
            b: channels[2],
            w: channels[3],
        }
    }

    /// Build a color from a partial channel list.
    ///
    /// Channels that are not given stay at zero, values past the fourth are
    /// ignored. A command that only carries `[r]` or `[r, g]` is valid.
    pub fn from_channels(values: &[u8]) -> Self {
        let mut channels = [0; MAX_CHANNELS];
        for (slot, value) in channels.iter_mut().zip(values) {
            *slot = *value;
        }
        Self::from_array(channels)
    }

    /// Scale every channel by `brightness` (0-255 = 0.0-1.0)
    pub const fn scale(self, brightness: u8) -> Self {
        Self {
            r: scale8(self.r, brightness),
            g: scale8(self.g, brightness),
            b: scale8(self.b, brightness),
            w: scale8(self.w, brightness),
        }
    }

    /// Zero the channels the given mode does not drive
    #[must_use]
    pub const fn masked(self, mode: ColorMode) -> Self {
        match mode {
            ColorMode::Rgb => Self { w: 0, ..self },
            ColorMode::Rgbw => self,
        }
    }
}

impl From<Rgb> for PixelColor {
    fn from(color: Rgb) -> Self {
        Self::new(color.r, color.g, color.b)
    }
}

impl From<PixelColor> for Rgb {
    fn from(color: PixelColor) -> Self {
        Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

impl From<PixelColor> for RGBW<u8> {
    fn from(color: PixelColor) -> Self {
        RGBW {
            r: color.r,
            g: color.g,
            b: color.b,
            a: White(color.w),
        }
    }
}

/// Frame with every pixel set to the same color
pub const fn uniform_frame(color: PixelColor) -> Frame {
    [color; PIXEL_COUNT]
}

/// Apply [`PixelColor::masked`] to a whole frame
pub fn mask_frame(frame: &Frame, mode: ColorMode) -> Frame {
    frame.map(|color| color.masked(mode))
}
