//! Pixel fade driver
//!
//! Owns the per-channel color state of every pixel slot and moves it toward
//! a target one tick at a time.
//!
//! All channels share a single tick counter. Each channel derives a sampling
//! period from its total distance (`1020 / delta`) and only moves by one unit
//! on ticks that are a multiple of that period. Channels with a large delta
//! move often, channels with a small delta rarely, so every channel of every
//! pixel arrives at roughly the same time.
//!
//! Ticks inside a fade window are numbered `1..=FADE_WINDOW`. The tick that
//! carries number [`FADE_WINDOW`] commits the reached colors as the baseline
//! of the next window and resets the counter.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::{ColorMode, Frame, MAX_CHANNELS, OFF_FRAME, PIXEL_COUNT, PixelColor, mask_frame};

const WINDOW_TICKS: i16 = 1020;

/// Number of ticks in one fade window
///
/// Chosen so that every divisor of 1020 (1, 2, 3, 4, 5, 6, 10, 12, ...)
/// yields an exact sampling period.
pub const FADE_WINDOW: u16 = WINDOW_TICKS.unsigned_abs();

/// Sampling periods of the channels of one pixel
pub type ChannelSteps = [i16; MAX_CHANNELS];

/// Sampling period for a channel fading from `previous` to `target`.
///
/// Zero means the channel does not move. The sign gives the direction, the
/// magnitude the number of ticks between two unit changes. Non-divisors of
/// 1020 truncate, which lets the channel drift by a unit against its
/// siblings.
pub fn sampling_period(previous: u8, target: u8) -> i16 {
    let delta = i16::from(target) - i16::from(previous);
    if delta == 0 {
        return 0;
    }
    WINDOW_TICKS / delta
}

/// Value of a channel after the tick numbered `tick`
pub const fn step_channel(current: u8, step: i16, tick: u16) -> u8 {
    if step == 0 || tick % step.unsigned_abs() != 0 {
        return current;
    }
    if step > 0 {
        current.saturating_add(1)
    } else {
        current.saturating_sub(1)
    }
}

/// Crossfade driver for the indicator pixels
///
/// Generic over the hardware sink. The baseline at construction is all-zero,
/// so a crossfade started before any [`PixelFader::set_immediate`] fades up
/// from black.
pub struct PixelFader<O: OutputDriver> {
    output: O,
    mode: ColorMode,
    /// Colors at the start of the current fade window
    previous: Frame,
    /// Colors pushed to the hardware on the last tick
    current: Frame,
    /// Sampling periods computed on the last tick
    steps: [ChannelSteps; PIXEL_COUNT],
    /// Ticks already taken in the current window
    counter: u16,
}

impl<O: OutputDriver> PixelFader<O> {
    /// Create a new fader. Nothing is written to the output until the first
    /// call to [`PixelFader::set_immediate`] or [`PixelFader::crossfade_tick`].
    pub const fn new(output: O, mode: ColorMode) -> Self {
        Self {
            output,
            mode,
            previous: OFF_FRAME,
            current: OFF_FRAME,
            steps: [[0; MAX_CHANNELS]; PIXEL_COUNT],
            counter: 0,
        }
    }

    /// Show `frame` right away, without a fade.
    ///
    /// Both the baseline and the displayed colors are replaced. The window
    /// counter keeps running.
    pub fn set_immediate(&mut self, frame: &Frame) {
        let frame = mask_frame(frame, self.mode);
        self.previous = frame;
        self.current = frame;
        self.steps = [[0; MAX_CHANNELS]; PIXEL_COUNT];
        self.push();
    }

    /// Advance the crossfade toward `targets` by one tick and push the result.
    pub fn crossfade_tick(&mut self, targets: &Frame) {
        let tick = self.counter + 1;
        let channel_count = self.mode.channel_count();

        for pixel in 0..PIXEL_COUNT {
            let previous = self.previous[pixel].channels();
            let target = targets[pixel].masked(self.mode).channels();
            let mut current = self.current[pixel].channels();

            let channels = current
                .iter_mut()
                .zip(self.steps[pixel].iter_mut())
                .zip(previous.iter().zip(target.iter()))
                .take(channel_count);
            for ((value, step), (from, to)) in channels {
                *step = sampling_period(*from, *to);
                *value = step_channel(*value, *step, tick);
            }

            self.current[pixel] = PixelColor::from_array(current);
        }

        self.push();

        if tick >= FADE_WINDOW {
            self.previous = self.current;
            self.counter = 0;
            #[cfg(feature = "esp32-log")]
            println!("[PixelFader.crossfade_tick] fade window committed: {:?}", self.current);
        } else {
            self.counter = tick;
        }
    }

    /// Write every pixel and commit them as one batch
    fn push(&mut self) {
        let channel_count = self.mode.channel_count();
        for (pixel, color) in self.current.iter().enumerate() {
            let channels = color.channels();
            self.output.set_channels(pixel, &channels[..channel_count]);
        }
        self.output.commit();
    }

    /// Colors shown on the last tick
    pub const fn current(&self) -> &Frame {
        &self.current
    }

    /// Baseline of the running fade window
    pub const fn previous(&self) -> &Frame {
        &self.previous
    }

    /// Sampling periods computed on the last tick
    pub const fn steps(&self) -> &[ChannelSteps; PIXEL_COUNT] {
        &self.steps
    }

    /// Ticks already taken in the current window (`0..FADE_WINDOW`)
    pub const fn counter(&self) -> u16 {
        self.counter
    }

    pub const fn color_mode(&self) -> ColorMode {
        self.mode
    }

    /// Get a reference to the output driver.
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the output driver.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
