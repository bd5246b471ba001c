#![no_std]

//! Status light engine for air-quality sensor firmware
//!
//! Architecture layers:
//! - `fader` - per-channel crossfade state of the three indicator pixels
//! - `orchestrator` - auto/manual arbitration and tick timing
//! - `scheduler` - interval gating for polling host loops
//! - `intent` / `channel` - commands from other tasks
//! - `output` - `smart-leds` backed [`OutputDriver`]
//!
//! The engine is generic over [`OutputDriver`], allowing different hardware
//! backends.

pub mod channel;
pub mod color;
pub mod config;
pub mod fader;
pub mod indicator;
pub mod intent;
pub mod math8;
pub mod mode;
pub mod orchestrator;
pub mod output;
pub mod scheduler;
pub mod sensor;
pub mod tier;

pub use color::{ColorMode, Frame, OFF_FRAME, PIXEL_COUNT, PixelColor, Rgb};
pub use config::{FadeEngineConfig, FadeIntervals};
pub use fader::{FADE_WINDOW, PixelFader};
pub use indicator::StatusIndicator;
pub use intent::{IntentChannel, IntentReceiver, IntentSender, LedChangeIntent, LedStateIntent};
pub use mode::{LedMode, LedState};
pub use orchestrator::{FadeOrchestrator, LedStatus};
pub use output::SmartLedsOutput;
pub use scheduler::{IntervalGate, PassResult};
pub use sensor::SensorReading;
pub use tier::{AirQualityTier, TierThresholds};

pub use embassy_time::{Duration, Instant};

/// Abstract pixel sink
///
/// Implement this trait to support different hardware platforms. The engine
/// writes every pixel with [`OutputDriver::set_channels`] and then calls
/// [`OutputDriver::commit`] once, the sink should make the whole batch
/// visible together.
pub trait OutputDriver {
    /// Stage the channel values of one pixel
    ///
    /// `channels` holds 3 (RGB) or 4 (RGBW) values.
    fn set_channels(&mut self, pixel: usize, channels: &[u8]);

    /// Make all staged pixels visible
    fn commit(&mut self);
}
