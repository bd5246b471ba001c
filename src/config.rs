//! Engine configuration and defaults.

use embassy_time::Duration;

use crate::color::{ColorMode, Frame, OFF_FRAME};
use crate::mode::{LedMode, LedState};
use crate::tier::TierThresholds;

/// Default brightness applied to the tier colors
pub const DEFAULT_BRIGHTNESS: u8 = 50;

/// Default spacing of manual fade ticks.
///
/// A full fade window (1020 ticks) takes about one second.
pub const DEFAULT_FADE_INTERVAL: Duration = Duration::from_micros(1_000);

/// Default spacing of automatic fade ticks and sensor re-evaluation
pub const DEFAULT_AUTO_FADE_INTERVAL: Duration = Duration::from_micros(5_000);

/// Tick spacing per mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeIntervals {
    /// Manual mode
    pub fade: Duration,
    /// Automatic mode
    pub auto_fade: Duration,
}

impl Default for FadeIntervals {
    fn default() -> Self {
        Self {
            fade: DEFAULT_FADE_INTERVAL,
            auto_fade: DEFAULT_AUTO_FADE_INTERVAL,
        }
    }
}

/// Configuration for the fade orchestrator
#[derive(Debug, Clone)]
pub struct FadeEngineConfig {
    pub color_mode: ColorMode,
    pub mode: LedMode,
    pub state: LedState,
    /// Brightness of the automatic tier colors
    pub brightness: u8,
    /// Target of the manual mode while switched on
    pub manual_color: Frame,
    pub thresholds: TierThresholds,
    pub intervals: FadeIntervals,
}

impl Default for FadeEngineConfig {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Rgb,
            mode: LedMode::Auto,
            state: LedState::Off,
            brightness: DEFAULT_BRIGHTNESS,
            manual_color: OFF_FRAME,
            thresholds: TierThresholds::default(),
            intervals: FadeIntervals::default(),
        }
    }
}
