//! Commands accepted by the fade engine.
//!
//! The command decoder (MQTT or REST) turns a validated payload into a
//! [`LedChangeIntent`] and either applies it directly or queues it through an
//! [`IntentChannel`] when it runs in another context.

use embassy_time::Duration;

use crate::channel::{Channel, Receiver, Sender};
use crate::color::Frame;
use crate::indicator::StatusIndicator;
use crate::mode::{LedMode, LedState};
use crate::tier::TierThresholds;

/// Requested change of mode, power or manual color.
///
/// Fields left as `None` keep their current value. The color is only taken
/// when the engine ends up in manual mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedStateIntent {
    pub mode: Option<LedMode>,
    pub state: Option<LedState>,
    pub color: Option<Frame>,
}

/// Intent to change the indicator behaviour
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedChangeIntent {
    /// Change mode, power state or manual color
    State(LedStateIntent),
    /// Change the brightness of the automatic colors
    Brightness(u8),
    /// Change the manual tick spacing
    FadeInterval(Duration),
    /// Change the automatic tick spacing
    AutoFadeInterval(Duration),
    /// Change the tier band limits
    Thresholds(TierThresholds),
    /// Show a fixed status color without fading
    Indicator(StatusIndicator),
}

/// Type alias for intent sender
pub type IntentSender<'a, const SIZE: usize> = Sender<'a, LedChangeIntent, SIZE>;

/// Type alias for intent receiver
pub type IntentReceiver<'a, const SIZE: usize> = Receiver<'a, LedChangeIntent, SIZE>;

/// Type alias for the intent channel
pub type IntentChannel<const SIZE: usize> = Channel<LedChangeIntent, SIZE>;
