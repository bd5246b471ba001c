//! Control mode of the status indicator

const MODE_NAME_AUTO: &str = "Auto";
const MODE_NAME_MANUAL: &str = "Manual";

const STATE_NAME_OFF: &str = "Off";
const STATE_NAME_ON: &str = "On";

/// Who decides the indicator color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LedMode {
    /// Color follows the air-quality reading
    #[default]
    Auto,
    /// Color is set by command
    Manual,
}

impl LedMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => MODE_NAME_AUTO,
            Self::Manual => MODE_NAME_MANUAL,
        }
    }

    /// Parse the mode names used by the command schema (`"Auto"`, `"Manual"`)
    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_AUTO => Some(Self::Auto),
            MODE_NAME_MANUAL => Some(Self::Manual),
            _ => None,
        }
    }
}

/// Power state of the indicator in manual mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LedState {
    #[default]
    Off,
    On,
}

impl LedState {
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => STATE_NAME_OFF,
            Self::On => STATE_NAME_ON,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            STATE_NAME_OFF => Some(Self::Off),
            STATE_NAME_ON => Some(Self::On),
            _ => None,
        }
    }
}

impl From<bool> for LedState {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}
