//! Fixed indicator colors shown while the firmware brings up its links.
//!
//! These are displayed without a fade, the values are absolute and do not
//! follow the configured brightness.

use crate::color::{Frame, PixelColor, uniform_frame};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIndicator {
    /// Board powered, nothing connected yet
    Startup,
    /// Station joined the access point
    WifiConnected,
    /// Broker session established
    MqttConnected,
    /// Broker session lost
    MqttDisconnected,
    Off,
}

impl StatusIndicator {
    pub const fn color(self) -> PixelColor {
        match self {
            Self::Startup => PixelColor::new(20, 0, 0),
            Self::WifiConnected => PixelColor::new(0, 0, 20),
            Self::MqttConnected => PixelColor::new(0, 5, 0),
            Self::MqttDisconnected => PixelColor::new(15, 5, 0),
            Self::Off => PixelColor::OFF,
        }
    }

    /// Frame with every pixel showing the indicator color
    pub const fn frame(self) -> Frame {
        uniform_frame(self.color())
    }
}
