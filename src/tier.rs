//! Air-quality tiers
//!
//! The automatic mode maps the sensor metric onto three bands, each with a
//! fixed indicator color.

use crate::color::{AMBER, GREEN, PixelColor, RED};

/// PM2.5 (µg/m³) at or below which the air counts as good
pub const DEFAULT_LOW_THRESHOLD: u16 = 35;

/// PM2.5 (µg/m³) at or above which the air counts as poor
pub const DEFAULT_HIGH_THRESHOLD: u16 = 86;

/// Band limits for [`AirQualityTier::classify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierThresholds {
    /// Highest metric that is still [`AirQualityTier::Good`]
    pub low: u16,
    /// Lowest metric that is already [`AirQualityTier::Poor`]
    pub high: u16,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            low: DEFAULT_LOW_THRESHOLD,
            high: DEFAULT_HIGH_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirQualityTier {
    /// Green
    Good,
    /// Amber
    Moderate,
    /// Red
    Poor,
}

impl AirQualityTier {
    /// Classify a metric value.
    ///
    /// Values equal to a threshold belong to that threshold's tier. The low
    /// bound is checked first, so overlapping thresholds favour `Good`.
    pub const fn classify(metric: u16, thresholds: TierThresholds) -> Self {
        if metric <= thresholds.low {
            Self::Good
        } else if metric >= thresholds.high {
            Self::Poor
        } else {
            Self::Moderate
        }
    }

    /// Full-scale color of the tier, before brightness is applied
    pub const fn color(self) -> PixelColor {
        match self {
            Self::Good => GREEN,
            Self::Moderate => AMBER,
            Self::Poor => RED,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Poor => "poor",
        }
    }
}
