/// Latest reading handed over by the particulate sensor task
///
/// The value is the air-quality metric the tiers are defined on (PM2.5 in
/// µg/m³ for the stock sensor). Readings flagged invalid keep the last
/// automatic color on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SensorReading {
    pub value: u16,
    pub valid: bool,
}

impl SensorReading {
    pub const fn valid(value: u16) -> Self {
        Self { value, valid: true }
    }

    /// Reading that carries no usable value
    pub const fn invalid() -> Self {
        Self {
            value: 0,
            valid: false,
        }
    }

    /// Metric value, if the reading is usable
    pub const fn value(self) -> Option<u16> {
        if self.valid { Some(self.value) } else { None }
    }
}

impl From<Option<u16>> for SensorReading {
    fn from(value: Option<u16>) -> Self {
        match value {
            Some(value) => Self::valid(value),
            None => Self::invalid(),
        }
    }
}
