//! SCPI parameter vocabulary shared by the instrument wrappers.

use std::fmt;
use tl_core::units::Potential;

/// Measurement channel on a two-channel meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    One,
    Two,
}

impl Channel {
    pub fn number(&self) -> u8 {
        match self {
            Channel::One => 1,
            Channel::Two => 2,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Voltage range selection for one channel.
#[derive(Debug, Clone, Copy)]
pub enum RangeMode {
    /// Let the instrument pick the range.
    Auto,
    /// Expected upper bound of the reading; 0 to 120 V.
    Upper(Potential),
}

/// Measurement function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SenseFunction {
    Voltage,
    Temperature,
}

impl SenseFunction {
    pub fn scpi(&self) -> &'static str {
        match self {
            SenseFunction::Voltage => "VOLT",
            SenseFunction::Temperature => "TEMP",
        }
    }
}

/// Temperature transducer selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transducer {
    Thermocouple,
    Internal,
}

impl Transducer {
    pub fn scpi(&self) -> &'static str {
        match self {
            Transducer::Thermocouple => "TC",
            Transducer::Internal => "INT",
        }
    }
}

/// Cold-junction reference selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReferenceJunction {
    /// The meter measures its own terminal temperature.
    Internal,
    /// Simulated reference at a fixed temperature in degrees Celsius,
    /// 0 to 60.
    Simulated(f64),
}

/// Digital filter averaging mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Moving,
    Repeating,
}

impl FilterKind {
    pub fn scpi(&self) -> &'static str {
        match self {
            FilterKind::Moving => "MOV",
            FilterKind::Repeating => "REP",
        }
    }
}

/// Temperature display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub fn scpi(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
            TemperatureUnit::Kelvin => "K",
        }
    }
}

/// Power line frequency; bounds the integration time (NPLC) range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFrequency {
    Hz50,
    Hz60,
}

impl LineFrequency {
    pub fn max_nplc(&self) -> f64 {
        match self {
            LineFrequency::Hz50 => 50.0,
            LineFrequency::Hz60 => 60.0,
        }
    }
}

pub(crate) fn on_off(flag: bool) -> &'static str {
    if flag { "ON" } else { "OFF" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mnemonics() {
        assert_eq!(SenseFunction::Voltage.scpi(), "VOLT");
        assert_eq!(SenseFunction::Temperature.scpi(), "TEMP");
        assert_eq!(Transducer::Thermocouple.scpi(), "TC");
        assert_eq!(FilterKind::Moving.scpi(), "MOV");
        assert_eq!(FilterKind::Repeating.scpi(), "REP");
        assert_eq!(TemperatureUnit::Kelvin.scpi(), "K");
    }

    #[test]
    fn channel_numbers() {
        assert_eq!(Channel::One.number(), 1);
        assert_eq!(format!("{}", Channel::Two), "2");
    }

    #[test]
    fn nplc_bounds_follow_line_frequency() {
        assert_eq!(LineFrequency::Hz50.max_nplc(), 50.0);
        assert_eq!(LineFrequency::Hz60.max_nplc(), 60.0);
    }
}
