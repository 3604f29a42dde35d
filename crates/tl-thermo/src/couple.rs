//! Thermocouple type identifiers.

use std::fmt;

/// Letter-designated thermocouple types (IEC 60584 / ASTM E230).
///
/// The full instrument-facing set is enumerated; whether conversion is
/// available for a given type depends on the coefficient registry (see
/// [`crate::tables::lookup`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThermocoupleType {
    /// Copper / constantan
    T,
    /// Iron / constantan
    J,
    /// Chromel / alumel
    K,
    /// Chromel / constantan
    E,
    /// Nicrosil / nisil
    N,
    /// Platinum-rhodium 10% / platinum
    S,
    /// Platinum-rhodium 13% / platinum
    R,
    /// Platinum-rhodium 30% / platinum-rhodium 6%
    B,
}

impl ThermocoupleType {
    pub const ALL: [ThermocoupleType; 8] = [
        ThermocoupleType::T,
        ThermocoupleType::J,
        ThermocoupleType::K,
        ThermocoupleType::E,
        ThermocoupleType::N,
        ThermocoupleType::S,
        ThermocoupleType::R,
        ThermocoupleType::B,
    ];

    /// The single-letter designation used on instrument panels and in SCPI
    /// commands.
    pub fn letter(&self) -> char {
        match self {
            ThermocoupleType::T => 'T',
            ThermocoupleType::J => 'J',
            ThermocoupleType::K => 'K',
            ThermocoupleType::E => 'E',
            ThermocoupleType::N => 'N',
            ThermocoupleType::S => 'S',
            ThermocoupleType::R => 'R',
            ThermocoupleType::B => 'B',
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ThermocoupleType::T => "Type T (copper/constantan)",
            ThermocoupleType::J => "Type J (iron/constantan)",
            ThermocoupleType::K => "Type K (chromel/alumel)",
            ThermocoupleType::E => "Type E (chromel/constantan)",
            ThermocoupleType::N => "Type N (nicrosil/nisil)",
            ThermocoupleType::S => "Type S (Pt-10%Rh/Pt)",
            ThermocoupleType::R => "Type R (Pt-13%Rh/Pt)",
            ThermocoupleType::B => "Type B (Pt-30%Rh/Pt-6%Rh)",
        }
    }
}

impl std::str::FromStr for ThermocoupleType {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "T" => Ok(ThermocoupleType::T),
            "J" => Ok(ThermocoupleType::J),
            "K" => Ok(ThermocoupleType::K),
            "E" => Ok(ThermocoupleType::E),
            "N" => Ok(ThermocoupleType::N),
            "S" => Ok(ThermocoupleType::S),
            "R" => Ok(ThermocoupleType::R),
            "B" => Ok(ThermocoupleType::B),
            _ => Err("unknown thermocouple type"),
        }
    }
}

impl fmt::Display for ThermocoupleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
