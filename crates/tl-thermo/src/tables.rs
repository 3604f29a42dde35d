//! Inverse-polynomial coefficient tables.
//!
//! Each entry carries two coefficient sequences approximating the EMF to
//! temperature relation for one thermocouple type: one valid for negative
//! corrected EMF, one for zero-or-positive. Coefficients are ordered lowest
//! degree first, take microvolts in, and yield degrees Celsius out. The
//! valid EMF bracket is per-type table data tied to the fit domain, not a
//! universal constant.
//!
//! The tables are physical reference data (NIST ITS-90 style inverse fits)
//! and are never mutated; inversion works on a per-call copy.

use crate::couple::ThermocoupleType;

/// Registered coefficient data for one thermocouple type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientEntry {
    pub tc_type: ThermocoupleType,
    /// Applied when the corrected EMF (or target temperature) is strictly
    /// negative.
    pub below_zero: &'static [f64],
    /// Applied when the corrected EMF (or target temperature) is zero or
    /// positive.
    pub above_zero: &'static [f64],
    /// Lower EMF bracket bound in microvolts (exclusive).
    pub min_uv: f64,
    /// Upper EMF bracket bound in microvolts (exclusive).
    pub max_uv: f64,
}

impl CoefficientEntry {
    /// Coefficient sequence for a signed input. Exactly zero routes to the
    /// zero-or-positive set; the sign test is strict `< 0`.
    pub fn select(&self, signed_input: f64) -> &'static [f64] {
        if signed_input < 0.0 {
            self.below_zero
        } else {
            self.above_zero
        }
    }
}

const TYPE_T_BELOW_ZERO: [f64; 8] = [
    0.0000000E+00,
    2.5929192E-02,
    -2.1316967E-07,
    7.9018692E-10,
    4.2527777E-13,
    1.3304473E-16,
    2.0241446E-20,
    1.2668171E-24,
];

const TYPE_T_ABOVE_ZERO: [f64; 7] = [
    0.000000E+00,
    2.592800E-02,
    -7.602961E-07,
    4.637791E-11,
    -2.165394E-15,
    6.048144E-20,
    -7.293422E-25,
];

const REGISTRY: [CoefficientEntry; 1] = [CoefficientEntry {
    tc_type: ThermocoupleType::T,
    below_zero: &TYPE_T_BELOW_ZERO,
    above_zero: &TYPE_T_ABOVE_ZERO,
    min_uv: -6000.0,
    max_uv: 30000.0,
}];

/// All registered coefficient entries.
pub fn registry() -> &'static [CoefficientEntry] {
    &REGISTRY
}

/// Look up the coefficient entry for a thermocouple type, if registered.
pub fn lookup(tc_type: ThermocoupleType) -> Option<&'static CoefficientEntry> {
    registry().iter().find(|entry| entry.tc_type == tc_type)
}
