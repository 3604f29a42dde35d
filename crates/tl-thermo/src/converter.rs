//! EMF/temperature conversion with cold-junction compensation.

use crate::couple::ThermocoupleType;
use crate::error::{ThermoError, ThermoResult};
use crate::poly;
use crate::tables::{self, CoefficientEntry};
use tl_core::ensure_finite;

/// Converts between thermocouple EMF (microvolts) and temperature (degrees
/// Celsius) for one sensor configuration.
///
/// Holds the thermocouple type and the reference (cold junction) temperature
/// fixed at construction; every forward conversion is biased by the EMF the
/// reference junction contributes. All coefficient state is `'static`, so a
/// converter is `Copy` and freely shared across threads.
///
/// Callers are responsible for passing physically plausible magnitudes:
/// inputs far outside the table's fit domain make the polynomial overflow,
/// which surfaces as a non-finite-value error rather than a reading.
#[derive(Debug, Clone, Copy)]
pub struct ThermocoupleConverter {
    tc_type: ThermocoupleType,
    reference_temperature: f64,
    entry: &'static CoefficientEntry,
}

impl ThermocoupleConverter {
    /// Create a converter for `tc_type` with the given reference junction
    /// temperature in degrees Celsius.
    ///
    /// Fails with [`ThermoError::UnsupportedType`] when no coefficient table
    /// is registered for the type.
    pub fn new(tc_type: ThermocoupleType, reference_temperature: f64) -> ThermoResult<Self> {
        let entry = tables::lookup(tc_type).ok_or(ThermoError::UnsupportedType {
            letter: tc_type.letter(),
        })?;
        ensure_finite(reference_temperature, "reference temperature")?;
        Ok(Self {
            tc_type,
            reference_temperature,
            entry,
        })
    }

    /// Converter with the reference junction held at 0 degrees Celsius, i.e.
    /// no cold-junction bias.
    pub fn with_zero_reference(tc_type: ThermocoupleType) -> ThermoResult<Self> {
        Self::new(tc_type, 0.0)
    }

    pub fn tc_type(&self) -> ThermocoupleType {
        self.tc_type
    }

    pub fn reference_temperature(&self) -> f64 {
        self.reference_temperature
    }

    /// Temperature in degrees Celsius for a raw EMF reading in microvolts.
    ///
    /// The reading is first corrected by the EMF of the reference junction,
    /// then the coefficient branch is selected on the sign of the *corrected*
    /// value (strictly negative picks the below-zero set) and the inverse
    /// polynomial is evaluated.
    pub fn temperature_from_voltage(&self, raw_microvolts: f64) -> ThermoResult<f64> {
        ensure_finite(raw_microvolts, "raw EMF")?;
        let reference_voltage = self.voltage_from_temperature(self.reference_temperature)?;
        let corrected = raw_microvolts + reference_voltage;
        let coeffs = self.entry.select(corrected);
        let temperature = poly::eval(coeffs, corrected);
        ensure_finite(temperature, "evaluated temperature").map_err(Into::into)
    }

    /// EMF in microvolts that a junction at `temperature` degrees Celsius
    /// produces.
    ///
    /// Inverts the polynomial by substituting `-temperature` into the
    /// constant term of a per-call copy of the coefficient sequence and
    /// extracting its roots. Only roots with negligible imaginary part that
    /// lie strictly inside the table's EMF bracket qualify; the smallest
    /// qualifying root is returned. Fails with [`ThermoError::NoValidRoot`]
    /// when none qualifies.
    pub fn voltage_from_temperature(&self, temperature: f64) -> ThermoResult<f64> {
        ensure_finite(temperature, "temperature")?;
        let coeffs = self.entry.select(temperature);

        // The solve runs on an EMF variable normalized by the bracket
        // magnitude so companion-matrix entries stay O(1); raw microvolt
        // coefficients span ~25 orders of magnitude.
        let scale = self.entry.max_uv.abs().max(self.entry.min_uv.abs());
        let mut scaled: Vec<f64> = coeffs
            .iter()
            .enumerate()
            .map(|(i, &c)| c * scale.powi(i as i32))
            .collect();
        scaled[0] = -temperature;

        poly::real_roots(&scaled)
            .into_iter()
            .map(|root| root * scale)
            .find(|uv| *uv > self.entry.min_uv && *uv < self.entry.max_uv)
            .ok_or(ThermoError::NoValidRoot {
                temperature,
                min_uv: self.entry.min_uv,
                max_uv: self.entry.max_uv,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_t() -> ThermocoupleConverter {
        ThermocoupleConverter::with_zero_reference(ThermocoupleType::T).unwrap()
    }

    #[test]
    fn origin_maps_to_origin() {
        let conv = type_t();
        assert!(conv.temperature_from_voltage(0.0).unwrap().abs() < 1e-6);
        assert!(conv.voltage_from_temperature(0.0).unwrap().abs() < 1e-6);
    }

    #[test]
    fn known_calibration_points() {
        let conv = type_t();
        // Reference values computed from the type T inverse tables.
        let t = conv.temperature_from_voltage(1000.0).unwrap();
        assert!((t - 25.211976168).abs() < 1e-6, "t = {t}");

        let t = conv.temperature_from_voltage(-3000.0).unwrap();
        assert!((t + 86.938034754).abs() < 1e-6, "t = {t}");

        let v = conv.voltage_from_temperature(100.0).unwrap();
        assert!((v - 4278.3007).abs() < 1e-3, "v = {v}");
    }

    #[test]
    fn unsupported_types_fail_at_construction() {
        for tc_type in ThermocoupleType::ALL {
            if tc_type == ThermocoupleType::T {
                continue;
            }
            let err = ThermocoupleConverter::with_zero_reference(tc_type).unwrap_err();
            assert_eq!(
                err,
                ThermoError::UnsupportedType {
                    letter: tc_type.letter()
                }
            );
        }
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        let conv = type_t();
        assert!(conv.temperature_from_voltage(f64::NAN).is_err());
        assert!(conv.voltage_from_temperature(f64::INFINITY).is_err());
        assert!(ThermocoupleConverter::new(ThermocoupleType::T, f64::NAN).is_err());
    }

    #[test]
    fn no_root_when_temperature_exceeds_table_range() {
        // 1000 C is far beyond type T; the polynomial has no real root at all.
        let err = type_t().voltage_from_temperature(1000.0).unwrap_err();
        assert!(matches!(err, ThermoError::NoValidRoot { .. }));
    }

    #[test]
    fn no_root_when_solution_falls_outside_bracket() {
        // -250 C solves to roughly -6265 uV, which is real but outside the
        // (-6000, 30000) bracket; it must be rejected, not returned.
        let err = type_t().voltage_from_temperature(-250.0).unwrap_err();
        assert_eq!(
            err,
            ThermoError::NoValidRoot {
                temperature: -250.0,
                min_uv: -6000.0,
                max_uv: 30000.0,
            }
        );
    }

    #[test]
    fn cold_junction_bias_shifts_reading() {
        // With the reference junction at 100 C, zero measured EMF means the
        // probe junction is itself at 100 C.
        let conv = ThermocoupleConverter::new(ThermocoupleType::T, 100.0).unwrap();
        let t = conv.temperature_from_voltage(0.0).unwrap();
        assert!((t - 100.0).abs() < 1e-6, "t = {t}");
    }

    #[test]
    fn reference_correction_is_additive() {
        let biased = ThermocoupleConverter::new(ThermocoupleType::T, 23.0).unwrap();
        let unbiased = type_t();
        let offset = unbiased.voltage_from_temperature(23.0).unwrap();

        for raw in [-2000.0, -250.0, 0.0, 500.0, 9000.0] {
            let direct = biased.temperature_from_voltage(raw).unwrap();
            let shifted = unbiased.temperature_from_voltage(raw + offset).unwrap();
            assert!(
                (direct - shifted).abs() < 1e-6,
                "raw = {raw}: {direct} vs {shifted}"
            );
        }
    }
}
