//! Round-trip and property tests for thermocouple conversion.

use proptest::prelude::*;
use tl_thermo::{ThermocoupleConverter, ThermocoupleType};

fn type_t() -> ThermocoupleConverter {
    ThermocoupleConverter::with_zero_reference(ThermocoupleType::T).unwrap()
}

#[test]
fn roundtrip_across_both_branches() {
    let conv = type_t();
    for raw in [-5000.0, -2500.0, -100.0, 50.0, 1000.0, 9000.0, 20000.0] {
        let t = conv.temperature_from_voltage(raw).unwrap();
        let back = conv.voltage_from_temperature(t).unwrap();
        assert!(
            (back - raw).abs() <= 1e-6 * raw.abs().max(1.0),
            "raw = {raw}: recovered {back}"
        );
    }
}

#[test]
fn forward_conversion_is_monotonic_over_fit_domain() {
    let conv = type_t();
    let mut previous = f64::NEG_INFINITY;
    let mut raw = -5500.0;
    while raw <= 20800.0 {
        let t = conv.temperature_from_voltage(raw).unwrap();
        assert!(t > previous, "non-monotonic at {raw} uV");
        previous = t;
        raw += 100.0;
    }
}

#[test]
fn biased_converter_roundtrips_through_its_own_reference() {
    let conv = ThermocoupleConverter::new(ThermocoupleType::T, 60.0).unwrap();
    let offset = type_t().voltage_from_temperature(60.0).unwrap();
    for raw in [-4000.0, 0.0, 12000.0] {
        let t = conv.temperature_from_voltage(raw).unwrap();
        let back = type_t().voltage_from_temperature(t).unwrap() - offset;
        assert!(
            (back - raw).abs() <= 1e-6 * raw.abs().max(1.0),
            "raw = {raw}: recovered {back}"
        );
    }
}

proptest! {
    #[test]
    fn roundtrip_recovers_emf(raw in -5500.0..20800.0f64) {
        let conv = type_t();
        let t = conv.temperature_from_voltage(raw).unwrap();
        let back = conv.voltage_from_temperature(t).unwrap();
        prop_assert!((back - raw).abs() <= 1e-6 * raw.abs().max(1.0));
    }

    #[test]
    fn forward_conversion_never_panics_inside_bracket(raw in -5999.0..29999.0f64) {
        let conv = type_t();
        let t = conv.temperature_from_voltage(raw).unwrap();
        prop_assert!(t.is_finite());
    }
}
