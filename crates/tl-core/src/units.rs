// tl-core/src/units.rs

use uom::si::f64::{
    ElectricCurrent as UomElectricCurrent, ElectricPotential as UomElectricPotential,
};

// Public canonical unit types (SI, f64)
pub type Current = UomElectricCurrent;
pub type Potential = UomElectricPotential;

#[inline]
pub fn v(value: f64) -> Potential {
    use uom::si::electric_potential::volt;
    Potential::new::<volt>(value)
}

#[inline]
pub fn uv(value: f64) -> Potential {
    use uom::si::electric_potential::microvolt;
    Potential::new::<microvolt>(value)
}

#[inline]
pub fn a(value: f64) -> Current {
    use uom::si::electric_current::ampere;
    Current::new::<ampere>(value)
}

#[inline]
pub fn ma(value: f64) -> Current {
    use uom::si::electric_current::milliampere;
    Current::new::<milliampere>(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{nearly_equal, Tolerances};

    #[test]
    fn constructors_smoke() {
        let _p = v(10.0);
        let _e = uv(1250.0);
        let _i = a(0.001);
        let _im = ma(1.0);
    }

    #[test]
    fn microvolt_to_volt() {
        use uom::si::electric_potential::volt;
        let p = uv(1_000_000.0);
        assert!(nearly_equal(p.get::<volt>(), 1.0, Tolerances::default()));
    }

    #[test]
    fn milliamp_to_amp() {
        use uom::si::electric_current::ampere;
        let i = ma(1.5);
        assert!(nearly_equal(i.get::<ampere>(), 0.0015, Tolerances::default()));
    }
}
