//! tl-thermo: thermocouple voltage/temperature conversion for thermolab.
//!
//! Provides:
//! - Thermocouple type identifiers (letter designations T/J/K/E/N/S/R/B)
//! - Immutable inverse-polynomial coefficient tables keyed by type
//! - Polynomial evaluation and root extraction helpers
//! - [`ThermocoupleConverter`]: EMF in microvolts <-> temperature in degrees
//!   Celsius with cold-junction compensation
//!
//! # Architecture
//!
//! Conversion is pure computation over `'static` coefficient data: a
//! converter is cheap to construct, `Copy`, and safe to share across threads.
//! The forward direction evaluates the inverse polynomial directly; the
//! reverse direction substitutes the target temperature into the constant
//! term and extracts the one real polynomial root inside the table's valid
//! EMF bracket. How the raw microvolt reading was acquired (GPIB, USB-TMC,
//! a serial bridge) is no concern of this crate; see `tl-instr` for the
//! instrument side.
//!
//! # Example
//!
//! ```
//! use tl_thermo::{ThermocoupleConverter, ThermocoupleType};
//!
//! let converter = ThermocoupleConverter::new(ThermocoupleType::T, 0.0).unwrap();
//! let t = converter.temperature_from_voltage(1000.0).unwrap();
//! assert!((t - 25.21).abs() < 0.01);
//! ```

pub mod converter;
pub mod couple;
pub mod error;
pub mod poly;
pub mod tables;

// Re-exports for ergonomics
pub use converter::ThermocoupleConverter;
pub use couple::ThermocoupleType;
pub use error::{ThermoError, ThermoResult};
pub use tables::{lookup, registry, CoefficientEntry};
