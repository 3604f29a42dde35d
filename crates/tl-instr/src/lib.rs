//! tl-instr: SCPI command construction for thermolab's bench instruments.
//!
//! Wraps three instrument classes behind typed, validated APIs:
//! - [`Nanovoltmeter`]: two-channel nanovolt/temperature meter (2182 class)
//! - [`CurrentSource`]: precision current source (6221 class)
//! - [`SourceMeter`]: source meter run as a high-impedance voltmeter (2400 class)
//!
//! Transport is not handled here. Callers implement [`ScpiSession`] over
//! whatever bus reaches the instrument (GPIB, USB-TMC, a LAN/serial bridge);
//! the wrappers only build command strings, validate parameters against
//! device limits before anything is written, and parse replies.

pub mod current_source;
pub mod error;
pub mod nanovoltmeter;
pub mod scpi;
pub mod session;
pub mod source_meter;

// Re-exports for ergonomics
pub use current_source::CurrentSource;
pub use error::{InstrError, InstrResult};
pub use nanovoltmeter::{FilterConfig, Nanovoltmeter, ThermocoupleSetup};
pub use scpi::{
    Channel, FilterKind, LineFrequency, RangeMode, ReferenceJunction, SenseFunction,
    TemperatureUnit, Transducer,
};
pub use session::ScpiSession;
pub use source_meter::{SourceMeter, VoltageMeasurement};
