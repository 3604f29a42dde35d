//! Thermocouple conversion errors.

use thiserror::Error;
use tl_core::TlError;

/// Result type for conversion operations.
pub type ThermoResult<T> = Result<T, ThermoError>;

/// Errors that can occur during thermocouple conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThermoError {
    /// No coefficient table is registered for the requested type.
    #[error("No coefficient table registered for thermocouple type {letter}")]
    UnsupportedType { letter: char },

    /// Inversion found no real root inside the table's valid EMF bracket.
    #[error("No EMF root in ({min_uv}, {max_uv}) uV for temperature {temperature}")]
    NoValidRoot {
        temperature: f64,
        min_uv: f64,
        max_uv: f64,
    },

    /// Shared numeric validation failure (non-finite input or result).
    #[error(transparent)]
    Core(#[from] TlError),
}
