//! tl-core: stable foundation for thermolab.
//!
//! Contains:
//! - units (uom SI types + constructors for bench-electrical quantities)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TlError, TlResult};
pub use numeric::*;
pub use units::*;
