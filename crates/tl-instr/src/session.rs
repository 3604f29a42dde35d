//! Instrument session abstraction.

use crate::error::InstrResult;

/// A line-oriented SCPI session with one instrument.
///
/// Implementations own the transport (GPIB, USB-TMC, VXI-11, a serial or TCP
/// bridge) together with its framing and timeouts, and wrap transport
/// failures in [`crate::InstrError::Session`]. The wrappers in this crate
/// never open, close, or enumerate connections.
pub trait ScpiSession {
    /// Send a single command; no reply expected.
    fn write(&mut self, cmd: &str) -> InstrResult<()>;

    /// Send a query and return the instrument's reply line.
    fn query(&mut self, cmd: &str) -> InstrResult<String>;
}
