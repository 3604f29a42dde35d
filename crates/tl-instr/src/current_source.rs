//! Precision current source wrapper (6221 class).

use crate::error::{InstrError, InstrResult};
use crate::session::ScpiSession;
use tl_core::units::{Current, Potential};
use tracing::debug;
use uom::si::electric_current::ampere;
use uom::si::electric_potential::volt;

/// Maximum source current magnitude in amperes.
const MAX_OUTPUT_A: f64 = 0.105;

/// Compliance voltage limits in volts.
const COMPLIANCE_MIN_V: f64 = 0.1;
const COMPLIANCE_MAX_V: f64 = 105.0;

/// Wrapper for a precision DC current source.
pub struct CurrentSource<S> {
    session: S,
}

impl<S: ScpiSession> CurrentSource<S> {
    /// Wrap an open session. Opening and closing the transport belongs to
    /// the caller.
    pub fn with(session: S) -> Self {
        Self { session }
    }

    /// Give the session back.
    pub fn into_session(self) -> S {
        self.session
    }

    /// Return the instrument to its power-on defaults.
    pub fn reset(&mut self) -> InstrResult<()> {
        self.send("*RST")
    }

    /// Program the output current and its compliance voltage.
    ///
    /// Nothing is written unless both values are inside device limits.
    pub fn set_output(&mut self, current: Current, compliance: Potential) -> InstrResult<()> {
        let amps = current.get::<ampere>();
        let volts = compliance.get::<volt>();
        if !amps.is_finite() || amps.abs() > MAX_OUTPUT_A {
            return Err(InstrError::InvalidParam {
                what: "source current outside +/-105 mA",
            });
        }
        if !(COMPLIANCE_MIN_V..=COMPLIANCE_MAX_V).contains(&volts) {
            return Err(InstrError::InvalidParam {
                what: "compliance voltage outside 0.1..105 V",
            });
        }

        self.send(&format!("SOUR:CURR {amps}"))?;
        self.send(&format!("SOUR:CURR:COMP {volts}"))
    }

    /// Enable the output relay.
    pub fn output_on(&mut self) -> InstrResult<()> {
        self.send("OUTP ON")
    }

    /// Disable the output relay.
    pub fn output_off(&mut self) -> InstrResult<()> {
        self.send("OUTP OFF")
    }

    /// Escape hatch: send a raw command.
    pub fn command(&mut self, raw: &str) -> InstrResult<()> {
        self.send(raw)
    }

    /// Escape hatch: send a raw query.
    pub fn query(&mut self, raw: &str) -> InstrResult<String> {
        self.session.query(raw)
    }

    fn send(&mut self, cmd: &str) -> InstrResult<()> {
        debug!(cmd, "scpi write");
        self.session.write(cmd)
    }
}
