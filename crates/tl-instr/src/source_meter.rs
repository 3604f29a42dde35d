//! Source meter wrapper (2400 class), run as a high-impedance voltmeter.

use crate::error::{InstrError, InstrResult};
use crate::session::ScpiSession;
use tl_core::units::{v, Potential};
use tracing::debug;
use uom::si::electric_potential::volt;

/// Zero-sourced-current voltage measurement setup.
///
/// The meter sources a fixed 0 A on its lowest current range, which makes
/// the voltage input effectively high-impedance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoltageMeasurement {
    /// Voltage protection (compliance) limit.
    pub compliance: Potential,
    /// Fixed measurement range.
    pub range: Potential,
    /// Integration time in power line cycles, 0.01 to 10.
    pub nplc: f64,
}

impl Default for VoltageMeasurement {
    fn default() -> Self {
        Self {
            compliance: v(1.0),
            range: v(0.2),
            nplc: 10.0,
        }
    }
}

/// Wrapper for a source meter used purely as a voltmeter.
pub struct SourceMeter<S> {
    session: S,
}

impl<S: ScpiSession> SourceMeter<S> {
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

    /// Silence the front-panel beeper.
    pub fn disable_beeper(&mut self) -> InstrResult<()> {
        self.send(":SYST:BEEP:STAT OFF")
    }

    /// Configure the meter to source 0 A and measure voltage, then enable
    /// the output.
    pub fn configure_voltage_measurement(&mut self, setup: VoltageMeasurement) -> InstrResult<()> {
        let compliance = setup.compliance.get::<volt>();
        let range = setup.range.get::<volt>();
        if !(0.01..=10.0).contains(&setup.nplc) {
            return Err(InstrError::InvalidParam {
                what: "NPLC outside 0.01..10",
            });
        }
        if !compliance.is_finite() || compliance <= 0.0 {
            return Err(InstrError::InvalidParam {
                what: "voltage protection must be positive",
            });
        }
        if !range.is_finite() || range <= 0.0 {
            return Err(InstrError::InvalidParam {
                what: "voltage range must be positive",
            });
        }

        self.send(&format!(":SENS:VOLT:NPLC {}", setup.nplc))?;
        self.send(":SOUR:FUNC CURR")?;
        self.send(":SOUR:CURR:MODE FIXED")?;
        self.send(":SENS:FUNC 'VOLT'")?;
        self.send(":SOUR:CURR:RANG MIN")?;
        self.send(":SOUR:CURR:LEV 0")?;
        self.send(&format!(":SENS:VOLT:PROT {compliance}"))?;
        self.send(&format!(":SENS:VOLT:RANG {range}"))?;
        self.send(":FORM:ELEM VOLT")?;
        self.send(":OUTP ON")
    }

    /// Trigger a reading and return it in volts.
    pub fn read(&mut self) -> InstrResult<f64> {
        let reply = self.session.query(":READ?")?;
        match reply.trim().parse::<f64>() {
            Ok(value) => Ok(value),
            Err(source) => Err(InstrError::MalformedReply { reply, source }),
        }
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
