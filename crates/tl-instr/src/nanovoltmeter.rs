//! Two-channel nanovolt/temperature meter wrapper (2182 class).

use crate::error::{InstrError, InstrResult};
use crate::scpi::{
    on_off, Channel, FilterKind, LineFrequency, RangeMode, ReferenceJunction, SenseFunction,
    TemperatureUnit, Transducer,
};
use crate::session::ScpiSession;
use tl_thermo::ThermocoupleType;
use tracing::debug;
use uom::si::electric_potential::volt;

/// Thermocouple measurement setup for the temperature function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermocoupleSetup {
    pub transducer: Transducer,
    pub reference: ReferenceJunction,
    pub tc_type: ThermocoupleType,
    pub unit: TemperatureUnit,
}

impl Default for ThermocoupleSetup {
    fn default() -> Self {
        Self {
            transducer: Transducer::Thermocouple,
            reference: ReferenceJunction::Internal,
            tc_type: ThermocoupleType::J,
            unit: TemperatureUnit::Celsius,
        }
    }
}

/// Filter and acquisition parameters for one sense function.
///
/// Changing function or range resets the instrument's filter state, so this
/// is applied as one block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterConfig {
    /// Analog low-pass filter.
    pub analog: bool,
    /// Digital averaging filter.
    pub digital: bool,
    /// Digital filter count, 0 to 100.
    pub count: u8,
    pub kind: FilterKind,
    /// Digital filter window, 0 to 10.
    pub window: f64,
    pub auto_zero: bool,
    /// Integration time in power line cycles, 0.01 up to the line-frequency
    /// maximum.
    pub nplc: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            analog: false,
            digital: false,
            count: 10,
            kind: FilterKind::Moving,
            window: 0.01,
            auto_zero: false,
            nplc: 5.0,
        }
    }
}

/// Wrapper for a two-channel nanovoltmeter with a thermocouple temperature
/// function.
pub struct Nanovoltmeter<S> {
    session: S,
}

impl<S: ScpiSession> Nanovoltmeter<S> {
    /// Wrap an open session. Opening and closing the transport belongs to
    /// the caller.
    pub fn with(session: S) -> Self {
        Self { session }
    }

    /// Give the session back, e.g. to hand it to another wrapper.
    pub fn into_session(self) -> S {
        self.session
    }

    /// Return the instrument to its power-on defaults.
    pub fn reset(&mut self) -> InstrResult<()> {
        self.send("*RST")
    }

    /// Select the measurement range for a channel.
    pub fn set_range(&mut self, channel: Channel, range: RangeMode) -> InstrResult<()> {
        match range {
            RangeMode::Auto => self.send(&format!(":SENS:VOLT:CHAN{channel}:RANG:AUTO ON")),
            RangeMode::Upper(bound) => {
                let volts = bound.get::<volt>();
                if !(0.0..=120.0).contains(&volts) {
                    return Err(InstrError::InvalidParam {
                        what: "range upper bound outside 0..120 V",
                    });
                }
                self.send(&format!(":SENS:VOLT:CHAN{channel}:RANG:UPP {volts}"))
            }
        }
    }

    /// Configure the temperature function for thermocouple measurement.
    pub fn configure_thermocouple(&mut self, setup: ThermocoupleSetup) -> InstrResult<()> {
        if let ReferenceJunction::Simulated(celsius) = setup.reference {
            if !(0.0..=60.0).contains(&celsius) {
                return Err(InstrError::InvalidParam {
                    what: "simulated reference junction outside 0..60 C",
                });
            }
        }

        self.send(&format!(":SENS:TEMP:TRAN {}", setup.transducer.scpi()))?;
        match setup.reference {
            ReferenceJunction::Internal => self.send(":SENS:TEMP:RJUN:RSEL INT")?,
            ReferenceJunction::Simulated(celsius) => {
                self.send(":SENS:TEMP:RJUN:RSEL SIM")?;
                self.send(&format!(":SENS:TEMP:RJUN:SIM {celsius}"))?;
            }
        }
        self.send(&format!(":SENS:TEMP:TC {}", setup.tc_type.letter()))?;
        self.send(&format!(":UNIT:TEMP {}", setup.unit.scpi()))
    }

    /// Apply filter and acquisition parameters to one sense function.
    ///
    /// All parameters are validated against device limits before any command
    /// is written.
    pub fn configure_filter(
        &mut self,
        channel: Channel,
        function: SenseFunction,
        filter: FilterConfig,
        line: LineFrequency,
    ) -> InstrResult<()> {
        if filter.count > 100 {
            return Err(InstrError::InvalidParam {
                what: "filter count outside 0..100",
            });
        }
        if !(0.0..=10.0).contains(&filter.window) {
            return Err(InstrError::InvalidParam {
                what: "filter window outside 0..10",
            });
        }
        if !(0.01..=line.max_nplc()).contains(&filter.nplc) {
            return Err(InstrError::InvalidParam {
                what: "NPLC outside line-frequency limits",
            });
        }

        let root = format!(":SENS:{}:CHAN{}", function.scpi(), channel);
        self.send(&format!("{root}:DFIL:COUNt {}", filter.count))?;
        self.send(&format!("{root}:DFIL:TCON {}", filter.kind.scpi()))?;
        self.send(&format!("{root}:DFIL:WIND {}", filter.window))?;
        self.send(&format!("{root}:LPAS {}", on_off(filter.analog)))?;
        self.send(&format!("{root}:DFIL {}", on_off(filter.digital)))?;
        self.send(&format!(":SENS:{}:NPLC {}", function.scpi(), filter.nplc))?;
        self.send(&format!(":SYST:AZER {}", on_off(filter.auto_zero)))
    }

    /// Select the active sense function and channel.
    pub fn select_function(
        &mut self,
        function: SenseFunction,
        channel: Channel,
    ) -> InstrResult<()> {
        self.send(&format!(":SENS:FUNC '{}'", function.scpi()))?;
        self.send(&format!(":SENS:CHAN {channel}"))
    }

    /// Trigger a reading and return it.
    ///
    /// Volts for the voltage function; the configured temperature unit for
    /// the temperature function.
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
