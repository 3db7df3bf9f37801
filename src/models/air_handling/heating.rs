//! Sensible heating at constant humidity ratio.

use tracing::{debug, trace};
use twine_core::Model;
use uom::si::{
    f64::{Power, Ratio, ThermodynamicTemperature},
    power::watt,
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    flow::FlowOfHumidAir,
    heat_flow::HeatFlow,
    thermo::{
        capability::{HasEnthalpy, ThermoState},
        correlation::humid_air,
        fluid::HumidAir,
        inverse::{self, InverseConfig},
        limits::{check_range, check_relative_humidity, gas_temperature_max},
    },
};

use super::{ProcessError, ProcessInput, ProcessType};

/// What the heater should achieve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeatingTarget {
    /// Outlet temperature.
    Temperature(ThermodynamicTemperature),
    /// Outlet relative humidity, which must be below the inlet's.
    RelativeHumidity(Ratio),
    /// Heat added to the stream.
    Heat(Power),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatingMode {
    Temperature,
    RelativeHumidity,
    Heat,
}

impl HeatingTarget {
    #[must_use]
    pub fn mode(&self) -> HeatingMode {
        match self {
            Self::Temperature(_) => HeatingMode::Temperature,
            Self::RelativeHumidity(_) => HeatingMode::RelativeHumidity,
            Self::Heat(_) => HeatingMode::Heat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatingResult {
    pub process_type: ProcessType,
    pub mode: HeatingMode,
    pub inlet: FlowOfHumidAir,
    pub outlet: FlowOfHumidAir,
    pub heat: HeatFlow,
}

/// A heating coil.
///
/// Moisture content is unchanged, so the outlet has the inlet's humidity
/// ratio and dry-air mass flow, and the heat is `ṁ_da·(h_out − h_in)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Heating {
    config: InverseConfig,
}

impl Heating {
    #[must_use]
    pub fn new(config: InverseConfig) -> Self {
        Self { config }
    }

    /// Heats `inlet` to reach `target`.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::Unreachable`] if the target requires cooling
    /// (a lower temperature, a higher relative humidity or negative heat), and
    /// [`ProcessError::Property`] if the outlet state is out of range or an
    /// inverse lookup fails.
    pub fn process(
        &self,
        inlet: &FlowOfHumidAir,
        target: HeatingTarget,
    ) -> Result<HeatingResult, ProcessError> {
        let mode = target.mode();
        let Some(outlet) = self.outlet(inlet, target)? else {
            trace!(?mode, "heating target already met by inlet");
            return Ok(HeatingResult {
                process_type: ProcessType::Heating,
                mode,
                inlet: *inlet,
                outlet: *inlet,
                heat: HeatFlow::None,
            });
        };

        let heat = match target {
            HeatingTarget::Heat(heat) => heat,
            _ => inlet.dry_air_mass_flow() * (outlet.enthalpy() - inlet.fluid().enthalpy()),
        };

        debug!(
            ?mode,
            outlet_temperature = outlet.temperature().get::<degree_celsius>(),
            heat = heat.get::<watt>(),
            "heating solved"
        );

        Ok(HeatingResult {
            process_type: ProcessType::Heating,
            mode,
            inlet: *inlet,
            outlet: inlet.with_fluid(outlet),
            heat: HeatFlow::from_signed(heat)?,
        })
    }

    /// Returns the outlet state, or `None` if the inlet already meets the target.
    fn outlet(
        &self,
        inlet: &FlowOfHumidAir,
        target: HeatingTarget,
    ) -> Result<Option<HumidAir>, ProcessError> {
        let air = inlet.fluid();

        match target {
            HeatingTarget::Temperature(temperature) => {
                if temperature == air.temperature() {
                    return Ok(None);
                }
                if temperature < air.temperature() {
                    return Err(ProcessError::unreachable(
                        "heating target temperature below inlet temperature",
                        temperature.get::<degree_celsius>(),
                        air.temperature().get::<degree_celsius>(),
                    ));
                }
                Ok(Some(air.with_temperature(temperature)?))
            }

            HeatingTarget::RelativeHumidity(relative_humidity) => {
                let relative_humidity = check_relative_humidity(relative_humidity)?;
                if relative_humidity >= air.relative_humidity() {
                    return Err(ProcessError::unreachable(
                        "heating cannot raise relative humidity",
                        relative_humidity.get::<percent>(),
                        air.relative_humidity().get::<percent>(),
                    ));
                }

                let lowest = humid_air::relative_humidity(
                    air.pressure(),
                    gas_temperature_max(),
                    air.humidity_ratio(),
                );
                if relative_humidity < lowest {
                    return Err(ProcessError::unreachable(
                        "relative humidity below the value at the temperature limit",
                        relative_humidity.get::<percent>(),
                        lowest.get::<percent>(),
                    ));
                }

                let temperature = inverse::temperature_at_relative_humidity(
                    air.pressure(),
                    air.humidity_ratio(),
                    relative_humidity,
                    [air.temperature(), gas_temperature_max()],
                    &self.config,
                )?;
                Ok(Some(air.with_temperature(temperature)?))
            }

            HeatingTarget::Heat(heat) => {
                check_range("heat", heat.get::<watt>(), 0.0, f64::INFINITY, "W")?;
                if heat.get::<watt>() == 0.0 {
                    return Ok(None);
                }

                let enthalpy = air.enthalpy() + heat / inlet.dry_air_mass_flow();
                let outlet = HumidAir::from_enthalpy(
                    air.pressure(),
                    enthalpy,
                    air.humidity_ratio(),
                    &self.config,
                )?;
                Ok(Some(outlet))
            }
        }
    }
}

impl Model for Heating {
    type Input = ProcessInput<HeatingTarget>;
    type Output = HeatingResult;
    type Error = ProcessError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.process(&input.inlet, input.target)
    }
}
