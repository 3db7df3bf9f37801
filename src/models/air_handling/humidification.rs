//! Humidification by steam injection.

use tracing::{debug, trace};
use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{MassRate, Ratio, TemperatureInterval, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    ratio::{percent, ratio},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    flow::{FlowOfHumidAir, FlowOfWaterVapour},
    thermo::{
        PropertyError,
        capability::{HasEnthalpy, ThermoState},
        correlation::humid_air,
        fluid::{HumidAir, WaterVapour},
        inverse::{self, InverseConfig, TargetProblem},
        limits::{check_gas_temperature, check_mass_flow, check_range, check_relative_humidity},
    },
};

use super::{ProcessError, ProcessInput, ProcessType};

/// What the humidifier should achieve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HumidificationTarget {
    HumidityRatio(Ratio),
    RelativeHumidity(Ratio),
    SteamMassFlow(MassRate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumidificationMode {
    HumidityRatio,
    RelativeHumidity,
    SteamMassFlow,
}

impl HumidificationTarget {
    #[must_use]
    pub fn mode(&self) -> HumidificationMode {
        match self {
            Self::HumidityRatio(_) => HumidificationMode::HumidityRatio,
            Self::RelativeHumidity(_) => HumidificationMode::RelativeHumidity,
            Self::SteamMassFlow(_) => HumidificationMode::SteamMassFlow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumidificationResult {
    pub process_type: ProcessType,
    pub mode: HumidificationMode,
    pub inlet: FlowOfHumidAir,
    pub outlet: FlowOfHumidAir,
    pub steam: FlowOfWaterVapour,
}

/// A steam humidifier.
///
/// Steam at [`Humidification::steam_temperature`] and the inlet pressure is
/// mixed into the stream: `ṁ_s = ṁ_da·(x₂ − x₁)` and
/// `h₂ = h₁ + (x₂ − x₁)·h_s`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Humidification {
    steam_temperature: ThermodynamicTemperature,
    config: InverseConfig,
}

impl Default for Humidification {
    fn default() -> Self {
        Self {
            steam_temperature: ThermodynamicTemperature::new::<degree_celsius>(100.0),
            config: InverseConfig::default(),
        }
    }
}

impl Humidification {
    /// Creates a humidifier injecting steam at the given temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfRange`] if the temperature is outside the
    /// gas temperature limits.
    pub fn new(steam_temperature: ThermodynamicTemperature) -> Result<Self, PropertyError> {
        Ok(Self {
            steam_temperature: check_gas_temperature(steam_temperature)?,
            config: InverseConfig::default(),
        })
    }

    #[must_use]
    pub fn with_config(self, config: InverseConfig) -> Self {
        Self { config, ..self }
    }

    #[must_use]
    pub fn steam_temperature(&self) -> ThermodynamicTemperature {
        self.steam_temperature
    }

    /// Humidifies `inlet` to reach `target`.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::Unreachable`] if the target would remove
    /// moisture, [`ProcessError::Supersaturated`] if the outlet would hold
    /// more moisture than saturated air, and [`ProcessError::Property`] for
    /// invalid inputs or failed solves.
    pub fn process(
        &self,
        inlet: &FlowOfHumidAir,
        target: HumidificationTarget,
    ) -> Result<HumidificationResult, ProcessError> {
        let mode = target.mode();
        let air = inlet.fluid();
        let steam = WaterVapour::new(air.pressure(), self.steam_temperature)?;

        let Some(humidity_ratio) = self.outlet_humidity_ratio(inlet, &steam, target)? else {
            trace!(?mode, "humidification target already met by inlet");
            return Ok(HumidificationResult {
                process_type: ProcessType::Humidification,
                mode,
                inlet: *inlet,
                outlet: *inlet,
                steam: FlowOfWaterVapour::from_mass_flow(
                    steam,
                    MassRate::new::<kilogram_per_second>(0.0),
                )?,
            });
        };

        let outlet = self.mix(air, &steam, humidity_ratio)?;
        let dry_air = inlet.dry_air_mass_flow();
        let steam_flow = dry_air * (humidity_ratio - air.humidity_ratio()).get::<ratio>();

        debug!(
            ?mode,
            outlet_temperature = outlet.temperature().get::<degree_celsius>(),
            steam = steam_flow.get::<kilogram_per_second>(),
            "humidification solved"
        );

        Ok(HumidificationResult {
            process_type: ProcessType::Humidification,
            mode,
            inlet: *inlet,
            outlet: FlowOfHumidAir::from_dry_air_mass_flow(outlet, dry_air)?,
            steam: FlowOfWaterVapour::from_mass_flow(steam, steam_flow)?,
        })
    }

    /// Returns the outlet state after raising the humidity ratio to `humidity_ratio`.
    fn mix(
        &self,
        air: &HumidAir,
        steam: &WaterVapour,
        humidity_ratio: Ratio,
    ) -> Result<HumidAir, ProcessError> {
        let added = (humidity_ratio - air.humidity_ratio()).get::<ratio>();
        let enthalpy = air.enthalpy() + steam.enthalpy() * added;
        let temperature =
            inverse::temperature_from_enthalpy(enthalpy, humidity_ratio, &self.config)?;

        let limit = humid_air::max_humidity_ratio(air.pressure(), temperature);
        if humidity_ratio > limit {
            return Err(ProcessError::Supersaturated {
                humidity_ratio: humidity_ratio.get::<ratio>(),
                limit: limit.get::<ratio>(),
            });
        }

        Ok(HumidAir::from_humidity_ratio(
            air.pressure(),
            temperature,
            humidity_ratio,
        )?)
    }

    /// Resolves the target to an outlet humidity ratio, or `None` if the inlet
    /// already meets it.
    fn outlet_humidity_ratio(
        &self,
        inlet: &FlowOfHumidAir,
        steam: &WaterVapour,
        target: HumidificationTarget,
    ) -> Result<Option<Ratio>, ProcessError> {
        let air = inlet.fluid();
        let x_in = air.humidity_ratio();

        match target {
            HumidificationTarget::HumidityRatio(humidity_ratio) => {
                check_range(
                    "humidity ratio",
                    humidity_ratio.get::<ratio>(),
                    0.0,
                    f64::INFINITY,
                    "kg/kg",
                )?;
                if humidity_ratio == x_in {
                    return Ok(None);
                }
                if humidity_ratio < x_in {
                    return Err(ProcessError::unreachable(
                        "humidification cannot remove moisture",
                        humidity_ratio.get::<ratio>(),
                        x_in.get::<ratio>(),
                    ));
                }
                Ok(Some(humidity_ratio))
            }

            HumidificationTarget::SteamMassFlow(steam_flow) => {
                let steam_flow = check_mass_flow("steam mass flow", steam_flow)?;
                if steam_flow.get::<kilogram_per_second>() == 0.0 {
                    return Ok(None);
                }
                let dry_air = inlet.dry_air_mass_flow();
                if dry_air.get::<kilogram_per_second>() == 0.0 {
                    return Err(ProcessError::unreachable(
                        "no dry air to carry the steam",
                        steam_flow.get::<kilogram_per_second>(),
                        0.0,
                    ));
                }
                let added = steam_flow.get::<kilogram_per_second>()
                    / dry_air.get::<kilogram_per_second>();
                Ok(Some(x_in + Ratio::new::<ratio>(added)))
            }

            HumidificationTarget::RelativeHumidity(relative_humidity) => {
                let relative_humidity = check_relative_humidity(relative_humidity)?;
                if relative_humidity == air.relative_humidity() {
                    return Ok(None);
                }
                if relative_humidity < air.relative_humidity() {
                    return Err(ProcessError::unreachable(
                        "humidification cannot lower relative humidity",
                        relative_humidity.get::<percent>(),
                        air.relative_humidity().get::<percent>(),
                    ));
                }

                // Steam warms the air slightly, so search up to saturation at a
                // point above the inlet temperature.
                let warmer = air.temperature() + TemperatureInterval::new::<delta_kelvin>(20.0);
                let ceiling = humid_air::max_humidity_ratio(air.pressure(), warmer);
                let x_max = if ceiling.get::<ratio>().is_finite() {
                    ceiling.get::<ratio>()
                } else {
                    1.0
                };

                let model = SteamedRelativeHumidity {
                    air,
                    steam,
                    config: &self.config,
                };
                let highest = model.call(&Ratio::new::<ratio>(x_max))?;
                if relative_humidity > highest {
                    return Err(ProcessError::unreachable(
                        "relative humidity beyond what steam can reach",
                        relative_humidity.get::<percent>(),
                        highest.get::<percent>(),
                    ));
                }

                const CONTEXT: &str = "humidity ratio at relative humidity";
                let solution = bisection::solve(
                    &model,
                    &TargetProblem::over_humidity_ratio(relative_humidity),
                    [x_in.get::<ratio>(), x_max],
                    &self.config.humidity_bisection(),
                    |event: &bisection::Event<'_, _, _>| {
                        // Enthalpy beyond the temperature limit means too much steam.
                        if event.result().is_err() {
                            return Some(bisection::Action::assume_positive());
                        }
                        None
                    },
                )
                .map_err(|error| inverse::solver_error::<ProcessError>(CONTEXT, error))?;

                inverse::ensure_converged(CONTEXT, &solution.status, solution.x, solution.iters)?;
                Ok(Some(Ratio::new::<ratio>(solution.x)))
            }
        }
    }
}

/// Outlet relative humidity as a function of outlet humidity ratio.
///
/// Supersaturated outlets report a relative humidity above one rather than
/// failing, so the search can bracket saturation.
struct SteamedRelativeHumidity<'a> {
    air: &'a HumidAir,
    steam: &'a WaterVapour,
    config: &'a InverseConfig,
}

impl Model for SteamedRelativeHumidity<'_> {
    type Input = Ratio;
    type Output = Ratio;
    type Error = PropertyError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let added = (*input - self.air.humidity_ratio()).get::<ratio>();
        let enthalpy = self.air.enthalpy() + self.steam.enthalpy() * added;
        let temperature = inverse::temperature_from_enthalpy(enthalpy, *input, self.config)?;
        Ok(humid_air::relative_humidity(
            self.air.pressure(),
            temperature,
            *input,
        ))
    }
}

impl Model for Humidification {
    type Input = ProcessInput<HumidificationTarget>;
    type Output = HumidificationResult;
    type Error = ProcessError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.process(&input.inlet, input.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Pressure, pressure::pascal};

    use crate::support::thermo::ErrorKind;

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    /// Heated winter air: 20 °C, 15 %, 101.325 kPa, 1.5 kg/s of dry air.
    fn dry_inlet() -> FlowOfHumidAir {
        let air = HumidAir::from_relative_humidity(
            Pressure::new::<pascal>(101_325.0),
            celsius(20.0),
            Ratio::new::<percent>(15.0),
        )
        .unwrap();
        FlowOfHumidAir::from_dry_air_mass_flow(air, MassRate::new::<kilogram_per_second>(1.5))
            .unwrap()
    }

    #[test]
    fn steam_balance_for_humidity_ratio_target() {
        let inlet = dry_inlet();
        let x_in = inlet.fluid().humidity_ratio().get::<ratio>();
        let result = Humidification::default()
            .process(&inlet, HumidificationTarget::HumidityRatio(Ratio::new::<ratio>(0.007)))
            .unwrap();

        assert_relative_eq!(
            result.steam.mass_flow().get::<kilogram_per_second>(),
            1.5 * (0.007 - x_in),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            result.outlet.dry_air_mass_flow().get::<kilogram_per_second>(),
            1.5,
            max_relative = 1e-12
        );

        let steam_enthalpy = result.steam.fluid().enthalpy().value;
        assert_relative_eq!(
            result.outlet.fluid().enthalpy().value,
            inlet.fluid().enthalpy().value + (0.007 - x_in) * steam_enthalpy,
            max_relative = 1e-9
        );

        // Steam at 100 °C warms the stream slightly.
        assert!(result.outlet.fluid().temperature() > celsius(20.0));
    }

    #[test]
    fn steam_flow_target_matches_humidity_ratio_target() {
        let inlet = dry_inlet();
        let humidifier = Humidification::default();
        let by_ratio = humidifier
            .process(&inlet, HumidificationTarget::HumidityRatio(Ratio::new::<ratio>(0.006)))
            .unwrap();
        let by_steam = humidifier
            .process(&inlet, HumidificationTarget::SteamMassFlow(by_ratio.steam.mass_flow()))
            .unwrap();

        assert_relative_eq!(
            by_steam.outlet.fluid().humidity_ratio().get::<ratio>(),
            0.006,
            max_relative = 1e-12
        );
    }

    #[test]
    fn relative_humidity_target() {
        let result = Humidification::default()
            .process(
                &dry_inlet(),
                HumidificationTarget::RelativeHumidity(Ratio::new::<percent>(45.0)),
            )
            .unwrap();

        assert_relative_eq!(
            result.outlet.fluid().relative_humidity().get::<percent>(),
            45.0,
            max_relative = 1e-6
        );
    }

    #[test]
    fn met_target_injects_no_steam() {
        let inlet = dry_inlet();
        let result = Humidification::default()
            .process(&inlet, HumidificationTarget::SteamMassFlow(MassRate::new::<kilogram_per_second>(0.0)))
            .unwrap();
        assert_eq!(result.outlet, inlet);
        assert_relative_eq!(result.steam.mass_flow().get::<kilogram_per_second>(), 0.0);
    }

    #[test]
    fn rejects_drying_and_oversaturation() {
        let inlet = dry_inlet();
        let humidifier = Humidification::default();

        let drying = humidifier
            .process(&inlet, HumidificationTarget::HumidityRatio(Ratio::new::<ratio>(0.001)))
            .unwrap_err();
        assert!(matches!(drying, ProcessError::Unreachable { .. }));

        let soaked = humidifier
            .process(&inlet, HumidificationTarget::HumidityRatio(Ratio::new::<ratio>(0.05)))
            .unwrap_err();
        assert!(matches!(soaked, ProcessError::Supersaturated { .. }));

        let negative = humidifier
            .process(
                &inlet,
                HumidificationTarget::SteamMassFlow(MassRate::new::<kilogram_per_second>(-0.1)),
            )
            .unwrap_err();
        assert_eq!(negative.kind(), ErrorKind::Argument);
    }
}
