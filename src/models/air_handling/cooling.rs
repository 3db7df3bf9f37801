//! Cooling and dehumidification across a coil.

mod coil;

pub use coil::CoolingCoil;

use tracing::{debug, trace};
use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Power, Ratio, ThermodynamicTemperature},
    power::watt,
    ratio::{percent, ratio},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::support::{
    constraint::{Constrained, UnitInterval},
    flow::{FlowOfHumidAir, FlowOfLiquidWater},
    heat_flow::HeatFlow,
    thermo::{
        capability::ThermoState,
        correlation::humid_air,
        inverse::{self, InverseConfig, TargetProblem},
        limits::{check_range, check_relative_humidity},
    },
    units::TemperatureDifference,
};

use super::{ProcessError, ProcessInput, ProcessType};

use coil::{CoilHeatRemoved, CoilOutlet, CoilRelativeHumidity};

/// What the coil should achieve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoolingTarget {
    /// Outlet temperature, between the apparatus dew point and the inlet.
    Temperature(ThermodynamicTemperature),
    /// Outlet relative humidity.
    RelativeHumidity(Ratio),
    /// Outlet humidity ratio (dehumidification).
    HumidityRatio(Ratio),
    /// Heat removed from the stream, as a positive quantity.
    Heat(Power),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoolingMode {
    Temperature,
    RelativeHumidity,
    HumidityRatio,
    Heat,
}

impl CoolingTarget {
    #[must_use]
    pub fn mode(&self) -> CoolingMode {
        match self {
            Self::Temperature(_) => CoolingMode::Temperature,
            Self::RelativeHumidity(_) => CoolingMode::RelativeHumidity,
            Self::HumidityRatio(_) => CoolingMode::HumidityRatio,
            Self::Heat(_) => CoolingMode::Heat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingResult {
    pub process_type: ProcessType,
    pub mode: CoolingMode,
    pub inlet: FlowOfHumidAir,
    pub outlet: FlowOfHumidAir,
    /// Heat exchanged with the coil, normally [`HeatFlow::Out`].
    pub heat: HeatFlow,
    /// Condensed water leaving at the apparatus dew point.
    pub condensate: FlowOfLiquidWater,
    pub bypass_factor: Constrained<Ratio, UnitInterval>,
    pub apparatus_dew_point: ThermodynamicTemperature,
}

/// A cooling coil process.
///
/// For an outlet temperature `t₂` the bypass factor is
/// `(t₂ − t_adp) / (t₁ − t_adp)`. When the inlet holds more moisture than
/// saturated air at the ADP the coil is wet and the outlet humidity ratio
/// follows the same line; the excess leaves as condensate. Heat into the
/// stream is `ṁ_da·(h₂ − h₁) + ṁ_c·h_w(t_adp)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cooling {
    coil: CoolingCoil,
    config: InverseConfig,
}

impl Cooling {
    #[must_use]
    pub fn new(coil: CoolingCoil) -> Self {
        Self {
            coil,
            config: InverseConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(coil: CoolingCoil, config: InverseConfig) -> Self {
        Self { coil, config }
    }

    #[must_use]
    pub fn coil(&self) -> &CoolingCoil {
        &self.coil
    }

    /// Cools `inlet` to reach `target`.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::Unreachable`] if the target lies outside what
    /// the coil can deliver between the inlet and the apparatus dew point, and
    /// [`ProcessError::Property`] for invalid inputs or failed solves.
    pub fn process(
        &self,
        inlet: &FlowOfHumidAir,
        target: CoolingTarget,
    ) -> Result<CoolingResult, ProcessError> {
        let mode = target.mode();
        let coil = match self.outlet_temperature(inlet, target)? {
            Some(temperature) => self.coil.outlet(inlet, temperature)?,
            None => {
                trace!(?mode, "cooling target already met by inlet");
                self.coil.bypass(inlet)?
            }
        };

        debug!(
            ?mode,
            outlet_temperature = coil.outlet.fluid().temperature().get::<degree_celsius>(),
            heat = coil.heat.get::<watt>(),
            bypass_factor = coil.bypass_factor.get::<ratio>(),
            "cooling solved"
        );

        self.result(inlet, mode, coil)
    }

    fn result(
        &self,
        inlet: &FlowOfHumidAir,
        mode: CoolingMode,
        coil: CoilOutlet,
    ) -> Result<CoolingResult, ProcessError> {
        Ok(CoolingResult {
            process_type: ProcessType::Cooling,
            mode,
            inlet: *inlet,
            outlet: coil.outlet,
            heat: HeatFlow::from_signed(coil.heat)?,
            condensate: coil.condensate,
            bypass_factor: UnitInterval::new(coil.bypass_factor)?,
            apparatus_dew_point: self.coil.apparatus_dew_point(),
        })
    }

    /// Resolves the target to an outlet temperature, or `None` if the inlet
    /// already meets it.
    fn outlet_temperature(
        &self,
        inlet: &FlowOfHumidAir,
        target: CoolingTarget,
    ) -> Result<Option<ThermodynamicTemperature>, ProcessError> {
        let air = inlet.fluid();
        let t_in = air.temperature();
        let t_adp = self.coil.apparatus_dew_point();

        // Range checks come before reachability.
        match target {
            CoolingTarget::RelativeHumidity(relative_humidity) => {
                check_relative_humidity(relative_humidity)?;
            }
            CoolingTarget::HumidityRatio(humidity_ratio) => {
                check_range("humidity ratio", humidity_ratio.get::<ratio>(), 0.0, f64::INFINITY, "kg/kg")?;
            }
            CoolingTarget::Heat(heat) => {
                check_range("heat", heat.get::<watt>(), 0.0, f64::INFINITY, "W")?;
            }
            CoolingTarget::Temperature(_) => {}
        }

        let already_met = match target {
            CoolingTarget::Temperature(temperature) => temperature == t_in,
            CoolingTarget::RelativeHumidity(relative_humidity) => {
                relative_humidity == air.relative_humidity()
            }
            CoolingTarget::HumidityRatio(humidity_ratio) => humidity_ratio == air.humidity_ratio(),
            CoolingTarget::Heat(heat) => heat.get::<watt>() == 0.0,
        };
        if already_met {
            return Ok(None);
        }

        if t_in <= t_adp {
            return Err(ProcessError::unreachable(
                "inlet temperature at or below apparatus dew point",
                t_in.get::<degree_celsius>(),
                t_adp.get::<degree_celsius>(),
            ));
        }

        match target {
            CoolingTarget::Temperature(temperature) => {
                if temperature > t_in {
                    return Err(ProcessError::unreachable(
                        "cooling target temperature above inlet temperature",
                        temperature.get::<degree_celsius>(),
                        t_in.get::<degree_celsius>(),
                    ));
                }
                if temperature < t_adp {
                    return Err(ProcessError::unreachable(
                        "cooling target temperature below apparatus dew point",
                        temperature.get::<degree_celsius>(),
                        t_adp.get::<degree_celsius>(),
                    ));
                }
                Ok(Some(temperature))
            }

            CoolingTarget::HumidityRatio(humidity_ratio) => {
                let x_in = air.humidity_ratio();
                let x_adp = humid_air::max_humidity_ratio(air.pressure(), t_adp);
                if humidity_ratio > x_in {
                    return Err(ProcessError::unreachable(
                        "cooling cannot add moisture",
                        humidity_ratio.get::<ratio>(),
                        x_in.get::<ratio>(),
                    ));
                }
                if x_in <= x_adp || humidity_ratio < x_adp {
                    return Err(ProcessError::unreachable(
                        "humidity ratio below saturation at apparatus dew point",
                        humidity_ratio.get::<ratio>(),
                        x_adp.get::<ratio>().min(x_in.get::<ratio>()),
                    ));
                }

                let position = (humidity_ratio - x_adp).get::<ratio>() / (x_in - x_adp).get::<ratio>();
                let span = t_in.minus(t_adp).get::<delta_kelvin>();
                Ok(Some(ThermodynamicTemperature::new::<kelvin>(
                    t_adp.get::<kelvin>() + position * span,
                )))
            }

            CoolingTarget::RelativeHumidity(relative_humidity) => {
                let highest = self.coil.outlet(inlet, t_adp)?.outlet.fluid().relative_humidity();
                if relative_humidity < air.relative_humidity() || relative_humidity > highest {
                    return Err(ProcessError::unreachable(
                        "relative humidity outside the range between inlet and apparatus dew point",
                        relative_humidity.get::<percent>(),
                        highest.get::<percent>(),
                    ));
                }

                const CONTEXT: &str = "coil outlet temperature at relative humidity";
                let solution = bisection::solve(
                    &CoilRelativeHumidity {
                        coil: &self.coil,
                        inlet,
                    },
                    &TargetProblem::over_temperature(relative_humidity),
                    [t_adp.get::<kelvin>(), t_in.get::<kelvin>()],
                    &self.config.temperature_bisection(),
                    |_: &bisection::Event<'_, _, _>| -> Option<bisection::Action> { None },
                )
                .map_err(|error| inverse::solver_error::<ProcessError>(CONTEXT, error))?;

                inverse::ensure_converged(CONTEXT, &solution.status, solution.x, solution.iters)?;
                Ok(Some(ThermodynamicTemperature::new::<kelvin>(solution.x)))
            }

            CoolingTarget::Heat(heat) => {
                let capacity = -self.coil.outlet(inlet, t_adp)?.heat;
                if heat > capacity {
                    return Err(ProcessError::unreachable(
                        "heat removed exceeds coil capacity at apparatus dew point",
                        heat.get::<watt>(),
                        capacity.get::<watt>(),
                    ));
                }

                const CONTEXT: &str = "coil outlet temperature at heat removed";
                let solution = bisection::solve(
                    &CoilHeatRemoved {
                        coil: &self.coil,
                        inlet,
                    },
                    &TargetProblem::over_temperature(heat),
                    [t_adp.get::<kelvin>(), t_in.get::<kelvin>()],
                    &self.config.temperature_bisection(),
                    |_: &bisection::Event<'_, _, _>| -> Option<bisection::Action> { None },
                )
                .map_err(|error| inverse::solver_error::<ProcessError>(CONTEXT, error))?;

                inverse::ensure_converged(CONTEXT, &solution.status, solution.x, solution.iters)?;
                Ok(Some(ThermodynamicTemperature::new::<kelvin>(solution.x)))
            }
        }
    }
}

impl Model for Cooling {
    type Input = ProcessInput<CoolingTarget>;
    type Output = CoolingResult;
    type Error = ProcessError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.process(&input.inlet, input.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{MassRate, Pressure},
        mass_rate::kilogram_per_second,
        pressure::pascal,
    };

    use crate::support::thermo::{
        ErrorKind,
        capability::HasEnthalpy,
        correlation::liquid_water,
        fluid::HumidAir,
    };

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    /// Summer outdoor air: 30 °C, 55 %, 101.325 kPa, 2 kg/s of dry air.
    fn summer_inlet() -> FlowOfHumidAir {
        let air = HumidAir::from_relative_humidity(
            Pressure::new::<pascal>(101_325.0),
            celsius(30.0),
            Ratio::new::<percent>(55.0),
        )
        .unwrap();
        FlowOfHumidAir::from_dry_air_mass_flow(air, MassRate::new::<kilogram_per_second>(2.0))
            .unwrap()
    }

    fn chilled_water_coil() -> Cooling {
        Cooling::new(CoolingCoil::from_coolant(celsius(7.0), celsius(12.0)).unwrap())
    }

    #[test]
    fn coolant_mean_sets_apparatus_dew_point() {
        let coil = CoolingCoil::from_coolant(celsius(7.0), celsius(12.0)).unwrap();
        assert_relative_eq!(coil.apparatus_dew_point().get::<degree_celsius>(), 9.5, epsilon = 1e-12);
        assert_relative_eq!(
            CoolingCoil::default().apparatus_dew_point().get::<degree_celsius>(),
            9.5,
            epsilon = 1e-12
        );
        assert!(CoolingCoil::new(celsius(-2.0)).is_err());
    }

    #[test]
    fn wet_coil_condenses_and_balances_energy() {
        let inlet = summer_inlet();
        let result = chilled_water_coil()
            .process(&inlet, CoolingTarget::Temperature(celsius(15.0)))
            .unwrap();

        let bypass_factor = result.bypass_factor.into_inner().get::<ratio>();
        assert_relative_eq!(bypass_factor, (15.0 - 9.5) / (30.0 - 9.5), max_relative = 1e-12);

        let x_in = inlet.fluid().humidity_ratio().get::<ratio>();
        let x_out = result.outlet.fluid().humidity_ratio().get::<ratio>();
        assert!(x_out < x_in);

        let m_da = inlet.dry_air_mass_flow().get::<kilogram_per_second>();
        assert_relative_eq!(
            result.condensate.mass_flow().get::<kilogram_per_second>(),
            m_da * (x_in - x_out),
            max_relative = 1e-12
        );

        let h_w = liquid_water::specific_enthalpy(celsius(9.5)).value;
        let expected = m_da * (result.outlet.fluid().enthalpy().value - inlet.fluid().enthalpy().value)
            + result.condensate.mass_flow().value * h_w;
        assert!(matches!(result.heat, HeatFlow::Out(_)));
        assert_relative_eq!(result.heat.signed().get::<watt>(), expected, max_relative = 1e-12);
    }

    #[test]
    fn dry_coil_keeps_humidity_ratio() {
        let dry = HumidAir::from_relative_humidity(
            Pressure::new::<pascal>(101_325.0),
            celsius(30.0),
            Ratio::new::<percent>(20.0),
        )
        .unwrap();
        let inlet =
            FlowOfHumidAir::from_dry_air_mass_flow(dry, MassRate::new::<kilogram_per_second>(1.0))
                .unwrap();

        let result = chilled_water_coil()
            .process(&inlet, CoolingTarget::Temperature(celsius(20.0)))
            .unwrap();

        assert_eq!(result.outlet.fluid().humidity_ratio(), dry.humidity_ratio());
        assert_relative_eq!(result.condensate.mass_flow().get::<kilogram_per_second>(), 0.0);
    }

    #[test]
    fn humidity_ratio_target_lands_on_bypass_line() {
        let inlet = summer_inlet();
        let x_adp = humid_air::max_humidity_ratio(inlet.fluid().pressure(), celsius(9.5));
        let x_in = inlet.fluid().humidity_ratio();
        let target = x_adp + (x_in - x_adp) * 0.5;

        let result = chilled_water_coil()
            .process(&inlet, CoolingTarget::HumidityRatio(target))
            .unwrap();

        assert_relative_eq!(
            result.outlet.fluid().temperature().get::<degree_celsius>(),
            9.5 + 0.5 * (30.0 - 9.5),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            result.outlet.fluid().humidity_ratio().get::<ratio>(),
            target.get::<ratio>(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn relative_humidity_and_heat_targets_invert_temperature_target() {
        let inlet = summer_inlet();
        let cooling = chilled_water_coil();
        let reference = cooling
            .process(&inlet, CoolingTarget::Temperature(celsius(16.0)))
            .unwrap();

        let by_rh = cooling
            .process(
                &inlet,
                CoolingTarget::RelativeHumidity(reference.outlet.fluid().relative_humidity()),
            )
            .unwrap();
        assert_relative_eq!(
            by_rh.outlet.fluid().temperature().get::<degree_celsius>(),
            16.0,
            epsilon = 1e-6
        );

        let by_heat = cooling
            .process(&inlet, CoolingTarget::Heat(reference.heat.magnitude()))
            .unwrap();
        assert_relative_eq!(
            by_heat.outlet.fluid().temperature().get::<degree_celsius>(),
            16.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn met_target_bypasses_the_coil() {
        let inlet = summer_inlet();
        let result = chilled_water_coil()
            .process(&inlet, CoolingTarget::Temperature(celsius(30.0)))
            .unwrap();

        assert_eq!(result.outlet, inlet);
        assert_eq!(result.heat, HeatFlow::None);
        assert_relative_eq!(result.bypass_factor.into_inner().get::<ratio>(), 1.0);
    }

    #[test]
    fn unreachable_targets() {
        let inlet = summer_inlet();
        let cooling = chilled_water_coil();

        let targets = [
            CoolingTarget::Temperature(celsius(35.0)),
            CoolingTarget::Temperature(celsius(5.0)),
            CoolingTarget::RelativeHumidity(Ratio::new::<percent>(40.0)),
            CoolingTarget::HumidityRatio(Ratio::new::<ratio>(0.03)),
            CoolingTarget::HumidityRatio(Ratio::new::<ratio>(0.001)),
            CoolingTarget::Heat(Power::new::<watt>(1.0e7)),
        ];
        for target in targets {
            let error = cooling.process(&inlet, target).unwrap_err();
            assert!(matches!(error, ProcessError::Unreachable { .. }), "{target:?}: {error}");
        }

        let negative = cooling
            .process(&inlet, CoolingTarget::Heat(Power::new::<watt>(-5.0)))
            .unwrap_err();
        assert_eq!(negative.kind(), ErrorKind::Argument);
        assert!(matches!(negative, ProcessError::Property(_)));
    }
}
