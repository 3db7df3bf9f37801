//! Bounded inverse property lookups.
//!
//! Forward correlations give properties from temperature. The lookups here run
//! them backwards by bisection over a fixed bracket, so every call either
//! converges within [`InverseConfig::max_iters`] or fails with
//! [`PropertyError::Computation`].

mod config;
mod problem;

pub use config::InverseConfig;

pub(crate) use problem::TargetProblem;

use std::error::Error as StdError;

use tracing::warn;
use twine_solvers::equation::bisection;
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{Pressure, Ratio, TemperatureInterval, ThermodynamicTemperature},
    pressure::pascal,
    ratio::percent,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::SpecificEnthalpy;

use super::{
    PropertyError,
    correlation::{humid_air, saturation::saturation_pressure},
    limits::{check_range, gas_temperature_max, gas_temperature_min},
};

use problem::{EnthalpyAt, RelativeHumidityAt, SaturationPressureAt, WetBulbBalance};

/// Returns the temperature at which humid air of the given humidity ratio has
/// the given specific enthalpy (per kilogram of dry air).
///
/// # Errors
///
/// Returns [`PropertyError::OutOfRange`] if the enthalpy lies outside the values
/// reachable within the gas temperature limits, or
/// [`PropertyError::Computation`] if the solve does not converge.
pub fn temperature_from_enthalpy(
    enthalpy: SpecificEnthalpy,
    humidity_ratio: Ratio,
    config: &InverseConfig,
) -> Result<ThermodynamicTemperature, PropertyError> {
    const CONTEXT: &str = "temperature from enthalpy";

    let [low, high] =
        gas_bracket().map(|t| humid_air::specific_enthalpy(t, humidity_ratio));
    check_range(
        "specific enthalpy",
        enthalpy.get::<joule_per_kilogram>(),
        low.get::<joule_per_kilogram>(),
        high.get::<joule_per_kilogram>(),
        "J/kg",
    )?;

    let solution = bisection::solve(
        &EnthalpyAt { humidity_ratio },
        &TargetProblem::over_temperature(enthalpy),
        kelvin_bracket(gas_bracket()),
        &config.temperature_bisection(),
        |_: &bisection::Event<'_, _, _>| -> Option<bisection::Action> { None },
    )
    .map_err(|error| solver_error::<PropertyError>(CONTEXT, error))?;

    ensure_converged(CONTEXT, &solution.status, solution.x, solution.iters)?;
    Ok(ThermodynamicTemperature::new::<kelvin>(solution.x))
}

/// Returns the temperature at which water vapour at the given partial pressure saturates.
///
/// # Errors
///
/// Returns [`PropertyError::OutOfRange`] if the vapour pressure lies outside the
/// saturation pressures spanned by the gas temperature limits (dry air has no
/// dew point), or [`PropertyError::Computation`] if the solve does not converge.
pub fn dew_point(
    vapour_pressure: Pressure,
    config: &InverseConfig,
) -> Result<ThermodynamicTemperature, PropertyError> {
    const CONTEXT: &str = "dew point";

    let [low, high] = gas_bracket().map(saturation_pressure);
    check_range(
        "vapour pressure",
        vapour_pressure.get::<pascal>(),
        low.get::<pascal>(),
        high.get::<pascal>(),
        "Pa",
    )?;

    let solution = bisection::solve(
        &SaturationPressureAt,
        &TargetProblem::over_temperature(vapour_pressure),
        kelvin_bracket(gas_bracket()),
        &config.temperature_bisection(),
        |_: &bisection::Event<'_, _, _>| -> Option<bisection::Action> { None },
    )
    .map_err(|error| solver_error::<PropertyError>(CONTEXT, error))?;

    ensure_converged(CONTEXT, &solution.status, solution.x, solution.iters)?;
    Ok(ThermodynamicTemperature::new::<kelvin>(solution.x))
}

/// Returns the temperature within `bracket` at which air of fixed pressure and
/// humidity ratio reaches `target` relative humidity.
///
/// Relative humidity falls as temperature rises, so the target must lie
/// between its values at the upper and lower bracket ends.
///
/// # Errors
///
/// Returns [`PropertyError::OutOfRange`] if the target is not bracketed, or
/// [`PropertyError::Computation`] if the solve does not converge.
pub fn temperature_at_relative_humidity(
    pressure: Pressure,
    humidity_ratio: Ratio,
    target: Ratio,
    bracket: [ThermodynamicTemperature; 2],
    config: &InverseConfig,
) -> Result<ThermodynamicTemperature, PropertyError> {
    const CONTEXT: &str = "temperature at relative humidity";

    let [at_low, at_high] =
        bracket.map(|t| humid_air::relative_humidity(pressure, t, humidity_ratio));
    check_range(
        "relative humidity",
        target.get::<percent>(),
        at_high.get::<percent>(),
        at_low.get::<percent>(),
        "%",
    )?;

    let solution = bisection::solve(
        &RelativeHumidityAt {
            pressure,
            humidity_ratio,
        },
        &TargetProblem::over_temperature(target),
        kelvin_bracket(bracket),
        &config.temperature_bisection(),
        |_: &bisection::Event<'_, _, _>| -> Option<bisection::Action> { None },
    )
    .map_err(|error| solver_error::<PropertyError>(CONTEXT, error))?;

    ensure_converged(CONTEXT, &solution.status, solution.x, solution.iters)?;
    Ok(ThermodynamicTemperature::new::<kelvin>(solution.x))
}

/// Returns the thermodynamic wet-bulb temperature of humid air.
///
/// Solves the adiabatic saturation balance between the lower gas temperature
/// limit and the dry-bulb temperature, capped just below the boiling point
/// at `pressure` for air hotter than that.
///
/// # Errors
///
/// Returns [`PropertyError::Computation`] if a solve does not converge.
pub fn wet_bulb(
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
    humidity_ratio: Ratio,
    config: &InverseConfig,
) -> Result<ThermodynamicTemperature, PropertyError> {
    const CONTEXT: &str = "wet-bulb temperature";

    let model = WetBulbBalance {
        pressure,
        enthalpy: humid_air::specific_enthalpy(temperature, humidity_ratio),
        humidity_ratio,
    };

    let upper = if saturation_pressure(temperature) < pressure {
        temperature
    } else {
        dew_point(pressure, config)? - TemperatureInterval::new::<delta_kelvin>(1e-3)
    };

    let solution = bisection::solve(
        &model,
        &TargetProblem::over_temperature(SpecificEnthalpy::new::<joule_per_kilogram>(0.0)),
        kelvin_bracket([gas_temperature_min(), upper]),
        &config.temperature_bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Candidates that boil at this pressure sit above the root.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )
    .map_err(|error| solver_error::<PropertyError>(CONTEXT, error))?;

    ensure_converged(CONTEXT, &solution.status, solution.x, solution.iters)?;
    Ok(ThermodynamicTemperature::new::<kelvin>(solution.x))
}

fn gas_bracket() -> [ThermodynamicTemperature; 2] {
    [gas_temperature_min(), gas_temperature_max()]
}

fn kelvin_bracket(bracket: [ThermodynamicTemperature; 2]) -> [f64; 2] {
    bracket.map(|t| t.get::<kelvin>())
}

/// Maps a failed bisection onto the caller's error type.
///
/// Model failures come back as the error the model raised. A rejected bracket
/// or configuration becomes [`PropertyError::SolverSetup`], and the remaining
/// solver failures become [`PropertyError::Computation`].
pub(crate) fn solver_error<E>(context: &str, error: bisection::Error) -> E
where
    E: StdError + From<PropertyError> + 'static,
{
    let setup = |reason: String| PropertyError::SolverSetup {
        context: context.to_owned(),
        reason,
    };

    match error {
        bisection::Error::Model(source) => match source.downcast::<E>() {
            Ok(error) => *error,
            Err(source) => match source.downcast::<PropertyError>() {
                Ok(error) => E::from(*error),
                Err(source) => E::from(PropertyError::Computation {
                    context: format!("{context}: {source}"),
                    last_iterate: f64::NAN,
                    iterations: 0,
                }),
            },
        },
        bisection::Error::InvalidBracket(reason) => E::from(setup(format!("invalid bracket: {reason}"))),
        bisection::Error::InvalidConfig(reason) => E::from(setup(format!("invalid config: {reason}"))),
        error @ (bisection::Error::NoSuccessfulEvaluation | bisection::Error::Problem(_)) => {
            E::from(PropertyError::Computation {
                context: format!("{context}: {error}"),
                last_iterate: f64::NAN,
                iterations: 0,
            })
        }
    }
}

/// Fails unless the bisection status reports convergence.
pub(crate) fn ensure_converged(
    context: &str,
    status: &bisection::Status,
    last_iterate: f64,
    iterations: usize,
) -> Result<(), PropertyError> {
    if *status == bisection::Status::Converged {
        return Ok(());
    }

    warn!(
        context,
        last_iterate, iterations, "inverse solve stopped before converging"
    );
    Err(PropertyError::Computation {
        context: context.to_owned(),
        last_iterate,
        iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{ratio::ratio, thermodynamic_temperature::degree_celsius};

    use crate::support::thermo::ErrorKind;

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    fn atm() -> Pressure {
        Pressure::new::<pascal>(101_325.0)
    }

    fn half_saturated(t: f64) -> Ratio {
        humid_air::humidity_ratio(atm(), saturation_pressure(celsius(t)) * 0.5)
    }

    #[test]
    fn enthalpy_inverts_to_temperature() {
        let x = half_saturated(25.0);
        let h = humid_air::specific_enthalpy(celsius(25.0), x);

        let t = temperature_from_enthalpy(h, x, &InverseConfig::default()).unwrap();
        assert_relative_eq!(t.get::<degree_celsius>(), 25.0, epsilon = 1e-8);
    }

    #[test]
    fn unreachable_enthalpy_is_an_argument_error() {
        let h = SpecificEnthalpy::new::<joule_per_kilogram>(5.0e6);
        let error = temperature_from_enthalpy(h, Ratio::new::<ratio>(0.01), &InverseConfig::default())
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Argument);
    }

    #[test]
    fn dew_point_saturates_at_vapour_pressure() {
        let p_v = saturation_pressure(celsius(25.0)) * 0.5;

        let t_dp = dew_point(p_v, &InverseConfig::default()).unwrap();
        assert!((13.8..13.95).contains(&t_dp.get::<degree_celsius>()));
        assert_relative_eq!(
            saturation_pressure(t_dp).get::<pascal>(),
            p_v.get::<pascal>(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn dry_air_has_no_dew_point() {
        let error = dew_point(Pressure::new::<pascal>(0.0), &InverseConfig::default()).unwrap_err();
        assert!(matches!(error, PropertyError::OutOfRange { name: "vapour pressure", .. }));
    }

    #[test]
    fn relative_humidity_target_within_bracket() {
        let x = half_saturated(25.0);
        let target = Ratio::new::<percent>(20.0);

        let t = temperature_at_relative_humidity(
            atm(),
            x,
            target,
            [celsius(25.0), gas_temperature_max()],
            &InverseConfig::default(),
        )
        .unwrap();

        assert!(t > celsius(25.0));
        assert_relative_eq!(
            humid_air::relative_humidity(atm(), t, x).get::<percent>(),
            20.0,
            max_relative = 1e-8
        );
    }

    #[test]
    fn relative_humidity_outside_bracket_is_rejected() {
        let error = temperature_at_relative_humidity(
            atm(),
            half_saturated(25.0),
            Ratio::new::<percent>(80.0),
            [celsius(25.0), gas_temperature_max()],
            &InverseConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(error, PropertyError::OutOfRange { name: "relative humidity", .. }));
    }

    #[test]
    fn wet_bulb_at_room_conditions() {
        let t_wb = wet_bulb(atm(), celsius(25.0), half_saturated(25.0), &InverseConfig::default())
            .unwrap();
        assert!((17.6..18.2).contains(&t_wb.get::<degree_celsius>()));
    }

    #[test]
    fn saturated_air_wet_bulb_equals_dry_bulb() {
        let x = humid_air::max_humidity_ratio(atm(), celsius(20.0));
        let t_wb = wet_bulb(atm(), celsius(20.0), x, &InverseConfig::default()).unwrap();
        assert_relative_eq!(t_wb.get::<degree_celsius>(), 20.0, epsilon = 1e-6);
    }

    #[test]
    fn wet_bulb_below_freezing_uses_ice() {
        let x = humid_air::humidity_ratio(atm(), saturation_pressure(celsius(-5.0)) * 0.5);
        let t_wb = wet_bulb(atm(), celsius(-5.0), x, &InverseConfig::default()).unwrap();
        assert!(t_wb < celsius(-5.0));
        assert!(t_wb > celsius(-10.0));
    }

    #[test]
    fn hot_air_wet_bulb_stays_below_boiling() {
        let x = Ratio::new::<ratio>(0.01);
        let t_wb = wet_bulb(atm(), celsius(150.0), x, &InverseConfig::default()).unwrap();
        assert!(t_wb < celsius(100.0));
    }

    #[test]
    fn exhausted_iterations_are_a_computation_error() {
        let config = InverseConfig {
            max_iters: 3,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-12),
            ..InverseConfig::default()
        };
        let x = half_saturated(25.0);
        let h = humid_air::specific_enthalpy(celsius(25.0), x);

        let error = temperature_from_enthalpy(h, x, &config).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Computation);
    }

    #[test]
    fn model_failures_keep_their_own_error() {
        let raised = PropertyError::InvalidState {
            context: "liquid water above boiling".to_owned(),
            value: 120.0,
            limit: 100.0,
        };
        let error: PropertyError =
            solver_error("dew point", bisection::Error::Model(Box::new(raised.clone())));
        assert_eq!(error, raised);
        assert_eq!(error.kind(), ErrorKind::Argument);
    }

    #[test]
    fn rejected_bracket_is_reported_as_setup() {
        let error: PropertyError =
            solver_error("dew point", bisection::Error::InvalidBracket(bisection::BracketError::ZeroWidth));
        assert!(matches!(error, PropertyError::SolverSetup { .. }));
        assert!(error.to_string().contains("zero width"));
        assert_eq!(error.kind(), ErrorKind::Argument);
    }

    #[test]
    fn unrecovered_failures_stay_computation_errors() {
        let error: PropertyError = solver_error("dew point", bisection::Error::NoSuccessfulEvaluation);
        assert_eq!(error.kind(), ErrorKind::Computation);
    }
}
