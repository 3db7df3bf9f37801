use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Ratio, TemperatureInterval},
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
};

/// Residual tolerance shared by every inverse solve, in the residual's SI unit.
const RESIDUAL_TOL: f64 = 1e-12;

/// Solver configuration for inverse property lookups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseConfig {
    /// Maximum iteration count for each bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance when the search variable is a temperature.
    pub temp_tol: TemperatureInterval,

    /// Absolute tolerance when the search variable is a humidity ratio.
    pub humidity_tol: Ratio,
}

impl Default for InverseConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
            humidity_tol: Ratio::new::<ratio>(1e-12),
        }
    }
}

impl InverseConfig {
    /// Bisection settings for a search over temperature in kelvin.
    pub(crate) fn temperature_bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: RESIDUAL_TOL,
        }
    }

    /// Bisection settings for a search over humidity ratio.
    pub(crate) fn humidity_bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.humidity_tol.get::<ratio>(),
            x_rel_tol: 0.0,
            residual_tol: RESIDUAL_TOL,
        }
    }
}
