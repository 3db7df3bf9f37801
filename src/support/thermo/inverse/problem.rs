//! Models and residuals for the inverse lookups.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    Dimension, Quantity, SI,
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    pressure::pascal,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    thermo::{
        PropertyError,
        correlation::{humid_air, liquid_water, saturation},
    },
    units::SpecificEnthalpy,
};

/// Drives a scalar model output toward a target value.
///
/// The residual is `output − target` in SI units. The search variable is
/// mapped onto the model input by `input`.
pub(crate) struct TargetProblem<I, D: Dimension + ?Sized> {
    target: Quantity<D, SI<f64>, f64>,
    input: fn(f64) -> I,
}

impl<D: Dimension + ?Sized> TargetProblem<ThermodynamicTemperature, D> {
    /// Searches over temperature in kelvin.
    pub(crate) fn over_temperature(target: Quantity<D, SI<f64>, f64>) -> Self {
        Self {
            target,
            input: ThermodynamicTemperature::new::<kelvin>,
        }
    }
}

impl<D: Dimension + ?Sized> TargetProblem<Ratio, D> {
    /// Searches over a dimensionless humidity ratio.
    pub(crate) fn over_humidity_ratio(target: Quantity<D, SI<f64>, f64>) -> Self {
        Self {
            target,
            input: Ratio::new::<ratio>,
        }
    }
}

impl<I, D: Dimension + ?Sized> EquationProblem<1> for TargetProblem<I, D> {
    type Input = I;
    type Output = Quantity<D, SI<f64>, f64>;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok((self.input)(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.value - self.target.value])
    }
}

/// Humid-air enthalpy at a fixed humidity ratio.
pub(super) struct EnthalpyAt {
    pub(super) humidity_ratio: Ratio,
}

impl Model for EnthalpyAt {
    type Input = ThermodynamicTemperature;
    type Output = SpecificEnthalpy;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(humid_air::specific_enthalpy(*input, self.humidity_ratio))
    }
}

pub(super) struct SaturationPressureAt;

impl Model for SaturationPressureAt {
    type Input = ThermodynamicTemperature;
    type Output = Pressure;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(saturation::saturation_pressure(*input))
    }
}

/// Relative humidity at fixed pressure and humidity ratio.
pub(super) struct RelativeHumidityAt {
    pub(super) pressure: Pressure,
    pub(super) humidity_ratio: Ratio,
}

impl Model for RelativeHumidityAt {
    type Input = ThermodynamicTemperature;
    type Output = Ratio;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(humid_air::relative_humidity(
            self.pressure,
            *input,
            self.humidity_ratio,
        ))
    }
}

/// Adiabatic saturation energy balance at a candidate wet-bulb temperature.
///
/// Evaluates `h(t_wb, x_s) − h₁ − (x_s − x₁)·h_w(t_wb)`, which vanishes at the
/// wet-bulb temperature. The condensed phase is ice below 0 °C.
pub(super) struct WetBulbBalance {
    pub(super) pressure: Pressure,
    pub(super) enthalpy: SpecificEnthalpy,
    pub(super) humidity_ratio: Ratio,
}

impl Model for WetBulbBalance {
    type Input = ThermodynamicTemperature;
    type Output = SpecificEnthalpy;
    type Error = PropertyError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let saturated = humid_air::max_humidity_ratio(self.pressure, *input);
        if !saturated.get::<ratio>().is_finite() {
            return Err(PropertyError::InvalidState {
                context: "saturation pressure exceeds total pressure".into(),
                value: input.get::<kelvin>(),
                limit: self.pressure.get::<pascal>(),
            });
        }

        let added_water = (saturated - self.humidity_ratio).get::<ratio>();
        Ok(humid_air::specific_enthalpy(*input, saturated)
            - self.enthalpy
            - liquid_water::condensed_enthalpy(*input) * added_water)
    }
}
