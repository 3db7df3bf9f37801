use twine_core::Model;
use uom::si::{
    f64::{MassRate, Power, Ratio, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    power::watt,
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::support::{
    flow::{FlowOfHumidAir, FlowOfLiquidWater},
    thermo::{
        PropertyError,
        capability::{HasEnthalpy, ThermoState},
        correlation::humid_air,
        fluid::{HumidAir, LiquidWater},
        limits::{GAS_TEMPERATURE_MAX, LIQUID_TEMPERATURE_MIN, check_range},
    },
    units::TemperatureDifference,
};

use crate::models::air_handling::ProcessError;

/// A cooling coil characterised by its apparatus dew point (ADP).
///
/// The ADP is the effective coil surface temperature. Air leaving the coil
/// lies on the straight line between the inlet state and saturated air at the
/// ADP, and the bypass factor is its position along that line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingCoil {
    apparatus_dew_point: ThermodynamicTemperature,
}

impl CoolingCoil {
    /// Creates a coil with the given apparatus dew point.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfRange`] if the dew point is below 0 °C
    /// (a frosting coil) or above the gas temperature limit.
    pub fn new(apparatus_dew_point: ThermodynamicTemperature) -> Result<Self, PropertyError> {
        check_range(
            "apparatus dew point",
            apparatus_dew_point.get::<degree_celsius>(),
            LIQUID_TEMPERATURE_MIN,
            GAS_TEMPERATURE_MAX,
            "°C",
        )?;
        Ok(Self {
            apparatus_dew_point,
        })
    }

    /// Creates a coil whose apparatus dew point is the mean coolant temperature.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`CoolingCoil::new`].
    pub fn from_coolant(
        supply: ThermodynamicTemperature,
        return_: ThermodynamicTemperature,
    ) -> Result<Self, PropertyError> {
        let mean = 0.5 * (supply.get::<kelvin>() + return_.get::<kelvin>());
        Self::new(ThermodynamicTemperature::new::<kelvin>(mean))
    }

    #[must_use]
    pub fn apparatus_dew_point(&self) -> ThermodynamicTemperature {
        self.apparatus_dew_point
    }

    /// Evaluates the coil for an outlet temperature between the ADP and the inlet.
    pub(super) fn outlet(
        &self,
        inlet: &FlowOfHumidAir,
        temperature: ThermodynamicTemperature,
    ) -> Result<CoilOutlet, ProcessError> {
        let air = inlet.fluid();
        let pressure = air.pressure();
        let t_adp = self.apparatus_dew_point;

        let bypass_factor = Ratio::new::<ratio>(
            temperature.minus(t_adp).get::<delta_kelvin>()
                / air.temperature().minus(t_adp).get::<delta_kelvin>(),
        );

        let x_in = air.humidity_ratio();
        let x_adp = humid_air::max_humidity_ratio(pressure, t_adp);
        let x_out = if x_in > x_adp {
            x_adp + (x_in - x_adp) * bypass_factor.get::<ratio>()
        } else {
            x_in
        };
        let x_saturated = humid_air::max_humidity_ratio(pressure, temperature);
        let x_out = if x_out > x_saturated { x_saturated } else { x_out };

        let outlet = HumidAir::from_humidity_ratio(pressure, temperature, x_out)?;

        let dry_air = inlet.dry_air_mass_flow();
        let condensate = FlowOfLiquidWater::from_mass_flow(
            LiquidWater::new(pressure, t_adp)?,
            dry_air * (x_in - x_out).get::<ratio>().max(0.0),
        )?;

        let heat = dry_air * (outlet.enthalpy() - air.enthalpy())
            + condensate.mass_flow() * condensate.fluid().enthalpy();

        Ok(CoilOutlet {
            outlet: FlowOfHumidAir::from_dry_air_mass_flow(outlet, dry_air)?,
            condensate,
            bypass_factor,
            heat,
        })
    }

    /// Returns a coil outlet that leaves the inlet untouched.
    pub(super) fn bypass(&self, inlet: &FlowOfHumidAir) -> Result<CoilOutlet, ProcessError> {
        let condensate = FlowOfLiquidWater::from_mass_flow(
            LiquidWater::new(inlet.fluid().pressure(), self.apparatus_dew_point)?,
            MassRate::new::<kilogram_per_second>(0.0),
        )?;
        Ok(CoilOutlet {
            outlet: *inlet,
            condensate,
            bypass_factor: Ratio::new::<ratio>(1.0),
            heat: Power::new::<watt>(0.0),
        })
    }
}

impl Default for CoolingCoil {
    /// Chilled water supplied at 7 °C and returned at 12 °C.
    fn default() -> Self {
        Self {
            apparatus_dew_point: ThermodynamicTemperature::new::<degree_celsius>(9.5),
        }
    }
}

/// Coil outlet for one outlet temperature.
///
/// `heat` is signed, positive into the air stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct CoilOutlet {
    pub(super) outlet: FlowOfHumidAir,
    pub(super) condensate: FlowOfLiquidWater,
    pub(super) bypass_factor: Ratio,
    pub(super) heat: Power,
}

/// Outlet relative humidity as a function of outlet temperature.
pub(super) struct CoilRelativeHumidity<'a> {
    pub(super) coil: &'a CoolingCoil,
    pub(super) inlet: &'a FlowOfHumidAir,
}

impl Model for CoilRelativeHumidity<'_> {
    type Input = ThermodynamicTemperature;
    type Output = Ratio;
    type Error = ProcessError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let coil = self.coil.outlet(self.inlet, *input)?;
        Ok(coil.outlet.fluid().relative_humidity())
    }
}

/// Heat removed from the stream as a function of outlet temperature.
pub(super) struct CoilHeatRemoved<'a> {
    pub(super) coil: &'a CoolingCoil,
    pub(super) inlet: &'a FlowOfHumidAir,
}

impl Model for CoilHeatRemoved<'_> {
    type Input = ThermodynamicTemperature;
    type Output = Power;
    type Error = ProcessError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let coil = self.coil.outlet(self.inlet, *input)?;
        Ok(-coil.heat)
    }
}
