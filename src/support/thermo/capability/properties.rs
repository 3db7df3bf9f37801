use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, MassDensity, Pressure, Ratio, SpecificHeatCapacity,
        ThermalConductivity, ThermodynamicTemperature,
    },
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::units::{KinematicViscosity, SpecificEnthalpy};

/// The state-defining pair shared by every fluid.
pub trait ThermoState {
    /// Returns the absolute pressure.
    fn pressure(&self) -> Pressure;

    /// Returns the temperature.
    fn temperature(&self) -> ThermodynamicTemperature;
}

pub trait HasDensity {
    /// Returns the mass density.
    fn density(&self) -> MassDensity;
}

pub trait HasEnthalpy {
    /// Returns the specific enthalpy.
    ///
    /// Humid air reports enthalpy per kilogram of dry air.
    fn enthalpy(&self) -> SpecificEnthalpy;
}

pub trait HasCp {
    /// Returns the specific heat capacity at constant pressure.
    fn cp(&self) -> SpecificHeatCapacity;
}

pub trait HasTransport {
    /// Returns the dynamic viscosity.
    fn viscosity(&self) -> DynamicViscosity;

    /// Returns the thermal conductivity.
    fn conductivity(&self) -> ThermalConductivity;
}

/// Implemented by fluids that contain water.
pub trait HasSaturationPressure {
    /// Returns the saturation pressure of water at the fluid temperature.
    fn saturation_pressure(&self) -> Pressure;
}

/// The dry-air content of a fluid, the basis humid-air balances are written on.
pub trait HasDryAirBasis {
    /// Returns the total mass per unit mass of dry air, or `None` if the
    /// fluid holds no dry air.
    fn mass_per_dry_air(&self) -> Option<Ratio>;
}

/// Derived properties available to any fully described fluid.
pub trait FluidProperties: ThermoState + HasDensity + HasCp + HasTransport {
    /// Returns `ν = μ / ρ`.
    fn kinematic_viscosity(&self) -> KinematicViscosity {
        self.viscosity() / self.density()
    }

    /// Returns `Pr = cp·μ / k`.
    fn prandtl_number(&self) -> Ratio {
        Ratio::new::<ratio>(
            self.cp().get::<joule_per_kilogram_kelvin>() * self.viscosity().get::<pascal_second>()
                / self.conductivity().get::<watt_per_meter_kelvin>(),
        )
    }
}

impl<T> FluidProperties for T where T: ThermoState + HasDensity + HasCp + HasTransport {}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        diffusion_coefficient::square_meter_per_second, pressure::pascal,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::support::thermo::fluid::{DryAir, LiquidWater};

    fn room() -> (Pressure, ThermodynamicTemperature) {
        (
            Pressure::new::<pascal>(101_325.0),
            ThermodynamicTemperature::new::<degree_celsius>(20.0),
        )
    }

    #[test]
    fn kinematic_viscosity_of_air_and_water() {
        let (p, t) = room();

        let air = DryAir::new(p, t).unwrap();
        assert_relative_eq!(
            air.kinematic_viscosity().get::<square_meter_per_second>(),
            1.505_892e-5,
            max_relative = 1e-5
        );

        let water = LiquidWater::new(p, t).unwrap();
        assert_relative_eq!(
            water.kinematic_viscosity().get::<square_meter_per_second>(),
            1.003_551e-6,
            max_relative = 1e-5
        );
    }

    #[test]
    fn prandtl_number_combines_stored_properties() {
        let (p, t) = room();
        let water = LiquidWater::new(p, t).unwrap();

        let expected = water.cp().get::<joule_per_kilogram_kelvin>()
            * water.viscosity().get::<pascal_second>()
            / water.conductivity().get::<watt_per_meter_kelvin>();
        assert_relative_eq!(water.prandtl_number().get::<ratio>(), expected);
    }
}
