use uom::si::{
    f64::{
        DynamicViscosity, MassDensity, Pressure, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    pressure::pascal,
};

use crate::support::{
    thermo::{
        PropertyError,
        capability::HasSaturationPressure,
        correlation::{liquid_water, saturation::saturation_pressure},
        limits::{check_liquid_temperature, check_pressure},
    },
    units::SpecificEnthalpy,
};

use super::LiquidWaterBuilder;

/// Liquid water, treated as incompressible.
///
/// Enthalpy is zero for liquid at 0 °C.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidWater {
    pub(super) pressure: Pressure,
    pub(super) temperature: ThermodynamicTemperature,
    pub(super) density: MassDensity,
    pub(super) enthalpy: SpecificEnthalpy,
    pub(super) cp: SpecificHeatCapacity,
    pub(super) viscosity: DynamicViscosity,
    pub(super) conductivity: ThermalConductivity,
}

impl LiquidWater {
    /// Creates liquid water at the given pressure and temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfRange`] if either input is outside its
    /// limits, or [`PropertyError::InvalidState`] if the pressure is below the
    /// saturation pressure (the water would boil).
    pub fn new(
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, PropertyError> {
        let pressure = check_pressure(pressure)?;
        let temperature = check_liquid_temperature(temperature)?;

        let p_s = saturation_pressure(temperature);
        if pressure < p_s {
            return Err(PropertyError::InvalidState {
                context: "pressure below saturation pressure of liquid water".into(),
                value: pressure.get::<pascal>(),
                limit: p_s.get::<pascal>(),
            });
        }

        Ok(Self {
            pressure,
            temperature,
            density: liquid_water::density(temperature),
            enthalpy: liquid_water::specific_enthalpy(temperature),
            cp: liquid_water::specific_heat(temperature),
            viscosity: liquid_water::dynamic_viscosity(temperature),
            conductivity: liquid_water::thermal_conductivity(temperature),
        })
    }

    #[must_use]
    pub fn builder() -> LiquidWaterBuilder {
        LiquidWaterBuilder::default()
    }
}

impl HasSaturationPressure for LiquidWater {
    fn saturation_pressure(&self) -> Pressure {
        saturation_pressure(self.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        mass_density::kilogram_per_cubic_meter, thermodynamic_temperature::degree_celsius,
    };

    use crate::support::thermo::capability::{FluidProperties, HasDensity};

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    #[test]
    fn water_at_room_temperature() {
        let water = LiquidWater::new(Pressure::new::<pascal>(101_325.0), celsius(20.0)).unwrap();

        assert_relative_eq!(
            water.density().get::<kilogram_per_cubic_meter>(),
            998.204,
            max_relative = 1e-5
        );
        let pr = water.prandtl_number().value;
        assert!((6.9..7.1).contains(&pr), "Pr = {pr}");
    }

    #[test]
    fn boiling_water_is_rejected() {
        let error = LiquidWater::new(Pressure::new::<pascal>(101_325.0), celsius(120.0)).unwrap_err();
        assert!(matches!(error, PropertyError::InvalidState { .. }));

        assert!(LiquidWater::new(Pressure::new::<pascal>(300_000.0), celsius(120.0)).is_ok());
    }

    #[test]
    fn ice_is_out_of_range() {
        let error = LiquidWater::new(Pressure::new::<pascal>(101_325.0), celsius(-1.0)).unwrap_err();
        assert!(matches!(
            error,
            PropertyError::OutOfRange { name: "liquid water temperature", .. }
        ));
    }
}
