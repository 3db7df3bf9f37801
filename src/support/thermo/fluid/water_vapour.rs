use uom::si::f64::{
    DynamicViscosity, MassDensity, Pressure, SpecificHeatCapacity, ThermalConductivity,
    ThermodynamicTemperature,
};

use crate::support::{
    thermo::{
        PropertyError,
        capability::HasSaturationPressure,
        correlation::{saturation::saturation_pressure, water_vapour},
        limits::{check_gas_temperature, check_pressure},
    },
    units::SpecificEnthalpy,
};

use super::WaterVapourBuilder;

/// Water vapour as an ideal gas.
///
/// Construction does not check for condensation: a state whose pressure
/// exceeds the saturation pressure is still evaluated as a gas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterVapour {
    pub(super) pressure: Pressure,
    pub(super) temperature: ThermodynamicTemperature,
    pub(super) density: MassDensity,
    pub(super) enthalpy: SpecificEnthalpy,
    pub(super) cp: SpecificHeatCapacity,
    pub(super) viscosity: DynamicViscosity,
    pub(super) conductivity: ThermalConductivity,
}

impl WaterVapour {
    /// Creates water vapour at the given pressure and temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfRange`] if either input is outside its limits.
    pub fn new(
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, PropertyError> {
        let pressure = check_pressure(pressure)?;
        let temperature = check_gas_temperature(temperature)?;

        Ok(Self {
            pressure,
            temperature,
            density: water_vapour::density(pressure, temperature),
            enthalpy: water_vapour::specific_enthalpy(temperature),
            cp: water_vapour::specific_heat(temperature),
            viscosity: water_vapour::dynamic_viscosity(temperature),
            conductivity: water_vapour::thermal_conductivity(temperature),
        })
    }

    #[must_use]
    pub fn builder() -> WaterVapourBuilder {
        WaterVapourBuilder::default()
    }
}

impl HasSaturationPressure for WaterVapour {
    fn saturation_pressure(&self) -> Pressure {
        saturation_pressure(self.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::joule_per_kilogram, pressure::pascal,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::support::thermo::capability::HasEnthalpy;

    #[test]
    fn steam_at_atmospheric_pressure() {
        let steam = WaterVapour::new(
            Pressure::new::<pascal>(101_325.0),
            ThermodynamicTemperature::new::<degree_celsius>(100.0),
        )
        .unwrap();

        let h = steam.enthalpy().get::<joule_per_kilogram>();
        assert!((2.68e6..2.70e6).contains(&h), "h = {h}");
        assert!(steam.saturation_pressure() > Pressure::new::<pascal>(101_325.0));
    }

    #[test]
    fn supersaturated_vapour_is_still_a_gas() {
        let vapour = WaterVapour::new(
            Pressure::new::<pascal>(101_325.0),
            ThermodynamicTemperature::new::<degree_celsius>(20.0),
        );
        assert!(vapour.is_ok());
    }

    #[test]
    fn enthalpy_starts_from_latent_heat() {
        let vapour = WaterVapour::new(
            Pressure::new::<pascal>(50_000.0),
            ThermodynamicTemperature::new::<degree_celsius>(0.0),
        )
        .unwrap();
        assert_relative_eq!(
            vapour.enthalpy().get::<joule_per_kilogram>(),
            2_500_900.0,
            epsilon = 1e-6
        );
    }
}
