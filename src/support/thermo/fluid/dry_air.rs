use uom::si::f64::{
    DynamicViscosity, MassDensity, Pressure, SpecificHeatCapacity, ThermalConductivity,
    ThermodynamicTemperature,
};

use crate::support::{
    thermo::{
        PropertyError,
        correlation::dry_air,
        limits::{check_gas_temperature, check_pressure},
    },
    units::SpecificEnthalpy,
};

use super::DryAirBuilder;

/// Dry air as an ideal gas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DryAir {
    pub(super) pressure: Pressure,
    pub(super) temperature: ThermodynamicTemperature,
    pub(super) density: MassDensity,
    pub(super) enthalpy: SpecificEnthalpy,
    pub(super) cp: SpecificHeatCapacity,
    pub(super) viscosity: DynamicViscosity,
    pub(super) conductivity: ThermalConductivity,
}

impl DryAir {
    /// Creates dry air at the given pressure and temperature.
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
            density: dry_air::density(pressure, temperature),
            enthalpy: dry_air::specific_enthalpy(temperature),
            cp: dry_air::specific_heat(temperature),
            viscosity: dry_air::dynamic_viscosity(temperature),
            conductivity: dry_air::thermal_conductivity(temperature),
        })
    }

    #[must_use]
    pub fn builder() -> DryAirBuilder {
        DryAirBuilder::default()
    }

    /// Returns dry air at the same pressure and a new temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfRange`] if the temperature is outside its limits.
    pub fn with_temperature(&self, temperature: ThermodynamicTemperature) -> Result<Self, PropertyError> {
        Self::new(self.pressure, temperature)
    }
}
