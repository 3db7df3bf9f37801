use uom::si::{
    f64::{
        DynamicViscosity, MassDensity, Pressure, Ratio, SpecificHeatCapacity,
        ThermalConductivity, ThermodynamicTemperature,
    },
    pressure::pascal,
    ratio::ratio,
};

use crate::support::{
    thermo::{
        PropertyError,
        capability::HasSaturationPressure,
        correlation::{humid_air, saturation::saturation_pressure},
        inverse::{self, InverseConfig},
        limits::{check_gas_temperature, check_pressure, check_range, check_relative_humidity},
    },
    units::SpecificEnthalpy,
};

use super::HumidAirBuilder;

/// A mixture of dry air and water vapour.
///
/// The humidity ratio `x` (kilograms of vapour per kilogram of dry air) and
/// the relative humidity are two views of the same vapour content; each
/// constructor takes one and derives the other.
///
/// Enthalpy and specific heat are per kilogram of dry air. Density is the
/// total mass of the mixture per unit volume.
///
/// Supersaturated states are rejected: the humidity ratio may not exceed the
/// saturation humidity ratio at the mixture's pressure and temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumidAir {
    pub(super) pressure: Pressure,
    pub(super) temperature: ThermodynamicTemperature,
    humidity_ratio: Ratio,
    relative_humidity: Ratio,
    vapour_pressure: Pressure,
    saturation_pressure: Pressure,
    pub(super) density: MassDensity,
    pub(super) enthalpy: SpecificEnthalpy,
    pub(super) cp: SpecificHeatCapacity,
    pub(super) viscosity: DynamicViscosity,
    pub(super) conductivity: ThermalConductivity,
}

impl HumidAir {
    /// Creates humid air from its relative humidity.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfRange`] if any input is outside its limits,
    /// or [`PropertyError::InvalidState`] if the vapour pressure would reach
    /// the total pressure.
    pub fn from_relative_humidity(
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        relative_humidity: Ratio,
    ) -> Result<Self, PropertyError> {
        let pressure = check_pressure(pressure)?;
        let temperature = check_gas_temperature(temperature)?;
        let relative_humidity = check_relative_humidity(relative_humidity)?;

        let p_s = saturation_pressure(temperature);
        let p_v = p_s * relative_humidity.get::<ratio>();
        if p_v >= pressure {
            return Err(PropertyError::InvalidState {
                context: "vapour pressure reaches total pressure".into(),
                value: p_v.get::<pascal>(),
                limit: pressure.get::<pascal>(),
            });
        }

        let humidity_ratio = humid_air::humidity_ratio(pressure, p_v);
        Ok(Self::evaluate(
            pressure,
            temperature,
            humidity_ratio,
            relative_humidity,
            p_v,
            p_s,
        ))
    }

    /// Creates humid air from its humidity ratio.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfRange`] if pressure or temperature is
    /// outside its limits, or if the humidity ratio is negative or above the
    /// saturation humidity ratio.
    pub fn from_humidity_ratio(
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        humidity_ratio: Ratio,
    ) -> Result<Self, PropertyError> {
        let pressure = check_pressure(pressure)?;
        let temperature = check_gas_temperature(temperature)?;
        check_range(
            "humidity ratio",
            humidity_ratio.get::<ratio>(),
            0.0,
            humid_air::max_humidity_ratio(pressure, temperature).get::<ratio>(),
            "kg/kg",
        )?;

        let p_s = saturation_pressure(temperature);
        let p_v = humid_air::vapour_pressure(pressure, humidity_ratio);
        Ok(Self::evaluate(
            pressure,
            temperature,
            humidity_ratio,
            p_v / p_s,
            p_v,
            p_s,
        ))
    }

    /// Creates humid air with the given specific enthalpy (per kilogram of dry air).
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the enthalpy cannot be inverted to a
    /// temperature within limits, or if the resulting state is invalid.
    pub fn from_enthalpy(
        pressure: Pressure,
        enthalpy: SpecificEnthalpy,
        humidity_ratio: Ratio,
        config: &InverseConfig,
    ) -> Result<Self, PropertyError> {
        let temperature = inverse::temperature_from_enthalpy(enthalpy, humidity_ratio, config)?;
        Self::from_humidity_ratio(pressure, temperature, humidity_ratio)
    }

    /// Creates dry air expressed as humid air with zero humidity ratio.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfRange`] if either input is outside its limits.
    pub fn dry(
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, PropertyError> {
        Self::from_humidity_ratio(pressure, temperature, Ratio::new::<ratio>(0.0))
    }

    #[must_use]
    pub fn builder() -> HumidAirBuilder {
        HumidAirBuilder::default()
    }

    /// Returns the same mixture at a new temperature, keeping pressure and humidity ratio.
    ///
    /// # Errors
    ///
    /// Fails if the temperature is out of range or the mixture would be
    /// supersaturated at it.
    pub fn with_temperature(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, PropertyError> {
        Self::from_humidity_ratio(self.pressure, temperature, self.humidity_ratio)
    }

    #[must_use]
    pub fn humidity_ratio(&self) -> Ratio {
        self.humidity_ratio
    }

    #[must_use]
    pub fn relative_humidity(&self) -> Ratio {
        self.relative_humidity
    }

    /// Returns the partial pressure of the water vapour.
    #[must_use]
    pub fn vapour_pressure(&self) -> Pressure {
        self.vapour_pressure
    }

    /// Returns the humidity ratio of saturated air at this pressure and temperature.
    ///
    /// Unbounded when the saturation pressure reaches the total pressure.
    #[must_use]
    pub fn max_humidity_ratio(&self) -> Ratio {
        humid_air::max_humidity_ratio(self.pressure, self.temperature)
    }

    /// Returns the dew-point temperature.
    ///
    /// # Errors
    ///
    /// Fails for dry air, which has no dew point, or if the solve does not converge.
    pub fn dew_point(
        &self,
        config: &InverseConfig,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        inverse::dew_point(self.vapour_pressure, config)
    }

    /// Returns the thermodynamic wet-bulb temperature.
    ///
    /// # Errors
    ///
    /// Fails if the solve does not converge.
    pub fn wet_bulb(
        &self,
        config: &InverseConfig,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        inverse::wet_bulb(self.pressure, self.temperature, self.humidity_ratio, config)
    }

    fn evaluate(
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        humidity_ratio: Ratio,
        relative_humidity: Ratio,
        vapour_pressure: Pressure,
        saturation_pressure: Pressure,
    ) -> Self {
        Self {
            pressure,
            temperature,
            humidity_ratio,
            relative_humidity,
            vapour_pressure,
            saturation_pressure,
            density: humid_air::density(pressure, temperature, humidity_ratio),
            enthalpy: humid_air::specific_enthalpy(temperature, humidity_ratio),
            cp: humid_air::specific_heat(temperature, humidity_ratio),
            viscosity: humid_air::dynamic_viscosity(temperature, humidity_ratio),
            conductivity: humid_air::thermal_conductivity(temperature, humidity_ratio),
        }
    }
}

impl HasSaturationPressure for HumidAir {
    fn saturation_pressure(&self) -> Pressure {
        self.saturation_pressure
    }
}
