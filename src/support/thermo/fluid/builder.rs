//! Builders that collect optional state inputs before validation.
//!
//! Each `build` checks presence first ([`PropertyError::MissingArgument`])
//! and then defers to the fluid's validating constructor.

use uom::si::f64::{Pressure, Ratio, ThermodynamicTemperature};

use crate::support::thermo::PropertyError;

use super::{DryAir, HumidAir, LiquidWater, WaterVapour};

/// Defines a builder for a fluid fully specified by pressure and temperature.
macro_rules! pressure_temperature_builder {
    ($(#[$doc:meta])* $builder:ident => $fluid:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq)]
        pub struct $builder {
            pressure: Option<Pressure>,
            temperature: Option<ThermodynamicTemperature>,
        }

        impl $builder {
            #[must_use]
            pub fn pressure(mut self, pressure: Pressure) -> Self {
                self.pressure = Some(pressure);
                self
            }

            #[must_use]
            pub fn temperature(mut self, temperature: ThermodynamicTemperature) -> Self {
                self.temperature = Some(temperature);
                self
            }

            /// Validates the inputs and builds the fluid.
            ///
            /// # Errors
            ///
            /// Returns [`PropertyError::MissingArgument`] if an input is unset,
            /// or the constructor's error if an input is invalid.
            pub fn build(self) -> Result<$fluid, PropertyError> {
                let pressure = PropertyError::require(self.pressure, "pressure")?;
                let temperature = PropertyError::require(self.temperature, "temperature")?;
                $fluid::new(pressure, temperature)
            }
        }
    };
}

pressure_temperature_builder!(
    /// Builder for [`DryAir`].
    DryAirBuilder => DryAir
);

pressure_temperature_builder!(
    /// Builder for [`WaterVapour`].
    WaterVapourBuilder => WaterVapour
);

pressure_temperature_builder!(
    /// Builder for [`LiquidWater`].
    LiquidWaterBuilder => LiquidWater
);

/// Builder for [`HumidAir`].
///
/// Takes either a relative humidity or a humidity ratio, not both.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HumidAirBuilder {
    pressure: Option<Pressure>,
    temperature: Option<ThermodynamicTemperature>,
    relative_humidity: Option<Ratio>,
    humidity_ratio: Option<Ratio>,
}

impl HumidAirBuilder {
    #[must_use]
    pub fn pressure(mut self, pressure: Pressure) -> Self {
        self.pressure = Some(pressure);
        self
    }

    #[must_use]
    pub fn temperature(mut self, temperature: ThermodynamicTemperature) -> Self {
        self.temperature = Some(temperature);
        self
    }

    #[must_use]
    pub fn relative_humidity(mut self, relative_humidity: Ratio) -> Self {
        self.relative_humidity = Some(relative_humidity);
        self
    }

    #[must_use]
    pub fn humidity_ratio(mut self, humidity_ratio: Ratio) -> Self {
        self.humidity_ratio = Some(humidity_ratio);
        self
    }

    /// Validates the inputs and builds the mixture.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::MissingArgument`] if pressure, temperature or
    /// both humidity inputs are unset, [`PropertyError::ConflictingArguments`]
    /// if both humidity inputs are set, or the constructor's error if an input
    /// is invalid.
    pub fn build(self) -> Result<HumidAir, PropertyError> {
        let pressure = PropertyError::require(self.pressure, "pressure")?;
        let temperature = PropertyError::require(self.temperature, "temperature")?;

        match (self.humidity_ratio, self.relative_humidity) {
            (Some(_), Some(_)) => Err(PropertyError::ConflictingArguments {
                first: "relative humidity",
                second: "humidity ratio",
            }),
            (Some(x), None) => HumidAir::from_humidity_ratio(pressure, temperature, x),
            (None, Some(rh)) => HumidAir::from_relative_humidity(pressure, temperature, rh),
            (None, None) => Err(PropertyError::MissingArgument {
                name: "relative humidity or humidity ratio",
            }),
        }
    }
}
