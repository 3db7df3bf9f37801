//! Immutable fluid states.
//!
//! Each fluid is built once by a validating constructor (or its builder) and
//! evaluates every property eagerly, so reads are plain field access. Changed
//! conditions produce a new value.
//!
//! | Fluid            | State inputs                          | Temperature range |
//! |------------------|---------------------------------------|-------------------|
//! | [`DryAir`]       | pressure, temperature                 | −100 to 200 °C    |
//! | [`WaterVapour`]  | pressure, temperature                 | −100 to 200 °C    |
//! | [`LiquidWater`]  | pressure, temperature                 | 0 to 150 °C       |
//! | [`HumidAir`]     | pressure, temperature, humidity       | −100 to 200 °C    |
//!
//! Pressure is limited to [`PRESSURE_MIN`](super::limits::PRESSURE_MIN) through
//! [`PRESSURE_MAX`](super::limits::PRESSURE_MAX) for every fluid.

mod builder;
mod dry_air;
mod humid_air;
mod liquid_water;
mod water_vapour;

pub use builder::{DryAirBuilder, HumidAirBuilder, LiquidWaterBuilder, WaterVapourBuilder};
pub use dry_air::DryAir;
pub use humid_air::HumidAir;
pub use liquid_water::LiquidWater;
pub use water_vapour::WaterVapour;

use uom::si::{
    f64::{
        DynamicViscosity, MassDensity, Pressure, Ratio, SpecificHeatCapacity,
        ThermalConductivity, ThermodynamicTemperature,
    },
    ratio::ratio,
};

use crate::support::units::SpecificEnthalpy;

use super::capability::{
    HasCp, HasDensity, HasDryAirBasis, HasEnthalpy, HasTransport, ThermoState,
};

/// Implements the field-backed capability traits for fluids that store
/// `pressure`, `temperature`, `density`, `enthalpy`, `cp`, `viscosity` and
/// `conductivity`.
macro_rules! impl_stored_properties {
    ($($fluid:ty),+ $(,)?) => {
        $(
            impl ThermoState for $fluid {
                fn pressure(&self) -> Pressure {
                    self.pressure
                }

                fn temperature(&self) -> ThermodynamicTemperature {
                    self.temperature
                }
            }

            impl HasDensity for $fluid {
                fn density(&self) -> MassDensity {
                    self.density
                }
            }

            impl HasEnthalpy for $fluid {
                fn enthalpy(&self) -> SpecificEnthalpy {
                    self.enthalpy
                }
            }

            impl HasCp for $fluid {
                fn cp(&self) -> SpecificHeatCapacity {
                    self.cp
                }
            }

            impl HasTransport for $fluid {
                fn viscosity(&self) -> DynamicViscosity {
                    self.viscosity
                }

                fn conductivity(&self) -> ThermalConductivity {
                    self.conductivity
                }
            }
        )+
    };
}

impl_stored_properties!(DryAir, WaterVapour, LiquidWater, HumidAir);

impl HasDryAirBasis for DryAir {
    fn mass_per_dry_air(&self) -> Option<Ratio> {
        Some(Ratio::new::<ratio>(1.0))
    }
}

impl HasDryAirBasis for HumidAir {
    fn mass_per_dry_air(&self) -> Option<Ratio> {
        Some(Ratio::new::<ratio>(1.0) + self.humidity_ratio())
    }
}

impl HasDryAirBasis for WaterVapour {
    fn mass_per_dry_air(&self) -> Option<Ratio> {
        None
    }
}

impl HasDryAirBasis for LiquidWater {
    fn mass_per_dry_air(&self) -> Option<Ratio> {
        None
    }
}
