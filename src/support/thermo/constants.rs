//! Physical constants.
//!
//! Every forward correlation and every inverse solve reads its constants from
//! this module, so a state built from one set of inputs reproduces the same
//! properties when rebuilt from any other set.
//!
//! Values are stored in SI base units as `f64` so they can appear in `const`
//! expressions; the functions at the bottom return them as [`uom`] quantities.

use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    pressure::pascal,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::SpecificGasConstant;

/// Molar mass of dry air, kg/kmol.
pub const MOLAR_MASS_DRY_AIR: f64 = 28.966;

/// Molar mass of water, kg/kmol.
pub const MOLAR_MASS_WATER: f64 = 18.015_268;

/// Universal gas constant, J/(kmol·K).
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8_314.462_618;

/// Specific gas constant of dry air, J/(kg·K).
pub const GAS_CONSTANT_DRY_AIR: f64 = UNIVERSAL_GAS_CONSTANT / MOLAR_MASS_DRY_AIR;

/// Specific gas constant of water vapour, J/(kg·K).
pub const GAS_CONSTANT_WATER_VAPOUR: f64 = UNIVERSAL_GAS_CONSTANT / MOLAR_MASS_WATER;

/// Ratio of molar masses `M_w / M_da` (≈ 0.621945).
pub const MOLAR_MASS_RATIO: f64 = MOLAR_MASS_WATER / MOLAR_MASS_DRY_AIR;

/// Offset between kelvin and degrees Celsius.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Enthalpy of vaporization of water at 0 °C, J/kg.
///
/// Also the specific enthalpy of water vapour at 0 °C, since liquid water at
/// 0 °C is the enthalpy reference.
pub const LATENT_HEAT_VAPORIZATION: f64 = 2_500_900.0;

/// Enthalpy of fusion of ice at 0 °C, J/kg.
pub const LATENT_HEAT_FUSION: f64 = 333_400.0;

/// Specific heat of ice near 0 °C, J/(kg·K).
pub const SPECIFIC_HEAT_ICE: f64 = 2_100.0;

/// Standard atmospheric pressure, Pa.
pub const STANDARD_PRESSURE: f64 = 101_325.0;

/// Returns the specific gas constant of dry air.
#[must_use]
pub fn dry_air_gas_constant() -> SpecificGasConstant {
    SpecificGasConstant::new::<joule_per_kilogram_kelvin>(GAS_CONSTANT_DRY_AIR)
}

/// Returns the specific gas constant of water vapour.
#[must_use]
pub fn water_vapour_gas_constant() -> SpecificGasConstant {
    SpecificGasConstant::new::<joule_per_kilogram_kelvin>(GAS_CONSTANT_WATER_VAPOUR)
}

/// Returns the molar mass ratio `M_w / M_da`.
#[must_use]
pub fn molar_mass_ratio() -> Ratio {
    Ratio::new::<ratio>(MOLAR_MASS_RATIO)
}

/// Returns the standard atmosphere.
#[must_use]
pub fn standard_pressure() -> Pressure {
    Pressure::new::<pascal>(STANDARD_PRESSURE)
}

/// Returns the enthalpy reference temperature, 0 °C.
#[must_use]
pub fn reference_temperature() -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(KELVIN_OFFSET)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn derived_constants() {
        assert_relative_eq!(MOLAR_MASS_RATIO, 0.621_945, epsilon = 1e-6);
        assert_relative_eq!(GAS_CONSTANT_DRY_AIR, 287.042, epsilon = 1e-3);
        assert_relative_eq!(GAS_CONSTANT_WATER_VAPOUR, 461.523, epsilon = 1e-3);
    }
}
