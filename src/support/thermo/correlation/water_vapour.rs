//! Water vapour as an ideal gas.
//!
//! Enthalpy is referenced to liquid water at 0 °C, so vapour at 0 °C carries
//! the latent heat of vaporization.

use uom::si::{
    f64::{
        DynamicViscosity, MassDensity, Pressure, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    available_energy::joule_per_kilogram,
    dynamic_viscosity::pascal_second,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::support::{
    thermo::constants::{
        KELVIN_OFFSET, LATENT_HEAT_VAPORIZATION, MOLAR_MASS_WATER, water_vapour_gas_constant,
    },
    units::SpecificEnthalpy,
};

use super::{ideal_gas, polynomial, polynomial_integral};

/// Molar `cp(T)` in kJ/(kmol·K), `T` in kelvin.
const MOLAR_SPECIFIC_HEAT: [f64; 4] = [32.24, 0.192_3e-2, 1.055e-5, -3.595e-9];

/// `μ(t)` in Pa·s, `t` in °C.
const VISCOSITY: [f64; 2] = [80.581_318_68e-7, 0.400_054_945_1e-7];

/// `k(t)` in W/(m·K), `t` in °C.
const THERMAL_CONDUCTIVITY: [f64; 3] = [17.617_582_42e-3, 5.558_941_059e-5, 1.663_336_663e-7];

/// Converts kJ/(kmol·K) to J/(kg·K).
const PER_KILOGRAM: f64 = 1_000.0 / MOLAR_MASS_WATER;

#[must_use]
pub fn density(pressure: Pressure, temperature: ThermodynamicTemperature) -> MassDensity {
    ideal_gas::density(temperature, pressure, water_vapour_gas_constant())
}

#[must_use]
pub fn specific_heat(temperature: ThermodynamicTemperature) -> SpecificHeatCapacity {
    SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(
        polynomial(&MOLAR_SPECIFIC_HEAT, temperature.get::<kelvin>()) * PER_KILOGRAM,
    )
}

/// Returns `h = h_fg(0 °C) + ∫ cp dT` from 0 °C.
#[must_use]
pub fn specific_enthalpy(temperature: ThermodynamicTemperature) -> SpecificEnthalpy {
    let sensible = polynomial_integral(
        &MOLAR_SPECIFIC_HEAT,
        KELVIN_OFFSET,
        temperature.get::<kelvin>(),
    ) * PER_KILOGRAM;
    SpecificEnthalpy::new::<joule_per_kilogram>(LATENT_HEAT_VAPORIZATION + sensible)
}

#[must_use]
pub fn dynamic_viscosity(temperature: ThermodynamicTemperature) -> DynamicViscosity {
    DynamicViscosity::new::<pascal_second>(polynomial(
        &VISCOSITY,
        temperature.get::<degree_celsius>(),
    ))
}

#[must_use]
pub fn thermal_conductivity(temperature: ThermodynamicTemperature) -> ThermalConductivity {
    ThermalConductivity::new::<watt_per_meter_kelvin>(polynomial(
        &THERMAL_CONDUCTIVITY,
        temperature.get::<degree_celsius>(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    #[test]
    fn latent_heat_at_reference() {
        assert_relative_eq!(
            specific_enthalpy(celsius(0.0)).get::<joule_per_kilogram>(),
            LATENT_HEAT_VAPORIZATION
        );
        assert_relative_eq!(
            specific_enthalpy(celsius(20.0)).get::<joule_per_kilogram>(),
            2_538_145.04,
            max_relative = 1e-8
        );
    }

    #[test]
    fn specific_heat_near_room_temperature() {
        assert_relative_eq!(
            specific_heat(celsius(20.0)).get::<joule_per_kilogram_kelvin>(),
            1_866.18,
            max_relative = 1e-5
        );
    }

    #[test]
    fn transport_properties_at_freezing() {
        assert_relative_eq!(
            dynamic_viscosity(celsius(0.0)).get::<pascal_second>(),
            8.058_131_868e-6,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            thermal_conductivity(celsius(0.0)).get::<watt_per_meter_kelvin>(),
            0.017_617_582_42,
            max_relative = 1e-12
        );
    }
}
