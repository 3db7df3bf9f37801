//! Dry air as an ideal gas with temperature-dependent heat capacity.

use uom::si::{
    f64::{
        DynamicViscosity, MassDensity, Pressure, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    available_energy::joule_per_kilogram,
    dynamic_viscosity::pascal_second,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    thermo::constants::{KELVIN_OFFSET, dry_air_gas_constant},
    units::SpecificEnthalpy,
};

use super::{ideal_gas, polynomial, polynomial_integral};

/// `cp(T)` in J/(kg·K), `T` in kelvin.
const SPECIFIC_HEAT: [f64; 5] = [
    1_034.09,
    -0.284_887,
    0.781_681_8e-3,
    -0.497_078_6e-6,
    0.107_702_4e-9,
];

/// `k(T)` in W/(m·K), `T` in kelvin.
const THERMAL_CONDUCTIVITY: [f64; 6] = [
    -2.276_501e-3,
    1.259_848_5e-4,
    -1.481_523_5e-7,
    1.735_506_46e-10,
    -1.066_657e-13,
    2.476_630_35e-17,
];

/// Sutherland reference viscosity (Pa·s), reference temperature (K) and constant (K).
const SUTHERLAND: (f64, f64, f64) = (1.716e-5, 273.15, 110.4);

#[must_use]
pub fn density(pressure: Pressure, temperature: ThermodynamicTemperature) -> MassDensity {
    ideal_gas::density(temperature, pressure, dry_air_gas_constant())
}

#[must_use]
pub fn specific_heat(temperature: ThermodynamicTemperature) -> SpecificHeatCapacity {
    SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(polynomial(
        &SPECIFIC_HEAT,
        temperature.get::<kelvin>(),
    ))
}

/// Returns `h = ∫ cp dT` from 0 °C, so dry air at 0 °C has zero enthalpy.
#[must_use]
pub fn specific_enthalpy(temperature: ThermodynamicTemperature) -> SpecificEnthalpy {
    SpecificEnthalpy::new::<joule_per_kilogram>(polynomial_integral(
        &SPECIFIC_HEAT,
        KELVIN_OFFSET,
        temperature.get::<kelvin>(),
    ))
}

/// Sutherland's law.
#[must_use]
pub fn dynamic_viscosity(temperature: ThermodynamicTemperature) -> DynamicViscosity {
    let (mu_ref, t_ref, s) = SUTHERLAND;
    let t = temperature.get::<kelvin>();
    DynamicViscosity::new::<pascal_second>(mu_ref * (t / t_ref).powf(1.5) * (t_ref + s) / (t + s))
}

#[must_use]
pub fn thermal_conductivity(temperature: ThermodynamicTemperature) -> ThermalConductivity {
    ThermalConductivity::new::<watt_per_meter_kelvin>(polynomial(
        &THERMAL_CONDUCTIVITY,
        temperature.get::<kelvin>(),
    ))
}
