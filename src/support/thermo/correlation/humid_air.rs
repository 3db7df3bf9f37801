//! Humid air as an ideal mixture of dry air and water vapour.
//!
//! Specific enthalpy and specific heat are expressed per kilogram of dry air,
//! the conserved mass in air-handling processes. Density is the total mass of
//! both components per unit volume.

use uom::si::{
    f64::{
        DynamicViscosity, MassDensity, Pressure, Ratio, SpecificHeatCapacity,
        ThermalConductivity, ThermodynamicTemperature,
    },
    dynamic_viscosity::pascal_second,
    pressure::pascal,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::{
    thermo::constants::{MOLAR_MASS_DRY_AIR, MOLAR_MASS_RATIO, MOLAR_MASS_WATER},
    units::SpecificEnthalpy,
};

use super::{dry_air, saturation::saturation_pressure, water_vapour};

/// Returns `x = ε·p_v / (p − p_v)`.
#[must_use]
pub fn humidity_ratio(pressure: Pressure, vapour_pressure: Pressure) -> Ratio {
    let p = pressure.get::<pascal>();
    let p_v = vapour_pressure.get::<pascal>();
    Ratio::new::<ratio>(MOLAR_MASS_RATIO * p_v / (p - p_v))
}

/// Returns `p_v = p·x / (ε + x)`.
#[must_use]
pub fn vapour_pressure(pressure: Pressure, humidity_ratio: Ratio) -> Pressure {
    let x = humidity_ratio.get::<ratio>();
    pressure * (x / (MOLAR_MASS_RATIO + x))
}

/// Returns the humidity ratio of saturated air.
///
/// Unbounded (`+∞`) when the saturation pressure reaches the total pressure,
/// since any amount of vapour then stays below saturation.
#[must_use]
pub fn max_humidity_ratio(pressure: Pressure, temperature: ThermodynamicTemperature) -> Ratio {
    let p_s = saturation_pressure(temperature);
    if p_s >= pressure {
        return Ratio::new::<ratio>(f64::INFINITY);
    }
    humidity_ratio(pressure, p_s)
}

/// Returns `φ = p_v / p_s`.
///
/// Not clamped: values above one indicate a supersaturated mixture.
#[must_use]
pub fn relative_humidity(
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
    humidity_ratio: Ratio,
) -> Ratio {
    vapour_pressure(pressure, humidity_ratio) / saturation_pressure(temperature)
}

/// Returns the total (dry air plus vapour) density.
#[must_use]
pub fn density(
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
    humidity_ratio: Ratio,
) -> MassDensity {
    let p_v = vapour_pressure(pressure, humidity_ratio);
    dry_air::density(pressure - p_v, temperature) + water_vapour::density(p_v, temperature)
}

/// Returns `h = h_da + x·h_v` per kilogram of dry air.
#[must_use]
pub fn specific_enthalpy(
    temperature: ThermodynamicTemperature,
    humidity_ratio: Ratio,
) -> SpecificEnthalpy {
    let x = humidity_ratio.get::<ratio>();
    dry_air::specific_enthalpy(temperature) + water_vapour::specific_enthalpy(temperature) * x
}

/// Returns `cp = cp_da + x·cp_v` per kilogram of dry air.
#[must_use]
pub fn specific_heat(
    temperature: ThermodynamicTemperature,
    humidity_ratio: Ratio,
) -> SpecificHeatCapacity {
    let x = humidity_ratio.get::<ratio>();
    dry_air::specific_heat(temperature) + water_vapour::specific_heat(temperature) * x
}

#[must_use]
pub fn dynamic_viscosity(
    temperature: ThermodynamicTemperature,
    humidity_ratio: Ratio,
) -> DynamicViscosity {
    let viscosities = component_viscosities(temperature);
    DynamicViscosity::new::<pascal_second>(wilke(
        vapour_mole_fraction(humidity_ratio),
        viscosities,
        viscosities,
    ))
}

#[must_use]
pub fn thermal_conductivity(
    temperature: ThermodynamicTemperature,
    humidity_ratio: Ratio,
) -> ThermalConductivity {
    let conductivities = [
        dry_air::thermal_conductivity(temperature).get::<watt_per_meter_kelvin>(),
        water_vapour::thermal_conductivity(temperature).get::<watt_per_meter_kelvin>(),
    ];
    ThermalConductivity::new::<watt_per_meter_kelvin>(wilke(
        vapour_mole_fraction(humidity_ratio),
        conductivities,
        component_viscosities(temperature),
    ))
}

/// Returns `y_v = x / (ε + x)`.
fn vapour_mole_fraction(humidity_ratio: Ratio) -> f64 {
    let x = humidity_ratio.get::<ratio>();
    x / (MOLAR_MASS_RATIO + x)
}

/// Dry air and water vapour viscosities in Pa·s.
fn component_viscosities(temperature: ThermodynamicTemperature) -> [f64; 2] {
    [
        dry_air::dynamic_viscosity(temperature).get::<pascal_second>(),
        water_vapour::dynamic_viscosity(temperature).get::<pascal_second>(),
    ]
}

/// Mixes `[dry air, vapour]` values with Wilke's interaction factors.
fn wilke(vapour_fraction: f64, values: [f64; 2], viscosities: [f64; 2]) -> f64 {
    let fractions = [1.0 - vapour_fraction, vapour_fraction];
    let molar_masses = [MOLAR_MASS_DRY_AIR, MOLAR_MASS_WATER];

    let phi = |i: usize, j: usize| {
        let r = (viscosities[i] / viscosities[j]).sqrt()
            * (molar_masses[j] / molar_masses[i]).powf(0.25);
        (1.0 + r).powi(2) / (8.0 * (1.0 + molar_masses[i] / molar_masses[j])).sqrt()
    };

    (0..2)
        .map(|i| {
            let denominator: f64 = (0..2).map(|j| fractions[j] * phi(i, j)).sum();
            fractions[i] * values[i] / denominator
        })
        .sum()
}
