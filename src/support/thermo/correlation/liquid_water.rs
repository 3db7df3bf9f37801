//! Liquid water (and ice, for the condensed phase below freezing).
//!
//! Pressure effects on the liquid are neglected.

use uom::si::{
    f64::{
        DynamicViscosity, MassDensity, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    available_energy::joule_per_kilogram,
    dynamic_viscosity::pascal_second,
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::support::{
    thermo::constants::{LATENT_HEAT_FUSION, SPECIFIC_HEAT_ICE},
    units::SpecificEnthalpy,
};

use super::polynomial;

/// Kell numerator, kg/m³, `t` in °C.
const KELL_NUMERATOR: [f64; 6] = [
    999.839_52,
    16.945_176,
    -7.987_040_1e-3,
    -46.170_461e-6,
    105.563_02e-9,
    -280.542_53e-12,
];

/// Kell denominator slope, 1/°C.
const KELL_DENOMINATOR: f64 = 16.879_850e-3;

/// Terms of `cp(t) = Σ aᵢ·t^nᵢ` in J/(kg·K), `t` in °C.
const SPECIFIC_HEAT: [(f64, f64); 5] = [
    (4_217.4, 0.0),
    (-5.618_1, 1.0),
    (1.299_2, 1.5),
    (-0.115_35, 2.0),
    (4.149_64e-3, 2.5),
];

/// `k(T)` in W/(m·K), `T` in kelvin.
const THERMAL_CONDUCTIVITY: [f64; 3] = [-0.575_2, 6.397e-3, -8.151e-6];

/// Vogel constants for `μ = A·10^(B / (T − C))`.
const VOGEL: (f64, f64, f64) = (2.414e-5, 247.8, 140.0);

#[must_use]
pub fn density(temperature: ThermodynamicTemperature) -> MassDensity {
    let t = temperature.get::<degree_celsius>();
    MassDensity::new::<kilogram_per_cubic_meter>(
        polynomial(&KELL_NUMERATOR, t) / (1.0 + KELL_DENOMINATOR * t),
    )
}

/// Valid for `t ≥ 0 °C`.
#[must_use]
pub fn specific_heat(temperature: ThermodynamicTemperature) -> SpecificHeatCapacity {
    let t = temperature.get::<degree_celsius>();
    let cp = SPECIFIC_HEAT.iter().map(|(a, n)| a * t.powf(*n)).sum();
    SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp)
}

/// Returns `h = ∫ cp dt` from 0 °C. Valid for `t ≥ 0 °C`.
#[must_use]
pub fn specific_enthalpy(temperature: ThermodynamicTemperature) -> SpecificEnthalpy {
    let t = temperature.get::<degree_celsius>();
    let h = SPECIFIC_HEAT
        .iter()
        .map(|(a, n)| a * t.powf(n + 1.0) / (n + 1.0))
        .sum();
    SpecificEnthalpy::new::<joule_per_kilogram>(h)
}

/// Returns the enthalpy of condensed water: liquid at or above 0 °C, ice below.
#[must_use]
pub fn condensed_enthalpy(temperature: ThermodynamicTemperature) -> SpecificEnthalpy {
    let t = temperature.get::<degree_celsius>();
    if t >= 0.0 {
        specific_enthalpy(temperature)
    } else {
        SpecificEnthalpy::new::<joule_per_kilogram>(-LATENT_HEAT_FUSION + SPECIFIC_HEAT_ICE * t)
    }
}

#[must_use]
pub fn dynamic_viscosity(temperature: ThermodynamicTemperature) -> DynamicViscosity {
    let (a, b, c) = VOGEL;
    let t = temperature.get::<kelvin>();
    DynamicViscosity::new::<pascal_second>(a * 10_f64.powf(b / (t - c)))
}

#[must_use]
pub fn thermal_conductivity(temperature: ThermodynamicTemperature) -> ThermalConductivity {
    ThermalConductivity::new::<watt_per_meter_kelvin>(polynomial(
        &THERMAL_CONDUCTIVITY,
        temperature.get::<kelvin>(),
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
    fn density_peaks_near_four_degrees() {
        let rho = |t| density(celsius(t)).get::<kilogram_per_cubic_meter>();
        assert_relative_eq!(rho(4.0), 999.972, max_relative = 1e-6);
        assert!(rho(4.0) > rho(0.0));
        assert!(rho(4.0) > rho(8.0));
        assert_relative_eq!(rho(20.0), 998.204, max_relative = 1e-6);
    }

    #[test]
    fn heat_capacity_and_enthalpy() {
        assert_relative_eq!(
            specific_heat(celsius(20.0)).get::<joule_per_kilogram_kelvin>(),
            4_182.525,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            specific_enthalpy(celsius(100.0)).get::<joule_per_kilogram>(),
            419_023.6,
            max_relative = 1e-6
        );
        assert_relative_eq!(specific_enthalpy(celsius(0.0)).get::<joule_per_kilogram>(), 0.0);
    }

    #[test]
    fn ice_sits_one_fusion_heat_below_liquid() {
        let ice = condensed_enthalpy(celsius(-5.0)).get::<joule_per_kilogram>();
        assert_relative_eq!(ice, -333_400.0 - 10_500.0);

        let liquid = condensed_enthalpy(celsius(5.0)).get::<joule_per_kilogram>();
        assert_relative_eq!(liquid, specific_enthalpy(celsius(5.0)).get::<joule_per_kilogram>());
    }

    #[test]
    fn transport_properties_at_room_temperature() {
        assert_relative_eq!(
            dynamic_viscosity(celsius(20.0)).get::<pascal_second>(),
            1.001_75e-3,
            max_relative = 1e-5
        );
        assert_relative_eq!(
            thermal_conductivity(celsius(20.0)).get::<watt_per_meter_kelvin>(),
            0.599_61,
            max_relative = 1e-5
        );
    }
}
