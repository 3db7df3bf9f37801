//! Ideal gas equation of state, `p = ρ·R·T`.

use uom::si::f64::{MassDensity, Pressure, ThermodynamicTemperature};

use crate::support::units::SpecificGasConstant;

/// Computes the density of an ideal gas (or of one component at its partial pressure).
#[must_use]
pub(super) fn density(
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
    gas_constant: SpecificGasConstant,
) -> MassDensity {
    pressure / (gas_constant * temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        mass_density::kilogram_per_cubic_meter, pressure::pascal,
        specific_heat_capacity::joule_per_kilogram_kelvin, thermodynamic_temperature::kelvin,
    };

    #[test]
    fn density_scales_with_pressure() {
        let t = ThermodynamicTemperature::new::<kelvin>(300.0);
        let r = SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.0);

        let low = density(t, Pressure::new::<pascal>(50_000.0), r);
        let high = density(t, Pressure::new::<pascal>(100_000.0), r);

        assert_relative_eq!(
            high.get::<kilogram_per_cubic_meter>(),
            2.0 * low.get::<kilogram_per_cubic_meter>()
        );
        assert_relative_eq!(
            high.get::<kilogram_per_cubic_meter>(),
            100_000.0 / (287.0 * 300.0)
        );
    }
}
