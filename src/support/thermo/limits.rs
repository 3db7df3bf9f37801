//! Validity bounds.
//!
//! The correlations in [`correlation`](super::correlation) are fitted over
//! finite ranges, and flow rates above [`MASS_FLOW_MAX`] almost always signal a
//! unit-entry mistake. Every constructor in this crate checks its inputs
//! against these bounds and reports violations as
//! [`PropertyError::OutOfRange`] with the offending value and both bounds.

use uom::si::{
    f64::{MassRate, Pressure, Ratio, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    pressure::pascal,
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
};

use super::PropertyError;

/// Lowest absolute pressure accepted for any fluid, Pa.
pub const PRESSURE_MIN: f64 = 10_000.0;

/// Highest absolute pressure accepted for any fluid, Pa.
pub const PRESSURE_MAX: f64 = 5_000_000.0;

/// Lowest temperature accepted for dry air, water vapour and humid air, °C.
pub const GAS_TEMPERATURE_MIN: f64 = -100.0;

/// Highest temperature accepted for dry air, water vapour and humid air, °C.
pub const GAS_TEMPERATURE_MAX: f64 = 200.0;

/// Lowest temperature accepted for liquid water, °C.
pub const LIQUID_TEMPERATURE_MIN: f64 = 0.0;

/// Highest temperature accepted for liquid water, °C.
pub const LIQUID_TEMPERATURE_MAX: f64 = 150.0;

/// Highest mass flow rate accepted for any flow, kg/s.
pub const MASS_FLOW_MAX: f64 = 5.0e9;

/// Returns the lowest accepted gas temperature.
#[must_use]
pub fn gas_temperature_min() -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(GAS_TEMPERATURE_MIN)
}

/// Returns the highest accepted gas temperature.
#[must_use]
pub fn gas_temperature_max() -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(GAS_TEMPERATURE_MAX)
}

/// Checks that `value` lies in `[min, max]`.
///
/// `NaN` never passes.
pub(crate) fn check_range(
    name: &'static str,
    value: f64,
    min: f64,
    max: f64,
    unit: &'static str,
) -> Result<f64, PropertyError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(PropertyError::OutOfRange {
            name,
            value,
            min,
            max,
            unit,
        })
    }
}

pub(crate) fn check_pressure(pressure: Pressure) -> Result<Pressure, PropertyError> {
    check_range(
        "pressure",
        pressure.get::<pascal>(),
        PRESSURE_MIN,
        PRESSURE_MAX,
        "Pa",
    )?;
    Ok(pressure)
}

pub(crate) fn check_gas_temperature(
    temperature: ThermodynamicTemperature,
) -> Result<ThermodynamicTemperature, PropertyError> {
    check_range(
        "temperature",
        temperature.get::<degree_celsius>(),
        GAS_TEMPERATURE_MIN,
        GAS_TEMPERATURE_MAX,
        "°C",
    )?;
    Ok(temperature)
}

pub(crate) fn check_liquid_temperature(
    temperature: ThermodynamicTemperature,
) -> Result<ThermodynamicTemperature, PropertyError> {
    check_range(
        "liquid water temperature",
        temperature.get::<degree_celsius>(),
        LIQUID_TEMPERATURE_MIN,
        LIQUID_TEMPERATURE_MAX,
        "°C",
    )?;
    Ok(temperature)
}

pub(crate) fn check_relative_humidity(relative_humidity: Ratio) -> Result<Ratio, PropertyError> {
    check_range(
        "relative humidity",
        relative_humidity.get::<percent>(),
        0.0,
        100.0,
        "%",
    )?;
    Ok(relative_humidity)
}

pub(crate) fn check_mass_flow(
    name: &'static str,
    mass_flow: MassRate,
) -> Result<MassRate, PropertyError> {
    check_range(
        name,
        mass_flow.get::<kilogram_per_second>(),
        0.0,
        MASS_FLOW_MAX,
        "kg/s",
    )?;
    Ok(mass_flow)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::thermo::ErrorKind;

    #[test]
    fn pressure_bounds() {
        assert!(check_pressure(Pressure::new::<pascal>(98_700.0)).is_ok());

        for bad in [-1.0, 0.0, 5.0e6 + 1.0, f64::NAN] {
            let err = check_pressure(Pressure::new::<pascal>(bad)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Argument);
        }
    }

    #[test]
    fn out_of_range_reports_value_and_bounds() {
        let err = check_mass_flow("mass flow", MassRate::new::<kilogram_per_second>(-1.0))
            .unwrap_err();

        assert_eq!(
            err,
            PropertyError::OutOfRange {
                name: "mass flow",
                value: -1.0,
                min: 0.0,
                max: MASS_FLOW_MAX,
                unit: "kg/s",
            }
        );
    }

    #[test]
    fn humidity_bounds_are_inclusive() {
        assert!(check_relative_humidity(Ratio::new::<percent>(0.0)).is_ok());
        assert!(check_relative_humidity(Ratio::new::<percent>(100.0)).is_ok());
        assert!(check_relative_humidity(Ratio::new::<percent>(100.1)).is_err());
    }
}
