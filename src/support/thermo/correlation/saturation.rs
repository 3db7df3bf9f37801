//! Saturation pressure of water.
//!
//! Hyland–Wexler formulation: over liquid water at and above 0 °C, over ice
//! below. The ice branch lies a fraction of a pascal below the water branch at
//! 0 °C, so the curve stays monotonic, which the dew-point inversion relies on.

use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::thermo::constants::KELVIN_OFFSET;

use super::polynomial;

/// `C8..C12` for `ln(p_s) = C8/T + C9 + C10·T + C11·T² + C12·T³ + C13·ln T`.
const OVER_WATER: [f64; 5] = [
    1.391_499_3,
    -4.864_023_9e-2,
    4.176_476_8e-5,
    -1.445_209_3e-8,
    0.0,
];
const OVER_WATER_INVERSE: f64 = -5.800_220_6e3;
const OVER_WATER_LOG: f64 = 6.545_967_3;

/// `C1..C7` for `ln(p_s) = C1/T + C2 + C3·T + C4·T² + C5·T³ + C6·T⁴ + C7·ln T`.
const OVER_ICE: [f64; 5] = [
    6.392_524_7,
    -9.677_843_0e-3,
    6.221_570_1e-7,
    2.074_782_5e-9,
    -9.484_024_0e-13,
];
const OVER_ICE_INVERSE: f64 = -5.674_535_9e3;
const OVER_ICE_LOG: f64 = 4.163_501_9;

/// Returns the saturation pressure of water at `temperature`.
///
/// Over ice below 0 °C, over liquid water otherwise.
#[must_use]
pub fn saturation_pressure(temperature: ThermodynamicTemperature) -> Pressure {
    let t = temperature.get::<kelvin>();

    let ln_p = if t >= KELVIN_OFFSET {
        OVER_WATER_INVERSE / t + polynomial(&OVER_WATER, t) + OVER_WATER_LOG * t.ln()
    } else {
        OVER_ICE_INVERSE / t + polynomial(&OVER_ICE, t) + OVER_ICE_LOG * t.ln()
    };

    Pressure::new::<pascal>(ln_p.exp())
}
