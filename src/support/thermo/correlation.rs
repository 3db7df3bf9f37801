//! Property correlations.
//!
//! Each submodule is a set of pure functions from typed state inputs to typed
//! properties. Inputs are assumed to be within the bounds in
//! [`limits`](super::limits); the validating constructors in
//! [`fluid`](super::fluid) are the intended entry points.
//!
//! Internally, temperatures are evaluated in kelvin (or °C where the source
//! fit is expressed in °C), pressures in pascal and energies in joules.
//!
//! # Sources
//!
//! - Saturation pressure: Hyland & Wexler (1983), as tabulated by ASHRAE.
//! - Dry air heat capacity and conductivity: Tsilingiris (2008).
//! - Water vapour heat capacity: ideal-gas cubic fit (Çengel & Boles, Table A-2c).
//! - Liquid water density: Kell (1975).
//! - Mixture transport properties: Wilke's rule.

pub mod dry_air;
pub mod humid_air;
pub mod liquid_water;
pub mod saturation;
pub mod water_vapour;

mod ideal_gas;

/// Evaluates `Σ cᵢ·xⁱ` with Horner's scheme.
fn polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// Evaluates `∫ₐᵇ Σ cᵢ·xⁱ dx` in closed form.
fn polynomial_integral(coefficients: &[f64], a: f64, b: f64) -> f64 {
    let antiderivative = |x: f64| {
        coefficients
            .iter()
            .enumerate()
            .rev()
            .fold(0.0, |acc, (i, c)| acc * x + c / (i as f64 + 1.0))
            * x
    };
    antiderivative(b) - antiderivative(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn horner_matches_expanded_form() {
        let c = [1.0, -2.0, 0.5];
        assert_relative_eq!(polynomial(&c, 3.0), 1.0 - 6.0 + 4.5);
    }

    #[test]
    fn integral_of_quadratic() {
        // ∫₁² (1 − 2x + 0.5x²) dx = [x − x² + x³/6]₁²
        let c = [1.0, -2.0, 0.5];
        let expected = (2.0 - 4.0 + 8.0 / 6.0) - (1.0 - 1.0 + 1.0 / 6.0);
        assert_relative_eq!(polynomial_integral(&c, 1.0, 2.0), expected, epsilon = 1e-12);
    }
}
