//! Extensions to [`uom`].
//!
//! All physical quantities in this crate are [`uom`] quantities.
//! This module adds the pieces that psychrometric work needs but [`uom`]
//! does not provide directly.
//!
//! ## Specific quantities
//!
//! [`SpecificEnthalpy`] is used for both per-kilogram-of-fluid enthalpies
//! (dry air, water) and per-kilogram-of-dry-air enthalpies (humid air).
//! [`SpecificGasConstant`] carries `R = R_u / M` for the ideal-gas components,
//! and [`KinematicViscosity`] gives `ν = μ / ρ` a name of its own.
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait subtracts two absolute temperatures and
//! returns a temperature interval, which is what heat capacities multiply:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use twine_psychro::support::units::TemperatureDifference;
//!
//! let supply = ThermodynamicTemperature::new::<degree_celsius>(30.0);
//! let inlet = ThermodynamicTemperature::new::<degree_celsius>(10.0);
//! let rise = supply.minus(inlet);
//! // `rise` is a TemperatureInterval of 20 K.
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{KinematicViscosity, SpecificEnthalpy, SpecificGasConstant};
pub use temperature_difference::TemperatureDifference;
