//! Psychrometric property model.
//!
//! Evaluates the properties of dry air, water vapour, liquid water and humid
//! air (an ideal mixture of the two gases) from validated state inputs.
//!
//! - [`constants`]: The single table of physical constants every correlation uses.
//! - [`limits`]: Validity bounds for pressure, temperature, humidity and flow.
//! - [`correlation`]: Pure property correlations on [`uom`] quantities.
//! - [`fluid`]: Immutable, validated fluid states.
//! - [`capability`]: Traits shared by all fluid states.
//! - [`inverse`]: Bounded root-finding for properties that have no closed-form inverse.

mod error;

pub mod capability;
pub mod constants;
pub mod correlation;
pub mod fluid;
pub mod inverse;
pub mod limits;

pub use error::{ErrorKind, PropertyError};
