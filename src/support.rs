//! Supporting utilities used by models.
//!
//! - [`constraint`]: Numeric invariants encoded in the type system.
//! - [`flow`]: A fluid state bound to a flow rate.
//! - [`heat_flow`]: Directional heat exchange across a process boundary.
//! - [`thermo`]: Psychrometric property model for dry air, water and humid air.
//! - [`units`]: Extensions to [`uom`].

pub mod constraint;
pub mod flow;
pub mod heat_flow;
pub mod thermo;
pub mod units;
