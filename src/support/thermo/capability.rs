//! Capability traits for querying fluid states.
//!
//! Each fluid value object implements the capabilities it supports, and
//! generic code states exactly which properties it relies on. A fluid that
//! provides the full set gets [`FluidProperties`] for free.

mod properties;

pub use properties::*;
