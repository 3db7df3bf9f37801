//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are grouped by domain. Currently there is a single domain,
//! [`air_handling`], covering the single-path processes found in air-handling
//! units: heating, cooling, humidification and mixing.
//!
//! # Model structure
//!
//! Each process type owns its configuration and exposes a direct `process`
//! method. The [`twine_core::Model`] implementation is a thin adapter that
//! delegates to that method so processes can be composed and solved with the
//! rest of the Twine ecosystem.

pub mod air_handling;
