//! # Twine Psychro
//!
//! Psychrometric (moist-air) property models and air-handling process models
//! for [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Air-handling processes as [`twine_core::Model`] implementations.
//! - [`support`]: Fluid properties, flows, and the utilities the models build on.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful
//! on their own (e.g., evaluating humid-air properties without running a process),
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Process-specific helpers live next to the process that needs them and only
//! move to [`support`] once a second process uses them.

pub mod models;
pub mod support;
