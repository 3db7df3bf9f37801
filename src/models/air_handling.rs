//! Single-path air-handling processes.
//!
//! Each process takes an inlet [`FlowOfHumidAir`](crate::support::flow::FlowOfHumidAir)
//! and a target, and returns an immutable result with the outlet flow and
//! what crossed the boundary to get there:
//!
//! - [`Heating`]: sensible heating to a temperature, relative humidity or heat input.
//! - [`Cooling`]: a coil with an apparatus dew point; may condense moisture.
//! - [`Humidification`]: steam injection.
//! - [`Mixing`]: adiabatic mixing of two or more streams.
//!
//! A target the inlet already satisfies returns at once with zero exchange.
//! Otherwise inputs are checked in order: presence, physical range,
//! reachability, and only then the numerical solve.

pub mod cooling;
pub mod heating;
pub mod humidification;
pub mod mixing;

mod error;
mod input;

pub use cooling::{Cooling, CoolingCoil, CoolingMode, CoolingResult, CoolingTarget};
pub use error::ProcessError;
pub use heating::{Heating, HeatingMode, HeatingResult, HeatingTarget};
pub use humidification::{
    Humidification, HumidificationMode, HumidificationResult, HumidificationTarget,
};
pub use input::{ProcessInput, ProcessInputBuilder};
pub use mixing::{Mixing, MixingResult};

/// The kind of process that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessType {
    Heating,
    Cooling,
    Humidification,
    Mixing,
}
