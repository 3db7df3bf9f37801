//! Heat exchanged between an air stream and its surroundings.

use std::cmp::Ordering;

use uom::{ConstZero, si::f64::Power};

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};

/// Direction and magnitude of heat crossing a process boundary.
///
/// Directions are relative to the air stream: a heating coil adds heat
/// ([`HeatFlow::In`]) and a cooling coil removes it ([`HeatFlow::Out`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeatFlow {
    In(Constrained<Power, StrictlyPositive>),
    Out(Constrained<Power, StrictlyPositive>),
    None,
}

impl HeatFlow {
    /// Creates a [`HeatFlow::In`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `heat` is not strictly positive.
    pub fn added(heat: Power) -> Result<Self, ConstraintError> {
        Ok(Self::In(StrictlyPositive::new(heat)?))
    }

    /// Creates a [`HeatFlow::Out`] from the (positive) heat removed.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `heat` is not strictly positive.
    pub fn removed(heat: Power) -> Result<Self, ConstraintError> {
        Ok(Self::Out(StrictlyPositive::new(heat)?))
    }

    /// Classifies a signed heat rate, positive into the stream.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::NotANumber`] for `NaN`.
    pub fn from_signed(heat: Power) -> Result<Self, ConstraintError> {
        match heat.partial_cmp(&Power::ZERO) {
            Some(Ordering::Greater) => Self::added(heat),
            Some(Ordering::Less) => Self::removed(-heat),
            Some(Ordering::Equal) => Ok(Self::None),
            None => Err(ConstraintError::NotANumber),
        }
    }

    /// Returns the heat rate, positive into the stream.
    #[must_use]
    pub fn signed(&self) -> Power {
        match self {
            Self::In(heat) => heat.into_inner(),
            Self::Out(heat) => -heat.into_inner(),
            Self::None => Power::ZERO,
        }
    }

    /// Returns the heat rate regardless of direction.
    #[must_use]
    pub fn magnitude(&self) -> Power {
        match self {
            Self::In(heat) | Self::Out(heat) => heat.into_inner(),
            Self::None => Power::ZERO,
        }
    }
}
