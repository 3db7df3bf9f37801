use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Broad classification of failures, shared by every error type in the crate.
///
/// Callers usually treat [`ErrorKind::MissingArgument`] and
/// [`ErrorKind::Argument`] as bad input and [`ErrorKind::Computation`] as a
/// limitation of the numerical model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required input was not supplied.
    MissingArgument,
    /// An input violates a physical or engine-defined bound.
    Argument,
    /// An iterative inversion did not converge.
    Computation,
}

/// Errors that may occur when constructing states and flows or evaluating properties.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    /// A required input was absent.
    #[error("missing argument: {name}")]
    MissingArgument { name: &'static str },

    /// A quantity lies outside its validity range.
    ///
    /// Values and bounds are reported in `unit`.
    #[error("{name} out of range: {value} {unit} not in [{min}, {max}] {unit}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
        unit: &'static str,
    },

    /// The inputs are individually valid but do not form a physical state.
    ///
    /// For example, a vapour partial pressure at or above the total pressure.
    #[error("invalid state: {context} (value {value}, limit {limit})")]
    InvalidState {
        context: String,
        value: f64,
        limit: f64,
    },

    /// Two inputs that each fix the same quantity were both supplied.
    #[error("conflicting arguments: {first} and {second}")]
    ConflictingArguments {
        first: &'static str,
        second: &'static str,
    },

    /// A stored invariant was violated.
    #[error("constraint violation: {0}")]
    Constraint(#[from] ConstraintError),

    /// The solver rejected its bracket or configuration before iterating.
    #[error("{context}: {reason}")]
    SolverSetup { context: String, reason: String },

    /// An inverse solve failed to converge within its iteration budget.
    #[error("{context}: no convergence after {iterations} iterations (last iterate {last_iterate})")]
    Computation {
        context: String,
        last_iterate: f64,
        iterations: usize,
    },
}

impl PropertyError {
    /// Returns the broad classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument { .. } => ErrorKind::MissingArgument,
            Self::OutOfRange { .. }
            | Self::InvalidState { .. }
            | Self::ConflictingArguments { .. }
            | Self::SolverSetup { .. }
            | Self::Constraint(_) => ErrorKind::Argument,
            Self::Computation { .. } => ErrorKind::Computation,
        }
    }

    /// Returns `value` or a [`PropertyError::MissingArgument`] naming it.
    ///
    /// # Errors
    ///
    /// Fails when `value` is `None`.
    pub fn require<T>(value: Option<T>, name: &'static str) -> Result<T, Self> {
        value.ok_or(Self::MissingArgument { name })
    }
}
