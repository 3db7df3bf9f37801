use thiserror::Error;

use crate::support::{
    constraint::ConstraintError,
    thermo::{ErrorKind, PropertyError},
};

/// Errors that may occur while solving an air-handling process.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessError {
    /// A state, flow or inverse lookup failed.
    #[error(transparent)]
    Property(#[from] PropertyError),

    /// The target lies beyond what the process can reach from its inlet.
    #[error("unreachable target: {context} (target {target}, limit {limit})")]
    Unreachable {
        context: String,
        target: f64,
        limit: f64,
    },

    /// The outlet would hold more moisture than saturated air.
    #[error("supersaturated outlet: humidity ratio {humidity_ratio} exceeds {limit}")]
    Supersaturated { humidity_ratio: f64, limit: f64 },
}

impl ProcessError {
    /// Returns the broad classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Property(error) => error.kind(),
            Self::Unreachable { .. } | Self::Supersaturated { .. } => ErrorKind::Argument,
        }
    }

    pub(crate) fn unreachable(context: &str, target: f64, limit: f64) -> Self {
        Self::Unreachable {
            context: context.to_owned(),
            target,
            limit,
        }
    }
}

impl From<ConstraintError> for ProcessError {
    fn from(error: ConstraintError) -> Self {
        Self::Property(error.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_the_wrapped_error() {
        let missing: ProcessError = PropertyError::MissingArgument { name: "target" }.into();
        assert_eq!(missing.kind(), ErrorKind::MissingArgument);

        let unreachable = ProcessError::unreachable("heating below inlet", 5.0, 10.0);
        assert_eq!(unreachable.kind(), ErrorKind::Argument);
        assert_eq!(
            unreachable.to_string(),
            "unreachable target: heating below inlet (target 5, limit 10)"
        );

        let constraint = ProcessError::from(ConstraintError::NotANumber);
        assert_eq!(constraint.kind(), ErrorKind::Argument);
    }

    #[test]
    fn solver_passes_model_errors_through() {
        use twine_solvers::equation::bisection;

        use crate::support::thermo::inverse;

        let raised = ProcessError::Supersaturated {
            humidity_ratio: 0.05,
            limit: 0.03,
        };
        let error: ProcessError =
            inverse::solver_error("steam for target", bisection::Error::Model(Box::new(raised.clone())));
        assert_eq!(error, raised);

        let wrapped = PropertyError::MissingArgument { name: "inlet" };
        let error: ProcessError =
            inverse::solver_error("steam for target", bisection::Error::Model(Box::new(wrapped.clone())));
        assert_eq!(error, ProcessError::Property(wrapped));
    }
}
