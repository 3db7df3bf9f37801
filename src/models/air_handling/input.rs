use crate::support::{flow::FlowOfHumidAir, thermo::PropertyError};

/// An inlet flow paired with a process target.
///
/// This is the input of every single-inlet process model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessInput<T> {
    pub inlet: FlowOfHumidAir,
    pub target: T,
}

impl<T> ProcessInput<T> {
    #[must_use]
    pub fn new(inlet: FlowOfHumidAir, target: T) -> Self {
        Self { inlet, target }
    }

    #[must_use]
    pub fn builder() -> ProcessInputBuilder<T> {
        ProcessInputBuilder {
            inlet: None,
            target: None,
        }
    }
}

/// Collects a process input whose parts may arrive separately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessInputBuilder<T> {
    inlet: Option<FlowOfHumidAir>,
    target: Option<T>,
}

impl<T> ProcessInputBuilder<T> {
    #[must_use]
    pub fn inlet(mut self, inlet: FlowOfHumidAir) -> Self {
        self.inlet = Some(inlet);
        self
    }

    #[must_use]
    pub fn target(mut self, target: T) -> Self {
        self.target = Some(target);
        self
    }

    /// Builds the input.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::MissingArgument`] if the inlet or target is unset.
    pub fn build(self) -> Result<ProcessInput<T>, PropertyError> {
        Ok(ProcessInput {
            inlet: PropertyError::require(self.inlet, "inlet flow")?,
            target: PropertyError::require(self.target, "target")?,
        })
    }
}
