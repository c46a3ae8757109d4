//! Builder for constructing sessions.

use crate::builder::error::BuildError;
use crate::config::{validate, SessionConfig};
use crate::core::CalculatorState;
use crate::session::Session;
use stillwater::validation::Validation;

/// Builder for constructing sessions with a fluent API.
///
/// # Example
///
/// ```rust
/// use tallybox::builder::SessionBuilder;
///
/// let session = SessionBuilder::new()
///     .tax_presets([5.0, 12.0, 18.0])
///     .undo_depth(16)
///     .build()
///     .unwrap();
///
/// assert_eq!(session.tax_rates().len(), 3);
/// assert_eq!(session.config().undo_depth, 16);
/// ```
pub struct SessionBuilder {
    config: SessionConfig,
    initial: Option<CalculatorState>,
}

impl SessionBuilder {
    /// Create a new builder seeded with the default configuration.
    pub fn new() -> Self {
        Self {
            config: SessionConfig::default(),
            initial: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the tax preset list.
    pub fn tax_presets<I>(mut self, rates: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        self.config.tax_presets = rates.into_iter().collect();
        self
    }

    /// Append one tax preset.
    pub fn tax_preset(mut self, rate: f64) -> Self {
        self.config.tax_presets.push(rate);
        self
    }

    /// Set the undo stack depth.
    pub fn undo_depth(mut self, depth: usize) -> Self {
        self.config.undo_depth = depth;
        self
    }

    /// Start from an existing state instead of a fresh one.
    pub fn initial(mut self, state: CalculatorState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Build the session.
    /// Returns an error listing every configuration problem found.
    pub fn build(self) -> Result<Session, BuildError> {
        if let Validation::Failure(errors) = validate(&self.config) {
            return Err(BuildError::InvalidConfig(errors.iter().cloned().collect()));
        }

        let initial = match self.initial {
            Some(state) => {
                check_operands(&state)?;
                state
            }
            None => CalculatorState::new(),
        };

        Ok(Session::from_parts(self.config, initial))
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// States normally come from `transition`; a seeded one may have been
/// deserialized, so re-check the operand invariants.
fn check_operands(state: &CalculatorState) -> Result<(), BuildError> {
    let operands = [state.current_operand(), state.previous_operand()];
    match operands.iter().find(|text| text.matches('.').count() > 1) {
        Some(text) => Err(BuildError::MalformedInitialState(text.to_string())),
        None => Ok(()),
    }
}
