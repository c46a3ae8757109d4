//! Build errors for the session builder.

use crate::config::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when building a session.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid session configuration: {}", describe(.0))]
    InvalidConfig(Vec<ConfigViolation>),

    #[error("Initial state has a malformed operand: {0:?}")]
    MalformedInitialState(String),
}

impl BuildError {
    /// Violations behind an `InvalidConfig` error.
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            Self::InvalidConfig(violations) => violations,
            Self::MalformedInitialState(_) => &[],
        }
    }
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
