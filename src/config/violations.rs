//! Configuration violations.

use thiserror::Error;

/// A single problem found while validating a `SessionConfig`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Tax preset {rate} is negative")]
    NegativeTaxPreset { rate: f64 },

    #[error("Tax preset {rate} is not a finite number")]
    NonFiniteTaxPreset { rate: f64 },

    #[error("Tax preset {rate} is listed more than once")]
    DuplicateTaxPreset { rate: f64 },

    #[error("Undo depth must be at least 1")]
    ZeroUndoDepth,
}
