//! Session configuration.
//!
//! Configuration is plain data with serde support; [`rules::validate`]
//! checks it with Stillwater's `Validation`, reporting every problem in one
//! pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use tallybox::config::{validate, SessionConfig};
//!
//! let config = SessionConfig::default();
//! assert_eq!(config.tax_presets, vec![0.0, 5.0, 9.0, 12.0, 18.0, 28.0]);
//! assert!(validate(&config).is_success());
//! ```

pub mod rules;
pub mod violations;

pub use rules::validate;
pub use violations::ConfigViolation;

use crate::core::TaxRate;
use serde::{Deserialize, Serialize};

/// GST slabs offered as one-tap presets.
pub const DEFAULT_TAX_PRESETS: [f64; 6] = [0.0, 5.0, 9.0, 12.0, 18.0, 28.0];

/// Number of prior states kept for undo.
pub const DEFAULT_UNDO_DEPTH: usize = 64;

/// Tunable settings for a calculator session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Tax rates (percent) offered as presets, in display order
    pub tax_presets: Vec<f64>,
    /// Maximum number of states kept on the undo stack; also caps the
    /// session timeline
    pub undo_depth: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tax_presets: DEFAULT_TAX_PRESETS.to_vec(),
            undo_depth: DEFAULT_UNDO_DEPTH,
        }
    }
}

impl SessionConfig {
    /// Presets as validated rates; invalid entries are skipped.
    pub fn tax_rates(&self) -> Vec<TaxRate> {
        self.tax_presets
            .iter()
            .filter_map(|&rate| TaxRate::new(rate).ok())
            .collect()
    }
}
