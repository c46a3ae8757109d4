//! Calculation history.
//!
//! Provides immutable tracking of completed calculations, following the
//! same record-returns-a-new-value style as the rest of the core.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The engine's only arithmetic failure.
///
/// It is never returned as an `Err`; it is stored in history and latches the
/// state into `Mode::Error`.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalcError {
    #[error("Division by zero")]
    DivisionByZero,
}

/// Right-hand side of a history line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// Formatted numeric result
    Value(String),
    /// Error marker for an undefined result
    Error(CalcError),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(text) => f.write_str(text),
            Self::Error(err) => write!(f, "Error ({err})"),
        }
    }
}

/// A completed calculation, immutable once recorded.
///
/// # Example
///
/// ```rust
/// use tallybox::core::{CalcError, HistoryEntry, Outcome};
///
/// let ok = HistoryEntry::new("2 + 3", Outcome::Value("5".to_string()));
/// assert_eq!(ok.to_string(), "2 + 3 = 5");
///
/// let failed = HistoryEntry::new("5 / 0", Outcome::Error(CalcError::DivisionByZero));
/// assert_eq!(failed.to_string(), "5 / 0 = Error (Division by zero)");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    expression: String,
    result: Outcome,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: Outcome) -> Self {
        Self {
            expression: expression.into(),
            result,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn result(&self) -> &Outcome {
        &self.result
    }

    pub fn is_error(&self) -> bool {
        matches!(self.result, Outcome::Error(_))
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.result)
    }
}

/// Ordered log of completed calculations.
///
/// History is immutable - `record` returns a new history with the entry
/// appended and leaves the receiver untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new history.
    ///
    /// ```rust
    /// use tallybox::core::{History, HistoryEntry, Outcome};
    ///
    /// let history = History::new();
    /// let entry = HistoryEntry::new("1 + 1", Outcome::Value("2".to_string()));
    ///
    /// let updated = history.record(entry);
    /// assert_eq!(updated.len(), 1);
    /// assert!(history.is_empty()); // left untouched
    /// ```
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rendered lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}
