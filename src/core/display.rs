//! Display projection.
//!
//! Pure functions that turn a `CalculatorState` into what the presentation
//! layer shows. Nothing here feeds back into the engine.

use super::number::format_memory;
use super::state::{CalculatorState, Mode, Phase};
use serde::{Deserialize, Serialize};

/// Text shown on the display while latched in error.
pub const ERROR_MARKER: &str = "Error";

/// Render the display line for `state`.
///
/// Priority: error marker, then `"{previous} {op} {current}"` while an
/// operator is pending, then the current operand, then `"0"`.
///
/// # Example
///
/// ```rust
/// use tallybox::core::{render, CalculatorState, InputEvent, Operator};
///
/// let state = CalculatorState::new();
/// assert_eq!(render(&state), "0");
///
/// let state = state
///     .apply(InputEvent::digit('7').unwrap())
///     .apply(InputEvent::Operator(Operator::Mul));
/// assert_eq!(render(&state), "7 * ");
///
/// let state = state.apply(InputEvent::digit('6').unwrap());
/// assert_eq!(render(&state), "7 * 6");
/// ```
pub fn render(state: &CalculatorState) -> String {
    let entry = match &state.mode {
        Mode::Error => return ERROR_MARKER.to_string(),
        Mode::Normal(entry) => entry,
    };

    match &entry.pending {
        Some(pending) => format!(
            "{} {} {}",
            pending.operand, pending.operator, entry.current
        ),
        None if entry.current.is_empty() => "0".to_string(),
        None => entry.current.clone(),
    }
}

/// Everything the presentation layer needs to redraw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub display: String,
    pub memory: f64,
    /// Memory formatted with two fraction digits
    pub memory_display: String,
    /// History lines, oldest first
    pub history: Vec<String>,
    pub phase: Phase,
}

impl Snapshot {
    pub fn of(state: &CalculatorState) -> Self {
        Self {
            display: render(state),
            memory: state.memory,
            memory_display: format_memory(state.memory),
            history: state.history.lines(),
            phase: state.phase(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
