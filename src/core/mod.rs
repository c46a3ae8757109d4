//! Core calculator engine.
//!
//! This module contains the pure functional core:
//! - Input events and operators
//! - The immutable `CalculatorState` and its history
//! - The `transition` function and the display projection
//!
//! All logic in this module is pure (no side effects, no logging, no
//! clock reads), following the "pure core, imperative shell" philosophy.

mod display;
mod event;
mod history;
pub mod number;
mod operator;
mod state;
mod transition;

pub use display::{render, Snapshot, ERROR_MARKER};
pub use event::{Digit, EventError, InputEvent, TaxRate};
pub use history::{CalcError, History, HistoryEntry, Outcome};
pub use operator::Operator;
pub use state::{CalculatorState, Entry, Mode, Pending, Phase};
pub use transition::transition;
