//! Tallybox: a pure functional calculator engine
//!
//! Tallybox follows the "pure core, imperative shell" philosophy. The core
//! is a single function, `transition(state, event) -> state`, that turns one
//! keystroke into the next immutable `CalculatorState`; the shell keeps the
//! latest state, undo/redo, timestamps and logs.
//!
//! # Core Concepts
//!
//! - **Input events**: digits, decimal point, operators, equals, clears,
//!   backspace, percent, memory and tax keys
//! - **State**: operands as text, one pending operator, a memory register
//!   and a calculation history, with division by zero latched as data
//! - **Projection**: a pure `render` that produces the display line
//!
//! # Example
//!
//! ```rust
//! use tallybox::core::{CalculatorState, InputEvent, Operator};
//!
//! let state = CalculatorState::new().apply_all([
//!     InputEvent::digit('1').unwrap(),
//!     InputEvent::digit('0').unwrap(),
//!     InputEvent::digit('0').unwrap(),
//!     InputEvent::tax(18.0).unwrap(),
//! ]);
//!
//! assert_eq!(state.display(), "118");
//! assert_eq!(state.history().lines(), vec!["100 + 18% GST = 118"]);
//!
//! let state = state
//!     .apply(InputEvent::Operator(Operator::Div))
//!     .apply(InputEvent::digit('0').unwrap())
//!     .apply(InputEvent::Equals);
//! assert!(state.is_error());
//! assert_eq!(state.display(), "Error");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod keys;
pub mod session;

// Re-export commonly used types
pub use builder::{BuildError, SessionBuilder};
pub use core::{render, transition, CalculatorState, InputEvent, Operator, Snapshot};
pub use session::Session;
