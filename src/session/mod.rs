//! Imperative shell around the pure engine.
//!
//! This module keeps everything the core deliberately avoids: a mutable
//! "latest state" slot, wall-clock timestamps, undo/redo stacks and
//! structured logging through `tracing`.
//!
//! # Example
//!
//! ```rust
//! use tallybox::core::{InputEvent, Operator};
//! use tallybox::session::Session;
//!
//! let mut session = Session::new();
//! session.dispatch(InputEvent::digit('6').unwrap());
//! session.dispatch(InputEvent::Operator(Operator::Mul));
//! session.dispatch(InputEvent::digit('7').unwrap());
//! let snapshot = session.dispatch(InputEvent::Equals);
//!
//! assert_eq!(snapshot.display, "42");
//! assert!(session.undo());
//! assert_eq!(session.snapshot().display, "6 * 7");
//! ```

mod machine;
mod timeline;

pub use machine::Session;
pub use timeline::{PhaseTransition, Timeline};
