//! Builder API for ergonomic session construction.
//!
//! This module provides a fluent builder that validates configuration
//! before a session exists, plus a few shorthand constructors.

pub mod error;
pub mod session;

pub use error::BuildError;
pub use session::SessionBuilder;

use crate::session::Session;

/// Create a session offering only the given tax presets.
///
/// # Example
///
/// ```
/// use tallybox::builder::session_with_presets;
///
/// let session = session_with_presets([5.0, 18.0]).unwrap();
/// assert_eq!(session.tax_rates().len(), 2);
///
/// assert!(session_with_presets([-1.0]).is_err());
/// ```
pub fn session_with_presets<I>(rates: I) -> Result<Session, BuildError>
where
    I: IntoIterator<Item = f64>,
{
    SessionBuilder::new().tax_presets(rates).build()
}

/// Create a session without undo history beyond a single step.
///
/// # Example
///
/// ```
/// use tallybox::builder::single_undo_session;
/// use tallybox::core::InputEvent;
///
/// let mut session = single_undo_session();
/// session.dispatch(InputEvent::digit('1').unwrap());
/// session.dispatch(InputEvent::digit('2').unwrap());
/// assert!(session.undo());
/// assert!(!session.undo());
/// ```
pub fn single_undo_session() -> Session {
    Session::from_parts(
        crate::config::SessionConfig {
            undo_depth: 1,
            ..Default::default()
        },
        crate::core::CalculatorState::new(),
    )
}
