//! Binary operators understood by the engine.

use super::event::EventError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four arithmetic operators a calculator key can arm.
///
/// # Example
///
/// ```rust
/// use tallybox::core::Operator;
///
/// let op = Operator::from_symbol('*').unwrap();
/// assert_eq!(op, Operator::Mul);
/// assert_eq!(op.symbol(), '*');
/// assert_eq!(op.apply(6.0, 7.0), 42.0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Parse the ASCII symbol used on the keypad and in history lines.
    pub fn from_symbol(symbol: char) -> Result<Self, EventError> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Sub),
            '*' => Ok(Self::Mul),
            '/' => Ok(Self::Div),
            other => Err(EventError::UnknownOperator(other)),
        }
    }

    /// The symbol shown on the display and written to history.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Apply the operator with IEEE-754 semantics.
    ///
    /// Division by zero is not special-cased here; the transition function
    /// checks the divisor before calling this.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = EventError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol)
    }
}
