//! Canonical input events.
//!
//! Every key press or button click is translated by the presentation layer
//! into exactly one [`InputEvent`]. Payloads are validated at construction,
//! so the transition function never sees an out-of-range digit or a
//! negative tax rate.

use super::operator::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised while building an input event from raw input.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EventError {
    #[error("'{0}' is not a decimal digit")]
    NotADigit(char),

    #[error("'{0}' is not an operator (expected one of + - * /)")]
    UnknownOperator(char),

    #[error("Tax rate must be a finite, non-negative number (got {0})")]
    InvalidTaxRate(f64),
}

/// A single decimal digit `0`..=`9`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Digit(char);

impl Digit {
    pub fn new(c: char) -> Result<Self, EventError> {
        if c.is_ascii_digit() {
            Ok(Self(c))
        } else {
            Err(EventError::NotADigit(c))
        }
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl TryFrom<char> for Digit {
    type Error = EventError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tax surcharge rate in percent, e.g. `18.0` for 18% GST.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct TaxRate(f64);

impl TaxRate {
    pub fn new(percent: f64) -> Result<Self, EventError> {
        if percent.is_finite() && percent >= 0.0 {
            Ok(Self(percent))
        } else {
            Err(EventError::InvalidTaxRate(percent))
        }
    }

    pub fn percent(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for TaxRate {
    type Error = EventError;

    fn try_from(percent: f64) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl From<TaxRate> for f64 {
    fn from(rate: TaxRate) -> Self {
        rate.0
    }
}

/// One discrete input to the calculator engine.
///
/// # Example
///
/// ```rust
/// use tallybox::core::{InputEvent, Operator};
///
/// let events = [
///     InputEvent::digit('2').unwrap(),
///     InputEvent::Operator(Operator::Add),
///     InputEvent::digit('3').unwrap(),
///     InputEvent::Equals,
/// ];
/// assert_eq!(events.len(), 4);
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum InputEvent {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    ClearEntry,
    Backspace,
    Percent,
    MemoryAdd,
    MemorySubtract,
    MemoryRecall,
    MemoryClear,
    ApplyTax(TaxRate),
}

impl InputEvent {
    /// Shorthand for `InputEvent::Digit(Digit::new(c)?)`.
    pub fn digit(c: char) -> Result<Self, EventError> {
        Digit::new(c).map(Self::Digit)
    }

    /// Shorthand for `InputEvent::Operator(Operator::from_symbol(c)?)`.
    pub fn operator(symbol: char) -> Result<Self, EventError> {
        Operator::from_symbol(symbol).map(Self::Operator)
    }

    /// Shorthand for `InputEvent::ApplyTax(TaxRate::new(percent)?)`.
    pub fn tax(percent: f64) -> Result<Self, EventError> {
        TaxRate::new(percent).map(Self::ApplyTax)
    }

    /// Short name used in log records.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Digit(_) => "Digit",
            Self::Decimal => "Decimal",
            Self::Operator(_) => "Operator",
            Self::Equals => "Equals",
            Self::Clear => "Clear",
            Self::ClearEntry => "ClearEntry",
            Self::Backspace => "Backspace",
            Self::Percent => "Percent",
            Self::MemoryAdd => "MemoryAdd",
            Self::MemorySubtract => "MemorySubtract",
            Self::MemoryRecall => "MemoryRecall",
            Self::MemoryClear => "MemoryClear",
            Self::ApplyTax(_) => "ApplyTax",
        }
    }

    /// Events that type into the current operand.
    pub fn is_construction(&self) -> bool {
        matches!(self, Self::Digit(_) | Self::Decimal)
    }

    pub fn is_memory(&self) -> bool {
        matches!(
            self,
            Self::MemoryAdd | Self::MemorySubtract | Self::MemoryRecall | Self::MemoryClear
        )
    }
}
