//! The pure transition function.
//!
//! `transition(state, event)` is total: every event has a defined result
//! for every reachable state, and nothing here panics or returns an error.
//! Inputs that make no sense in context leave the state unchanged.

use super::event::{Digit, InputEvent, TaxRate};
use super::history::{CalcError, History, HistoryEntry, Outcome};
use super::number::{format_number, parse_operand};
use super::operator::Operator;
use super::state::{CalculatorState, Entry, Mode, Pending};

/// Compute the state that follows `state` after `event`.
///
/// # Example
///
/// ```rust
/// use tallybox::core::{transition, CalculatorState, InputEvent, Operator};
///
/// let mut state = CalculatorState::new();
/// for event in [
///     InputEvent::digit('2').unwrap(),
///     InputEvent::Operator(Operator::Add),
///     InputEvent::digit('3').unwrap(),
///     InputEvent::Equals,
/// ] {
///     state = transition(&state, event);
/// }
///
/// assert_eq!(state.display(), "5");
/// assert_eq!(state.history().lines(), vec!["2 + 3 = 5"]);
/// ```
pub fn transition(state: &CalculatorState, event: InputEvent) -> CalculatorState {
    match &state.mode {
        Mode::Error => recover(state, event),
        Mode::Normal(entry) => step(state, entry, event),
    }
}

/// Events arriving while latched in error.
fn recover(state: &CalculatorState, event: InputEvent) -> CalculatorState {
    match event {
        InputEvent::Clear | InputEvent::ClearEntry => state.cleared(),
        // Nothing to evaluate; the marker stays up.
        InputEvent::Equals => state.clone(),
        // Digits and the decimal point seed the fresh operand.
        event if event.is_construction() => transition(&state.reset(), event),
        // Anything else is consumed as a reset trigger.
        _ => state.reset(),
    }
}

fn step(state: &CalculatorState, entry: &Entry, event: InputEvent) -> CalculatorState {
    match event {
        InputEvent::Digit(digit) => state.with_entry(push_digit(entry, digit)),
        InputEvent::Decimal => match push_decimal(entry) {
            Some(next) => state.with_entry(next),
            None => state.clone(),
        },
        InputEvent::Operator(op) => press_operator(state, entry, op),
        InputEvent::Equals => press_equals(state, entry),
        InputEvent::Clear => state.cleared(),
        InputEvent::ClearEntry => match &entry.pending {
            Some(pending) => state.with_entry(Entry {
                current: String::new(),
                pending: Some(pending.clone()),
                awaiting_operand: true,
            }),
            None => state.reset(),
        },
        InputEvent::Backspace => match backspace(entry) {
            Some(next) => state.with_entry(next),
            None => state.clone(),
        },
        InputEvent::Percent => match effective_value(entry) {
            Some(value) => state.with_entry(Entry {
                current: format_number(value / 100.0),
                pending: entry.pending.clone(),
                awaiting_operand: true,
            }),
            None => state.clone(),
        },
        InputEvent::MemoryAdd => match effective_value(entry) {
            Some(value) => state.store_memory(state.memory + value),
            None => state.clone(),
        },
        InputEvent::MemorySubtract => match effective_value(entry) {
            Some(value) => state.store_memory(state.memory - value),
            None => state.clone(),
        },
        InputEvent::MemoryRecall => state.with_entry(Entry::with_current(format_number(
            state.memory,
        ))),
        InputEvent::MemoryClear => state.with_memory(0.0),
        InputEvent::ApplyTax(rate) => apply_tax(state, entry, rate),
    }
}

fn push_digit(entry: &Entry, digit: Digit) -> Entry {
    let current = if entry.awaiting_operand || entry.current == "0" {
        digit.as_char().to_string()
    } else {
        let mut current = entry.current.clone();
        current.push(digit.as_char());
        current
    };

    Entry {
        current,
        pending: entry.pending.clone(),
        awaiting_operand: false,
    }
}

/// `None` when the operand already has a decimal point.
fn push_decimal(entry: &Entry) -> Option<Entry> {
    let current = if entry.awaiting_operand || entry.current.is_empty() {
        "0.".to_string()
    } else if entry.current.contains('.') {
        return None;
    } else {
        format!("{}.", entry.current)
    };

    Some(Entry {
        current,
        pending: entry.pending.clone(),
        awaiting_operand: false,
    })
}

fn press_operator(state: &CalculatorState, entry: &Entry, op: Operator) -> CalculatorState {
    match &entry.pending {
        // A second operand exists: fold it in before arming the new operator.
        Some(pending) if !entry.current.is_empty() => {
            match evaluate(pending, &entry.current) {
                Evaluation::Value { expression, result } => {
                    let text = format_number(result);
                    let history = state.history.record(HistoryEntry::new(
                        expression,
                        Outcome::Value(text.clone()),
                    ));
                    state.with_entry(awaiting(Pending::new(text, op))).with_history(history)
                }
                Evaluation::DivisionByZero { expression } => state.divided_by_zero(expression),
                Evaluation::Malformed => state.clone(),
            }
        }
        // Operator rebinding.
        Some(pending) => state.with_entry(awaiting(Pending::new(pending.operand.clone(), op))),
        None => {
            let operand = if entry.current.is_empty() {
                "0".to_string()
            } else {
                entry.current.clone()
            };
            state.with_entry(awaiting(Pending::new(operand, op)))
        }
    }
}

fn press_equals(state: &CalculatorState, entry: &Entry) -> CalculatorState {
    let Some(pending) = &entry.pending else {
        return state.clone();
    };
    if entry.current.is_empty() {
        return state.clone();
    }

    match evaluate(pending, &entry.current) {
        Evaluation::Value { expression, result } => {
            let text = format_number(result);
            let history = state
                .history
                .record(HistoryEntry::new(expression, Outcome::Value(text.clone())));
            state
                .with_entry(Entry {
                    current: text,
                    pending: None,
                    awaiting_operand: true,
                })
                .with_history(history)
        }
        Evaluation::DivisionByZero { expression } => state.divided_by_zero(expression),
        Evaluation::Malformed => state.clone(),
    }
}

/// `None` when there is nothing to erase.
fn backspace(entry: &Entry) -> Option<Entry> {
    if entry.awaiting_operand || entry.current.is_empty() {
        return None;
    }

    let mut current = entry.current.clone();
    current.pop();
    if current.is_empty() || current == "-" {
        return Some(Entry {
            current: String::new(),
            pending: entry.pending.clone(),
            awaiting_operand: entry.pending.is_some(),
        });
    }

    Some(Entry {
        current,
        pending: entry.pending.clone(),
        awaiting_operand: false,
    })
}

fn apply_tax(state: &CalculatorState, entry: &Entry, rate: TaxRate) -> CalculatorState {
    let Some(value) = effective_value(entry) else {
        return state.clone();
    };

    let result = value * (1.0 + rate.percent() / 100.0);
    let text = format_number(result);
    let expression = format!(
        "{} + {}% GST",
        format_number(value),
        format_number(rate.percent())
    );
    let history = state
        .history
        .record(HistoryEntry::new(expression, Outcome::Value(text.clone())));

    state
        .with_entry(Entry {
            current: text,
            pending: entry.pending.clone(),
            awaiting_operand: true,
        })
        .with_history(history)
}

/// The number the user is looking at.
///
/// The typed operand when there is one; otherwise the display, which reads
/// `0` with nothing pending and is an unfinished expression (no value) when
/// an operator is pending.
fn effective_value(entry: &Entry) -> Option<f64> {
    if !entry.current.is_empty() {
        parse_operand(&entry.current)
    } else if entry.pending.is_some() {
        None
    } else {
        Some(0.0)
    }
}

enum Evaluation {
    Value { expression: String, result: f64 },
    DivisionByZero { expression: String },
    Malformed,
}

fn evaluate(pending: &Pending, rhs_text: &str) -> Evaluation {
    let (Some(lhs), Some(rhs)) = (parse_operand(&pending.operand), parse_operand(rhs_text)) else {
        return Evaluation::Malformed;
    };

    let expression = format!(
        "{} {} {}",
        format_number(lhs),
        pending.operator,
        format_number(rhs)
    );

    // `-0.0 == 0.0` holds, so negative zero is caught too.
    if pending.operator == Operator::Div && rhs == 0.0 {
        return Evaluation::DivisionByZero { expression };
    }

    Evaluation::Value {
        expression,
        result: pending.operator.apply(lhs, rhs),
    }
}

fn awaiting(pending: Pending) -> Entry {
    Entry {
        current: String::new(),
        pending: Some(pending),
        awaiting_operand: true,
    }
}

impl CalculatorState {
    fn with_entry(&self, entry: Entry) -> Self {
        Self {
            mode: Mode::Normal(entry),
            memory: self.memory,
            history: self.history.clone(),
        }
    }

    fn with_memory(&self, memory: f64) -> Self {
        Self {
            memory,
            ..self.clone()
        }
    }

    /// Memory only ever holds finite values; an overflowing update is dropped.
    fn store_memory(&self, memory: f64) -> Self {
        if memory.is_finite() {
            self.with_memory(memory)
        } else {
            self.clone()
        }
    }

    fn with_history(self, history: History) -> Self {
        Self { history, ..self }
    }

    /// Operand state back to defaults; memory and history survive.
    fn reset(&self) -> Self {
        self.with_entry(Entry::default())
    }

    /// Full clear: operand state and history. Memory survives.
    fn cleared(&self) -> Self {
        Self {
            mode: Mode::default(),
            memory: self.memory,
            history: History::new(),
        }
    }

    fn divided_by_zero(&self, expression: String) -> Self {
        Self {
            mode: Mode::Error,
            memory: self.memory,
            history: self.history.record(HistoryEntry::new(
                expression,
                Outcome::Error(CalcError::DivisionByZero),
            )),
        }
    }
}
