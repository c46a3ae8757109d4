//! Calculator state.
//!
//! `CalculatorState` is an immutable value: the transition function never
//! edits one in place, it builds the next one. The Normal/Error split is a
//! tagged enum so an error state cannot also carry a pending operator.

use super::display::{render, Snapshot};
use super::event::InputEvent;
use super::history::History;
use super::operator::Operator;
use super::transition::transition;
use serde::{Deserialize, Serialize};

/// Left-hand operand and the operator waiting for its right-hand side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pending {
    pub(crate) operand: String,
    pub(crate) operator: Operator,
}

impl Pending {
    pub(crate) fn new(operand: impl Into<String>, operator: Operator) -> Self {
        Self {
            operand: operand.into(),
            operator,
        }
    }

    pub fn operand(&self) -> &str {
        &self.operand
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }
}

/// Operand state while the calculator is not latched in error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub(crate) current: String,
    pub(crate) pending: Option<Pending>,
    pub(crate) awaiting_operand: bool,
}

impl Entry {
    pub(crate) fn with_current(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            ..Self::default()
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    pub fn is_awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }
}

/// The two macro-states of the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Mode {
    Normal(Entry),
    /// Latched after a division by zero
    Error,
}

impl Default for Mode {
    fn default() -> Self {
        Self::Normal(Entry::default())
    }
}

/// Coarse tag for the current mode, used in logs and the session timeline.
///
/// # Example
///
/// ```rust
/// use tallybox::core::{CalculatorState, InputEvent, Operator, Phase};
///
/// let state = CalculatorState::new();
/// assert_eq!(state.phase(), Phase::Entering);
///
/// let state = state
///     .apply(InputEvent::digit('8').unwrap())
///     .apply(InputEvent::Operator(Operator::Div));
/// assert_eq!(state.phase(), Phase::Awaiting);
/// assert_eq!(state.phase().name(), "Awaiting");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Digits extend the current operand
    Entering,
    /// The next digit starts a fresh operand
    Awaiting,
    /// Latched error
    Error,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Entering => "Entering",
            Self::Awaiting => "Awaiting",
            Self::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// Complete engine state: operand mode, memory register and history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub(crate) mode: Mode,
    pub(crate) memory: f64,
    pub(crate) history: History,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Fresh session state: nothing typed, memory 0, empty history.
    pub fn new() -> Self {
        Self {
            mode: Mode::default(),
            memory: 0.0,
            history: History::new(),
        }
    }

    /// Apply one event, returning the next state.
    ///
    /// Equivalent to [`transition`](crate::core::transition).
    pub fn apply(&self, event: InputEvent) -> Self {
        transition(self, event)
    }

    /// Apply events in order.
    pub fn apply_all<I>(&self, events: I) -> Self
    where
        I: IntoIterator<Item = InputEvent>,
    {
        events
            .into_iter()
            .fold(self.clone(), |state, event| transition(&state, event))
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn phase(&self) -> Phase {
        match &self.mode {
            Mode::Error => Phase::Error,
            Mode::Normal(entry) if entry.awaiting_operand => Phase::Awaiting,
            Mode::Normal(_) => Phase::Entering,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.mode, Mode::Error)
    }

    /// Operand being typed; empty in error.
    pub fn current_operand(&self) -> &str {
        match &self.mode {
            Mode::Normal(entry) => &entry.current,
            Mode::Error => "",
        }
    }

    /// Left-hand operand; empty unless an operator is pending.
    pub fn previous_operand(&self) -> &str {
        self.pending().map_or("", Pending::operand)
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending().map(Pending::operator)
    }

    pub fn is_awaiting_operand(&self) -> bool {
        match &self.mode {
            Mode::Normal(entry) => entry.awaiting_operand,
            Mode::Error => false,
        }
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Text the display shows for this state.
    pub fn display(&self) -> String {
        render(self)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(self)
    }

    fn pending(&self) -> Option<&Pending> {
        match &self.mode {
            Mode::Normal(entry) => entry.pending.as_ref(),
            Mode::Error => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_matches_session_start() {
        let state = CalculatorState::new();

        assert_eq!(state.current_operand(), "");
        assert_eq!(state.previous_operand(), "");
        assert_eq!(state.pending_operator(), None);
        assert!(!state.is_awaiting_operand());
        assert_eq!(state.memory(), 0.0);
        assert!(state.history().is_empty());
        assert!(!state.is_error());
        assert_eq!(state.phase(), Phase::Entering);
    }

    #[test]
    fn error_mode_hides_operands() {
        let state = CalculatorState {
            mode: Mode::Error,
            memory: 3.0,
            history: History::new(),
        };

        assert!(state.is_error());
        assert_eq!(state.phase(), Phase::Error);
        assert_eq!(state.current_operand(), "");
        assert_eq!(state.previous_operand(), "");
        assert_eq!(state.pending_operator(), None);
        assert!(!state.is_awaiting_operand());
        assert_eq!(state.memory(), 3.0);
    }

    #[test]
    fn pending_exposes_previous_operand_and_operator() {
        let state = CalculatorState {
            mode: Mode::Normal(Entry {
                current: String::new(),
                pending: Some(Pending::new("4", Operator::Mul)),
                awaiting_operand: true,
            }),
            memory: 0.0,
            history: History::new(),
        };

        assert_eq!(state.previous_operand(), "4");
        assert_eq!(state.pending_operator(), Some(Operator::Mul));
        assert_eq!(state.phase(), Phase::Awaiting);
    }

    #[test]
    fn phase_names_are_stable() {
        assert_eq!(Phase::Entering.name(), "Entering");
        assert_eq!(Phase::Awaiting.name(), "Awaiting");
        assert_eq!(Phase::Error.name(), "Error");
        assert!(Phase::Error.is_error());
        assert!(!Phase::Awaiting.is_error());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = CalculatorState::new().apply_all([
            InputEvent::digit('1').unwrap(),
            InputEvent::Decimal,
            InputEvent::digit('5').unwrap(),
            InputEvent::Operator(Operator::Add),
        ]);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn apply_does_not_touch_the_receiver() {
        let state = CalculatorState::new();
        let next = state.apply(InputEvent::digit('9').unwrap());

        assert_eq!(state.current_operand(), "");
        assert_eq!(next.current_operand(), "9");
    }
}
