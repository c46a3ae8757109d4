//! Session that drives the pure engine.

use crate::config::SessionConfig;
use crate::core::{transition, CalculatorState, InputEvent, Snapshot, TaxRate};
use crate::keys::event_for_key;
use crate::session::timeline::{PhaseTransition, Timeline};
use chrono::Utc;
use std::collections::VecDeque;
use tracing::{debug, info};
use uuid::Uuid;

/// Holds the latest `CalculatorState` and replaces it on every event.
///
/// The session is the only writer of its state. Each dispatched event
/// swaps in a whole new state; the previous one goes on a bounded undo
/// stack. Events that leave the state unchanged are not recorded.
pub struct Session {
    id: Uuid,
    config: SessionConfig,
    tax_rates: Vec<TaxRate>,
    current: CalculatorState,
    undo_stack: VecDeque<CalculatorState>,
    redo_stack: Vec<CalculatorState>,
    timeline: Timeline,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session with the default configuration.
    pub fn new() -> Self {
        Self::from_parts(SessionConfig::default(), CalculatorState::new())
    }

    /// Assemble a session from an already validated configuration.
    pub(crate) fn from_parts(config: SessionConfig, initial: CalculatorState) -> Self {
        let id = Uuid::new_v4();
        debug!(session = %id, undo_depth = config.undo_depth, "session started");
        Self {
            id,
            tax_rates: config.tax_rates(),
            config,
            current: initial,
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            timeline: Timeline::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.current
    }

    pub fn snapshot(&self) -> Snapshot {
        self.current.snapshot()
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Configured tax presets, in display order.
    pub fn tax_rates(&self) -> &[TaxRate] {
        &self.tax_rates
    }

    /// Apply one event and return the new snapshot.
    pub fn dispatch(&mut self, event: InputEvent) -> Snapshot {
        let next = transition(&self.current, event);

        if next == self.current {
            debug!(session = %self.id, event = event.name(), "event left state unchanged");
            return self.snapshot();
        }

        let from = self.current.phase();
        let to = next.phase();
        if from != to {
            let transition = PhaseTransition {
                from,
                to,
                event,
                timestamp: Utc::now(),
            };
            self.timeline =
                std::mem::take(&mut self.timeline).record_bounded(transition, self.config.undo_depth);
        }

        let previous = std::mem::replace(&mut self.current, next);
        self.push_undo(previous);
        self.redo_stack.clear();

        debug!(
            session = %self.id,
            event = event.name(),
            from = from.name(),
            to = to.name(),
            display = %self.current.display(),
            "applied input event"
        );
        if event.is_memory() {
            debug!(session = %self.id, memory = self.current.memory(), "memory register updated");
        }
        if to.is_error() && !from.is_error() {
            if let Some(entry) = self.current.history().last() {
                info!(session = %self.id, entry = %entry, "calculation failed");
            }
        }

        self.snapshot()
    }

    /// Apply events in order and return the final snapshot.
    pub fn dispatch_all<I>(&mut self, events: I) -> Snapshot
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.dispatch(event);
        }
        self.snapshot()
    }

    /// Dispatch the event mapped to a key name.
    ///
    /// Returns `None` (and changes nothing) for keys with no mapping.
    pub fn press_key(&mut self, key: &str) -> Option<Snapshot> {
        match event_for_key(key) {
            Some(event) => Some(self.dispatch(event)),
            None => {
                debug!(session = %self.id, key, "ignored unmapped key");
                None
            }
        }
    }

    /// Apply the tax preset at `index` in the configured list.
    pub fn apply_tax_preset(&mut self, index: usize) -> Option<Snapshot> {
        let rate = *self.tax_rates.get(index)?;
        Some(self.dispatch(InputEvent::ApplyTax(rate)))
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Restore the state before the last applied event.
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo_stack.pop_back() else {
            return false;
        };
        let undone = std::mem::replace(&mut self.current, previous);
        self.redo_stack.push(undone);
        debug!(session = %self.id, display = %self.current.display(), "undo");
        true
    }

    /// Re-apply the most recently undone state.
    ///
    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        let previous = std::mem::replace(&mut self.current, next);
        self.push_undo(previous);
        debug!(session = %self.id, display = %self.current.display(), "redo");
        true
    }

    fn push_undo(&mut self, state: CalculatorState) {
        if self.undo_stack.len() == self.config.undo_depth {
            self.undo_stack.pop_front();
        }
        self.undo_stack.push_back(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Operator, Phase};

    fn d(c: char) -> InputEvent {
        InputEvent::digit(c).unwrap()
    }

    #[test]
    fn dispatch_returns_snapshot() {
        let mut session = Session::new();
        session.dispatch(d('2'));
        session.dispatch(InputEvent::Operator(Operator::Add));
        session.dispatch(d('3'));
        let snapshot = session.dispatch(InputEvent::Equals);

        assert_eq!(snapshot.display, "5");
        assert_eq!(snapshot.history, vec!["2 + 3 = 5"]);
        assert_eq!(session.state().current_operand(), "5");
    }

    #[test]
    fn noop_events_are_not_undoable() {
        let mut session = Session::new();
        session.dispatch(InputEvent::Equals);
        session.dispatch(InputEvent::Backspace);
        assert!(!session.can_undo());
    }

    #[test]
    fn undo_and_redo_walk_whole_states() {
        let mut session = Session::new();
        session.dispatch_all([d('1'), d('2'), InputEvent::Operator(Operator::Mul)]);
        assert_eq!(session.snapshot().display, "12 * ");

        assert!(session.undo());
        assert_eq!(session.snapshot().display, "12");
        assert!(session.undo());
        assert_eq!(session.snapshot().display, "1");

        assert!(session.redo());
        assert_eq!(session.snapshot().display, "12");
        assert!(session.can_redo());
    }

    #[test]
    fn new_dispatch_clears_redo() {
        let mut session = Session::new();
        session.dispatch_all([d('4'), d('5')]);
        session.undo();
        assert!(session.can_redo());

        session.dispatch(d('9'));
        assert!(!session.can_redo());
        assert_eq!(session.snapshot().display, "49");
    }

    #[test]
    fn undo_depth_is_bounded() {
        let config = SessionConfig {
            undo_depth: 2,
            ..SessionConfig::default()
        };
        let mut session = Session::from_parts(config, CalculatorState::new());
        session.dispatch_all([d('1'), d('2'), d('3'), d('4')]);

        assert!(session.undo());
        assert!(session.undo());
        assert!(!session.undo());
        assert_eq!(session.snapshot().display, "12");
    }

    #[test]
    fn undo_on_fresh_session_does_nothing() {
        let mut session = Session::new();
        assert!(!session.undo());
        assert!(!session.redo());
        assert_eq!(session.snapshot().display, "0");
    }

    #[test]
    fn timeline_records_phase_changes_only() {
        let mut session = Session::new();
        session.dispatch_all([
            d('5'),
            d('5'),
            InputEvent::Operator(Operator::Div),
            d('0'),
            InputEvent::Equals,
        ]);

        let timeline = session.timeline();
        assert_eq!(
            timeline.phases(),
            vec![
                Phase::Entering,
                Phase::Awaiting,
                Phase::Entering,
                Phase::Error
            ]
        );
        assert_eq!(timeline.error_count(), 1);
        assert_eq!(timeline.transitions()[2].event, InputEvent::Equals);
    }

    #[test]
    fn timeline_is_bounded_by_undo_depth() {
        let config = SessionConfig {
            undo_depth: 4,
            ..SessionConfig::default()
        };
        let mut session = Session::from_parts(config, CalculatorState::new());
        for _ in 0..10 {
            session.dispatch_all([d('1'), InputEvent::Operator(Operator::Add)]);
        }

        let transitions = session.timeline().transitions();
        assert_eq!(transitions.len(), 4);
        assert_eq!(transitions[3].to, Phase::Awaiting);
    }

    #[test]
    fn overflowing_memory_update_is_not_recorded() {
        let huge = vec![d('9'); 200];
        let mut session = Session::new();
        session.dispatch_all(huge.iter().copied());
        session.dispatch(InputEvent::Operator(Operator::Mul));
        session.dispatch_all(huge.iter().copied());
        session.dispatch(InputEvent::Equals);
        assert_eq!(session.snapshot().display, "Infinity");

        session.dispatch(InputEvent::MemoryAdd);
        session.dispatch(InputEvent::MemorySubtract);
        assert_eq!(session.snapshot().memory, 0.0);
        assert!(session.snapshot().to_json().unwrap().contains("\"memory\":0.0"));

        // Neither memory key changed the state, so one undo reaches the
        // state before Equals.
        assert!(session.undo());
        assert!(session.snapshot().display.contains(" * "));
    }

    #[test]
    fn press_key_maps_and_dispatches() {
        let mut session = Session::new();
        session.press_key("9");
        session.press_key("+");
        session.press_key("1");
        let snapshot = session.press_key("Enter").unwrap();
        assert_eq!(snapshot.display, "10");

        assert!(session.press_key("Tab").is_none());
        assert_eq!(session.press_key("Escape").unwrap().display, "0");
    }

    #[test]
    fn tax_presets_follow_config() {
        let mut session = Session::new();
        session.dispatch_all([d('2'), d('0'), d('0')]);

        // Index 1 of the default slabs is 5%.
        let snapshot = session.apply_tax_preset(1).unwrap();
        assert_eq!(snapshot.display, "210");
        assert_eq!(snapshot.history, vec!["200 + 5% GST = 210"]);

        assert!(session.apply_tax_preset(99).is_none());
    }

    #[test]
    fn each_session_has_its_own_id() {
        assert_ne!(Session::new().id(), Session::new().id());
    }
}
