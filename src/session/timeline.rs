//! Phase timeline tracking.
//!
//! Provides immutable tracking of phase changes over a session, recording
//! which event caused each change and when it happened.

use crate::core::{InputEvent, Phase};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase change.
///
/// # Example
///
/// ```rust
/// use tallybox::core::{InputEvent, Phase};
/// use tallybox::session::PhaseTransition;
/// use chrono::Utc;
///
/// let transition = PhaseTransition {
///     from: Phase::Awaiting,
///     to: Phase::Error,
///     event: InputEvent::Equals,
///     timestamp: Utc::now(),
/// };
/// assert!(transition.entered_error());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// Phase before the event
    pub from: Phase,
    /// Phase after the event
    pub to: Phase,
    /// The event that caused the change
    pub event: InputEvent,
    /// When the event was dispatched
    pub timestamp: DateTime<Utc>,
}

impl PhaseTransition {
    pub fn entered_error(&self) -> bool {
        !self.from.is_error() && self.to.is_error()
    }
}

/// Ordered record of phase changes.
///
/// Timeline is immutable - the `record` method returns a new timeline with
/// the transition added.
///
/// # Example
///
/// ```rust
/// use tallybox::core::{InputEvent, Operator, Phase};
/// use tallybox::session::{PhaseTransition, Timeline};
/// use chrono::Utc;
///
/// let timeline = Timeline::new()
///     .record(PhaseTransition {
///         from: Phase::Entering,
///         to: Phase::Awaiting,
///         event: InputEvent::Operator(Operator::Div),
///         timestamp: Utc::now(),
///     })
///     .record(PhaseTransition {
///         from: Phase::Awaiting,
///         to: Phase::Entering,
///         event: InputEvent::digit('0').unwrap(),
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(
///     timeline.phases(),
///     vec![Phase::Entering, Phase::Awaiting, Phase::Entering]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    transitions: Vec<PhaseTransition>,
}

impl Timeline {
    /// Create a new empty timeline.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new timeline.
    ///
    /// This is a pure function - it does not mutate the existing timeline
    /// but returns a new one with the transition added.
    pub fn record(&self, transition: PhaseTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Record a transition in place of `self`, keeping at most `limit`
    /// entries by dropping the oldest.
    pub fn record_bounded(mut self, transition: PhaseTransition, limit: usize) -> Self {
        let limit = limit.max(1);
        if self.transitions.len() >= limit {
            let excess = self.transitions.len() + 1 - limit;
            self.transitions.drain(..excess);
        }
        self.transitions.push(transition);
        self
    }

    /// Phases traversed: the first `from`, then the `to` of each transition.
    pub fn phases(&self) -> Vec<Phase> {
        let mut phases = Vec::new();
        if let Some(first) = self.transitions.first() {
            phases.push(first.from);
        }
        phases.extend(self.transitions.iter().map(|t| t.to));
        phases
    }

    /// Elapsed time between the first and last recorded transition.
    ///
    /// Returns `None` if nothing was recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// How many times the session entered the error phase.
    pub fn error_count(&self) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.entered_error())
            .count()
    }

    pub fn transitions(&self) -> &[PhaseTransition] {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    fn transition(from: Phase, to: Phase, event: InputEvent) -> PhaseTransition {
        PhaseTransition {
            from,
            to,
            event,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_timeline_is_empty() {
        let timeline = Timeline::new();
        assert!(timeline.transitions().is_empty());
        assert!(timeline.phases().is_empty());
        assert!(timeline.duration().is_none());
        assert_eq!(timeline.error_count(), 0);
    }

    #[test]
    fn record_is_immutable() {
        let timeline = Timeline::new();
        let updated = timeline.record(transition(
            Phase::Entering,
            Phase::Awaiting,
            InputEvent::Operator(Operator::Add),
        ));

        assert_eq!(timeline.transitions().len(), 0);
        assert_eq!(updated.transitions().len(), 1);
    }

    #[test]
    fn error_count_counts_entries_into_error() {
        let timeline = Timeline::new()
            .record(transition(Phase::Entering, Phase::Error, InputEvent::Equals))
            .record(transition(
                Phase::Error,
                Phase::Entering,
                InputEvent::digit('1').unwrap(),
            ))
            .record(transition(Phase::Entering, Phase::Error, InputEvent::Equals));

        assert_eq!(timeline.error_count(), 2);
    }

    #[test]
    fn bounded_record_drops_oldest() {
        let timeline = (0..5).fold(Timeline::new(), |timeline, _| {
            timeline.record_bounded(
                transition(Phase::Entering, Phase::Awaiting, InputEvent::Operator(Operator::Add)),
                3,
            )
        });
        assert_eq!(timeline.transitions().len(), 3);

        let timeline = timeline.record_bounded(
            transition(Phase::Awaiting, Phase::Error, InputEvent::Equals),
            3,
        );
        assert_eq!(timeline.transitions().len(), 3);
        assert_eq!(timeline.transitions()[2].to, Phase::Error);
        assert_eq!(timeline.error_count(), 1);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let timeline = Timeline::new()
            .record(PhaseTransition {
                from: Phase::Entering,
                to: Phase::Awaiting,
                event: InputEvent::Operator(Operator::Mul),
                timestamp: start,
            })
            .record(PhaseTransition {
                from: Phase::Awaiting,
                to: Phase::Entering,
                event: InputEvent::digit('2').unwrap(),
                timestamp: start + chrono::Duration::milliseconds(250),
            });

        assert_eq!(timeline.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn timeline_serializes_correctly() {
        let timeline = Timeline::new().record(transition(
            Phase::Awaiting,
            Phase::Error,
            InputEvent::Equals,
        ));

        let json = serde_json::to_string(&timeline).unwrap();
        let deserialized: Timeline = serde_json::from_str(&json).unwrap();
        assert_eq!(timeline, deserialized);
    }
}
