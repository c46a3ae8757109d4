//! Keyboard mapping.
//!
//! Translates DOM-style key names into engine events. The mapping holds no
//! state; a front end calls it once per key press and dispatches the result.

use crate::core::{InputEvent, Operator};

/// Map a key name to the event it triggers, if any.
///
/// Digits, `.` and `+ - * /` map to themselves; `Enter` (or `=`) is Equals,
/// `Backspace` erases, `Escape` clears everything, `Delete` clears the entry
/// and `%` is Percent.
///
/// # Example
///
/// ```rust
/// use tallybox::core::{InputEvent, Operator};
/// use tallybox::keys::event_for_key;
///
/// assert_eq!(event_for_key("7"), Some(InputEvent::digit('7').unwrap()));
/// assert_eq!(event_for_key("*"), Some(InputEvent::Operator(Operator::Mul)));
/// assert_eq!(event_for_key("Enter"), Some(InputEvent::Equals));
/// assert_eq!(event_for_key("Escape"), Some(InputEvent::Clear));
/// assert_eq!(event_for_key("F5"), None);
/// ```
pub fn event_for_key(key: &str) -> Option<InputEvent> {
    match key {
        "Enter" | "=" => Some(InputEvent::Equals),
        "Backspace" => Some(InputEvent::Backspace),
        "Escape" => Some(InputEvent::Clear),
        "Delete" => Some(InputEvent::ClearEntry),
        "." => Some(InputEvent::Decimal),
        "%" => Some(InputEvent::Percent),
        _ => single_char(key).and_then(char_event),
    }
}

/// Whether a front end should suppress the platform's default action for
/// this key (form submission on Enter, navigation on Backspace).
pub fn suppresses_default(key: &str) -> bool {
    matches!(key, "Enter" | "Backspace")
}

fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn char_event(c: char) -> Option<InputEvent> {
    if let Ok(event) = InputEvent::digit(c) {
        return Some(event);
    }
    Operator::from_symbol(c).ok().map(InputEvent::Operator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_digit_key_maps_to_digit() {
        for c in '0'..='9' {
            let key = c.to_string();
            assert_eq!(event_for_key(&key), Some(InputEvent::digit(c).unwrap()));
        }
    }

    #[test]
    fn operator_keys() {
        assert_eq!(event_for_key("+"), Some(InputEvent::Operator(Operator::Add)));
        assert_eq!(event_for_key("-"), Some(InputEvent::Operator(Operator::Sub)));
        assert_eq!(event_for_key("/"), Some(InputEvent::Operator(Operator::Div)));
    }

    #[test]
    fn control_keys() {
        assert_eq!(event_for_key("Backspace"), Some(InputEvent::Backspace));
        assert_eq!(event_for_key("Delete"), Some(InputEvent::ClearEntry));
        assert_eq!(event_for_key("="), Some(InputEvent::Equals));
        assert_eq!(event_for_key("%"), Some(InputEvent::Percent));
        assert_eq!(event_for_key("."), Some(InputEvent::Decimal));
    }

    #[test]
    fn unknown_keys_map_to_none() {
        assert_eq!(event_for_key(""), None);
        assert_eq!(event_for_key("a"), None);
        assert_eq!(event_for_key("12"), None);
        assert_eq!(event_for_key("Shift"), None);
    }

    #[test]
    fn default_action_suppression() {
        assert!(suppresses_default("Enter"));
        assert!(suppresses_default("Backspace"));
        assert!(!suppresses_default("Escape"));
        assert!(!suppresses_default("5"));
    }
}
