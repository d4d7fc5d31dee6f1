//! Completion message construction.
//!
//! The message depends on the mode that just completed; the upcoming mode is
//! named in the body so the user knows what to do next.

use std::fmt;

use crate::types::Mode;

/// A notification ready to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Short headline
    pub title: String,
    /// One-sentence body
    pub body: String,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.body)
    }
}

/// Builds the message for an interval that completed in `completed` mode.
#[must_use]
pub fn completion_message(completed: Mode, next: Mode, auto_advance: bool) -> Notification {
    let title = match completed {
        Mode::Focus => "Focus session complete",
        Mode::ShortBreak => "Break complete",
        Mode::LongBreak => "Long break complete",
    };

    let action = match (next, auto_advance) {
        (Mode::Focus, true) => "Back to focus.".to_string(),
        (Mode::Focus, false) => "Start when you are ready to focus.".to_string(),
        (mode, true) => format!("{} has started.", mode.label()),
        (mode, false) => format!("Start {} when you are ready.", mode.label()),
    };

    Notification {
        title: title.to_string(),
        body: action,
    }
}
