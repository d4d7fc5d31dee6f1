//! Notification error types.

use thiserror::Error;

/// Errors that can occur while notifying the user.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The notification could not be delivered.
    #[error("failed to deliver notification: {0}")]
    SendFailed(String),

    /// No notification surface is attached.
    #[error("notifications are not available")]
    NotAvailable,
}

impl NotifyError {
    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::SendFailed(_) => "check that the terminal is still attached",
            Self::NotAvailable => "run focusflow from an interactive terminal",
        }
    }
}
