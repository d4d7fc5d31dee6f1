//! User notifications on interval completion.
//!
//! Notifications are best-effort. A `Notifier` may fail, and callers are
//! expected to log the failure and carry on.

mod content;
mod error;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub use self::content::{completion_message, Notification};
pub use self::error::NotifyError;

/// Trait for notification surfaces.
pub trait Notifier {
    /// Shows `notification` to the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification could not be delivered.
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError>;
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        (**self).notify(notification)
    }
}

/// Mock notifier for testing.
#[derive(Debug, Default)]
pub struct MockNotifier {
    sent: Mutex<Vec<Notification>>,
    should_fail: AtomicBool,
}

impl MockNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    #[must_use]
    pub fn get_sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(NotifyError::SendFailed("Mock failure".to_string()));
        }
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}
