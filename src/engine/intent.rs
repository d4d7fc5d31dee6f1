//! User intents accepted by the engine.

use tokio::sync::oneshot;

use crate::session::SessionController;
use crate::types::{Mode, SessionState, SettingKey};

/// A request to change or inspect the session.
#[derive(Debug)]
pub enum Intent {
    /// Start or resume the countdown
    Start,
    /// Pause the countdown
    Pause,
    /// Start when paused, pause when running
    Toggle,
    /// Restore the full duration of the active mode
    Reset,
    /// Back to Focus, round 1
    Restart,
    /// Manual mode switch
    SelectMode(Mode),
    /// Change one setting; the value is clamped
    UpdateSetting {
        /// Which setting
        key: SettingKey,
        /// Raw value from the user
        value: i64,
    },
    /// Reply with a snapshot of the session
    Status(oneshot::Sender<SessionState>),
    /// Stop the engine
    Quit,
}

impl Intent {
    /// Applies the intent to `controller`.
    ///
    /// Returns false for `Quit`, true otherwise.
    pub fn apply(self, controller: &mut SessionController) -> bool {
        match self {
            Intent::Start => {
                controller.start();
            }
            Intent::Pause => {
                controller.pause();
            }
            Intent::Toggle => {
                controller.toggle();
            }
            Intent::Reset => {
                controller.reset();
            }
            Intent::Restart => controller.restart(),
            Intent::SelectMode(mode) => {
                controller.select_mode(mode);
            }
            Intent::UpdateSetting { key, value } => {
                controller.update_setting(key, value);
            }
            Intent::Status(reply) => {
                // The asker may have given up waiting
                let _ = reply.send(controller.state());
            }
            Intent::Quit => return false,
        }
        true
    }
}
