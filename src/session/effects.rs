//! Side effects fired when an interval expires.
//!
//! Both effects are best-effort: failures are logged and swallowed so the
//! countdown stays the source of truth.

use tracing::{debug, info, warn};

use crate::notify::{completion_message, Notifier};
use crate::sound::{SoundPlayer, SoundSource};
use crate::types::Mode;

/// Dispatches the completion sound and notification.
pub struct CompletionEffects {
    sound: Option<Box<dyn SoundPlayer>>,
    source: SoundSource,
    notifier: Option<Box<dyn Notifier>>,
}

impl CompletionEffects {
    /// Creates a dispatcher with no effects attached.
    pub fn none() -> Self {
        Self {
            sound: None,
            source: SoundSource::Chime,
            notifier: None,
        }
    }

    /// Attaches a sound player and the source it should play.
    pub fn with_sound(mut self, player: impl SoundPlayer + 'static, source: SoundSource) -> Self {
        self.sound = Some(Box::new(player));
        self.source = source;
        self
    }

    /// Attaches a notification surface.
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    /// Turns the completion sound on or off without detaching the player.
    pub fn set_sound_enabled(&self, enabled: bool) {
        let Some(player) = &self.sound else {
            return;
        };
        if enabled {
            player.enable();
        } else {
            player.disable();
        }
    }

    /// Returns true when a player is attached and not muted.
    pub fn sound_enabled(&self) -> bool {
        self.sound.as_ref().is_some_and(|player| !player.is_disabled())
    }

    /// Fires the effects for an interval that completed in `completed` mode.
    pub fn dispatch(&self, completed: Mode, next: Mode, auto_advance: bool) {
        self.play_sound();

        let message = completion_message(completed, next, auto_advance);
        info!("{}", message);
        if let Some(notifier) = &self.notifier {
            if let Err(e) = notifier.notify(&message) {
                warn!("Notification failed: {} ({})", e, e.suggestion());
            }
        }
    }

    fn play_sound(&self) {
        let Some(player) = &self.sound else {
            debug!("No sound player attached, skipping chime");
            return;
        };
        if let Err(e) = player.play(&self.source) {
            warn!("Completion sound unavailable: {} ({})", e, e.suggestion());
        }
    }
}

impl Default for CompletionEffects {
    fn default() -> Self {
        Self::none()
    }
}

impl std::fmt::Debug for CompletionEffects {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionEffects")
            .field("sound", &self.sound.is_some())
            .field("source", &self.source)
            .field("notifier", &self.notifier.is_some())
            .finish()
    }
}
