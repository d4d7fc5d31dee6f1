//! Focus Flow Library
//!
//! This library provides the core functionality for the Focus Flow timer.
//! It includes:
//! - A deadline-based countdown and the Pomodoro mode scheduler
//! - The engine that drives a session from intents and a repeating tick
//! - Completion effects: a synthesized chime and notifications
//! - CLI command parsing, terminal rendering and stdin commands
//! - Type definitions for modes, settings and session snapshots

pub mod cli;
pub mod engine;
pub mod notify;
pub mod session;
pub mod sound;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{Mode, SessionState, SettingKey, Settings};

pub use engine::{Intent, TimerEngine};

pub use session::{
    ClockEvent, CompletionEffects, ModeScheduler, NullRenderer, RecordingRenderer, RenderFrame,
    Renderer, SessionClock, SessionController,
};

pub use notify::{MockNotifier, Notification, Notifier, NotifyError};

pub use sound::{MockSoundPlayer, RodioSoundPlayer, SoundError, SoundPlayer, SoundSource};
