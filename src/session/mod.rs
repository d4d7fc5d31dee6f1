//! Countdown and session state machine.
//!
//! - `clock`: deadline-based remaining-time bookkeeping
//! - `scheduler`: mode sequencing and round counting
//! - `effects`: completion sound and notification
//! - `render`: presentation boundary
//! - `controller`: the single owner tying them together

mod clock;
mod controller;
mod effects;
mod render;
mod scheduler;

pub use clock::{ClockEvent, SessionClock};
pub use controller::SessionController;
pub use effects::CompletionEffects;
pub use render::{NullRenderer, RecordingRenderer, RenderFrame, Renderer};
pub use scheduler::{ModeScheduler, Transition};
