//! Engine module for Focus Flow.
//!
//! This module drives a `SessionController` from the outside world:
//! - `intent`: user intents delivered over a channel
//! - `timer`: the run loop owning the single repeating timing source

pub mod intent;
pub mod timer;

pub use intent::Intent;
pub use timer::{TimerEngine, DEFAULT_TICK_PERIOD};
