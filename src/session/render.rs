//! Presentation boundary.
//!
//! The controller hands a `RenderFrame` to a `Renderer` on every tick and
//! after every state-changing intent. Renderers own all formatting.

use std::sync::{Arc, Mutex};

use crate::types::{display_seconds, Mode};

/// Everything a renderer needs to draw the session.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Fractional seconds left in the active interval
    pub remaining_seconds: f64,
    /// Active mode
    pub mode: Mode,
    /// Full length of the active interval in seconds
    pub duration_seconds: u32,
    /// Focus round within the cycle
    pub current_round: u32,
    /// Rounds per long break
    pub rounds_per_long_break: u32,
    /// Mode that follows the active one
    pub next_mode: Mode,
    /// Whether the countdown is running
    pub is_running: bool,
}

impl RenderFrame {
    /// Remaining time rounded up to whole seconds.
    pub fn display_seconds(&self) -> u32 {
        display_seconds(self.remaining_seconds)
    }

    /// Elapsed fraction of the interval, clamped to [0, 1].
    pub fn progress(&self) -> f64 {
        if self.duration_seconds == 0 {
            return 1.0;
        }
        let duration = f64::from(self.duration_seconds);
        let remaining = self.remaining_seconds.clamp(0.0, duration);
        1.0 - remaining / duration
    }
}

/// Trait for presentation layers.
pub trait Renderer {
    /// Draws `frame`.
    fn render(&mut self, frame: &RenderFrame);
}

/// Renderer that drops every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &RenderFrame) {}
}

/// Renderer that keeps every frame, for tests.
///
/// Clones share the same frame log.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    frames: Arc<Mutex<Vec<RenderFrame>>>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn frames(&self) -> Vec<RenderFrame> {
        self.frames.lock().unwrap().clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<RenderFrame> {
        self.frames.lock().unwrap().last().cloned()
    }

    pub fn clear(&self) {
        self.frames.lock().unwrap().clear();
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &RenderFrame) {
        self.frames.lock().unwrap().push(frame.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(remaining_seconds: f64, duration_seconds: u32) -> RenderFrame {
        RenderFrame {
            remaining_seconds,
            mode: Mode::Focus,
            duration_seconds,
            current_round: 1,
            rounds_per_long_break: 4,
            next_mode: Mode::ShortBreak,
            is_running: true,
        }
    }

    #[test]
    fn test_progress() {
        assert_eq!(frame(1500.0, 1500).progress(), 0.0);
        assert_eq!(frame(750.0, 1500).progress(), 0.5);
        assert_eq!(frame(0.0, 1500).progress(), 1.0);
    }

    #[test]
    fn test_progress_clamps_out_of_range() {
        assert_eq!(frame(2000.0, 1500).progress(), 0.0);
        assert_eq!(frame(-1.0, 1500).progress(), 1.0);
        assert_eq!(frame(10.0, 0).progress(), 1.0);
    }

    #[test]
    fn test_display_seconds() {
        assert_eq!(frame(59.01, 60).display_seconds(), 60);
        assert_eq!(frame(0.2, 60).display_seconds(), 1);
    }

    #[test]
    fn test_recording_renderer_shares_log() {
        let recorder = RecordingRenderer::new();
        let mut handle = recorder.clone();
        handle.render(&frame(10.0, 60));

        assert_eq!(recorder.frames().len(), 1);
        assert_eq!(recorder.last(), Some(frame(10.0, 60)));

        recorder.clear();
        assert!(recorder.frames().is_empty());
    }
}
