//! Display utilities for the Focus Flow CLI.
//!
//! This module provides terminal output for:
//! - The countdown status line, redrawn in place
//! - Completion notifications
//! - Status, help and error messages

use std::io::{self, Write};
use std::sync::Mutex;

use tracing::debug;

use crate::notify::{Notification, Notifier, NotifyError};
use crate::session::{RenderFrame, Renderer};
use crate::types::SessionState;

/// Width of the progress bar in cells.
const BAR_WIDTH: usize = 10;

// ============================================================================
// TerminalRenderer
// ============================================================================

/// Renders frames as a single status line, redrawn in place.
pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last_line: Option<String>,
}

impl TerminalRenderer {
    /// Creates a renderer writing to stdout.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last_line: None,
        }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, line: &str) -> io::Result<()> {
        write!(self.out, "\r\x1b[2K{}", line)?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, frame: &RenderFrame) {
        let line = Display::format_line(frame);
        if self.last_line.as_deref() == Some(line.as_str()) {
            return;
        }
        if let Err(e) = self.draw(&line) {
            debug!("Failed to draw status line: {}", e);
        }
        self.last_line = Some(line);
    }
}

// ============================================================================
// TerminalNotifier
// ============================================================================

/// Prints completion messages on their own line, with a bell.
pub struct TerminalNotifier<W: Write = io::Stdout> {
    out: Mutex<W>,
}

impl TerminalNotifier {
    /// Creates a notifier writing to stdout.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalNotifier<W> {
    /// Creates a notifier writing to `out`.
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write> Notifier for TerminalNotifier<W> {
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| NotifyError::SendFailed("output lock poisoned".to_string()))?;
        writeln!(out, "\n\x07{}", notification)
            .and_then(|()| out.flush())
            .map_err(|e| NotifyError::SendFailed(e.to_string()))
    }
}

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Formats the status line for `frame`.
    pub fn format_line(frame: &RenderFrame) -> String {
        let mut line = format!(
            "{} • {} [{}] Focus {} of {} · next: {}",
            frame.mode.label(),
            Self::format_time(frame.display_seconds()),
            Self::progress_bar(frame.progress()),
            frame.current_round,
            frame.rounds_per_long_break,
            frame.next_mode.label(),
        );
        if !frame.is_running {
            line.push_str(" (paused)");
        }
        line
    }

    /// Formats whole seconds as `MM:SS`.
    pub fn format_time(total_seconds: u32) -> String {
        format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
    }

    fn progress_bar(progress: f64) -> String {
        let filled = ((progress.clamp(0.0, 1.0) * BAR_WIDTH as f64).floor() as usize).min(BAR_WIDTH);
        format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
    }

    /// Formats the session snapshot as plain text.
    pub fn status_text(state: &SessionState) -> String {
        format!(
            "Focus Flow status\n\
             ─────────────────\n\
             Mode: {}\n\
             Remaining: {}\n\
             State: {}\n\
             Round: {}\n\
             Next: {}",
            state.mode.label(),
            Self::format_time(state.display_seconds()),
            if state.is_running { "running" } else { "paused" },
            state.current_round,
            state.next_mode.label(),
        )
    }

    /// Shows the session snapshot, as JSON when `json` is set.
    pub fn show_status(state: &SessionState, json: bool) {
        if json {
            match serde_json::to_string(state) {
                Ok(text) => println!("\n{}", text),
                Err(e) => Self::show_error(&format!("Failed to encode status: {}", e)),
            }
        } else {
            println!("\n{}", Self::status_text(state));
        }
    }

    /// Shows the list of interactive commands.
    pub fn show_help() {
        println!("\n{}", HELP_TEXT);
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("Error: {}", message);
    }
}

const HELP_TEXT: &str = "\
Commands:
  <enter>, space, toggle     start or pause
  start, s                   start or resume
  pause, p                   pause
  reset, r                   restore the full duration of this interval
  restart                    back to Focus, round 1
  focus, 1 | short, 2 | long, 3
                             switch mode
  set <focus|break|long|rounds> <n>
                             change a setting (minutes or rounds)
  auto <on|off>              start the next interval automatically
  sound <on|off>             play the chime when an interval ends
  status                     show the current state
  help                       show this help
  quit, q                    exit";

// ============================================================================
// Tests
// ============================================================================
