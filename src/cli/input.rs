//! Interactive command input.
//!
//! One command per line. Lines are parsed into `Command`s and forwarded to
//! the engine as `Intent`s; `status` and `help` are answered here.

use std::io::BufRead;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use super::display::Display;
use crate::engine::Intent;
use crate::types::{Mode, SettingKey};

// ============================================================================
// InputError
// ============================================================================

/// Errors from parsing a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The first word is not a command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A required argument is missing
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// A setting name is not recognized
    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    /// A numeric argument did not parse
    #[error("Not a number: {0}")]
    InvalidNumber(String),

    /// An on/off argument did not parse
    #[error("Expected on or off, got: {0}")]
    InvalidSwitch(String),
}

impl InputError {
    /// Returns a hint for fixing the input.
    pub fn suggestion(&self) -> &'static str {
        match self {
            InputError::UnknownCommand(_) => "Type 'help' to list commands.",
            InputError::MissingArgument(_) | InputError::UnknownSetting(_) => {
                "Usage: set <focus|break|long|rounds> <n>, auto <on|off>, sound <on|off>"
            }
            InputError::InvalidNumber(_) => "Use a whole number, e.g. 'set focus 30'.",
            InputError::InvalidSwitch(_) => "Use 'on' or 'off', e.g. 'sound off'.",
        }
    }
}

// ============================================================================
// Command
// ============================================================================

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Toggle,
    Start,
    Pause,
    Reset,
    Restart,
    Select(Mode),
    Set(SettingKey, i64),
    Status,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line.
    ///
    /// # Errors
    ///
    /// Returns an `InputError` describing what was wrong with the line.
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Command::Toggle);
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "space" | "toggle" => Command::Toggle,
            "start" | "s" => Command::Start,
            "pause" | "p" => Command::Pause,
            "reset" | "r" => Command::Reset,
            "restart" => Command::Restart,
            "set" => {
                let name = words.next().ok_or(InputError::MissingArgument("setting"))?;
                let key = match SettingKey::parse(name) {
                    Some(SettingKey::AutoAdvance | SettingKey::SoundEnabled) | None => {
                        return Err(InputError::UnknownSetting(name.to_string()))
                    }
                    Some(key) => key,
                };
                let raw = words.next().ok_or(InputError::MissingArgument("value"))?;
                let value = raw
                    .parse::<i64>()
                    .map_err(|_| InputError::InvalidNumber(raw.to_string()))?;
                Command::Set(key, value)
            }
            "auto" => Command::Set(SettingKey::AutoAdvance, parse_switch(words.next())?),
            "sound" => Command::Set(SettingKey::SoundEnabled, parse_switch(words.next())?),
            "status" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => match Mode::parse(other) {
                Some(mode) => Command::Select(mode),
                None => return Err(InputError::UnknownCommand(other.to_string())),
            },
        };
        Ok(command)
    }

    /// Converts the command into an engine intent.
    ///
    /// Returns `None` for commands answered without the engine.
    pub fn into_intent(self) -> Option<Intent> {
        let intent = match self {
            Command::Toggle => Intent::Toggle,
            Command::Start => Intent::Start,
            Command::Pause => Intent::Pause,
            Command::Reset => Intent::Reset,
            Command::Restart => Intent::Restart,
            Command::Select(mode) => Intent::SelectMode(mode),
            Command::Set(key, value) => Intent::UpdateSetting { key, value },
            Command::Quit => Intent::Quit,
            Command::Status | Command::Help => return None,
        };
        Some(intent)
    }
}

/// Parses an on/off argument into the 1/0 value carried by `Command::Set`.
fn parse_switch(word: Option<&str>) -> Result<i64, InputError> {
    let raw = word.ok_or(InputError::MissingArgument("on|off"))?;
    match raw.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(1),
        "off" | "false" | "no" => Ok(0),
        _ => Err(InputError::InvalidSwitch(raw.to_string())),
    }
}

// ============================================================================
// Line forwarding
// ============================================================================

/// Reads commands from `reader` until `quit`, EOF or a closed engine.
///
/// Blocks the calling thread; run it off the async runtime. A `Quit` intent
/// is sent on EOF.
pub fn forward_lines<R: BufRead>(reader: R, intents: &mpsc::UnboundedSender<Intent>, json: bool) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                debug!("Failed to read input: {}", e);
                break;
            }
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                Display::show_error(&format!("{} ({})", e, e.suggestion()));
                continue;
            }
        };

        match command {
            Command::Help => Display::show_help(),
            Command::Status => {
                let (reply, rx) = oneshot::channel();
                if intents.send(Intent::Status(reply)).is_err() {
                    return;
                }
                match rx.blocking_recv() {
                    Ok(state) => Display::show_status(&state, json),
                    Err(_) => return,
                }
            }
            Command::Quit => {
                let _ = intents.send(Intent::Quit);
                return;
            }
            other => {
                if let Some(intent) = other.into_intent() {
                    if intents.send(intent).is_err() {
                        return;
                    }
                }
            }
        }
    }

    debug!("Input closed");
    let _ = intents.send(Intent::Quit);
}

// ============================================================================
// Tests
// ============================================================================
