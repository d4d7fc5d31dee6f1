//! CLI module for Focus Flow.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `display`: Terminal renderer, notifier and message output
//! - `input`: Interactive commands read from stdin

pub mod commands;
pub mod display;
pub mod input;

pub use commands::{Cli, Commands, RunArgs};
pub use display::{Display, TerminalNotifier, TerminalRenderer};
pub use input::{forward_lines, Command, InputError};
