//! Command definitions for the Focus Flow CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::types::Settings;

// ============================================================================
// CLI Structure
// ============================================================================

/// Focus Flow - a terminal Pomodoro timer
#[derive(Parser, Debug)]
#[command(
    name = "focusflow",
    version,
    about = "Terminal Pomodoro timer",
    long_about = "A Pomodoro timer that runs in the terminal.\n\
                  Focus intervals alternate with short breaks, with a long break \
                  after a configurable number of rounds.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the timer interactively, reading commands from stdin
    Run(RunArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Run Command Arguments
// ============================================================================

/// Arguments for the run command
///
/// Numeric values outside their range are clamped, not rejected.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Focus duration in minutes (1-90)
    #[arg(short, long, default_value_t = 25, allow_negative_numbers = true)]
    pub focus: i64,

    /// Short break duration in minutes (1-45)
    #[arg(
        short = 'b',
        long = "break",
        default_value_t = 5,
        allow_negative_numbers = true
    )]
    pub break_minutes: i64,

    /// Long break duration in minutes (1-45)
    #[arg(short, long, default_value_t = 15, allow_negative_numbers = true)]
    pub long_break: i64,

    /// Focus rounds before a long break (1-4)
    #[arg(short, long, default_value_t = 4, allow_negative_numbers = true)]
    pub rounds: i64,

    /// Start the next interval automatically when one completes
    #[arg(short, long)]
    pub auto_advance: bool,

    /// Disable the completion sound
    #[arg(long)]
    pub no_sound: bool,

    /// Audio file to play on completion instead of the chime
    #[arg(short, long, value_name = "PATH")]
    pub sound: Option<PathBuf>,

    /// Tick period in milliseconds
    #[arg(long, default_value_t = 250, value_parser = clap::value_parser!(u64).range(10..=1000))]
    pub tick_ms: u64,

    /// Print status as JSON
    #[arg(long)]
    pub json: bool,
}

impl RunArgs {
    /// Builds clamped settings from the arguments.
    pub fn settings(&self) -> Settings {
        Settings::default()
            .with_focus_minutes(self.focus)
            .with_break_minutes(self.break_minutes)
            .with_long_break_minutes(self.long_break)
            .with_rounds(self.rounds)
            .with_auto_advance(self.auto_advance)
            .with_sound(!self.no_sound)
    }
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            focus: 25,
            break_minutes: 5,
            long_break: 15,
            rounds: 4,
            auto_advance: false,
            no_sound: false,
            sound: None,
            tick_ms: 250,
            json: false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
