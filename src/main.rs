//! Focus Flow - a terminal Pomodoro timer
//!
//! Alternates focus intervals with breaks:
//! - 25 minutes of focus
//! - 5 minutes of short break
//! - 15 minutes of long break after 4 focus rounds

use std::io;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tokio::sync::mpsc;
use tokio::time::Duration;
use tracing::warn;

use focusflow::cli::{forward_lines, Cli, Commands, Display, RunArgs, TerminalNotifier, TerminalRenderer};
use focusflow::session::{CompletionEffects, SessionController};
use focusflow::sound::{try_create_player, SoundSource};
use focusflow::TimerEngine;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// Logs go to stderr so they stay off the status line.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Run(args)) => {
            run(args).await?;
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Runs the interactive timer until quit, EOF or Ctrl-C.
async fn run(args: RunArgs) -> Result<()> {
    let settings = args.settings();

    // The player is attached even when muted so `sound on` can unmute it
    let mut effects = CompletionEffects::none().with_notifier(TerminalNotifier::new());
    if let Some(player) = try_create_player(!settings.sound_enabled) {
        effects = effects.with_sound(player, sound_source(&args));
    }

    let controller = SessionController::new(settings, effects, TerminalRenderer::new());
    let mut engine = TimerEngine::new(controller, Duration::from_millis(args.tick_ms));

    println!("Focus Flow. Press enter to start or pause, type 'help' for commands.");

    // Stdin reads block, so they get their own thread. It is left behind on exit.
    let (tx, rx) = mpsc::unbounded_channel();
    let json = args.json;
    std::thread::Builder::new()
        .name("focusflow-input".to_string())
        .spawn(move || forward_lines(io::stdin().lock(), &tx, json))
        .context("Failed to start input thread")?;

    engine.run(rx).await?;
    println!();

    Ok(())
}

/// Picks the completion sound, falling back to the chime.
fn sound_source(args: &RunArgs) -> SoundSource {
    let Some(path) = &args.sound else {
        return SoundSource::Chime;
    };
    match SoundSource::file_validated(path) {
        Ok(source) => source,
        Err(e) => {
            warn!("{} ({}), using the chime", e, e.suggestion());
            SoundSource::Chime
        }
    }
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["focusflow"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_run() {
        let cli = Cli::parse_from(["focusflow", "run"]);
        assert!(matches!(cli.command, Some(Commands::Run(_))));
    }

    #[test]
    fn test_sound_source_defaults_to_chime() {
        assert_eq!(sound_source(&RunArgs::default()), SoundSource::Chime);
    }

    #[test]
    fn test_missing_sound_file_falls_back_to_chime() {
        let args = RunArgs {
            sound: Some("/nonexistent/bell.wav".into()),
            ..RunArgs::default()
        };
        assert_eq!(sound_source(&args), SoundSource::Chime);
    }

    #[test]
    fn test_existing_sound_file_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bell.wav");
        std::fs::write(&path, b"RIFF").unwrap();

        let args = RunArgs {
            sound: Some(path.clone()),
            ..RunArgs::default()
        };
        assert_eq!(sound_source(&args), SoundSource::file(path));
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }
}
