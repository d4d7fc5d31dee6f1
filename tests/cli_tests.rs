//! Binary tests for the Focus Flow CLI.
//!
//! These tests run the compiled `focusflow` binary with scripted stdin.

use assert_cmd::Command;
use predicates::prelude::*;

fn focusflow() -> Command {
    Command::cargo_bin("focusflow").unwrap()
}

// ============================================================================
// Argument Tests
// ============================================================================

#[test]
fn test_help() {
    focusflow()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pomodoro"))
        .stdout(predicate::str::contains("run"));
}

#[test]
fn test_version() {
    focusflow()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_completions_bash() {
    focusflow()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("focusflow"));
}

#[test]
fn test_tick_ms_out_of_range_fails() {
    focusflow()
        .args(["run", "--tick-ms", "5"])
        .assert()
        .failure();
}

// ============================================================================
// Interactive Tests
// ============================================================================

#[test]
fn test_status_then_quit() {
    focusflow()
        .args(["run", "--no-sound"])
        .write_stdin("status\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode: Focus"))
        .stdout(predicate::str::contains("Remaining: 25:00"))
        .stdout(predicate::str::contains("Focus • 25:00"));
}

#[test]
fn test_json_status_with_clamped_settings() {
    focusflow()
        .args(["run", "--no-sound", "--json", "--focus", "200"])
        .write_stdin("status\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\":\"focus\""))
        .stdout(predicate::str::contains("\"remainingSeconds\":5400.0"))
        .stdout(predicate::str::contains("\"isRunning\":false"));
}

#[test]
fn test_mode_switch_and_setting() {
    focusflow()
        .args(["run", "--no-sound"])
        .write_stdin("long\nset long 20\nstatus\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode: Restore"))
        .stdout(predicate::str::contains("Remaining: 20:00"));
}

#[test]
fn test_unknown_command_reports_error() {
    focusflow()
        .args(["run", "--no-sound"])
        .write_stdin("dance\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown command: dance"));
}

#[test]
fn test_eof_quits() {
    focusflow()
        .args(["run", "--no-sound"])
        .write_stdin("start\n")
        .assert()
        .success();
}

#[test]
fn test_missing_sound_file_still_runs() {
    focusflow()
        .args(["run", "--sound", "/nonexistent/bell.wav"])
        .write_stdin("quit\n")
        .assert()
        .success();
}
