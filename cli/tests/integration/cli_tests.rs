//! These tests verify the CLI structure, argument parsing and startup
//! failure paths. They never run a customization step.

#![allow(clippy::expect_used, deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn sysprep() -> Command {
    Command::cargo_bin("sysprep").expect("sysprep binary should exist")
}

// --- Help and version tests ---

#[test]
fn test_cli_help_flag_lists_commands() {
    sysprep()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("menu"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("steps"));
}

#[test]
fn test_cli_help_shows_path_flags() {
    sysprep()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--log-file"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--command-timeout"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    sysprep()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sysprep"));
}

#[test]
fn test_version_command_shows_version() {
    sysprep()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "sysprep {}",
            env!("CARGO_PKG_VERSION")
        )));
}

// --- Steps listing ---

#[test]
fn test_steps_lists_every_step_name() {
    let output = sysprep()
        .args(["steps", "--no-color"])
        .output()
        .expect("run sysprep steps");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in [
        "update-system",
        "install-gnome",
        "set-gnome-default",
        "install-software",
        "configure-gnome",
        "configure-network",
        "backup",
        "post-install",
        "clean-up",
        "health",
    ] {
        assert!(stdout.contains(name), "missing {name} in:\n{stdout}");
    }
}

// --- Argument errors ---

#[test]
fn test_run_without_steps_is_usage_error() {
    sysprep().arg("run").assert().code(2);
}

#[test]
fn test_run_unknown_step_is_usage_error() {
    sysprep()
        .args(["run", "reboot"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("reboot"));
}

// --- Startup failures ---

#[test]
fn test_run_with_missing_config_fails_before_any_step() {
    // As root this fails on the missing file; otherwise on the privilege check.
    let dir = tempfile::tempdir().expect("tempdir");
    let log = dir.path().join("audit.log");
    sysprep()
        .arg("--config")
        .arg(dir.path().join("missing.json"))
        .arg("--log-file")
        .arg(&log)
        .args(["run", "health"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "));
    assert!(!log.exists(), "no command may run before startup checks pass");
}
