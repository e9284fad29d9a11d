//! Tests for CLI argument parsing against the built binary.
//!
//! Only paths that exit before the terminal UI starts are exercised here.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn jobform_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_jobform"))
}

#[test]
fn test_help_lists_options() {
    let output = jobform_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--log-file"));
    assert!(stdout.contains("--log-level"));
}

#[test]
fn test_version_flag() {
    let output = jobform_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unparseable_config_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[ui\n").unwrap();

    let output = jobform_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"));
}

#[test]
fn test_invalid_log_level_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = jobform_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("absent.toml"))
        .arg("--log-level")
        .arg("jobform=loud")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid logging.level"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let output = jobform_cmd()
        .arg("--no-such-flag")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}
