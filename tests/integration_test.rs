//! Integration tests for Bazaar CLI commands

use std::process::Command;
use tempfile::TempDir;

fn bazaar() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_bazaar"));
    command.env_remove("BAZAAR_SCALING");
    command
}

/// Test that the help command works
#[test]
fn test_help_command() {
    let output = bazaar()
        .arg("--help")
        .output()
        .expect("Failed to execute help command");

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: bazaar"), "Should show usage");
    assert!(stdout.contains("dashboard"), "Should show dashboard command");
    assert!(stdout.contains("snapshot"), "Should show snapshot command");
    assert!(stdout.contains("check"), "Should show check command");
    assert!(stdout.contains("config"), "Should show config command");
}

/// Test that the version command works
#[test]
fn test_version_command() {
    let output = bazaar()
        .arg("--version")
        .output()
        .expect("Failed to execute version command");

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("bazaar"), "Should show binary name");
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")), "Should show version number");
}

/// Test config show command falls back to defaults without a file
#[test]
fn test_config_show_command() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("missing.toml");

    let output = bazaar()
        .args(["config", "show", "--config-file"])
        .arg(&config_path)
        .output()
        .expect("Failed to execute config show command");

    assert!(output.status.success(), "Config show command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Current configuration"));
    assert!(stdout.contains("interval_secs = 60"));
    assert!(stdout.contains("query1.finance.yahoo.com"));
}

/// Test config reset writes a loadable file
#[test]
fn test_config_reset_command() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");

    let output = bazaar()
        .args(["config", "reset", "--config-file"])
        .arg(&config_path)
        .output()
        .expect("Failed to execute config reset command");

    assert!(output.status.success(), "Config reset command should succeed");
    let written = std::fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("[refresh]"));
    assert!(written.contains("gainers_limit = 10"));
}

/// Test dry-run prints the summary and exits without touching the terminal
#[test]
fn test_dry_run_mode() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "[market]\ndefault_universe = \"SENSEX\"\n").unwrap();

    let output = bazaar()
        .arg("--dry-run")
        .arg("--config-file")
        .arg(&config_path)
        .output()
        .expect("Failed to execute dry-run");

    assert!(output.status.success(), "Dry-run should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Indian Stock Market Dashboard"));
    assert!(stdout.contains("Dry-run mode configuration"));
    assert!(stdout.contains("SENSEX"));
}

/// Test the connectivity check fails cleanly against an unreachable provider
#[test]
fn test_check_command_reports_unreachable_provider() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "[provider]\nbase_url = \"http://127.0.0.1:9\"\ntimeout_seconds = 2\n",
    )
    .unwrap();

    let output = bazaar()
        .args(["check", "--config-file"])
        .arg(&config_path)
        .output()
        .expect("Failed to execute check command");

    assert!(!output.status.success(), "Check should fail without a provider");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("unreachable"));
}

/// Test that snapshot falls back to defaults for unknown selections
#[test]
fn test_snapshot_falls_back_on_unknown_selection() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "[provider]\nbase_url = \"http://127.0.0.1:9\"\ntimeout_seconds = 2\n",
    )
    .unwrap();

    let output = bazaar()
        .args(["snapshot", "--universe", "NASDAQ", "--period", "2Days", "--config-file"])
        .arg(&config_path)
        .output()
        .expect("Failed to execute snapshot command");

    assert!(output.status.success(), "Snapshot should fall back, not fail");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No stock data available for this index."));
}

/// Test that a broken config file is reported instead of silently ignored
#[test]
fn test_broken_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "[provider\nbase_url = ").unwrap();

    let output = bazaar()
        .env_remove("RUST_LOG")
        .env("BAZAAR_PROVIDER_BASE_URL", "http://127.0.0.1:9")
        .env("BAZAAR_PROVIDER_TIMEOUT_SECONDS", "2")
        .args(["check", "--config-file"])
        .arg(&config_path)
        .output()
        .expect("Failed to execute check command");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load config"), "{}", stderr);
}
