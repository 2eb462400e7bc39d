//! Exit paths of the `futures_bot` binary that never reach the exchange.

#![cfg(feature = "binance_exec")]

use std::path::Path;
use std::process::{Command, Output};

use futures_order_bot::config::{
    API_KEY_ENV, API_SECRET_ENV, BASE_URL_ENV, RECV_WINDOW_ENV, TESTNET_ENV,
};
use futures_order_bot::utils::logging::LOG_FILE_ENV;

fn run_bot(dir: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_futures_bot"));
    command
        .args(args)
        .current_dir(dir)
        .env(LOG_FILE_ENV, dir.join("bot.log"))
        .env_remove("RUST_LOG");
    for key in [API_KEY_ENV, API_SECRET_ENV, TESTNET_ENV, BASE_URL_ENV, RECV_WINDOW_ENV] {
        command.env_remove(key);
    }
    for (key, value) in env {
        command.env(key, value);
    }
    command.output().expect("failed to run futures_bot")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn no_command_prints_usage_and_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_bot(dir.path(), &[], &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Usage:"));
}

#[test]
fn missing_argument_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_bot(dir.path(), &["limit", "BTCUSDT", "BUY", "1"], &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error:"));
}

#[test]
fn help_exits_zero() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_bot(dir.path(), &["--help"], &[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("stop-limit"));
}

#[test]
fn unknown_command_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_bot(dir.path(), &["iceberg", "BTCUSDT"], &[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output).trim_end(), "Unknown command: iceberg");
}

#[test]
fn unreadable_settings_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.yaml");

    let output = run_bot(
        dir.path(),
        &["--config", missing.to_str().unwrap(), "market", "BTCUSDT", "BUY", "0.01"],
        &[],
    );

    assert_eq!(output.status.code(), Some(1));
    let line = stdout(&output);
    assert!(line.starts_with("Error: Failed to load settings"));
    assert!(line.contains("missing.yaml"));
}

#[test]
fn bad_testnet_flag_is_reported() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_bot(
        dir.path(),
        &["market", "BTCUSDT", "BUY", "0.01"],
        &[(TESTNET_ENV, "maybe")],
    );

    assert_eq!(output.status.code(), Some(1));
    let line = stdout(&output);
    assert!(line.starts_with("Error: Failed to load settings"));
    assert!(line.contains(TESTNET_ENV));

    let log = std::fs::read_to_string(dir.path().join("bot.log")).unwrap();
    assert!(log.contains("CLI execution failed"));
}
