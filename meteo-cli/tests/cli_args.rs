//! Integration tests for CLI argument handling.
//!
//! None of these reach the network: every case is rejected or answered
//! before a request would be sent.

use std::fs;
use std::path::Path;
use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_meteo"))
        .env_remove("METEO_CONFIG")
        .args(args)
        .output()
        .expect("Failed to execute meteo")
}

/// Same as `run_cli`, but with the config file redirected to `config`.
fn run_cli_with_config(config: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_meteo"))
        .env("METEO_CONFIG", config)
        .args(args)
        .output()
        .expect("Failed to execute meteo")
}

#[test]
fn help_lists_subcommands() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success(), "Expected --help to exit successfully");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("meteo"));
    assert!(stdout.contains("search"));
    assert!(stdout.contains("forecast"));
    assert!(stdout.contains("show"));
}

#[test]
fn blank_search_query_is_rejected() {
    let output = run_cli(&["search", "   "]);
    assert!(!output.status.success(), "Expected blank query to fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("must not be empty"),
        "Should explain the empty query: {stderr}"
    );
}

#[test]
fn out_of_range_longitude_is_rejected() {
    let output = run_cli(&["forecast", "--latitude", "10", "--longitude", "-200"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("outside"), "Should mention the valid range: {stderr}");
}

#[test]
fn forecast_requires_both_coordinates() {
    let output = run_cli(&["forecast", "--latitude", "10"]);
    assert!(!output.status.success());
}

#[test]
fn config_path_points_at_toml_file() {
    let output = run_cli(&["config", "path"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim_end().ends_with("config.toml"), "got: {stdout}");
}

#[test]
fn config_path_honours_override() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("meteo.toml");

    let output = run_cli_with_config(&config, &["config", "path"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), config.display().to_string());
}

#[test]
fn config_init_writes_defaults_that_show_reads_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("nested").join("config.toml");

    let output = run_cli_with_config(&config, &["config", "init"]);
    assert!(
        output.status.success(),
        "init failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let written = fs::read_to_string(&config).expect("config file should exist");
    assert!(written.contains("https://api.open-meteo.com/v1/forecast"));
    assert!(written.contains("https://geocoding-api.open-meteo.com/v1/search"));

    let shown = run_cli_with_config(&config, &["config", "show"]);
    assert!(shown.status.success());
    assert_eq!(String::from_utf8_lossy(&shown.stdout), written);
}

#[test]
fn config_init_refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("config.toml");
    fs::write(&config, "[http]\ntimeout_secs = 3\n").unwrap();

    let output = run_cli_with_config(&config, &["config", "init"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"), "got: {stderr}");
    assert_eq!(
        fs::read_to_string(&config).unwrap(),
        "[http]\ntimeout_secs = 3\n"
    );

    let forced = run_cli_with_config(&config, &["config", "init", "--force"]);
    assert!(forced.status.success());
    assert!(!fs::read_to_string(&config).unwrap().contains("timeout_secs"));
}

#[test]
fn search_help_mentions_query_trimming() {
    let output = run_cli(&["search", "--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("trimmed"), "got: {stdout}");
}
