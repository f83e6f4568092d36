use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".botboard").join("config.json")
}

const BINARY_NAME: &str = "botboard";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Export against an unreachable backend fails without writing a report.
fn export_fails_against_unreachable_backend() {
    let tmp = temp_config_dir();
    let output = tmp.path().join("report.csv");

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("export")
        .arg("--base-url")
        .arg("http://127.0.0.1:9") // discard port, nothing listens here
        .arg("--output")
        .arg(&output)
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("Export failed"));

    assert!(!output.exists(), "no partial report on failure");
}

#[test]
/// Clear-config command should delete an existing config file.
fn clear_config_deletes_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    // Run the command
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("clear-config")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Clearing dashboard configuration"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}

#[test]
/// Clearing a configuration that was never saved is not an error.
fn clear_config_tolerates_missing_file() {
    let tmp = temp_config_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("clear-config")
        .env("HOME", tmp.path())
        .assert()
        .success();
}
