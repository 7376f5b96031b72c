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
    dir.path().join(".leadership").join("config.json")
}

const BINARY_NAME: &str = "leadership-cli";

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
/// set-api-url should persist the URL into the config file.
fn set_api_url_creates_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);

    // Ensure the file does not exist initially
    assert!(!config_path.exists());

    // Run the command
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("set-api-url")
        .arg("https://procjene.example.hr/")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("API URL saved"));

    // Confirm the file was created, with the normalized URL inside
    assert!(config_path.exists());
    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("https://procjene.example.hr"));
}

#[test]
/// set-api-url should reject values that are not URLs.
fn set_api_url_rejects_garbage() {
    let tmp = temp_config_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("set-api-url")
        .arg("not-a-url")
        .env("HOME", tmp.path())
        .assert()
        .failure();

    assert!(!config_file_path(&tmp).exists());
}

#[test]
/// Reset command should delete an existing config file.
fn reset_deletes_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, r#"{"api_url": "http://localhost:5000"}"#).unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    // Run the command
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Configuration cleared"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}

#[test]
/// Mismatched dimension overrides end the run without rendering, exit 0.
fn misaligned_dimensions_no_op() {
    let tmp = temp_config_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("matrix")
        .arg("--headless")
        .arg("--dimension-keys")
        .arg("A,B")
        .arg("--dimension-labels")
        .arg("Prva")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Invalid configuration"));
}
