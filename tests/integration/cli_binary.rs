//! End-to-end tests against the cek binary.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the binary with an isolated home so no user config is picked up.
fn run_cek(temp_dir: &TempDir, args: &[&str], envs: &[(&str, &str)]) -> Output {
    let home = temp_dir.path().join("home");
    let config_home = temp_dir.path().join("config");
    fs::create_dir_all(&home).unwrap();
    fs::create_dir_all(&config_home).unwrap();

    let mut command = Command::new(env!("CARGO_BIN_EXE_cek"));
    command
        .env_clear()
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", &config_home)
        .args(args);
    for (key, value) in envs {
        command.env(key, value);
    }
    command.output().unwrap()
}

#[test]
fn version_json_on_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cek(&temp_dir, &["-o", "json", "version"], &[]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "cek");
    assert!(output.stderr.is_empty());
}

#[test]
fn context_reads_environment() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cek(
        &temp_dir,
        &["--output", "json", "context"],
        &[("CEK_ENDPOINT", "localhost:7000"), ("CEK_CONTEXT", "ci"), ("CEK_NO_PROGRESS", "1")],
    );
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["endpoint"], "localhost:7000");
    assert_eq!(value["context"], "ci");
    assert_eq!(value["context_flag"], "");
    assert_eq!(value["progress"], false);
}

#[test]
fn config_file_sets_context() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("cek.toml");
    fs::write(
        &config_path,
        "endpoint = \"localhost:7001\"\ncontext = \"from-file\"\n",
    )
    .unwrap();

    let output = run_cek(
        &temp_dir,
        &["--config", config_path.to_str().unwrap(), "-o", "json", "context"],
        &[],
    );
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["context"], "from-file");
}

#[test]
fn inspect_failure_renders_no_result() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cek(&temp_dir, &["--no-progress", "inspect"], &[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No endpoint configured"), "stderr: {}", stderr);
}

#[test]
fn invalid_output_format_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cek(&temp_dir, &["-o", "yaml", "version"], &[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid output format"));
}
