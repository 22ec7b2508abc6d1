//! Integration tests for the fabline binary.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a test config file.
fn create_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, content).unwrap();
    config_path
}

/// Get a command with config path set via env var, running inside `dir`.
fn cmd_with_config(dir: &TempDir, config_path: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("fabline");
    cmd.env("FABLINE_CONFIG", config_path);
    cmd.current_dir(dir.path());
    cmd
}

/// Get a command with no user config.
fn cmd_without_config(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("fabline");
    cmd.env("FABLINE_CONFIG", dir.path().join("nonexistent.toml"));
    cmd.current_dir(dir.path());
    cmd
}

fn write_script(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_no_arguments() {
    let dir = TempDir::new().unwrap();
    cmd_without_config(&dir)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_commands_text() {
    let dir = TempDir::new().unwrap();
    cmd_without_config(&dir)
        .args(["-Cmd1", "a", "b", "-cmd2", "c"])
        .assert()
        .success()
        .stdout("cmd1 \"a\" \"b\"\ncmd2 \"c\"\n");
}

#[test]
fn test_trailing_dash_reported() {
    let dir = TempDir::new().unwrap();
    cmd_without_config(&dir)
        .args(["-go", "-"])
        .assert()
        .success()
        .stdout("go\n-\n");
}

#[test]
fn test_dash_succession_fails() {
    let dir = TempDir::new().unwrap();
    cmd_without_config(&dir)
        .args(["-", "-"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("Invalid CLI syntax: succession of dashes\n");
}

#[test]
fn test_invalid_cli_name_fails() {
    let dir = TempDir::new().unwrap();
    cmd_without_config(&dir)
        .args(["-9lives"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid command name"));
}

#[test]
fn test_script_file_spliced() {
    let dir = TempDir::new().unwrap();
    write_script(&dir, "boot.fab", "Load \"my file\"\nrun -- later\n");
    let canonical = fs::canonicalize(dir.path().join("boot.fab")).unwrap();

    cmd_without_config(&dir)
        .args(["boot.fab", "-after", "x"])
        .assert()
        .success()
        .stdout(format!(
            "<file> {}\nload \"my file\"\nrun\nafter \"x\"\n",
            serde_json::to_string(&canonical.display().to_string()).unwrap()
        ));
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    cmd_without_config(&dir)
        .args(["-ok", "arg", "-", "xx", "yy"])
        .assert()
        .success();

    cmd_without_config(&dir)
        .arg("nope.fab")
        .assert()
        .code(1)
        .stderr("Error reading specified file: nope.fab\n");
}

#[test]
fn test_file_syntax_error_no_partial_output() {
    let dir = TempDir::new().unwrap();
    write_script(&dir, "bad.fab", "good one\n1abc two\n");

    cmd_without_config(&dir)
        .arg("bad.fab")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("Invalid syntax in file bad.fab: invalid command name\n");
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let config = create_config(&dir, "[output]\nformat = \"json\"\n");

    let assert = cmd_with_config(&dir, &config)
        .args(["-say", "hi", "-"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["commands"][0]["name"], "say");
    assert_eq!(parsed["commands"][0]["args"][0], "hi");
    assert_eq!(parsed["from_stdin"], true);
}

#[test]
fn test_single_char_names_opt_in() {
    let dir = TempDir::new().unwrap();
    cmd_without_config(&dir).arg("-x").assert().code(1);

    let config = create_config(&dir, "[names]\nallow_single_char = true\n");
    cmd_with_config(&dir, &config)
        .arg("-x")
        .assert()
        .success()
        .stdout("x\n");
}

#[test]
fn test_project_config_overrides() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".fabline.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    cmd_without_config(&dir)
        .arg("-go")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"commands\""));
}

#[test]
fn test_broken_config_falls_back() {
    let dir = TempDir::new().unwrap();
    let config = create_config(&dir, "[output\nbroken");

    cmd_with_config(&dir, &config)
        .arg("-go")
        .assert()
        .success()
        .stdout("go\n")
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn test_audit_log_written() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("audit.jsonl");
    let config = create_config(
        &dir,
        &format!(
            "[audit]\nenabled = true\npath = {}\n",
            toml_string(&log_path.display().to_string())
        ),
    );

    cmd_with_config(&dir, &config)
        .args(["-go", "now"])
        .assert()
        .success();
    cmd_with_config(&dir, &config)
        .args(["--"])
        .assert()
        .code(1);

    let content = fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("\"args\":\"-go now\""));
    assert!(lines[0].contains("\"commands\":1"));
    assert!(lines[1].contains("succession of dashes"));
}

fn toml_string(s: &str) -> String {
    format!("'{}'", s)
}
