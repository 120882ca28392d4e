//! End-to-end tests for the `el` binary
//!
//! Each test runs the listener in a scratch working directory and plays the
//! supervisor side over stdin.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn scratch_dir() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir(temp.path().join("tmp")).expect("Failed to create tmp dir");
    temp
}

fn listener(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("el").expect("el binary not built");
    cmd.current_dir(cwd).env("XDG_CONFIG_HOME", cwd).env_remove("RUST_LOG");
    cmd
}

fn audit_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_well_formed_cycle() {
    let temp = scratch_dir();

    listener(temp.path())
        .write_stdin("len:2\nOK")
        .assert()
        .success()
        .stdout("READY\nRESULT 2\nOKREADY\n")
        .stderr(predicate::str::contains("line: len:2\nOK\n"));

    let lines = audit_lines(&temp.path().join("tmp/date.log"));
    assert_eq!(lines.len(), 1);
    assert!(chrono::NaiveDateTime::parse_from_str(&lines[0], "%Y-%m-%d %H:%M:%S%.f").is_ok());
}

#[test]
fn test_garbage_header_terminates_without_result() {
    let temp = scratch_dir();

    listener(temp.path())
        .write_stdin("garbage\n")
        .assert()
        .failure()
        .stdout("READY\n")
        .stderr(predicate::str::contains("garbage"));

    assert!(!temp.path().join("tmp/date.log").exists());
}

#[test]
fn test_missing_tmp_directory_is_fatal() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    listener(temp.path())
        .write_stdin("len:2\nOK")
        .assert()
        .failure()
        .stdout("READY\n")
        .stderr(predicate::str::contains("tmp/date.log"));
}

#[test]
fn test_consecutive_cycles() {
    let temp = scratch_dir();

    listener(temp.path())
        .write_stdin("len:2\nOKlen:0\nserial:7 eventname:TICK_5 len:4\ntick")
        .assert()
        .success()
        .stdout("READY\nRESULT 2\nOKREADY\nRESULT 2\nOKREADY\nRESULT 2\nOKREADY\n");

    let lines = audit_lines(&temp.path().join("tmp/date.log"));
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_extra_arguments_ignored() {
    let temp = scratch_dir();

    listener(temp.path())
        .args(["backup", "--nightly"])
        .write_stdin("len:2\nOK")
        .assert()
        .success()
        .stdout("READY\nRESULT 2\nOKREADY\n");
}

#[test]
fn test_audit_log_flag() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let audit = temp.path().join("events.log");

    listener(temp.path())
        .arg("--audit-log")
        .arg(&audit)
        .write_stdin("len:0\n")
        .assert()
        .success();

    assert_eq!(audit_lines(&audit).len(), 1);
}

#[test]
fn test_config_file_computed_announce() {
    let temp = scratch_dir();
    let config = temp.path().join("el.yml");
    fs::write(&config, "result-body: FAIL\nannounce: computed\n").expect("Failed to write config");

    listener(temp.path())
        .arg("--config")
        .arg(&config)
        .write_stdin("len:0\n")
        .assert()
        .success()
        .stdout("READY\nRESULT 4\nFAILREADY\n");
}
