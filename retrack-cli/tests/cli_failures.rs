//! Binary-level failure-mode tests.
//!
//! Hermetic: every case fails during context resolution or config loading,
//! before the first API request would be made.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn retrack_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("retrack"));
    for var in [
        "INPUT_TOKEN",
        "GITHUB_TOKEN",
        "GITHUB_REPOSITORY",
        "GITHUB_EVENT_NAME",
        "GITHUB_EVENT_PATH",
        "GITHUB_REF_NAME",
        "GITHUB_API_URL",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn help_lists_both_subcommands() {
    retrack_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("run"))
        .stdout(contains("check"));
}

#[test]
fn run_without_token_fails_with_error_annotation() {
    retrack_cmd()
        .arg("run")
        .assert()
        .failure()
        .stderr(contains("::error::"))
        .stderr(contains("token"));
}

#[test]
fn run_without_repository_fails() {
    retrack_cmd()
        .arg("run")
        .env("GITHUB_TOKEN", "t0ken")
        .assert()
        .failure()
        .stderr(contains("GITHUB_REPOSITORY"));
}

#[test]
fn run_with_unsupported_event_fails() {
    let dir = TempDir::new().expect("tempdir");
    let payload = dir.path().join("event.json");
    fs::write(&payload, "{}").expect("write payload");

    retrack_cmd()
        .arg("run")
        .env("GITHUB_TOKEN", "t0ken")
        .env("GITHUB_REPOSITORY", "acme/widgets")
        .env("GITHUB_EVENT_NAME", "schedule")
        .env("GITHUB_EVENT_PATH", &payload)
        .assert()
        .failure()
        .stderr(contains("unsupported trigger event 'schedule'"));
}

#[test]
fn run_with_missing_workflow_file_fails_before_any_request() {
    let dir = TempDir::new().expect("tempdir");
    let payload = dir.path().join("event.json");
    fs::write(
        &payload,
        r#"{ "before": "old222", "after": "new333" }"#,
    )
    .expect("write payload");

    retrack_cmd()
        .arg("run")
        .arg("--file")
        .arg(dir.path().join("does-not-exist.yml"))
        .env("GITHUB_TOKEN", "t0ken")
        .env("GITHUB_REPOSITORY", "acme/widgets")
        .env("GITHUB_EVENT_NAME", "push")
        .env("GITHUB_EVENT_PATH", &payload)
        .env("GITHUB_REF_NAME", "main")
        .assert()
        .failure()
        .stderr(contains("workflow file not found"));
}

#[test]
fn check_without_token_fails() {
    retrack_cmd()
        .args(["check", "--base", "a1b2c3", "--head", "d4e5f6"])
        .assert()
        .failure()
        .stderr(contains("token"));
}

#[test]
fn check_requires_base_and_head() {
    retrack_cmd()
        .arg("check")
        .env("GITHUB_TOKEN", "t0ken")
        .env("GITHUB_REPOSITORY", "acme/widgets")
        .assert()
        .failure()
        .stderr(contains("--base"));
}
