//! Workflow loading error-message and raw-text-retention integration tests.

use std::fs;

use retrack_core::{workflow, ConfigError};
use tempfile::TempDir;

const WORKFLOW: &str = r#"name: sync tracked files
on:
  push:
    branches: [main]

jobs:
  sync:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - uses: retrack/run@v1
        with:
          token: ${{ secrets.GITHUB_TOKEN }}
          files:
            - source: specs/api.yaml
              destination: generated/api.json
            - source: specs/billing.yaml
              destination: generated/billing.json
"#;

// ---------------------------------------------------------------------------
// 1. Load error messages
// ---------------------------------------------------------------------------

#[test]
fn load_missing_workflow_returns_not_found() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("sync.yml");
    let err = workflow::load_at(&path).unwrap_err();
    assert!(matches!(err, ConfigError::WorkflowNotFound { .. }), "got: {err}");
    assert!(err.to_string().contains("sync.yml"));
}

#[test]
fn load_corrupt_yaml_returns_parse_error_with_path() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("sync.yml");
    fs::write(&path, b": : corrupt : yaml : !!!\n  - broken: [unclosed").expect("write");

    let err = workflow::load_at(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got: {err}");
    let msg = err.to_string();
    assert!(msg.contains("sync.yml"), "must contain file path, got: {msg}");
}

#[test]
fn load_workflow_without_mapping_returns_mapping_not_found() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("ci.yml");
    fs::write(&path, "jobs:\n  build:\n    steps:\n      - run: cargo test\n").expect("write");

    let err = workflow::load_at(&path).unwrap_err();
    assert!(matches!(err, ConfigError::MappingNotFound), "got: {err}");
}

// ---------------------------------------------------------------------------
// 2. Successful load
// ---------------------------------------------------------------------------

#[test]
fn load_keeps_raw_text_verbatim() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("sync.yml");
    fs::write(&path, WORKFLOW).expect("write");

    let loaded = workflow::load_at(&path).expect("load");
    assert_eq!(loaded.raw, WORKFLOW, "raw text must be byte-identical");
    assert_eq!(loaded.path, path);
}

#[test]
fn load_parses_entries_in_file_order() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("sync.yml");
    fs::write(&path, WORKFLOW).expect("write");

    let loaded = workflow::load_at(&path).expect("load");
    let sources: Vec<&str> = loaded.specs.iter().map(|s| s.source.as_str()).collect();
    assert_eq!(sources, ["specs/api.yaml", "specs/billing.yaml"]);
    assert_eq!(loaded.specs[1].destination, "generated/billing.json");
}
