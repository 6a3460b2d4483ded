//! Workflow-file loading and tracked-mapping discovery.
//!
//! The tracked mapping lives inside a CI workflow definition:
//!
//! ```yaml
//! jobs:
//!   sync:
//!     steps:
//!       - uses: retrack/run@v1
//!         with:
//!           files:
//!             - source: specs/api.yaml
//!               destination: generated/api.json
//! ```
//!
//! The loader keeps the raw text verbatim next to the parsed entries — the
//! text patcher splices the raw text and must never round-trip it through a
//! serializer.

use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::error::ConfigError;
use crate::types::TrackedSpec;

/// A loaded workflow file: raw text plus the tracked entries parsed out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowFile {
    /// Path the file was read from.
    pub path: PathBuf,
    /// Original file content, byte-for-byte.
    pub raw: String,
    /// Tracked entries in file order.
    pub specs: Vec<TrackedSpec>,
}

/// Load the workflow at `path` and locate its tracked `files` mapping.
///
/// Returns `ConfigError::WorkflowNotFound` if absent,
/// `ConfigError::Parse` (with path + line context) if malformed YAML, and
/// `ConfigError::MappingNotFound` when no step carries a `files` sequence.
pub fn load_at(path: &Path) -> Result<WorkflowFile, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::WorkflowNotFound {
            path: path.to_path_buf(),
        });
    }
    let raw = std::fs::read_to_string(path)?;
    let doc: Value = serde_yaml::from_str(&raw).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    let specs = specs_from_doc(&doc)?;
    Ok(WorkflowFile {
        path: path.to_path_buf(),
        raw,
        specs,
    })
}

/// Walk `jobs`, each job's `steps`, each step's `with.files`, and parse the first
/// `files` sequence found. A present-but-empty sequence is a valid empty
/// mapping; no sequence at all is `MappingNotFound`.
pub fn specs_from_doc(doc: &Value) -> Result<Vec<TrackedSpec>, ConfigError> {
    let jobs = doc
        .get("jobs")
        .and_then(Value::as_mapping)
        .ok_or(ConfigError::MappingNotFound)?;

    for job in jobs.values() {
        let Some(steps) = job.get("steps").and_then(Value::as_sequence) else {
            continue;
        };
        for step in steps {
            let Some(files) = step
                .get("with")
                .and_then(|with| with.get("files"))
                .and_then(Value::as_sequence)
            else {
                continue;
            };
            return parse_entries(files);
        }
    }

    Err(ConfigError::MappingNotFound)
}

fn parse_entries(files: &[Value]) -> Result<Vec<TrackedSpec>, ConfigError> {
    files
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let source = string_field(entry, "source", index)?;
            let destination = string_field(entry, "destination", index)?;
            Ok(TrackedSpec {
                source,
                destination,
            })
        })
        .collect()
}

fn string_field(entry: &Value, field: &str, index: usize) -> Result<String, ConfigError> {
    entry
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| ConfigError::MalformedEntry {
            index,
            reason: format!("missing string field `{field}`"),
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
