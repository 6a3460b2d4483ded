//! Error types for retrack-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from loading the tracked-file mapping.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure (permission denied, unreadable file, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse workflow at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The workflow file did not exist at the expected path.
    #[error("workflow file not found at {path}")]
    WorkflowNotFound { path: PathBuf },

    /// No step in the workflow carries a `files` mapping.
    #[error("no workflow step carries a tracked `files` mapping")]
    MappingNotFound,

    /// A `files` entry is not a `{source, destination}` pair of strings.
    #[error("tracked files entry #{index} is malformed: {reason}")]
    MalformedEntry { index: usize, reason: String },
}
