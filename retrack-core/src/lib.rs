//! # retrack-core
//!
//! Domain model and workflow-file loading for retrack.
//!
//! [`workflow::load_at`] reads the workflow YAML and locates the tracked
//! `{source, destination}` mapping; [`types`] holds the change/decision model
//! shared by the diff fetcher and the reconciler.

pub mod error;
pub mod types;
pub mod workflow;

pub use error::ConfigError;
pub use types::{ChangeSet, Decision, FileChange, TrackedSpec};
pub use workflow::WorkflowFile;
