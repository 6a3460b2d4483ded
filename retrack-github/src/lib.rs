//! # retrack-github
//!
//! Blocking GitHub REST client for the retrack pipeline: commit comparison,
//! contents read, and SHA-preconditioned contents write. One request per
//! call, no retries — the tool is a single CI invocation, not a service.

pub mod changes;
pub mod client;
pub mod error;
pub mod types;

pub use changes::change_set;
pub use client::{FileUpdate, RemoteFile, RepoClient};
pub use error::ApiError;
pub use types::{ChangeStatus, ChangedFile, CommitIdentity};
