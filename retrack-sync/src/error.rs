//! Error types for retrack-sync.

use thiserror::Error;

use retrack_core::ConfigError;
use retrack_github::ApiError;

/// All errors that can arise from the sync pipeline.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An error from loading the tracked mapping.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// An error from the hosting API.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// An error from the text patcher.
    #[error("patch error: {0}")]
    Patch(#[from] PatchError),
}

/// Errors from splicing decisions onto the raw config text.
#[derive(Debug, Error)]
pub enum PatchError {
    /// A splice pattern failed to compile. Anchors are regex-escaped, so this
    /// indicates a bug in the pattern templates rather than in path data.
    #[error("invalid splice pattern: {0}")]
    Pattern(#[from] regex::Error),
}
