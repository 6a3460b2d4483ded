//! Wire types for the GitHub compare and contents endpoints.

use serde::{Deserialize, Serialize};

/// Response of `GET /repos/{repo}/compare/{base}...{head}`, reduced to the
/// file list — the commit metadata around it is irrelevant here.
#[derive(Debug, Clone, Deserialize)]
pub struct CompareResponse {
    #[serde(default)]
    pub files: Vec<ChangedFile>,
}

/// One file record in a commit comparison.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChangedFile {
    pub filename: String,
    pub status: ChangeStatus,
    /// Only present for renames.
    #[serde(default)]
    pub previous_filename: Option<String>,
}

/// File status as reported by the compare endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    Added,
    Removed,
    Modified,
    Renamed,
    Copied,
    Changed,
    Unchanged,
}

/// Response of `GET /repos/{repo}/contents/{path}?ref=...`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentsResponse {
    pub sha: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub encoding: String,
}

/// Author/committer identity for a contents write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitIdentity {
    pub name: String,
    pub email: String,
}

impl CommitIdentity {
    /// The identity CI-generated commits are attributed to by default.
    pub fn github_actions() -> Self {
        Self {
            name: "github-actions[bot]".to_string(),
            email: "41898282+github-actions[bot]@users.noreply.github.com".to_string(),
        }
    }
}
