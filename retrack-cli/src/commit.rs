//! Auto-commit of the patched workflow file through the contents API.
//!
//! Write discipline: read the file's current blob SHA at the target branch,
//! then write conditioned on that SHA. Two racing runs cannot silently
//! overwrite each other — the loser's write is rejected by the API and
//! surfaces as a fatal error, not retried.

use std::path::Path;

use anyhow::{Context, Result};

use retrack_github::{CommitIdentity, FileUpdate, RepoClient};

/// Commit `content` to `path` on `branch`, keyed to the file's last-known SHA.
pub fn push_update(
    client: &RepoClient,
    path: &Path,
    content: &str,
    branch: &str,
    message: &str,
) -> Result<()> {
    let repo_path = path.to_string_lossy();
    let remote = client
        .file_at(&repo_path, branch)
        .with_context(|| format!("failed to read '{repo_path}' at '{branch}'"))?;
    client
        .update_file(
            &repo_path,
            &FileUpdate {
                branch,
                message,
                content,
                expected_sha: &remote.sha,
                identity: CommitIdentity::github_actions(),
            },
        )
        .with_context(|| format!("failed to commit '{repo_path}' to '{branch}'"))?;
    Ok(())
}
