//! Trigger-context resolution.
//!
//! The two supported trigger events map onto one pipeline parameterization:
//!
//! - `pull_request` / `pull_request_target`: base/head are the PR's base and
//!   head SHAs; the commit target is the PR head branch, or read-only when
//!   the head lives in a fork.
//! - `push`: base/head are the payload's `before`/`after`; the commit target
//!   is the pushed branch.
//!
//! Everything is resolved once here at the boundary; the pipeline itself
//! never looks at the environment.

use std::env;
use std::fs;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Where an auto-commit may go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitTarget {
    /// The run has push rights on this branch.
    Branch(String),
    /// Cross-fork pull request; no push rights.
    ReadOnly,
}

/// Everything the pipeline needs from the environment, resolved once.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub repo: String,
    pub token: String,
    pub api_url: String,
    pub base: String,
    pub head: String,
    pub commit_target: CommitTarget,
}

/// Resolve the full run context for `retrack run`.
pub fn from_env() -> Result<RunContext> {
    let (repo, token, api_url) = api_env()?;
    let event_name = env::var("GITHUB_EVENT_NAME").context("GITHUB_EVENT_NAME is not set")?;
    let event_path = env::var("GITHUB_EVENT_PATH").context("GITHUB_EVENT_PATH is not set")?;
    let payload = fs::read_to_string(&event_path)
        .with_context(|| format!("failed to read event payload at {event_path}"))?;
    let ref_name = env::var("GITHUB_REF_NAME").ok();

    let (base, head, commit_target) = resolve(&event_name, &payload, &repo, ref_name.as_deref())?;
    Ok(RunContext {
        repo,
        token,
        api_url,
        base,
        head,
        commit_target,
    })
}

/// Repo, token, and API host — the subset `retrack check` needs.
///
/// The token comes from the `token` action input (`INPUT_TOKEN`) with
/// `GITHUB_TOKEN` as fallback; absence is a fatal startup error.
pub fn api_env() -> Result<(String, String, String)> {
    let token = env::var("INPUT_TOKEN")
        .ok()
        .filter(|t| !t.is_empty())
        .or_else(|| env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()))
        .context("no API token: set the `token` input or GITHUB_TOKEN")?;
    let repo = env::var("GITHUB_REPOSITORY").context("GITHUB_REPOSITORY is not set")?;
    let api_url =
        env::var("GITHUB_API_URL").unwrap_or_else(|_| "https://api.github.com".to_string());
    Ok((repo, token, api_url))
}

fn resolve(
    event_name: &str,
    payload: &str,
    repo: &str,
    ref_name: Option<&str>,
) -> Result<(String, String, CommitTarget)> {
    match event_name {
        "pull_request" | "pull_request_target" => {
            let event: PullRequestEvent =
                serde_json::from_str(payload).context("malformed pull_request event payload")?;
            let pr = event.pull_request;
            let same_repo = pr.head.repo.as_ref().is_some_and(|r| r.full_name == repo);
            let commit_target = if same_repo {
                CommitTarget::Branch(pr.head.branch)
            } else {
                CommitTarget::ReadOnly
            };
            Ok((pr.base.sha, pr.head.sha, commit_target))
        }
        "push" => {
            let event: PushEvent =
                serde_json::from_str(payload).context("malformed push event payload")?;
            let branch = ref_name
                .context("GITHUB_REF_NAME is not set")?
                .to_string();
            Ok((event.before, event.after, CommitTarget::Branch(branch)))
        }
        other => bail!("unsupported trigger event '{other}'; expected pull_request or push"),
    }
}

// ---------------------------------------------------------------------------
// Event payload shapes (the fields we read, nothing more)
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct PullRequestEvent {
    pull_request: PullRequest,
}

#[derive(Deserialize)]
struct PullRequest {
    base: BaseRef,
    head: HeadRef,
}

#[derive(Deserialize)]
struct BaseRef {
    sha: String,
}

#[derive(Deserialize)]
struct HeadRef {
    sha: String,
    #[serde(rename = "ref")]
    branch: String,
    /// Absent when the head repository was deleted.
    repo: Option<HeadRepo>,
}

#[derive(Deserialize)]
struct HeadRepo {
    full_name: String,
}

#[derive(Deserialize)]
struct PushEvent {
    before: String,
    after: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn pr_payload(head_repo: &str) -> String {
        format!(
            r#"{{
  "pull_request": {{
    "base": {{ "sha": "base000" }},
    "head": {{
      "sha": "head111",
      "ref": "feature/renames",
      "repo": {{ "full_name": "{head_repo}" }}
    }}
  }}
}}"#
        )
    }

    #[test]
    fn same_repo_pull_request_targets_the_head_branch() {
        let (base, head, target) =
            resolve("pull_request", &pr_payload("acme/widgets"), "acme/widgets", None)
                .expect("resolve");
        assert_eq!(base, "base000");
        assert_eq!(head, "head111");
        assert_eq!(target, CommitTarget::Branch("feature/renames".to_string()));
    }

    #[test]
    fn fork_pull_request_is_read_only() {
        let (_, _, target) =
            resolve("pull_request", &pr_payload("fork/widgets"), "acme/widgets", None)
                .expect("resolve");
        assert_eq!(target, CommitTarget::ReadOnly);
    }

    #[test]
    fn pull_request_with_deleted_head_repo_is_read_only() {
        let payload = r#"{
  "pull_request": {
    "base": { "sha": "base000" },
    "head": { "sha": "head111", "ref": "gone", "repo": null }
  }
}"#;
        let (_, _, target) =
            resolve("pull_request", payload, "acme/widgets", None).expect("resolve");
        assert_eq!(target, CommitTarget::ReadOnly);
    }

    #[test]
    fn push_uses_before_after_and_the_pushed_branch() {
        let payload = r#"{ "before": "old222", "after": "new333" }"#;
        let (base, head, target) =
            resolve("push", payload, "acme/widgets", Some("main")).expect("resolve");
        assert_eq!(base, "old222");
        assert_eq!(head, "new333");
        assert_eq!(target, CommitTarget::Branch("main".to_string()));
    }

    #[test]
    fn push_without_ref_name_is_an_error() {
        let payload = r#"{ "before": "old222", "after": "new333" }"#;
        let err = resolve("push", payload, "acme/widgets", None).expect_err("must fail");
        assert!(err.to_string().contains("GITHUB_REF_NAME"));
    }

    #[test]
    fn unsupported_events_are_rejected() {
        let err = resolve("schedule", "{}", "acme/widgets", None).expect_err("must fail");
        assert!(err.to_string().contains("unsupported trigger event 'schedule'"));
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let err =
            resolve("pull_request", "{ not json", "acme/widgets", None).expect_err("must fail");
        assert!(err.to_string().contains("malformed pull_request"));
    }
}
