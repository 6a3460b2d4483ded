//! Blocking GitHub REST client.
//!
//! Authentication is a bearer token on every request. Errors carry the
//! endpoint they came from; callers propagate them unchanged and never
//! retry.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::Serialize;

use retrack_core::ChangeSet;

use crate::changes::change_set;
use crate::error::ApiError;
use crate::types::{ChangedFile, CommitIdentity, CompareResponse, ContentsResponse};

const USER_AGENT: &str = concat!("retrack/", env!("CARGO_PKG_VERSION"));

/// Client bound to one repository (`owner/name`) on one API host.
#[derive(Debug, Clone)]
pub struct RepoClient {
    agent: ureq::Agent,
    api_url: String,
    repo: String,
    token: String,
}

/// A file read through the contents API: decoded text plus the blob SHA used
/// as the optimistic-write precondition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    pub text: String,
    pub sha: String,
}

/// Parameters for a SHA-preconditioned contents write.
#[derive(Debug, Clone)]
pub struct FileUpdate<'a> {
    pub branch: &'a str,
    pub message: &'a str,
    pub content: &'a str,
    /// Last-known blob SHA; the API rejects the write if the file moved on.
    pub expected_sha: &'a str,
    pub identity: CommitIdentity,
}

impl RepoClient {
    pub fn new(api_url: &str, repo: &str, token: &str) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            api_url: api_url.trim_end_matches('/').to_string(),
            repo: repo.to_string(),
            token: token.to_string(),
        }
    }

    /// Changed files between `base` and `head`, as the API reports them.
    ///
    /// Single page only; large-scale diffs are out of scope.
    pub fn compare(&self, base: &str, head: &str) -> Result<Vec<ChangedFile>, ApiError> {
        let endpoint = format!(
            "{}/repos/{}/compare/{}...{}",
            self.api_url, self.repo, base, head
        );
        let resp: CompareResponse = self.get_json(endpoint)?;
        Ok(resp.files)
    }

    /// Deletions and renames between `base` and `head`, keyed by old path.
    pub fn changed_paths(&self, base: &str, head: &str) -> Result<ChangeSet, ApiError> {
        Ok(change_set(self.compare(base, head)?))
    }

    /// Read a file's text and blob SHA at `git_ref` through the contents API.
    pub fn file_at(&self, path: &str, git_ref: &str) -> Result<RemoteFile, ApiError> {
        let endpoint = format!(
            "{}/repos/{}/contents/{}?ref={}",
            self.api_url, self.repo, path, git_ref
        );
        let resp: ContentsResponse = self.get_json(endpoint)?;
        let text = decode_content(&resp)?;
        Ok(RemoteFile {
            text,
            sha: resp.sha,
        })
    }

    /// Write `update.content` to `path` on `update.branch`, conditioned on
    /// `update.expected_sha` still being the file's blob SHA.
    pub fn update_file(&self, path: &str, update: &FileUpdate<'_>) -> Result<(), ApiError> {
        let endpoint = format!("{}/repos/{}/contents/{}", self.api_url, self.repo, path);
        let body = UpdateFileBody {
            message: update.message,
            content: STANDARD.encode(update.content.as_bytes()),
            sha: update.expected_sha,
            branch: update.branch,
            committer: &update.identity,
            author: &update.identity,
        };
        self.agent
            .put(&endpoint)
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Accept", "application/vnd.github+json")
            .set("User-Agent", USER_AGENT)
            .send_json(body)
            .map_err(|err| status_or_transport(err, &endpoint))?;
        tracing::info!("committed '{}' to branch '{}'", path, update.branch);
        Ok(())
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: String) -> Result<T, ApiError> {
        let resp = self
            .agent
            .get(&endpoint)
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Accept", "application/vnd.github+json")
            .set("User-Agent", USER_AGENT)
            .call()
            .map_err(|err| status_or_transport(err, &endpoint))?;
        resp.into_json()
            .map_err(|source| ApiError::Decode { endpoint, source })
    }
}

#[derive(Serialize)]
struct UpdateFileBody<'a> {
    message: &'a str,
    content: String,
    sha: &'a str,
    branch: &'a str,
    committer: &'a CommitIdentity,
    author: &'a CommitIdentity,
}

fn status_or_transport(err: ureq::Error, endpoint: &str) -> ApiError {
    match err {
        ureq::Error::Status(code, resp) => ApiError::Status {
            code,
            endpoint: endpoint.to_string(),
            body: resp.into_string().unwrap_or_default(),
        },
        other => ApiError::Transport {
            endpoint: endpoint.to_string(),
            source: Box::new(other),
        },
    }
}

/// Decode a contents-API payload: base64, with the newlines the API inserts
/// every 60 characters stripped first.
fn decode_content(resp: &ContentsResponse) -> Result<String, ApiError> {
    if resp.encoding != "base64" {
        return Err(ApiError::UnsupportedEncoding(resp.encoding.clone()));
    }
    let compact: String = resp.content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD.decode(compact.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
