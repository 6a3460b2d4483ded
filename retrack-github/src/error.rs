//! Error types for retrack-github.

use thiserror::Error;

/// All errors that can arise from GitHub API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-success status. For a contents write this
    /// is also how a failed SHA precondition surfaces (409).
    #[error("GitHub API returned {code} for {endpoint}: {body}")]
    Status {
        code: u16,
        endpoint: String,
        body: String,
    },

    /// Connection, TLS, or DNS failure talking to the API.
    #[error("transport error calling {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: Box<ureq::Error>,
    },

    /// The response body was not the JSON shape we expect.
    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: std::io::Error,
    },

    /// Contents API payload with an encoding other than base64.
    #[error("unsupported content encoding `{0}`")]
    UnsupportedEncoding(String),

    /// Contents API payload that does not decode as base64.
    #[error("invalid base64 in content payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded file content that is not UTF-8 text.
    #[error("file content is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
