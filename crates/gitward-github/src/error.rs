//! Error types for commit lookup operations.

use thiserror::Error;

/// Errors that can occur while fetching commit metadata.
///
/// A lookup error always means "could not determine", never "determined
/// invalid" — callers must not conflate the two.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The HTTP request failed before a response was received.
    #[error("commit lookup request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The hosting API returned a non-success status code.
    #[error("unexpected status {status} from hosting API: {body}")]
    UnexpectedStatus {
        /// HTTP status code received.
        status: u16,
        /// Response body (truncated).
        body: String,
    },
    /// The response body could not be parsed.
    #[error("failed to parse commit response: {0}")]
    Parse(String),
}
