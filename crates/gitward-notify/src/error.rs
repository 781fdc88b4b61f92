//! Error types for alert delivery.

use thiserror::Error;

/// Errors that can occur while sending an alert.
///
/// Delivery is one-shot best-effort: a failed send is reported but never
/// retried, and never changes the validity determination that triggered it.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The HTTP request failed.
    #[error("alert request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The channel endpoint returned a non-success status.
    #[error("unexpected status {status} from alert channel: {body}")]
    UnexpectedStatus {
        /// HTTP status code received.
        status: u16,
        /// Response body (truncated).
        body: String,
    },
}
