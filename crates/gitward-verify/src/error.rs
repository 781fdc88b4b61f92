//! Error types for signature verification.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while invoking a verification backend.
///
/// A `VerifyError` always means "could not check", never "checked, and it's
/// bad" — a negative check is a verdict, not an error.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The external verifier process could not be started.
    #[error("failed to start verifier process: {0}")]
    Spawn(std::io::Error),
    /// An I/O error while staging inputs or reading output.
    #[error("verifier I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The external verifier did not finish within the configured bound.
    #[error("verifier timed out after {0:?}")]
    Timeout(Duration),
    /// The trusted keyring could not be loaded or parsed.
    #[error("failed to load keyring: {0}")]
    Keyring(String),
}
