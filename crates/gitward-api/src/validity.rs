//! Composite validity check: commit lookup followed by signature
//! verification.

use gitward_core::commit_ref::CommitRef;
use gitward_core::identity::Verdict;
use gitward_github::client::CommitLookup;
use gitward_github::error::LookupError;
use gitward_verify::error::VerifyError;
use gitward_verify::verifier::{verify_identity, SignatureVerifier};
use log::debug;
use thiserror::Error;

/// Errors from the composite validity check.
///
/// Either kind means "could not determine": callers must treat it as "no
/// answer yet", never as an invalid (or valid) commit.
#[derive(Debug, Error)]
pub enum ValidityError {
    /// The hosting API could not be reached or answered with an error.
    #[error("commit lookup failed: {0}")]
    Lookup(#[from] LookupError),
    /// The verification mechanism could not be invoked or read.
    #[error("signature verification failed: {0}")]
    Verification(#[from] VerifyError),
}

/// Determine whether `commit` bears a valid, verified signature.
///
/// Fetches the commit's signature metadata, then independently re-verifies
/// it. A commit the hosting service has no verification metadata for is
/// simply not valid — that is a verdict, not an error.
///
/// # Errors
///
/// Returns [`ValidityError`] when either collaborator fails; the boolean
/// outcome is then undetermined.
pub async fn check_commit(
    lookup: &dyn CommitLookup,
    verifier: &dyn SignatureVerifier,
    commit: &CommitRef,
) -> Result<Verdict, ValidityError> {
    let identity = lookup.fetch(commit).await?;
    if identity.is_none() {
        debug!("no verification metadata for {commit}");
    }
    let verdict = verify_identity(verifier, identity.as_ref()).await?;
    Ok(verdict)
}
