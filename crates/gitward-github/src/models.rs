//! Wire models for the `GitHub` git-commits API.

use gitward_core::identity::CommitIdentity;
use serde::Deserialize;

/// The subset of a `GET /repos/{owner}/{repo}/git/commits/{sha}` response
/// that gitward consumes.
#[derive(Debug, Deserialize)]
pub struct CommitResponse {
    /// Signature verification metadata, absent when the service recorded
    /// none for this commit.
    pub verification: Option<Verification>,
}

/// The hosting service's verification block for a commit.
#[derive(Debug, Deserialize)]
pub struct Verification {
    /// The service's own verification claim.
    pub verified: bool,
    /// The exact signed content, `None` for unsigned commits.
    pub payload: Option<String>,
    /// The detached signature, `None` for unsigned commits.
    pub signature: Option<String>,
}

/// Convert a commit response into a [`CommitIdentity`].
///
/// Returns `None` — a valid "no opinion", distinct from an error — when the
/// response carries no verification block or the block has no payload or
/// signature. Payload and signature bytes are taken verbatim; verification
/// is byte-exact, so no re-encoding happens here.
#[must_use]
pub fn identity_from_commit(response: CommitResponse) -> Option<CommitIdentity> {
    let verification = response.verification?;
    let payload = verification.payload?;
    let signature = verification.signature?;
    Some(CommitIdentity {
        payload: payload.into_bytes(),
        signature: signature.into_bytes(),
        verified: verification.verified,
    })
}
