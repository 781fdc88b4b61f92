//! The verification seam: backend trait and the identity-level check.

use gitward_core::identity::{CommitIdentity, Verdict};
use gitward_core::BoxFuture;

use crate::error::VerifyError;

/// Verifies a detached signature over an exact payload against a set of
/// trusted keys.
///
/// Implementations are read-only after construction and safe for concurrent
/// use. The decision is binary: "good signature from an unknown key",
/// "good but expired", and "bad signature" all come back as an invalid
/// [`Verdict`].
pub trait SignatureVerifier: Send + Sync {
    /// Verify `signature` over `payload`.
    ///
    /// Both inputs are opaque bytes; implementations must not re-encode or
    /// normalise them.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError`] when the verification mechanism itself could
    /// not be run — never for a merely bad signature.
    fn verify<'a>(
        &'a self,
        signature: &'a [u8],
        payload: &'a [u8],
    ) -> BoxFuture<'a, Result<Verdict, VerifyError>>;
}

/// Check a commit identity against `backend`.
///
/// Short-circuits to an invalid verdict — without invoking `backend` — when
/// there is no identity, the hosting service itself did not claim the
/// commit verified, or the payload or signature is empty. The service's
/// claim is necessary but not sufficient: a `verified` claim is always
/// independently re-checked, an unverified one never upgraded.
///
/// # Errors
///
/// Propagates [`VerifyError`] from the backend unchanged.
pub async fn verify_identity(
    backend: &dyn SignatureVerifier,
    identity: Option<&CommitIdentity>,
) -> Result<Verdict, VerifyError> {
    let Some(identity) = identity else {
        return Ok(Verdict::invalid());
    };
    if !identity.verified || identity.payload.is_empty() || identity.signature.is_empty() {
        return Ok(Verdict::invalid());
    }
    backend.verify(&identity.signature, &identity.payload).await
}
