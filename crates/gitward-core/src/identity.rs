//! Commit signature metadata and verification verdicts.

/// Signature metadata recorded for a commit by the hosting service.
///
/// `payload` is the exact byte sequence that was signed and `signature` the
/// detached signature over it. Both are opaque: they are carried exactly as
/// the hosting API returned them, never re-encoded or normalised, because
/// signature verification is byte-exact. An identity lives for a single
/// verification call and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitIdentity {
    /// The exact signed content.
    pub payload: Vec<u8>,
    /// The detached signature over `payload`.
    pub signature: Vec<u8>,
    /// The hosting service's own verification claim. Treated as necessary
    /// but not sufficient: a `false` claim is never upgraded, a `true`
    /// claim is always independently re-checked.
    pub verified: bool,
}

/// Outcome of a signature verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the signature was found good against a known key.
    pub valid: bool,
    /// Key id of the good signature, when one was found. Carried for
    /// logging only; the contract is the boolean.
    pub key_id: Option<String>,
}

impl Verdict {
    /// A valid verdict attributed to `key_id`.
    #[must_use]
    pub fn good(key_id: String) -> Self {
        Self {
            valid: true,
            key_id: Some(key_id),
        }
    }

    /// An invalid verdict. Deliberately does not distinguish "bad
    /// signature" from "good signature, unknown key".
    #[must_use]
    pub fn invalid() -> Self {
        Self {
            valid: false,
            key_id: None,
        }
    }
}
