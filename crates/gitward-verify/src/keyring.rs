//! Native `OpenPGP` backend: verify against an armored keyring loaded at
//! startup, no external process.

use std::io::Cursor;
use std::path::Path;

use gitward_core::identity::Verdict;
use gitward_core::BoxFuture;
use pgp::types::KeyTrait;
use pgp::{Deserializable, SignedPublicKey, StandaloneSignature};

use crate::error::VerifyError;
use crate::verifier::SignatureVerifier;

/// [`SignatureVerifier`] backed by an in-process keyring of trusted public
/// keys.
///
/// Loaded once at startup and read-only afterwards; safe for concurrent use.
pub struct KeyringVerifier {
    keys: Vec<SignedPublicKey>,
}

impl KeyringVerifier {
    /// Load an armored keyring from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Io`] if the file cannot be read and
    /// [`VerifyError::Keyring`] if it contains no parseable public keys.
    pub fn from_file(path: &Path) -> Result<Self, VerifyError> {
        let raw = std::fs::read(path)?;
        Self::from_armored(&raw)
    }

    /// Parse an armored keyring from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Keyring`] if the bytes do not parse as one or
    /// more armored public keys.
    pub fn from_armored(raw: &[u8]) -> Result<Self, VerifyError> {
        let (iter, _) = SignedPublicKey::from_armor_many(Cursor::new(raw))
            .map_err(|e| VerifyError::Keyring(e.to_string()))?;
        let keys = iter
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| VerifyError::Keyring(e.to_string()))?;
        if keys.is_empty() {
            return Err(VerifyError::Keyring(
                "keyring contains no public keys".to_owned(),
            ));
        }
        Ok(Self { keys })
    }

    /// Number of trusted primary keys in the keyring.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the keyring holds no keys. Never true for a constructed
    /// verifier; present for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

// The long key id of a v4 key is the low 64 bits of its fingerprint.
fn long_key_id(key: &impl KeyTrait) -> String {
    let fingerprint = key.fingerprint();
    let tail = fingerprint.len().saturating_sub(8);
    hex::encode_upper(&fingerprint[tail..])
}

impl SignatureVerifier for KeyringVerifier {
    fn verify<'a>(
        &'a self,
        signature: &'a [u8],
        payload: &'a [u8],
    ) -> BoxFuture<'a, Result<Verdict, VerifyError>> {
        Box::pin(async move {
            // An unparsable signature is "checked and bad", matching the
            // gpg backend's missing-GOODSIG outcome.
            let Ok((sig, _)) = StandaloneSignature::from_armor_single(Cursor::new(signature))
            else {
                return Ok(Verdict::invalid());
            };

            for key in &self.keys {
                if sig.verify(key, payload).is_ok() {
                    return Ok(Verdict::good(long_key_id(key)));
                }
                for subkey in &key.public_subkeys {
                    if sig.verify(subkey, payload).is_ok() {
                        return Ok(Verdict::good(long_key_id(subkey)));
                    }
                }
            }

            Ok(Verdict::invalid())
        })
    }
}
