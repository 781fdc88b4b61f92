//! External gpg backend: shell out to gpg and parse its status stream.

use std::io::Write;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use gitward_core::identity::Verdict;
use gitward_core::BoxFuture;
use log::debug;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::VerifyError;
use crate::verifier::SignatureVerifier;

/// Status line prefix gpg emits for a cryptographically good signature from
/// a key in the local keyring.
const GOODSIG_PREFIX: &str = "[GNUPG:] GOODSIG ";

/// A parsed good-signature status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoodSig {
    /// Long key id of the signing key.
    pub key_id: String,
    /// Signer user id as reported by gpg.
    pub signer: String,
}

/// Scan a gpg `--status-fd` stream for a good-signature line.
///
/// The marker must be anchored at the start of a line: gpg mixes
/// machine-readable status lines with free-text commentary, so a mid-line
/// occurrence of the marker must not count.
#[must_use]
pub fn parse_status(status: &str) -> Option<GoodSig> {
    status.lines().find_map(|line| {
        let rest = line.strip_prefix(GOODSIG_PREFIX)?;
        let (key_id, signer) = rest.split_once(' ').unwrap_or((rest, ""));
        if key_id.is_empty() {
            return None;
        }
        Some(GoodSig {
            key_id: key_id.to_owned(),
            signer: signer.to_owned(),
        })
    })
}

/// [`SignatureVerifier`] that invokes an external gpg binary.
///
/// The signature is staged in a uniquely named temporary file (removed on
/// every exit path, including spawn failure) and the payload streamed to
/// gpg's stdin. Trust is anchored in the local gpg keyring.
#[derive(Debug, Clone)]
pub struct GpgVerifier {
    program: String,
    timeout: Duration,
    temp_dir: PathBuf,
}

impl GpgVerifier {
    /// Create a verifier invoking `program` (e.g. `gpg`), bounding each
    /// subprocess invocation by `timeout`.
    #[must_use]
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
            temp_dir: std::env::temp_dir(),
        }
    }

    /// Stage signature temp files under `dir` instead of the system default.
    #[must_use]
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = dir.into();
        self
    }
}

impl SignatureVerifier for GpgVerifier {
    fn verify<'a>(
        &'a self,
        signature: &'a [u8],
        payload: &'a [u8],
    ) -> BoxFuture<'a, Result<Verdict, VerifyError>> {
        Box::pin(async move {
            // Staged off the runtime thread; dropped on every return path
            // below, removing the file.
            let temp_dir = self.temp_dir.clone();
            let signature = signature.to_vec();
            let artifact = tokio::task::spawn_blocking(move || -> std::io::Result<NamedTempFile> {
                let mut artifact = NamedTempFile::new_in(temp_dir)?;
                artifact.write_all(&signature)?;
                artifact.flush()?;
                Ok(artifact)
            })
            .await
            .map_err(|e| VerifyError::Io(std::io::Error::other(e)))??;

            let mut child = Command::new(&self.program)
                .arg("--status-fd=1")
                .arg("--keyid-format=long")
                .arg("--verify")
                .arg(artifact.path())
                .arg("-")
                .stdin(Stdio::piped())
                .stdout(Stdio::piped())
                .stderr(Stdio::null())
                .kill_on_drop(true)
                .spawn()
                .map_err(VerifyError::Spawn)?;

            let mut stdin = child
                .stdin
                .take()
                .ok_or_else(|| VerifyError::Spawn(std::io::Error::other("stdin not captured")))?;

            // Feed the payload concurrently with collecting output so a
            // full pipe buffer cannot deadlock either side. gpg may exit
            // without draining stdin; that shows up as a missing GOODSIG
            // line, not as an error here.
            let payload = payload.to_vec();
            let writer = tokio::spawn(async move {
                let _ = stdin.write_all(&payload).await;
                let _ = stdin.shutdown().await;
            });

            let output = tokio::time::timeout(self.timeout, child.wait_with_output())
                .await
                .map_err(|_| VerifyError::Timeout(self.timeout))?
                .map_err(VerifyError::Io)?;
            writer.abort();

            let status = String::from_utf8_lossy(&output.stdout);
            debug!("gpg exited with {}, {} status bytes", output.status, status.len());

            Ok(match parse_status(&status) {
                Some(good) => Verdict::good(good.key_id),
                None => Verdict::invalid(),
            })
        })
    }
}
