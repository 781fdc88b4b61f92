//! Fake collaborators for router tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use gitward_api::router::AppState;
use gitward_core::commit_ref::CommitRef;
use gitward_core::identity::{CommitIdentity, Verdict};
use gitward_core::BoxFuture;
use gitward_github::client::CommitLookup;
use gitward_github::error::LookupError;
use gitward_notify::error::NotifyError;
use gitward_notify::slack::{Alert, AlertSink};
use gitward_verify::error::VerifyError;
use gitward_verify::verifier::SignatureVerifier;

/// Lookup returning a fixed outcome.
pub enum FakeLookup {
    Identity(Option<CommitIdentity>),
    Fail,
}

impl CommitLookup for FakeLookup {
    fn fetch<'a>(
        &'a self,
        _commit: &'a CommitRef,
    ) -> BoxFuture<'a, Result<Option<CommitIdentity>, LookupError>> {
        Box::pin(async move {
            match self {
                Self::Identity(identity) => Ok(identity.clone()),
                Self::Fail => Err(LookupError::Parse("lookup failed".to_owned())),
            }
        })
    }
}

/// Verifier returning a fixed verdict (or error) and counting invocations.
pub struct FakeVerifier {
    pub verdict: Option<Verdict>,
    pub calls: AtomicUsize,
}

impl FakeVerifier {
    pub fn returning(verdict: Verdict) -> Self {
        Self {
            verdict: Some(verdict),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            verdict: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SignatureVerifier for FakeVerifier {
    fn verify<'a>(
        &'a self,
        _signature: &'a [u8],
        _payload: &'a [u8],
    ) -> BoxFuture<'a, Result<Verdict, VerifyError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            match &self.verdict {
                Some(verdict) => Ok(verdict.clone()),
                None => Err(VerifyError::Spawn(std::io::Error::other("no verifier"))),
            }
        })
    }
}

/// Alert sink recording everything sent to it.
#[derive(Default)]
pub struct RecordingSink {
    pub sent: Mutex<Vec<Alert>>,
}

impl RecordingSink {
    pub fn sent(&self) -> Vec<Alert> {
        self.sent.lock().unwrap().clone()
    }
}

impl AlertSink for RecordingSink {
    fn send<'a>(&'a self, alert: &'a Alert) -> BoxFuture<'a, Result<(), NotifyError>> {
        Box::pin(async move {
            self.sent.lock().unwrap().push(alert.clone());
            Ok(())
        })
    }
}

/// Alert sink that always fails to deliver.
pub struct FailingSink;

impl AlertSink for FailingSink {
    fn send<'a>(&'a self, _alert: &'a Alert) -> BoxFuture<'a, Result<(), NotifyError>> {
        Box::pin(async move {
            Err(NotifyError::UnexpectedStatus {
                status: 500,
                body: "channel down".to_owned(),
            })
        })
    }
}

/// Assemble an [`AppState`] from fakes.
pub fn state(
    lookup: FakeLookup,
    verifier: Arc<FakeVerifier>,
    alerts: Arc<dyn AlertSink>,
) -> AppState {
    AppState {
        lookup: Arc::new(lookup),
        verifier,
        alerts,
    }
}

/// An identity the hosting service claims is verified.
pub fn verified_identity() -> CommitIdentity {
    CommitIdentity {
        payload: b"tree abc\nparent def\n".to_vec(),
        signature: b"-----BEGIN PGP SIGNATURE-----\n...".to_vec(),
        verified: true,
    }
}

/// A well-formed push event body for `acme/widgets@abc123`.
pub fn push_event() -> serde_json::Value {
    serde_json::json!({
        "head_commit": {
            "id": "abc123",
            "url": "https://github.com/acme/widgets/commit/abc123",
            "author": { "username": "eve" }
        },
        "repository": {
            "name": "widgets",
            "owner": { "name": "acme" }
        }
    })
}
