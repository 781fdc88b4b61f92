//! Commit lookup trait and `reqwest`-backed implementation.

use std::time::Duration;

use gitward_core::commit_ref::CommitRef;
use gitward_core::identity::CommitIdentity;
use gitward_core::BoxFuture;
use log::debug;

use crate::error::LookupError;
use crate::models::{identity_from_commit, CommitResponse};

/// Fetches a commit's recorded signature metadata from a hosting service.
///
/// Implementations perform exactly one outbound call per invocation and do
/// not retry: a fetch failure is surfaced immediately.
pub trait CommitLookup: Send + Sync {
    /// Fetch the signature metadata for `commit`.
    ///
    /// `Ok(None)` means the service has no verification metadata for this
    /// commit — a valid "no opinion" result, distinct from an error.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] on network failure, a non-success status
    /// (including authentication failure and commit/repo not found), or an
    /// unparsable response.
    fn fetch<'a>(
        &'a self,
        commit: &'a CommitRef,
    ) -> BoxFuture<'a, Result<Option<CommitIdentity>, LookupError>>;
}

/// `reqwest`-backed [`CommitLookup`] against the `GitHub` REST API.
///
/// Constructed once at startup and shared read-only; safe for concurrent
/// use by multiple simultaneous verification calls.
#[derive(Debug, Clone)]
pub struct HttpCommitLookup {
    base_url: String,
    token: String,
    http: reqwest::Client,
}

impl HttpCommitLookup {
    /// Create a new client targeting `base_url` (e.g. `https://api.github.com`)
    /// authenticating with the bearer `token`. Every request is bounded by
    /// `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the underlying client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("gitward/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            token: token.into(),
            http,
        })
    }
}

impl CommitLookup for HttpCommitLookup {
    fn fetch<'a>(
        &'a self,
        commit: &'a CommitRef,
    ) -> BoxFuture<'a, Result<Option<CommitIdentity>, LookupError>> {
        Box::pin(async move {
            let url = format!(
                "{}/repos/{}/{}/git/commits/{}",
                self.base_url,
                commit.owner(),
                commit.repo(),
                commit.commit(),
            );

            debug!("fetching commit metadata from {url}");

            let response = self
                .http
                .get(&url)
                .bearer_auth(&self.token)
                .header("Accept", "application/vnd.github+json")
                .header("X-GitHub-Api-Version", "2022-11-28")
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(LookupError::UnexpectedStatus {
                    status: status.as_u16(),
                    body,
                });
            }

            let parsed: CommitResponse = response
                .json()
                .await
                .map_err(|e| LookupError::Parse(e.to_string()))?;

            Ok(identity_from_commit(parsed))
        })
    }
}
