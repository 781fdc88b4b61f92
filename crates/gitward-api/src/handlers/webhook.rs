//! `POST /` — process a push webhook and alert on unverified commits.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use gitward_core::commit_ref::CommitRef;
use gitward_notify::slack::{Alert, Severity};
use log::{debug, error};
use serde::Deserialize;

use crate::router::AppState;
use crate::validity::check_commit;

/// Commit author as reported in a push event.
#[derive(Debug, Deserialize)]
pub struct PushAuthor {
    /// Hosting-service username, absent for some commit sources.
    pub username: Option<String>,
}

/// Head commit of a push event.
#[derive(Debug, Deserialize)]
pub struct PushCommit {
    /// Commit identifier.
    pub id: String,
    /// Web URL of the commit.
    pub url: String,
    /// Commit author.
    pub author: Option<PushAuthor>,
}

/// Repository owner block.
#[derive(Debug, Deserialize)]
pub struct PushOwner {
    /// Owner slug.
    pub name: String,
}

/// Repository block of a push event.
#[derive(Debug, Deserialize)]
pub struct PushRepository {
    /// Repository name.
    pub name: String,
    /// Repository owner.
    pub owner: Option<PushOwner>,
}

/// The subset of a push event gitward consumes.
#[derive(Debug, Deserialize)]
pub struct PushEvent {
    /// Head commit of the push.
    pub head_commit: Option<PushCommit>,
    /// Repository the push targeted.
    pub repository: Option<PushRepository>,
}

/// The fields the handler needs, pulled out of a push event.
#[derive(Debug)]
pub struct CommitDetails {
    /// Validated commit reference.
    pub commit_ref: CommitRef,
    /// Author username, `unknown` when the event carries none.
    pub author: String,
    /// Commit web URL for the alert summary.
    pub url: String,
}

/// Extract the commit under scrutiny from a push event.
///
/// Returns `None` when the event lacks a head commit, repository, or owner,
/// or any of the identifying fields is empty.
#[must_use]
pub fn commit_details(event: PushEvent) -> Option<CommitDetails> {
    let commit = event.head_commit?;
    let repository = event.repository?;
    let owner = repository.owner?;
    let commit_ref = CommitRef::new(&owner.name, &repository.name, &commit.id).ok()?;
    let author = commit
        .author
        .and_then(|a| a.username)
        .unwrap_or_else(|| "unknown".to_owned());
    Some(CommitDetails {
        commit_ref,
        author,
        url: commit.url,
    })
}

/// Handle `POST /` — verify the pushed head commit's signature and alert
/// the notification channel when it is not valid.
pub async fn webhook_handler(State(state): State<AppState>, body: Bytes) -> StatusCode {
    let event: PushEvent = match serde_json::from_slice(&body) {
        Ok(event) => event,
        Err(e) => {
            debug!("error parsing push event: {e}");
            return StatusCode::BAD_REQUEST;
        }
    };

    let Some(details) = commit_details(event) else {
        debug!("push event missing commit or repository fields");
        return StatusCode::BAD_REQUEST;
    };

    let verdict = match check_commit(
        state.lookup.as_ref(),
        state.verifier.as_ref(),
        &details.commit_ref,
    )
    .await
    {
        Ok(verdict) => verdict,
        Err(e) => {
            // Indeterminate: no verdict was reached, so no alert is sent.
            error!("error validating {}: {e}", details.commit_ref);
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
    };

    if verdict.valid {
        debug!(
            "valid signature from {} for {} (key {})",
            details.author,
            details.commit_ref,
            verdict.key_id.as_deref().unwrap_or("-"),
        );
        return StatusCode::OK;
    }

    debug!(
        "invalid signature from {} for {}",
        details.author, details.commit_ref
    );

    let alert = Alert {
        severity: Severity::Danger,
        headline: format!("*Unverified commit from {}*", details.author),
        summary: format!("_<{}>_", details.url),
    };

    if let Err(e) = state.alerts.send(&alert).await {
        // Reported, but the validity determination stands.
        error!("error sending alert for {}: {e}", details.commit_ref);
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::BAD_REQUEST
}
