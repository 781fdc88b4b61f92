//! Axum router construction and shared application state.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use gitward_github::client::CommitLookup;
use gitward_notify::slack::AlertSink;
use gitward_verify::verifier::SignatureVerifier;
use serde::Serialize;

use crate::handlers::webhook::webhook_handler;

/// Injected collaborators, constructed once at startup and shared read-only
/// across concurrent requests.
#[derive(Clone)]
pub struct AppState {
    /// Commit metadata lookup.
    pub lookup: Arc<dyn CommitLookup>,
    /// Signature verification backend.
    pub verifier: Arc<dyn SignatureVerifier>,
    /// Alert channel for unverified commits.
    pub alerts: Arc<dyn AlertSink>,
}

/// Response body for the health endpoint.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Build the Axum application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(webhook_handler))
        .route("/healthz", get(health_handler))
        .with_state(state)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
