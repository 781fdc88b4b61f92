//! gitward webhook service entry point.

use std::sync::Arc;

use gitward_api::config::{ApiConfig, VerifierConfig};
use gitward_api::router::{build_router, AppState};
use gitward_github::client::{CommitLookup, HttpCommitLookup};
use gitward_notify::slack::{AlertSink, SlackWebhook};
use gitward_verify::gpg::GpgVerifier;
use gitward_verify::keyring::KeyringVerifier;
use gitward_verify::verifier::SignatureVerifier;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = ApiConfig::from_env()?;

    let lookup: Arc<dyn CommitLookup> = Arc::new(HttpCommitLookup::new(
        &config.github_api_url,
        &config.github_token,
        config.http_timeout,
    )?);

    let verifier: Arc<dyn SignatureVerifier> = match &config.verifier {
        VerifierConfig::Gpg { program } => {
            Arc::new(GpgVerifier::new(program.clone(), config.verify_timeout))
        }
        VerifierConfig::Keyring { path } => {
            let keyring = KeyringVerifier::from_file(path)?;
            log::info!("loaded {} trusted keys from {}", keyring.len(), path.display());
            Arc::new(keyring)
        }
    };

    let alerts: Arc<dyn AlertSink> =
        Arc::new(SlackWebhook::new(&config.slack_url, config.http_timeout)?);

    let app = build_router(AppState {
        lookup,
        verifier,
        alerts,
    });

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    log::info!("listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
