//! Service configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Errors during configuration loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    Missing(String),
    /// An environment variable holds an unusable value.
    #[error("invalid value for {name}: {value}")]
    Invalid {
        /// Variable name.
        name: String,
        /// Offending value.
        value: String,
    },
}

/// Which signature verification backend to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifierConfig {
    /// Shell out to an external gpg binary, trusting its local keyring.
    Gpg {
        /// Binary to invoke.
        program: String,
    },
    /// Verify natively against an armored keyring file.
    Keyring {
        /// Path to the armored keyring.
        path: PathBuf,
    },
}

/// Service runtime configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// TCP address to bind (e.g. `0.0.0.0:3000`).
    pub bind_addr: String,
    /// Slack incoming-webhook URL for alerts.
    pub slack_url: String,
    /// Bearer credential for the hosting API.
    pub github_token: String,
    /// Base URL of the hosting API.
    pub github_api_url: String,
    /// Verification backend selection.
    pub verifier: VerifierConfig,
    /// Bound on each outbound HTTP request.
    pub http_timeout: Duration,
    /// Bound on each verifier subprocess invocation.
    pub verify_timeout: Duration,
}

fn required(name: &str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name.to_owned()))
}

fn timeout_from(name: &str, default_secs: u64) -> Result<Duration, ConfigError> {
    match env::var(name) {
        Err(_) => Ok(Duration::from_secs(default_secs)),
        Ok(raw) => raw
            .parse()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::Invalid {
                name: name.to_owned(),
                value: raw,
            }),
    }
}

/// Parse a `VERIFIER_BACKEND` value.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] for anything other than `gpg` or
/// `keyring`, and [`ConfigError::Missing`] when the keyring backend is
/// selected without `PGP_KEYRING_PATH`.
pub fn verifier_from(
    backend: &str,
    gpg_program: Option<String>,
    keyring_path: Option<String>,
) -> Result<VerifierConfig, ConfigError> {
    match backend {
        "gpg" => Ok(VerifierConfig::Gpg {
            program: gpg_program.unwrap_or_else(|| "gpg".to_owned()),
        }),
        "keyring" => {
            let path = keyring_path.ok_or_else(|| ConfigError::Missing("PGP_KEYRING_PATH".to_owned()))?;
            Ok(VerifierConfig::Keyring {
                path: PathBuf::from(path),
            })
        }
        other => Err(ConfigError::Invalid {
            name: "VERIFIER_BACKEND".to_owned(),
            value: other.to_owned(),
        }),
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `SLACK_URL` or `GITHUB_ACCESS_TOKEN` is
    /// not set, or any optional variable holds an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend = env::var("VERIFIER_BACKEND").unwrap_or_else(|_| "gpg".to_owned());
        Ok(Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_owned()),
            slack_url: required("SLACK_URL")?,
            github_token: required("GITHUB_ACCESS_TOKEN")?,
            github_api_url: env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| "https://api.github.com".to_owned()),
            verifier: verifier_from(
                &backend,
                env::var("GPG_PROGRAM").ok(),
                env::var("PGP_KEYRING_PATH").ok(),
            )?,
            http_timeout: timeout_from("HTTP_TIMEOUT_SECS", 30)?,
            verify_timeout: timeout_from("VERIFY_TIMEOUT_SECS", 30)?,
        })
    }
}
