//! Alert sink trait and Slack incoming-webhook implementation.

use std::time::Duration;

use gitward_core::BoxFuture;
use log::debug;
use serde::Serialize;

use crate::error::NotifyError;

/// Alert severity, mapped to the channel's colour indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Something requires human attention now.
    Danger,
    /// Informational warning.
    Warning,
    /// All-clear.
    Good,
}

impl Severity {
    /// The Slack attachment colour keyword for this severity.
    #[must_use]
    pub fn colour(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Good => "good",
        }
    }
}

/// A structured alert for the human-monitored channel.
#[derive(Debug, Clone)]
pub struct Alert {
    /// Severity indicator.
    pub severity: Severity,
    /// Headline, e.g. naming the unverified commit's author.
    pub headline: String,
    /// Supporting summary, e.g. the commit's web URL.
    pub summary: String,
}

impl Alert {
    /// The rendered message text: headline alone, or headline and summary
    /// on separate lines.
    #[must_use]
    pub fn text(&self) -> String {
        if self.summary.is_empty() {
            self.headline.clone()
        } else {
            format!("{}\n{}", self.headline, self.summary)
        }
    }
}

/// One attachment in the Slack webhook wire format.
#[derive(Debug, Serialize)]
pub struct Attachment {
    /// Colour keyword.
    pub color: String,
    /// Fields Slack should render as markdown.
    pub mrkdwn_in: Vec<&'static str>,
    /// Message text.
    pub text: String,
}

/// Top-level Slack webhook payload.
#[derive(Debug, Serialize)]
pub struct WirePayload {
    /// Message attachments.
    pub attachments: Vec<Attachment>,
}

/// Render an [`Alert`] into the Slack wire format.
#[must_use]
pub fn wire_payload(alert: &Alert) -> WirePayload {
    WirePayload {
        attachments: vec![Attachment {
            color: alert.severity.colour().to_owned(),
            mrkdwn_in: vec!["text"],
            text: alert.text(),
        }],
    }
}

/// Delivers alerts to a human-monitored channel.
///
/// One-shot best-effort: implementations do not retry.
pub trait AlertSink: Send + Sync {
    /// Send `alert`.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] if delivery fails.
    fn send<'a>(&'a self, alert: &'a Alert) -> BoxFuture<'a, Result<(), NotifyError>>;
}

/// [`AlertSink`] posting to a Slack incoming webhook.
#[derive(Debug, Clone)]
pub struct SlackWebhook {
    endpoint: String,
    http: reqwest::Client,
}

impl SlackWebhook {
    /// Create a sink posting to `endpoint`, bounding each request by
    /// `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Http`] if the underlying client cannot be
    /// built.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, NotifyError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }
}

impl AlertSink for SlackWebhook {
    fn send<'a>(&'a self, alert: &'a Alert) -> BoxFuture<'a, Result<(), NotifyError>> {
        Box::pin(async move {
            debug!("sending alert to channel webhook");

            let response = self
                .http
                .post(&self.endpoint)
                .json(&wire_payload(alert))
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(NotifyError::UnexpectedStatus {
                    status: status.as_u16(),
                    body,
                });
            }

            Ok(())
        })
    }
}
