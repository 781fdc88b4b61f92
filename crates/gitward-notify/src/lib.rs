//! Outbound alert channel: Slack incoming webhooks.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

pub mod error;
pub mod slack;
