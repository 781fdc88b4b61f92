//! HTTP client for fetching commit signature metadata from `GitHub`.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod models;
