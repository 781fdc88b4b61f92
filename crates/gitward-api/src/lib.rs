//! gitward webhook service library.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod router;
pub mod validity;
