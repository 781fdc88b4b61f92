//! Signature verification backends: external gpg and native `OpenPGP` keyring.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

pub mod error;
pub mod gpg;
pub mod keyring;
pub mod verifier;
