//! Shared types and infrastructure for the mlconsole crates.
//!
//! Holds the error type every crate returns, the common prelude and the
//! settings registry used to configure the console utilities.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod error;
pub mod prelude;
pub mod settings;

// vim: ts=4
