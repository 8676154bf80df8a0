//! Client-side helpers for the machine-learner web console.
//!
//! # Features
//!
//! - Query parameters of the loaded page ([`url::get_parameter_by_name`])
//! - Origin of a URL ([`url::get_base_url`], [`url::origin_of`])
//! - Dismissible alert notifications written into an injected area
//!     - warning / info / success kinds
//!     - configurable icons and message escaping

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

// Re-export shared types from mlconsole-types
pub use mlconsole_types::error;
pub use mlconsole_types::settings;

// Feature crate re-exports
pub use mlconsole_notify as notify;
pub use mlconsole_url as url;

pub use mlconsole_notify::{MemoryArea, MemoryPage, NotificationArea, NotificationKind, Page};
pub use mlconsole_url::PageLocation;

pub mod app;
pub mod prelude;

pub use app::{Console, ConsoleBuilder, init_logging};

// vim: ts=4
