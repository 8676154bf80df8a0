//! Alert-banner notifications for the console pages
//!
//! This module provides:
//! - [`NotificationKind`]: the closed set of alert categories
//! - [`NotificationRenderer`]: markup builder backed by a Handlebars template
//! - [`NotificationArea`] / [`Page`]: injected output regions
//! - [`NotificationDispatcher`]: renders and replaces the content of an area
//! - Configuration via the settings registry ([`settings`])

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod area;
pub mod dispatch;
pub mod kind;
pub mod settings;
pub mod template;

mod prelude;

pub use area::{MemoryArea, MemoryPage, NotificationArea, Page};
pub use dispatch::NotificationDispatcher;
pub use kind::NotificationKind;
pub use settings::NotifyConfig;
pub use template::NotificationRenderer;

// vim: ts=4
