//! URL helpers for the console pages
//!
//! - [`PageLocation`]: the parsed location of the loaded page
//! - [`query`]: reading query parameters from a location
//! - [`origin`]: deriving `scheme://host` from a full URL

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod location;
pub mod origin;
pub mod query;

mod prelude;

pub use location::PageLocation;
pub use origin::{get_base_url, origin_of};
pub use query::{get_parameter_by_name, get_parameters_by_name, query_param};

// vim: ts=4
