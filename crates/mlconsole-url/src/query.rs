//! Query parameter lookup
//!
//! Parameters are matched against the decoded query pairs of the location,
//! so names are compared literally: `filter[name]` needs no escaping and no
//! name can break the lookup. The fragment is never consulted.

use crate::location::PageLocation;
use crate::prelude::*;

/// Decoded value of the first query parameter called `name`
///
/// Returns an empty string when the parameter is absent. A present
/// parameter without `=` also yields an empty string.
pub fn get_parameter_by_name(location: &PageLocation, name: &str) -> String {
	location
		.query_pairs()
		.find(|(key, _)| key == name)
		.map(|(_, value)| value.into_owned())
		.unwrap_or_default()
}

/// Every decoded value of the query parameter called `name`, in order
pub fn get_parameters_by_name(location: &PageLocation, name: &str) -> Vec<String> {
	location
		.query_pairs()
		.filter(|(key, _)| key == name)
		.map(|(_, value)| value.into_owned())
		.collect()
}

/// Parse `href` as the page location and look up `name` in it
pub fn query_param(href: &str, name: &str) -> ClResult<String> {
	let location = PageLocation::parse(href)?;
	Ok(get_parameter_by_name(&location, name))
}


// vim: ts=4
