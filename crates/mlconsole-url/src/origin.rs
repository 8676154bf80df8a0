//! Origin (scheme + host) extraction

use url::Url;

use crate::prelude::*;

/// Derive `scheme://host` from a full `scheme://host/path...` URL
///
/// Splits on `/` and joins the first and third segments with `//`. No
/// validation is done: malformed input produces a malformed origin instead
/// of an error, and missing segments are taken as empty.
///
/// # Examples
/// - `"https://example.com/a/b?c=d"` → `"https://example.com"`
/// - `"http://localhost:9443"` → `"http://localhost:9443"`
/// - `"example.com"` → `"example.com//"`
pub fn get_base_url(full_url: &str) -> String {
	let mut parts = full_url.split('/');
	let scheme = parts.next().unwrap_or_default();
	let host = parts.nth(1).unwrap_or_default();
	format!("{}//{}", scheme, host)
}

/// Strict origin of an absolute URL
///
/// Unlike [`get_base_url`] the URL is parsed first: the scheme and host are
/// normalized to lowercase, default ports are dropped and URLs without a
/// host (`data:`, `mailto:`...) are rejected.
pub fn origin_of(url: &str) -> ClResult<String> {
	let parsed =
		Url::parse(url).map_err(|e| Error::Parse(format!("Invalid URL '{}': {}", url, e)))?;
	let origin = parsed.origin();
	if !origin.is_tuple() {
		return Err(Error::Parse(format!("URL '{}' has no scheme/host origin", url)));
	}
	Ok(origin.ascii_serialization())
}


// vim: ts=4
