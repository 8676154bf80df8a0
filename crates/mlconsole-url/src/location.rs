//! Location of the currently loaded console page

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::prelude::*;

/// Parsed absolute URL of the loaded page
///
/// Read-only view mirroring the parts of the browser location object the
/// console needs: `href`, `search` and `hash`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
	url: Url,
}

impl PageLocation {
	/// Parse an absolute page URL
	pub fn parse(href: &str) -> ClResult<Self> {
		let url = Url::parse(href)
			.map_err(|e| Error::Parse(format!("Invalid page URL '{}': {}", href, e)))?;
		Ok(Self { url })
	}

	pub fn href(&self) -> &str {
		self.url.as_str()
	}

	/// Query string including the leading `?`, or empty when there is none
	pub fn search(&self) -> String {
		match self.url.query() {
			Some(query) if !query.is_empty() => format!("?{}", query),
			_ => String::new(),
		}
	}

	/// Fragment including the leading `#`, or empty when there is none
	pub fn hash(&self) -> String {
		match self.url.fragment() {
			Some(fragment) if !fragment.is_empty() => format!("#{}", fragment),
			_ => String::new(),
		}
	}

	/// Decoded `(name, value)` pairs of the query string, in order
	///
	/// `+` is decoded as a space and percent escapes are resolved.
	pub fn query_pairs(&self) -> impl Iterator<Item = (Cow<'_, str>, Cow<'_, str>)> {
		self.url.query_pairs()
	}

	pub fn as_url(&self) -> &Url {
		&self.url
	}
}

impl FromStr for PageLocation {
	type Err = Error;

	fn from_str(s: &str) -> ClResult<Self> {
		Self::parse(s)
	}
}

impl From<Url> for PageLocation {
	fn from(url: Url) -> Self {
		Self { url }
	}
}

impl fmt::Display for PageLocation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.href())
	}
}


// vim: ts=4
