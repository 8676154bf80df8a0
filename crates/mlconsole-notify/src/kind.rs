//! Notification categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::prelude::*;

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
	/// Something went wrong; shown with the error icon
	Warning,
	/// Neutral information; shown with the alert icon
	Info,
	/// Completed action; no icon
	Success,
}

impl NotificationKind {
	pub const ALL: [NotificationKind; 3] =
		[NotificationKind::Warning, NotificationKind::Info, NotificationKind::Success];

	pub fn as_str(&self) -> &'static str {
		match self {
			NotificationKind::Warning => "warning",
			NotificationKind::Info => "info",
			NotificationKind::Success => "success",
		}
	}

	/// Contextual alert class placed between `alert` and `alert-dismissible`
	pub fn alert_class(&self) -> &'static str {
		match self {
			NotificationKind::Warning => "alert-warning",
			NotificationKind::Info => "alert-info",
			NotificationKind::Success => "alert-success",
		}
	}

	/// Whether the alert carries an indicator icon
	pub fn has_icon(&self) -> bool {
		match self {
			NotificationKind::Warning | NotificationKind::Info => true,
			NotificationKind::Success => false,
		}
	}
}

impl fmt::Display for NotificationKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Exact, case-sensitive match on the lowercase name
impl FromStr for NotificationKind {
	type Err = Error;

	fn from_str(s: &str) -> ClResult<Self> {
		match s {
			"warning" => Ok(NotificationKind::Warning),
			"info" => Ok(NotificationKind::Info),
			"success" => Ok(NotificationKind::Success),
			other => Err(Error::UnknownNotificationKind(other.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_known_kinds() {
		for kind in NotificationKind::ALL {
			assert_eq!(kind.as_str().parse::<NotificationKind>().unwrap(), kind);
		}
	}

	#[test]
	fn test_parse_unknown_kind() {
		for s in ["danger", "Warning", " info", ""] {
			assert!(matches!(
				s.parse::<NotificationKind>(),
				Err(Error::UnknownNotificationKind(k)) if k == s
			));
		}
	}

	#[test]
	fn test_icons() {
		assert!(NotificationKind::Warning.has_icon());
		assert!(NotificationKind::Info.has_icon());
		assert!(!NotificationKind::Success.has_icon());
	}

	#[test]
	fn test_serde_lowercase() {
		assert_eq!(serde_json::to_string(&NotificationKind::Success).unwrap(), "\"success\"");
		let kind: NotificationKind = serde_json::from_str("\"info\"").unwrap();
		assert_eq!(kind, NotificationKind::Info);
	}
}

// vim: ts=4
