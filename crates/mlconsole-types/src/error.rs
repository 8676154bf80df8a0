//! Error type shared by all mlconsole crates

use std::fmt;

pub type ClResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Input could not be parsed (URLs, YAML overrides)
	Parse(String),
	/// Notification kind outside of warning/info/success
	UnknownNotificationKind(String),
	ConfigError(String),
	ValidationError(String),
	/// Markup template failed to compile or render
	TemplateError(String),

	// externals
	Io(std::io::Error),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::Parse(msg) => write!(f, "parse error: {}", msg),
			Error::UnknownNotificationKind(kind) => {
				write!(f, "unknown notification kind: {}", kind)
			}
			Error::ConfigError(msg) => write!(f, "config error: {}", msg),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::TemplateError(msg) => write!(f, "template error: {}", msg),
			Error::Io(e) => write!(f, "io error: {}", e),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_yaml::Error> for Error {
	fn from(err: serde_yaml::Error) -> Self {
		Self::Parse(err.to_string())
	}
}


// vim: ts=4
