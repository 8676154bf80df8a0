//! Notification settings registration and resolved configuration

use mlconsole_types::settings::{SettingDefinition, SettingValue, Settings, SettingsRegistry};

use crate::kind::NotificationKind;
use crate::prelude::*;

pub const ICON_DIR: &str = "notify.icon_dir";
pub const WARNING_ICON: &str = "notify.icon.warning";
pub const INFO_ICON: &str = "notify.icon.info";
pub const ESCAPE_MESSAGE: &str = "notify.escape_message";

const DEFAULT_ICON_DIR: &str = "../../images/icons";
const DEFAULT_WARNING_ICON: &str = "ico-error.png";
const DEFAULT_INFO_ICON: &str = "ico-alert.png";

/// Values end up inside a double-quoted `src` attribute
///
/// The template HTML-escapes the icon path (`{{icon}}`), so `&`, `'` and `=`
/// are safe there and stay allowed. The icon must never be emitted raw.
fn validate_attr_value(value: &SettingValue, allow_empty: bool) -> ClResult<()> {
	let SettingValue::String(s) = value else {
		return Err(Error::ValidationError("Expected a string".into()));
	};
	if !allow_empty && s.is_empty() {
		return Err(Error::ValidationError("Value cannot be empty".into()));
	}
	if s.contains(['"', '<', '>']) {
		return Err(Error::ValidationError(format!("Invalid characters in '{}'", s)));
	}
	Ok(())
}

/// Register all notification settings
pub fn register_settings(registry: &mut SettingsRegistry) -> ClResult<()> {
	registry.register(
		SettingDefinition::builder(ICON_DIR)
			.description("Directory (relative to the page or absolute) holding the alert icons")
			.default(SettingValue::String(DEFAULT_ICON_DIR.into()))
			.validator(|v| validate_attr_value(v, true))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(WARNING_ICON)
			.description("Icon file shown in warning notifications")
			.default(SettingValue::String(DEFAULT_WARNING_ICON.into()))
			.validator(|v| validate_attr_value(v, false))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(INFO_ICON)
			.description("Icon file shown in info notifications")
			.default(SettingValue::String(DEFAULT_INFO_ICON.into()))
			.validator(|v| validate_attr_value(v, false))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(ESCAPE_MESSAGE)
			.description("HTML-escape notification messages (messages are inserted as markup when disabled)")
			.default(SettingValue::Bool(false))
			.build()?,
	)?;

	Ok(())
}

/// Resolved notification configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyConfig {
	pub icon_dir: String,
	pub warning_icon: String,
	pub info_icon: String,
	pub escape_message: bool,
}

impl Default for NotifyConfig {
	fn default() -> Self {
		Self {
			icon_dir: DEFAULT_ICON_DIR.into(),
			warning_icon: DEFAULT_WARNING_ICON.into(),
			info_icon: DEFAULT_INFO_ICON.into(),
			escape_message: false,
		}
	}
}

impl NotifyConfig {
	pub fn from_settings(settings: &Settings) -> ClResult<Self> {
		Ok(Self {
			icon_dir: settings.get_string(ICON_DIR)?,
			warning_icon: settings.get_string(WARNING_ICON)?,
			info_icon: settings.get_string(INFO_ICON)?,
			escape_message: settings.get_bool(ESCAPE_MESSAGE)?,
		})
	}

	/// Path of the indicator icon for `kind`, `None` for kinds without one
	pub fn icon_path(&self, kind: NotificationKind) -> Option<String> {
		let file = match kind {
			NotificationKind::Warning => &self.warning_icon,
			NotificationKind::Info => &self.info_icon,
			NotificationKind::Success => return None,
		};
		let dir = self.icon_dir.trim_end_matches('/');
		if dir.is_empty() && !self.icon_dir.starts_with('/') {
			Some(file.clone())
		} else {
			Some(format!("{}/{}", dir, file))
		}
	}
}


// vim: ts=4
