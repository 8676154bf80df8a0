//! Setting values, definitions and the registry they are declared in

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::prelude::*;

/// Checks a candidate value beyond its type
pub type SettingValidator = Box<dyn Fn(&SettingValue) -> ClResult<()> + Send + Sync>;

/// Value of a console setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
	Bool(bool),
	String(String),
}

impl SettingValue {
	pub fn same_type(&self, other: &SettingValue) -> bool {
		std::mem::discriminant(self) == std::mem::discriminant(other)
	}

	pub fn type_name(&self) -> &'static str {
		match self {
			SettingValue::Bool(_) => "bool",
			SettingValue::String(_) => "string",
		}
	}
}

/// A declared setting
///
/// A definition without a default must be configured before it is read.
pub struct SettingDefinition {
	/// Dot-separated key, e.g. `notify.icon_dir`
	pub key: String,
	pub description: String,
	pub default: Option<SettingValue>,
	pub validator: Option<SettingValidator>,
}

impl fmt::Debug for SettingDefinition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SettingDefinition")
			.field("key", &self.key)
			.field("default", &self.default)
			.field("validator", &self.validator.is_some())
			.finish_non_exhaustive()
	}
}

impl SettingDefinition {
	pub fn builder(key: impl Into<String>) -> SettingDefinitionBuilder {
		SettingDefinitionBuilder {
			key: key.into(),
			description: None,
			default: None,
			validator: None,
		}
	}

	/// Type check against the default, then run the validator
	pub fn validate(&self, value: &SettingValue) -> ClResult<()> {
		if let Some(default) = self.default.as_ref().filter(|d| !value.same_type(d)) {
			return Err(Error::ValidationError(format!(
				"Setting '{}' expects {}, got {}",
				self.key,
				default.type_name(),
				value.type_name()
			)));
		}
		self.validator.as_ref().map_or(Ok(()), |validate| validate(value))
	}
}

pub struct SettingDefinitionBuilder {
	key: String,
	description: Option<String>,
	default: Option<SettingValue>,
	validator: Option<SettingValidator>,
}

impl SettingDefinitionBuilder {
	/// Required
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn default(mut self, value: SettingValue) -> Self {
		self.default = Some(value);
		self
	}

	pub fn validator<F>(mut self, f: F) -> Self
	where
		F: Fn(&SettingValue) -> ClResult<()> + Send + Sync + 'static,
	{
		self.validator = Some(Box::new(f));
		self
	}

	pub fn build(self) -> ClResult<SettingDefinition> {
		if self.key.is_empty() {
			return Err(Error::ConfigError("Setting key cannot be empty".into()));
		}
		let Some(description) = self.description else {
			return Err(Error::ConfigError(format!("Setting '{}' needs a description", self.key)));
		};

		let def = SettingDefinition {
			key: self.key,
			description,
			default: self.default,
			validator: self.validator,
		};
		// the default has to pass its own validator
		if let Some(default) = &def.default {
			def.validate(default)?;
		}
		Ok(def)
	}
}

/// Collects definitions while the console is being set up
#[derive(Default)]
pub struct SettingsRegistry {
	definitions: HashMap<String, SettingDefinition>,
}

impl SettingsRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn register(&mut self, def: SettingDefinition) -> ClResult<()> {
		if self.definitions.contains_key(&def.key) {
			return Err(Error::ConfigError(format!("Setting '{}' registered twice", def.key)));
		}
		debug!("Registering setting: {}", def.key);
		self.definitions.insert(def.key.clone(), def);
		Ok(())
	}

	pub fn freeze(self) -> FrozenSettingsRegistry {
		FrozenSettingsRegistry { definitions: self.definitions }
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}

/// Read-only registry shared with [`Settings`](super::Settings)
pub struct FrozenSettingsRegistry {
	definitions: HashMap<String, SettingDefinition>,
}

impl FrozenSettingsRegistry {
	pub fn get(&self, key: &str) -> Option<&SettingDefinition> {
		self.definitions.get(key)
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn string_setting(key: &str, default: &str) -> SettingDefinition {
		SettingDefinition::builder(key)
			.description("test setting")
			.default(SettingValue::String(default.into()))
			.build()
			.unwrap()
	}

	#[test]
	fn test_builder_requires_description() {
		let res = SettingDefinition::builder("notify.icon_dir").build();
		assert!(matches!(res, Err(Error::ConfigError(_))));
		let res = SettingDefinition::builder("").description("x").build();
		assert!(matches!(res, Err(Error::ConfigError(_))));
	}

	#[test]
	fn test_builder_rejects_invalid_default() {
		let res = SettingDefinition::builder("notify.icon.info")
			.description("icon")
			.default(SettingValue::String(String::new()))
			.validator(|v| match v {
				SettingValue::String(s) if !s.is_empty() => Ok(()),
				_ => Err(Error::ValidationError("empty".into())),
			})
			.build();
		assert!(matches!(res, Err(Error::ValidationError(_))));
	}

	#[test]
	fn test_validate_type_mismatch() {
		let def = string_setting("notify.icon_dir", "icons");
		assert!(def.validate(&SettingValue::String("other".into())).is_ok());
		assert!(matches!(def.validate(&SettingValue::Bool(true)), Err(Error::ValidationError(_))));
	}

	#[test]
	fn test_register_duplicate() {
		let mut registry = SettingsRegistry::new();
		registry.register(string_setting("a.b", "x")).unwrap();
		let res = registry.register(string_setting("a.b", "y"));
		assert!(matches!(res, Err(Error::ConfigError(_))));
		assert_eq!(registry.len(), 1);
	}

	#[test]
	fn test_frozen_lookup_is_exact() {
		let mut registry = SettingsRegistry::new();
		registry.register(string_setting("notify.icon_dir", "icons")).unwrap();
		let frozen = registry.freeze();

		assert_eq!(frozen.get("notify.icon_dir").map(|d| d.key.as_str()), Some("notify.icon_dir"));
		assert!(frozen.get("notify.icon_dir.extra").is_none());
		assert!(frozen.get("notify").is_none());
	}

	#[test]
	fn test_setting_value_untagged_serde() {
		let v: SettingValue = serde_json::from_str("true").unwrap();
		assert_eq!(v, SettingValue::Bool(true));
		let v: SettingValue = serde_json::from_str("\"ico-alert.png\"").unwrap();
		assert_eq!(v, SettingValue::String("ico-alert.png".into()));
		assert!(serde_json::from_str::<SettingValue>("42").is_err());
	}
}

// vim: ts=4
