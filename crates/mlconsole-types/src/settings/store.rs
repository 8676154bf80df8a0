//! Resolved settings: registered defaults plus configured overrides

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;

use crate::prelude::*;

use super::types::{FrozenSettingsRegistry, SettingValue};

/// Settings values resolved against a frozen registry
///
/// Resolution order is override -> default. Overrides are validated against
/// their definition when set, so `get` never returns an ill-typed value.
pub struct Settings {
	registry: Arc<FrozenSettingsRegistry>,
	values: HashMap<String, SettingValue>,
}

impl Settings {
	pub fn new(registry: Arc<FrozenSettingsRegistry>) -> Self {
		Self { registry, values: HashMap::new() }
	}

	pub fn registry(&self) -> &FrozenSettingsRegistry {
		&self.registry
	}

	/// Get setting value with full resolution
	pub fn get(&self, key: &str) -> ClResult<SettingValue> {
		let def = self
			.registry
			.get(key)
			.ok_or_else(|| Error::ValidationError(format!("Unknown setting: {}", key)))?;

		if let Some(value) = self.values.get(key) {
			return Ok(value.clone());
		}

		match &def.default {
			Some(default) => Ok(default.clone()),
			None => Err(Error::ValidationError(format!(
				"Setting '{}' has no default and must be configured",
				key
			))),
		}
	}

	pub fn get_string(&self, key: &str) -> ClResult<String> {
		match self.get(key)? {
			SettingValue::String(s) => Ok(s),
			other => Err(Error::ConfigError(format!(
				"Setting '{}' is {}, expected string",
				key,
				other.type_name()
			))),
		}
	}

	pub fn get_bool(&self, key: &str) -> ClResult<bool> {
		match self.get(key)? {
			SettingValue::Bool(b) => Ok(b),
			other => Err(Error::ConfigError(format!(
				"Setting '{}' is {}, expected bool",
				key,
				other.type_name()
			))),
		}
	}

	fn check(&self, key: &str, value: &SettingValue) -> ClResult<()> {
		let def = self
			.registry
			.get(key)
			.ok_or_else(|| Error::ValidationError(format!("Unknown setting: {}", key)))?;

		def.validate(value).inspect_err(|e| {
			warn!("Rejected value for setting {}: {}", key, e);
		})
	}

	/// Override a setting value after type and validator checks
	pub fn set(&mut self, key: &str, value: SettingValue) -> ClResult<()> {
		self.check(key, &value)?;
		debug!("Setting {} = {:?}", key, value);
		self.values.insert(key.to_string(), value);
		Ok(())
	}

	/// Apply a flat YAML map of overrides
	///
	/// ```text
	/// notify.icon_dir: /static/icons
	/// notify.escape_message: true
	/// ```
	///
	/// Returns the number of values applied. Either every entry is applied or,
	/// if any entry is invalid, none is.
	pub fn load_yaml(&mut self, yaml: &str) -> ClResult<usize> {
		if yaml.trim().is_empty() {
			return Ok(0);
		}

		let overrides: BTreeMap<String, SettingValue> = serde_yaml::from_str(yaml)?;
		for (key, value) in &overrides {
			self.check(key, value)?;
		}

		let count = overrides.len();
		for (key, value) in overrides {
			debug!("Setting {} = {:?}", key, value);
			self.values.insert(key, value);
		}

		info!("Applied {} setting overrides", count);
		Ok(count)
	}

	/// Read overrides from a YAML file
	pub fn load_file(&mut self, path: impl AsRef<Path>) -> ClResult<usize> {
		let path = path.as_ref();
		debug!("Loading settings from {}", path.display());
		let content = std::fs::read_to_string(path)?;
		self.load_yaml(&content)
	}
}


// vim: ts=4
