//! Console builder - wires settings, notification renderer and dispatcher

use std::path::PathBuf;
use std::sync::Arc;

use mlconsole_notify::settings::{self as notify_settings, NotifyConfig};
use mlconsole_notify::{
	NotificationArea, NotificationDispatcher, NotificationKind, NotificationRenderer, Page,
};
use mlconsole_types::settings::{SettingValue, Settings, SettingsRegistry};

use crate::prelude::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install a `tracing` subscriber filtered by `RUST_LOG`
///
/// Does nothing if a global subscriber is already set.
pub fn init_logging() {
	let res = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_target(false)
		.try_init();
	if res.is_err() {
		debug!("tracing subscriber already installed");
	}
}

/// Builder for [`Console`]
///
/// Overrides are applied in this order: settings files, YAML snippets,
/// then individual settings. A later value replaces an earlier one.
#[derive(Debug, Default)]
pub struct ConsoleBuilder {
	settings_files: Vec<PathBuf>,
	settings_yaml: Vec<String>,
	overrides: Vec<(String, SettingValue)>,
}

impl ConsoleBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn settings_file(&mut self, path: impl Into<PathBuf>) -> &mut Self {
		self.settings_files.push(path.into());
		self
	}
	pub fn settings_yaml(&mut self, yaml: impl Into<String>) -> &mut Self {
		self.settings_yaml.push(yaml.into());
		self
	}
	pub fn setting(&mut self, key: impl Into<String>, value: SettingValue) -> &mut Self {
		self.overrides.push((key.into(), value));
		self
	}
	pub fn icon_dir(&mut self, icon_dir: impl Into<String>) -> &mut Self {
		self.setting(notify_settings::ICON_DIR, SettingValue::String(icon_dir.into()))
	}
	pub fn escape_message(&mut self, escape: bool) -> &mut Self {
		self.setting(notify_settings::ESCAPE_MESSAGE, SettingValue::Bool(escape))
	}

	pub fn build(&self) -> ClResult<Console> {
		let mut registry = SettingsRegistry::new();
		notify_settings::register_settings(&mut registry)?;
		let mut settings = Settings::new(Arc::new(registry.freeze()));

		for path in &self.settings_files {
			settings.load_file(path)?;
		}
		for yaml in &self.settings_yaml {
			settings.load_yaml(yaml)?;
		}
		for (key, value) in &self.overrides {
			settings.set(key, value.clone())?;
		}

		let config = NotifyConfig::from_settings(&settings)?;
		let renderer = Arc::new(NotificationRenderer::new(config)?);
		let dispatcher = NotificationDispatcher::new(renderer);

		info!("mlconsole {} initialized", VERSION);
		Ok(Console { settings, dispatcher })
	}
}

/// Configured entry point for rendering notifications
pub struct Console {
	settings: Settings,
	dispatcher: NotificationDispatcher,
}

impl Console {
	pub fn builder() -> ConsoleBuilder {
		ConsoleBuilder::new()
	}

	/// Console with default settings
	pub fn new() -> ClResult<Self> {
		ConsoleBuilder::new().build()
	}

	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	pub fn renderer(&self) -> &NotificationRenderer {
		self.dispatcher.renderer()
	}

	pub fn build_notification(&self, message: &str, kind: NotificationKind) -> ClResult<String> {
		self.renderer().build(message, kind)
	}

	/// Replace the content of `area` with a notification
	pub fn notify<A: NotificationArea + ?Sized>(
		&self,
		area: &mut A,
		message: &str,
		kind: NotificationKind,
	) -> ClResult<()> {
		self.dispatcher.handle(area, message, kind)
	}

	pub fn notify_str<A: NotificationArea + ?Sized>(
		&self,
		area: &mut A,
		message: &str,
		kind: &str,
	) -> ClResult<()> {
		self.dispatcher.handle_str(area, message, kind)
	}

	/// Replace the content of every area matching `selector`
	pub fn notify_selector<P: Page + ?Sized>(
		&self,
		page: &mut P,
		selector: &str,
		message: &str,
		kind: NotificationKind,
	) -> ClResult<usize> {
		self.dispatcher.handle_selector(page, selector, message, kind)
	}
}


// vim: ts=4
