//! Notification markup rendering with Handlebars
//!
//! Every notification is a dismissible alert:
//!
//! ```text
//! <div class="alert alert-<kind> alert-dismissible" role="alert">
//!   <button type="button" class="close" ...>&times;</button>
//!   <img src="<icon>" class="indi" />   (warning and info only)
//!   <message>
//! </div>
//! ```
//!
//! The rendered markup has no whitespace between elements; consumers match
//! on it exactly.

use handlebars::Handlebars;
use serde::Serialize;
use std::borrow::Cow;

use crate::kind::NotificationKind;
use crate::prelude::*;
use crate::settings::NotifyConfig;

const ALERT_TEMPLATE_NAME: &str = "alert";

const ALERT_TEMPLATE: &str = concat!(
	r#"<div class="alert {{alert_class}} alert-dismissible" role="alert">"#,
	r#"<button type="button" class="close" data-dismiss="alert" aria-label="Close">"#,
	r#"<span aria-hidden="true">&times;</span></button>"#,
	r#"{{#if icon}}<img src="{{icon}}" class="indi" />{{/if}}"#,
	"{{{message}}}",
	"</div>",
);

/// Variables passed to the alert template
#[derive(Debug, Serialize)]
struct AlertVars<'a> {
	alert_class: &'static str,
	icon: Option<String>,
	message: Cow<'a, str>,
}

/// Builds alert markup for notifications
pub struct NotificationRenderer {
	handlebars: Handlebars<'static>,
	config: NotifyConfig,
}

impl NotificationRenderer {
	pub fn new(config: NotifyConfig) -> ClResult<Self> {
		let mut handlebars = Handlebars::new();

		// Enable strict mode to catch undefined variables
		handlebars.set_strict_mode(true);
		handlebars
			.register_template_string(ALERT_TEMPLATE_NAME, ALERT_TEMPLATE)
			.map_err(|e| Error::TemplateError(format!("Failed to compile alert template: {}", e)))?;

		Ok(Self { handlebars, config })
	}

	pub fn config(&self) -> &NotifyConfig {
		&self.config
	}

	/// Render the alert markup for `message`
	///
	/// The message is inserted as markup unless `escape_message` is set.
	pub fn build(&self, message: &str, kind: NotificationKind) -> ClResult<String> {
		let message = if self.config.escape_message {
			Cow::Owned(handlebars::html_escape(message))
		} else {
			Cow::Borrowed(message)
		};

		let vars =
			AlertVars { alert_class: kind.alert_class(), icon: self.config.icon_path(kind), message };

		self.handlebars.render(ALERT_TEMPLATE_NAME, &vars).map_err(|e| {
			Error::TemplateError(format!("Failed to render {} notification: {}", kind, e))
		})
	}

	/// Render from a string kind
	///
	/// Unrecognized kinds produce no markup (`Ok(None)`), so callers have to
	/// decide what to show instead.
	pub fn build_str(&self, message: &str, kind: &str) -> ClResult<Option<String>> {
		match kind.parse::<NotificationKind>() {
			Ok(kind) => self.build(message, kind).map(Some),
			Err(_) => {
				warn!("No notification markup for unknown kind '{}'", kind);
				Ok(None)
			}
		}
	}
}


// vim: ts=4
