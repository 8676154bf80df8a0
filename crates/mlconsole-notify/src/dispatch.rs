//! Notification dispatch: render and replace the content of an area

use std::sync::Arc;

use crate::area::{NotificationArea, Page};
use crate::kind::NotificationKind;
use crate::prelude::*;
use crate::template::NotificationRenderer;

/// Writes rendered notifications into notification areas
///
/// Each call replaces the previous content of the target, so only the most
/// recent notification is ever visible.
pub struct NotificationDispatcher {
	renderer: Arc<NotificationRenderer>,
}

impl NotificationDispatcher {
	pub fn new(renderer: Arc<NotificationRenderer>) -> Self {
		Self { renderer }
	}

	pub fn renderer(&self) -> &NotificationRenderer {
		&self.renderer
	}

	/// Render `text` and replace the content of `area` with it
	pub fn handle<A: NotificationArea + ?Sized>(
		&self,
		area: &mut A,
		text: &str,
		kind: NotificationKind,
	) -> ClResult<()> {
		let html = self.renderer.build(text, kind)?;
		area.set_html(&html);
		debug!("Dispatched {} notification", kind);
		Ok(())
	}

	/// Like [`Self::handle`] with a string kind
	///
	/// An unknown kind leaves the area untouched and returns
	/// [`Error::UnknownNotificationKind`].
	pub fn handle_str<A: NotificationArea + ?Sized>(
		&self,
		area: &mut A,
		text: &str,
		kind: &str,
	) -> ClResult<()> {
		let kind = kind.parse::<NotificationKind>()?;
		self.handle(area, text, kind)
	}

	/// Replace the content of every area of `page` matching `selector`
	///
	/// Returns the number of areas written. No match is not an error.
	pub fn handle_selector<P: Page + ?Sized>(
		&self,
		page: &mut P,
		selector: &str,
		text: &str,
		kind: NotificationKind,
	) -> ClResult<usize> {
		let html = self.renderer.build(text, kind)?;
		let mut written = 0;
		for area in page.select(selector) {
			area.set_html(&html);
			written += 1;
		}

		if written == 0 {
			debug!("No notification area matches '{}'", selector);
		} else {
			debug!("Dispatched {} notification to {} area(s) of '{}'", kind, written, selector);
		}
		Ok(written)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::area::{MemoryArea, MemoryPage};
	use crate::settings::NotifyConfig;

	fn dispatcher() -> NotificationDispatcher {
		let renderer = NotificationRenderer::new(NotifyConfig::default()).unwrap();
		NotificationDispatcher::new(Arc::new(renderer))
	}

	#[test]
	fn test_handle_replaces_content() {
		let dispatcher = dispatcher();
		let mut area = MemoryArea::with_html("<p>previous</p>");

		dispatcher.handle(&mut area, "Saved!", NotificationKind::Success).unwrap();
		assert_eq!(
			area.html(),
			dispatcher.renderer().build("Saved!", NotificationKind::Success).unwrap()
		);
		assert!(!area.html().contains("previous"));
	}

	#[test]
	fn test_last_write_wins() {
		let dispatcher = dispatcher();
		let mut area = MemoryArea::new();

		dispatcher.handle(&mut area, "first", NotificationKind::Info).unwrap();
		dispatcher.handle(&mut area, "second", NotificationKind::Warning).unwrap();

		assert_eq!(
			area.html(),
			dispatcher.renderer().build("second", NotificationKind::Warning).unwrap()
		);
		assert!(!area.html().contains("first"));
		assert_eq!(area.html().matches("role=\"alert\"").count(), 1);
		assert_eq!(area.writes(), 2);
	}

	#[test]
	fn test_handle_str_unknown_kind_leaves_area() {
		let dispatcher = dispatcher();
		let mut area = MemoryArea::with_html("kept");

		let res = dispatcher.handle_str(&mut area, "msg", "danger");
		assert!(matches!(res, Err(Error::UnknownNotificationKind(_))));
		assert_eq!(area.html(), "kept");
		assert_eq!(area.writes(), 0);

		dispatcher.handle_str(&mut area, "msg", "info").unwrap();
		assert!(area.html().contains("alert-info"));
	}

	#[test]
	fn test_handle_dyn_area() {
		let dispatcher = dispatcher();
		let mut area = MemoryArea::new();
		let target: &mut dyn NotificationArea = &mut area;
		dispatcher.handle(target, "x", NotificationKind::Info).unwrap();
		assert_eq!(area.writes(), 1);
	}

	#[test]
	fn test_handle_selector() {
		let dispatcher = dispatcher();
		let mut page = MemoryPage::new();
		page.add_area("#notification-area", MemoryArea::with_html("old"))
			.add_area("#sidebar", MemoryArea::with_html("sidebar"));

		let written = dispatcher
			.handle_selector(&mut page, "#notification-area", "Oops", NotificationKind::Warning)
			.unwrap();
		assert_eq!(written, 1);
		assert!(page.area("#notification-area").unwrap().html().contains("ico-error.png"));
		assert_eq!(page.area("#sidebar").unwrap().html(), "sidebar");

		let written = dispatcher
			.handle_selector(&mut page, "#missing", "Oops", NotificationKind::Warning)
			.unwrap();
		assert_eq!(written, 0);
	}
}

// vim: ts=4
