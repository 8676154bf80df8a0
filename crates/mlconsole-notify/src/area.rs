//! Output regions notifications are written into

/// A region of the page whose content a notification replaces
pub trait NotificationArea {
	/// Replace the whole content of the area with `html`
	fn set_html(&mut self, html: &str);
}

impl<T: NotificationArea + ?Sized> NotificationArea for &mut T {
	fn set_html(&mut self, html: &str) {
		(**self).set_html(html);
	}
}

/// A page holding selector-addressed notification areas
pub trait Page {
	/// Areas matching `selector`, in page order
	fn select(&mut self, selector: &str) -> Vec<&mut dyn NotificationArea>;
}

/// In-memory notification area
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryArea {
	html: String,
	writes: usize,
}

impl MemoryArea {
	pub fn new() -> Self {
		Self::default()
	}

	/// Area with pre-existing content
	pub fn with_html(html: impl Into<String>) -> Self {
		Self { html: html.into(), writes: 0 }
	}

	pub fn html(&self) -> &str {
		&self.html
	}

	/// Number of times the content was replaced
	pub fn writes(&self) -> usize {
		self.writes
	}
}

impl NotificationArea for MemoryArea {
	fn set_html(&mut self, html: &str) {
		html.clone_into(&mut self.html);
		self.writes += 1;
	}
}

/// In-memory page
///
/// Each area is registered under the selector that addresses it. Several
/// areas may share a selector (a class selector matching many elements).
/// `select` accepts a comma-separated selector list.
#[derive(Debug, Default)]
pub struct MemoryPage {
	areas: Vec<(String, MemoryArea)>,
}

impl MemoryPage {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_area(&mut self, selector: impl Into<String>, area: MemoryArea) -> &mut Self {
		self.areas.push((selector.into(), area));
		self
	}

	/// First area registered under `selector`
	pub fn area(&self, selector: &str) -> Option<&MemoryArea> {
		self.areas.iter().find(|entry| entry.0 == selector).map(|entry| &entry.1)
	}

	/// Areas registered under `selector`, borrowed from the page only
	pub fn areas<'a, 's>(
		&'a self,
		selector: &'s str,
	) -> impl Iterator<Item = &'a MemoryArea> + use<'a, 's> {
		self.areas.iter().filter(move |entry| entry.0 == selector).map(|entry| &entry.1)
	}
}

impl Page for MemoryPage {
	fn select(&mut self, selector: &str) -> Vec<&mut dyn NotificationArea> {
		let wanted: Vec<&str> =
			selector.split(',').map(str::trim).filter(|s| !s.is_empty()).collect();

		self.areas
			.iter_mut()
			.filter(|entry| wanted.contains(&entry.0.as_str()))
			.map(|entry| &mut entry.1 as &mut dyn NotificationArea)
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_memory_area_replaces_content() {
		let mut area = MemoryArea::with_html("<p>old</p>");
		area.set_html("<p>new</p>");
		assert_eq!(area.html(), "<p>new</p>");
		assert_eq!(area.writes(), 1);
	}

	#[test]
	fn test_mut_ref_forwards() {
		fn write(mut area: impl NotificationArea) {
			area.set_html("x");
		}

		let mut area = MemoryArea::new();
		write(&mut area);
		assert_eq!(area.html(), "x");
	}

	#[test]
	fn test_page_select() {
		let mut page = MemoryPage::new();
		page.add_area("#notification-area", MemoryArea::new())
			.add_area(".notice", MemoryArea::new())
			.add_area(".notice", MemoryArea::new());

		assert_eq!(page.select("#notification-area").len(), 1);
		assert_eq!(page.select(".notice").len(), 2);
		assert_eq!(page.select("#notification-area, .notice").len(), 3);
		assert!(page.select("#missing").is_empty());
		assert!(page.select("").is_empty());

		for area in page.select(".notice") {
			area.set_html("hi");
		}
		assert!(page.areas(".notice").all(|a| a.html() == "hi"));
		assert_eq!(page.area("#notification-area").map(MemoryArea::html), Some(""));
	}

	#[test]
	fn test_area_outlives_selector() {
		let mut page = MemoryPage::new();
		page.add_area("#notification-area", MemoryArea::with_html("kept"));

		let found = {
			let selector = String::from("#notification-area");
			page.area(&selector)
		};
		assert_eq!(found.map(MemoryArea::html), Some("kept"));
		assert!(page.area("#other").is_none());
	}
}

// vim: ts=4
