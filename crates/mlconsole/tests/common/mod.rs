//! Common test utilities and fixtures shared by the integration tests

#![allow(dead_code)]

use mlconsole::{Console, MemoryArea, MemoryPage, PageLocation};

pub const NOTIFICATION_AREA: &str = "#notification-area";

pub const CLOSE_BUTTON: &str = r#"<button type="button" class="close" data-dismiss="alert" aria-label="Close"><span aria-hidden="true">&times;</span></button>"#;

/// Location of the analysis page as opened from the project list
pub fn analysis_page() -> PageLocation {
	PageLocation::parse(
		"https://localhost:9443/ml/site/analysis/analysis.jag?analysisId=4&analysisName=iris+analysis&projectName=iris%20project#summary",
	)
	.unwrap()
}

pub fn console() -> Console {
	mlconsole::init_logging();
	Console::new().unwrap()
}

/// Page with the main notification area and one unrelated region
pub fn page() -> MemoryPage {
	let mut page = MemoryPage::new();
	page.add_area(NOTIFICATION_AREA, MemoryArea::new())
		.add_area("#dataset-table", MemoryArea::with_html("<table></table>"));
	page
}

// vim: ts=4
