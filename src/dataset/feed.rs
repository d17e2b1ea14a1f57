use std::path::PathBuf;

use anyhow::{Context, Result};
use fleetdesk_tui::DataFeed;

use super::{JsonRecord, load_records};

/// Re-reads an exported list on every fetch.
#[derive(Debug, Clone)]
pub struct FileFeed {
	path: PathBuf,
	id_field: String,
}

impl FileFeed {
	pub fn new(path: impl Into<PathBuf>, id_field: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			id_field: id_field.into(),
		}
	}
}

impl DataFeed<JsonRecord> for FileFeed {
	fn fetch(&self) -> Result<Vec<JsonRecord>> {
		load_records(&self.path, &self.id_field)
			.with_context(|| format!("failed to load {}", self.path.display()))
	}

	fn describe(&self) -> String {
		self.path.display().to_string()
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use super::*;

	#[test]
	fn fetch_reflects_the_current_file() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("vendors.json");
		fs::write(&path, r#"[{"id": 1}]"#).expect("write");

		let feed = FileFeed::new(&path, "id");
		assert_eq!(feed.fetch().expect("fetch").len(), 1);

		fs::write(&path, r#"[{"id": 1}, {"id": 2}]"#).expect("write");
		assert_eq!(feed.fetch().expect("fetch").len(), 2);
		assert!(feed.describe().ends_with("vendors.json"));
	}

	#[test]
	fn fetch_errors_name_the_file() {
		let feed = FileFeed::new("/nonexistent/fleetdesk/rows.json", "id");
		let err = feed.fetch().unwrap_err();
		assert!(format!("{err:#}").contains("rows.json"));
	}
}
