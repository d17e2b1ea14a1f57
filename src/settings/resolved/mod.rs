use std::path::PathBuf;

use fleetdesk::{ColumnConfig, Session};
use log::LevelFilter;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub dataset: PathBuf,
	pub id_field: String,
	pub table: TableSettings,
	pub ui: UiSettings,
	pub session: Session,
	pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct TableSettings {
	pub per_page: usize,
	pub searchable: bool,
	/// Explicit search keys; `None` searches every field the columns read.
	pub search_keys: Option<Vec<String>>,
	pub empty_message: Option<String>,
	/// Configured columns; empty means derive them from the data.
	pub columns: Vec<ColumnConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiSettings {
	pub title: String,
	pub initial_query: String,
	pub initial_page: usize,
	pub theme_name: String,
	pub search_label: String,
	pub count_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
	pub level: LevelFilter,
	pub file: PathBuf,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::format_summary(self));
	}
}
