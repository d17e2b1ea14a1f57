use fleetdesk::ColumnConfig;
use fleetdesk_table::DEFAULT_ITEMS_PER_PAGE;
use serde::Deserialize;

use super::super::resolved::TableSettings;
use super::super::util::sanitize_keys;
use crate::cli::CliArgs;

/// `[table]` and its `[[table.columns]]` entries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct TableSection {
	pub(super) per_page: Option<usize>,
	pub(super) searchable: Option<bool>,
	pub(super) search_keys: Option<Vec<String>>,
	pub(super) empty_message: Option<String>,
	pub(super) columns: Vec<ColumnConfig>,
}

impl TableSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(per_page) = cli.per_page {
			self.per_page = Some(per_page);
		}
		if let Some(keys) = &cli.search_keys {
			self.search_keys = Some(keys.clone());
			self.searchable = Some(true);
		}
		if cli.no_search {
			self.searchable = Some(false);
		}
	}

	pub(super) fn finalize(self) -> TableSettings {
		TableSettings {
			per_page: self.per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE.get()),
			searchable: self.searchable.unwrap_or(true),
			search_keys: self.search_keys.map(sanitize_keys),
			empty_message: self.empty_message.filter(|message| !message.trim().is_empty()),
			columns: self.columns,
		}
	}
}
