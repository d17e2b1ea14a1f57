use std::path::Path;

use fleetdesk_tui::style;
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources, UiSettings};
use super::super::util::title_for_dataset;
use crate::cli::CliArgs;

pub(crate) const DEFAULT_SEARCH_LABEL: &str = "Type to search";

/// `[ui]`: labels, theme and the state the table opens in.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) initial_page: Option<usize>,
	pub(super) theme: Option<String>,
	pub(super) search_label: Option<String>,
	pub(super) count_label: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(page) = cli.page {
			self.initial_page = Some(page);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}

	pub(super) fn finalize(
		self,
		dataset: &Path,
		sources: &ConfigSources,
	) -> Result<UiSettings, ConfigError> {
		let title = self
			.title
			.filter(|title| !title.trim().is_empty())
			.unwrap_or_else(|| title_for_dataset(dataset));
		let count_label = self
			.count_label
			.unwrap_or_else(|| title.to_lowercase());

		let theme_name = match self.theme {
			Some(name) => {
				if style::by_name(&name).is_none() {
					return Err(ConfigError::invalid(
						"ui.theme",
						name,
						sources.source_for_theme(),
						format!("expected one of {}", style::names().join(", ")),
					));
				}
				name
			}
			None => style::default_theme_name().to_string(),
		};

		Ok(UiSettings {
			title,
			initial_query: self.initial_query.unwrap_or_default(),
			initial_page: self.initial_page.unwrap_or(1),
			theme_name,
			search_label: self
				.search_label
				.unwrap_or_else(|| DEFAULT_SEARCH_LABEL.to_string()),
			count_label,
		})
	}
}
