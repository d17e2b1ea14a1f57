use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Dataset: {}", config.dataset.display());
	let _ = writeln!(out, "  Id field: {}", config.id_field);
	let _ = writeln!(out, "  Rows per page: {}", config.table.per_page);
	if !config.table.searchable {
		let _ = writeln!(out, "  Search: disabled");
	} else {
		match &config.table.search_keys {
			Some(keys) => {
				let _ = writeln!(out, "  Search keys: {}", keys.join(", "));
			}
			None => {
				let _ = writeln!(out, "  Search keys: (every column field)");
			}
		}
	}
	if config.table.columns.is_empty() {
		let _ = writeln!(out, "  Columns: (derived from the data)");
	} else {
		let headers = config
			.table
			.columns
			.iter()
			.map(|column| column.display_header())
			.collect::<Vec<_>>();
		let _ = writeln!(out, "  Columns: {}", headers.join(", "));
	}
	if let Some(message) = &config.table.empty_message {
		let _ = writeln!(out, "  Empty message: {message}");
	}
	let _ = writeln!(out, "  Title: {}", config.ui.title);
	let _ = writeln!(out, "  UI theme: {}", config.ui.theme_name);
	if !config.ui.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.ui.initial_query);
	}
	if config.ui.initial_page != 1 {
		let _ = writeln!(out, "  Initial page: {}", config.ui.initial_page);
	}
	let _ = writeln!(
		out,
		"  Session: {}",
		config
			.session
			.label()
			.unwrap_or_else(|| "(signed out)".to_string())
	);
	let _ = writeln!(
		out,
		"  Log: {} ({})",
		config.logging.file.display(),
		config.logging.level
	);
	out
}

#[cfg(test)]
mod tests {
	use fleetdesk::{Role, Session};

	use super::super::validation::tests::config;
	use super::*;

	#[test]
	fn summary_lists_the_effective_values() {
		let mut config = config();
		config.session = Session::new(Some("ops@fleet".into()), Role::Admin, Some("secret".into()));
		let summary = format_summary(&config);

		assert!(summary.contains("Dataset: riders.json"));
		assert!(summary.contains("Search keys: (every column field)"));
		assert!(summary.contains("Columns: Name"));
		assert!(summary.contains("Session: ops@fleet (admin)"));
		assert!(summary.contains("Log: /tmp/fleetdesk.log (INFO)"));
		assert!(!summary.contains("secret"));
	}

	#[test]
	fn summary_mentions_disabled_search() {
		let mut config = config();
		config.table.searchable = false;
		assert!(format_summary(&config).contains("Search: disabled"));
	}
}
