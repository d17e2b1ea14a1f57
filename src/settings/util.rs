use std::collections::HashSet;
use std::path::Path;

use fleetdesk::dataset::humanize;

/// Trim, drop empty entries and deduplicate field names, keeping their order.
pub(super) fn sanitize_keys(values: Vec<String>) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut cleaned = Vec::new();
	for value in values {
		let trimmed = value.trim();
		if trimmed.is_empty() {
			continue;
		}
		if seen.insert(trimmed.to_string()) {
			cleaned.push(trimmed.to_string());
		}
	}
	cleaned
}

/// Default table title for a dataset file: `driver_partners.json` becomes
/// `Driver partners`.
pub(super) fn title_for_dataset(path: &Path) -> String {
	let title = path
		.file_stem()
		.map(|stem| humanize(&stem.to_string_lossy()))
		.unwrap_or_default();
	if title.is_empty() {
		"Records".to_string()
	} else {
		title
	}
}
