use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

/// `[dataset]`: where the exported list lives.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DatasetSection {
	pub(super) path: Option<PathBuf>,
	pub(super) id_field: Option<String>,
}

impl DatasetSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.dataset.clone() {
			self.path = Some(path);
		}
		if let Some(field) = cli.id_field.clone() {
			self.id_field = Some(field);
		}
	}
}
