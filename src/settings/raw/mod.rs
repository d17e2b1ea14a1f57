use std::env;

use anyhow::{Error, Result, anyhow};
use fleetdesk::dataset::DEFAULT_ID_FIELD;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod dataset;
mod logging;
mod session;
mod table;
mod ui;

use dataset::DatasetSection;
use logging::LoggingSection;
use session::SessionSection;
use table::TableSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	dataset: DatasetSection,
	table: TableSection,
	ui: UiSection,
	session: SessionSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.dataset.apply_cli_overrides(cli);
		self.table.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			per_page: detect_source(
				cli.per_page.is_some(),
				self.table.per_page.is_some(),
				"FLEETDESK__TABLE__PER_PAGE",
				"--per-page",
				"table.per_page",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"FLEETDESK__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"FLEETDESK__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
			role: detect_source(
				false,
				self.session.role.is_some(),
				"FLEETDESK__SESSION__ROLE",
				"",
				"session.role",
			),
		};

		let dataset = self.dataset.path.ok_or_else(|| {
			anyhow!("no dataset given; pass a JSON file or set `dataset.path` in the configuration")
		})?;
		let id_field = self
			.dataset
			.id_field
			.filter(|field| !field.trim().is_empty())
			.unwrap_or_else(|| DEFAULT_ID_FIELD.to_string());

		let table = self.table.finalize();
		let ui = self.ui.finalize(&dataset, &sources)?;
		let session = self.session.finalize(&sources)?;
		let logging = self.logging.finalize(&sources)?;

		let config = ResolvedConfig {
			dataset,
			id_field,
			table,
			ui,
			session,
			logging,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
