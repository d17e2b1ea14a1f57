use std::path::PathBuf;

use anyhow::Result;
use fleetdesk::{app_dirs, logging};
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources, LoggingSettings};
use crate::cli::CliArgs;

/// `[logging]`: verbosity and destination of the log file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
	}

	pub(super) fn finalize(self, sources: &ConfigSources) -> Result<LoggingSettings> {
		let level = match self.level {
			Some(value) => logging::parse_level(&value).ok_or_else(|| {
				ConfigError::invalid(
					"logging.level",
					value.clone(),
					sources.source_for_log_level(),
					"expected one of off, error, warn, info, debug, trace",
				)
			})?,
			None => logging::DEFAULT_LEVEL,
		};
		let file = match self.file {
			Some(file) => file,
			None => app_dirs::default_log_file()?,
		};
		Ok(LoggingSettings { level, file })
	}
}
