use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.table.per_page == 0 {
		return Err(ConfigError::invalid(
			"table.per_page",
			"0",
			sources.source_for_per_page(),
			"must be greater than zero",
		));
	}

	for (index, column) in config.table.columns.iter().enumerate() {
		if let Err(err) = column.validate() {
			let value = column
				.kind
				.clone()
				.or_else(|| column.field.clone())
				.unwrap_or_default();
			return Err(ConfigError::invalid(
				"table.columns",
				value,
				SettingSource::ConfigKey("table.columns"),
				format!("entry {}: {err}", index + 1),
			));
		}
	}

	Ok(())
}
