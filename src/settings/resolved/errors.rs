use thiserror::Error;

use super::SettingSource;

/// A setting that parsed but cannot drive a list view, tagged with the
/// layer (flag, env var or config key) that supplied it.
#[derive(Debug, Error)]
#[error("{key} = `{value}` (set by {origin}) is not usable: {reason}")]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl ConfigError {
	pub(crate) fn invalid<K, V, R>(key: K, value: V, origin: SettingSource, reason: R) -> Self
	where
		K: Into<&'static str>,
		V: Into<String>,
		R: Into<String>,
	{
		Self {
			key: key.into(),
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn message_names_the_key_and_its_origin() {
		let err = ConfigError::invalid(
			"table.per_page",
			"0",
			SettingSource::Environment("FLEETDESK__TABLE__PER_PAGE"),
			"must be at least 1",
		);
		let message = err.to_string();
		assert!(message.starts_with("table.per_page = `0`"));
		assert!(message.contains("FLEETDESK__TABLE__PER_PAGE"));
		assert!(message.ends_with("must be at least 1"));
	}
}
