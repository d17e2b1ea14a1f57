use std::path::PathBuf;

use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"fleetdesk",
		"vendors.json",
		"--id-field",
		"vendor_id",
		"--per-page",
		"20",
		"--search-keys",
		"name",
		"-t",
		"Vendors",
		"-q",
		"acme",
		"--page",
		"2",
		"--theme",
		"light",
		"--log-level",
		"debug",
	]);

	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	assert_eq!(config.dataset.path, Some(PathBuf::from("vendors.json")));
	assert_eq!(config.dataset.id_field.as_deref(), Some("vendor_id"));
	assert_eq!(config.table.per_page, Some(20));
	assert_eq!(config.table.search_keys, Some(vec!["name".to_string()]));
	assert_eq!(config.table.searchable, Some(true));
	assert_eq!(config.ui.title.as_deref(), Some("Vendors"));
	assert_eq!(config.ui.initial_query.as_deref(), Some("acme"));
	assert_eq!(config.ui.initial_page, Some(2));
	assert_eq!(config.ui.theme.as_deref(), Some("light"));
	assert_eq!(config.logging.level.as_deref(), Some("debug"));
}

#[test]
fn defaults_fill_in_missing_values() {
	let cli = CliArgs::parse_from(["fleetdesk", "exports/corporate_accounts.json"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let resolved = config.resolve(&cli).expect("resolves");

	assert_eq!(resolved.id_field, "id");
	assert_eq!(resolved.table.per_page, 10);
	assert!(resolved.table.searchable);
	assert_eq!(resolved.table.search_keys, None);
	assert!(resolved.table.columns.is_empty());
	assert_eq!(resolved.ui.title, "Corporate accounts");
	assert_eq!(resolved.ui.count_label, "corporate accounts");
	assert_eq!(resolved.ui.theme_name, "slate");
	assert_eq!(resolved.ui.initial_page, 1);
	assert!(!resolved.session.is_signed_in());
	assert_eq!(resolved.logging.level, log::LevelFilter::Info);
}

#[test]
fn unknown_log_levels_are_rejected() {
	let cli = CliArgs::parse_from(["fleetdesk", "riders.json", "--log-level", "chatty"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let err = config.resolve(&cli).unwrap_err();
	let message = err.to_string();
	assert!(message.contains("logging.level"));
	assert!(message.contains("CLI flag `--log-level`"));
}
