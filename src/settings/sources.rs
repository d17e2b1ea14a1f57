use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};
use fleetdesk::app_dirs;

use crate::cli::CliArgs;

/// Stack the list-view settings: `config.toml` under the config dir, the
/// project-local `fleetdesk.toml` files, any `--config` files, then
/// `FLEETDESK__SECTION__KEY` variables. Later layers win.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("fleetdesk")
			.prefix_separator("__")
			.separator("__")
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("table.search_keys"),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Project-local config names, looked up in the working directory.
const LOCAL_CONFIG_NAMES: [&str; 2] = [".fleetdesk.toml", "fleetdesk.toml"];

/// Optional config files, lowest precedence first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let user = app_dirs::get_config_dir()
		.ok()
		.map(|dir| dir.join("config.toml"));
	let local = env::current_dir().ok().into_iter().flat_map(|dir| {
		LOCAL_CONFIG_NAMES
			.iter()
			.map(move |name| dir.join(name))
	});

	user.into_iter().chain(local).collect()
}
