//! Where fleetdesk keeps its user config and its log file.
//!
//! `FLEETDESK_CONFIG_DIR` and `FLEETDESK_DATA_DIR` pin both locations;
//! otherwise the per-user platform directories apply.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "fleetdesk";
const APPLICATION: &str = "fleetdesk";

const CONFIG_DIR_ENV: &str = "FLEETDESK_CONFIG_DIR";
const DATA_DIR_ENV: &str = "FLEETDESK_DATA_DIR";

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "fleetdesk.log";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for fleetdesk"))
}

/// An override set to the empty string counts as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Directory holding the operator's `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory receiving `fleetdesk.log`.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Log path used when `[logging] file` is not set.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(LOG_FILE_NAME))
}
