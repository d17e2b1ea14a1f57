//! File logging for the `fleetdesk` binary.
//!
//! Records go through the `log` facade. The binary installs a single
//! `simplelog` write logger; nothing is ever written to the terminal, which
//! belongs to the table UI.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

/// Level used when neither the CLI nor the configuration names one.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Parse a level name such as `debug` or `WARN`.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
	LevelFilter::from_str(value.trim()).ok()
}

/// Install the process-wide file logger.
///
/// Parent directories of `path` are created. Calling this twice leaves the
/// first logger in place.
pub fn initialize(level: LevelFilter, path: &Path) -> Result<PathBuf> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}

	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let config = ConfigBuilder::new()
		.set_target_level(LevelFilter::Error)
		.set_location_level(LevelFilter::Off)
		.build();
	if WriteLogger::init(level, config, file).is_err() {
		log::debug!("logger already installed");
	}
	log::info!("fleetdesk {} starting", env!("CARGO_PKG_VERSION"));
	Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn level_names_parse_case_insensitively() {
		assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
		assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
		assert_eq!(parse_level("off"), Some(LevelFilter::Off));
		assert_eq!(parse_level("loud"), None);
	}

	#[test]
	fn initialize_creates_the_log_file() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("nested").join("fleetdesk.log");
		let written = initialize(LevelFilter::Info, &path).expect("logger");
		assert_eq!(written, path);
		assert!(path.exists());
	}
}
