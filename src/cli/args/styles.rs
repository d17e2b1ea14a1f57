use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use fleetdesk::app_dirs;

/// `--version` text with the config directory and log file appended.
pub(super) fn long_version() -> &'static str {
	let locations = [
		("config directory", app_dirs::get_config_dir()),
		("log file", app_dirs::default_log_file()),
	];

	let mut banner = format!("fleetdesk {}\n", env!("CARGO_PKG_VERSION"));
	for (label, location) in locations {
		let shown = match location {
			Ok(path) => path.display().to_string(),
			Err(err) => format!("unavailable ({err})"),
		};
		let _ = writeln!(banner, "{label}: {shown}");
	}

	Box::leak(banner.into_boxed_str())
}

/// Help colours: green headings, cyan flags, yellow value names.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}
