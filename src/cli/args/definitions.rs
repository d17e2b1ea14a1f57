use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `fleetdesk` binary.
#[derive(Parser, Debug)]
#[command(
	name = "fleetdesk",
	version,
	long_version = long_version(),
	about = "Search and page through exported ride-hailing operations lists",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "DATASET",
		help = "JSON list to browse (default: dataset.path from configuration)"
	)]
	pub(crate) dataset: Option<PathBuf>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "FLEETDESK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "NUM",
		help = "Open on this page, clamped to the available pages (default: 1)"
	)]
	pub(crate) page: Option<usize>,
	#[arg(
		long = "per-page",
		value_name = "NUM",
		help = "Rows shown per page (default: 10)"
	)]
	pub(crate) per_page: Option<usize>,
	#[arg(
		long = "search-keys",
		value_delimiter = ',',
		value_name = "FIELD",
		help = "Comma-separated fields the query is matched against (default: every column field)"
	)]
	pub(crate) search_keys: Option<Vec<String>>,
	#[arg(
		long = "no-search",
		help = "Disable the search box (default: search enabled)"
	)]
	pub(crate) no_search: bool,
	#[arg(
		long = "id-field",
		value_name = "FIELD",
		help = "Field holding each row's identity (default: id)"
	)]
	pub(crate) id_field: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the table title (default: derived from the dataset file name)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long,
		help = "Print the requested page without starting the interactive view (default: disabled)"
	)]
	pub(crate) headless: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Log verbosity: off, error, warn, info, debug or trace (default: info)"
	)]
	pub(crate) log_level: Option<String>,
}
