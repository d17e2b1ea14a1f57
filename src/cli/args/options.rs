use clap::ValueEnum;

/// How a headless page or the interactive outcome is printed to stdout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	/// Aligned columns with a page footer, for people reading a terminal.
	Plain,
	/// One JSON document, for scripts piping the list elsewhere.
	Json,
}
