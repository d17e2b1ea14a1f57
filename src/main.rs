mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, format_page_json, format_plain_page, parse_cli, print_outcome};
use fleetdesk::logging;
use settings::ResolvedConfig;
use workflow::ListWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in fleetdesk_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if let Err(err) = logging::initialize(resolved.logging.level, &resolved.logging.file) {
		eprintln!("warning: logging disabled: {err:#}");
	}

	if cli.print_config {
		resolved.print_summary();
	}

	run_list(cli.headless, cli.output, resolved)
}

/// Show the list and print the result in the chosen format.
fn run_list(headless: bool, format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = ListWorkflow::from_config(settings)?;

	if headless {
		let count_label = workflow.count_label().to_string();
		let page = workflow.render_page();
		match format {
			OutputFormat::Plain => println!("{}", format_plain_page(&page, &count_label)),
			OutputFormat::Json => println!("{}", format_page_json(&page)?),
		}
		return Ok(());
	}

	let outcome = workflow.run_interactive()?;
	print_outcome(format, &outcome)
}
