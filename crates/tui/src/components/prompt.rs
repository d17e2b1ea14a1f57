use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::input::QueryInput;
use crate::style::Theme;

/// Argument bundle for rendering the input area.
pub struct InputContext<'a> {
	/// The search input widget.
	pub search_input: &'a QueryInput<'a>,
	/// Placeholder text shown when input is empty.
	pub placeholder: Option<&'a str>,
	/// Rendering area.
	pub area: Rect,
	/// Color theme.
	pub theme: &'a Theme,
}

/// State of the data feed shown at the right of the prompt row.
pub enum FeedStatus<'a> {
	/// A fetch is in flight.
	Loading {
		label: &'a str,
		throbber_state: &'a ThrobberState,
	},
	/// The last fetch failed; the previous dataset is still shown.
	Failed { message: &'a str },
	/// Nothing to report.
	Idle { label: &'a str },
}

/// Render the input row with optional placeholder and feed status.
pub fn render_input(frame: &mut Frame, input: InputContext<'_>, status: FeedStatus<'_>) {
	let InputContext {
		search_input,
		placeholder,
		area,
		theme,
	} = input;

	if area.width == 0 || area.height == 0 {
		return;
	}

	search_input.render(frame, area);

	if search_input.text().is_empty()
		&& let Some(placeholder_text) = placeholder
	{
		render_placeholder(frame, area, placeholder_text, theme);
	}

	let line = match status {
		FeedStatus::Loading {
			label,
			throbber_state,
		} => {
			let muted = theme.empty_style();
			let spinner = Throbber::default()
				.style(muted)
				.throbber_style(muted)
				.to_symbol_span(throbber_state);
			Line::from(vec![spinner, Span::styled(label.to_string(), muted)])
		}
		FeedStatus::Failed { message } => Line::from(Span::styled(message.to_string(), theme.error)),
		FeedStatus::Idle { label } => Line::from(Span::styled(label.to_string(), theme.empty_style())),
	};
	render_status(frame, area, &line);
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if text.is_empty() {
		return;
	}
	let display_text: String = text.chars().take(area.width as usize).collect();
	frame.buffer_mut().set_line(
		area.left(),
		area.top(),
		&Line::from(Span::styled(display_text, theme.empty_style())),
		area.width,
	);
}

/// Right-align `line`, keeping at least two blank columns after the query.
fn render_status(frame: &mut Frame, area: Rect, line: &Line<'_>) {
	let line_width = line.width() as u16;
	if line_width == 0 {
		return;
	}

	let buffer = frame.buffer_mut();
	let row = area.top();
	let last_char_x = (area.left()..area.right())
		.rev()
		.find(|&x| buffer.cell((x, row)).is_some_and(|cell| !cell.symbol().trim().is_empty()));

	let mut start_x = area.right().saturating_sub(line_width).max(area.left());
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}
	if start_x >= area.right() {
		return;
	}

	let max_width = area.right().saturating_sub(start_x).min(line_width);
	buffer.set_line(start_x, row, line, max_width);
}

/// Style for the text typed into the search input.
#[must_use]
pub fn query_style(theme: &Theme) -> Style {
	theme.prompt
}
