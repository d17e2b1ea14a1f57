//! Conversion of resolved cell values into styled terminal text.

use fleetdesk_table::CellValue;
use ratatui::text::{Line, Span};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

/// Widest a single cell may render before it is truncated.
pub const MAX_CELL_WIDTH: usize = 48;
const ELLIPSIS: &str = "…";

/// Styled line for one cell.
#[must_use]
pub fn cell_line(value: &CellValue, theme: &Theme) -> Line<'static> {
	let mut spans = Vec::new();
	push_spans(value, theme, &mut spans);
	Line::from(spans)
}

/// Rendered width of a cell in terminal columns.
#[must_use]
pub fn cell_width(value: &CellValue) -> usize {
	match value {
		CellValue::Empty => 0,
		CellValue::Badge { label, .. } => badge_text(label).width(),
		CellValue::Composite { parts } => {
			let widths = parts
				.iter()
				.filter(|part| !part.is_empty())
				.map(cell_width)
				.collect::<Vec<_>>();
			widths.iter().sum::<usize>() + widths.len().saturating_sub(1)
		}
		other => truncate(&other.plain_text()).width(),
	}
}

fn push_spans(value: &CellValue, theme: &Theme, spans: &mut Vec<Span<'static>>) {
	match value {
		CellValue::Empty => {}
		CellValue::Text { text } => spans.push(Span::raw(truncate(text))),
		CellValue::Integer { .. } | CellValue::Number { .. } => spans.push(Span::raw(value.plain_text())),
		CellValue::Badge { label, tone } => {
			spans.push(Span::styled(badge_text(label), theme.tone_style(*tone)));
		}
		CellValue::Link { label, .. } => {
			spans.push(Span::styled(truncate(label), theme.link_style()));
		}
		CellValue::Composite { parts } => {
			for part in parts.iter().filter(|part| !part.is_empty()) {
				if !spans.is_empty() {
					spans.push(Span::raw(" "));
				}
				push_spans(part, theme, spans);
			}
		}
	}
}

fn badge_text(label: &str) -> String {
	format!(" {label} ")
}

fn truncate(text: &str) -> String {
	if text.width() <= MAX_CELL_WIDTH {
		return text.to_string();
	}
	let (head, _) = text.unicode_truncate(MAX_CELL_WIDTH - ELLIPSIS.width());
	format!("{head}{ELLIPSIS}")
}

#[cfg(test)]
mod tests {
	use fleetdesk_table::Tone;

	use super::*;

	#[test]
	fn badges_are_padded_and_styled_by_tone() {
		let theme = Theme::default();
		let line = cell_line(&CellValue::badge("ACTIVE", Tone::Positive), &theme);
		assert_eq!(line.spans.len(), 1);
		assert_eq!(line.spans[0].content, " ACTIVE ");
		assert_eq!(line.spans[0].style, theme.tone_style(Tone::Positive));
		assert_eq!(cell_width(&CellValue::badge("ACTIVE", Tone::Positive)), 8);
	}

	#[test]
	fn composite_parts_are_space_separated() {
		let theme = Theme::default();
		let value = CellValue::composite([
			CellValue::text("KA-01"),
			CellValue::Empty,
			CellValue::badge("EV", Tone::Info),
		]);
		let line = cell_line(&value, &theme);
		let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
		assert_eq!(text, "KA-01  EV ");
		assert_eq!(cell_width(&value), text.width());
	}

	#[test]
	fn long_text_is_truncated_with_an_ellipsis() {
		let long = "x".repeat(MAX_CELL_WIDTH + 10);
		let width = cell_width(&CellValue::text(long.clone()));
		assert_eq!(width, MAX_CELL_WIDTH);
		let line = cell_line(&CellValue::text(long), &Theme::default());
		assert!(line.spans[0].content.ends_with(ELLIPSIS));
	}
}
