use fleetdesk_table::{ColumnWidth, RenderedPage};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, TableState};
use unicode_width::UnicodeWidthStr;

use super::cells::{MAX_CELL_WIDTH, cell_line, cell_width};
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

/// Fully materialized table ready to draw.
pub struct TableFrame<'a> {
	/// Column headers.
	pub headers: Vec<String>,
	/// Column width constraints.
	pub widths: Vec<Constraint>,
	/// Rendered table rows.
	pub rows: Vec<Row<'a>>,
	/// Message drawn in place of the rows when the page is empty.
	pub empty_message: Option<String>,
	/// Optional title for the bordered table.
	pub title: Option<String>,
}

impl TableFrame<'static> {
	/// Build a frame from a rendered page, using `hints` to size the columns.
	#[must_use]
	pub fn from_page(page: &RenderedPage, hints: &[ColumnWidth], theme: &Theme) -> Self {
		let rows = page
			.rows()
			.iter()
			.map(|row| {
				Row::new(
					row.cells
						.iter()
						.map(|cell| Cell::from(cell_line(cell, theme)))
						.collect::<Vec<_>>(),
				)
			})
			.collect();
		let empty_message = match &page.body {
			fleetdesk_table::PageBody::Empty { message, .. } => Some(message.clone()),
			fleetdesk_table::PageBody::Rows { .. } => None,
		};

		Self {
			headers: page.headers.clone(),
			widths: column_constraints(page, hints),
			rows,
			empty_message,
			title: None,
		}
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}
}

/// Width constraints for each column of `page`.
///
/// Automatic columns take the widest of their header and visible cells so
/// that paging does not reflow columns more than the content demands.
#[must_use]
pub fn column_constraints(page: &RenderedPage, hints: &[ColumnWidth]) -> Vec<Constraint> {
	page.headers
		.iter()
		.enumerate()
		.map(|(index, header)| match hints.get(index).copied().unwrap_or_default() {
			ColumnWidth::Fixed(width) => Constraint::Length(width),
			ColumnWidth::Fill(weight) => Constraint::Fill(weight.max(1)),
			ColumnWidth::Auto => {
				let content = page
					.rows()
					.iter()
					.filter_map(|row| row.cells.get(index))
					.map(cell_width)
					.max()
					.unwrap_or(0);
				let width = content.max(header.width()).clamp(1, MAX_CELL_WIDTH);
				Constraint::Min(width as u16)
			}
		})
		.collect()
}

/// Render the bordered table. Returns the area occupied by body rows.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	spec: TableFrame<'_>,
	theme: &Theme,
) -> Rect {
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style());

	if let Some(title) = spec.title.clone() {
		block = block.title(title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);

	let body = body_area(inner);
	let empty_message = spec.empty_message.clone();
	render_configured_table(frame, inner, table_state, theme, spec);
	if let Some(message) = empty_message {
		render_empty_message(frame, body, &message, theme);
	}
	body
}

fn body_area(inner: Rect) -> Rect {
	let offset = TABLE_HEADER_ROWS.min(inner.height);
	Rect {
		x: inner.x,
		y: inner.y + offset,
		width: inner.width,
		height: inner.height - offset,
	}
}

fn render_configured_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	theme: &Theme,
	spec: TableFrame<'_>,
) {
	let header_cells = spec.headers.into_iter().map(Cell::from).collect::<Vec<_>>();
	let header = Row::new(header_cells)
		.style(theme.header)
		.height(1)
		.bottom_margin(1);

	let mut widths = spec.widths;
	if widths.is_empty() {
		widths = vec![Constraint::Fill(1)];
	}

	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);

	render_header_separator(frame, area, theme);
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height <= 1 || area.width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: area.y + 1,
		width: area.width,
		height: 1,
	};
	let width = area.width as usize;
	if width <= 2 {
		frame.render_widget(Paragraph::new(" ".repeat(width)), sep_rect);
		return;
	}

	let middle = Span::styled("─".repeat(width - 2), theme.border_style());
	let line = Line::from(vec![Span::raw(" "), middle, Span::raw(" ")]);
	frame.render_widget(Paragraph::new(Text::from(line)), sep_rect);
}

fn render_empty_message(frame: &mut Frame, body: Rect, message: &str, theme: &Theme) {
	if body.height == 0 || body.width == 0 {
		return;
	}
	let row = Rect { height: 1, ..body };
	let paragraph = Paragraph::new(Span::styled(message.to_string(), theme.empty_style()))
		.alignment(Alignment::Center);
	frame.render_widget(paragraph, row);
}
