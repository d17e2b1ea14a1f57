//! Page switcher rendered beneath the table.

use fleetdesk_table::RenderedPage;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

/// Page numbers shown at most at once, including the first and last page.
const MAX_PAGE_MARKERS: usize = 7;

/// One element of the page switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
	Page(usize),
	Current(usize),
	Gap,
}

/// Markers for `total` pages centred on `current`.
///
/// The first and last page are always present; runs of hidden pages collapse
/// into a single [`PageMarker::Gap`].
#[must_use]
pub fn page_markers(current: usize, total: usize) -> Vec<PageMarker> {
	let total = total.max(1);
	let current = current.clamp(1, total);
	let mark = |page: usize| {
		if page == current {
			PageMarker::Current(page)
		} else {
			PageMarker::Page(page)
		}
	};

	if total <= MAX_PAGE_MARKERS {
		return (1..=total).map(mark).collect();
	}

	// Five numbered slots plus two gaps; the window slides with `current`.
	let window = MAX_PAGE_MARKERS - 2;
	if current < window {
		let mut markers = (1..=window).map(mark).collect::<Vec<_>>();
		markers.extend([PageMarker::Gap, mark(total)]);
		markers
	} else if current + window > total + 1 {
		let mut markers = vec![mark(1), PageMarker::Gap];
		markers.extend((total + 1 - window..=total).map(mark));
		markers
	} else {
		vec![
			mark(1),
			PageMarker::Gap,
			mark(current - 1),
			mark(current),
			mark(current + 1),
			PageMarker::Gap,
			mark(total),
		]
	}
}

/// Summary text on the right-hand side of the pager.
#[must_use]
pub fn summary_text(page: &RenderedPage, count_label: &str) -> String {
	let mut text = if page.is_empty() {
		format!("0 {count_label}")
	} else {
		let first = page.first_row_number();
		let last = first + page.rows().len() - 1;
		format!("{first}–{last} of {} {count_label}", page.filtered_count)
	};
	if page.filtered_count != page.total_count {
		text.push_str(&format!(" (filtered from {})", page.total_count));
	}
	text
}

/// Render `‹ 1 … 4 [5] 6 … 9 ›  page 5/9` with the record summary right-aligned.
pub fn render_pager(
	frame: &mut Frame,
	area: Rect,
	page: &RenderedPage,
	count_label: &str,
	theme: &Theme,
) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	let muted = theme.empty_style();
	let mut spans = vec![Span::styled("‹ ", muted)];
	for marker in page_markers(page.page, page.total_pages) {
		match marker {
			PageMarker::Page(number) => spans.push(Span::styled(format!(" {number} "), theme.header)),
			PageMarker::Current(number) => {
				spans.push(Span::styled(format!(" {number} "), theme.highlight));
			}
			PageMarker::Gap => spans.push(Span::styled(" … ", muted)),
		}
	}
	spans.push(Span::styled(" ›", muted));
	spans.push(Span::styled(
		format!("  page {}/{}", page.page, page.total_pages),
		muted,
	));

	let left = Line::from(spans);
	let left_width = left.width();
	let summary = summary_text(page, count_label);
	let buffer = frame.buffer_mut();
	buffer.set_line(area.left(), area.top(), &left, area.width);

	let summary_width = summary.width();
	let available = (area.width as usize).saturating_sub(left_width + 2);
	if summary_width <= available {
		let x = area.right() - summary_width as u16;
		buffer.set_line(
			x,
			area.top(),
			&Line::from(Span::styled(summary, muted)),
			summary_width as u16,
		);
	}
}
