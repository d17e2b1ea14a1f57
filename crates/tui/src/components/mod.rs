//! UI building blocks shared across rendering and state modules.

/// Styled rendering of individual cell values.
pub mod cells;
/// Page switcher and record summary.
pub mod pager;
/// Input prompt rendering and feed status.
pub mod prompt;
/// Table rendering and configuration.
pub mod tables;

pub use cells::{cell_line, cell_width};
pub use pager::{PageMarker, page_markers, render_pager};
pub use prompt::{FeedStatus, InputContext, render_input};
pub use tables::{TableFrame, column_constraints, render_table};

use ratatui::layout::Rect;

/// Check if a point (column, row) is inside a rectangle.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}
