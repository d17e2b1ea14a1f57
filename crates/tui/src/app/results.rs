//! Selection state for the rows of the current page.

use fleetdesk_table::{RenderedPage, RowId};
use ratatui::layout::Rect;
use ratatui::widgets::TableState;

/// Aggregate state for the results table and its interactions.
pub(crate) struct ResultsState {
	/// Selection state for the results table.
	pub table_state: TableState,
	/// Screen area of the body rows as of the last draw.
	pub body_area: Option<Rect>,
	/// Last known results area on screen.
	pub area: Option<Rect>,
	/// Whether the mouse is currently hovering the results table.
	pub hovered: bool,
	/// Page produced by the last draw.
	pub page: Option<RenderedPage>,
}

impl Default for ResultsState {
	fn default() -> Self {
		let mut table_state = TableState::default();
		table_state.select(Some(0));
		Self {
			table_state,
			body_area: None,
			area: None,
			hovered: false,
			page: None,
		}
	}
}

impl ResultsState {
	/// Number of rows visible on the last rendered page.
	pub fn visible_len(&self) -> usize {
		self.page.as_ref().map_or(0, |page| page.rows().len())
	}

	/// Keep the selection inside the visible rows.
	pub fn ensure_selection(&mut self) {
		let len = self.visible_len();
		if len == 0 {
			self.table_state.select(None);
			return;
		}
		let selected = self.table_state.selected().unwrap_or(0).min(len - 1);
		self.table_state.select(Some(selected));
	}

	/// Move the selection to the first row of the page.
	pub fn reset_selection(&mut self) {
		*self.table_state.offset_mut() = 0;
		self.table_state.select(Some(0));
	}

	pub fn move_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	pub fn move_down(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected + 1 < self.visible_len()
		{
			self.table_state.select(Some(selected + 1));
		}
	}

	/// Identity of the selected row on the last rendered page.
	pub fn selected_id(&self) -> Option<RowId> {
		let selected = self.table_state.selected()?;
		let page = self.page.as_ref()?;
		page.rows().get(selected).map(|row| row.id.clone())
	}

	/// Select the row drawn at screen row `row`, if any.
	pub fn select_at(&mut self, row: u16) -> bool {
		let Some(body) = self.body_area else {
			return false;
		};
		if row < body.y || row >= body.y.saturating_add(body.height) {
			return false;
		}
		let index = self.table_state.offset() + (row - body.y) as usize;
		if index >= self.visible_len() {
			return false;
		}
		self.table_state.select(Some(index));
		true
	}
}
