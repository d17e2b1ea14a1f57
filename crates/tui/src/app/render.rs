use fleetdesk_table::{Column, ColumnWidth, Record};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::App;
use crate::components::{
	FeedStatus, InputContext, TableFrame, render_input, render_pager, render_table,
};

impl<'a, T: Record + Send + 'static> App<'a, T> {
	/// Render the full UI for a single frame.
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Min(3),
				Constraint::Length(1),
			])
			.split(area);

		self.draw_input(frame, layout[0]);
		self.draw_table(frame, layout[1]);
		self.draw_pager(frame, layout[2]);
	}

	fn draw_input(&mut self, frame: &mut Frame, area: Rect) {
		let status = if self.fetch.is_loading() {
			FeedStatus::Loading {
				label: " loading",
				throbber_state: &self.throbber_state,
			}
		} else if let Some(message) = self.fetch.error() {
			FeedStatus::Failed { message }
		} else {
			FeedStatus::Idle { label: "" }
		};
		let placeholder = self
			.view
			.is_searchable()
			.then_some(self.ui.search_label.as_str());

		render_input(
			frame,
			InputContext {
				search_input: &self.search_input,
				placeholder,
				area,
				theme: &self.style.theme,
			},
			status,
		);
	}

	fn draw_table(&mut self, frame: &mut Frame, area: Rect) {
		let page = self.view.render(&self.data);
		let hints = self
			.view
			.spec()
			.columns()
			.iter()
			.map(Column::width_hint)
			.collect::<Vec<ColumnWidth>>();
		let table = TableFrame::from_page(&page, &hints, &self.style.theme)
			.with_title(self.ui.table_title());

		self.results.page = Some(page);
		self.results.ensure_selection();
		self.results.area = Some(area);
		let body = render_table(
			frame,
			area,
			&mut self.results.table_state,
			table,
			&self.style.theme,
		);
		self.results.body_area = Some(body);
	}

	fn draw_pager(&mut self, frame: &mut Frame, area: Rect) {
		if let Some(page) = &self.results.page {
			render_pager(frame, area, page, &self.ui.count_label, &self.style.theme);
		}
	}
}
