use anyhow::Result;
use fleetdesk_table::{Record, TableView};
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::{App, ViewOutcome};
use crate::components::point_in_rect;

impl<'a, T: Record + Send + 'static> App<'a, T> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ViewOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Ok(Some(self.outcome(false))),
			KeyCode::Char('c') if ctrl => return Ok(Some(self.outcome(false))),
			KeyCode::Enter => return Ok(Some(self.outcome(true))),
			KeyCode::Char('r') if ctrl => self.request_refresh(),
			KeyCode::PageDown => self.change_page(|view| view.next_page()),
			KeyCode::PageUp => self.change_page(|view| view.previous_page()),
			KeyCode::Right if ctrl => self.change_page(|view| view.next_page()),
			KeyCode::Left if ctrl => self.change_page(|view| view.previous_page()),
			KeyCode::Home if ctrl => self.change_page(|view| view.first_page()),
			KeyCode::End if ctrl => self.change_page(|view| view.last_page()),
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			_ => {
				if self.view.is_searchable() && self.search_input.input(key) {
					self.apply_query_change();
				}
			}
		}
		Ok(None)
	}

	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		self.results.hovered = self
			.results
			.area
			.is_some_and(|area| point_in_rect(mouse.column, mouse.row, area));

		match mouse.kind {
			MouseEventKind::ScrollUp if self.results.hovered => self.move_selection_up(),
			MouseEventKind::ScrollDown if self.results.hovered => self.move_selection_down(),
			MouseEventKind::Down(MouseButton::Left) if self.results.hovered => {
				self.results.select_at(mouse.row);
			}
			_ => {}
		}
	}

	fn change_page(&mut self, step: impl FnOnce(&mut TableView<T>)) {
		let before = self.view.current_page();
		step(&mut self.view);
		if self.view.current_page() != before {
			self.results.reset_selection();
		}
	}
}
