use fleetdesk_table::{
	CellValue, Column, FieldValue, Record, RowId, SearchKeys, TableSpec, TableView, Tone,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::{App, UiLabels};

struct Rider {
	id: i64,
	name: &'static str,
	active: bool,
}

impl Record for Rider {
	fn row_id(&self) -> RowId {
		RowId::Number(self.id)
	}

	fn field(&self, key: &str) -> FieldValue<'_> {
		match key {
			"name" => FieldValue::from(self.name),
			"active" => FieldValue::from(self.active),
			_ => FieldValue::Null,
		}
	}
}

fn riders() -> Vec<Rider> {
	vec![
		Rider { id: 1, name: "Alice", active: true },
		Rider { id: 2, name: "Bob", active: false },
		Rider { id: 3, name: "Carol", active: true },
	]
}

fn app() -> App<'static, Rider> {
	let spec = TableSpec::builder()
		.column(Column::field("Name", "name"))
		.column(Column::computed("Status", |rider: &Rider| {
			if rider.active {
				CellValue::badge("ACTIVE", Tone::Positive)
			} else {
				CellValue::badge("INACTIVE", Tone::Negative)
			}
		}))
		.searchable(SearchKeys::new(["name"]))
		.items_per_page(2)
		.empty_message("No riders")
		.build()
		.expect("valid spec");
	App::new(riders(), TableView::new(spec))
		.with_labels(UiLabels::new("Riders", "Search riders", "riders"))
}

fn draw(app: &mut App<'static, Rider>) -> String {
	let backend = TestBackend::new(60, 12);
	let mut terminal = Terminal::new(backend).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw frame");
	buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line.trim_end().to_string());
	}
	lines.join("\n")
}

fn press(app: &mut App<'static, Rider>, code: KeyCode) {
	key(app, code, KeyModifiers::NONE);
}

fn key(app: &mut App<'static, Rider>, code: KeyCode, modifiers: KeyModifiers) {
	let outcome = app.handle_key(KeyEvent::new(code, modifiers)).expect("key handled");
	assert!(outcome.is_none());
}

fn type_text(app: &mut App<'static, Rider>, text: &str) {
	for ch in text.chars() {
		press(app, KeyCode::Char(ch));
	}
}

#[test]
fn first_page_shows_headers_rows_and_pager() {
	let mut app = app();
	let screen = draw(&mut app);

	assert!(screen.contains("Riders"));
	assert!(screen.contains("Search riders"));
	assert!(screen.contains("Name"));
	assert!(screen.contains("Status"));
	assert!(screen.contains("Alice"));
	assert!(screen.contains("Bob"));
	assert!(!screen.contains("Carol"));
	assert!(screen.contains("ACTIVE"));
	assert!(screen.contains("page 1/2"));
}

#[test]
fn typing_filters_the_rows() {
	let mut app = app();
	type_text(&mut app, "bo");
	let screen = draw(&mut app);

	let page = app.last_page().expect("page drawn");
	assert_eq!(page.column_texts(0), vec!["Bob".to_string()]);
	assert_eq!(page.column_texts(1), vec!["INACTIVE".to_string()]);
	assert!(!screen.contains("Alice"));
	assert!(screen.contains("page 1/1"));
}

#[test]
fn unmatched_query_shows_the_empty_message() {
	let mut app = app();
	type_text(&mut app, "xyz");
	let screen = draw(&mut app);

	assert!(app.last_page().expect("page drawn").is_empty());
	assert!(screen.contains("No riders"));
	assert_eq!(app.selected_id(), None);
}

#[test]
fn paging_keys_move_between_pages() {
	let mut app = app();
	draw(&mut app);

	press(&mut app, KeyCode::PageDown);
	let screen = draw(&mut app);
	assert!(screen.contains("Carol"));
	assert!(!screen.contains("Alice"));
	assert_eq!(app.view.current_page(), 2);

	press(&mut app, KeyCode::PageDown);
	assert_eq!(app.view.current_page(), 2);

	key(&mut app, KeyCode::Home, KeyModifiers::CONTROL);
	assert_eq!(app.view.current_page(), 1);
	key(&mut app, KeyCode::End, KeyModifiers::CONTROL);
	assert_eq!(app.view.current_page(), 2);
	key(&mut app, KeyCode::Left, KeyModifiers::CONTROL);
	assert_eq!(app.view.current_page(), 1);
}

#[test]
fn narrowing_the_query_pulls_the_page_back() {
	let mut app = app();
	draw(&mut app);
	press(&mut app, KeyCode::PageDown);
	draw(&mut app);
	assert_eq!(app.view.current_page(), 2);

	type_text(&mut app, "a");
	draw(&mut app);
	assert_eq!(app.view.current_page(), 1);
	assert_eq!(
		app.last_page().expect("page drawn").column_texts(0),
		vec!["Alice".to_string(), "Carol".to_string()]
	);
}

#[test]
fn enter_accepts_the_highlighted_row() {
	let mut app = app();
	draw(&mut app);
	press(&mut app, KeyCode::Down);

	let outcome = app
		.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
		.expect("key handled")
		.expect("outcome");
	assert!(outcome.accepted);
	assert_eq!(outcome.selection, Some(RowId::Number(2)));
	assert_eq!(outcome.page, 1);
	assert_eq!(outcome.query, "");
}

#[test]
fn escape_cancels_with_the_current_query() {
	let mut app = app();
	type_text(&mut app, "car");
	draw(&mut app);

	let outcome = app
		.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
		.expect("key handled")
		.expect("outcome");
	assert!(!outcome.accepted);
	assert_eq!(outcome.query, "car");
	assert_eq!(outcome.selection, Some(RowId::Number(3)));
}

#[test]
fn clicking_a_row_selects_it() {
	let mut app = app();
	draw(&mut app);

	// Border on row 1, header on row 2, separator on row 3.
	app.handle_mouse(MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column: 10,
		row: 5,
		modifiers: KeyModifiers::NONE,
	});
	assert_eq!(app.selected_id(), Some(RowId::Number(2)));
}

#[test]
fn initial_query_and_page_are_applied() {
	let mut app = app().with_initial_query("o").with_initial_page(9);
	let screen = draw(&mut app);

	assert_eq!(app.view.query(), "o");
	assert_eq!(app.view.current_page(), 1);
	assert!(screen.contains("Bob"));
	assert!(screen.contains("Carol"));
}

#[test]
fn replaced_data_keeps_query_and_clamps_page() {
	let mut app = app();
	draw(&mut app);
	press(&mut app, KeyCode::PageDown);
	draw(&mut app);

	app.replace_data(vec![Rider { id: 9, name: "Dana", active: true }]);
	let screen = draw(&mut app);
	assert_eq!(app.view.current_page(), 1);
	assert!(screen.contains("Dana"));
	assert_eq!(app.selected_id(), Some(RowId::Number(9)));
}
