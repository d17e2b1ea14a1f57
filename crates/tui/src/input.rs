//! Single-line search input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Search box that edits exactly one line of text.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	/// Create an input pre-filled with `initial` and the cursor at its end.
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Apply the text style used for typed characters.
	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	/// Feed a key press to the input. Returns `true` when the text changed.
	///
	/// Line breaks are swallowed so the query stays on a single line.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if is_line_break(&key) {
			return false;
		}
		self.textarea.input(key)
	}

	/// Replace the whole query.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let style = self.textarea.style();
		*self = Self::new(text);
		self.textarea.set_style(style);
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn is_line_break(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}
