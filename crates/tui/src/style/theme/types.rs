use fleetdesk_table::Tone;
use ratatui::style::{Color, Modifier, Style};

use super::normalize_name;

/// A theme containing styles for various UI elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Style for headers, borders and the pager.
	pub header: Style,
	/// Style for the selected row.
	pub row_highlight: Style,
	/// Style for typed search text.
	pub prompt: Style,
	/// Style for placeholders, empty states and muted text.
	pub empty: Style,
	/// Style for the current page marker.
	pub highlight: Style,
	/// Style for error messages in the prompt row.
	pub error: Style,
	/// Style for link cells.
	pub link: Style,
	/// Badge styles by tone.
	pub badges: BadgeStyles,
}

/// Badge styles for each [`Tone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyles {
	pub neutral: Style,
	pub positive: Style,
	pub negative: Style,
	pub warning: Style,
	pub info: Style,
}

impl Theme {
	/// Style of the border and header separator.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::default().fg(self.header.fg.unwrap_or(Color::Reset))
	}

	/// Style for muted text such as placeholders.
	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	/// Style of a badge with the given tone.
	#[must_use]
	pub fn tone_style(&self, tone: Tone) -> Style {
		match tone {
			Tone::Neutral => self.badges.neutral,
			Tone::Positive => self.badges.positive,
			Tone::Negative => self.badges.negative,
			Tone::Warning => self.badges.warning,
			Tone::Info => self.badges.info,
		}
	}

	/// Style of link cells; always underlined.
	#[must_use]
	pub fn link_style(&self) -> Style {
		self.link.add_modifier(Modifier::UNDERLINED)
	}
}

/// Describes a theme instance that can be looked up by the UI.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	/// The name of the theme.
	pub name: String,
	/// The theme configuration.
	pub theme: Theme,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	/// Creates a new theme registration with the given name and theme.
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Adds a single alias to this theme registration.
	#[must_use]
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}

	pub(crate) fn matches(&self, normalized: &str) -> bool {
		normalize_name(&self.name) == normalized
			|| self
				.aliases
				.iter()
				.any(|alias| normalize_name(alias) == normalized)
	}
}
