//! Visual styling utilities.
//!
//! Themes are the colour schemes applied to the terminal UI. They are bundled
//! as TOML documents and looked up by name or alias.

/// Theme definitions, built-in themes and name lookup.
pub mod theme;

pub use theme::{
	Theme, ThemeRegistration, builtin_themes, by_name, default_theme, default_theme_name, names,
};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}

impl StyleConfig {
	/// Creates a new style configuration with the given theme.
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}
