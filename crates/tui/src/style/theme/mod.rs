mod builtins;
mod types;

pub use builtins::{default_theme, default_theme_name};
pub use types::{Theme, ThemeRegistration};

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
	builtins::registrations().to_vec()
}

/// Look up a built-in theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = normalize_name(name);
	builtins::registrations()
		.iter()
		.find(|registration| registration.matches(&wanted))
		.map(|registration| registration.theme)
}

/// Canonical names of the built-in themes, sorted.
#[must_use]
pub fn names() -> Vec<String> {
	let mut names = builtins::registrations()
		.iter()
		.map(|registration| registration.name.clone())
		.collect::<Vec<_>>();
	names.sort_unstable_by_key(|name| name.to_ascii_lowercase());
	names
}

pub(crate) fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase().replace(['_', ' '], "-")
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bundled_themes_load() {
		let names = names();
		assert!(names.iter().any(|name| name == "slate"));
		assert!(names.iter().any(|name| name == "light"));
		assert!(names.iter().any(|name| name == "solarized"));
	}

	#[test]
	fn lookup_accepts_aliases_and_any_case() {
		assert!(by_name("Slate").is_some());
		assert!(by_name("dark").is_some());
		assert!(by_name("solarized_dark").is_some());
		assert!(by_name("no-such-theme").is_none());
	}

	#[test]
	fn slate_is_the_default() {
		assert_eq!(default_theme_name(), "slate");
		assert_eq!(by_name(default_theme_name()), Some(default_theme()));
	}
}
