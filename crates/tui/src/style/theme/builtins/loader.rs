use anyhow::{Context, Result, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{BadgeStyles, Theme, ThemeRegistration};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
	pub(super) default_name: String,
}

#[derive(Debug, Deserialize)]
struct ThemeDocument {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ThemeStyles,
}

#[derive(Debug, Deserialize)]
struct ThemeStyles {
	header: StyleEntry,
	row_highlight: StyleEntry,
	prompt: StyleEntry,
	empty: StyleEntry,
	highlight: StyleEntry,
	error: StyleEntry,
	link: StyleEntry,
	badges: BadgeEntries,
}

#[derive(Debug, Deserialize)]
struct BadgeEntries {
	neutral: StyleEntry,
	positive: StyleEntry,
	negative: StyleEntry,
	warning: StyleEntry,
	info: StyleEntry,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StyleEntry {
	fg: Option<String>,
	bg: Option<String>,
	modifiers: Vec<String>,
}

impl ThemeStyles {
	fn into_theme(self, context: &str) -> Result<Theme> {
		let badge = |entry: &StyleEntry, name: &str| entry.to_style(&format!("{context}.badges.{name}"));
		let badges = BadgeStyles {
			neutral: badge(&self.badges.neutral, "neutral")?,
			positive: badge(&self.badges.positive, "positive")?,
			negative: badge(&self.badges.negative, "negative")?,
			warning: badge(&self.badges.warning, "warning")?,
			info: badge(&self.badges.info, "info")?,
		};
		Ok(Theme {
			header: self.header.to_style(&format!("{context}.header"))?,
			row_highlight: self
				.row_highlight
				.to_style(&format!("{context}.row_highlight"))?,
			prompt: self.prompt.to_style(&format!("{context}.prompt"))?,
			empty: self.empty.to_style(&format!("{context}.empty"))?,
			highlight: self.highlight.to_style(&format!("{context}.highlight"))?,
			error: self.error.to_style(&format!("{context}.error"))?,
			link: self.link.to_style(&format!("{context}.link"))?,
			badges,
		})
	}
}

impl StyleEntry {
	fn to_style(&self, context: &str) -> Result<Style> {
		let mut style = Style::new();

		if let Some(fg) = &self.fg {
			let color =
				parse_color(fg).with_context(|| format!("{context}: invalid foreground colour `{fg}`"))?;
			style = style.fg(color);
		}

		if let Some(bg) = &self.bg {
			let color =
				parse_color(bg).with_context(|| format!("{context}: invalid background colour `{bg}`"))?;
			style = style.bg(color);
		}

		for modifier in &self.modifiers {
			let value = parse_modifier(modifier)
				.with_context(|| format!("{context}: invalid modifier `{modifier}`"))?;
			style = style.add_modifier(value);
		}

		Ok(style)
	}
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files: Vec<_> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut registrations = Vec::with_capacity(files.len());
	let mut default: Option<(Theme, String)> = None;

	for file in files {
		let (registration, is_default) = parse_theme_file(file)?;
		if is_default {
			if let Some((_, existing)) = &default {
				bail!(
					"multiple built-in themes are marked as default (`{existing}` and `{}`)",
					registration.name
				);
			}
			default = Some((registration.theme, registration.name.clone()));
		}
		registrations.push(registration);
	}

	let Some(first) = registrations.first() else {
		bail!("no built-in theme definitions were found");
	};
	let (default_theme, default_name) = default.unwrap_or_else(|| (first.theme, first.name.clone()));

	Ok(BuiltinThemes {
		registrations,
		default_theme,
		default_name,
	})
}

fn parse_theme_file(file: &File) -> Result<(ThemeRegistration, bool)> {
	let path = file.path();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{path:?} is not valid UTF-8"))?;
	let document: ThemeDocument = toml::from_str(contents)
		.with_context(|| format!("failed to parse built-in theme definition in {path:?}"))?;

	let theme = document.styles.into_theme(&format!("{path:?}"))?;
	let registration = document
		.aliases
		.into_iter()
		.map(|alias| alias.trim().to_string())
		.filter(|alias| !alias.is_empty())
		.fold(ThemeRegistration::new(document.name, theme), |registration, alias| {
			registration.alias(alias)
		});

	Ok((registration, document.default))
}

fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		return parse_hex_colour(hex);
	}

	if let Ok(index) = value.parse::<u8>() {
		return Ok(Color::Indexed(index));
	}

	match normalise_key(value).as_str() {
		"reset" | "none" | "default" => Ok(Color::Reset),
		"black" => Ok(Color::Black),
		"red" => Ok(Color::Red),
		"green" => Ok(Color::Green),
		"yellow" => Ok(Color::Yellow),
		"blue" => Ok(Color::Blue),
		"magenta" => Ok(Color::Magenta),
		"cyan" => Ok(Color::Cyan),
		"gray" | "grey" => Ok(Color::Gray),
		"dark_gray" | "dark_grey" => Ok(Color::DarkGray),
		"light_red" => Ok(Color::LightRed),
		"light_green" => Ok(Color::LightGreen),
		"light_yellow" => Ok(Color::LightYellow),
		"light_blue" => Ok(Color::LightBlue),
		"white" => Ok(Color::White),
		other => bail!("unknown colour `{other}`"),
	}
}

fn parse_hex_colour(hex: &str) -> Result<Color> {
	if hex.len() != 6 {
		bail!("hex colours must be 6 characters long");
	}
	let component = |range: std::ops::Range<usize>| {
		u8::from_str_radix(&hex[range], 16).with_context(|| format!("invalid hex colour `#{hex}`"))
	};
	Ok(Color::Rgb(component(0..2)?, component(2..4)?, component(4..6)?))
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	match normalise_key(input).as_str() {
		"bold" => Ok(Modifier::BOLD),
		"dim" => Ok(Modifier::DIM),
		"italic" => Ok(Modifier::ITALIC),
		"underline" | "underlined" => Ok(Modifier::UNDERLINED),
		"reversed" | "reverse" => Ok(Modifier::REVERSED),
		other => bail!("unknown modifier `{other}`"),
	}
}

fn normalise_key(value: &str) -> String {
	value.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn colours_parse_from_names_hex_and_indices() {
		assert_eq!(parse_color("Dark-Gray").unwrap(), Color::DarkGray);
		assert_eq!(parse_color("#0a0B0c").unwrap(), Color::Rgb(10, 11, 12));
		assert_eq!(parse_color("42").unwrap(), Color::Indexed(42));
		assert!(parse_color("#abc").is_err());
		assert!(parse_color("ultraviolet").is_err());
	}

	#[test]
	fn modifiers_parse_case_insensitively() {
		assert_eq!(parse_modifier("BOLD").unwrap(), Modifier::BOLD);
		assert!(parse_modifier("sparkle").is_err());
	}
}
