use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// Raw value of a record field as seen by search and field accessors.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
	/// Missing or explicitly null field.
	Null,
	Bool(bool),
	Int(i64),
	Float(f64),
	Text(Cow<'a, str>),
}

impl FieldValue<'_> {
	/// Text used for substring search. Null fields search as the empty string.
	#[must_use]
	pub fn search_text(&self) -> Cow<'_, str> {
		match self {
			Self::Null => Cow::Borrowed(""),
			Self::Text(text) => Cow::Borrowed(text.as_ref()),
			other => Cow::Owned(other.to_string()),
		}
	}

	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Interpret the value as a flag. Numbers are truthy when non-zero and
	/// text when non-empty.
	#[must_use]
	pub fn is_truthy(&self) -> bool {
		match self {
			Self::Null => false,
			Self::Bool(value) => *value,
			Self::Int(value) => *value != 0,
			Self::Float(value) => *value != 0.0 && !value.is_nan(),
			Self::Text(text) => !text.is_empty(),
		}
	}

	/// Detach the value from the record it was borrowed from.
	#[must_use]
	pub fn into_owned(self) -> FieldValue<'static> {
		match self {
			Self::Null => FieldValue::Null,
			Self::Bool(value) => FieldValue::Bool(value),
			Self::Int(value) => FieldValue::Int(value),
			Self::Float(value) => FieldValue::Float(value),
			Self::Text(text) => FieldValue::Text(Cow::Owned(text.into_owned())),
		}
	}
}

impl fmt::Display for FieldValue<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => Ok(()),
			Self::Bool(value) => write!(f, "{value}"),
			Self::Int(value) => write!(f, "{value}"),
			Self::Float(value) => write!(f, "{value}"),
			Self::Text(text) => f.write_str(text),
		}
	}
}

impl<'a> From<&'a str> for FieldValue<'a> {
	fn from(value: &'a str) -> Self {
		Self::Text(Cow::Borrowed(value))
	}
}

impl From<String> for FieldValue<'_> {
	fn from(value: String) -> Self {
		Self::Text(Cow::Owned(value))
	}
}

impl From<bool> for FieldValue<'_> {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for FieldValue<'_> {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<f64> for FieldValue<'_> {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl<'a, T: Into<FieldValue<'a>>> From<Option<T>> for FieldValue<'a> {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

/// Semantic colouring of a badge. Front-ends map tones to concrete styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
	#[default]
	Neutral,
	Positive,
	Negative,
	Warning,
	Info,
}

/// Displayable content of a single table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CellValue {
	Empty,
	Text { text: String },
	/// Whole number kept exact, so large ids survive rendering.
	Integer { value: i64 },
	Number { value: f64 },
	/// Short status pill, e.g. `ACTIVE` or `PENDING`.
	Badge { label: String, tone: Tone },
	/// Label pointing at a caller-owned target such as a detail route.
	Link { label: String, target: String },
	/// Several fragments rendered next to each other.
	Composite { parts: Vec<CellValue> },
}

impl CellValue {
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text { text: text.into() }
	}

	pub fn badge(label: impl Into<String>, tone: Tone) -> Self {
		Self::Badge {
			label: label.into(),
			tone,
		}
	}

	pub fn link(label: impl Into<String>, target: impl Into<String>) -> Self {
		Self::Link {
			label: label.into(),
			target: target.into(),
		}
	}

	pub fn composite(parts: impl IntoIterator<Item = CellValue>) -> Self {
		Self::Composite {
			parts: parts.into_iter().collect(),
		}
	}

	/// Plain text a reader sees in the cell.
	///
	/// Composite parts are joined with a single space, skipping empty parts.
	#[must_use]
	pub fn plain_text(&self) -> String {
		match self {
			Self::Empty => String::new(),
			Self::Text { text } => text.clone(),
			Self::Integer { value } => value.to_string(),
			Self::Number { value } => value.to_string(),
			Self::Badge { label, .. } | Self::Link { label, .. } => label.clone(),
			Self::Composite { parts } => parts
				.iter()
				.map(Self::plain_text)
				.filter(|part| !part.is_empty())
				.collect::<Vec<_>>()
				.join(" "),
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		match self {
			Self::Empty => true,
			Self::Composite { parts } => parts.iter().all(Self::is_empty),
			_ => false,
		}
	}
}

impl From<FieldValue<'_>> for CellValue {
	fn from(value: FieldValue<'_>) -> Self {
		match value {
			FieldValue::Null => Self::Empty,
			FieldValue::Bool(flag) => Self::text(flag.to_string()),
			FieldValue::Int(number) => Self::Integer { value: number },
			FieldValue::Float(number) => Self::Number { value: number },
			FieldValue::Text(text) => Self::text(text.into_owned()),
		}
	}
}

impl From<&str> for CellValue {
	fn from(value: &str) -> Self {
		Self::text(value)
	}
}

impl From<String> for CellValue {
	fn from(value: String) -> Self {
		Self::text(value)
	}
}
