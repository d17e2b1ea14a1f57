use std::fmt;

use serde::Serialize;

use super::FieldValue;

/// Stable identity of a row.
///
/// Identities must be unique within a dataset so that re-rendering a page
/// never duplicates or drops a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum RowId {
	/// Numeric identifier, the common case for REST backends.
	Number(i64),
	/// Opaque string key such as a UUID or slug.
	Key(String),
}

impl fmt::Display for RowId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Number(value) => write!(f, "{value}"),
			Self::Key(value) => f.write_str(value),
		}
	}
}

impl From<i64> for RowId {
	fn from(value: i64) -> Self {
		Self::Number(value)
	}
}

impl From<&str> for RowId {
	fn from(value: &str) -> Self {
		Self::Key(value.to_string())
	}
}

impl From<String> for RowId {
	fn from(value: String) -> Self {
		Self::Key(value)
	}
}

/// A record that can be shown by a [`TableView`](crate::TableView).
///
/// The table never interprets a record beyond these two calls: it asks for
/// the row identity when emitting rendered rows, and for named fields when
/// searching or resolving field-backed columns.
pub trait Record {
	/// Stable, unique identity of this row.
	fn row_id(&self) -> RowId;

	/// Look up a named field. Unknown fields return [`FieldValue::Null`].
	fn field(&self, key: &str) -> FieldValue<'_>;
}

impl<R: Record + ?Sized> Record for &R {
	fn row_id(&self) -> RowId {
		(**self).row_id()
	}

	fn field(&self, key: &str) -> FieldValue<'_> {
		(**self).field(key)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn row_ids_display_without_decoration() {
		assert_eq!(RowId::Number(42).to_string(), "42");
		assert_eq!(RowId::from("drv-7").to_string(), "drv-7");
	}

	#[test]
	fn row_ids_serialize_untagged() {
		let json = serde_json::to_string(&vec![RowId::Number(1), RowId::from("a")]).unwrap();
		assert_eq!(json, r#"[1,"a"]"#);
	}
}
