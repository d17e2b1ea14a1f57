use std::borrow::Cow;

use fleetdesk_table::{FieldValue, Record, RowId};
use serde::Serialize;
use serde_json::{Map, Value};

/// One row of an exported list: its identity plus the raw JSON fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonRecord {
	pub id: RowId,
	pub fields: Map<String, Value>,
}

impl JsonRecord {
	#[must_use]
	pub fn new(id: impl Into<RowId>, fields: Map<String, Value>) -> Self {
		Self {
			id: id.into(),
			fields,
		}
	}

	/// Raw JSON value for `key`.
	///
	/// A key present verbatim wins; otherwise dots descend into nested objects,
	/// so `vehicle.plate` reads `{"vehicle": {"plate": ...}}`.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&Value> {
		if let Some(value) = self.fields.get(key) {
			return Some(value);
		}
		let mut segments = key.split('.');
		let mut current = self.fields.get(segments.next()?)?;
		for segment in segments {
			current = match current {
				Value::Object(map) => map.get(segment)?,
				Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
				_ => return None,
			};
		}
		Some(current)
	}
}

impl Record for JsonRecord {
	fn row_id(&self) -> RowId {
		self.id.clone()
	}

	fn field(&self, key: &str) -> FieldValue<'_> {
		self.get(key).map_or(FieldValue::Null, field_value)
	}
}

fn field_value(value: &Value) -> FieldValue<'_> {
	match value {
		Value::Null => FieldValue::Null,
		Value::Bool(flag) => FieldValue::Bool(*flag),
		Value::Number(number) => match number.as_i64() {
			Some(int) => FieldValue::Int(int),
			None => number.as_f64().map_or(FieldValue::Null, FieldValue::Float),
		},
		Value::String(text) => FieldValue::Text(Cow::Borrowed(text)),
		nested => FieldValue::Text(Cow::Owned(nested.to_string())),
	}
}
