//! Column specifications for exported lists, as written in configuration.

use fleetdesk_table::{CellValue, Column, ColumnWidth, FieldValue, Record, Tone};
use indexmap::IndexSet;
use serde::Deserialize;
use thiserror::Error;

use super::JsonRecord;

pub const DEFAULT_ACTIVE_VALUE: &str = "active";
pub const DEFAULT_ACTIVE_LABEL: &str = "ACTIVE";
pub const DEFAULT_INACTIVE_LABEL: &str = "INACTIVE";

/// Column kinds understood by [`ColumnConfig::kind`].
pub const COLUMN_KINDS: [&str; 4] = ["field", "status", "join", "link"];

/// One `[[table.columns]]` entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
	pub header: Option<String>,
	/// One of [`COLUMN_KINDS`]; `field` when omitted.
	pub kind: Option<String>,
	pub field: Option<String>,
	/// Fields of a `join` column.
	pub fields: Vec<String>,
	pub separator: Option<String>,
	pub active_value: Option<String>,
	pub active_label: Option<String>,
	pub inactive_label: Option<String>,
	/// Link target template with `{field}` placeholders.
	pub target: Option<String>,
	pub width: ColumnWidth,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnError {
	#[error("unknown column kind `{0}` (expected one of field, status, join, link)")]
	UnknownKind(String),
	#[error("`{0}` columns need a `field`")]
	MissingField(&'static str),
	#[error("`join` columns need at least one entry in `fields`")]
	MissingFields,
	#[error("`link` columns need a `target`")]
	MissingTarget,
}

enum Kind {
	Field,
	Status,
	Join,
	Link,
}

impl ColumnConfig {
	/// Plain field column for `key`.
	#[must_use]
	pub fn field(key: impl Into<String>) -> Self {
		Self {
			field: Some(key.into()),
			..Self::default()
		}
	}

	fn kind(&self) -> Result<Kind, ColumnError> {
		match self.kind.as_deref().map(str::trim).unwrap_or("field") {
			"field" => Ok(Kind::Field),
			"status" => Ok(Kind::Status),
			"join" => Ok(Kind::Join),
			"link" => Ok(Kind::Link),
			other => Err(ColumnError::UnknownKind(other.to_string())),
		}
	}

	/// Fields this column reads, used as default search keys.
	#[must_use]
	pub fn referenced_fields(&self) -> Vec<String> {
		let mut fields = self.field.iter().cloned().collect::<Vec<_>>();
		fields.extend(self.fields.iter().cloned());
		fields
	}

	/// Header shown for the column: the configured one, or a readable form
	/// of the field names.
	#[must_use]
	pub fn display_header(&self) -> String {
		if let Some(header) = &self.header {
			return header.clone();
		}
		self.referenced_fields()
			.iter()
			.map(|field| humanize(field))
			.collect::<Vec<_>>()
			.join(" / ")
	}

	/// Check the entry without building it.
	pub fn validate(&self) -> Result<(), ColumnError> {
		self.clone().into_column().map(|_| ())
	}

	/// Build the column this entry describes.
	pub fn into_column(self) -> Result<Column<JsonRecord>, ColumnError> {
		let header = self.display_header();
		let width = self.width;
		let column = match self.kind()? {
			Kind::Field => {
				let field = self.field.ok_or(ColumnError::MissingField("field"))?;
				Column::field(header, field)
			}
			Kind::Status => {
				let field = self.field.ok_or(ColumnError::MissingField("status"))?;
				let status = StatusBadge {
					active_value: self
						.active_value
						.unwrap_or_else(|| DEFAULT_ACTIVE_VALUE.to_string()),
					active_label: self
						.active_label
						.unwrap_or_else(|| DEFAULT_ACTIVE_LABEL.to_string()),
					inactive_label: self
						.inactive_label
						.unwrap_or_else(|| DEFAULT_INACTIVE_LABEL.to_string()),
				};
				Column::computed(header, move |row: &JsonRecord| status.resolve(row, &field))
			}
			Kind::Join => {
				if self.fields.is_empty() {
					return Err(ColumnError::MissingFields);
				}
				let fields = self.fields;
				let separator = self.separator;
				Column::computed(header, move |row: &JsonRecord| {
					join_cell(row, &fields, separator.as_deref())
				})
			}
			Kind::Link => {
				let field = self.field.ok_or(ColumnError::MissingField("link"))?;
				let target = self.target.ok_or(ColumnError::MissingTarget)?;
				Column::computed(header, move |row: &JsonRecord| {
					let label = row.field(&field).search_text().into_owned();
					if label.is_empty() {
						CellValue::Empty
					} else {
						CellValue::link(label, fill_template(&target, row))
					}
				})
			}
		};
		Ok(column.width(width))
	}
}

struct StatusBadge {
	active_value: String,
	active_label: String,
	inactive_label: String,
}

impl StatusBadge {
	fn resolve(&self, row: &JsonRecord, field: &str) -> CellValue {
		let value = row.field(field);
		let active = match &value {
			FieldValue::Bool(_) | FieldValue::Int(_) | FieldValue::Float(_) => value.is_truthy(),
			other => other
				.search_text()
				.trim()
				.eq_ignore_ascii_case(&self.active_value),
		};
		if active {
			CellValue::badge(&self.active_label, Tone::Positive)
		} else {
			CellValue::badge(&self.inactive_label, Tone::Negative)
		}
	}
}

fn join_cell(row: &JsonRecord, fields: &[String], separator: Option<&str>) -> CellValue {
	let parts = fields
		.iter()
		.map(|field| row.field(field).search_text().into_owned())
		.filter(|text| !text.is_empty())
		.collect::<Vec<_>>();
	if parts.is_empty() {
		return CellValue::Empty;
	}
	match separator {
		Some(separator) => CellValue::text(parts.join(separator)),
		None => CellValue::composite(parts.into_iter().map(CellValue::text)),
	}
}

/// Replace every `{field}` in `template` with that field's text.
///
/// An unterminated `{` is copied through literally.
pub fn fill_template(template: &str, row: &JsonRecord) -> String {
	let mut out = String::with_capacity(template.len());
	let mut rest = template;
	while let Some(start) = rest.find('{') {
		out.push_str(&rest[..start]);
		let after = &rest[start + 1..];
		let Some(end) = after.find('}') else {
			out.push_str(&rest[start..]);
			return out;
		};
		out.push_str(&row.field(&after[..end]).search_text());
		rest = &after[end + 1..];
	}
	out.push_str(rest);
	out
}

/// `first_name` becomes `First name`, `vehicle.plate` becomes `Vehicle plate`.
#[must_use]
pub fn humanize(key: &str) -> String {
	let spaced = key.replace(['_', '.', '-'], " ");
	let mut chars = spaced.trim().chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// One field column per key seen across `records`, in first-seen order with
/// `id_field` leading.
#[must_use]
pub fn derive_columns(records: &[JsonRecord], id_field: &str) -> Vec<ColumnConfig> {
	let mut keys = IndexSet::new();
	if records.iter().any(|record| record.fields.contains_key(id_field)) {
		keys.insert(id_field.to_string());
	}
	for record in records {
		keys.extend(record.fields.keys().cloned());
	}
	keys.into_iter().map(ColumnConfig::field).collect()
}

#[cfg(test)]
mod tests {
	use serde_json::{Value, json};

	use super::*;

	fn record(id: i64, value: Value) -> JsonRecord {
		let Value::Object(fields) = value else {
			panic!("object expected");
		};
		JsonRecord::new(id, fields)
	}

	fn resolve(config: ColumnConfig, row: &JsonRecord) -> CellValue {
		config.into_column().expect("valid column").resolve(row)
	}

	#[test]
	fn status_columns_render_badges() {
		let config = ColumnConfig {
			kind: Some("status".into()),
			field: Some("status".into()),
			..ColumnConfig::default()
		};
		let active = record(1, json!({ "status": "Active" }));
		let blocked = record(2, json!({ "status": "blocked" }));
		let flagged = record(3, json!({ "status": true }));
		let missing = record(4, json!({}));

		assert_eq!(
			resolve(config.clone(), &active),
			CellValue::badge("ACTIVE", Tone::Positive)
		);
		assert_eq!(
			resolve(config.clone(), &blocked),
			CellValue::badge("INACTIVE", Tone::Negative)
		);
		assert_eq!(
			resolve(config.clone(), &flagged),
			CellValue::badge("ACTIVE", Tone::Positive)
		);
		assert_eq!(
			resolve(config, &missing),
			CellValue::badge("INACTIVE", Tone::Negative)
		);
	}

	#[test]
	fn numeric_status_flags_follow_truthiness() {
		let config = ColumnConfig {
			kind: Some("status".into()),
			field: Some("online".into()),
			..ColumnConfig::default()
		};
		let online = record(1, json!({ "online": 1 }));
		let offline = record(2, json!({ "online": 0 }));
		let unset = record(3, json!({ "online": false }));

		assert_eq!(resolve(config.clone(), &online).plain_text(), "ACTIVE");
		assert_eq!(resolve(config.clone(), &offline).plain_text(), "INACTIVE");
		assert_eq!(resolve(config, &unset).plain_text(), "INACTIVE");
	}

	#[test]
	fn status_labels_and_value_are_configurable() {
		let config = ColumnConfig {
			header: Some("KYC".into()),
			kind: Some("status".into()),
			field: Some("kyc".into()),
			active_value: Some("verified".into()),
			active_label: Some("VERIFIED".into()),
			inactive_label: Some("PENDING".into()),
			..ColumnConfig::default()
		};
		let row = record(1, json!({ "kyc": "verified" }));
		assert_eq!(resolve(config, &row).plain_text(), "VERIFIED");
	}

	#[test]
	fn join_columns_skip_missing_parts() {
		let row = record(1, json!({ "first": "Ada", "last": "Lovelace", "city": null }));
		let spaced = ColumnConfig {
			kind: Some("join".into()),
			fields: vec!["first".into(), "last".into()],
			..ColumnConfig::default()
		};
		assert_eq!(resolve(spaced, &row).plain_text(), "Ada Lovelace");

		let separated = ColumnConfig {
			kind: Some("join".into()),
			fields: vec!["last".into(), "city".into(), "first".into()],
			separator: Some(", ".into()),
			..ColumnConfig::default()
		};
		assert_eq!(resolve(separated, &row).plain_text(), "Lovelace, Ada");
	}

	#[test]
	fn link_columns_fill_their_target() {
		let config = ColumnConfig {
			kind: Some("link".into()),
			field: Some("name".into()),
			target: Some("/partners/{id}/edit".into()),
			..ColumnConfig::default()
		};
		let row = record(7, json!({ "id": 7, "name": "Acme Cabs" }));
		assert_eq!(
			resolve(config.clone(), &row),
			CellValue::link("Acme Cabs", "/partners/7/edit")
		);
		assert_eq!(resolve(config, &record(8, json!({}))), CellValue::Empty);
	}

	#[test]
	fn templates_copy_unterminated_braces() {
		let row = record(1, json!({ "id": 1 }));
		assert_eq!(fill_template("/a/{id}/{oops", &row), "/a/1/{oops");
		assert_eq!(fill_template("{missing}-x", &row), "-x");
	}

	#[test]
	fn invalid_entries_are_reported() {
		let unknown = ColumnConfig {
			kind: Some("chart".into()),
			field: Some("x".into()),
			..ColumnConfig::default()
		};
		assert_eq!(
			unknown.validate(),
			Err(ColumnError::UnknownKind("chart".into()))
		);
		assert_eq!(
			ColumnConfig::default().validate(),
			Err(ColumnError::MissingField("field"))
		);
		let join = ColumnConfig {
			kind: Some("join".into()),
			..ColumnConfig::default()
		};
		assert_eq!(join.validate(), Err(ColumnError::MissingFields));
		let link = ColumnConfig {
			kind: Some("link".into()),
			field: Some("name".into()),
			..ColumnConfig::default()
		};
		assert_eq!(link.validate(), Err(ColumnError::MissingTarget));
	}

	#[test]
	fn headers_default_to_readable_field_names() {
		assert_eq!(ColumnConfig::field("first_name").display_header(), "First name");
		assert_eq!(ColumnConfig::field("vehicle.plate").display_header(), "Vehicle plate");
		let join = ColumnConfig {
			fields: vec!["city".into(), "zone".into()],
			..ColumnConfig::default()
		};
		assert_eq!(join.display_header(), "City / Zone");
	}

	#[test]
	fn derived_columns_follow_first_seen_order() {
		let records = vec![
			record(1, json!({ "name": "A", "id": 1 })),
			record(2, json!({ "id": 2, "city": "Pune", "name": "B" })),
		];
		let keys = derive_columns(&records, "id")
			.into_iter()
			.filter_map(|column| column.field)
			.collect::<Vec<_>>();
		assert_eq!(keys, vec!["id", "name", "city"]);
		assert!(derive_columns(&[], "id").is_empty());
	}
}
