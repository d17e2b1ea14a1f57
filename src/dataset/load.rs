use std::collections::HashSet;
use std::fs;
use std::path::Path;

use fleetdesk_table::RowId;
use serde_json::Value;

use super::{DatasetError, JsonRecord};

/// Keys under which REST envelopes carry the list.
pub const ENVELOPE_KEYS: [&str; 4] = ["data", "items", "results", "records"];

/// Read an exported list from `path`.
pub fn load_records(path: &Path, id_field: &str) -> Result<Vec<JsonRecord>, DatasetError> {
	let text = fs::read_to_string(path).map_err(|source| DatasetError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	let value: Value = serde_json::from_str(&text).map_err(|source| DatasetError::Parse {
		path: path.to_path_buf(),
		source,
	})?;
	let records = parse_records(value, id_field)?;
	log::debug!("read {} rows from {}", records.len(), path.display());
	Ok(records)
}

/// Turn a parsed document into rows with stable, unique ids.
///
/// Rows lacking `id_field` are keyed `#<position>` once every explicit id is
/// known, so they never collide with ids the data carries itself.
pub fn parse_records(value: Value, id_field: &str) -> Result<Vec<JsonRecord>, DatasetError> {
	let rows = unwrap_envelope(value)?;
	let mut seen = HashSet::with_capacity(rows.len());
	let mut pending = Vec::with_capacity(rows.len());

	for (index, row) in rows.into_iter().enumerate() {
		let Value::Object(fields) = row else {
			return Err(DatasetError::NotAnObject { index });
		};
		let id = match fields.get(id_field) {
			None | Some(Value::Null) => None,
			Some(value) => {
				let id = row_id(value).ok_or_else(|| DatasetError::InvalidId {
					index,
					field: id_field.to_string(),
					value: value.to_string(),
				})?;
				if !seen.insert(id.clone()) {
					return Err(DatasetError::DuplicateId { index, id });
				}
				Some(id)
			}
		};
		pending.push((id, fields));
	}

	let mut positional = 0usize;
	let records: Vec<JsonRecord> = pending
		.into_iter()
		.enumerate()
		.map(|(index, (id, fields))| {
			let id = id.unwrap_or_else(|| {
				positional += 1;
				positional_id(index, &mut seen)
			});
			JsonRecord::new(id, fields)
		})
		.collect();

	if positional > 0 {
		log::warn!("{positional} rows have no `{id_field}` field; using their position as id");
	}
	Ok(records)
}

fn positional_id(index: usize, taken: &mut HashSet<RowId>) -> RowId {
	let mut id = RowId::Key(format!("#{index}"));
	let mut suffix = 1;
	while !taken.insert(id.clone()) {
		id = RowId::Key(format!("#{index}.{suffix}"));
		suffix += 1;
	}
	id
}

fn unwrap_envelope(value: Value) -> Result<Vec<Value>, DatasetError> {
	match value {
		Value::Array(rows) => Ok(rows),
		Value::Object(mut map) => ENVELOPE_KEYS
			.iter()
			.find_map(|key| match map.remove(*key) {
				Some(Value::Array(rows)) => Some(rows),
				_ => None,
			})
			.ok_or(DatasetError::Shape),
		_ => Err(DatasetError::Shape),
	}
}

fn row_id(value: &Value) -> Option<RowId> {
	match value {
		Value::Number(number) => number.as_i64().map(RowId::Number),
		Value::String(text) if !text.is_empty() => Some(RowId::Key(text.clone())),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use serde_json::json;

	use super::*;

	#[test]
	fn bare_arrays_and_envelopes_are_accepted() {
		let rows = json!([{ "id": 1, "name": "Alice" }, { "id": 2, "name": "Bob" }]);
		assert_eq!(parse_records(rows.clone(), "id").expect("array").len(), 2);

		for key in ENVELOPE_KEYS {
			let envelope = json!({ "status": "ok", key: rows.clone() });
			let records = parse_records(envelope, "id").expect("envelope");
			assert_eq!(records[1].id, RowId::Number(2));
		}
	}

	#[test]
	fn unexpected_shapes_are_rejected() {
		assert!(matches!(
			parse_records(json!({ "rows": [] }), "id"),
			Err(DatasetError::Shape)
		));
		assert!(matches!(parse_records(json!("text"), "id"), Err(DatasetError::Shape)));
		assert!(matches!(
			parse_records(json!([{ "id": 1 }, 7]), "id"),
			Err(DatasetError::NotAnObject { index: 1 })
		));
	}

	#[test]
	fn string_ids_are_kept_as_keys() {
		let records = parse_records(json!([{ "uuid": "a-1" }]), "uuid").expect("records");
		assert_eq!(records[0].id, RowId::Key("a-1".into()));
	}

	#[test]
	fn missing_ids_fall_back_to_position() {
		let records = parse_records(json!([{ "name": "A" }, { "id": null, "name": "B" }]), "id")
			.expect("records");
		assert_eq!(records[0].id, RowId::Key("#0".into()));
		assert_eq!(records[1].id, RowId::Key("#1".into()));
	}

	#[test]
	fn positional_ids_never_clash_with_explicit_ones() {
		let records = parse_records(json!([{ "name": "A" }, { "id": 0, "name": "B" }]), "id")
			.expect("records");
		assert_eq!(records[0].id, RowId::Key("#0".into()));
		assert_eq!(records[1].id, RowId::Number(0));

		let records = parse_records(json!([{ "name": "A" }, { "id": "#0" }]), "id").expect("records");
		assert_eq!(records[0].id, RowId::Key("#0.1".into()));
		assert_eq!(records[1].id, RowId::Key("#0".into()));
	}

	#[test]
	fn duplicate_ids_are_rejected() {
		let err = parse_records(json!([{ "id": 5 }, { "id": 6 }, { "id": 5 }]), "id").unwrap_err();
		match err {
			DatasetError::DuplicateId { index, id } => {
				assert_eq!(index, 2);
				assert_eq!(id, RowId::Number(5));
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn unusable_ids_are_rejected() {
		let err = parse_records(json!([{ "id": 1.5 }]), "id").unwrap_err();
		assert!(matches!(err, DatasetError::InvalidId { index: 0, .. }));
		assert!(err.to_string().contains("1.5"));
	}

	#[test]
	fn load_reads_files_and_reports_errors() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("riders.json");
		let mut file = fs::File::create(&path).expect("create");
		write!(file, r#"{{"data": [{{"id": 1, "name": "Alice"}}]}}"#).expect("write");

		let records = load_records(&path, "id").expect("load");
		assert_eq!(records.len(), 1);

		let missing = load_records(&dir.path().join("missing.json"), "id").unwrap_err();
		assert!(matches!(missing, DatasetError::Io { .. }));

		fs::write(&path, "{ not json").expect("write");
		assert!(matches!(load_records(&path, "id"), Err(DatasetError::Parse { .. })));
	}
}
