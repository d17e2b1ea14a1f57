use std::path::PathBuf;

use fleetdesk_table::RowId;
use thiserror::Error;

/// Failures while turning an exported list into table rows.
#[derive(Debug, Error)]
pub enum DatasetError {
	#[error("failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse {path}: {source}")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
	#[error("expected a JSON array or an object with a `data`, `items`, `results` or `records` array")]
	Shape,
	#[error("row {index} is not a JSON object")]
	NotAnObject { index: usize },
	#[error("row {index} has an unusable `{field}` value: {value}")]
	InvalidId {
		index: usize,
		field: String,
		value: String,
	},
	#[error("row {index} repeats id {id}")]
	DuplicateId { index: usize, id: RowId },
}
