//! Exported lists as table rows.
//!
//! A dataset is the JSON a list endpoint returns, saved to a file: either a
//! bare array of objects or an envelope holding one. Each object becomes a
//! [`JsonRecord`]; columns come from configuration or are derived from the
//! fields present.

mod columns;
mod error;
mod feed;
mod load;
mod record;

pub use columns::{
	COLUMN_KINDS, ColumnConfig, ColumnError, DEFAULT_ACTIVE_LABEL, DEFAULT_ACTIVE_VALUE,
	DEFAULT_INACTIVE_LABEL, derive_columns, fill_template, humanize,
};
pub use error::DatasetError;
pub use feed::FileFeed;
pub use load::{ENVELOPE_KEYS, load_records, parse_records};
pub use record::JsonRecord;

/// Field holding the row identity when nothing else is configured.
pub const DEFAULT_ID_FIELD: &str = "id";
