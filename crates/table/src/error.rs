use thiserror::Error;

/// Errors raised while assembling a [`TableSpec`](crate::TableSpec).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
	/// A table needs at least one column to render anything.
	#[error("a table needs at least one column")]
	NoColumns,

	/// Pages must hold at least one row.
	#[error("items per page must be greater than zero")]
	ZeroItemsPerPage,
}
