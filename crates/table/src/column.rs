//! Column specifications and the accessors that derive cell values.

use std::fmt;

use serde::Deserialize;

use crate::types::{CellValue, Record};

/// Derives the content of one cell from a row.
///
/// A column either reads a named field ([`FieldAccessor`]) or computes its
/// value from the whole row ([`ComputedAccessor`]).
pub trait Accessor<T>: Send + Sync {
	fn resolve(&self, row: &T) -> CellValue;

	/// Field this accessor reads, when it is a direct lookup.
	fn field_key(&self) -> Option<&str> {
		None
	}
}

/// Direct lookup of a named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAccessor {
	key: String,
}

impl FieldAccessor {
	pub fn new(key: impl Into<String>) -> Self {
		Self { key: key.into() }
	}

	#[must_use]
	pub fn key(&self) -> &str {
		&self.key
	}
}

impl<T: Record> Accessor<T> for FieldAccessor {
	fn resolve(&self, row: &T) -> CellValue {
		row.field(&self.key).into()
	}

	fn field_key(&self) -> Option<&str> {
		Some(&self.key)
	}
}

/// Cell value computed by a caller-supplied function.
pub struct ComputedAccessor<F> {
	compute: F,
}

impl<F> ComputedAccessor<F> {
	pub fn new(compute: F) -> Self {
		Self { compute }
	}
}

impl<T, F> Accessor<T> for ComputedAccessor<F>
where
	F: Fn(&T) -> CellValue + Send + Sync,
{
	fn resolve(&self, row: &T) -> CellValue {
		(self.compute)(row)
	}
}

/// Layout hint for front-ends. The pure table layer ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnWidth {
	/// Let the renderer pick a width from the header and contents.
	#[default]
	Auto,
	/// Exactly this many terminal columns.
	Fixed(u16),
	/// Share leftover space proportionally to the weight.
	Fill(u16),
}

/// One column of a table: a header and the accessor that fills its cells.
pub struct Column<T> {
	header: String,
	accessor: Box<dyn Accessor<T>>,
	width: ColumnWidth,
}

impl<T: Record> Column<T> {
	/// Column showing the raw value of `key`.
	pub fn field(header: impl Into<String>, key: impl Into<String>) -> Self {
		Self::with_accessor(header, FieldAccessor::new(key))
	}
}

impl<T> Column<T> {
	/// Column whose cells are computed from the whole row.
	pub fn computed<F>(header: impl Into<String>, compute: F) -> Self
	where
		F: Fn(&T) -> CellValue + Send + Sync + 'static,
	{
		Self::with_accessor(header, ComputedAccessor::new(compute))
	}

	pub fn with_accessor(header: impl Into<String>, accessor: impl Accessor<T> + 'static) -> Self {
		Self {
			header: header.into(),
			accessor: Box::new(accessor),
			width: ColumnWidth::Auto,
		}
	}

	#[must_use]
	pub fn width(mut self, width: ColumnWidth) -> Self {
		self.width = width;
		self
	}

	#[must_use]
	pub fn header(&self) -> &str {
		&self.header
	}

	#[must_use]
	pub fn width_hint(&self) -> ColumnWidth {
		self.width
	}

	#[must_use]
	pub fn field_key(&self) -> Option<&str> {
		self.accessor.field_key()
	}

	pub fn resolve(&self, row: &T) -> CellValue {
		self.accessor.resolve(row)
	}
}

impl<T> fmt::Debug for Column<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Column")
			.field("header", &self.header)
			.field("field", &self.field_key())
			.field("width", &self.width)
			.finish()
	}
}
