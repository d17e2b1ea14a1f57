//! Searchable, paginated table view over caller-owned records.
//!
//! A [`TableView`] pairs a [`TableSpec`] (columns, search keys, page size)
//! with the local search and page state of one on-screen table. Rows are any
//! type implementing [`Record`]; they are borrowed on every render and never
//! modified. Rendering is synchronous and infallible and yields a
//! [`RenderedPage`] that front-ends draw however they like.

pub mod column;
pub mod error;
pub mod pagination;
pub mod search;
pub mod sequence;
pub mod types;
pub mod view;

pub use column::{Accessor, Column, ColumnWidth, ComputedAccessor, FieldAccessor};
pub use error::TableError;
pub use pagination::{DEFAULT_ITEMS_PER_PAGE, PageState, page_range, total_pages};
pub use search::{Needle, SearchKeys};
pub use sequence::{RequestSequence, RequestTicket};
pub use types::{CellValue, FieldValue, Record, RowId, Tone};
pub use view::{
	DEFAULT_EMPTY_MESSAGE, PageBody, RenderedPage, RenderedRow, TableSpec, TableSpecBuilder,
	TableView,
};
