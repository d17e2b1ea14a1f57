//! The table view: search, pagination and cell resolution over borrowed rows.

use std::num::NonZeroUsize;

use serde::Serialize;

use crate::column::Column;
use crate::error::TableError;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, PageState};
use crate::search::{self, SearchKeys};
use crate::types::{CellValue, Record, RowId};

/// Message shown in place of the body when no row survives the search.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No records found";

/// Immutable description of a table: columns, search keys and page size.
#[derive(Debug)]
pub struct TableSpec<T> {
	columns: Vec<Column<T>>,
	search: Option<SearchKeys>,
	items_per_page: NonZeroUsize,
	empty_message: String,
}

impl<T> TableSpec<T> {
	#[must_use]
	pub fn builder() -> TableSpecBuilder<T> {
		TableSpecBuilder::default()
	}

	#[must_use]
	pub fn columns(&self) -> &[Column<T>] {
		&self.columns
	}

	#[must_use]
	pub fn search_keys(&self) -> Option<&SearchKeys> {
		self.search.as_ref()
	}

	#[must_use]
	pub fn items_per_page(&self) -> NonZeroUsize {
		self.items_per_page
	}

	#[must_use]
	pub fn empty_message(&self) -> &str {
		&self.empty_message
	}

	pub fn headers(&self) -> impl Iterator<Item = &str> {
		self.columns.iter().map(Column::header)
	}
}

/// Builder for [`TableSpec`].
pub struct TableSpecBuilder<T> {
	columns: Vec<Column<T>>,
	search: Option<SearchKeys>,
	items_per_page: usize,
	empty_message: String,
}

impl<T> Default for TableSpecBuilder<T> {
	fn default() -> Self {
		Self {
			columns: Vec::new(),
			search: None,
			items_per_page: DEFAULT_ITEMS_PER_PAGE.get(),
			empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
		}
	}
}

impl<T> TableSpecBuilder<T> {
	#[must_use]
	pub fn column(mut self, column: Column<T>) -> Self {
		self.columns.push(column);
		self
	}

	#[must_use]
	pub fn columns(mut self, columns: impl IntoIterator<Item = Column<T>>) -> Self {
		self.columns.extend(columns);
		self
	}

	/// Enable search over the given fields.
	#[must_use]
	pub fn searchable(mut self, keys: SearchKeys) -> Self {
		self.search = Some(keys);
		self
	}

	#[must_use]
	pub fn items_per_page(mut self, items_per_page: usize) -> Self {
		self.items_per_page = items_per_page;
		self
	}

	#[must_use]
	pub fn empty_message(mut self, message: impl Into<String>) -> Self {
		self.empty_message = message.into();
		self
	}

	/// Validate and freeze the description.
	///
	/// # Errors
	///
	/// Returns [`TableError::NoColumns`] when no column was added and
	/// [`TableError::ZeroItemsPerPage`] for a zero page size.
	pub fn build(self) -> Result<TableSpec<T>, TableError> {
		if self.columns.is_empty() {
			return Err(TableError::NoColumns);
		}
		let items_per_page =
			NonZeroUsize::new(self.items_per_page).ok_or(TableError::ZeroItemsPerPage)?;
		if self.search.as_ref().is_some_and(SearchKeys::is_empty) {
			log::warn!("table is searchable but has no search keys; non-empty queries match nothing");
		}
		Ok(TableSpec {
			columns: self.columns,
			search: self.search,
			items_per_page,
			empty_message: self.empty_message,
		})
	}
}

/// One visible row with its resolved cells, in column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedRow {
	pub id: RowId,
	pub cells: Vec<CellValue>,
}

impl RenderedRow {
	/// Plain text of every cell.
	#[must_use]
	pub fn texts(&self) -> Vec<String> {
		self.cells.iter().map(CellValue::plain_text).collect()
	}
}

/// Body of a rendered page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageBody {
	Rows { rows: Vec<RenderedRow> },
	/// Single message row spanning `span` columns.
	Empty { message: String, span: usize },
}

/// Everything a front-end needs to draw the current page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPage {
	pub headers: Vec<String>,
	pub body: PageBody,
	/// Current page, 1-based and already clamped.
	pub page: usize,
	pub total_pages: usize,
	pub filtered_count: usize,
	pub total_count: usize,
	pub items_per_page: usize,
}

impl RenderedPage {
	/// Visible rows, empty when the body shows the empty-state message.
	#[must_use]
	pub fn rows(&self) -> &[RenderedRow] {
		match &self.body {
			PageBody::Rows { rows } => rows,
			PageBody::Empty { .. } => &[],
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		matches!(self.body, PageBody::Empty { .. })
	}

	/// Plain text of the cell at `column` on every visible row.
	#[must_use]
	pub fn column_texts(&self, column: usize) -> Vec<String> {
		self.rows()
			.iter()
			.filter_map(|row| row.cells.get(column).map(CellValue::plain_text))
			.collect()
	}

	/// 1-based index of the first visible row within the filtered set.
	#[must_use]
	pub fn first_row_number(&self) -> usize {
		if self.is_empty() {
			0
		} else {
			(self.page - 1) * self.items_per_page + 1
		}
	}
}

/// A searchable, paginated view over a caller-owned dataset.
///
/// The view owns only its local state (the query and the current page). The
/// rows are borrowed on every call and never modified, so a caller can swap
/// in a freshly fetched dataset at any time; the next [`render`] re-derives
/// the filtered set and re-clamps the page.
///
/// [`render`]: TableView::render
#[derive(Debug)]
pub struct TableView<T> {
	spec: TableSpec<T>,
	query: String,
	page: PageState,
	last_filtered: usize,
}

impl<T: Record> TableView<T> {
	#[must_use]
	pub fn new(spec: TableSpec<T>) -> Self {
		let page = PageState::new(spec.items_per_page());
		Self {
			spec,
			query: String::new(),
			page,
			last_filtered: 0,
		}
	}

	#[must_use]
	pub fn spec(&self) -> &TableSpec<T> {
		&self.spec
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn is_searchable(&self) -> bool {
		self.spec.search.is_some()
	}

	/// Replace the search text. The page is re-clamped on the next render.
	pub fn set_query(&mut self, query: impl Into<String>) {
		self.query = query.into();
	}

	/// Current page as of the last render or page move.
	#[must_use]
	pub fn current_page(&self) -> usize {
		self.page.current()
	}

	/// Page count as of the last render.
	#[must_use]
	pub fn total_pages(&self) -> usize {
		self.page.total_pages(self.last_filtered)
	}

	/// Jump to `page`, clamped against the last rendered row count.
	pub fn set_page(&mut self, page: usize) {
		self.page.set(page);
		self.page.clamp(self.last_filtered);
	}

	pub fn next_page(&mut self) {
		self.set_page(self.page.current().saturating_add(1));
	}

	pub fn previous_page(&mut self) {
		self.set_page(self.page.current().saturating_sub(1));
	}

	pub fn first_page(&mut self) {
		self.set_page(1);
	}

	pub fn last_page(&mut self) {
		self.set_page(self.total_pages());
	}

	/// Rows of `data` matching the current query, in dataset order.
	pub fn filter<'d>(&self, data: &'d [T]) -> Vec<&'d T> {
		search::filter(data, self.spec.search.as_ref(), &self.query)
	}

	/// Derive the visible page for `data`.
	///
	/// Filtering runs on every call; when the filtered set shrank below the
	/// current page the page is pulled back before slicing.
	pub fn render(&mut self, data: &[T]) -> RenderedPage {
		let filtered = self.filter(data);
		self.last_filtered = filtered.len();
		if self.page.clamp(filtered.len()) {
			log::debug!(
				"clamped table page to {} of {}",
				self.page.current(),
				self.page.total_pages(filtered.len())
			);
		}

		let headers = self.spec.headers().map(str::to_string).collect::<Vec<_>>();
		let body = if filtered.is_empty() {
			PageBody::Empty {
				message: self.spec.empty_message.clone(),
				span: self.spec.columns.len(),
			}
		} else {
			let rows = filtered[self.page.range(filtered.len())]
				.iter()
				.map(|row| self.render_row(row))
				.collect();
			PageBody::Rows { rows }
		};

		RenderedPage {
			headers,
			body,
			page: self.page.current(),
			total_pages: self.page.total_pages(filtered.len()),
			filtered_count: filtered.len(),
			total_count: data.len(),
			items_per_page: self.page.per_page().get(),
		}
	}

	fn render_row(&self, row: &T) -> RenderedRow {
		RenderedRow {
			id: row.row_id(),
			cells: self
				.spec
				.columns
				.iter()
				.map(|column| column.resolve(row))
				.collect(),
		}
	}
}
