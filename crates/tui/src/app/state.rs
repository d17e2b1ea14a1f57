//! Core state container for the interactive table host.
//!
//! [`App`] bundles the caller's dataset, the [`TableView`] that pages and
//! filters it, and the UI state around it.

use std::sync::Arc;

use fleetdesk_table::{Record, RenderedPage, RowId, TableView};
use serde::Serialize;
use throbber_widgets_tui::ThrobberState;

use super::fetch::FetchState;
use super::results::ResultsState;
use crate::components::prompt::query_style;
use crate::config::UiLabels;
use crate::feed::DataFeed;
use crate::input::QueryInput;
use crate::style::{StyleConfig, Theme};

/// How the user left the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewOutcome {
	/// `true` when a row was accepted with Enter.
	pub accepted: bool,
	/// Search text at exit.
	pub query: String,
	/// Page shown at exit.
	pub page: usize,
	/// Identity of the highlighted row, if any row was visible.
	pub selection: Option<RowId>,
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a, T> {
	/// Rows currently shown. Replaced wholesale on every successful fetch.
	pub data: Vec<T>,
	/// Search and page state for the table.
	pub view: TableView<T>,
	/// Text input widget for the search filter.
	pub search_input: QueryInput<'a>,
	pub(crate) ui: UiLabels,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) fetch: FetchState<T>,
	pub(crate) results: ResultsState,
}

impl<'a, T: Record + Send + 'static> App<'a, T> {
	/// Construct an [`App`] over an already loaded dataset.
	pub fn new(data: Vec<T>, view: TableView<T>) -> Self {
		let style = StyleConfig::default();
		let mut search_input = QueryInput::new(view.query().to_string());
		search_input.set_style(query_style(&style.theme));

		Self {
			data,
			view,
			search_input,
			ui: UiLabels::default(),
			style,
			throbber_state: ThrobberState::default(),
			fetch: FetchState::default(),
			results: ResultsState::default(),
		}
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.ui = labels;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.search_input.set_style(query_style(&theme));
		self.style = StyleConfig::with_theme(theme);
		self
	}

	/// Attach a feed that is fetched on start-up and on every refresh.
	#[must_use]
	pub fn with_feed(mut self, feed: impl DataFeed<T>) -> Self {
		self.fetch.set_feed(Arc::new(feed));
		self
	}

	/// Seed the search box and the view with `query`.
	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		let query = query.into();
		self.search_input.set_text(query.clone());
		self.view.set_query(query);
		self
	}

	/// Open on `page`, clamped against the rows matching the current query.
	#[must_use]
	pub fn with_initial_page(mut self, page: usize) -> Self {
		self.view.render(&self.data);
		self.view.set_page(page);
		self
	}

	/// Labels rendered around the table.
	#[must_use]
	pub fn labels(&self) -> &UiLabels {
		&self.ui
	}

	/// Swap in a new dataset. Search text and page survive; the page is
	/// re-clamped on the next draw.
	pub fn replace_data(&mut self, data: Vec<T>) {
		self.data = data;
		self.results.ensure_selection();
	}

	/// Whether a fetch is in flight.
	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.fetch.is_loading()
	}

	/// Message of the last failed fetch, cleared by the next success.
	#[must_use]
	pub fn last_error(&self) -> Option<&str> {
		self.fetch.error()
	}

	/// Page produced by the most recent draw.
	#[must_use]
	pub fn last_page(&self) -> Option<&RenderedPage> {
		self.results.page.as_ref()
	}

	/// Identity of the highlighted row on the last drawn page.
	#[must_use]
	pub fn selected_id(&self) -> Option<RowId> {
		self.results.selected_id()
	}

	pub(crate) fn outcome(&self, accepted: bool) -> ViewOutcome {
		ViewOutcome {
			accepted,
			query: self.search_input.text().to_string(),
			page: self.view.current_page(),
			selection: self.selected_id(),
		}
	}

	pub(crate) fn apply_query_change(&mut self) {
		self.view.set_query(self.search_input.text());
		self.results.reset_selection();
	}

	pub(crate) fn move_selection_up(&mut self) {
		self.results.move_up();
	}

	pub(crate) fn move_selection_down(&mut self) {
		self.results.move_down();
	}
}
