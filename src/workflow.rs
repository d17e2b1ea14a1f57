use anyhow::{Context, Result};
use fleetdesk::dataset::{ColumnConfig, derive_columns};
use fleetdesk::{FileFeed, JsonRecord, load_records};
use fleetdesk_table::{RenderedPage, SearchKeys, TableSpec, TableView};
use fleetdesk_tui::{App, UiLabels, ViewOutcome, style};
use indexmap::IndexSet;

use crate::settings::{ResolvedConfig, TableSettings};

/// Coordinates loading a list and showing it, interactively or as one page.
pub(crate) struct ListWorkflow {
	config: ResolvedConfig,
	records: Vec<JsonRecord>,
	view: TableView<JsonRecord>,
}

impl ListWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let records = load_records(&config.dataset, &config.id_field)
			.with_context(|| format!("failed to load {}", config.dataset.display()))?;
		log::info!(
			"loaded {} rows from {}",
			records.len(),
			config.dataset.display()
		);

		let spec = TableFactory::build(&config.table, &config.id_field, &records)?;
		let view = TableView::new(spec);

		Ok(Self {
			config,
			records,
			view,
		})
	}

	/// Render the requested page without touching the terminal.
	pub(crate) fn render_page(mut self) -> RenderedPage {
		self.view.set_query(self.config.ui.initial_query.clone());
		self.view.render(&self.records);
		self.view.set_page(self.config.ui.initial_page);
		self.view.render(&self.records)
	}

	/// Count label used in summaries, e.g. `riders`.
	pub(crate) fn count_label(&self) -> &str {
		&self.config.ui.count_label
	}

	/// Browse the list until the user accepts a row or cancels.
	pub(crate) fn run_interactive(self) -> Result<ViewOutcome> {
		let app = self.into_app();
		let outcome = fleetdesk_tui::run(app)?;
		log::info!(
			"view closed (accepted: {}, selection: {:?})",
			outcome.accepted,
			outcome.selection
		);
		Ok(outcome)
	}

	fn into_app(self) -> App<'static, JsonRecord> {
		let Self {
			config,
			records,
			view,
		} = self;

		let mut labels = UiLabels::new(
			config.ui.title.clone(),
			config.ui.search_label.clone(),
			config.ui.count_label.clone(),
		);
		if let Some(label) = config.session.label() {
			labels = labels.with_session_label(label);
		}
		let theme = style::by_name(&config.ui.theme_name).unwrap_or_default();
		let feed = FileFeed::new(config.dataset.clone(), config.id_field.clone());

		App::new(records, view)
			.with_labels(labels)
			.with_theme(theme)
			.with_feed(feed)
			.with_initial_query(config.ui.initial_query)
			.with_initial_page(config.ui.initial_page)
	}
}

/// Translates table settings into a [`TableSpec`] for exported rows.
struct TableFactory;

impl TableFactory {
	fn build(
		settings: &TableSettings,
		id_field: &str,
		records: &[JsonRecord],
	) -> Result<TableSpec<JsonRecord>> {
		let configs = Self::column_configs(settings, id_field, records);
		let mut builder = TableSpec::builder().items_per_page(settings.per_page);

		if settings.searchable {
			let keys = match &settings.search_keys {
				Some(keys) => keys.clone(),
				None => Self::default_search_keys(&configs),
			};
			builder = builder.searchable(SearchKeys::new(keys));
		}
		if let Some(message) = &settings.empty_message {
			builder = builder.empty_message(message.clone());
		}
		for config in configs {
			let column = config
				.into_column()
				.context("invalid column configuration")?;
			builder = builder.column(column);
		}

		Ok(builder.build()?)
	}

	fn column_configs(
		settings: &TableSettings,
		id_field: &str,
		records: &[JsonRecord],
	) -> Vec<ColumnConfig> {
		if !settings.columns.is_empty() {
			return settings.columns.clone();
		}
		let derived = derive_columns(records, id_field);
		if derived.is_empty() {
			log::debug!("no fields to derive columns from; showing `{id_field}` only");
			return vec![ColumnConfig::field(id_field)];
		}
		derived
	}

	fn default_search_keys(configs: &[ColumnConfig]) -> Vec<String> {
		configs
			.iter()
			.flat_map(ColumnConfig::referenced_fields)
			.collect::<IndexSet<_>>()
			.into_iter()
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::path::{Path, PathBuf};

	use fleetdesk::Session;
	use fleetdesk::dataset::parse_records;
	use log::LevelFilter;
	use serde_json::json;

	use super::*;
	use crate::settings::{LoggingSettings, UiSettings};

	fn records() -> Vec<JsonRecord> {
		parse_records(
			json!([
				{ "id": 1, "name": "Alice", "city": "Pune", "status": "active" },
				{ "id": 2, "name": "Bob", "city": "Goa", "status": "inactive" },
				{ "id": 3, "name": "Carol", "city": "Agra", "status": "active" },
			]),
			"id",
		)
		.expect("records")
	}

	fn settings() -> TableSettings {
		TableSettings {
			per_page: 2,
			searchable: true,
			search_keys: None,
			empty_message: None,
			columns: Vec::new(),
		}
	}

	#[test]
	fn columns_are_derived_when_none_are_configured() {
		let spec = TableFactory::build(&settings(), "id", &records()).expect("spec");
		let headers = spec.headers().collect::<Vec<_>>();
		assert_eq!(headers, vec!["Id", "Name", "City", "Status"]);
		assert_eq!(
			spec.search_keys().expect("searchable").as_slice(),
			["id", "name", "city", "status"]
		);
	}

	#[test]
	fn configured_columns_drive_search_keys() {
		let mut settings = settings();
		settings.columns = vec![
			ColumnConfig::field("name"),
			ColumnConfig {
				kind: Some("status".into()),
				field: Some("status".into()),
				..ColumnConfig::default()
			},
		];
		let spec = TableFactory::build(&settings, "id", &records()).expect("spec");
		assert_eq!(
			spec.search_keys().expect("searchable").as_slice(),
			["name", "status"]
		);

		let mut view = TableView::new(spec);
		view.set_query("car");
		let page = view.render(&records());
		assert_eq!(page.column_texts(0), vec!["Carol".to_string()]);
		assert_eq!(page.column_texts(1), vec!["ACTIVE".to_string()]);
	}

	#[test]
	fn disabled_search_ignores_the_query() {
		let mut settings = settings();
		settings.searchable = false;
		let spec = TableFactory::build(&settings, "id", &records()).expect("spec");
		assert!(spec.search_keys().is_none());

		let mut view = TableView::new(spec);
		view.set_query("zzz");
		assert_eq!(view.render(&records()).filtered_count, 3);
	}

	#[test]
	fn empty_datasets_still_build_a_table() {
		let spec = TableFactory::build(&settings(), "id", &[]).expect("spec");
		assert_eq!(spec.headers().collect::<Vec<_>>(), vec!["Id"]);
	}

	fn config(dataset: &Path, query: &str, page: usize) -> ResolvedConfig {
		ResolvedConfig {
			dataset: dataset.to_path_buf(),
			id_field: "id".into(),
			table: settings(),
			ui: UiSettings {
				title: "Riders".into(),
				initial_query: query.into(),
				initial_page: page,
				theme_name: "slate".into(),
				search_label: "Type to search".into(),
				count_label: "riders".into(),
			},
			session: Session::default(),
			logging: LoggingSettings {
				level: LevelFilter::Info,
				file: PathBuf::from("fleetdesk.log"),
			},
		}
	}

	fn write_riders(dir: &Path) -> PathBuf {
		let path = dir.join("riders.json");
		let rows = json!([
			{ "id": 1, "name": "Alice" },
			{ "id": 2, "name": "Bob" },
			{ "id": 3, "name": "Carol" },
			{ "id": 4, "name": "Dana" },
			{ "id": 5, "name": "Ravi" },
		]);
		fs::write(&path, rows.to_string()).expect("write dataset");
		path
	}

	#[test]
	fn headless_pages_honour_the_initial_query_and_page() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = write_riders(dir.path());

		let workflow = ListWorkflow::from_config(config(&path, "a", 2)).expect("workflow");
		let page = workflow.render_page();
		assert_eq!(page.filtered_count, 4);
		assert_eq!(page.page, 2);
		assert_eq!(page.column_texts(1), vec!["Dana".to_string(), "Ravi".to_string()]);
	}

	#[test]
	fn interactive_app_starts_on_the_configured_query_and_page() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = write_riders(dir.path());

		let workflow = ListWorkflow::from_config(config(&path, "a", 9)).expect("workflow");
		let app = workflow.into_app();
		assert_eq!(app.search_input.text(), "a");
		assert_eq!(app.view.query(), "a");
		assert_eq!(app.view.current_page(), 2);
		assert_eq!(app.labels().title, "Riders");
	}
}
