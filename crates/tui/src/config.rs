/// Human-readable labels rendered around a table view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Title rendered on the table border.
	pub title: String,
	/// Placeholder shown in the empty search input.
	pub search_label: String,
	/// Noun used when summarising record counts.
	pub count_label: String,
	/// Who is signed in, appended to the table title when present.
	pub session_label: Option<String>,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self::new("Records", "Type to search", "records")
	}
}

impl UiLabels {
	#[must_use]
	pub fn new(
		title: impl Into<String>,
		search_label: impl Into<String>,
		count_label: impl Into<String>,
	) -> Self {
		Self {
			title: title.into(),
			search_label: search_label.into(),
			count_label: count_label.into(),
			session_label: None,
		}
	}

	#[must_use]
	pub fn with_session_label(mut self, label: impl Into<String>) -> Self {
		self.session_label = Some(label.into());
		self
	}

	/// Title shown on the table border, including the session label.
	#[must_use]
	pub fn table_title(&self) -> String {
		match &self.session_label {
			Some(session) if !session.is_empty() => format!(" {} · {} ", self.title, session),
			_ => format!(" {} ", self.title),
		}
	}
}
