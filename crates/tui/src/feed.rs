//! Fetch boundary between a table host and whatever produces its rows.

use anyhow::Result;

/// Produces a fresh, complete dataset on demand.
///
/// Feeds are invoked on a background thread: once when the host starts and
/// again on every explicit refresh. Each successful fetch replaces the
/// previous dataset wholesale.
pub trait DataFeed<T>: Send + Sync + 'static {
	/// Fetch the full dataset.
	///
	/// # Errors
	///
	/// Any failure is reported to the user; the host keeps showing the last
	/// dataset it received.
	fn fetch(&self) -> Result<Vec<T>>;

	/// Short description of the source, used in log records.
	fn describe(&self) -> String {
		"data feed".to_string()
	}
}

impl<T, F> DataFeed<T> for F
where
	F: Fn() -> Result<Vec<T>> + Send + Sync + 'static,
{
	fn fetch(&self) -> Result<Vec<T>> {
		self()
	}
}
