//! Background fetches and stale-response handling.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use anyhow::Result;
use fleetdesk_table::{Record, RequestSequence, RequestTicket};

use super::App;
use crate::feed::DataFeed;

/// Response of one fetch, tagged with the ticket it was issued under.
pub(crate) struct FetchResult<T> {
	pub ticket: RequestTicket,
	pub result: Result<Vec<T>>,
}

pub(crate) struct FetchState<T> {
	feed: Option<Arc<dyn DataFeed<T>>>,
	sequence: RequestSequence,
	tx: Sender<FetchResult<T>>,
	rx: Receiver<FetchResult<T>>,
	pending: Option<RequestTicket>,
	error: Option<String>,
}

impl<T> Default for FetchState<T> {
	fn default() -> Self {
		let (tx, rx) = mpsc::channel();
		Self {
			feed: None,
			sequence: RequestSequence::new(),
			tx,
			rx,
			pending: None,
			error: None,
		}
	}
}

impl<T> FetchState<T> {
	pub fn set_feed(&mut self, feed: Arc<dyn DataFeed<T>>) {
		self.feed = Some(feed);
	}

	pub fn has_feed(&self) -> bool {
		self.feed.is_some()
	}

	pub fn has_issued(&self) -> bool {
		self.sequence.has_issued()
	}

	pub fn is_loading(&self) -> bool {
		self.pending.is_some()
	}

	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}
}

impl<'a, T: Record + Send + 'static> App<'a, T> {
	/// Start a fetch on a background thread, superseding any fetch in flight.
	pub fn request_refresh(&mut self) {
		let Some(feed) = self.fetch.feed.clone() else {
			log::debug!("refresh requested without a data feed");
			return;
		};
		let ticket = self.fetch.sequence.issue();
		self.fetch.pending = Some(ticket);
		log::debug!("fetching from {} (request {})", feed.describe(), ticket.id());

		let tx = self.fetch.tx.clone();
		thread::spawn(move || {
			let result = feed.fetch();
			let _ = tx.send(FetchResult { ticket, result });
		});
	}

	/// Apply every fetch response that has arrived since the last frame.
	pub(crate) fn pump_fetch_results(&mut self) {
		loop {
			match self.fetch.rx.try_recv() {
				Ok(result) => self.handle_fetch_result(result),
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			}
		}
	}

	pub(crate) fn handle_fetch_result(&mut self, response: FetchResult<T>) {
		if !self.fetch.sequence.is_current(response.ticket) {
			log::debug!("discarding stale response for request {}", response.ticket.id());
			return;
		}
		self.fetch.pending = None;

		match response.result {
			Ok(rows) => {
				log::info!("loaded {} rows", rows.len());
				self.fetch.error = None;
				self.replace_data(rows);
			}
			Err(err) => {
				log::warn!("fetch failed: {err:#}");
				self.fetch.error = Some(format!("fetch failed: {err}"));
			}
		}
	}

	/// Issue the first fetch if a feed is attached and nothing ran yet.
	pub(crate) fn hydrate(&mut self) {
		if self.fetch.has_feed() && !self.fetch.has_issued() {
			self.request_refresh();
		}
	}
}
