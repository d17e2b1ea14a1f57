//! Sequencing of caller-side fetches so stale responses can be dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Issues monotonically increasing request tickets.
///
/// Only the most recently issued ticket is current. A response that arrives
/// for an older ticket must be discarded before it reaches the table.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
	latest: Arc<AtomicU64>,
}

/// Identifies one issued request. Cheap to clone and safe to send to the
/// thread performing the fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
	#[must_use]
	pub fn id(self) -> u64 {
		self.0
	}
}

impl RequestSequence {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Start a new request, superseding every earlier ticket.
	pub fn issue(&self) -> RequestTicket {
		RequestTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
	}

	#[must_use]
	pub fn is_current(&self, ticket: RequestTicket) -> bool {
		self.latest.load(Ordering::Acquire) == ticket.0
	}

	/// Whether any request has been issued yet.
	#[must_use]
	pub fn has_issued(&self) -> bool {
		self.latest.load(Ordering::Acquire) > 0
	}
}
