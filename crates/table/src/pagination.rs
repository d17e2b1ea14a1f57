//! Page arithmetic for the filtered row set.

use std::num::NonZeroUsize;
use std::ops::Range;

/// Rows shown per page when the caller does not choose.
pub const DEFAULT_ITEMS_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(10) {
	Some(value) => value,
	None => unreachable!(),
};

/// Number of pages needed for `len` rows. Never less than one.
#[must_use]
pub fn total_pages(len: usize, per_page: NonZeroUsize) -> usize {
	len.div_ceil(per_page.get()).max(1)
}

/// Index range of the rows on `page` (1-based), clipped to `len`.
#[must_use]
pub fn page_range(page: usize, per_page: NonZeroUsize, len: usize) -> Range<usize> {
	let page = page.max(1);
	let start = (page - 1).saturating_mul(per_page.get()).min(len);
	let end = page.saturating_mul(per_page.get()).min(len);
	start..end
}

/// Current page and page size of one table instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
	current: usize,
	per_page: NonZeroUsize,
}

impl PageState {
	#[must_use]
	pub fn new(per_page: NonZeroUsize) -> Self {
		Self {
			current: 1,
			per_page,
		}
	}

	#[must_use]
	pub fn current(&self) -> usize {
		self.current
	}

	#[must_use]
	pub fn per_page(&self) -> NonZeroUsize {
		self.per_page
	}

	/// Request a page. Zero is treated as the first page; the upper bound is
	/// enforced by [`PageState::clamp`].
	pub fn set(&mut self, page: usize) {
		self.current = page.max(1);
	}

	/// Pull the current page into `1..=total_pages(len)`.
	///
	/// Returns `true` when the page moved.
	pub fn clamp(&mut self, len: usize) -> bool {
		let last = total_pages(len, self.per_page);
		let clamped = self.current.clamp(1, last);
		let moved = clamped != self.current;
		self.current = clamped;
		moved
	}

	#[must_use]
	pub fn total_pages(&self, len: usize) -> usize {
		total_pages(len, self.per_page)
	}

	#[must_use]
	pub fn range(&self, len: usize) -> Range<usize> {
		page_range(self.current, self.per_page, len)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn per_page(value: usize) -> NonZeroUsize {
		NonZeroUsize::new(value).unwrap()
	}

	#[test]
	fn total_pages_rounds_up_and_never_drops_below_one() {
		assert_eq!(total_pages(0, per_page(10)), 1);
		assert_eq!(total_pages(10, per_page(10)), 1);
		assert_eq!(total_pages(11, per_page(10)), 2);
		assert_eq!(total_pages(3, per_page(2)), 2);
	}

	#[test]
	fn page_ranges_cover_full_and_partial_pages() {
		assert_eq!(page_range(1, per_page(2), 3), 0..2);
		assert_eq!(page_range(2, per_page(2), 3), 2..3);
		assert_eq!(page_range(3, per_page(2), 3), 3..3);
		assert_eq!(page_range(0, per_page(2), 3), 0..2);
	}

	#[test]
	fn page_sizes_follow_the_last_page_rule() {
		for len in 0..40 {
			for size in 1..7 {
				let size = per_page(size);
				let pages = total_pages(len, size);
				for page in 1..=pages {
					let shown = page_range(page, size, len).len();
					if page < pages {
						assert_eq!(shown, size.get());
					} else {
						let expected = len.saturating_sub((page - 1) * size.get()).min(size.get());
						assert_eq!(shown, expected);
					}
				}
			}
		}
	}

	#[test]
	fn clamp_pulls_stale_pages_back() {
		let mut state = PageState::new(per_page(10));
		state.set(5);
		assert!(state.clamp(15));
		assert_eq!(state.current(), 2);
		assert!(!state.clamp(15));
		assert!(state.clamp(0));
		assert_eq!(state.current(), 1);
	}

	#[test]
	fn set_zero_means_first_page() {
		let mut state = PageState::new(DEFAULT_ITEMS_PER_PAGE);
		state.set(0);
		assert_eq!(state.current(), 1);
	}
}
