//! Case-insensitive substring search over a set of record fields.

use crate::types::Record;

/// Field names consulted when matching a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchKeys {
	keys: Vec<String>,
}

impl SearchKeys {
	pub fn new<I, S>(keys: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			keys: keys.into_iter().map(Into::into).collect(),
		}
	}

	#[must_use]
	pub fn as_slice(&self) -> &[String] {
		&self.keys
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}
}

/// A query prepared once per filtering pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle {
	lowered: String,
}

impl Needle {
	pub fn new(query: &str) -> Self {
		Self {
			lowered: query.to_lowercase(),
		}
	}

	/// The empty needle matches every row regardless of the key set.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.lowered.is_empty()
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.lowered
	}
}

/// Whether any of `keys` on `row` contains the needle, ignoring case.
#[must_use]
pub fn matches<T: Record + ?Sized>(row: &T, keys: &SearchKeys, needle: &Needle) -> bool {
	if needle.is_empty() {
		return true;
	}
	keys.as_slice().iter().any(|key| {
		row.field(key)
			.search_text()
			.to_lowercase()
			.contains(needle.as_str())
	})
}

/// Rows of `data` that survive the search, in their original order.
///
/// With search disabled every row survives.
pub fn filter<'d, T: Record>(data: &'d [T], keys: Option<&SearchKeys>, query: &str) -> Vec<&'d T> {
	let Some(keys) = keys else {
		return data.iter().collect();
	};
	let needle = Needle::new(query);
	data.iter()
		.filter(|row| matches(*row, keys, &needle))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::{FieldValue, RowId};

	struct Vendor {
		id: i64,
		name: &'static str,
		city: Option<&'static str>,
	}

	impl Record for Vendor {
		fn row_id(&self) -> RowId {
			RowId::Number(self.id)
		}

		fn field(&self, key: &str) -> FieldValue<'_> {
			match key {
				"id" => self.id.into(),
				"name" => self.name.into(),
				"city" => self.city.into(),
				_ => FieldValue::Null,
			}
		}
	}

	fn vendors() -> Vec<Vendor> {
		vec![
			Vendor {
				id: 1,
				name: "Metro Cabs",
				city: Some("Pune"),
			},
			Vendor {
				id: 2,
				name: "Blue Line",
				city: None,
			},
			Vendor {
				id: 3,
				name: "Cityride",
				city: Some("Mumbai"),
			},
		]
	}

	fn ids(rows: &[&Vendor]) -> Vec<i64> {
		rows.iter().map(|row| row.id).collect()
	}

	#[test]
	fn empty_query_returns_every_row() {
		let data = vendors();
		let keys = SearchKeys::new(["name"]);
		assert_eq!(ids(&filter(&data, Some(&keys), "")), vec![1, 2, 3]);
	}

	#[test]
	fn matching_ignores_case_and_checks_every_key() {
		let data = vendors();
		let keys = SearchKeys::new(["name", "city"]);
		assert_eq!(ids(&filter(&data, Some(&keys), "CITY")), vec![3]);
		assert_eq!(ids(&filter(&data, Some(&keys), "pune")), vec![1]);
	}

	#[test]
	fn null_fields_search_as_empty_text() {
		let data = vendors();
		let keys = SearchKeys::new(["city"]);
		assert_eq!(ids(&filter(&data, Some(&keys), "u")), vec![1, 3]);
	}

	#[test]
	fn numeric_fields_are_searchable() {
		let data = vendors();
		let keys = SearchKeys::new(["id"]);
		assert_eq!(ids(&filter(&data, Some(&keys), "2")), vec![2]);
	}

	#[test]
	fn disabled_search_ignores_the_query() {
		let data = vendors();
		assert_eq!(ids(&filter(&data, None, "nothing")), vec![1, 2, 3]);
	}

	#[test]
	fn empty_key_set_matches_nothing_for_a_real_query() {
		let data = vendors();
		let keys = SearchKeys::default();
		assert!(filter(&data, Some(&keys), "metro").is_empty());
		assert_eq!(filter(&data, Some(&keys), "").len(), 3);
	}

	#[test]
	fn every_row_containing_the_query_is_kept() {
		let data = vendors();
		let keys = SearchKeys::new(["name", "city"]);
		for query in ["e", "in", "M", "ro", "ne"] {
			let kept = ids(&filter(&data, Some(&keys), query));
			for vendor in &data {
				let hit = [Some(vendor.name), vendor.city]
					.into_iter()
					.flatten()
					.any(|text| text.to_lowercase().contains(&query.to_lowercase()));
				assert_eq!(kept.contains(&vendor.id), hit, "query {query:?}");
			}
		}
	}
}
