//! Facet categories and facet value extraction.
//!
//! Every category is described by one row of [`FACETS`]: its display label,
//! the query parameter that seeds it, and an accessor whose variant carries
//! the matching mode. Adding a category means adding an enum variant and a
//! table row.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexSet;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::catalog::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FacetCategory {
	Capabilities,
	Products,
	Topics,
	Types,
	Levels,
	Accounts,
}

/// How an item exposes its values for a category.
#[derive(Clone, Copy)]
pub enum Accessor {
	/// Zero or more values; matched by membership.
	Multi(fn(&Item) -> &[String]),
	/// Zero or one value; matched by equality.
	Single(fn(&Item) -> Option<&str>),
}

pub struct FacetSpec {
	pub category: FacetCategory,
	pub key: &'static str,
	pub label: &'static str,
	pub param: &'static str,
	pub accessor: Accessor,
}

pub static FACETS: [FacetSpec; 6] = [
	FacetSpec {
		category: FacetCategory::Capabilities,
		key: "capabilities",
		label: "Capabilities",
		param: "c",
		accessor: Accessor::Multi(capabilities),
	},
	FacetSpec {
		category: FacetCategory::Products,
		key: "products",
		label: "Products",
		param: "p",
		accessor: Accessor::Multi(products),
	},
	FacetSpec {
		category: FacetCategory::Topics,
		key: "topics",
		label: "Topics",
		param: "t",
		accessor: Accessor::Multi(topics),
	},
	FacetSpec {
		category: FacetCategory::Types,
		key: "types",
		label: "Types",
		param: "type",
		accessor: Accessor::Single(kind),
	},
	FacetSpec {
		category: FacetCategory::Levels,
		key: "levels",
		label: "Levels",
		param: "level",
		accessor: Accessor::Single(level),
	},
	FacetSpec {
		category: FacetCategory::Accounts,
		key: "accounts",
		label: "Accounts",
		param: "a",
		accessor: Accessor::Multi(accounts),
	},
];

fn capabilities(item: &Item) -> &[String] {
	&item.capabilities
}

fn products(item: &Item) -> &[String] {
	&item.products
}

fn topics(item: &Item) -> &[String] {
	&item.topics
}

fn kind(item: &Item) -> Option<&str> {
	item.kind.as_deref()
}

fn level(item: &Item) -> Option<&str> {
	item.level.as_deref()
}

fn accounts(item: &Item) -> &[String] {
	&item.accounts
}

impl FacetCategory {
	pub const ALL: [FacetCategory; 6] = [
		FacetCategory::Capabilities,
		FacetCategory::Products,
		FacetCategory::Topics,
		FacetCategory::Types,
		FacetCategory::Levels,
		FacetCategory::Accounts,
	];

	#[must_use]
	pub fn spec(self) -> &'static FacetSpec {
		// FACETS is declared in enum order.
		&FACETS[self as usize]
	}

	#[must_use]
	pub fn key(self) -> &'static str {
		self.spec().key
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		self.spec().label
	}

	#[must_use]
	pub fn param(self) -> &'static str {
		self.spec().param
	}

	/// Text of the option that clears this category.
	#[must_use]
	pub fn all_label(self) -> String {
		format!("All {}", self.label())
	}

	#[must_use]
	pub fn from_param(param: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|category| category.param() == param)
	}
}

impl fmt::Display for FacetCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}

/// Distinct values per category in order of first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetValues {
	sets: BTreeMap<FacetCategory, IndexSet<String>>,
}

impl Default for FacetValues {
	fn default() -> Self {
		Self {
			sets: FacetCategory::ALL
				.into_iter()
				.map(|category| (category, IndexSet::new()))
				.collect(),
		}
	}
}

impl FacetValues {
	#[must_use]
	pub fn get(&self, category: FacetCategory) -> &IndexSet<String> {
		// Every category is inserted by `Default`.
		&self.sets[&category]
	}

	#[must_use]
	pub fn contains(&self, category: FacetCategory, value: &str) -> bool {
		self.get(category).contains(value)
	}

	/// Non-empty values sorted for display.
	#[must_use]
	pub fn display_values(&self, category: FacetCategory) -> Vec<&str> {
		let mut values: Vec<&str> = self
			.get(category)
			.iter()
			.map(String::as_str)
			.filter(|value| !value.is_empty())
			.collect();
		values.sort_by(|a, b| display_order(a, b));
		values
	}
}

/// Collect the facet value sets of `items`.
#[must_use]
pub fn extract(items: &[Item]) -> FacetValues {
	let mut facets = FacetValues::default();
	for spec in &FACETS {
		let Some(set) = facets.sets.get_mut(&spec.category) else {
			continue;
		};
		for item in items {
			match spec.accessor {
				Accessor::Multi(values) => {
					set.extend(values(item).iter().cloned());
				}
				Accessor::Single(value) => {
					if let Some(value) = value(item) {
						set.insert(value.to_owned());
					}
				}
			}
		}
	}
	facets
}

/// Locale-style ordering for option lists: accents and case are ignored
/// first, then accented forms follow plain ones, then lowercase precedes
/// uppercase.
#[must_use]
pub fn display_order(a: &str, b: &str) -> Ordering {
	let base = |text: &str| -> String {
		text.nfd()
			.filter(|ch| !is_combining_mark(*ch))
			.flat_map(char::to_lowercase)
			.collect()
	};
	let accented = |text: &str| -> String { text.nfd().flat_map(char::to_lowercase).collect() };
	base(a)
		.cmp(&base(b))
		.then_with(|| accented(a).cmp(&accented(b)))
		.then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn item(capabilities: &[&str], level: Option<&str>) -> Item {
		Item {
			capabilities: capabilities.iter().map(|s| s.to_string()).collect(),
			level: level.map(str::to_owned),
			visible: true,
			..Item::default()
		}
	}

	#[test]
	fn table_rows_follow_enum_order() {
		for category in FacetCategory::ALL {
			assert_eq!(category.spec().category, category);
		}
	}

	#[test]
	fn lookups_by_param() {
		assert_eq!(FacetCategory::from_param("level"), Some(FacetCategory::Levels));
		assert_eq!(FacetCategory::from_param("a"), Some(FacetCategory::Accounts));
		assert_eq!(FacetCategory::from_param("x"), None);
		assert_eq!(FacetCategory::Types.all_label(), "All Types");
	}

	#[test]
	fn empty_input_yields_empty_sets_for_every_category() {
		let facets = extract(&[]);
		for category in FacetCategory::ALL {
			assert!(facets.get(category).is_empty());
		}
	}

	#[test]
	fn extraction_collapses_duplicates_in_first_seen_order() {
		let items = vec![
			item(&["Mapping", "Analysis"], Some("Beginner")),
			item(&["Analysis", "Imagery"], None),
			item(&["Mapping"], Some("Advanced")),
			item(&[], Some("Beginner")),
		];
		let facets = extract(&items);
		let capabilities: Vec<&str> = facets
			.get(FacetCategory::Capabilities)
			.iter()
			.map(String::as_str)
			.collect();
		assert_eq!(capabilities, vec!["Mapping", "Analysis", "Imagery"]);
		let levels: Vec<&str> = facets
			.get(FacetCategory::Levels)
			.iter()
			.map(String::as_str)
			.collect();
		assert_eq!(levels, vec!["Beginner", "Advanced"]);
		assert!(facets.get(FacetCategory::Types).is_empty());
	}

	#[test]
	fn extraction_is_deterministic() {
		let items = vec![item(&["b", "a"], Some("x")), item(&["a", "c"], Some("y"))];
		assert_eq!(extract(&items), extract(&items));
	}

	#[test]
	fn display_values_sort_case_insensitively_and_skip_blanks() {
		let items = vec![item(&["beta", "", "Alpha", "gamma", "alpha"], None)];
		let facets = extract(&items);
		assert_eq!(
			facets.display_values(FacetCategory::Capabilities),
			vec!["alpha", "Alpha", "beta", "gamma"]
		);
	}

	#[test]
	fn accented_values_sort_with_their_base_letter() {
		let mut values = vec!["Zoning", "Éducation", "apple", "education", "Education"];
		values.sort_by(|a, b| display_order(a, b));
		assert_eq!(values, vec!["apple", "education", "Education", "Éducation", "Zoning"]);
	}
}
