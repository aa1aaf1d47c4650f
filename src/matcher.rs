//! Visibility decisions for a single item.

use crate::catalog::Item;
use crate::facet::{Accessor, FacetCategory};
use crate::filter::FilterState;

/// An item is visible when it satisfies every active facet and the search.
#[must_use]
pub fn is_visible(item: &Item, filters: &FilterState, search: &str) -> bool {
	matches_filters(item, filters) && matches_search(item, search)
}

#[must_use]
pub fn matches_filters(item: &Item, filters: &FilterState) -> bool {
	filters
		.iter()
		.all(|(category, value)| matches_facet(item, category, value))
}

/// Membership for multi-valued categories, exact equality for single-valued
/// ones. A missing attribute never matches.
#[must_use]
pub fn matches_facet(item: &Item, category: FacetCategory, value: &str) -> bool {
	match category.spec().accessor {
		Accessor::Multi(values) => values(item).iter().any(|candidate| candidate == value),
		Accessor::Single(scalar) => scalar(item) == Some(value),
	}
}

/// Case-insensitive substring match over title and description.
#[must_use]
pub fn matches_search(item: &Item, search: &str) -> bool {
	if search.is_empty() {
		return true;
	}
	let needle = search.to_lowercase();
	item.title.to_lowercase().contains(&needle)
		|| item.description.to_lowercase().contains(&needle)
}
