use std::collections::BTreeMap;

use crate::facet::FacetCategory;

/// What a facet control selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
	/// The "All <Category>" option; clears the category.
	All,
	Value(String),
}

impl Selection {
	/// Interpret the display text of a control option for `category`.
	#[must_use]
	pub fn from_option_text(category: FacetCategory, text: &str) -> Self {
		if text.trim() == category.all_label() {
			Self::All
		} else {
			Self::Value(text.to_owned())
		}
	}
}

/// At most one selected value per facet category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
	active: BTreeMap<FacetCategory, String>,
}

impl FilterState {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn select(&mut self, category: FacetCategory, selection: Selection) {
		match selection {
			Selection::All => {
				self.active.remove(&category);
			}
			Selection::Value(value) => {
				self.active.insert(category, value);
			}
		}
	}

	#[must_use]
	pub fn get(&self, category: FacetCategory) -> Option<&str> {
		self.active.get(&category).map(String::as_str)
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.active.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (FacetCategory, &str)> {
		self.active
			.iter()
			.map(|(category, value)| (*category, value.as_str()))
	}
}

impl<S: Into<String>> FromIterator<(FacetCategory, S)> for FilterState {
	fn from_iter<I: IntoIterator<Item = (FacetCategory, S)>>(iter: I) -> Self {
		let mut state = Self::new();
		for (category, value) in iter {
			state.select(category, Selection::Value(value.into()));
		}
		state
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn selecting_a_value_replaces_the_previous_one() {
		let mut state = FilterState::new();
		state.select(FacetCategory::Levels, Selection::Value("Beginner".into()));
		state.select(FacetCategory::Levels, Selection::Value("Advanced".into()));
		assert_eq!(state.get(FacetCategory::Levels), Some("Advanced"));
		assert_eq!(state.iter().count(), 1);
	}

	#[test]
	fn selecting_all_removes_the_constraint() {
		let mut state: FilterState = [(FacetCategory::Topics, "Education")].into_iter().collect();
		state.select(FacetCategory::Topics, Selection::All);
		assert!(state.get(FacetCategory::Topics).is_none());
		assert!(state.is_empty());

		// Clearing an absent category is a no-op.
		state.select(FacetCategory::Products, Selection::All);
		assert!(state.is_empty());
	}

	#[test]
	fn option_text_maps_to_selection() {
		assert_eq!(
			Selection::from_option_text(FacetCategory::Capabilities, " All Capabilities "),
			Selection::All
		);
		assert_eq!(
			Selection::from_option_text(FacetCategory::Capabilities, "Mapping"),
			Selection::Value("Mapping".into())
		);
		// Only the category's own "All" text clears it.
		assert_eq!(
			Selection::from_option_text(FacetCategory::Capabilities, "All Products"),
			Selection::Value("All Products".into())
		);
	}

	#[test]
	fn option_text_with_padding_is_kept_verbatim() {
		assert_eq!(
			Selection::from_option_text(FacetCategory::Topics, " Water "),
			Selection::Value(" Water ".into())
		);
	}

	#[test]
	fn iteration_is_in_category_order() {
		let state: FilterState = [
			(FacetCategory::Accounts, "Public"),
			(FacetCategory::Capabilities, "Mapping"),
		]
		.into_iter()
		.collect();
		let keys: Vec<FacetCategory> = state.iter().map(|(category, _)| category).collect();
		assert_eq!(keys, vec![FacetCategory::Capabilities, FacetCategory::Accounts]);
	}
}
