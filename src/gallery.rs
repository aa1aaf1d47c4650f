//! Application state for one gallery session.
//!
//! `Gallery` owns the working item set, the facet value sets, the filter
//! state and the search text. Every mutation ends with a full re-evaluation
//! of all items; the result is a shown/hidden flag per item, in catalog order.

use crate::catalog::Item;
use crate::facet::{self, FacetCategory, FacetValues};
use crate::filter::{FilterState, Selection};
use crate::matcher;
use crate::params::GalleryParams;

/// Which parts of the chrome are hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chrome {
	pub hide_filters: bool,
	pub hide_search: bool,
}

/// One option offered by a facet control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlOption {
	pub text: String,
	pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct Gallery {
	items: Vec<Item>,
	facets: FacetValues,
	filters: FilterState,
	search: String,
	shown: Vec<bool>,
	chrome: Chrome,
}

impl Gallery {
	/// Build the session state from the working item set and the startup
	/// parameters, then run the initial evaluation pass.
	#[must_use]
	pub fn new(items: Vec<Item>, params: GalleryParams) -> Self {
		let facets = facet::extract(&items);
		for (category, value) in params.filters.iter() {
			if !facets.contains(category, value) {
				tracing::debug!(%category, value, "seeded filter value matches no facet value");
			}
		}
		let mut gallery = Self {
			shown: vec![false; items.len()],
			items,
			facets,
			filters: params.filters,
			search: params.search,
			chrome: Chrome {
				hide_filters: params.hide_filters,
				hide_search: params.hide_search,
			},
		};
		gallery.refresh();
		gallery
	}

	pub fn select(&mut self, category: FacetCategory, selection: Selection) {
		tracing::debug!(%category, ?selection, "facet selection");
		self.filters.select(category, selection);
		self.refresh();
	}

	/// Apply the display text of a chosen control option.
	pub fn select_option(&mut self, category: FacetCategory, text: &str) {
		self.select(category, Selection::from_option_text(category, text));
	}

	pub fn set_search(&mut self, text: impl Into<String>) {
		self.search = text.into();
		self.refresh();
	}

	/// Re-evaluate every item against the current state.
	pub fn refresh(&mut self) {
		for (shown, item) in self.shown.iter_mut().zip(&self.items) {
			*shown = matcher::is_visible(item, &self.filters, &self.search);
		}
		tracing::trace!(
			shown = self.shown.iter().filter(|shown| **shown).count(),
			total = self.items.len(),
			"gallery refreshed"
		);
	}

	#[must_use]
	pub fn items(&self) -> &[Item] {
		&self.items
	}

	#[must_use]
	pub fn facets(&self) -> &FacetValues {
		&self.facets
	}

	#[must_use]
	pub fn filters(&self) -> &FilterState {
		&self.filters
	}

	#[must_use]
	pub fn search(&self) -> &str {
		&self.search
	}

	#[must_use]
	pub fn chrome(&self) -> Chrome {
		self.chrome
	}

	/// Shown/hidden flag per item, aligned with [`Gallery::items`].
	#[must_use]
	pub fn shown(&self) -> &[bool] {
		&self.shown
	}

	pub fn visible_items(&self) -> impl Iterator<Item = &Item> {
		self.items
			.iter()
			.zip(&self.shown)
			.filter_map(|(item, shown)| shown.then_some(item))
	}

	/// `"<Label>"` with no selection, `"<Label>: <value>"` otherwise.
	#[must_use]
	pub fn control_label(&self, category: FacetCategory) -> String {
		match self.filters.get(category) {
			Some(value) => format!("{}: {value}", category.label()),
			None => category.label().to_owned(),
		}
	}

	/// "All" first, then the display-sorted facet values.
	#[must_use]
	pub fn control_options(&self, category: FacetCategory) -> Vec<ControlOption> {
		let current = self.filters.get(category);
		let mut options = vec![ControlOption {
			text: category.all_label(),
			selected: current.is_none(),
		}];
		options.extend(
			self.facets
				.display_values(category)
				.into_iter()
				.map(|value| ControlOption {
					text: value.to_owned(),
					selected: current == Some(value),
				}),
		);
		options
	}
}
