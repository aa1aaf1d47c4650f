//! Binds a [`Gallery`] to the terminal front end.
//!
//! Controls are laid out in [`FacetCategory::ALL`] order, so a control index
//! from the view maps straight back to its category.

use tui_gallery::{Card, ControlOption, FacetControl, GalleryModel};

use crate::catalog::Item;
use crate::config::Config;
use crate::facet::FacetCategory;
use crate::gallery::Gallery;

pub struct GalleryView<'a> {
	gallery: Gallery,
	config: &'a Config,
}

impl<'a> GalleryView<'a> {
	pub fn new(gallery: Gallery, config: &'a Config) -> Self {
		Self { gallery, config }
	}
}

/// Card content for one catalog item.
#[must_use]
pub fn card_for(item: &Item, config: &Config) -> Card {
	Card {
		title: item.title.clone(),
		description: item.description.clone(),
		thumbnail: config.image_url(&item.image_url),
		link: item.url.clone(),
		footer_start: duration_label(item),
		footer_end: item.level.clone().unwrap_or_default(),
	}
}

/// `"<duration> Minutes"`, or nothing when the item carries no duration.
#[must_use]
pub fn duration_label(item: &Item) -> String {
	match item.duration.as_deref() {
		Some(duration) if !duration.trim().is_empty() => format!("{duration} Minutes"),
		_ => String::new(),
	}
}

impl GalleryModel for GalleryView<'_> {
	fn controls(&self) -> Vec<FacetControl> {
		FacetCategory::ALL
			.iter()
			.map(|&category| {
				let options = self
					.gallery
					.control_options(category)
					.into_iter()
					.map(|option| ControlOption::new(option.text, option.selected))
					.collect();
				FacetControl::new(self.gallery.control_label(category), options)
			})
			.collect()
	}

	fn select_option(&mut self, control: usize, text: &str) {
		match FacetCategory::ALL.get(control) {
			Some(&category) => self.gallery.select_option(category, text),
			None => tracing::warn!(control, "selection for unknown facet control"),
		}
	}

	fn search_text(&self) -> &str {
		self.gallery.search()
	}

	fn set_search(&mut self, text: &str) {
		self.gallery.set_search(text);
	}

	fn cards(&self) -> Vec<Card> {
		self.gallery
			.items()
			.iter()
			.map(|item| card_for(item, self.config))
			.collect()
	}

	fn shown(&self) -> &[bool] {
		self.gallery.shown()
	}
}

#[cfg(test)]
mod tests {
	use std::path::Path;

	use super::*;
	use crate::catalog::CatalogSource;
	use crate::params::GalleryParams;

	fn config() -> Config {
		Config {
			catalog: CatalogSource::parse("data.json", Path::new("/tmp")),
			image_base_url: "https://example.com/".to_owned(),
			theme: "slate".to_owned(),
			config_file: None,
			config_dir: Path::new("/tmp").to_path_buf(),
		}
	}

	fn item(title: &str, level: &str) -> Item {
		Item {
			title: title.to_owned(),
			image_url: "/img/a.png".to_owned(),
			duration: Some("30".to_owned()),
			level: Some(level.to_owned()),
			visible: true,
			..Item::default()
		}
	}

	#[test]
	fn cards_carry_thumbnail_and_footers() {
		let config = config();
		let card = card_for(&item("Map it", "Beginner"), &config);
		assert_eq!(card.thumbnail, "https://example.com/img/a.png");
		assert_eq!(card.footer_start, "30 Minutes");
		assert_eq!(card.footer_end, "Beginner");

		let bare = card_for(&Item::default(), &config);
		assert_eq!(bare.footer_start, "");
		assert_eq!(bare.thumbnail, "");
	}

	#[test]
	fn control_index_maps_to_category() {
		let config = config();
		let items = vec![item("One", "Beginner"), item("Two", "Advanced")];
		let mut view = GalleryView::new(Gallery::new(items, GalleryParams::default()), &config);

		let controls = view.controls();
		assert_eq!(controls.len(), FacetCategory::ALL.len());
		let levels = FacetCategory::ALL
			.iter()
			.position(|category| *category == FacetCategory::Levels)
			.expect("levels control");
		assert_eq!(controls[levels].label, "Levels");

		view.select_option(levels, "Advanced");
		assert_eq!(view.shown(), &[false, true]);
		assert_eq!(view.controls()[levels].label, "Levels: Advanced");

		view.select_option(levels, "All Levels");
		assert_eq!(view.shown(), &[true, true]);
	}

	#[test]
	fn unknown_control_is_ignored() {
		let config = config();
		let mut view = GalleryView::new(
			Gallery::new(vec![item("One", "Beginner")], GalleryParams::default()),
			&config,
		);
		view.select_option(99, "anything");
		assert_eq!(view.shown(), &[true]);
	}
}
