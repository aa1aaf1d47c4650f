use std::path::Path;

use anyhow::Result;
use serde_json::json;

use crate::commands::open_gallery;
use crate::config::Overrides;
use crate::output;
use crate::view::{card_for, duration_label};

pub fn run(
	config_dir: Option<&Path>,
	overrides: &Overrides,
	query: Option<&str>,
	as_json: bool,
) -> Result<()> {
	let (config, gallery) = open_gallery(config_dir, overrides, query)?;

	if as_json {
		let cards: Vec<_> = gallery
			.visible_items()
			.map(|item| {
				json!({
					"id": item.id,
					"title": item.title,
					"description": item.description,
					"url": item.url,
					"image": config.image_url(&item.image_url),
					"duration": duration_label(item),
					"level": item.level,
				})
			})
			.collect();
		println!("{}", serde_json::to_string_pretty(&cards)?);
		return Ok(());
	}

	let shown = gallery.shown().iter().filter(|shown| **shown).count();
	output::divider();
	output::label_value("Catalog", &config.catalog);
	if gallery.filters().is_empty() {
		output::note("No facet filters");
	}
	for (category, value) in gallery.filters().iter() {
		output::label_value(category.label(), value);
	}
	if !gallery.search().is_empty() {
		output::label_value("Search", gallery.search());
	}
	output::label_value("Showing", format!("{shown} of {}", gallery.items().len()));
	output::divider();

	if shown == 0 {
		output::note("No cards match the current filters");
	}
	for item in gallery.visible_items() {
		output::card(&card_for(item, &config));
	}
	Ok(())
}
