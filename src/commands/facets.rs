use std::path::Path;

use anyhow::Result;
use serde_json::{Map, Value};

use crate::commands::open_gallery;
use crate::config::Overrides;
use crate::facet::FacetCategory;
use crate::output;

pub fn run(config_dir: Option<&Path>, overrides: &Overrides, as_json: bool) -> Result<()> {
	let (_, gallery) = open_gallery(config_dir, overrides, None)?;
	let facets = gallery.facets();

	if as_json {
		let map: Map<String, Value> = FacetCategory::ALL
			.iter()
			.map(|&category| {
				let values = facets
					.display_values(category)
					.into_iter()
					.map(|value| Value::String(value.to_owned()))
					.collect();
				(category.key().to_owned(), Value::Array(values))
			})
			.collect();
		println!("{}", serde_json::to_string_pretty(&Value::Object(map))?);
		return Ok(());
	}

	for category in FacetCategory::ALL {
		output::facet_block(category.label(), &facets.display_values(category));
	}
	Ok(())
}
