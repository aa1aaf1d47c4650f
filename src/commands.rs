pub mod browse;
pub mod facets;
pub mod list;

use std::path::Path;

use anyhow::{Context, Result};

use crate::catalog;
use crate::config::{Config, Overrides};
use crate::gallery::Gallery;
use crate::params::GalleryParams;

/// Resolve configuration, load the catalog and seed a gallery from `query`.
pub fn open_gallery(
	config_dir: Option<&Path>,
	overrides: &Overrides,
	query: Option<&str>,
) -> Result<(Config, Gallery)> {
	let config_dir = config_dir.unwrap_or_else(|| Path::new("."));
	let config = Config::load(config_dir, overrides)?;

	let params = match query {
		Some(query) => GalleryParams::parse(query)?,
		None => GalleryParams::default(),
	};

	let items = catalog::load(&config.catalog)
		.with_context(|| format!("failed to load catalog from {}", config.catalog))?;
	tracing::info!(items = items.len(), source = %config.catalog, "catalog loaded");

	Ok((config, Gallery::new(items, params)))
}
