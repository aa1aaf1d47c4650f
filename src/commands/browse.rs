use std::path::Path;

use anyhow::Result;
use tui_gallery::{Browser, UiConfig, theme};

use crate::commands::open_gallery;
use crate::config::Overrides;
use crate::view::GalleryView;

pub fn run(config_dir: Option<&Path>, overrides: &Overrides, query: Option<&str>) -> Result<()> {
	let (config, gallery) = open_gallery(config_dir, overrides, query)?;

	let theme = theme::by_name(&config.theme).ok_or_else(|| {
		anyhow::anyhow!(
			"unknown theme '{}' (expected one of: {})",
			config.theme,
			theme::NAMES.join(", ")
		)
	})?;

	let chrome = gallery.chrome();
	let ui_config = UiConfig {
		brand: "facet-gallery".to_owned(),
		..UiConfig::default()
	};
	let outcome = Browser::new(GalleryView::new(gallery, &config))
		.with_title(config.catalog.to_string())
		.with_theme(theme)
		.with_ui_config(ui_config)
		.hide_filters(chrome.hide_filters)
		.hide_search(chrome.hide_search)
		.run()?;

	if !outcome.is_accepted() {
		tracing::debug!("gallery closed without opening a card");
		return Ok(());
	}
	if let Some(activated) = outcome.into_activated() {
		tracing::debug!(index = activated.index, "card activated");
		if activated.card.link.is_empty() {
			crate::output::warn(&format!("'{}' has no link", activated.card.title));
		} else {
			println!("{}", activated.card.link);
		}
	}
	Ok(())
}
