use std::fs;

use facet_gallery::config::{Config, Overrides};
use facet_gallery::tui::GalleryModel;
use facet_gallery::view::GalleryView;
use facet_gallery::{FacetCategory, Gallery, GalleryParams, catalog};
use serde_json::json;

fn catalog_json() -> serde_json::Value {
	json!([
		{
			"id": 1,
			"title": "Get started with ArcGIS Online",
			"description": "Make your first web map.",
			"url": "https://learn.example/get-started",
			"imageUrl": "/img/start.png",
			"duration": 30,
			"capabilitiesNames": ["Mapping"],
			"productNames": ["ArcGIS Online"],
			"industriesNames": ["Education"],
			"typeName": "Tutorial",
			"experienceName": "Beginner",
			"accountsTitles": ["Public"],
			"gallery_item": true
		},
		{
			"id": "2",
			"title": "Automate analysis",
			"description": "Chain geoprocessing tools with Python.",
			"url": "https://learn.example/automate",
			"duration": "90",
			"capabilitiesNames": ["Analysis", "Mapping"],
			"productNames": ["ArcGIS Pro"],
			"typeName": "Path",
			"experienceName": "Advanced",
			"gallery_item": "true"
		},
		{
			"title": "Draft lesson",
			"capabilitiesNames": ["Mapping"],
			"gallery_item": false
		}
	])
}

fn setup() -> (tempfile::TempDir, Config, Gallery) {
	let dir = tempfile::tempdir().expect("tempdir");
	fs::write(dir.path().join("data.json"), catalog_json().to_string()).expect("write catalog");
	fs::write(
		dir.path().join("gallery.json"),
		json!({ "GALLERY": { "IMAGE_BASE_URL": "https://img.example" } }).to_string(),
	)
	.expect("write config");

	let config = Config::load(dir.path(), &Overrides::default()).expect("config loads");
	let items = catalog::load(&config.catalog).expect("catalog loads");
	let params = GalleryParams::parse("?level=Beginner").expect("params parse");
	let gallery = Gallery::new(items, params);
	(dir, config, gallery)
}

#[test]
fn catalog_keeps_only_gallery_items() {
	let (_dir, _config, gallery) = setup();
	let titles: Vec<&str> = gallery.items().iter().map(|item| item.title.as_str()).collect();
	assert_eq!(titles, ["Get started with ArcGIS Online", "Automate analysis"]);
	assert_eq!(gallery.items()[0].id.as_deref(), Some("1"));
	assert_eq!(gallery.items()[1].duration.as_deref(), Some("90"));
}

#[test]
fn seeded_level_filters_then_search_narrows_further() {
	let (_dir, _config, mut gallery) = setup();
	assert_eq!(gallery.shown(), &[true, false]);
	assert_eq!(gallery.control_label(FacetCategory::Levels), "Levels: Beginner");

	gallery.select_option(FacetCategory::Levels, "All Levels");
	assert_eq!(gallery.shown(), &[true, true]);

	gallery.set_search("PYTHON");
	assert_eq!(gallery.shown(), &[false, true]);

	gallery.select_option(FacetCategory::Capabilities, "Mapping");
	assert_eq!(gallery.shown(), &[false, true]);
	gallery.select_option(FacetCategory::Products, "ArcGIS Online");
	assert_eq!(gallery.shown(), &[false, false]);
}

#[test]
fn facet_options_come_from_visible_items_only() {
	let (_dir, _config, gallery) = setup();
	assert_eq!(
		gallery.facets().display_values(FacetCategory::Capabilities),
		["Analysis", "Mapping"]
	);
	let options: Vec<String> = gallery
		.control_options(FacetCategory::Types)
		.into_iter()
		.map(|option| option.text)
		.collect();
	assert_eq!(options, ["All Types", "Path", "Tutorial"]);
}

#[test]
fn view_builds_cards_with_configured_image_base() {
	let (_dir, config, gallery) = setup();
	let view = GalleryView::new(gallery, &config);
	let cards = view.cards();
	assert_eq!(cards[0].thumbnail, "https://img.example/img/start.png");
	assert_eq!(cards[0].footer_start, "30 Minutes");
	assert_eq!(cards[1].footer_end, "Advanced");
	assert_eq!(view.search_text(), "");
}

#[test]
fn malformed_catalog_is_an_error() {
	let dir = tempfile::tempdir().expect("tempdir");
	fs::write(dir.path().join("data.json"), "{ not json").expect("write catalog");
	let config = Config::load(dir.path(), &Overrides::default()).expect("config loads");
	assert!(catalog::load(&config.catalog).is_err());
}
