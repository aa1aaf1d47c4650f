use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::catalog::CatalogSource;

pub const DEFAULT_CATALOG: &str = "data.json";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://learn.arcgis.com";
pub const DEFAULT_THEME: &str = "slate";

const SECTION: &str = "GALLERY";
const KEY_CATALOG: &str = "CATALOG";
const KEY_IMAGE_BASE_URL: &str = "IMAGE_BASE_URL";
const KEY_THEME: &str = "THEME";

#[derive(Debug, Clone)]
pub struct Config {
	pub catalog: CatalogSource,
	pub image_base_url: String,
	pub theme: String,
	pub config_file: Option<PathBuf>,
	pub config_dir: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct Overrides {
	pub catalog: Option<String>,
	pub image_base_url: Option<String>,
	pub theme: Option<String>,
}

impl Config {
	/// Layering: base file, `*.local.json` files, environment, then `cli`.
	pub fn load(config_dir: &Path, cli: &Overrides) -> Result<Self> {
		let config_dir = dunce::canonicalize(config_dir)
			.with_context(|| format!("Failed to canonicalize {}", config_dir.display()))?;

		let (mut layered, config_file) = find_base_config(&config_dir)?;
		merge(&mut layered, load_local_overrides(&config_dir)?);
		merge(&mut layered, load_env_overrides());
		merge(&mut layered, cli.clone());

		let catalog = layered.catalog.as_deref().unwrap_or(DEFAULT_CATALOG);
		let config = Config {
			catalog: CatalogSource::parse(catalog, &config_dir),
			image_base_url: layered
				.image_base_url
				.unwrap_or_else(|| DEFAULT_IMAGE_BASE_URL.to_owned()),
			theme: layered.theme.unwrap_or_else(|| DEFAULT_THEME.to_owned()),
			config_file,
			config_dir,
		};
		tracing::debug!(
			catalog = %config.catalog,
			theme = %config.theme,
			file = ?config.config_file,
			"configuration resolved"
		);
		Ok(config)
	}

	/// Absolute thumbnail URL for a site-relative image path.
	#[must_use]
	pub fn image_url(&self, relative: &str) -> String {
		if relative.is_empty() {
			return String::new();
		}
		format!("{}{relative}", self.image_base_url.trim_end_matches('/'))
	}
}

fn json_files(config_dir: &Path) -> Result<Vec<PathBuf>> {
	let mut entries: Vec<PathBuf> = fs::read_dir(config_dir)
		.with_context(|| format!("failed to list {}", config_dir.display()))?
		.filter_map(|entry| entry.ok())
		.map(|entry| entry.path())
		.filter(|path| {
			path.extension()
				.and_then(|ext| ext.to_str())
				.map(|ext| ext.eq_ignore_ascii_case("json"))
				.unwrap_or(false)
		})
		.collect();
	entries.sort();
	Ok(entries)
}

fn is_local(path: &Path) -> bool {
	path.file_name()
		.and_then(|name| name.to_str())
		.map(|name| name.ends_with(".local.json"))
		.unwrap_or(false)
}

fn find_base_config(config_dir: &Path) -> Result<(Overrides, Option<PathBuf>)> {
	for candidate in json_files(config_dir)? {
		if is_local(&candidate) {
			continue;
		}
		let contents = fs::read_to_string(&candidate)
			.with_context(|| format!("failed to read {}", candidate.display()))?;
		// The catalog itself usually sits beside the config and is not an object.
		let Ok(json) = serde_json::from_str::<Value>(&contents) else {
			tracing::debug!(path = %candidate.display(), "skipping unparseable json file");
			continue;
		};
		if let Some(section) = json.get(SECTION).filter(|section| section.is_object()) {
			return Ok((read_section(section), Some(candidate)));
		}
	}
	Ok((Overrides::default(), None))
}

fn read_section(section: &Value) -> Overrides {
	let get = |key: &str| {
		section
			.get(key)
			.and_then(|v| v.as_str())
			.filter(|s| !s.is_empty())
			.map(str::to_owned)
	};
	Overrides {
		catalog: get(KEY_CATALOG),
		image_base_url: get(KEY_IMAGE_BASE_URL),
		theme: get(KEY_THEME),
	}
}

fn load_local_overrides(config_dir: &Path) -> Result<Overrides> {
	let mut overrides = Overrides::default();
	for candidate in json_files(config_dir)?.into_iter().filter(|path| is_local(path)) {
		apply_single_override(&candidate, &mut overrides)?;
	}
	Ok(overrides)
}

fn apply_single_override(path: &Path, overrides: &mut Overrides) -> Result<()> {
	let contents =
		fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
	let json: Value = serde_json::from_str(&contents)
		.with_context(|| format!("failed to parse {} as JSON", path.display()))?;

	if overrides.catalog.is_none() {
		overrides.catalog = first_value_for_key(&json, KEY_CATALOG);
	}
	if overrides.image_base_url.is_none() {
		overrides.image_base_url = first_value_for_key(&json, KEY_IMAGE_BASE_URL);
	}
	if overrides.theme.is_none() {
		overrides.theme = first_value_for_key(&json, KEY_THEME);
	}
	Ok(())
}

fn load_env_overrides() -> Overrides {
	let var = |name: &str| std::env::var(name).ok().filter(|s| !s.is_empty());
	Overrides {
		catalog: var("FACET_GALLERY_CATALOG"),
		image_base_url: var("FACET_GALLERY_IMAGE_BASE_URL"),
		theme: var("FACET_GALLERY_THEME"),
	}
}

fn merge(config: &mut Overrides, overrides: Overrides) {
	if let Some(catalog) = overrides.catalog {
		config.catalog = Some(catalog);
	}
	if let Some(url) = overrides.image_base_url {
		config.image_base_url = Some(url);
	}
	if let Some(theme) = overrides.theme {
		config.theme = Some(theme);
	}
}

fn first_value_for_key(value: &Value, key: &str) -> Option<String> {
	let mut queue = VecDeque::from([value]);
	while let Some(current) = queue.pop_front() {
		match current {
			Value::Object(map) => {
				if let Some(found) = map.get(key)
					&& let Some(s) = found.as_str()
					&& !s.is_empty()
				{
					return Some(s.to_owned());
				}
				queue.extend(map.values());
			}
			Value::Array(items) => queue.extend(items.iter()),
			_ => {}
		}
	}
	None
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn write(dir: &Path, name: &str, value: Value) {
		fs::write(dir.join(name), value.to_string()).expect("write fixture");
	}

	#[test]
	fn defaults_without_any_config_file() {
		let dir = tempfile::tempdir().expect("tempdir");
		let config = Config::load(dir.path(), &Overrides::default()).expect("config loads");
		let root = dunce::canonicalize(dir.path()).expect("canonical tempdir");
		assert_eq!(config.catalog, CatalogSource::File(root.join(DEFAULT_CATALOG)));
		assert_eq!(config.image_base_url, DEFAULT_IMAGE_BASE_URL);
		assert_eq!(config.theme, DEFAULT_THEME);
		assert!(config.config_file.is_none());
	}

	#[test]
	fn base_file_is_found_beside_the_catalog() {
		let dir = tempfile::tempdir().expect("tempdir");
		write(dir.path(), "data.json", json!([{ "title": "x", "gallery_item": true }]));
		write(
			dir.path(),
			"gallery.json",
			json!({ "GALLERY": { "CATALOG": "items.json", "THEME": "light" } }),
		);
		let config = Config::load(dir.path(), &Overrides::default()).expect("config loads");
		let root = dunce::canonicalize(dir.path()).expect("canonical tempdir");
		assert_eq!(config.catalog, CatalogSource::File(root.join("items.json")));
		assert_eq!(config.theme, "light");
		assert_eq!(config.config_file, Some(root.join("gallery.json")));
	}

	#[test]
	fn local_files_override_base_and_cli_overrides_everything() {
		let dir = tempfile::tempdir().expect("tempdir");
		write(
			dir.path(),
			"gallery.json",
			json!({ "GALLERY": { "THEME": "light", "IMAGE_BASE_URL": "https://a.example" } }),
		);
		write(
			dir.path(),
			"gallery.local.json",
			json!({ "nested": { "THEME": "solarized" }, "IMAGE_BASE_URL": "https://b.example" }),
		);

		let config = Config::load(dir.path(), &Overrides::default()).expect("config loads");
		assert_eq!(config.theme, "solarized");
		assert_eq!(config.image_base_url, "https://b.example");

		let cli = Overrides {
			catalog: Some("https://example.com/data.json".into()),
			theme: Some("slate".into()),
			..Overrides::default()
		};
		let config = Config::load(dir.path(), &cli).expect("config loads");
		assert_eq!(config.theme, "slate");
		assert!(matches!(config.catalog, CatalogSource::Remote(_)));
	}

	#[test]
	fn image_urls_join_base_and_path() {
		let dir = tempfile::tempdir().expect("tempdir");
		let cli = Overrides {
			image_base_url: Some("https://img.example/".into()),
			..Overrides::default()
		};
		let config = Config::load(dir.path(), &cli).expect("config loads");
		assert_eq!(config.image_url("/a.png"), "https://img.example/a.png");
		assert_eq!(config.image_url(""), "");
	}
}
