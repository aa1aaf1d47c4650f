//! Catalog loading.
//!
//! The catalog is a JSON array of item records read once at startup, either
//! from a local file or with a single HTTP GET. Records whose `gallery_item`
//! flag is not truthy are dropped here and never seen by the rest of the
//! crate.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// A single catalog entry.
///
/// Display scalars are carried as-is; only the facet attributes take part in
/// filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Item {
	#[serde(default, deserialize_with = "lenient_scalar")]
	pub id: Option<String>,
	#[serde(default, deserialize_with = "string_or_empty")]
	pub title: String,
	#[serde(default, deserialize_with = "string_or_empty")]
	pub description: String,
	#[serde(default, deserialize_with = "string_or_empty")]
	pub url: String,
	#[serde(default, rename = "imageUrl", deserialize_with = "string_or_empty")]
	pub image_url: String,
	#[serde(default, deserialize_with = "lenient_scalar")]
	pub duration: Option<String>,
	#[serde(default, rename = "capabilitiesNames", deserialize_with = "list_or_empty")]
	pub capabilities: Vec<String>,
	#[serde(default, rename = "productNames", deserialize_with = "list_or_empty")]
	pub products: Vec<String>,
	#[serde(default, rename = "industriesNames", deserialize_with = "list_or_empty")]
	pub topics: Vec<String>,
	#[serde(default, rename = "typeName", deserialize_with = "lenient_scalar")]
	pub kind: Option<String>,
	#[serde(default, rename = "experienceName", deserialize_with = "lenient_scalar")]
	pub level: Option<String>,
	#[serde(default, rename = "accountsTitles", deserialize_with = "list_or_empty")]
	pub accounts: Vec<String>,
	#[serde(default, rename = "gallery_item", deserialize_with = "truthy")]
	pub visible: bool,
}

#[derive(Debug, Error)]
pub enum LoadError {
	#[error("failed to read catalog {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to fetch catalog from {url}")]
	Fetch {
		url: Url,
		#[source]
		source: reqwest::Error,
	},
	#[error("catalog request to {url} returned {status}")]
	Status {
		url: Url,
		status: reqwest::StatusCode,
	},
	#[error("failed to parse catalog from {origin}")]
	Parse {
		origin: String,
		#[source]
		source: serde_json::Error,
	},
	#[error("catalog from {origin} is not a JSON array")]
	NotAnArray { origin: String },
}

/// Where the catalog document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
	File(PathBuf),
	Remote(Url),
}

impl CatalogSource {
	/// Interpret `raw` as an `http(s)` URL when it parses as one, otherwise as
	/// a path relative to `base_dir`.
	pub fn parse(raw: &str, base_dir: &Path) -> Self {
		if let Ok(url) = Url::parse(raw)
			&& matches!(url.scheme(), "http" | "https")
		{
			return Self::Remote(url);
		}
		let path = PathBuf::from(raw);
		if path.is_relative() {
			Self::File(base_dir.join(path))
		} else {
			Self::File(path)
		}
	}
}

impl fmt::Display for CatalogSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::File(path) => write!(f, "{}", path.display()),
			Self::Remote(url) => write!(f, "{url}"),
		}
	}
}

/// Fetch the document behind `source` and return the working item set.
pub fn load(source: &CatalogSource) -> Result<Vec<Item>, LoadError> {
	let origin = source.to_string();
	tracing::info!(source = %origin, "loading catalog");
	let body = match source {
		CatalogSource::File(path) => fs::read_to_string(path).map_err(|source| LoadError::Read {
			path: path.clone(),
			source,
		})?,
		CatalogSource::Remote(url) => fetch(url)?,
	};
	parse(&body, &origin)
}

fn fetch(url: &Url) -> Result<String, LoadError> {
	let fetch_error = |source| LoadError::Fetch {
		url: url.clone(),
		source,
	};
	let response = reqwest::blocking::get(url.clone()).map_err(fetch_error)?;
	let status = response.status();
	if !status.is_success() {
		return Err(LoadError::Status {
			url: url.clone(),
			status,
		});
	}
	response.text().map_err(fetch_error)
}

/// Parse a catalog document and keep only gallery-eligible records.
pub fn parse(body: &str, origin: &str) -> Result<Vec<Item>, LoadError> {
	let document: Value = serde_json::from_str(body).map_err(|source| LoadError::Parse {
		origin: origin.to_owned(),
		source,
	})?;
	let Value::Array(records) = document else {
		return Err(LoadError::NotAnArray {
			origin: origin.to_owned(),
		});
	};

	let total = records.len();
	let mut items = Vec::with_capacity(total);
	for record in records {
		if !record.get("gallery_item").is_some_and(is_truthy) {
			tracing::debug!(
				id = ?record.get("id"),
				title = ?record.get("title"),
				"skipping non-gallery item"
			);
			continue;
		}
		let item: Item = serde_json::from_value(record).map_err(|source| LoadError::Parse {
			origin: origin.to_owned(),
			source,
		})?;
		items.push(item);
	}
	tracing::debug!(total, kept = items.len(), "catalog filtered to gallery items");
	Ok(items)
}

fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(flag) => *flag,
		Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
		Value::String(text) => !text.is_empty() && text != "false",
		Value::Array(_) | Value::Object(_) => true,
	}
}

fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(is_truthy(&Value::deserialize(deserializer)?))
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(lenient_scalar(deserializer)?.unwrap_or_default())
}

/// String entries of a name list; anything else in or instead of the list is dropped.
fn list_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match Value::deserialize(deserializer)? {
		Value::Array(entries) => entries
			.into_iter()
			.filter_map(|entry| match entry {
				Value::String(text) => Some(text),
				_ => None,
			})
			.collect(),
		_ => Vec::new(),
	})
}

fn lenient_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match Value::deserialize(deserializer)? {
		Value::String(text) => Some(text),
		Value::Number(number) => Some(number.to_string()),
		Value::Bool(flag) => Some(flag.to_string()),
		_ => None,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn parse_value(value: Value) -> Vec<Item> {
		parse(&value.to_string(), "test").expect("catalog parses")
	}

	#[test]
	fn maps_adapter_field_names() {
		let items = parse_value(json!([{
			"id": 42,
			"title": "Intro to ArcGIS",
			"description": "basics",
			"url": "https://example.com/intro",
			"imageUrl": "/img/intro.png",
			"duration": 30,
			"capabilitiesNames": ["Mapping"],
			"productNames": ["ArcGIS Online"],
			"industriesNames": ["Education"],
			"typeName": "Tutorial",
			"experienceName": "Beginner",
			"accountsTitles": ["Public"],
			"gallery_item": true
		}]));

		let item = &items[0];
		assert_eq!(item.id.as_deref(), Some("42"));
		assert_eq!(item.duration.as_deref(), Some("30"));
		assert_eq!(item.image_url, "/img/intro.png");
		assert_eq!(item.capabilities, vec!["Mapping"]);
		assert_eq!(item.topics, vec!["Education"]);
		assert_eq!(item.kind.as_deref(), Some("Tutorial"));
		assert_eq!(item.level.as_deref(), Some("Beginner"));
		assert_eq!(item.accounts, vec!["Public"]);
	}

	#[test]
	fn drops_items_without_truthy_gallery_flag() {
		let items = parse_value(json!([
			{ "title": "kept bool", "gallery_item": true },
			{ "title": "kept string", "gallery_item": "true" },
			{ "title": "kept number", "gallery_item": 1 },
			{ "title": "string false", "gallery_item": "false" },
			{ "title": "empty string", "gallery_item": "" },
			{ "title": "bool false", "gallery_item": false },
			{ "title": "zero", "gallery_item": 0 },
			{ "title": "null", "gallery_item": null },
			{ "title": "absent" }
		]));
		let titles: Vec<&str> = items.iter().map(|item| item.title.as_str()).collect();
		assert_eq!(titles, vec!["kept bool", "kept string", "kept number"]);
	}

	#[test]
	fn null_and_missing_attributes_become_empty() {
		let items = parse_value(json!([{
			"capabilitiesNames": null,
			"typeName": null,
			"title": null,
			"gallery_item": true
		}]));
		let item = &items[0];
		assert!(item.capabilities.is_empty());
		assert!(item.products.is_empty());
		assert!(item.kind.is_none());
		assert!(item.level.is_none());
		assert_eq!(item.title, "");
		assert_eq!(item.description, "");
	}

	#[test]
	fn skipped_records_are_never_decoded() {
		let items = parse(
			r#"[{"title":"ok","gallery_item":true},{"title":5,"capabilitiesNames":{},"gallery_item":false}]"#,
			"test",
		)
		.expect("hidden record with odd fields is skipped");
		assert_eq!(items.len(), 1);
		assert_eq!(items[0].title, "ok");
	}

	#[test]
	fn odd_attribute_shapes_degrade_instead_of_failing() {
		let items = parse_value(json!([{
			"title": 7,
			"capabilitiesNames": ["Mapping", null, 3, "Analysis"],
			"productNames": "ArcGIS Pro",
			"typeName": 2,
			"experienceName": { "name": "Beginner" },
			"gallery_item": true
		}]));
		let item = &items[0];
		assert_eq!(item.title, "7");
		assert_eq!(item.capabilities, vec!["Mapping", "Analysis"]);
		assert!(item.products.is_empty());
		assert_eq!(item.kind.as_deref(), Some("2"));
		assert!(item.level.is_none());
	}

	#[test]
	fn rejects_non_array_documents() {
		let err = parse("{\"items\": []}", "test").unwrap_err();
		assert!(matches!(err, LoadError::NotAnArray { .. }));
	}

	#[test]
	fn rejects_malformed_documents() {
		let err = parse("[{", "test").unwrap_err();
		assert!(matches!(err, LoadError::Parse { .. }));
	}

	#[test]
	fn source_parse_distinguishes_urls_from_paths() {
		let base = Path::new("/srv/gallery");
		assert_eq!(
			CatalogSource::parse("data.json", base),
			CatalogSource::File(PathBuf::from("/srv/gallery/data.json"))
		);
		assert_eq!(
			CatalogSource::parse("/tmp/data.json", base),
			CatalogSource::File(PathBuf::from("/tmp/data.json"))
		);
		assert!(matches!(
			CatalogSource::parse("https://example.com/data.json", base),
			CatalogSource::Remote(_)
		));
	}

	#[test]
	fn load_reports_missing_file() {
		let source = CatalogSource::File(PathBuf::from("/definitely/not/here/data.json"));
		assert!(matches!(load(&source), Err(LoadError::Read { .. })));
	}
}
