//! Startup query parameters.
//!
//! The gallery reads its initial state from a URL-style query string once at
//! startup and never writes it back.

use std::collections::HashMap;

use thiserror::Error;
use url::Url;

use crate::facet::FacetCategory;
use crate::filter::{FilterState, Selection};

pub const HIDE_FILTERS: &str = "hideFilters";
pub const HIDE_SEARCH: &str = "hideSearch";
pub const SEARCH: &str = "search";

#[derive(Debug, Error)]
pub enum ParamsError {
	#[error("invalid gallery URL {raw:?}")]
	Url {
		raw: String,
		#[source]
		source: url::ParseError,
	},
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryParams {
	pub hide_filters: bool,
	pub hide_search: bool,
	pub filters: FilterState,
	pub search: String,
}

impl GalleryParams {
	/// Accepts `?a=b&c=d`, `a=b&c=d`, or a full URL whose query is used.
	pub fn parse(raw: &str) -> Result<Self, ParamsError> {
		let raw = raw.trim();
		let url;
		let query = if raw.contains("://") {
			url = Url::parse(raw).map_err(|source| ParamsError::Url {
				raw: raw.to_owned(),
				source,
			})?;
			url.query().unwrap_or_default()
		} else {
			raw.strip_prefix('?').unwrap_or(raw)
		};
		Ok(Self::from_pairs(url::form_urlencoded::parse(query.as_bytes())))
	}

	/// Build from decoded key/value pairs. The first occurrence of a key wins.
	pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: AsRef<str>,
		V: AsRef<str>,
	{
		let mut first: HashMap<String, String> = HashMap::new();
		for (key, value) in pairs {
			first
				.entry(key.as_ref().to_owned())
				.or_insert_with(|| value.as_ref().to_owned());
		}

		let mut filters = FilterState::new();
		for (key, value) in &first {
			match FacetCategory::from_param(key) {
				Some(category) if !value.is_empty() => {
					filters.select(category, Selection::Value(value.clone()));
				}
				Some(_) => {}
				None if [HIDE_FILTERS, HIDE_SEARCH, SEARCH].contains(&key.as_str()) => {}
				None => tracing::debug!(key = %key, "ignoring unknown query parameter"),
			}
		}

		Self {
			hide_filters: first.contains_key(HIDE_FILTERS),
			hide_search: first.contains_key(HIDE_SEARCH),
			filters,
			search: first.remove(SEARCH).unwrap_or_default(),
		}
	}
}
