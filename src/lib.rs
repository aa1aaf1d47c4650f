pub mod catalog;
pub mod commands;
pub mod config;
pub mod facet;
pub mod filter;
pub mod gallery;
pub mod logging;
pub mod matcher;
pub mod output;
pub mod params;
pub mod view;

pub use catalog::{CatalogSource, Item, LoadError};
pub use facet::{FacetCategory, FacetValues};
pub use filter::{FilterState, Selection};
pub use gallery::Gallery;
pub use params::GalleryParams;
// The terminal front end lives in its own crate; re-export it as `tui`.
pub use tui_gallery as tui;
