//! The seam between the terminal front end and whatever decides visibility.

use crate::types::{Card, FacetControl};

/// State behind a gallery view.
///
/// The view forwards user events as display text and reads back the
/// per-card shown/hidden flags; it never filters on its own.
pub trait GalleryModel {
    /// Current label and options of every facet control, in display order.
    fn controls(&self) -> Vec<FacetControl>;

    /// The dropdown at `control` emitted a selection with this display text.
    fn select_option(&mut self, control: usize, text: &str);

    fn search_text(&self) -> &str;

    /// The search input changed to `text`.
    fn set_search(&mut self, text: &str);

    /// All cards in catalog order. Read once when the view starts.
    fn cards(&self) -> Vec<Card>;

    /// Shown flag per card, aligned with [`GalleryModel::cards`].
    fn shown(&self) -> &[bool];
}
