use std::mem;

use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Cell;

/// One entry of a facet dropdown, identified by its display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlOption {
    pub text: String,
    pub selected: bool,
}

impl ControlOption {
    #[must_use]
    pub fn new(text: impl Into<String>, selected: bool) -> Self {
        Self {
            text: text.into(),
            selected,
        }
    }
}

/// A dropdown-style control: its current label and the options it offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetControl {
    pub label: String,
    pub options: Vec<ControlOption>,
}

impl FacetControl {
    #[must_use]
    pub fn new(label: impl Into<String>, options: Vec<ControlOption>) -> Self {
        Self {
            label: label.into(),
            options,
        }
    }

    /// Index of the option currently marked selected, if any.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.options.iter().position(|option| option.selected)
    }
}

/// Display content of a gallery card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub link: String,
    pub footer_start: String,
    pub footer_end: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Filters,
    Cards,
}

impl Focus {
    const ORDER: [Focus; 3] = [Focus::Search, Focus::Filters, Focus::Cards];

    /// The next focus target, forward or backward, that `available` accepts.
    #[must_use]
    pub fn cycle(self, forward: bool, available: impl Fn(Focus) -> bool) -> Focus {
        let len = Self::ORDER.len();
        let start = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        for step in 1..=len {
            let idx = if forward {
                (start + step) % len
            } else {
                (start + len - step % len) % len
            };
            let candidate = Self::ORDER[idx];
            if available(candidate) {
                return candidate;
            }
        }
        self
    }
}

#[derive(Debug, Clone)]
pub struct UiConfig {
    pub brand: String,
    pub search_title: String,
    pub search_placeholder: String,
    pub filters_title: String,
    pub cards_title: String,
    pub detail_title: String,
    pub no_results_message: String,
    pub detail_empty_message: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            brand: "gallery".to_string(),
            search_title: "Search".to_string(),
            search_placeholder: "Type to search titles and descriptions".to_string(),
            filters_title: "Filters".to_string(),
            cards_title: "Cards".to_string(),
            detail_title: "Card details".to_string(),
            no_results_message: "No cards match the current filters".to_string(),
            detail_empty_message: "No selection".to_string(),
        }
    }
}

/// A card the user activated with Enter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activated {
    pub index: usize,
    pub card: Card,
}

#[derive(Debug, Clone)]
pub struct BrowseOutcome {
    accepted: bool,
    activated: Option<Activated>,
}

impl BrowseOutcome {
    #[must_use]
    pub fn accepted(activated: Activated) -> Self {
        Self {
            accepted: true,
            activated: Some(activated),
        }
    }

    #[must_use]
    pub fn cancelled() -> Self {
        Self {
            accepted: false,
            activated: None,
        }
    }

    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    #[must_use]
    pub fn activated(&self) -> Option<&Activated> {
        self.activated.as_ref()
    }

    #[must_use]
    pub fn into_activated(self) -> Option<Activated> {
        self.activated
    }
}

/// Char indices of every case-insensitive occurrence of `needle` in `text`.
#[must_use]
pub fn match_indices(needle: &str, text: &str) -> Vec<usize> {
    if needle.is_empty() {
        return Vec::new();
    }
    let needle: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    let mut folded = Vec::new();
    let mut origin = Vec::new();
    for (idx, ch) in text.chars().enumerate() {
        for lower in ch.to_lowercase() {
            folded.push(lower);
            origin.push(idx);
        }
    }

    let mut indices = Vec::new();
    let mut start = 0;
    while start + needle.len() <= folded.len() {
        if folded[start..start + needle.len()] == needle[..] {
            indices.extend_from_slice(&origin[start..start + needle.len()]);
            start += needle.len();
        } else {
            start += 1;
        }
    }
    indices.dedup();
    indices
}

pub(crate) fn highlight_cell(text: &str, indices: Vec<usize>, highlight_style: Style) -> Cell<'_> {
    Cell::from(Text::from(highlight_line(text, indices, highlight_style)))
}

pub(crate) fn highlight_line(text: &str, indices: Vec<usize>, highlight_style: Style) -> Line<'static> {
    if indices.is_empty() {
        return Line::from(text.to_string());
    }
    let mut next = indices.into_iter().peekable();
    let mut buffer = String::new();
    let mut highlighted = false;
    let mut spans = Vec::new();

    for (idx, ch) in text.chars().enumerate() {
        let should_highlight = next.peek().copied() == Some(idx);
        if should_highlight {
            next.next();
        }
        if should_highlight != highlighted {
            if !buffer.is_empty() {
                let style = if highlighted {
                    highlight_style
                } else {
                    Style::default()
                };
                spans.push(Span::styled(mem::take(&mut buffer), style));
            }
            highlighted = should_highlight;
        }
        buffer.push(ch);
    }

    if !buffer.is_empty() {
        let style = if highlighted {
            highlight_style
        } else {
            Style::default()
        };
        spans.push(Span::styled(buffer, style));
    }

    Line::from(spans)
}
