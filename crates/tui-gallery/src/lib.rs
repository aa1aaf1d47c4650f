pub mod app;
pub mod cards;
pub mod controls;
pub mod input;
pub mod model;
pub mod theme;
pub mod types;

pub use app::App;
pub use model::GalleryModel;
pub use theme::Theme;
pub use types::{Activated, BrowseOutcome, Card, ControlOption, FacetControl, Focus, UiConfig};

/// Builder for an interactive gallery over any [`GalleryModel`].
///
/// Mirrors the page chrome of the web gallery: a facet bar, a search box
/// and a card list, any of which but the cards can be hidden.
pub struct Browser<M: GalleryModel> {
    model: M,
    title: Option<String>,
    theme: Option<Theme>,
    ui_config: Option<UiConfig>,
    hide_filters: bool,
    hide_search: bool,
}

impl<M: GalleryModel> Browser<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            title: None,
            theme: None,
            ui_config: None,
            hide_filters: false,
            hide_search: false,
        }
    }

    /// Context shown next to the brand in the header, e.g. the catalog source.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_ui_config(mut self, ui_config: UiConfig) -> Self {
        self.ui_config = Some(ui_config);
        self
    }

    pub fn hide_filters(mut self, hide: bool) -> Self {
        self.hide_filters = hide;
        self
    }

    pub fn hide_search(mut self, hide: bool) -> Self {
        self.hide_search = hide;
        self
    }

    /// Build the app without entering the terminal. Useful for rendering
    /// against a test backend.
    pub fn into_app(self) -> App<M> {
        let mut app = App::new(self.model, self.ui_config.unwrap_or_default());
        if let Some(theme) = self.theme {
            app.theme = theme;
        }
        app.context = self.title;
        app.set_hidden(self.hide_filters, self.hide_search);
        app
    }

    /// Run the interactive gallery until the user activates a card or quits.
    pub fn run(self) -> anyhow::Result<BrowseOutcome> {
        self.into_app().run()
    }
}
