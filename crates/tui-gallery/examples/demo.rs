use tui_gallery::{Browser, Card, ControlOption, FacetControl, GalleryModel, UiConfig, theme};

/// A tiny in-memory gallery with a single "Levels" facet.
struct Demo {
    cards: Vec<Card>,
    search: String,
    level: Option<String>,
    shown: Vec<bool>,
}

impl Demo {
    fn new() -> Self {
        let cards = [
            ("Get started with maps", "Build your first web map.", "Beginner", "15"),
            ("Tell a story", "Combine maps and narrative text.", "Beginner", "45"),
            ("Automate with Python", "Script a geoprocessing workflow.", "Advanced", "90"),
        ]
        .into_iter()
        .map(|(title, description, level, minutes)| Card {
            title: title.to_string(),
            description: description.to_string(),
            footer_start: format!("{minutes} Minutes"),
            footer_end: level.to_string(),
            ..Card::default()
        })
        .collect();
        let mut demo = Self {
            cards,
            search: String::new(),
            level: None,
            shown: Vec::new(),
        };
        demo.refresh();
        demo
    }

    fn refresh(&mut self) {
        let search = self.search.to_lowercase();
        self.shown = self
            .cards
            .iter()
            .map(|card| {
                let text = format!("{} {}", card.title, card.description).to_lowercase();
                text.contains(&search)
                    && self.level.as_ref().is_none_or(|level| &card.footer_end == level)
            })
            .collect();
    }
}

impl GalleryModel for Demo {
    fn controls(&self) -> Vec<FacetControl> {
        let label = match &self.level {
            Some(level) => format!("Levels: {level}"),
            None => "Levels".to_string(),
        };
        let mut options = vec![ControlOption::new("All Levels", self.level.is_none())];
        for level in ["Advanced", "Beginner"] {
            options.push(ControlOption::new(level, self.level.as_deref() == Some(level)));
        }
        vec![FacetControl::new(label, options)]
    }

    fn select_option(&mut self, _control: usize, text: &str) {
        self.level = (text != "All Levels").then(|| text.to_string());
        self.refresh();
    }

    fn search_text(&self) -> &str {
        &self.search
    }

    fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
        self.refresh();
    }

    fn cards(&self) -> Vec<Card> {
        self.cards.clone()
    }

    fn shown(&self) -> &[bool] {
        &self.shown
    }
}

fn main() -> anyhow::Result<()> {
    let outcome = Browser::new(Demo::new())
        .with_title("demo catalog")
        .with_theme(theme::by_name("solarized").unwrap_or_default())
        .with_ui_config(UiConfig {
            brand: "demo gallery".to_string(),
            ..UiConfig::default()
        })
        .run()?;

    match outcome.activated() {
        Some(activated) => println!("Opened: {}", activated.card.title),
        None => println!("No selection"),
    }
    Ok(())
}
