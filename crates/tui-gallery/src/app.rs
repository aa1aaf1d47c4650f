use std::time::Duration;

use anyhow::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, TableState},
};

use crate::cards::{CardPane, render_cards, render_detail};
use crate::controls::{Dropdown, render_control_bar};
use crate::input::SearchInput;
use crate::model::GalleryModel;
use crate::theme::Theme;
use crate::types::{Activated, BrowseOutcome, Card, Focus, UiConfig};

pub struct App<M: GalleryModel> {
    pub model: M,
    pub focus: Focus,
    pub search_input: SearchInput<'static>,
    pub table_state: TableState,
    /// Indices into `cards` of the cards currently shown, in catalog order.
    pub shown: Vec<usize>,
    pub active_control: usize,
    pub dropdown: Option<Dropdown>,
    pub(crate) cards: Vec<Card>,
    pub(crate) ui_config: UiConfig,
    pub(crate) theme: Theme,
    pub(crate) context: Option<String>,
    pub(crate) hide_filters: bool,
    pub(crate) hide_search: bool,
}

impl<M: GalleryModel> App<M> {
    pub fn new(model: M, ui_config: UiConfig) -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));
        let mut search_input = SearchInput::new(model.search_text());
        search_input.set_placeholder(ui_config.search_placeholder.clone());
        let cards = model.cards();
        let mut app = Self {
            model,
            focus: Focus::Search,
            search_input,
            table_state,
            shown: Vec::new(),
            active_control: 0,
            dropdown: None,
            cards,
            ui_config,
            theme: Theme::default(),
            context: None,
            hide_filters: false,
            hide_search: false,
        };
        app.sync_shown();
        app
    }

    /// Hide parts of the chrome; focus moves to the next visible pane.
    pub fn set_hidden(&mut self, hide_filters: bool, hide_search: bool) {
        self.hide_filters = hide_filters;
        self.hide_search = hide_search;
        if !self.is_available(self.focus) {
            self.focus = self.focus.cycle(true, |focus| self.is_available(focus));
        }
    }

    pub fn run(&mut self) -> Result<BrowseOutcome> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let result = loop {
            if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
                break Err(err.into());
            }

            match event::poll(Duration::from_millis(250)) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(err) => break Err(err.into()),
            }
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(outcome) = self.handle_key(key) {
                        break Ok(outcome);
                    }
                }
                Ok(_) => {}
                Err(err) => break Err(err.into()),
            }
        };

        ratatui::restore();
        result
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area().inner(Margin {
            vertical: 1,
            horizontal: 2,
        });

        let mut constraints = vec![Constraint::Length(2)];
        if !self.hide_filters {
            constraints.push(Constraint::Length(3));
        }
        if !self.hide_search {
            constraints.push(Constraint::Length(3));
        }
        constraints.push(Constraint::Min(5));
        constraints.push(Constraint::Length(1));
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut slot = layout.iter().copied();
        let header_area = slot.next().unwrap_or_default();
        let controls_area = if self.hide_filters { None } else { slot.next() };
        let search_area = if self.hide_search { None } else { slot.next() };
        let body_area = slot.next().unwrap_or_default();
        let footer_area = slot.next().unwrap_or_default();

        self.render_header(frame, header_area);

        let controls = self.model.controls();
        if let Some(controls_area) = controls_area {
            render_control_bar(
                &controls,
                self.active_control,
                self.focus == Focus::Filters,
                &self.ui_config.filters_title,
                frame,
                controls_area,
                &self.theme,
            );
        }
        if let Some(search_area) = search_area {
            self.render_search(frame, search_area);
        }
        self.render_body(frame, body_area);
        self.render_footer(frame, footer_area);

        if let (Some(dropdown), Some(anchor)) = (self.dropdown.as_mut(), controls_area) {
            dropdown.render(&controls, frame, anchor, &self.theme);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let mut brand = vec![Span::styled(
            self.ui_config.brand.as_str(),
            self.theme.brand_style(),
        )];
        if let Some(context) = &self.context {
            brand.push(Span::raw("  •  "));
            brand.push(Span::styled(context.as_str(), self.theme.muted_style()));
        }
        let header = Paragraph::new(Text::from(vec![
            Line::from(brand),
            Line::from(vec![
                Span::raw(format!("{}: ", self.ui_config.cards_title)),
                Span::styled(
                    format!("{} of {}", self.shown.len(), self.cards.len()),
                    Style::new().fg(self.theme.highlight_fg),
                ),
            ]),
        ]))
        .alignment(Alignment::Left);
        frame.render_widget(header, area);
    }

    fn render_search(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Search;
        self.search_input.set_block(
            Block::default()
                .border_type(BorderType::Rounded)
                .borders(Borders::ALL)
                .title(self.ui_config.search_title.as_str().to_owned())
                .border_style(self.theme.border_style(focused)),
        );
        self.search_input.set_focused(focused);
        self.search_input.render(frame, area);
    }

    fn render_body(&mut self, frame: &mut Frame, area: Rect) {
        let areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);
        let (table_area, detail_area) = (areas[0], areas[1]);

        let search = self.model.search_text().to_owned();
        if self.shown.is_empty() {
            let empty = Paragraph::new(self.ui_config.no_results_message.as_str())
                .alignment(Alignment::Center)
                .style(self.theme.muted_style())
                .block(
                    Block::default()
                        .border_type(BorderType::Rounded)
                        .title(self.ui_config.cards_title.as_str())
                        .borders(Borders::ALL)
                        .border_style(self.theme.border_style(self.focus == Focus::Cards)),
                );
            frame.render_widget(Clear, table_area);
            frame.render_widget(empty, table_area);
        } else {
            render_cards(
                frame,
                table_area,
                &mut self.table_state,
                &self.ui_config,
                CardPane {
                    shown: &self.shown,
                    cards: &self.cards,
                    search: &search,
                    focused: self.focus == Focus::Cards,
                },
                &self.theme,
            );
        }

        render_detail(
            frame,
            detail_area,
            self.selected_card().map(|(_, card)| card),
            &search,
            &self.ui_config,
            &self.theme,
        );
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let key = |label: &'static str| {
            Span::styled(
                label,
                Style::new()
                    .fg(self.theme.brand_fg)
                    .add_modifier(Modifier::BOLD),
            )
        };
        let mut spans = vec![key("Enter"), Span::raw(" open  •  ")];
        if self.focus == Focus::Filters {
            spans.extend([key("←/→"), Span::raw(" facet  •  ")]);
        }
        spans.extend([
            key("Tab"),
            Span::raw(" switch pane  •  "),
            key("Esc"),
            Span::raw(" quit"),
        ]);
        let footer = Paragraph::new(Line::from(spans)).style(self.theme.muted_style());
        frame.render_widget(footer, area);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<BrowseOutcome> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(BrowseOutcome::cancelled());
        }
        if self.dropdown.is_some() {
            self.handle_dropdown_key(key);
            return None;
        }

        match key.code {
            KeyCode::Esc => return Some(BrowseOutcome::cancelled()),
            KeyCode::Tab => self.cycle_focus(true),
            KeyCode::BackTab => self.cycle_focus(false),
            KeyCode::Up if self.focus != Focus::Filters => self.move_selection_up(),
            KeyCode::Down if self.focus != Focus::Filters => self.move_selection_down(),
            KeyCode::Enter if self.focus != Focus::Filters => {
                return self
                    .selected_card()
                    .map(|(index, card)| {
                        BrowseOutcome::accepted(Activated {
                            index,
                            card: card.clone(),
                        })
                    });
            }
            _ => match self.focus {
                Focus::Search => {
                    if self.search_input.input(key) {
                        let text = self.search_input.text().to_owned();
                        self.model.set_search(&text);
                        self.sync_shown();
                    }
                }
                Focus::Filters => self.handle_filters_key(key),
                Focus::Cards => match key.code {
                    KeyCode::Home => self.select_row(0),
                    KeyCode::End => self.select_row(self.shown.len().saturating_sub(1)),
                    KeyCode::Char('q') if key.modifiers.is_empty() => {
                        return Some(BrowseOutcome::cancelled());
                    }
                    _ => {}
                },
            },
        }
        None
    }

    fn handle_filters_key(&mut self, key: KeyEvent) {
        let count = self.model.controls().len();
        match key.code {
            KeyCode::Left => self.active_control = self.active_control.saturating_sub(1),
            KeyCode::Right => {
                if self.active_control + 1 < count {
                    self.active_control += 1;
                }
            }
            KeyCode::Enter | KeyCode::Down | KeyCode::Char(' ') if count > 0 => {
                self.dropdown = Some(Dropdown::open(self.active_control, &self.model.controls()));
            }
            _ => {}
        }
    }

    fn handle_dropdown_key(&mut self, key: KeyEvent) {
        let controls = self.model.controls();
        let Some(dropdown) = self.dropdown.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => self.dropdown = None,
            KeyCode::Up => dropdown.move_up(),
            KeyCode::Down => {
                let len = controls
                    .get(dropdown.control)
                    .map_or(0, |control| control.options.len());
                dropdown.move_down(len);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let control = dropdown.control;
                if let Some(text) = dropdown.highlighted_text(&controls) {
                    self.model.select_option(control, text);
                    self.sync_shown();
                }
                self.dropdown = None;
            }
            _ => {}
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        self.focus = self.focus.cycle(forward, |focus| self.is_available(focus));
    }

    fn is_available(&self, focus: Focus) -> bool {
        match focus {
            Focus::Search => !self.hide_search,
            Focus::Filters => !self.hide_filters,
            Focus::Cards => true,
        }
    }

    fn move_selection_up(&mut self) {
        if let Some(selected) = self.table_state.selected()
            && selected > 0
        {
            self.table_state.select(Some(selected - 1));
        }
    }

    fn move_selection_down(&mut self) {
        if let Some(selected) = self.table_state.selected()
            && selected + 1 < self.shown.len()
        {
            self.table_state.select(Some(selected + 1));
        }
    }

    fn select_row(&mut self, row: usize) {
        if !self.shown.is_empty() {
            self.table_state.select(Some(row.min(self.shown.len() - 1)));
        }
    }

    /// Catalog index and card under the table cursor.
    pub fn selected_card(&self) -> Option<(usize, &Card)> {
        let index = *self.shown.get(self.table_state.selected()?)?;
        self.cards.get(index).map(|card| (index, card))
    }

    /// Pull the shown flags from the model after any mutation.
    pub fn sync_shown(&mut self) {
        self.shown = self
            .model
            .shown()
            .iter()
            .enumerate()
            .filter_map(|(index, shown)| shown.then_some(index))
            .filter(|index| *index < self.cards.len())
            .collect();

        if self.shown.is_empty() {
            self.table_state.select(None);
        } else if let Some(selected) = self.table_state.selected() {
            if selected >= self.shown.len() {
                self.table_state.select(Some(self.shown.len() - 1));
            }
        } else {
            self.table_state.select(Some(0));
        }
    }
}
