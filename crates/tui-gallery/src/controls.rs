//! Facet control bar and its dropdown.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Tabs};

use crate::theme::Theme;
use crate::types::FacetControl;

const DROPDOWN_WIDTH: u16 = 40;
const DROPDOWN_MAX_ROWS: u16 = 12;

/// Render one tab per control; the active control is highlighted.
pub fn render_control_bar(
    controls: &[FacetControl],
    active: usize,
    focused: bool,
    title: &str,
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
) {
    let titles: Vec<Line> = controls
        .iter()
        .enumerate()
        .map(|(idx, control)| {
            Line::from(format!(" {} ▾ ", control.label))
                .style(theme.control_style(focused && idx == active))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(active)
        .divider(" ")
        .highlight_style(if focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        })
        .block(
            Block::default()
                .border_type(BorderType::Rounded)
                .borders(Borders::ALL)
                .title(title)
                .border_style(theme.border_style(focused)),
        );

    frame.render_widget(tabs, area);
}

/// An open dropdown: which control it belongs to and the highlighted option.
#[derive(Debug, Clone)]
pub struct Dropdown {
    pub control: usize,
    pub state: ListState,
}

impl Dropdown {
    /// Open on the currently selected option, or the first one.
    #[must_use]
    pub fn open(control: usize, controls: &[FacetControl]) -> Self {
        let selected = controls
            .get(control)
            .and_then(FacetControl::selected_index)
            .unwrap_or(0);
        let mut state = ListState::default();
        state.select(Some(selected));
        Self { control, state }
    }

    pub fn move_up(&mut self) {
        if let Some(selected) = self.state.selected()
            && selected > 0
        {
            self.state.select(Some(selected - 1));
        }
    }

    pub fn move_down(&mut self, len: usize) {
        if let Some(selected) = self.state.selected()
            && selected + 1 < len
        {
            self.state.select(Some(selected + 1));
        }
    }

    /// Display text of the highlighted option.
    #[must_use]
    pub fn highlighted_text<'c>(&self, controls: &'c [FacetControl]) -> Option<&'c str> {
        let control = controls.get(self.control)?;
        let option = control.options.get(self.state.selected()?)?;
        Some(option.text.as_str())
    }

    pub fn render(&mut self, controls: &[FacetControl], frame: &mut Frame, anchor: Rect, theme: &Theme) {
        let Some(control) = controls.get(self.control) else {
            return;
        };
        let area = dropdown_area(anchor, frame.area(), control.options.len());
        let items: Vec<ListItem> = control
            .options
            .iter()
            .map(|option| {
                let marker = if option.selected { "● " } else { "  " };
                ListItem::new(format!("{marker}{}", option.text))
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .border_type(BorderType::Rounded)
                    .borders(Borders::ALL)
                    .title(control.label.as_str())
                    .border_style(theme.border_style(true)),
            )
            .highlight_style(theme.row_highlight_style())
            .highlight_symbol("▶ ");

        frame.render_widget(Clear, area);
        frame.render_stateful_widget(list, area, &mut self.state);
    }
}

/// Place the dropdown just below `anchor`, clipped to `bounds`.
fn dropdown_area(anchor: Rect, bounds: Rect, options: usize) -> Rect {
    let rows = u16::try_from(options)
        .unwrap_or(u16::MAX)
        .min(DROPDOWN_MAX_ROWS)
        .saturating_add(2);
    let top = anchor.y.saturating_add(anchor.height);
    let height = rows.min(bounds.bottom().saturating_sub(top));
    Rect::new(anchor.x, top, DROPDOWN_WIDTH.min(anchor.width), height)
}
