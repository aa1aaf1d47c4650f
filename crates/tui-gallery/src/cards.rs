use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
    Block, BorderType, Borders, Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation,
    ScrollbarState, Table, TableState, Wrap,
};

use crate::theme::Theme;
use crate::types::{Card, UiConfig, highlight_cell, highlight_line, match_indices};

/// Rows for the shown cards only, title matches highlighted.
pub fn build_card_rows<'a>(
    shown: &'a [usize],
    cards: &'a [Card],
    search: &str,
    theme: &Theme,
) -> Vec<Row<'a>> {
    shown
        .iter()
        .filter_map(|&index| cards.get(index))
        .map(|card| {
            Row::new([
                highlight_cell(
                    &card.title,
                    match_indices(search, &card.title),
                    theme.match_style(),
                ),
                Cell::from(card.footer_end.as_str()),
                Cell::from(card.footer_start.as_str()),
            ])
        })
        .collect()
}

pub struct CardPane<'a> {
    pub shown: &'a [usize],
    pub cards: &'a [Card],
    pub search: &'a str,
    pub focused: bool,
}

pub fn render_cards(
    frame: &mut Frame,
    area: Rect,
    table_state: &mut TableState,
    ui: &UiConfig,
    pane: CardPane<'_>,
    theme: &Theme,
) {
    let rows = build_card_rows(pane.shown, pane.cards, pane.search, theme);
    let widths = [
        Constraint::Percentage(60),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
    ];
    let header = Row::new(["Title", "Level", "Duration"])
        .style(Style::new().fg(theme.brand_fg).add_modifier(Modifier::BOLD))
        .height(1);
    let title = format!(
        "{} ({}/{})",
        ui.cards_title,
        pane.shown.len(),
        pane.cards.len()
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .border_type(BorderType::Rounded)
                .title(title)
                .borders(Borders::ALL)
                .border_style(theme.border_style(pane.focused)),
        )
        .row_highlight_style(theme.row_highlight_style())
        .highlight_symbol("▶ ");
    frame.render_stateful_widget(table, area, table_state);

    let mut scrollbar_state = ScrollbarState::default()
        .content_length(pane.shown.len())
        .position(table_state.selected().unwrap_or(0));
    let scrollbar = Scrollbar::default()
        .orientation(ScrollbarOrientation::VerticalRight)
        .thumb_style(Style::new().bg(theme.highlight_fg));
    frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
}

pub fn render_detail(
    frame: &mut Frame,
    area: Rect,
    card: Option<&Card>,
    search: &str,
    ui: &UiConfig,
    theme: &Theme,
) {
    let block = Block::default()
        .border_type(BorderType::Rounded)
        .title(ui.detail_title.as_str())
        .borders(Borders::ALL)
        .border_style(theme.border_style(false));

    let Some(card) = card else {
        let empty = Paragraph::new(ui.detail_empty_message.as_str())
            .alignment(Alignment::Center)
            .style(theme.muted_style())
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let heading = Style::new().fg(theme.brand_fg).add_modifier(Modifier::BOLD);
    let mut lines = vec![
        highlight_line(
            &card.title,
            match_indices(search, &card.title),
            theme.match_style().add_modifier(Modifier::UNDERLINED),
        )
        .style(Style::new().fg(theme.text_fg).add_modifier(Modifier::BOLD)),
        Line::from(""),
        highlight_line(
            &card.description,
            match_indices(search, &card.description),
            theme.match_style(),
        ),
        Line::from(""),
    ];
    for (label, value) in [
        ("Link", card.link.as_str()),
        ("Thumbnail", card.thumbnail.as_str()),
    ] {
        if value.is_empty() {
            continue;
        }
        lines.push(Line::from(Span::styled(label, heading)));
        lines.push(Line::from(Span::styled(value.to_string(), theme.muted_style())));
    }
    let footer: Vec<&str> = [card.footer_start.as_str(), card.footer_end.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    if !footer.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(footer.join("  •  ")));
    }

    let detail = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(detail, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str) -> Card {
        Card {
            title: title.to_string(),
            footer_start: "30 Minutes".to_string(),
            footer_end: "Beginner".to_string(),
            ..Card::default()
        }
    }

    #[test]
    fn rows_follow_shown_indices_only() {
        let cards = vec![card("a"), card("b"), card("c")];
        let rows = build_card_rows(&[0, 2], &cards, "", &Theme::default());
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn out_of_range_indices_are_skipped() {
        let cards = vec![card("a")];
        let rows = build_card_rows(&[0, 5], &cards, "a", &Theme::default());
        assert_eq!(rows.len(), 1);
    }
}
