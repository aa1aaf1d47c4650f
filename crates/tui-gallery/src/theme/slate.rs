use crate::theme::Theme;
use ratatui::style::Color;

pub const SLATE: Theme = Theme {
    brand_fg: Color::Cyan,
    text_fg: Color::Rgb(226, 232, 240),
    muted_fg: Color::DarkGray,
    border_fg: Color::Rgb(71, 85, 105),
    focus_fg: Color::LightCyan,
    control_fg: Color::Rgb(226, 232, 240),
    control_bg: Color::Rgb(30, 41, 59),
    control_active_bg: Color::Rgb(15, 23, 42),
    row_highlight_bg: Color::Rgb(30, 41, 59),
    row_highlight_fg: Color::Rgb(250, 204, 21),
    highlight_fg: Color::Yellow,
};
