use crate::theme::Theme;
use ratatui::style::Color;

pub const LIGHT: Theme = Theme {
    brand_fg: Color::Rgb(0, 102, 153),
    text_fg: Color::Rgb(15, 23, 42),
    muted_fg: Color::Rgb(100, 100, 100),
    border_fg: Color::Rgb(180, 180, 180),
    focus_fg: Color::Rgb(0, 102, 153),
    control_fg: Color::Rgb(15, 23, 42),
    control_bg: Color::Rgb(226, 232, 240),
    control_active_bg: Color::Rgb(200, 200, 200),
    row_highlight_bg: Color::Rgb(200, 200, 200),
    row_highlight_fg: Color::Rgb(120, 120, 0),
    highlight_fg: Color::Rgb(170, 60, 0),
};
