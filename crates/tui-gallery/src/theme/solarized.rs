use crate::theme::Theme;
use ratatui::style::Color;

pub const SOLARIZED: Theme = Theme {
    brand_fg: Color::Rgb(42, 161, 152),
    text_fg: Color::Rgb(238, 232, 213),
    muted_fg: Color::Rgb(88, 110, 117),
    border_fg: Color::Rgb(7, 54, 66),
    focus_fg: Color::Rgb(38, 139, 210),
    control_fg: Color::Rgb(253, 246, 227),
    control_bg: Color::Rgb(0, 43, 54),
    control_active_bg: Color::Rgb(7, 54, 66),
    row_highlight_bg: Color::Rgb(0, 43, 54),
    row_highlight_fg: Color::Rgb(181, 137, 0),
    highlight_fg: Color::Rgb(203, 75, 22),
};
