use ratatui::style::{Color, Modifier, Style};

// Theme modules and their canonical names are listed once; the macro expands
// to the `pub mod`/`pub use` lines, the `NAMES` constant and `by_name`.
macro_rules! declare_themes {
    ( $( ($mod:ident, $const:ident) ),* $(,)? ) => {
        $( pub mod $mod; )*
        $( pub use $mod::$const; )*

        /// Canonical theme names supported by the UI.
        pub const NAMES: &[&str] = &[ $( stringify!($mod) ),* ];

        /// Lookup a Theme by case-insensitive name.
        pub fn by_name(name: &str) -> Option<Theme> {
            match name.to_lowercase().as_str() {
                $( stringify!($mod) => Some($const), )*
                _ => None,
            }
        }
    };
}

declare_themes!((slate, SLATE), (solarized, SOLARIZED), (light, LIGHT),);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub brand_fg: Color,
    pub text_fg: Color,
    pub muted_fg: Color,
    pub border_fg: Color,
    pub focus_fg: Color,
    pub control_fg: Color,
    pub control_bg: Color,
    pub control_active_bg: Color,
    pub row_highlight_bg: Color,
    pub row_highlight_fg: Color,
    pub highlight_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        SLATE
    }
}

impl Theme {
    #[must_use]
    pub fn brand_style(&self) -> Style {
        Style::new().fg(self.brand_fg).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::new().fg(self.muted_fg)
    }

    /// Border style for a pane, brighter when it holds focus.
    #[must_use]
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::new().fg(self.focus_fg)
        } else {
            Style::new().fg(self.border_fg)
        }
    }

    #[must_use]
    pub fn control_style(&self, active: bool) -> Style {
        let bg = if active {
            self.control_active_bg
        } else {
            self.control_bg
        };
        Style::new().fg(self.control_fg).bg(bg)
    }

    #[must_use]
    pub fn row_highlight_style(&self) -> Style {
        Style::new()
            .bg(self.row_highlight_bg)
            .fg(self.row_highlight_fg)
    }

    #[must_use]
    pub fn match_style(&self) -> Style {
        Style::new()
            .fg(self.highlight_fg)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(by_name("Light"), Some(LIGHT));
        assert_eq!(by_name("SOLARIZED"), Some(SOLARIZED));
        assert_eq!(by_name("neon"), None);
    }

    #[test]
    fn names_follow_declaration_order() {
        assert_eq!(NAMES, &["slate", "solarized", "light"]);
    }
}
