//! Single-line search input built on `tui-textarea`.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::{Frame, layout::Rect};
use tui_textarea::{CursorMove, Input, TextArea};

pub struct SearchInput<'a> {
    textarea: TextArea<'a>,
    placeholder: String,
    block: Option<Block<'a>>,
}

impl<'a> SearchInput<'a> {
    pub fn new(initial_text: impl Into<String>) -> Self {
        let mut input = Self {
            textarea: TextArea::default(),
            placeholder: String::new(),
            block: None,
        };
        input.set_text(initial_text);
        input
    }

    /// Feed a key to the textarea. Keys that would break the single line
    /// (Enter, Ctrl+M, Tab) are ignored. Returns true when the text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab => false,
            KeyCode::Char('m') if key.modifiers.contains(KeyModifiers::CONTROL) => false,
            _ => self.textarea.input(Input::from(key)),
        }
    }

    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into().replace(['\n', '\r'], " ");
        let mut textarea = TextArea::new(vec![text]);
        textarea.move_cursor(CursorMove::End);
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(self.placeholder.clone());
        if let Some(block) = self.block.clone() {
            textarea.set_block(block);
        }
        self.textarea = textarea;
    }

    pub fn set_placeholder(&mut self, text: impl Into<String>) {
        self.placeholder = text.into();
        self.textarea.set_placeholder_text(self.placeholder.clone());
    }

    pub fn set_block(&mut self, block: Block<'a>) {
        self.block = Some(block.clone());
        self.textarea.set_block(block);
    }

    /// Show the cursor only while the input holds focus.
    pub fn set_focused(&mut self, focused: bool) {
        let style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(style);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.textarea, area);
    }
}

impl Default for SearchInput<'_> {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn newlines_are_flattened() {
        let input = SearchInput::new("story\nmaps\rapi");
        assert_eq!(input.text(), "story maps api");
    }

    #[test]
    fn typing_appends_at_the_end_of_seeded_text() {
        let mut input = SearchInput::new("arc");
        assert!(input.input(key(KeyCode::Char('g'))));
        assert_eq!(input.text(), "arcg");
        assert!(input.input(key(KeyCode::Backspace)));
        assert_eq!(input.text(), "arc");
    }

    #[test]
    fn line_breaking_keys_are_ignored() {
        let mut input = SearchInput::new("arc");
        assert!(!input.input(key(KeyCode::Enter)));
        assert!(!input.input(key(KeyCode::Tab)));
        assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
        assert_eq!(input.text(), "arc");
    }

    #[test]
    fn set_text_keeps_placeholder() {
        let mut input = SearchInput::default();
        input.set_placeholder("type here");
        input.set_text("updated");
        assert_eq!(input.text(), "updated");
        input.set_text("");
        assert_eq!(input.text(), "");
    }
}
