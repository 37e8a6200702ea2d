//! Search input field state

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

/// Single-line text field holding the literal, not-yet-submitted input
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    /// Create the input field, seeded with `initial` (restored session query
    /// or CLI argument)
    pub fn new(initial: &str) -> Self {
        let mut textarea = if initial.is_empty() {
            TextArea::default()
        } else {
            let mut seeded = TextArea::new(vec![initial.to_string()]);
            seeded.move_cursor(CursorMove::End);
            seeded
        };

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("preact");

        Self { textarea }
    }

    /// The literal current contents of the field
    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let state = InputState::new("");
        assert_eq!(state.text(), "");
    }

    #[test]
    fn test_seeded_input() {
        let state = InputState::new("preact");
        assert_eq!(state.text(), "preact");
    }

    #[test]
    fn test_typing_appends() {
        let mut state = InputState::new("rea");
        state.textarea.insert_str("ct");
        assert_eq!(state.text(), "react");
    }
}
