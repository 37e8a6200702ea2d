use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::{App, Focus};

/// Timeout for event polling - allows periodic UI refresh for notification
/// expiry and worker responses
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                // Bracketed paste goes straight into the input field
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                Event::Resize(_, _) => {
                    self.mark_dirty();
                }
                _ => {}
            }
        }

        // Expired notifications need one more frame to disappear
        if self.notification.clear_if_expired() {
            self.mark_dirty();
        }

        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Ctrl+C always quits, regardless of focus
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if key.code == KeyCode::Tab {
            self.toggle_focus();
            return;
        }

        match self.focus {
            Focus::InputField => self.handle_input_field_key(key),
            Focus::ResultsPane => self.handle_results_pane_key(key),
        }
    }

    /// Paste inserts text only; submission stays explicit. Line breaks are
    /// stripped so the single-line field never diverges from what a later
    /// submit would send.
    fn handle_paste_event(&mut self, text: String) {
        if self.focus == Focus::InputField {
            let flattened: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
            self.input.textarea.insert_str(&flattened);
            self.mark_dirty();
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::InputField => Focus::ResultsPane,
            Focus::ResultsPane => Focus::InputField,
        };
        self.mark_dirty();
    }

    /// Keys when the input field is focused
    fn handle_input_field_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_query(),
            KeyCode::Esc => self.quit(),
            KeyCode::Down => {
                // Convenience: drop into the result list
                if !self.search.results.is_empty() {
                    self.focus = Focus::ResultsPane;
                    self.mark_dirty();
                }
            }
            _ => {
                // Everything else edits the field; no network effect
                if self.input.textarea.input(key) {
                    self.mark_dirty();
                }
            }
        }
    }

    /// Keys when the results pane is focused
    fn handle_results_pane_key(&mut self, key: KeyEvent) {
        let row_count = self.search.results.len();

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.results_scroll.select_next(row_count),
            KeyCode::Up | KeyCode::Char('k') => {
                if self.results_scroll.selected == 0 {
                    self.focus = Focus::InputField;
                } else {
                    self.results_scroll.select_previous();
                }
            }
            KeyCode::PageDown => self.results_scroll.page_down(row_count),
            KeyCode::PageUp => self.results_scroll.page_up(),
            KeyCode::Char('g') | KeyCode::Home => self.results_scroll.jump_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.results_scroll.jump_to_bottom(row_count),
            KeyCode::Char('i') | KeyCode::Char('/') => self.focus = Focus::InputField,
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            _ => return,
        }

        self.mark_dirty();
    }
}
