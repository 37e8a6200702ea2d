use super::input_state::InputState;
use crate::notification::NotificationState;
use crate::scroll::ScrollState;
use crate::search::{self, SearchState};
use crate::session::Session;

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputField,
    ResultsPane,
}

/// Application state
pub struct App {
    pub input: InputState,
    pub search: SearchState,
    pub session: Session,
    pub focus: Focus,
    pub results_scroll: ScrollState,
    pub notification: NotificationState,
    pub should_quit: bool,
    dirty: bool,
}

impl App {
    /// Create a new App seeded with the initial query (CLI argument or
    /// restored session, resolved by the caller). The seeded search itself
    /// is submitted by the caller once the worker channels are attached.
    pub fn new(initial_query: &str, session: Session) -> Self {
        Self {
            input: InputState::new(initial_query),
            search: SearchState::new(),
            session,
            focus: Focus::InputField,
            results_scroll: ScrollState::new(),
            notification: NotificationState::new(),
            should_quit: false,
            dirty: true,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// The literal current contents of the input field
    pub fn input_text(&self) -> &str {
        self.input.text()
    }

    /// Submit the current input as the query.
    ///
    /// The sole trigger for a search cycle: Enter, and the seeded query at
    /// startup. The session is published synchronously, before any response
    /// can arrive.
    pub fn submit_query(&mut self) {
        let term = self.input_text().to_string();

        if self.search.submit(&term) {
            if let Err(e) = self.session.publish(&term) {
                self.notification
                    .show_warning(&format!("Could not save session: {e}"));
            }
            self.results_scroll.reset();
        }

        self.mark_dirty();
    }

    /// Drain completed search cycles from the worker.
    /// Returns true if any state changed.
    pub fn poll_search_responses(&mut self) -> bool {
        let changed = search::events::poll_response_channel(&mut self.search);
        if changed {
            self.mark_dirty();
        }
        changed
    }

    pub fn should_render(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}
