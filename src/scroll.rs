//! Result list scrolling
//!
//! Cursor-plus-window state for the results pane: `selected` is the
//! highlighted row index, `offset` the first visible row. The window slides
//! only when the cursor would leave it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub selected: usize,
    pub offset: usize,
    pub viewport_height: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            offset: 0,
            viewport_height: 0,
        }
    }

    /// Back to the top; called when a new search cycle starts
    pub fn reset(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    /// Clamp cursor and window to `row_count` rows in a viewport of
    /// `viewport_height`; call before every render.
    pub fn update_bounds(&mut self, row_count: usize, viewport_height: usize) {
        self.viewport_height = viewport_height;

        if row_count == 0 {
            self.reset();
            return;
        }

        self.selected = self.selected.min(row_count - 1);
        self.scroll_into_view();
        self.offset = self.offset.min(row_count.saturating_sub(1));
    }

    pub fn select_next(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(row_count - 1);
        self.scroll_into_view();
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.scroll_into_view();
    }

    pub fn page_down(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }
        let half_page = (self.viewport_height / 2).max(1);
        self.selected = (self.selected + half_page).min(row_count - 1);
        self.scroll_into_view();
    }

    pub fn page_up(&mut self) {
        let half_page = (self.viewport_height / 2).max(1);
        self.selected = self.selected.saturating_sub(half_page);
        self.scroll_into_view();
    }

    pub fn jump_to_top(&mut self) {
        self.selected = 0;
        self.scroll_into_view();
    }

    pub fn jump_to_bottom(&mut self, row_count: usize) {
        self.selected = row_count.saturating_sub(1);
        self.scroll_into_view();
    }

    /// Slide the window so the cursor stays visible
    fn scroll_into_view(&mut self) {
        if self.viewport_height == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + self.viewport_height {
            self.offset = self.selected + 1 - self.viewport_height;
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}
