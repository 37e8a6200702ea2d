//! Transient notification overlay
//!
//! Small top-right popup for messages that should not interrupt the search
//! flow: config problems, session write failures. Warnings linger long
//! enough to read; info messages vanish quickly.

use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Notification type - determines style and duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationType {
    /// Gray, short-lived
    #[default]
    Info,
    /// Yellow, long-lived - e.g. invalid config
    Warning,
}

impl NotificationType {
    fn duration(self) -> Duration {
        match self {
            NotificationType::Info => Duration::from_millis(1500),
            NotificationType::Warning => Duration::from_secs(10),
        }
    }

    fn colors(self) -> (Color, Color, Color) {
        // (fg, bg, border)
        match self {
            NotificationType::Info => (Color::White, Color::DarkGray, Color::Gray),
            NotificationType::Warning => (Color::Black, Color::Yellow, Color::Yellow),
        }
    }
}

/// A single notification with message and expiry
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    created_at: Instant,
    duration: Duration,
}

impl Notification {
    fn new(message: &str, notification_type: NotificationType) -> Self {
        Self {
            message: message.to_string(),
            notification_type,
            created_at: Instant::now(),
            duration: notification_type.duration(),
        }
    }

    fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

/// Holds at most one notification; a newer one replaces the current
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an info notification (gray, 1.5s)
    pub fn show(&mut self, message: &str) {
        self.current = Some(Notification::new(message, NotificationType::Info));
    }

    /// Show a warning notification (yellow, 10s)
    pub fn show_warning(&mut self, message: &str) {
        self.current = Some(Notification::new(message, NotificationType::Warning));
    }

    /// Clear expired notification, returns true if cleared
    pub fn clear_if_expired(&mut self) -> bool {
        if let Some(ref notif) = self.current
            && notif.is_expired()
        {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

/// Render the notification in the top-right corner of the frame
///
/// Call after the main UI so the popup overlays it.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let Some(notif) = notification.current() else {
        return;
    };

    let (fg, bg, border) = notif.notification_type.colors();

    // message + 2 padding + 2 borders, clipped to the frame
    let frame_area = frame.area();
    let margin = 2;
    let width = (notif.message.len() as u16 + 4).min(frame_area.width.saturating_sub(margin * 2));
    let height = 3u16.min(frame_area.height.saturating_sub(margin * 2));

    let area = Rect {
        x: frame_area.width.saturating_sub(width + margin),
        y: margin,
        width,
        height,
    };

    let paragraph = Paragraph::new(Line::from(Span::raw(format!(" {} ", notif.message))))
        .style(Style::default().fg(fg).bg(bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_show_replaces_current() {
        let mut state = NotificationState::new();
        state.show("first");
        state.show("second");
        assert_eq!(state.current().unwrap().message, "second");
    }

    #[test]
    fn test_warning_outlives_info_duration() {
        let info = Notification::new("a", NotificationType::Info);
        let warning = Notification::new("b", NotificationType::Warning);
        assert!(warning.duration > info.duration);
    }

    #[test]
    fn test_clear_if_expired() {
        let mut state = NotificationState::new();
        state.show("fleeting");

        // Shorten the fuse rather than sleeping 1.5s
        if let Some(ref mut notif) = state.current {
            notif.duration = Duration::from_millis(10);
        }

        assert!(!state.clear_if_expired());
        thread::sleep(Duration::from_millis(20));
        assert!(state.clear_if_expired());
        assert!(state.current().is_none());
    }

    #[test]
    fn test_fresh_notification_is_not_expired() {
        let mut state = NotificationState::new();
        state.show_warning("Invalid config");
        assert!(!state.clear_if_expired());
        assert_eq!(
            state.current().unwrap().notification_type,
            NotificationType::Warning
        );
    }
}
