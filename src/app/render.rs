use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::state::{App, Focus};
use crate::humanize;
use crate::notification::render_notification;

const SELECTED_BG: Color = Color::Rgb(60, 60, 60);
const STAR_COLOR: Color = Color::Yellow;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.render_input_field(frame, layout[0]);
        self.render_results_pane(frame, layout[1]);
        self.render_status_line(frame, layout[2]);

        render_notification(frame, &mut self.notification);
    }

    fn render_input_field(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::InputField {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        self.input
            .textarea
            .set_block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Search ")
                    .border_style(Style::default().fg(border_color)),
            );
        frame.render_widget(&self.input.textarea, area);
    }

    fn render_results_pane(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::ResultsPane {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let title = if self.search.loading {
            Line::from(Span::styled(
                " Searching… ",
                Style::default().fg(Color::Yellow),
            ))
        } else if self.search.query.is_empty() {
            Line::from(Span::styled(
                " Results ",
                Style::default().fg(Color::Cyan),
            ))
        } else {
            Line::from(Span::styled(
                format!(" Results for \"{}\" ", self.search.query),
                Style::default().fg(Color::Cyan),
            ))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color));

        // A failed cycle replaces the list entirely; prior results come
        // back only after the next successful search
        if self.search.error {
            let notice = Paragraph::new(Line::from(Span::styled(
                "Something went wrong while searching. Try again.",
                Style::default().fg(Color::Red),
            )))
            .block(block);
            frame.render_widget(notice, area);
            return;
        }

        if self.search.empty_result {
            let notice = Paragraph::new(Line::from(Span::styled(
                "There are no repositories to display",
                Style::default().fg(Color::Gray),
            )))
            .block(block);
            frame.render_widget(notice, area);
            return;
        }

        let viewport_height = area.height.saturating_sub(2) as usize;
        self.results_scroll
            .update_bounds(self.search.results.len(), viewport_height);

        let now = chrono::Utc::now();
        let window_end = (self.results_scroll.offset + viewport_height)
            .min(self.search.results.len());
        let mut lines = Vec::with_capacity(viewport_height);
        for (row, repo) in self.search.results[self.results_scroll.offset..window_end]
            .iter()
            .enumerate()
        {
            let selected = self.results_scroll.offset + row == self.results_scroll.selected;
            let row_style = if selected && self.focus == Focus::ResultsPane {
                Style::default().bg(SELECTED_BG).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let mut spans = vec![
                Span::styled(repo.full_name.clone(), row_style.fg(Color::White)),
                Span::styled(
                    format!(" @{}", repo.owner.login),
                    row_style.fg(Color::Magenta),
                ),
                Span::styled(
                    format!(" ★{}", repo.stargazers_count),
                    row_style.fg(STAR_COLOR),
                ),
                Span::styled(
                    format!(" · {}", humanize::last_updated(repo.updated_at, now)),
                    row_style.fg(Color::Gray),
                ),
            ];
            if let Some(description) = &repo.description {
                spans.push(Span::styled(
                    format!("  {description}"),
                    row_style.fg(Color::DarkGray),
                ));
            }
            lines.push(Line::from(spans));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let hints = match self.focus {
            Focus::InputField => " Enter: search │ Tab: results │ Esc: quit",
            Focus::ResultsPane => " j/k: move │ g/G: top/bottom │ Tab: input │ q: quit",
        };

        let mut spans = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];
        if self.focus == Focus::ResultsPane
            && let Some(repo) = self.search.results.get(self.results_scroll.selected)
        {
            spans.push(Span::styled(
                format!("  {}", repo.html_url),
                Style::default().fg(Color::Blue),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
