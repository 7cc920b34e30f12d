use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app_state::{App, Focus};
use crate::notification::render_notification;
use crate::search::{DisplayMode, SearchPhase};
use crate::widgets::popup;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];
pub const ERROR_PANE_TEXT: &str = "Whoops, something went wrong! Please try again!";
pub const IDLE_PANE_TEXT: &str = "Type a movie title and press Enter to search.";
pub const EMPTY_PANE_TEXT: &str = "No movies to show.";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.frame_count = self.frame_count.wrapping_add(1);

        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (input_area, main_area, help_area) = (layout[0], layout[1], layout[2]);

        crate::input::input_render::render_field(self, frame, input_area);

        match self.search.display_mode() {
            DisplayMode::Loading => self.render_loader(frame, main_area),
            DisplayMode::Error => render_message(frame, main_area, ERROR_PANE_TEXT, Color::Red),
            DisplayMode::Ready if self.search.results().is_empty() => {
                let text = if self.search.phase() == SearchPhase::Idle {
                    IDLE_PANE_TEXT
                } else {
                    EMPTY_PANE_TEXT
                };
                render_message(frame, main_area, text, Color::DarkGray);
            }
            DisplayMode::Ready => crate::grid::grid_render::render_grid(self, frame, main_area),
        }

        self.render_help_line(frame, help_area);

        if let Some(movie) = self.search.selected() {
            crate::detail::detail_render::render_modal(movie, frame, main_area);
        }

        render_notification(frame, &mut self.notification);
    }

    fn render_loader(&self, frame: &mut Frame, area: Rect) {
        let spinner = SPINNER[(self.frame_count / 4) as usize % SPINNER.len()];
        let text = format!("{} Loading movies...", spinner);
        render_message(frame, area, &text, Color::Cyan);
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let hints: &[(&str, &str)] = if self.search.selected().is_some() {
            &[("Esc", "close"), ("Ctrl+C", "quit")]
        } else if self.focus == Focus::Grid {
            &[
                ("←↑↓→", "move"),
                ("Enter", "details"),
                ("Tab", "search"),
                ("q", "quit"),
            ]
        } else {
            &[("Enter", "search"), ("Tab", "results"), ("Esc", "quit")]
        };

        let mut spans = Vec::new();
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

/// Bordered pane with a single centered message
fn render_message(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Movies ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [_, message_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .areas(popup::inset_rect(inner, 1, 0));
    let message = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(color));
    frame.render_widget(message, message_area);
}
