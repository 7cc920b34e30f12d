use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::movie::Movie;
use crate::widgets::popup;

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 12;

fn label(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::Gray))
}

/// Build the modal body for `movie`
pub fn build_content(movie: &Movie) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        movie.title.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];

    if let Some(original) = movie.distinct_original_title() {
        lines.push(Line::from(Span::styled(
            original.to_string(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    lines.push(Line::default());

    lines.push(Line::from(vec![
        label("Release date: "),
        Span::raw(
            movie
                .release_date_long()
                .unwrap_or_else(|| "Unknown".to_string()),
        ),
    ]));
    lines.push(Line::from(vec![
        label("Rating:       "),
        Span::styled(
            format!("★ {}", movie.rating_display()),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!(" ({} votes)", movie.vote_count),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    if let Some(language) = &movie.original_language {
        lines.push(Line::from(vec![
            label("Language:     "),
            Span::raw(language.to_uppercase()),
        ]));
    }
    if let Some(url) = movie.poster_url() {
        lines.push(Line::from(vec![
            label("Poster:       "),
            Span::styled(url, Style::default().fg(Color::Blue)),
        ]));
    }

    lines.push(Line::default());
    let overview = if movie.overview.trim().is_empty() {
        "No overview available.".to_string()
    } else {
        movie.overview.clone()
    };
    lines.push(Line::from(overview));

    lines
}

pub fn render_modal(movie: &Movie, frame: &mut Frame, area: Rect) {
    let modal_area = popup::centered_percent(area, 70, 70, (MIN_WIDTH, MIN_HEIGHT));
    popup::clear_area(frame, modal_area);

    let modal = Paragraph::new(build_content(movie))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Movie ")
                .title_bottom(Line::from(" Esc to close ").right_aligned())
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(modal, modal_area);
}

#[cfg(test)]
#[path = "detail_render_tests.rs"]
mod detail_render_tests;
