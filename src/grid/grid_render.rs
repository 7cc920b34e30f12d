//! Result grid rendering
//!
//! Each movie becomes a bordered card; as many columns as fit the width.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, Focus};
use crate::movie::Movie;

pub const CARD_WIDTH: u16 = 30;
pub const CARD_HEIGHT: u16 = 6;

/// Number of card columns that fit in `width`
pub fn columns_for_width(width: u16) -> usize {
    (width / CARD_WIDTH).max(1) as usize
}

pub fn render_grid(app: &mut App, frame: &mut Frame, area: Rect) {
    let total = app.search.results().len();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Movies ({}) ", total))
        .border_style(Style::default().fg(if app.focus == Focus::Grid {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = columns_for_width(inner.width);
    let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;
    app.grid.set_layout(columns, visible_rows, total);

    let card_width = inner.width / columns as u16;
    let first = app.grid.scroll_row() * columns;
    let last = (first + columns * visible_rows).min(total);

    for index in first..last {
        let slot = index - first;
        let col = (slot % columns) as u16;
        let row = (slot / columns) as u16;

        let y = inner.y + row * CARD_HEIGHT;
        let height = CARD_HEIGHT.min((inner.y + inner.height).saturating_sub(y));
        if height < 3 {
            break;
        }
        let card_area = Rect {
            x: inner.x + col * card_width,
            y,
            width: card_width,
            height,
        };

        let is_cursor = app.focus == Focus::Grid && index == app.grid.cursor();
        render_card(&app.search.results()[index], is_cursor, frame, card_area);
    }
}

fn render_card(movie: &Movie, is_cursor: bool, frame: &mut Frame, area: Rect) {
    let text_width = area.width.saturating_sub(2) as usize;
    let border_style = if is_cursor {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let year = movie
        .release_year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "----".to_string());

    let lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&movie.title, text_width),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(year, Style::default().fg(Color::Gray)),
            Span::raw("  "),
            Span::styled(
                format!("★ {}", movie.rating_display()),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(Span::styled(
            movie.overview.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );

    frame.render_widget(card, area);
}

/// Cut `text` to at most `max_width` display columns, marking the cut with "…"
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width - 1 {
            break;
        }
        width += ch_width;
        result.push(ch);
    }
    result.push('…');
    result
}

#[cfg(test)]
#[path = "grid_render_tests.rs"]
mod grid_render_tests;
