use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::state::{NotificationKind, NotificationState};
use crate::widgets::popup;

const MAX_WIDTH: u16 = 48;

/// Render the current notification in the top-right corner
pub fn render_notification(frame: &mut Frame, state: &mut NotificationState) {
    state.clear_if_expired();
    let Some(notification) = state.current() else {
        return;
    };

    let (title, color) = match notification.kind {
        NotificationKind::Info => (" Info ", Color::Cyan),
        NotificationKind::Error => (" Error ", Color::Red),
    };

    let frame_area = frame.area();
    let text_width = notification.message.width() as u16;
    let width = (text_width + 4).min(MAX_WIDTH).min(frame_area.width);
    let inner_width = width.saturating_sub(2).max(1);
    let height = (text_width.div_ceil(inner_width) + 2).min(frame_area.height);

    let area = Rect {
        x: frame_area.x + frame_area.width.saturating_sub(width + 1),
        y: frame_area.y + u16::from(frame_area.height > height),
        width,
        height,
    };

    popup::clear_area(frame, area);

    let widget = Paragraph::new(notification.message.as_str())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(widget, area);
}
