use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect of `width` x `height` centered inside `area`, clamped to fit
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    Rect {
        x: area.x + (area.width - popup_width) / 2,
        y: area.y + (area.height - popup_height) / 2,
        width: popup_width,
        height: popup_height,
    }
}

/// Centered rect sized as a percentage of `area`, never smaller than the minimums
pub fn centered_percent(area: Rect, percent_x: u16, percent_y: u16, min: (u16, u16)) -> Rect {
    let width = ((area.width as u32 * percent_x.min(100) as u32) / 100) as u16;
    let height = ((area.height as u32 * percent_y.min(100) as u32) / 100) as u16;
    centered_popup(area, width.max(min.0), height.max(min.1))
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    let horizontal_margin = horizontal_margin.min(area.width / 2);
    let vertical_margin = vertical_margin.min(area.height / 2);
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width - horizontal_margin * 2,
        height: area.height - vertical_margin * 2,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
