//! Tests for widgets/popup

use super::*;

fn area(x: u16, y: u16, width: u16, height: u16) -> Rect {
    Rect {
        x,
        y,
        width,
        height,
    }
}

#[test]
fn test_centered_popup_basic() {
    let popup = centered_popup(area(0, 0, 100, 50), 40, 20);

    assert_eq!(popup, area(30, 15, 40, 20));
}

#[test]
fn test_centered_popup_respects_area_origin() {
    let popup = centered_popup(area(10, 5, 100, 50), 40, 20);

    assert_eq!(popup, area(40, 20, 40, 20));
}

#[test]
fn test_centered_popup_too_large_is_clamped() {
    let popup = centered_popup(area(0, 0, 100, 50), 200, 100);

    assert_eq!(popup, area(0, 0, 100, 50));
}

#[test]
fn test_centered_percent() {
    let popup = centered_percent(area(0, 0, 100, 40), 80, 50, (10, 5));

    assert_eq!(popup.width, 80);
    assert_eq!(popup.height, 20);
    assert_eq!(popup.x, 10);
    assert_eq!(popup.y, 10);
}

#[test]
fn test_centered_percent_uses_minimum() {
    let popup = centered_percent(area(0, 0, 40, 20), 10, 10, (30, 12));

    assert_eq!(popup.width, 30);
    assert_eq!(popup.height, 12);
}

#[test]
fn test_inset_rect() {
    let inner = inset_rect(area(0, 0, 20, 10), 2, 1);

    assert_eq!(inner, area(2, 1, 16, 8));
}

#[test]
fn test_inset_rect_larger_than_area_collapses() {
    let inner = inset_rect(area(0, 0, 4, 2), 5, 5);

    assert_eq!(inner.width, 0);
    assert_eq!(inner.height, 0);
}
