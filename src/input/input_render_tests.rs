//! Tests for input_render

use crate::app::Focus;
use crate::test_utils::test_helpers::{render_to_string, test_app};

#[test]
fn test_input_shows_query() {
    let mut app = test_app();
    app.input.set_query("Blade Runner");

    let output = render_to_string(&mut app, 60, 10);

    assert!(output.contains(" Search "));
    assert!(output.contains("Blade Runner"));
}

#[test]
fn test_input_shows_placeholder_when_empty() {
    let mut app = test_app();

    let output = render_to_string(&mut app, 60, 10);

    assert!(output.contains("Search movies"));
}

#[test]
fn test_input_render_with_grid_focus() {
    let mut app = test_app();
    app.focus = Focus::Grid;
    app.input.set_query("Alien");

    let output = render_to_string(&mut app, 60, 10);

    assert!(output.contains("Alien"));
}
