use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        textarea.set_placeholder_text("Search movies");

        Self { textarea }
    }

    /// Raw text of the single input line
    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Text as submitted to the search controller
    pub fn submitted_query(&self) -> String {
        self.query().trim().to_string()
    }

    /// Replace the input text, leaving the cursor at the end
    pub fn set_query(&mut self, query: &str) {
        self.textarea.select_all();
        self.textarea.cut();
        let single_line = query.replace(['\n', '\r'], " ");
        self.textarea.insert_str(&single_line);
        self.textarea.move_cursor(CursorMove::End);
    }

    pub fn clear(&mut self) {
        self.set_query("");
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
