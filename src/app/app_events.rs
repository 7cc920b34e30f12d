use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app_state::{App, Focus};

impl App {
    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        // The detail modal captures everything while open
        if self.search.selected().is_some() {
            self.handle_modal_key(key);
            return;
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::Grid => self.handle_grid_key(key),
        }
    }

    /// Keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }
        false
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q') => {
                self.search.clear_selection();
            }
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_search(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Down => {
                if self.grid_has_results() {
                    self.focus = Focus::Grid;
                }
            }
            _ => {
                self.input.textarea.input(key);
            }
        }
    }

    fn handle_grid_key(&mut self, key: KeyEvent) {
        let total = self.search.results().len();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.grid.move_left(total),
            KeyCode::Right | KeyCode::Char('l') => self.grid.move_right(total),
            KeyCode::Up | KeyCode::Char('k') => self.grid.move_up(total),
            KeyCode::Down | KeyCode::Char('j') => self.grid.move_down(total),
            KeyCode::Home | KeyCode::Char('g') => self.grid.move_to_first(total),
            KeyCode::End | KeyCode::Char('G') => self.grid.move_to_last(total),
            KeyCode::Enter => {
                self.search.select_index(self.grid.cursor());
            }
            KeyCode::Tab | KeyCode::Esc | KeyCode::Char('/') | KeyCode::Char('i') => {
                self.focus = Focus::Input;
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }
}
