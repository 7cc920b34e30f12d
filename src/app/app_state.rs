use std::sync::mpsc;
use std::time::Duration;

use crate::config::Config;
use crate::error::SearchError;
use crate::grid::GridState;
use crate::input::InputState;
use crate::notification::NotificationState;
use crate::search::{DisplayMode, SearchNotice, SearchState, spawn_worker};
use crate::tmdb::TmdbClient;

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Grid,
}

/// Application state
pub struct App {
    pub input: InputState,
    pub search: SearchState,
    pub grid: GridState,
    pub notification: NotificationState,
    pub focus: Focus,
    pub frame_count: u64,
    pub should_quit: bool,
}

impl App {
    /// Create an App with no worker attached
    pub fn new(config: &Config) -> Self {
        Self {
            input: InputState::new(),
            search: SearchState::new(),
            grid: GridState::new(),
            notification: NotificationState::new(Duration::from_secs(
                config.ui.notification_secs,
            )),
            focus: Focus::Input,
            frame_count: 0,
            should_quit: false,
        }
    }

    /// Create an App and spawn the search worker for `client`
    pub fn with_worker(config: &Config, client: Result<TmdbClient, SearchError>) -> Self {
        let mut app = Self::new(config);

        let (request_tx, request_rx) = mpsc::channel();
        let (reply_tx, reply_rx) = mpsc::channel();
        spawn_worker(client, request_rx, reply_tx);
        app.search.set_channels(request_tx, reply_rx);

        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Submit the text in the input field
    pub fn submit_search(&mut self) {
        let query = self.input.submitted_query();
        self.grid.reset();
        if let Some(notice) = self.search.submit_query(&query) {
            self.show_notice(notice);
        }
    }

    /// Apply worker replies; call once per frame
    pub fn poll_search(&mut self) {
        if let Some(notice) = self.search.poll_response() {
            self.show_notice(notice);
        }
        if self.focus == Focus::Grid && !self.grid_has_results() {
            self.focus = Focus::Input;
        }
    }

    pub fn show_notice(&mut self, notice: SearchNotice) {
        match notice {
            SearchNotice::Info(message) => self.notification.show(message),
            SearchNotice::Error(message) => self.notification.show_error(message),
        }
    }

    /// Whether the grid can take focus
    pub fn grid_has_results(&self) -> bool {
        self.search.display_mode() == DisplayMode::Ready && !self.search.results().is_empty()
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
