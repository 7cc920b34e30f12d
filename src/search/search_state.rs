//! Search controller state
//!
//! Tracks results, loading/error flags and the selected movie, and drives the
//! `Idle -> Loading -> {Ready, Empty, Error}` lifecycle of a search.

use std::sync::mpsc::{Receiver, Sender};

use tokio_util::sync::CancellationToken;

use super::worker::{SearchReply, SearchRequest};
use crate::error::SearchError;
use crate::movie::Movie;

pub const NO_RESULTS_MESSAGE: &str = "No movies found for your request.";
pub const FETCH_ERROR_MESSAGE: &str = "An error occurred while fetching movies.";

/// Lifecycle phase of the most recent search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Loading,
    Ready,
    Empty,
    Error,
}

/// What the main pane shows; loading wins over error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Loading,
    Error,
    Ready,
}

/// User-facing message produced when a search settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNotice {
    Info(&'static str),
    Error(&'static str),
}

#[derive(Debug)]
struct InFlight {
    request_id: u64,
    cancel_token: CancellationToken,
}

pub struct SearchState {
    results: Vec<Movie>,
    is_loading: bool,
    has_error: bool,
    selected: Option<Movie>,
    phase: SearchPhase,
    last_query: Option<String>,
    /// Incremented for each search; replies tagged with an older id are dropped
    request_id: u64,
    in_flight: Option<InFlight>,
    request_tx: Option<Sender<SearchRequest>>,
    reply_rx: Option<Receiver<SearchReply>>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
            is_loading: false,
            has_error: false,
            selected: None,
            phase: SearchPhase::Idle,
            last_query: None,
            request_id: 0,
            in_flight: None,
            request_tx: None,
            reply_rx: None,
        }
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(&mut self, request_tx: Sender<SearchRequest>, reply_rx: Receiver<SearchReply>) {
        self.request_tx = Some(request_tx);
        self.reply_rx = Some(reply_rx);
    }

    pub fn results(&self) -> &[Movie] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    pub fn selected(&self) -> Option<&Movie> {
        self.selected.as_ref()
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn display_mode(&self) -> DisplayMode {
        if self.is_loading {
            DisplayMode::Loading
        } else if self.has_error {
            DisplayMode::Error
        } else {
            DisplayMode::Ready
        }
    }

    /// Submit a query to the worker
    ///
    /// Empty queries are forwarded as-is. Returns a notice only when the
    /// request could not be dispatched at all.
    pub fn submit_query(&mut self, query: &str) -> Option<SearchNotice> {
        let request_id = self.begin(query);
        let cancel_token = match &self.in_flight {
            Some(in_flight) => in_flight.cancel_token.clone(),
            None => CancellationToken::new(),
        };

        let sent = self.request_tx.as_ref().is_some_and(|tx| {
            tx.send(SearchRequest {
                query: query.to_string(),
                request_id,
                cancel_token,
            })
            .is_ok()
        });

        if sent {
            log::debug!("Dispatched search {} for {:?}", request_id, query);
            None
        } else {
            self.settle(
                request_id,
                Err(SearchError::NotConfigured(
                    "search worker is not running".to_string(),
                )),
            )
        }
    }

    /// Enter `Loading` for a new search and return its request id
    ///
    /// Cancels whatever search was still in flight.
    pub fn begin(&mut self, query: &str) -> u64 {
        self.cancel_in_flight_request();

        self.is_loading = true;
        self.has_error = false;
        self.phase = SearchPhase::Loading;
        self.last_query = Some(query.to_string());
        self.request_id = self.request_id.wrapping_add(1);
        self.in_flight = Some(InFlight {
            request_id: self.request_id,
            cancel_token: CancellationToken::new(),
        });
        self.request_id
    }

    /// Apply the outcome of search `request_id`
    ///
    /// Outcomes for superseded or already-settled requests are ignored.
    /// `is_loading` is false afterwards on every path.
    pub fn settle(
        &mut self,
        request_id: u64,
        result: Result<Vec<Movie>, SearchError>,
    ) -> Option<SearchNotice> {
        if request_id != self.request_id || !self.is_loading {
            log::debug!(
                "Discarding reply for request {} (current: {})",
                request_id,
                self.request_id
            );
            return None;
        }

        self.is_loading = false;
        self.in_flight = None;

        match result {
            Ok(movies) if movies.is_empty() => {
                self.results.clear();
                self.selected = None;
                self.phase = SearchPhase::Empty;
                Some(SearchNotice::Info(NO_RESULTS_MESSAGE))
            }
            Ok(movies) => {
                log::debug!("Search {} returned {} movies", request_id, movies.len());
                self.results = movies;
                self.phase = SearchPhase::Ready;
                None
            }
            Err(SearchError::Cancelled) => {
                self.phase = if self.results.is_empty() {
                    SearchPhase::Idle
                } else {
                    SearchPhase::Ready
                };
                None
            }
            Err(e) => {
                log::error!(
                    "Search {} for {:?} failed: {}",
                    request_id,
                    self.last_query.as_deref().unwrap_or_default(),
                    e
                );
                self.has_error = true;
                self.phase = SearchPhase::Error;
                Some(SearchNotice::Error(FETCH_ERROR_MESSAGE))
            }
        }
    }

    /// Drain worker replies, returning the notice of the search that settled
    pub fn poll_response(&mut self) -> Option<SearchNotice> {
        let replies: Vec<SearchReply> = match &self.reply_rx {
            Some(rx) => rx.try_iter().collect(),
            None => return None,
        };

        let mut notice = None;
        for reply in replies {
            if let Some(n) = self.settle(reply.request_id, reply.result) {
                notice = Some(n);
            }
        }
        notice
    }

    /// Cancel the in-flight search, if any
    ///
    /// Returns true if a request was cancelled.
    pub fn cancel_in_flight_request(&mut self) -> bool {
        match self.in_flight.take() {
            Some(in_flight) => {
                in_flight.cancel_token.cancel();
                log::debug!("Cancelled request {}", in_flight.request_id);
                true
            }
            None => false,
        }
    }

    /// Select a movie for the detail view
    ///
    /// Rejected while there are no results.
    pub fn select_item(&mut self, movie: &Movie) -> bool {
        if self.results.is_empty() {
            return false;
        }
        self.selected = Some(movie.clone());
        true
    }

    /// Select the result at `index`
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.results.get(index) {
            Some(movie) => {
                self.selected = Some(movie.clone());
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
