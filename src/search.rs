//! Search module
//!
//! Owns the movie search lifecycle: the controller state machine and the
//! background worker that performs HTTP requests off the UI thread.

mod search_state;
pub mod worker;

pub use search_state::{
    DisplayMode, FETCH_ERROR_MESSAGE, NO_RESULTS_MESSAGE, SearchNotice, SearchPhase, SearchState,
};
pub use worker::{SearchReply, SearchRequest, spawn_worker};
