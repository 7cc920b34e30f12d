//! Search Worker Thread
//!
//! Runs searches on a background thread with its own tokio runtime so the UI
//! never blocks on the network. Receives requests via channel and sends one
//! tagged reply per request back to the main thread.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::JoinHandle;

use tokio_util::sync::CancellationToken;

use crate::error::SearchError;
use crate::movie::Movie;
use crate::tmdb::TmdbClient;

/// A search to run on the worker
#[derive(Debug)]
pub struct SearchRequest {
    pub query: String,
    /// Echoed back in the reply so stale results can be filtered
    pub request_id: u64,
    pub cancel_token: CancellationToken,
}

/// Outcome of one `SearchRequest`
#[derive(Debug)]
pub struct SearchReply {
    pub request_id: u64,
    pub result: Result<Vec<Movie>, SearchError>,
}

/// Spawn the search worker thread
///
/// The worker exits when the request channel is closed. A client
/// configuration error is reported as the result of every request.
pub fn spawn_worker(
    client: Result<TmdbClient, SearchError>,
    request_rx: Receiver<SearchRequest>,
    reply_tx: Sender<SearchReply>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        worker_loop(client, request_rx, reply_tx);
    })
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    client: Result<TmdbClient, SearchError>,
    request_rx: Receiver<SearchRequest>,
    reply_tx: Sender<SearchReply>,
) {
    if let Err(e) = &client {
        log::debug!("Search client not configured: {}", e);
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("Failed to start search runtime: {}", e);
            let error = SearchError::Network(format!("runtime unavailable: {}", e));
            while let Ok(request) = request_rx.recv() {
                let reply = SearchReply {
                    request_id: request.request_id,
                    result: Err(error.clone()),
                };
                if reply_tx.send(reply).is_err() {
                    break;
                }
            }
            return;
        }
    };

    while let Ok(request) = request_rx.recv() {
        let result = match &client {
            Ok(client) => runtime.block_on(
                client.search_with_cancel(&request.query, &request.cancel_token),
            ),
            Err(e) => Err(e.clone()),
        };

        if matches!(result, Err(SearchError::Cancelled)) {
            log::debug!("Request {} cancelled", request.request_id);
        }

        let reply = SearchReply {
            request_id: request.request_id,
            result,
        };
        if reply_tx.send(reply).is_err() {
            // Main thread disconnected
            break;
        }
    }

    log::debug!("Search worker thread shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
