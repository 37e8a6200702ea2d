//! Search worker thread
//!
//! Runs the HTTP side of a search cycle off the UI thread. Requests arrive
//! on an mpsc channel, only the newest pending request is issued, and tagged
//! responses go back to the main thread where stale ones are filtered out.
//!
//! Uses a single-threaded tokio runtime because there is never more than one
//! request on the wire at a time.

use std::sync::mpsc::{Receiver, Sender};

use super::client::SearchClient;
use crate::config::Config;
use crate::search::search_state::{SearchRequest, SearchResponse};

/// Spawn the search worker thread
///
/// Creates a background thread with a tokio runtime that listens for
/// requests on `request_rx`, issues the GET against the configured endpoint,
/// and sends the tagged outcome back on `response_tx`.
pub fn spawn_worker(
    config: &Config,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    let client = SearchClient::new(config.search.endpoint.clone(), config.search.per_page);

    std::thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("failed to create search runtime: {e}");
                return;
            }
        };

        rt.block_on(worker_loop(client, request_rx, response_tx));
    });
}

/// Main worker loop - processes requests until the channel is closed
///
/// Blocking `recv()` is fine here since we're in a dedicated thread. Before
/// issuing HTTP the backlog is collapsed to the newest request: superseded
/// queries are answered by newer ones anyway, so their requests never go out.
async fn worker_loop(
    client: SearchClient,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    while let Ok(mut request) = request_rx.recv() {
        while let Ok(newer) = request_rx.try_recv() {
            request = newer;
        }

        let SearchRequest::Query { query, request_id } = request;

        let response = match client.search(&query).await {
            Ok(items) => {
                log::debug!(
                    "request {} for {:?} returned {} items",
                    request_id,
                    query,
                    items.len()
                );
                SearchResponse::Results { items, request_id }
            }
            Err(e) => {
                log::warn!("request {request_id} for {query:?} failed: {e}");
                SearchResponse::Failed { request_id }
            }
        };

        if response_tx.send(response).is_err() {
            // Main thread disconnected
            return;
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
