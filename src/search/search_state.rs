//! Search state management
//!
//! Holds the submitted query, the result list, and the UI flags for the
//! current search cycle, plus the channel handles for communication with the
//! worker thread. Every request is tagged with an id so responses that
//! belong to a superseded query can be discarded.

use std::sync::mpsc::{Receiver, Sender};

use crate::github::types::Repository;

/// Request messages sent to the search worker thread
#[derive(Debug)]
pub enum SearchRequest {
    /// Run one search cycle for `query`
    Query {
        query: String,
        /// Unique id for this request, echoed back on the response and used
        /// to filter stale results
        request_id: u64,
    },
}

/// Response messages received from the search worker thread
#[derive(Debug)]
pub enum SearchResponse {
    /// The request completed; `items` may be empty
    Results {
        items: Vec<Repository>,
        request_id: u64,
    },
    /// The request failed (network, status, or decode)
    Failed { request_id: u64 },
}

/// Search state
///
/// Lifecycle per query: `Idle -> Loading -> {Success | EmptySuccess |
/// Failed}`, re-entering `Loading` on every submit. `loading` and `error`
/// are never both true; `empty_result` is only true when the last request
/// succeeded with zero items.
pub struct SearchState {
    /// Last submitted term; changes only on submit, never on keystroke
    pub query: String,
    /// Current result rows, in API response order
    pub results: Vec<Repository>,
    /// True only while a request is outstanding
    pub loading: bool,
    /// True when the most recent completed request returned zero results
    pub empty_result: bool,
    /// True when the most recent request failed
    pub error: bool,
    /// Channel to send requests to the worker thread
    pub request_tx: Option<Sender<SearchRequest>>,
    /// Channel to receive responses from the worker thread
    pub response_rx: Option<Receiver<SearchResponse>>,
    /// Current request id, incremented on every submit. Responses carrying
    /// an older id belong to a superseded cycle.
    request_id: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            loading: false,
            empty_result: false,
            error: false,
            request_tx: None,
            response_rx: None,
            request_id: 0,
        }
    }

    /// Attach the worker channels
    pub fn set_channels(&mut self, tx: Sender<SearchRequest>, rx: Receiver<SearchResponse>) {
        self.request_tx = Some(tx);
        self.response_rx = Some(rx);
    }

    /// Id of the most recently submitted request
    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    /// Submit `term` as the new query.
    ///
    /// A non-empty term starts a search cycle: flags reset, a new request id
    /// is minted, and the tagged request goes to the worker. An empty term
    /// only updates `query` - no network call, prior results stay put.
    ///
    /// Returns true if a cycle was started.
    pub fn submit(&mut self, term: &str) -> bool {
        self.query = term.to_string();
        if self.query.is_empty() {
            return false;
        }

        self.loading = true;
        self.empty_result = false;
        self.error = false;
        self.request_id = self.request_id.wrapping_add(1);

        if let Some(ref tx) = self.request_tx {
            let request = SearchRequest::Query {
                query: self.query.clone(),
                request_id: self.request_id,
            };
            if tx.send(request).is_err() {
                log::error!("search worker unavailable for request {}", self.request_id);
                self.loading = false;
                self.error = true;
                return false;
            }
        }

        true
    }

    /// Apply a successful response for the current cycle
    pub fn apply_results(&mut self, items: Vec<Repository>) {
        self.empty_result = items.is_empty();
        self.results = items;
        self.loading = false;
        self.error = false;
    }

    /// Apply a failed response for the current cycle.
    ///
    /// Prior results are kept untouched; the UI swaps the list for a failure
    /// notice while they remain in memory for the next successful cycle.
    pub fn apply_failure(&mut self) {
        self.error = true;
        self.loading = false;
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
