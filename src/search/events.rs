//! Search response handling
//!
//! Polls the worker response channel from the main event loop and applies
//! completed cycles to [`SearchState`]. Responses tagged with an id older
//! than the current one are discarded, so a slow response to an earlier
//! query can never clobber the results of a later one.

use std::sync::mpsc::TryRecvError;

use super::search_state::{SearchResponse, SearchState};

/// Poll the response channel for completed search cycles
///
/// Non-blocking; meant to be called once per event-loop iteration.
/// Returns true if any state changed.
pub fn poll_response_channel(state: &mut SearchState) -> bool {
    let Some(ref rx) = state.response_rx else {
        return false;
    };

    let mut responses = Vec::new();
    let mut disconnected = false;

    loop {
        match rx.try_recv() {
            Ok(response) => responses.push(response),
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                disconnected = true;
                break;
            }
        }
    }

    let had_responses = !responses.is_empty();

    for response in responses {
        process_response(state, response);
    }

    if disconnected && state.loading {
        log::error!("search worker disconnected with a request in flight");
        state.apply_failure();
        return true;
    }

    had_responses
}

/// Apply a single response, discarding it when stale
pub fn process_response(state: &mut SearchState, response: SearchResponse) {
    let current_request_id = state.current_request_id();

    match response {
        SearchResponse::Results { items, request_id } => {
            if request_id < current_request_id {
                log::debug!(
                    "ignoring stale results from request {} (current: {})",
                    request_id,
                    current_request_id
                );
                return;
            }
            state.apply_results(items);
        }
        SearchResponse::Failed { request_id } => {
            if request_id < current_request_id {
                log::debug!(
                    "ignoring stale failure from request {} (current: {})",
                    request_id,
                    current_request_id
                );
                return;
            }
            state.apply_failure();
        }
    }
}
