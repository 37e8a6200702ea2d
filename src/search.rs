//! Search cycle state machine
//!
//! Tracks the submitted query, its in-flight request, and the result flags
//! the UI renders. Submission is the only trigger for a network call;
//! keystrokes never reach the wire.

pub mod events;
pub mod search_state;

pub use search_state::{SearchRequest, SearchResponse, SearchState};
