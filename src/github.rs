//! GitHub search API integration
//!
//! One GET per search cycle against the repository search endpoint, issued
//! from a dedicated worker thread so the UI never blocks on the network.

pub mod client;
pub mod types;
pub mod worker;

pub use client::{SearchClient, SearchError};
pub use types::Repository;
