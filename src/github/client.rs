//! GitHub search API client
//!
//! Issues the single GET request of a search cycle and maps transport,
//! status, and decode failures into [`SearchError`]. The distinction between
//! error kinds only survives into the debug log; the UI collapses all of
//! them into one failure notice.

use reqwest::Client;
use thiserror::Error;

use super::types::{Repository, SearchResults};

/// Default repository search endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/search/repositories";

/// GitHub rejects API requests without a User-Agent
const USER_AGENT: &str = concat!("hubseek/", env!("CARGO_PKG_VERSION"));

/// Errors that can occur during a search request
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Transport-level failure (DNS, TLS, connection)
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success status
    #[error("search API returned HTTP {code}")]
    Api { code: u16 },

    /// The response body could not be decoded
    #[error("malformed search response: {0}")]
    Parse(String),
}

/// Async client for the repository search endpoint
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    endpoint: String,
    per_page: u8,
}

impl SearchClient {
    /// Create a client for `endpoint`, returning at most `per_page` rows
    /// per search (clamped to the API's 1..=100 range).
    pub fn new(endpoint: String, per_page: u8) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            per_page: per_page.clamp(1, 100),
        }
    }

    /// Fetch repositories matching `term`, most-starred first
    pub async fn search(&self, term: &str) -> Result<Vec<Repository>, SearchError> {
        let response = self
            .request(term)
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SearchError::Api {
                code: response.status().as_u16(),
            });
        }

        let results: SearchResults = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(e.to_string()))?;

        Ok(results.items)
    }

    /// Build the GET request for `term` without sending it
    fn request(&self, term: &str) -> reqwest::RequestBuilder {
        self.client
            .get(&self.endpoint)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json")
            .query(&[("q", term), ("sort", "stars"), ("order", "desc")])
            .query(&[("per_page", self.per_page)])
    }
}
