//! GitHub search API response types
//!
//! Deserialization targets for the repository search endpoint. Only the
//! fields the UI renders are kept; everything else in the payload is ignored.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Top-level body of a repository search response
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults {
    pub items: Vec<Repository>,
}

/// A single repository record, in API response order
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    pub updated_at: DateTime<Utc>,
    pub owner: Owner,
}

/// The owning user or organization
///
/// Individual fields are not validated - a record with a missing login or
/// avatar still renders, it just renders less.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Owner {
    #[serde(default)]
    pub login: String,
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_single_item_response() {
        let body = r#"{
            "total_count": 1,
            "incomplete_results": false,
            "items": [{
                "id": 1,
                "full_name": "preactjs/preact",
                "html_url": "https://github.com/preactjs/preact",
                "description": "Fast 3kB React alternative",
                "stargazers_count": 37000,
                "updated_at": "2024-01-01T00:00:00Z",
                "owner": {"login": "preactjs", "avatar_url": "a.png"}
            }]
        }"#;

        let results: SearchResults = serde_json::from_str(body).unwrap();
        assert_eq!(results.items.len(), 1);

        let repo = &results.items[0];
        assert_eq!(repo.id, 1);
        assert_eq!(repo.full_name, "preactjs/preact");
        assert_eq!(repo.html_url, "https://github.com/preactjs/preact");
        assert_eq!(repo.stargazers_count, 37000);
        assert_eq!(
            repo.updated_at,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(repo.owner.login, "preactjs");
        assert_eq!(repo.owner.avatar_url.as_deref(), Some("a.png"));
    }

    #[test]
    fn test_parse_empty_result_list() {
        let body = r#"{"total_count": 0, "incomplete_results": false, "items": []}"#;
        let results: SearchResults = serde_json::from_str(body).unwrap();
        assert!(results.items.is_empty());
    }

    #[test]
    fn test_parse_preserves_response_order() {
        let body = r#"{"items": [
            {"id": 2, "full_name": "b/b", "html_url": "u", "description": null,
             "stargazers_count": 5, "updated_at": "2024-01-02T00:00:00Z", "owner": {}},
            {"id": 1, "full_name": "a/a", "html_url": "u", "description": null,
             "stargazers_count": 9, "updated_at": "2024-01-01T00:00:00Z", "owner": {}}
        ]}"#;
        let results: SearchResults = serde_json::from_str(body).unwrap();
        let ids: Vec<u64> = results.items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_parse_tolerates_missing_owner_fields() {
        let body = r#"{"items": [{
            "id": 7,
            "full_name": "x/y",
            "html_url": "https://github.com/x/y",
            "updated_at": "2023-06-15T12:30:00Z",
            "owner": {}
        }]}"#;
        let results: SearchResults = serde_json::from_str(body).unwrap();
        let repo = &results.items[0];
        assert_eq!(repo.owner.login, "");
        assert!(repo.owner.avatar_url.is_none());
        assert!(repo.description.is_none());
        assert_eq!(repo.stargazers_count, 0);
    }

    #[test]
    fn test_parse_rejects_malformed_body() {
        assert!(serde_json::from_str::<SearchResults>("{\"items\": 42}").is_err());
        assert!(serde_json::from_str::<SearchResults>("not json").is_err());
    }
}
