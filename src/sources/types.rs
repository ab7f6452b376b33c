//! Type definitions shared across news sources.

use serde::{Deserialize, Serialize};
use tokio::time::Duration;

/// A normalized headline entry.
///
/// Every source produces these, whatever its transport. `url` is always
/// absolute once a record leaves its source; relative links are resolved
/// against the source origin during the fetch pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

// Constants
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const PAGE_REQUEST_TIMEOUT: Duration = Duration::from_secs(8);
pub const HEADLINE_LIMIT: usize = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_omitted_from_json() {
        let article = Article {
            title: Some("Markets rally".to_string()),
            url: "https://news.example.com/markets".to_string(),
            last_updated: None,
            user: None,
        };

        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["title"], "Markets rally");
        assert_eq!(json["url"], "https://news.example.com/markets");
        assert!(json.get("last_updated").is_none());
        assert!(json.get("user").is_none());
    }

    #[test]
    fn test_present_fields_serialized() {
        let article = Article {
            title: None,
            url: "https://news.example.com/markets".to_string(),
            last_updated: Some("Fri, 15 Mar 2024 10:30:00 +0000".to_string()),
            user: Some("newsroom".to_string()),
        };

        let json = serde_json::to_value(&article).unwrap();
        assert!(json["title"].is_null());
        assert_eq!(json["last_updated"], "Fri, 15 Mar 2024 10:30:00 +0000");
        assert_eq!(json["user"], "newsroom");
    }
}
