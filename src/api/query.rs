//! Todo Query
//!
//! Server-side filters and their query-string encoding.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::ApiConfig;

const OWNER_KEY: &str = "owner";
const CATEGORY_KEY: &str = "category";
const BODY_KEY: &str = "body";
const STATUS_KEY: &str = "status";
const LIMIT_KEY: &str = "limit";

/// Characters left as-is in query values (RFC 3986 unreserved)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Filters sent to the backend as query parameters
///
/// Absent and empty-string fields are left out of the request. `status` is
/// always sent when present, including `Some(false)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoQuery {
    pub owner: Option<String>,
    pub category: Option<String>,
    pub body: Option<String>,
    pub status: Option<bool>,
    pub limit: Option<usize>,
}

impl TodoQuery {
    /// Parameters in a fixed order: owner, category, body, status, limit
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let texts = [
            (OWNER_KEY, &self.owner),
            (CATEGORY_KEY, &self.category),
            (BODY_KEY, &self.body),
        ];
        for (key, value) in texts {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                pairs.push((key, value.to_string()));
            }
        }
        if let Some(status) = self.status {
            let value = if status { "complete" } else { "incomplete" };
            pairs.push((STATUS_KEY, value.to_string()));
        }
        // The backend rejects limits below 1
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            pairs.push((LIMIT_KEY, limit.to_string()));
        }
        pairs
    }

    /// Percent-encoded query string without the leading `?`
    pub fn to_query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, QUERY_VALUE)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Full URL of the collection read for this query
    pub fn request_url(&self, config: &ApiConfig) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            config.todos_url()
        } else {
            format!("{}?{}", config.todos_url(), query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig::new("http://localhost:4567/api/")
    }

    #[test]
    fn test_empty_query_has_no_parameters() {
        let empty = TodoQuery::default();
        assert_eq!(empty.request_url(&config()), "http://localhost:4567/api/todos");

        let blank = TodoQuery {
            owner: Some(String::new()),
            category: Some(String::new()),
            body: Some(String::new()),
            status: None,
            limit: Some(0),
        };
        assert!(blank.query_pairs().is_empty());
        assert_eq!(blank.request_url(&config()), "http://localhost:4567/api/todos");
    }

    #[test]
    fn test_false_status_is_sent() {
        let query = TodoQuery { status: Some(false), ..Default::default() };
        assert_eq!(query.to_query_string(), "status=incomplete");

        let query = TodoQuery { status: Some(true), ..Default::default() };
        assert_eq!(query.to_query_string(), "status=complete");
    }

    #[test]
    fn test_all_parameters() {
        let query = TodoQuery {
            owner: Some("Fry".into()),
            category: Some("video games".into()),
            body: Some("sunt ex".into()),
            status: Some(true),
            limit: Some(7),
        };
        assert_eq!(
            query.request_url(&config()),
            "http://localhost:4567/api/todos?owner=Fry&category=video%20games&body=sunt%20ex&status=complete&limit=7"
        );
    }

    #[test]
    fn test_values_are_escaped() {
        let query = TodoQuery { owner: Some("a&b=c".into()), ..Default::default() };
        assert_eq!(query.to_query_string(), "owner=a%26b%3Dc");
    }
}
