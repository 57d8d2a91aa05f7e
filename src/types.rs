//! Core types for queries and rank reports.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// HTTP method for a page query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Plain GET request.
    Get,
    /// POST with a form-encoded body.
    Post,
}

/// One result-page request, built for a single keyword at a single offset.
///
/// Queries are immutable once built; each crawl round replaces the previous
/// round's query list entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Fully substituted result-page URL.
    pub url: String,
    /// Request method. Template-built queries are GET; POST exists for
    /// engines whose result endpoint takes form fields.
    pub method: HttpMethod,
    /// Form-encoded body for POST queries.
    pub body: Option<String>,
}

impl Query {
    /// Build a GET query for `url`.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Get,
            body: None,
        }
    }

    /// Build a POST query for `url` with a form-encoded `body`.
    pub fn post(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Post,
            body: Some(body.into()),
        }
    }
}

/// Snapshot of a finished (or deadline-cut) tracking run.
///
/// A keyword missing from `results` was not found within the offset limit —
/// absence is the not-found outcome, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankReport {
    /// Keyword → absolute 1-based position across all result pages.
    pub results: HashMap<String, u64>,
    /// Keyword → elapsed seconds from session start to discovery,
    /// rounded to 3 decimal places.
    pub timings: HashMap<String, f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_query_has_no_body() {
        let query = Query::get("http://example.com/search?q=rust&start=0");
        assert_eq!(query.method, HttpMethod::Get);
        assert!(query.body.is_none());
        assert!(query.url.contains("q=rust"));
    }

    #[test]
    fn post_query_carries_body() {
        let query = Query::post("http://example.com/search", "q=rust&start=0");
        assert_eq!(query.method, HttpMethod::Post);
        assert_eq!(query.body.as_deref(), Some("q=rust&start=0"));
    }

    #[test]
    fn rank_report_serde_round_trip() {
        let mut results = HashMap::new();
        results.insert("rust web framework".to_string(), 13u64);
        let mut timings = HashMap::new();
        timings.insert("rust web framework".to_string(), 1.204f64);

        let report = RankReport { results, timings };
        let json = serde_json::to_string(&report).expect("serialize");
        let decoded: RankReport = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded.results.get("rust web framework"), Some(&13));
        assert_eq!(decoded.timings.get("rust web framework"), Some(&1.204));
    }
}
