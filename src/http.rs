//! HTTP fetch boundary: batch page retrieval with User-Agent rotation.
//!
//! [`PageFetcher`] is the capability the tracker consumes; [`HttpFetcher`]
//! is its [`reqwest`] implementation with browser-like headers, cookie
//! support, rotating User-Agent strings and an optional session-wide proxy.

use crate::config::TrackerConfig;
use crate::error::TrackError;
use crate::proxy;
use crate::types::{HttpMethod, Query};
use rand::seq::SliceRandom;
use std::future::Future;

/// Realistic browser User-Agent strings, one chosen per session.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// Batch page retrieval capability consumed by the tracker.
///
/// One call per crawl round: all queries are dispatched concurrently and
/// the call returns once every request has completed (a full barrier).
/// The returned bodies are index-aligned with `queries`. An individual
/// failed request yields an empty body, never an error, so a bad round
/// only defers its keywords to the next one.
pub trait PageFetcher: Send + Sync {
    /// Fetch every query in the batch, returning one raw body per query.
    fn fetch_all(&self, queries: &[Query]) -> impl Future<Output = Vec<String>> + Send;
}

/// [`reqwest`]-backed [`PageFetcher`].
///
/// Owns one HTTP client for the whole session; connection handles live and
/// die inside the client, so callers never manage request lifecycle.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher for one tracking session.
    ///
    /// The client has:
    /// - Cookie store enabled (consent pages set cookies before results)
    /// - Request timeout equal to the session deadline
    /// - Random User-Agent from the rotation list (or custom if configured)
    /// - The session proxy, when one was selected
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::Http`] if the client cannot be constructed,
    /// or [`TrackError::Proxy`] if the proxy endpoint is unusable.
    pub fn new(config: &TrackerConfig, proxy_endpoint: Option<&str>) -> Result<Self, TrackError> {
        let ua = match config.user_agent {
            Some(ref custom) => custom.clone(),
            None => random_user_agent().to_owned(),
        };

        let mut builder = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(config.deadline)
            .user_agent(ua)
            .redirect(reqwest::redirect::Policy::limited(10));

        if let Some(endpoint) = proxy_endpoint {
            let proxy = reqwest::Proxy::all(proxy::normalize_endpoint(endpoint))
                .map_err(|e| TrackError::Proxy(format!("unusable proxy endpoint: {e}")))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| TrackError::Http(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Fetch one page, mapping any failure to an empty body.
    async fn fetch_one(&self, query: &Query) -> String {
        let request = match query.method {
            HttpMethod::Get => self.client.get(&query.url),
            HttpMethod::Post => self
                .client
                .post(&query.url)
                .header(
                    reqwest::header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(query.body.clone().unwrap_or_default()),
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(url = %query.url, error = %err, "request failed");
                return String::new();
            }
        };

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(url = %query.url, error = %err, "non-success status");
                return String::new();
            }
        };

        match response.text().await {
            Ok(body) => {
                tracing::trace!(url = %query.url, bytes = body.len(), "page received");
                body
            }
            Err(err) => {
                tracing::warn!(url = %query.url, error = %err, "response read failed");
                String::new()
            }
        }
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch_all(&self, queries: &[Query]) -> Vec<String> {
        futures::future::join_all(queries.iter().map(|query| self.fetch_one(query))).await
    }
}

/// Sessions can borrow a fetcher; callers keep the original for reuse.
impl<F: PageFetcher> PageFetcher for &F {
    fn fetch_all(&self, queries: &[Query]) -> impl Future<Output = Vec<String>> + Send {
        (**self).fetch_all(queries)
    }
}

/// Select a random User-Agent string from the rotation list.
pub fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        // SAFETY: USER_AGENTS is a non-empty const array, choose only returns None on empty slices
        .unwrap_or(USER_AGENTS[0])
}
