//! # serp-rank
//!
//! Search-result position tracking for a single site.
//!
//! Given a set of keywords and a site identifier, this crate crawls a
//! search engine's paginated result pages and reports the 1-based rank at
//! which the site first appears for each keyword — the classic SERP
//! tracking loop, as a library.
//!
//! ## Design
//!
//! - One round per page offset: every unresolved keyword is fetched
//!   concurrently as a single batch, parsed, and either resolved or
//!   deferred to the next round at offset + 10
//! - Pluggable engines via [`SerpEngineTrait`]: a URL template with
//!   `keyword`/`position` placeholders plus a result-page parser
//! - Graceful degradation: failed fetches and unparseable pages count as
//!   "not found" for the round; a keyword never found within the offset
//!   limit is simply absent from the results
//! - Optional proxy: one endpoint picked at random from a proxy-list file
//!   and used for the whole session
//! - Bounded: a wall-clock deadline (default 6 minutes) is checked at
//!   every round boundary and returns partial results when hit
//!
//! ## Security
//!
//! - No API keys or secrets to leak
//! - No network listeners — this is a library, not a server
//! - Keywords are logged only at trace/debug level

pub mod config;
pub mod engine;
pub mod engines;
pub mod error;
pub mod http;
pub mod proxy;
pub mod tracker;
pub mod types;

pub use config::TrackerConfig;
pub use engine::SerpEngineTrait;
pub use engines::GoogleEngine;
pub use error::{Result, TrackError};
pub use http::{HttpFetcher, PageFetcher};
pub use tracker::{Tracker, PAGE_SIZE};
pub use types::{HttpMethod, Query, RankReport};

/// Track `site`'s Google rank for each keyword.
///
/// Wires the [`GoogleEngine`] adapter to an [`HttpFetcher`] (selecting a
/// proxy first if the config names a proxy list), runs the crawl to
/// completion, and returns the findings. Keywords whose rank was not
/// found within `config.limit` are absent from the report's `results`.
///
/// # Errors
///
/// Returns an error only for setup problems — invalid config, unusable
/// proxy source, or HTTP client construction failure — always before any
/// query is issued. A run that started always returns a report.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> serp_rank::Result<()> {
/// let config = serp_rank::TrackerConfig::default();
/// let keywords = vec!["rust serp tracking".to_string()];
/// let report = serp_rank::track(keywords, "example.com", &config).await?;
/// for (keyword, position) in &report.results {
///     println!("{keyword}: #{position}");
/// }
/// # Ok(())
/// # }
/// ```
pub async fn track(
    keywords: Vec<String>,
    site: &str,
    config: &TrackerConfig,
) -> Result<RankReport> {
    config.validate()?;

    let proxy_endpoint = match &config.proxy_list {
        Some(path) => Some(proxy::select_proxy(path)?),
        None => None,
    };

    let fetcher = HttpFetcher::new(config, proxy_endpoint.as_deref())?;
    let mut tracker = Tracker::new(GoogleEngine, fetcher, keywords, site, config)?;
    tracker.run().await;
    Ok(tracker.report())
}

/// Track with sensible default configuration.
///
/// Convenience wrapper around [`track`] using [`TrackerConfig::default()`].
///
/// # Errors
///
/// Same as [`track`].
pub async fn track_default(keywords: Vec<String>, site: &str) -> Result<RankReport> {
    track(keywords, site, &TrackerConfig::default()).await
}
