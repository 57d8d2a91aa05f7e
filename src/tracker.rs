//! Crawl orchestration: paginated rounds of batch fetch + parse.
//!
//! A [`Tracker`] owns all session state and drives rounds of
//! build query URLs, fetch the whole batch, parse each page, record any
//! newly found positions, advance the offset. The crawl ends when every
//! keyword is resolved, the offset limit is passed, or the wall-clock
//! deadline is hit.
//!
//! State is mutated only between rounds, never during the concurrent fetch
//! phase, so no locking is needed anywhere in the session.

use crate::config::TrackerConfig;
use crate::engine::{self, SerpEngineTrait};
use crate::error::{Result, TrackError};
use crate::http::PageFetcher;
use crate::types::{Query, RankReport};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Results per page; offsets advance by this fixed step each round.
pub const PAGE_SIZE: u64 = 10;

/// One rank-tracking session for a set of keywords against a single site.
///
/// Construction validates the config, the keyword list and the engine
/// template before any network activity. After that, [`run`](Self::run)
/// cannot fail: keywords that are never found are simply absent from
/// [`results`](Self::results).
pub struct Tracker<E, F> {
    engine: E,
    fetcher: F,
    template: String,
    site: String,
    /// Keywords still to be resolved, insertion order preserved.
    unresolved: Vec<String>,
    offset: u64,
    limit: u64,
    deadline: Duration,
    started: Instant,
    results: HashMap<String, u64>,
    timings: HashMap<String, f64>,
}

impl<E, F> Tracker<E, F>
where
    E: SerpEngineTrait,
    F: PageFetcher,
{
    /// Create a session tracking `site`'s rank for each of `keywords`.
    ///
    /// Duplicate keywords collapse to their first occurrence. The session
    /// clock starts here, so construct immediately before running.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::Config`] for an invalid config or an empty
    /// keyword list, or [`TrackError::Template`] if the engine's URL
    /// template is missing a placeholder.
    pub fn new(
        engine: E,
        fetcher: F,
        keywords: Vec<String>,
        site: impl Into<String>,
        config: &TrackerConfig,
    ) -> Result<Self> {
        config.validate()?;

        let mut unresolved: Vec<String> = Vec::with_capacity(keywords.len());
        for keyword in keywords {
            if !unresolved.contains(&keyword) {
                unresolved.push(keyword);
            }
        }
        if unresolved.is_empty() {
            return Err(TrackError::Config("at least one keyword is required".into()));
        }

        let template = engine.template();
        engine::validate_template(&template)?;

        Ok(Self {
            engine,
            fetcher,
            template,
            site: site.into(),
            unresolved,
            offset: 0,
            limit: config.limit,
            deadline: config.deadline,
            started: Instant::now(),
            results: HashMap::new(),
            timings: HashMap::new(),
        })
    }

    /// Crawl result pages until every keyword is resolved, the offset
    /// limit is passed, or the deadline is hit.
    ///
    /// Each round gives every unresolved keyword exactly one fetch+parse
    /// attempt at the current offset. The deadline is checked at round
    /// boundaries; hitting it leaves whatever was found so far in place.
    pub async fn run(&mut self) {
        loop {
            if self.started.elapsed() >= self.deadline {
                tracing::warn!(
                    unresolved = self.unresolved.len(),
                    "deadline reached, keeping partial results"
                );
                break;
            }

            tracing::debug!(
                engine = self.engine.name(),
                offset = self.offset,
                keywords = self.unresolved.len(),
                "round start"
            );

            let queries = self.build_queries();
            let bodies = self.fetcher.fetch_all(&queries).await;

            // Bodies are index-aligned with the query batch, which was
            // built in unresolved-keyword order.
            for (keyword, body) in self.unresolved.iter().zip(&bodies) {
                if self.results.contains_key(keyword) {
                    continue;
                }
                if let Some(position) = self.engine.parse(body, &self.site) {
                    let absolute = self.offset + position as u64;
                    let elapsed = round_to_millis(self.started.elapsed().as_secs_f64());
                    tracing::debug!(keyword = %keyword, position = absolute, "site found");
                    self.results.insert(keyword.clone(), absolute);
                    self.timings.insert(keyword.clone(), elapsed);
                }
            }

            let results = &self.results;
            self.unresolved.retain(|keyword| !results.contains_key(keyword));

            if self.unresolved.is_empty() {
                break;
            }
            if self.offset > self.limit {
                tracing::debug!(
                    unresolved = self.unresolved.len(),
                    "offset limit passed with keywords unresolved"
                );
                break;
            }
            self.offset += PAGE_SIZE;
        }

        tracing::debug!(
            resolved = self.results.len(),
            unresolved = self.unresolved.len(),
            "crawl finished"
        );
    }

    /// One GET query per unresolved keyword at the current offset. The
    /// round's list fully replaces the previous round's.
    fn build_queries(&self) -> Vec<Query> {
        self.unresolved
            .iter()
            .map(|keyword| Query::get(engine::substitute(&self.template, keyword, self.offset)))
            .collect()
    }

    /// Keyword → absolute 1-based position, for every keyword found so far.
    pub fn results(&self) -> &HashMap<String, u64> {
        &self.results
    }

    /// Keyword → elapsed seconds from session start to discovery.
    pub fn timings(&self) -> &HashMap<String, f64> {
        &self.timings
    }

    /// Snapshot of findings as a serializable report.
    pub fn report(&self) -> RankReport {
        RankReport {
            results: self.results.clone(),
            timings: self.timings.clone(),
        }
    }
}

/// Round seconds to 3 decimal places for timing reports.
fn round_to_millis(seconds: f64) -> f64 {
    (seconds * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SerpEngineTrait;

    struct NoopEngine {
        template: &'static str,
    }

    impl SerpEngineTrait for NoopEngine {
        fn template(&self) -> String {
            self.template.to_string()
        }

        fn parse(&self, _html: &str, _site: &str) -> Option<usize> {
            None
        }

        fn name(&self) -> &'static str {
            "Noop"
        }
    }

    struct NoopFetcher;

    impl PageFetcher for NoopFetcher {
        async fn fetch_all(&self, queries: &[Query]) -> Vec<String> {
            queries.iter().map(|_| String::new()).collect()
        }
    }

    fn good_engine() -> NoopEngine {
        NoopEngine {
            template: "http://example.com/search?q=keyword&start=position",
        }
    }

    #[test]
    fn empty_keyword_list_rejected() {
        let err = Tracker::new(
            good_engine(),
            NoopFetcher,
            vec![],
            "targetsite.com",
            &TrackerConfig::default(),
        )
        .err()
        .expect("should fail");
        assert!(err.to_string().contains("keyword"));
    }

    #[test]
    fn template_missing_placeholder_rejected() {
        let engine = NoopEngine {
            template: "http://example.com/search?q=keyword",
        };
        let err = Tracker::new(
            engine,
            NoopFetcher,
            vec!["foo".into()],
            "targetsite.com",
            &TrackerConfig::default(),
        )
        .err()
        .expect("should fail");
        assert!(err.to_string().contains("position"));
    }

    #[test]
    fn invalid_config_rejected() {
        let config = TrackerConfig {
            deadline: Duration::ZERO,
            ..Default::default()
        };
        let result = Tracker::new(
            good_engine(),
            NoopFetcher,
            vec!["foo".into()],
            "targetsite.com",
            &config,
        );
        assert!(result.is_err());
    }

    #[test]
    fn duplicate_keywords_collapse_in_order() {
        let tracker = Tracker::new(
            good_engine(),
            NoopFetcher,
            vec!["a".into(), "b".into(), "a".into(), "b".into()],
            "targetsite.com",
            &TrackerConfig::default(),
        )
        .expect("should construct");
        assert_eq!(tracker.unresolved, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn queries_substitute_keyword_and_offset() {
        let mut tracker = Tracker::new(
            good_engine(),
            NoopFetcher,
            vec!["rust serp".into()],
            "targetsite.com",
            &TrackerConfig::default(),
        )
        .expect("should construct");
        tracker.offset = 20;

        let queries = tracker.build_queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(
            queries[0].url,
            "http://example.com/search?q=rust%20serp&start=20"
        );
    }

    #[test]
    fn round_to_millis_keeps_three_decimals() {
        assert_eq!(round_to_millis(1.2345678), 1.235);
        assert_eq!(round_to_millis(0.0004), 0.0);
        assert_eq!(round_to_millis(2.0), 2.0);
    }
}
