//! Tracker configuration with sensible defaults.
//!
//! [`TrackerConfig`] controls how deep the crawl goes, its overall time
//! budget, and how requests are issued. The defaults match a polite,
//! bounded crawl: first 100 results, 6 minute budget, no proxy.

use crate::error::TrackError;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for a rank-tracking session.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Maximum result offset to crawl to before giving up on a keyword.
    /// The crawl advances in fixed pages of 10 results and stops advancing
    /// once the offset exceeds this limit.
    pub limit: u64,
    /// Overall wall-clock budget for the whole run. Checked at each round
    /// boundary; when exceeded the run returns whatever it has found so
    /// far. Also used as the HTTP request timeout so a hung fetch cannot
    /// outlive the budget.
    pub deadline: Duration,
    /// Optional path to a proxy-list file (one endpoint per line). When
    /// set, one endpoint is chosen at random and used for every request
    /// in the session.
    pub proxy_list: Option<PathBuf>,
    /// Custom User-Agent string. If `None`, rotates through a built-in
    /// list of realistic browser User-Agents.
    pub user_agent: Option<String>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            limit: 100,
            deadline: Duration::from_secs(360),
            proxy_list: None,
            user_agent: None,
        }
    }
}

impl TrackerConfig {
    /// Validates this configuration, returning an error if any field is
    /// invalid.
    ///
    /// Checks:
    /// - `deadline` must be non-zero
    ///
    /// `limit` accepts any value; a limit of 0 still crawls the first page.
    pub fn validate(&self) -> Result<(), TrackError> {
        if self.deadline.is_zero() {
            return Err(TrackError::Config("deadline must be non-zero".into()));
        }
        Ok(())
    }
}
