//! Proxy-list loading and per-session endpoint selection.
//!
//! A proxy source is a plain text file with one endpoint per line
//! (`203.0.113.7:8080` or `http://203.0.113.7:3128`). One endpoint is
//! chosen uniformly at random and applied to every request in the
//! session. A configured-but-unusable source is a fatal setup error.

use crate::error::TrackError;
use rand::seq::SliceRandom;
use std::path::Path;

/// Pick one proxy endpoint at random from the file at `path`.
///
/// Blank lines are ignored. The chosen endpoint is returned verbatim;
/// scheme normalisation happens when the HTTP client is built.
///
/// # Errors
///
/// Returns [`TrackError::Proxy`] if the file cannot be read or contains
/// no endpoints.
pub fn select_proxy(path: &Path) -> Result<String, TrackError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        TrackError::Proxy(format!("cannot read proxy list {}: {e}", path.display()))
    })?;

    let endpoints: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let chosen = endpoints
        .choose(&mut rand::thread_rng())
        .ok_or_else(|| TrackError::Proxy(format!("proxy list {} is empty", path.display())))?;

    tracing::debug!(endpoint = *chosen, "proxy selected for session");
    Ok((*chosen).to_string())
}

/// Default schemeless endpoints to `http://` for [`reqwest::Proxy`].
pub(crate) fn normalize_endpoint(endpoint: &str) -> String {
    if endpoint.contains("://") {
        endpoint.to_string()
    } else {
        format!("http://{endpoint}")
    }
}
