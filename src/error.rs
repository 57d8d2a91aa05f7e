//! Error types for the serp-rank crate.
//!
//! Every variant is a configuration-time failure: a tracking run that has
//! started never fails, it only degrades (failed fetches and unparseable
//! pages count as "not found" and the keyword stays eligible for the next
//! round). All errors use stable string messages suitable for display.

/// Errors that can occur while setting up a rank-tracking session.
#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    /// Invalid tracker configuration or construction input.
    #[error("config error: {0}")]
    Config(String),

    /// The engine's URL template is malformed or missing a placeholder.
    #[error("template error: {0}")]
    Template(String),

    /// A proxy source was configured but could not supply an endpoint.
    #[error("proxy error: {0}")]
    Proxy(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP error: {0}")]
    Http(String),
}

/// Convenience type alias for serp-rank results.
pub type Result<T> = std::result::Result<T, TrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_config() {
        let err = TrackError::Config("at least one keyword is required".into());
        assert_eq!(
            err.to_string(),
            "config error: at least one keyword is required"
        );
    }

    #[test]
    fn display_template() {
        let err = TrackError::Template("missing keyword placeholder".into());
        assert_eq!(err.to_string(), "template error: missing keyword placeholder");
    }

    #[test]
    fn display_proxy() {
        let err = TrackError::Proxy("proxy list is empty".into());
        assert_eq!(err.to_string(), "proxy error: proxy list is empty");
    }

    #[test]
    fn display_http() {
        let err = TrackError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TrackError>();
    }
}
