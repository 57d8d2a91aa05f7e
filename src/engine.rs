//! Trait definition for pluggable search engine adapters.
//!
//! Each search engine implements [`SerpEngineTrait`] to provide a uniform
//! interface: a paginated query URL template and a result-page parser that
//! locates the tracked site within one page's listing.

use crate::error::TrackError;
use url::Url;

/// Placeholder token in an engine template that is replaced with the
/// percent-encoded keyword.
pub const KEYWORD_TOKEN: &str = "keyword";

/// Placeholder token in an engine template that is replaced with the
/// numeric result offset of the requested page.
pub const OFFSET_TOKEN: &str = "position";

/// A pluggable search engine adapter.
///
/// Implementors describe how to query one search engine and how to read
/// its result pages:
///
/// - [`template`](Self::template) returns a URL containing the
///   [`KEYWORD_TOKEN`] and [`OFFSET_TOKEN`] placeholders
/// - [`parse`](Self::parse) extracts the tracked site's 1-based rank from
///   one page of raw result markup
///
/// Adapters hold no session state; the tracker owns keywords, offsets and
/// findings. All implementations must be `Send + Sync` so sessions can run
/// on multi-threaded executors.
pub trait SerpEngineTrait: Send + Sync {
    /// Returns the paginated query URL template.
    ///
    /// Must contain [`KEYWORD_TOKEN`] and [`OFFSET_TOKEN`] exactly where
    /// the keyword and result offset belong; the tracker validates this
    /// once at construction, before any network activity.
    fn template(&self) -> String;

    /// Returns the 1-based position of `site` within this page's ordered
    /// result listing, or `None` if the site does not appear.
    ///
    /// Must never fail: malformed or empty markup degrades to `None`.
    fn parse(&self, html: &str, site: &str) -> Option<usize>;

    /// Human-readable engine name, used in log output.
    fn name(&self) -> &'static str;
}

/// Substitute `keyword` and `offset` into an engine template.
///
/// The keyword is percent-encoded before substitution. The offset is
/// substituted first: its digits cannot collide with [`KEYWORD_TOKEN`],
/// while an encoded keyword could contain the literal [`OFFSET_TOKEN`].
pub fn substitute(template: &str, keyword: &str, offset: u64) -> String {
    let encoded = urlencoding::encode(keyword);
    template
        .replace(OFFSET_TOKEN, &offset.to_string())
        .replace(KEYWORD_TOKEN, &encoded)
}

/// Validate an engine template before any query is issued.
///
/// A template missing a placeholder would silently produce wrong or empty
/// results for every query, so this is a fatal, construction-time check.
///
/// # Errors
///
/// Returns [`TrackError::Template`] if either placeholder token is absent
/// or the substituted template is not a well-formed URL.
pub fn validate_template(template: &str) -> Result<(), TrackError> {
    if !template.contains(KEYWORD_TOKEN) {
        return Err(TrackError::Template(format!(
            "missing '{KEYWORD_TOKEN}' placeholder"
        )));
    }
    if !template.contains(OFFSET_TOKEN) {
        return Err(TrackError::Template(format!(
            "missing '{OFFSET_TOKEN}' placeholder"
        )));
    }
    let probe = substitute(template, "probe", 0);
    Url::parse(&probe)
        .map_err(|e| TrackError::Template(format!("not a well-formed URL: {e}")))?;
    Ok(())
}
