//! Google result-page adapter.
//!
//! Google renders each organic result with a `<cite>` element carrying the
//! result's displayed URL, either breadcrumb-style
//! (`cmsreport.com › Blogs › Bryan's blog`) or as a plain path
//! (`cmsreport.com/blogs/...`). Document order of the `cite` elements
//! defines result rank within the page.

use crate::engine::SerpEngineTrait;
use scraper::{Html, Selector};

/// Paginated Google query template. `start` takes the zero-based offset of
/// the first result on the page.
const GOOGLE_TEMPLATE: &str = "http://www.google.com/search?q=keyword&start=position";

/// Google SERP adapter.
pub struct GoogleEngine;

impl SerpEngineTrait for GoogleEngine {
    fn template(&self) -> String {
        GOOGLE_TEMPLATE.to_string()
    }

    fn parse(&self, html: &str, site: &str) -> Option<usize> {
        parse_google_html(html, site)
    }

    fn name(&self) -> &'static str {
        "Google"
    }
}

/// Locate `site` within one Google result page.
///
/// Walks the page's `cite` elements in document order and normalises each
/// one's text to its leading host token: breadcrumb text splits on
/// whitespace, plain paths split on `/`. The first exact match against
/// `site` wins and its 1-based index is returned.
///
/// Extracted as a separate function for testability with mock HTML.
/// Malformed markup degrades to zero extracted entries, never an error.
pub(crate) fn parse_google_html(html: &str, site: &str) -> Option<usize> {
    let document = Html::parse_document(html);

    let cite_sel = match Selector::parse("cite") {
        Ok(sel) => sel,
        Err(_) => return None,
    };

    for (index, element) in document.select(&cite_sel).enumerate() {
        let text = element.text().collect::<String>();
        let text = text.trim();

        let leading = if text.contains(char::is_whitespace) {
            text.split_whitespace().next()
        } else {
            text.split('/').next()
        };

        if leading == Some(site) {
            tracing::trace!(site, rank = index + 1, "site cited on page");
            return Some(index + 1);
        }
    }

    None
}
