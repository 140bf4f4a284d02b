//! URL resolution: turn a title URL or a free-text query into one canonical
//! title-page URL.

use std::fmt;

use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::provider::DocumentProvider;
use crate::query::Query;
use crate::site::Site;

/// Result-list links of every known search page generation. One selector
/// group, so hits come back in document order.
const SEARCH_RESULT_LINKS: &str = "p[style] > b > a, td.result_text > a";

/// A URL confirmed to point at a title page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedUrl(String);

impl ResolvedUrl {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ResolvedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve `input` to a title-page URL.
///
/// 1. Input already shaped like a title URL is returned unchanged, with no
///    fetch.
/// 2. Otherwise the site is searched for `input`. A canonical link on the
///    search page that is itself a title URL wins outright (the site jumped
///    straight to a single match).
/// 3. Otherwise the first entry of the result list, in page order, is used,
///    host-prefixed when relative. It must itself be a title URL.
///
/// # Errors
///
/// [`Error::Resolution`] when no candidate is found (including blank input and
/// an empty search page); [`Error::Fetch`] when the search page cannot be
/// fetched.
pub fn resolve<P: DocumentProvider + ?Sized>(
    input: &str,
    site: &Site,
    provider: &P,
) -> Result<ResolvedUrl> {
    let not_found = || Error::Resolution { input: input.to_string() };

    if site.is_canonical(input) {
        tracing::debug!(input, "input is already a title URL");
        return Ok(ResolvedUrl(input.to_string()));
    }

    let query = input.trim();
    if query.is_empty() {
        return Err(not_found());
    }

    let search_url = site.search_url(query);
    tracing::debug!(%search_url, "searching for title");
    let body = provider.fetch(&search_url)?;
    let doc = dom::parse_bytes(&body).map_err(|_| not_found())?;

    resolve_from_search(&doc, site).ok_or_else(not_found)
}

/// Pick the title URL out of a parsed search page.
#[must_use]
pub fn resolve_from_search(doc: &Document, site: &Site) -> Option<ResolvedUrl> {
    if let Some(href) = canonical_link(doc) {
        if site.is_canonical(&href) {
            tracing::debug!(%href, "search redirected to a single title");
            return Some(ResolvedUrl(href));
        }
    }

    let first = Query::select(SEARCH_RESULT_LINKS).attr("href").first(doc)?;
    let url = site.absolutize(&first)?;
    if !site.is_canonical(&url) {
        tracing::debug!(%url, "first search result is not a title URL");
        return None;
    }
    tracing::debug!(%url, "using first search result");
    Some(ResolvedUrl(url))
}

/// `href` of the page's canonical link, if present and non-blank.
fn canonical_link(doc: &Document) -> Option<String> {
    Query::select("link[rel='canonical']")
        .attr("href")
        .evaluate(doc)
        .into_iter()
        .map(|href| href.trim().to_string())
        .find(|href| !href.is_empty())
}
