//! The upstream site: base URL, canonical title-URL shape, search endpoint.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::{Error, Result};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://www.imdb.com";

#[allow(clippy::expect_used)]
static DEFAULT_SITE: LazyLock<Site> =
    LazyLock::new(|| Site::new(DEFAULT_BASE_URL).expect("valid default base URL"));

/// Where title pages live and how they are searched.
#[derive(Debug, Clone)]
pub struct Site {
    base: Url,
    canonical: Regex,
}

impl Site {
    /// Describe a site rooted at `base_url` (scheme and host, e.g.
    /// `http://www.imdb.com`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`] when `base_url` is not an absolute
    /// http(s) URL with a host.
    pub fn new(base_url: &str) -> Result<Self> {
        let invalid = || Error::InvalidBaseUrl(base_url.to_string());

        let base = Url::parse(base_url.trim()).map_err(|_| invalid())?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(invalid());
        }
        let host = base.host_str().ok_or_else(invalid)?;
        let host = host.strip_prefix("www.").unwrap_or(host);
        let authority = match base.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };

        let pattern = format!(r"(?i)(www\.)?{}/title/[A-Za-z0-9]+", regex::escape(&authority));
        let canonical = Regex::new(&pattern).map_err(|_| invalid())?;

        Ok(Self { base, canonical })
    }

    /// Scheme and host without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    /// Whether `input` already has the shape of a title page URL:
    /// `[www.]<host>/title/<alphanumeric id>`, case-insensitive.
    #[must_use]
    pub fn is_canonical(&self, input: &str) -> bool {
        self.canonical.is_match(input)
    }

    /// Search endpoint for a free-text query, form-urlencoded.
    ///
    /// ```
    /// use movie_grabber::Site;
    ///
    /// let site = Site::default();
    /// assert_eq!(
    ///     site.search_url("The Italian Job (1969)"),
    ///     "http://www.imdb.com/find?q=The+Italian+Job+%281969%29"
    /// );
    /// ```
    #[must_use]
    pub fn search_url(&self, query: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        format!("{}/find?q={encoded}", self.base_url())
    }

    /// Turn a result link into an absolute URL on this site.
    ///
    /// Absolute http(s) links are returned unchanged; anything else is joined
    /// onto the base URL. Blank links give `None`.
    #[must_use]
    pub fn absolutize(&self, href: &str) -> Option<String> {
        let href = href.trim();
        if href.is_empty() {
            return None;
        }
        if let Ok(url) = Url::parse(href) {
            if matches!(url.scheme(), "http" | "https") && url.host().is_some() {
                return Some(href.to_string());
            }
        }
        self.base.join(href).ok().map(String::from)
    }
}

impl Default for Site {
    fn default() -> Self {
        DEFAULT_SITE.clone()
    }
}
