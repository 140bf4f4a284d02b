//! End-to-end lookup: resolve, fetch, parse, extract.

use crate::error::Result;
use crate::extract;
use crate::options::ExtractionConfig;
use crate::provider::DocumentProvider;
use crate::resolve::{self, ResolvedUrl};
use crate::result::MovieRecord;
use crate::site::Site;

/// Looks titles up on one site through one document provider.
///
/// Holds no per-call state: a single grabber can serve any number of lookups,
/// each with its own [`ExtractionConfig`].
#[derive(Debug, Clone)]
pub struct Grabber<P> {
    provider: P,
    site: Site,
}

impl<P: DocumentProvider> Grabber<P> {
    /// A grabber for the default site.
    pub fn new(provider: P) -> Self {
        Self::with_site(provider, Site::default())
    }

    pub fn with_site(provider: P, site: Site) -> Self {
        Self { provider, site }
    }

    #[must_use]
    pub fn site(&self) -> &Site {
        &self.site
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolve a title URL or search query to a title-page URL.
    ///
    /// # Errors
    ///
    /// See [`resolve::resolve`].
    pub fn resolve(&self, input: &str) -> Result<ResolvedUrl> {
        resolve::resolve(input, &self.site, &self.provider)
    }

    /// Resolve `input`, fetch the title page and extract its record.
    ///
    /// # Errors
    ///
    /// [`crate::Error::Resolution`] when no title page is found,
    /// [`crate::Error::Fetch`] when a page cannot be fetched, and
    /// [`crate::Error::ParseError`] when the title page is unusable. No partial
    /// record is ever returned.
    pub fn get(&self, input: &str, config: &ExtractionConfig) -> Result<MovieRecord> {
        let url = self.resolve(input)?;
        let body = self.provider.fetch(url.as_str())?;
        let record = extract::extract_page(&body, url.as_str(), config)?;
        tracing::debug!(url = %url, fields = record.len(), "extracted title page");
        Ok(record)
    }

    /// Like [`Grabber::get`], with every failure reported as `None`.
    #[must_use]
    pub fn find(&self, input: &str, config: &ExtractionConfig) -> Option<MovieRecord> {
        match self.get(input, config) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::debug!(input, error = %err, "lookup failed");
                None
            }
        }
    }
}
