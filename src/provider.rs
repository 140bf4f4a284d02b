//! Document providers: where page bytes come from.
//!
//! The core never opens a connection itself. It asks a [`DocumentProvider`]
//! for the raw bytes of a URL and parses them with [`crate::dom::parse_bytes`].
//! Timeouts, redirects and transport errors are the provider's business.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{Error, Result};

/// Fetches raw page bytes for a URL.
pub trait DocumentProvider {
    /// Fetch the body of `url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] on any transport-level failure.
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

impl<P: DocumentProvider + ?Sized> DocumentProvider for &P {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        (**self).fetch(url)
    }
}

/// Serves pages from memory, keyed by exact URL.
///
/// Useful for replaying saved pages offline. Every call is counted, including
/// misses.
#[derive(Debug, Default)]
pub struct MemoryProvider {
    pages: HashMap<String, Vec<u8>>,
    fetches: AtomicUsize,
}

impl MemoryProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the body served for `url`.
    #[must_use]
    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.pages.insert(url.into(), body.into());
        self
    }

    /// Number of `fetch` calls so far.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

impl DocumentProvider for MemoryProvider {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        self.pages.get(url).cloned().ok_or_else(|| Error::Fetch {
            url: url.to_string(),
            message: "no such page".to_string(),
        })
    }
}

#[cfg(feature = "http")]
pub use http::{HttpConfig, HttpProvider};

#[cfg(feature = "http")]
mod http {
    use std::time::Duration;

    use super::DocumentProvider;
    use crate::error::{Error, Result};

    /// Settings for [`HttpProvider`].
    #[derive(Debug, Clone)]
    pub struct HttpConfig {
        /// Whole-request timeout.
        ///
        /// Default: 120 seconds
        pub timeout: Duration,

        /// `User-Agent` header.
        pub user_agent: String,

        /// Redirects followed before giving up.
        ///
        /// Default: `2`
        pub max_redirects: u32,
    }

    impl Default for HttpConfig {
        fn default() -> Self {
            Self {
                timeout: Duration::from_secs(120),
                user_agent: concat!("movie-grabber/", env!("CARGO_PKG_VERSION")).to_string(),
                max_redirects: 2,
            }
        }
    }

    /// Blocking HTTP fetcher backed by `ureq`.
    #[derive(Debug, Clone)]
    pub struct HttpProvider {
        agent: ureq::Agent,
    }

    impl HttpProvider {
        #[must_use]
        pub fn new(config: &HttpConfig) -> Self {
            let agent = ureq::Agent::new_with_config(
                ureq::Agent::config_builder()
                    .timeout_global(Some(config.timeout))
                    .user_agent(config.user_agent.as_str())
                    .max_redirects(config.max_redirects)
                    .http_status_as_error(false)
                    .build(),
            );
            Self { agent }
        }
    }

    impl Default for HttpProvider {
        fn default() -> Self {
            Self::new(&HttpConfig::default())
        }
    }

    impl DocumentProvider for HttpProvider {
        fn fetch(&self, url: &str) -> Result<Vec<u8>> {
            let fetch_error = |message: String| Error::Fetch {
                url: url.to_string(),
                message,
            };

            tracing::debug!(url, "fetching");
            let response = self.agent.get(url).call().map_err(|e| fetch_error(e.to_string()))?;
            if !response.status().is_success() {
                return Err(fetch_error(format!("HTTP {}", response.status())));
            }
            response
                .into_body()
                .read_to_vec()
                .map_err(|e| fetch_error(e.to_string()))
        }
    }
}
