//! Error types for movie-grabber.
//!
//! Only two variants abort a lookup from the caller's point of view:
//! [`Error::Resolution`] and [`Error::ParseError`]. A field whose query
//! matches nothing is not an error at all; it degrades to an empty value.

/// Error type for resolution and extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No canonical title URL could be derived from the input.
    #[error("no title page could be resolved for {input:?}")]
    Resolution {
        /// The raw input that was being resolved.
        input: String,
    },

    /// The document provider failed to fetch a URL.
    #[error("fetch failed for {url}: {message}")]
    Fetch {
        /// URL that was requested.
        url: String,
        /// Transport-level description of the failure.
        message: String,
    },

    /// Fetched content could not be parsed as a document.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),

    /// The configured site base URL is not an absolute http(s) URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// An extraction rule was rejected at construction time.
    #[error("invalid rule for field {field:?}: {reason}")]
    InvalidRule {
        /// Field name of the offending rule.
        field: String,
        /// Why the rule was rejected.
        reason: String,
    },
}

impl Error {
    /// True for the failures a caller reports as "movie not found".
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Resolution { .. } | Self::ParseError(_))
    }
}

/// Result type alias for movie-grabber operations.
pub type Result<T> = std::result::Result<T, Error>;
