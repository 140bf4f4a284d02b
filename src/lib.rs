//! # movie-grabber
//!
//! Extracts structured movie metadata from title pages.
//!
//! Give it a title URL or a free-text query; it resolves the query to one
//! canonical title page, fetches it through a [`DocumentProvider`], and runs a
//! rule-driven extraction over the parsed page.
//!
//! ## Quick Start
//!
//! ```rust
//! use movie_grabber::{extract, ExtractionConfig};
//!
//! let html = r#"<html><body>
//!   <h1 class="header"><span itemprop="name">The Matrix</span>
//!     <span class="nobr">(<a href="/year/1999/">1999</a>)</span></h1>
//!   <div class="article"><div class="txt-block">
//!     <h4 class="inline">Country:</h4> <a href="/country/us">USA</a>
//!   </div></div>
//! </body></html>"#;
//!
//! let record = extract(html, "http://www.imdb.com/title/tt0133093/", &ExtractionConfig::default())?;
//! assert_eq!(record.title(), Some("The Matrix"));
//! assert_eq!(record.year(), Some("1999"));
//! assert_eq!(record.text("Country:"), Some("USA"));
//! # Ok::<(), movie_grabber::Error>(())
//! ```
//!
//! ## Lookups over the network
//!
//! ```rust,no_run
//! use movie_grabber::{ExtractionConfig, Grabber, HttpProvider};
//!
//! let grabber = Grabber::new(HttpProvider::default());
//! let config = ExtractionConfig::default().show_cast(true);
//! match grabber.find("The Italian Job (1969)", &config) {
//!     Some(record) => println!("{}", serde_json::to_string_pretty(&record).unwrap_or_default()),
//!     None => println!("No such movie"),
//! }
//! ```
//!
//! ## Fields
//!
//! - **Fixed fields**: title, year, url, poster image, storyline, cast,
//!   rating and votes, genres
//! - **Credited people**: every heading-labelled credit block (director,
//!   writers, ...) keyed by its heading
//! - **Configured rules**: any detail block, by heading text, shaped as text,
//!   CSV, or a list

mod error;
mod extract;
mod grabber;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Typed query expressions: node paths, anchored queries, heading blocks.
pub mod query;

/// Value shaping (text, CSV, list).
pub mod shape;

/// Page layouts and their rule tables.
pub mod layout;

/// Site description: canonical title URLs and search endpoint.
pub mod site;

/// URL resolution from title URLs or search queries.
pub mod resolve;

/// Document providers (HTTP, in-memory).
pub mod provider;

// Public API - re-exports
pub use error::{Error, Result};
pub use grabber::Grabber;
pub use layout::Layout;
pub use options::{ExtractionConfig, ExtractionRule, ShapeMode};
pub use provider::{DocumentProvider, MemoryProvider};
#[cfg(feature = "http")]
pub use provider::{HttpConfig, HttpProvider};
pub use resolve::ResolvedUrl;
pub use result::{keys, CastEntry, FieldValue, MovieRecord};
pub use site::Site;

/// Extracts a record from a title page already held as a string.
///
/// `url` is echoed into the record's `url` field.
///
/// # Errors
///
/// Returns [`Error::ParseError`] for an empty or whitespace-only page.
pub fn extract(html: &str, url: &str, config: &ExtractionConfig) -> Result<MovieRecord> {
    extract::extract_page(html.as_bytes(), url, config)
}

/// Extracts a record from raw page bytes with automatic encoding detection.
///
/// ```rust
/// use movie_grabber::{extract_bytes, ExtractionConfig};
///
/// let page = b"<meta charset=\"ISO-8859-1\"><h1 class=\"header\"><span>Am\xE9lie</span></h1>";
/// let record = extract_bytes(page, "http://www.imdb.com/title/tt0211915/", &ExtractionConfig::default())?;
/// assert_eq!(record.title(), Some("Amélie"));
/// # Ok::<(), movie_grabber::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::ParseError`] for an empty or whitespace-only page.
pub fn extract_bytes(html: &[u8], url: &str, config: &ExtractionConfig) -> Result<MovieRecord> {
    extract::extract_page(html, url, config)
}

/// Resolves `input` to a title-page URL on `site`.
///
/// # Errors
///
/// See [`resolve::resolve`].
pub fn resolve<P: DocumentProvider + ?Sized>(
    input: &str,
    site: &Site,
    provider: &P,
) -> Result<ResolvedUrl> {
    resolve::resolve(input, site, provider)
}
