//! Result types for extraction output.
//!
//! A [`MovieRecord`] is an ordered map from field name to [`FieldValue`].
//! Fixed fields come first in extraction order, followed by credited-person
//! blocks and then configured rules in declaration order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Record keys of the fixed fields.
pub mod keys {
    pub const TITLE: &str = "title";
    pub const YEAR: &str = "year";
    pub const URL: &str = "url";
    pub const IMAGE: &str = "image";
    pub const STORYLINE: &str = "storyline";
    pub const CAST: &str = "cast";
    pub const RATING: &str = "rating";
    pub const VOTES: &str = "votes";
    pub const GENRES: &str = "genres";
}

/// One cast member, zipped positionally from three node sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastEntry {
    /// Performer name.
    pub name: String,

    /// Thumbnail image URL.
    #[serde(rename = "thumb")]
    pub thumbnail_url: String,

    /// Character played.
    pub role: String,
}

/// Value of one record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Plain string (text, CSV, or a single attribute).
    Text(String),
    /// Ordered list of strings.
    List(Vec<String>),
    /// Cast roster.
    Cast(Vec<CastEntry>),
}

impl FieldValue {
    /// The string value, if this is a text field.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The list value, if this is a list field.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// The cast roster, if this is the cast field.
    #[must_use]
    pub fn as_cast(&self) -> Option<&[CastEntry]> {
        match self {
            Self::Cast(entries) => Some(entries),
            _ => None,
        }
    }

    /// True for `""`, `[]`, and an empty roster.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Cast(entries) => entries.is_empty(),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Structured metadata for one title page.
///
/// Each key appears at most once; inserting an existing key replaces its
/// value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MovieRecord {
    entries: IndexMap<String, FieldValue>,
}

impl MovieRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.entries.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.get(key)
    }

    /// Text value of a field; `None` when absent or not text.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_text)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Field names in record order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Fields in record order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Convenience accessors for the fixed fields.

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.text(keys::TITLE)
    }

    #[must_use]
    pub fn year(&self) -> Option<&str> {
        self.text(keys::YEAR)
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.text(keys::URL)
    }

    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.text(keys::IMAGE)
    }

    #[must_use]
    pub fn cast(&self) -> Option<&[CastEntry]> {
        self.get(keys::CAST).and_then(FieldValue::as_cast)
    }
}
