//! Extraction configuration.
//!
//! An [`ExtractionConfig`] is a plain value: build it once with the chainable
//! setters and pass it by reference into each extraction. Nothing in it is
//! mutated while a page is being extracted.

use std::fmt;

use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::query::NodePath;

/// How multiple raw values collapse into one field value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ShapeMode {
    /// Concatenate trimmed values.
    Text,
    /// Comma-joined string.
    #[default]
    Csv,
    /// Ordered list with empty values dropped.
    List,
}

/// One configured field: a heading label plus the path read under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRule {
    field: String,
    suffix: NodePath,
}

impl ExtractionRule {
    /// Build a rule from a field name and an XPath-like suffix.
    ///
    /// The field name is matched against block headings as text. It must be
    /// non-empty and free of control characters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRule`] when the field name or suffix is rejected.
    pub fn new(field: &str, suffix: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidRule {
            field: field.to_string(),
            reason,
        };

        if field.trim().is_empty() {
            return Err(invalid("field name is empty".to_string()));
        }
        if field.chars().any(char::is_control) {
            return Err(invalid("field name contains control characters".to_string()));
        }
        let suffix = NodePath::parse(suffix).map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            field: field.to_string(),
            suffix,
        })
    }

    fn from_parts(field: &str, suffix: NodePath) -> Self {
        Self {
            field: field.to_string(),
            suffix,
        }
    }

    /// Heading label and output key.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Path evaluated under each matching block.
    #[must_use]
    pub fn suffix(&self) -> &NodePath {
        &self.suffix
    }
}

impl fmt::Display for ExtractionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.field, self.suffix)
    }
}

/// Configuration for one extraction.
///
/// # Example
///
/// ```rust
/// use movie_grabber::{ExtractionConfig, ExtractionRule, ShapeMode};
///
/// let config = ExtractionConfig::default()
///     .show_cast(false)
///     .shape_mode(ShapeMode::List)
///     .with_rule(ExtractionRule::new("Filming Locations:", "/a")?);
///
/// assert!(!config.include_cast);
/// assert_eq!(config.rules().len(), 7);
/// # Ok::<(), movie_grabber::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ExtractionConfig {
    rules: Vec<ExtractionRule>,

    /// How element sequences are collapsed.
    ///
    /// Default: [`ShapeMode::Csv`]
    pub shape_mode: ShapeMode,

    /// Extract the cast roster.
    ///
    /// Default: `true`
    pub include_cast: bool,

    /// Extract user rating and vote count.
    ///
    /// Default: `true`
    pub include_rating: bool,

    /// Extract the genre list.
    ///
    /// Default: `true`
    pub include_genres: bool,

    /// Force a page layout instead of detecting it.
    ///
    /// Default: `None`
    pub layout: Option<Layout>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        let rules = vec![
            ExtractionRule::from_parts("Country:", NodePath::child("a")),
            ExtractionRule::from_parts("Language:", NodePath::child("a")),
            ExtractionRule::from_parts("Runtime:", NodePath::child("time")),
            ExtractionRule::from_parts("Aspect Ratio:", NodePath::text()),
            ExtractionRule::from_parts("Release Date:", NodePath::text()),
            ExtractionRule::from_parts("Budget:", NodePath::text()),
        ];

        Self {
            rules,
            shape_mode: ShapeMode::Csv,
            include_cast: true,
            include_rating: true,
            include_genres: true,
            layout: None,
        }
    }
}

impl ExtractionConfig {
    /// A config with the default toggles and no configured rules.
    #[must_use]
    pub fn without_rules() -> Self {
        Self::default().clear_rules()
    }

    /// Configured rules in output order.
    #[must_use]
    pub fn rules(&self) -> &[ExtractionRule] {
        &self.rules
    }

    /// Add a rule. A rule with the same field name is replaced in place.
    #[must_use]
    pub fn with_rule(mut self, rule: ExtractionRule) -> Self {
        match self.rules.iter_mut().find(|r| r.field == rule.field) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
        self
    }

    /// Drop the rule for `field`, if any.
    #[must_use]
    pub fn without_rule(mut self, field: &str) -> Self {
        self.rules.retain(|r| r.field != field);
        self
    }

    /// Drop every configured rule.
    #[must_use]
    pub fn clear_rules(mut self) -> Self {
        self.rules.clear();
        self
    }

    #[must_use]
    pub fn show_cast(mut self, on: bool) -> Self {
        self.include_cast = on;
        self
    }

    #[must_use]
    pub fn show_rating(mut self, on: bool) -> Self {
        self.include_rating = on;
        self
    }

    #[must_use]
    pub fn show_genres(mut self, on: bool) -> Self {
        self.include_genres = on;
        self
    }

    /// `true` selects [`ShapeMode::Csv`], `false` selects [`ShapeMode::List`].
    #[must_use]
    pub fn use_csv(self, on: bool) -> Self {
        self.shape_mode(if on { ShapeMode::Csv } else { ShapeMode::List })
    }

    #[must_use]
    pub fn shape_mode(mut self, mode: ShapeMode) -> Self {
        self.shape_mode = mode;
        self
    }

    /// Pin the page layout.
    #[must_use]
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }
}
