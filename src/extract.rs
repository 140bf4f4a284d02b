//! Field extraction engine.
//!
//! Runs the fixed fields of the page's layout and then every configured rule,
//! shaping each raw value sequence into one record entry. A query that matches
//! nothing yields an empty value; only an unparseable page fails the call.

use crate::dom::{self, Document};
use crate::error::Result;
use crate::layout::{Layout, LayoutRules};
use crate::options::ExtractionConfig;
use crate::result::{keys, CastEntry, FieldValue, MovieRecord};
use crate::shape;

/// Parse page bytes and extract a record from them.
///
/// # Errors
///
/// Returns [`crate::Error::ParseError`] when the bytes are not a usable
/// document. No field is attempted in that case.
pub(crate) fn extract_page(bytes: &[u8], url: &str, config: &ExtractionConfig) -> Result<MovieRecord> {
    let doc = dom::parse_bytes(bytes)?;
    Ok(extract_document(&doc, url, config))
}

/// Extract a record from an already parsed page.
pub(crate) fn extract_document(doc: &Document, url: &str, config: &ExtractionConfig) -> MovieRecord {
    let layout = config.layout.unwrap_or_else(|| Layout::detect(doc));
    let rules = layout.rules();
    let mut record = MovieRecord::new();

    record.insert(keys::TITLE, first_line(rules.title.evaluate(doc)));
    record.insert(keys::YEAR, first_line(rules.year.evaluate(doc)));
    record.insert(keys::URL, url);

    if let Some(src) = rules.poster.first(doc).filter(|s| !s.trim().is_empty()) {
        record.insert(keys::IMAGE, src.trim());
    }

    extract_credits(doc, &rules, config, &mut record);

    record.insert(keys::STORYLINE, storyline(doc, &rules));

    if config.include_cast {
        record.insert(keys::CAST, FieldValue::Cast(cast_roster(doc, &rules)));
    }

    if config.include_rating {
        record.insert(keys::RATING, first_line(rules.rating.evaluate(doc)));
        record.insert(keys::VOTES, first_line(rules.votes.evaluate(doc)));
    }

    if config.include_genres {
        let genres = rules.genres.evaluate(doc);
        record.insert(keys::GENRES, shape::shape_with_mode(&genres, config.shape_mode));
    }

    for rule in config.rules() {
        let values = rules.details.values(doc, rule.field(), rule.suffix());
        tracing::debug!(field = rule.field(), matched = values.len(), "evaluated rule");
        record.insert(rule.field(), shape::shape(&values, rule.suffix(), config.shape_mode));
    }

    record
}

/// Credited-person blocks, keyed by their heading text.
fn extract_credits(
    doc: &Document,
    rules: &LayoutRules,
    config: &ExtractionConfig,
    record: &mut MovieRecord,
) {
    let blocks = rules.credits.blocks(doc);
    let keep = blocks.len().saturating_sub(rules.skip_trailing_credit_blocks);

    for block in blocks.into_iter().take(keep) {
        let Some(label) = rules.credits.label(&block) else {
            continue;
        };
        let values = rules.credit_values.values(vec![block]);
        record.insert(label, shape::shape(&values, &rules.credit_values, config.shape_mode));
    }
}

/// First paragraph of the storyline region, newlines removed.
fn storyline(doc: &Document, rules: &LayoutRules) -> String {
    let regions = rules.storyline_region.matching(doc, rules.storyline_label);
    rules
        .storyline_paragraphs
        .nodes(regions)
        .first()
        .and_then(dom::first_child_text)
        .map(|text| dom::remove_newlines(&text).trim().to_string())
        .unwrap_or_default()
}

/// Zip cast names, thumbnails and roles by position.
///
/// The three sequences are queried independently. When their lengths differ
/// the roster is cut to the shortest one rather than pairing a name with
/// another row's thumbnail or role beyond the end of a list.
fn cast_roster(doc: &Document, rules: &LayoutRules) -> Vec<CastEntry> {
    let names = rules.cast_names.evaluate(doc);
    let lazy = rules.cast_thumbnails.evaluate(doc);
    let plain = rules.cast_thumbnails_fallback.evaluate(doc);
    let roles = rules.cast_roles.evaluate(doc);

    let thumbnails: Vec<String> = lazy
        .into_iter()
        .zip(plain)
        .map(|(lazy, plain)| if lazy.trim().is_empty() { plain } else { lazy })
        .collect();

    if names.len() != thumbnails.len() || names.len() != roles.len() {
        tracing::warn!(
            names = names.len(),
            thumbnails = thumbnails.len(),
            roles = roles.len(),
            "cast sequences differ in length; truncating to the shortest"
        );
    }

    names
        .iter()
        .zip(&thumbnails)
        .zip(&roles)
        .map(|((name, thumbnail), role)| CastEntry {
            name: collapse_whitespace(name),
            thumbnail_url: thumbnail.trim().to_string(),
            role: collapse_whitespace(role),
        })
        .collect()
}

/// First non-blank value, newlines removed and trimmed; `""` when none.
fn first_line(values: Vec<String>) -> String {
    values
        .into_iter()
        .map(|v| dom::remove_newlines(&v).trim().to_string())
        .find(|v| !v.is_empty())
        .unwrap_or_default()
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
