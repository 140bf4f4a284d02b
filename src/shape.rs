//! Value shaping.
//!
//! Collapses the raw values of one query into a single field value. Pure
//! functions only: the same values, path and mode always give the same output.

use crate::options::ShapeMode;
use crate::query::NodePath;
use crate::result::FieldValue;

/// Shape raw values according to the path and mode.
///
/// A path ending in `text()` always concatenates its trimmed values with no
/// separator, whatever the mode. Otherwise `mode` decides:
///
/// - [`ShapeMode::Text`]: trimmed values concatenated
/// - [`ShapeMode::Csv`]: trimmed values joined with `,` (empty values keep their slot)
/// - [`ShapeMode::List`]: trimmed values with empty entries dropped
///
/// ```
/// use movie_grabber::query::NodePath;
/// use movie_grabber::shape::shape;
/// use movie_grabber::{FieldValue, ShapeMode};
///
/// let links = NodePath::parse("/a").unwrap();
/// let raw = vec![" USA ".to_string(), "UK".to_string()];
/// assert_eq!(shape(&raw, &links, ShapeMode::Csv), FieldValue::Text("USA,UK".into()));
/// ```
#[must_use]
pub fn shape(values: &[String], path: &NodePath, mode: ShapeMode) -> FieldValue {
    if path.targets_text() {
        return FieldValue::Text(concat(values));
    }
    shape_with_mode(values, mode)
}

/// Shape raw values by mode alone, for element sequences with no path.
#[must_use]
pub fn shape_with_mode(values: &[String], mode: ShapeMode) -> FieldValue {
    match mode {
        ShapeMode::Text => FieldValue::Text(concat(values)),
        ShapeMode::Csv => FieldValue::Text(csv(values)),
        ShapeMode::List => FieldValue::List(list(values)),
    }
}

/// Trim each value and concatenate with no separator.
#[must_use]
pub fn concat(values: &[String]) -> String {
    values.iter().map(|v| v.trim()).collect()
}

/// Trim each value and join with a single comma.
#[must_use]
pub fn csv(values: &[String]) -> String {
    values.iter().map(|v| v.trim()).collect::<Vec<_>>().join(",")
}

/// Trim each value, keeping the non-empty ones in order.
#[must_use]
pub fn list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}
