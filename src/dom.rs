//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate. Everything the extraction engine
//! needs from a parsed page (text content, attributes, direct children) goes
//! through these functions so the engine never touches `dom_query` details.

pub use dom_query::{Document, NodeRef, Selection};

pub use tendril::StrTendril;

use crate::encoding;
use crate::error::{Error, Result};

// === Parsing ===

/// Parse an HTML string into a document.
///
/// HTML parsing is forgiving: any string yields a tree.
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Transcode fetched bytes to UTF-8 and parse them.
///
/// A body that is empty or whitespace-only after transcoding is rejected with
/// [`Error::ParseError`]; there is nothing to extract from it.
pub fn parse_bytes(bytes: &[u8]) -> Result<Document> {
    let html = encoding::transcode_to_utf8(bytes);
    if html.trim().is_empty() {
        return Err(Error::ParseError("document is empty".to_string()));
    }
    Ok(parse(&html))
}

// === Text Content ===

/// All text of a single node. For a text node this is the node's own content.
#[inline]
#[must_use]
pub fn node_text(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Remove every `\n` from a string, leaving other whitespace alone.
#[must_use]
pub fn remove_newlines(s: &str) -> String {
    s.replace('\n', "")
}

// === Attributes ===

/// Get any attribute value of the first node in the selection.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get an attribute of a single node.
#[must_use]
pub fn node_attribute(node: &NodeRef, name: &str) -> Option<String> {
    get_attribute(&Selection::from(*node), name)
}

/// Check whether a node's `class` attribute contains `class` as a whole token.
#[must_use]
pub fn has_class(node: &NodeRef, class: &str) -> bool {
    node_attribute(node, "class")
        .is_some_and(|value| value.split_ascii_whitespace().any(|c| c == class))
}

/// Tag name of a node, lowercased. `None` for non-element nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

// === Tree Navigation ===

/// Direct element children of a node, in document order.
#[must_use]
pub fn child_elements<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children().into_iter().filter(NodeRef::is_element).collect()
}

/// Direct text-node children of a node, in document order.
#[must_use]
pub fn child_text_nodes<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children().into_iter().filter(NodeRef::is_text).collect()
}

/// Text of the first child node (text or element) that is not blank.
///
/// Whitespace-only text nodes between tags are skipped; the returned text is
/// whatever the first meaningful child holds, untrimmed.
#[must_use]
pub fn first_child_text(node: &NodeRef) -> Option<StrTendril> {
    node.children()
        .into_iter()
        .filter(|child| child.is_text() || child.is_element())
        .map(|child| node_text(&child))
        .find(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bytes_rejects_empty_body() {
        assert!(matches!(parse_bytes(b""), Err(Error::ParseError(_))));
        assert!(matches!(parse_bytes(b"  \n\t "), Err(Error::ParseError(_))));
    }

    #[test]
    fn parse_bytes_accepts_fragment() {
        let doc = parse_bytes(b"<p>The Matrix</p>");
        match doc {
            Ok(doc) => assert_eq!(doc.select("p").text().to_string(), "The Matrix"),
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }

    #[test]
    fn child_elements_skip_text_nodes() {
        let doc = parse(r#"<div id="root">lead <a>USA</a> , <a>UK</a> tail</div>"#);
        let root = doc.select("#root");
        let node = root.nodes().first().copied();
        let Some(node) = node else {
            panic!("root node missing");
        };

        let elements = child_elements(&node);
        assert_eq!(elements.len(), 2);
        assert_eq!(tag_name(&elements[0]).as_deref(), Some("a"));

        let texts: Vec<String> = child_text_nodes(&node)
            .iter()
            .map(|n| node_text(n).to_string())
            .collect();
        assert_eq!(texts, vec!["lead ", " , ", " tail"]);
    }

    #[test]
    fn has_class_matches_whole_tokens() {
        let doc = parse(r#"<div class="txt-block inline">x</div>"#);
        let sel = doc.select("div");
        let Some(node) = sel.nodes().first().copied() else {
            panic!("div missing");
        };
        assert!(has_class(&node, "txt-block"));
        assert!(has_class(&node, "inline"));
        assert!(!has_class(&node, "txt"));
    }

    #[test]
    fn first_child_text_skips_blank_nodes() {
        let doc = parse("<p>\n   <span>Neo is a hacker.</span> more</p>");
        let sel = doc.select("p");
        let Some(node) = sel.nodes().first().copied() else {
            panic!("p missing");
        };
        assert_eq!(
            first_child_text(&node).map(|t| t.to_string()).as_deref(),
            Some("Neo is a hacker.")
        );
    }

    #[test]
    fn remove_newlines_keeps_spaces() {
        assert_eq!(remove_newlines("The\nMatrix \n"), "TheMatrix ");
    }
}
