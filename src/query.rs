//! Query expressions over a parsed page.
//!
//! Queries are built from typed parts instead of interpolated strings:
//!
//! - a [`NodePath`] walks direct children step by step and ends in a
//!   [`Target`]: the element nodes themselves, their text-node children
//!   (`text()`), or one attribute (`@name`);
//! - a [`Query`] anchors a `NodePath` on a CSS selector evaluated from the
//!   document root (used by the fixed fields of a layout);
//! - a [`BlockQuery`] locates metadata blocks by the text of their heading
//!   child. Heading text is compared as a string, never spliced into a
//!   selector, so any field name is safe.
//!
//! The suffix syntax accepted by [`NodePath::parse`] is the familiar XPath-like
//! tail: `/a`, `/time`, `/text()`, `/span/text()`, `/a/img/@src`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::dom::{self, Document, NodeRef};

/// A compound step: optional tag, optional id, any number of classes.
#[allow(clippy::expect_used)]
static STEP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\*|[A-Za-z][A-Za-z0-9-]*)?((?:[.#][A-Za-z0-9_-]+)*)$").expect("valid regex")
});

#[allow(clippy::expect_used)]
static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@([A-Za-z_:][A-Za-z0-9_:.-]*)$").expect("valid regex")
});

/// Reason a path expression was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct PathError(String);

/// What a path yields once its steps are exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The matched elements; their value is their full text content.
    Elements,
    /// The direct text-node children of the matched elements.
    Text,
    /// One attribute of each matched element (empty when absent).
    Attribute(String),
}

/// One child step of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Step {
    fn parse(segment: &str) -> Option<Self> {
        if segment.is_empty() {
            return None;
        }
        let caps = STEP_RE.captures(segment)?;
        let tag = caps
            .get(1)
            .map(|m| m.as_str())
            .filter(|t| *t != "*")
            .map(str::to_ascii_lowercase);

        let mut id = None;
        let mut classes = Vec::new();
        let qualifiers = caps.get(2).map_or("", |m| m.as_str());
        let mut rest = qualifiers;
        while let Some(marker) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(['.', '#']).unwrap_or(body.len());
            let name = body[..end].to_string();
            if marker == '#' {
                id = Some(name);
            } else {
                classes.push(name);
            }
            rest = &body[end..];
        }

        Some(Self { tag, id, classes })
    }

    fn matches(&self, node: &NodeRef) -> bool {
        if let Some(ref tag) = self.tag {
            if dom::tag_name(node).as_deref() != Some(tag.as_str()) {
                return false;
            }
        }
        if let Some(ref id) = self.id {
            if dom::node_attribute(node, "id").as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| dom::has_class(node, class))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag.as_deref().unwrap_or("*"))?;
        if let Some(ref id) = self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}

/// A relative path: child steps followed by a terminal target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath {
    steps: Vec<Step>,
    target: Target,
}

impl NodePath {
    /// The context nodes themselves.
    #[must_use]
    pub fn elements() -> Self {
        Self { steps: Vec::new(), target: Target::Elements }
    }

    /// The text-node children of the context nodes.
    #[must_use]
    pub fn text() -> Self {
        Self { steps: Vec::new(), target: Target::Text }
    }

    /// One attribute of the context nodes.
    #[must_use]
    pub fn attribute(name: &str) -> Self {
        Self {
            steps: Vec::new(),
            target: Target::Attribute(name.to_string()),
        }
    }

    /// Elements one step down whose tag is `tag`.
    #[must_use]
    pub fn child(tag: &str) -> Self {
        Self {
            steps: vec![Step {
                tag: Some(tag.to_ascii_lowercase()),
                id: None,
                classes: Vec::new(),
            }],
            target: Target::Elements,
        }
    }

    /// Extend the path one more child step down, to elements tagged `tag`.
    #[must_use]
    pub fn then(mut self, tag: &str) -> Self {
        self.steps.push(Step {
            tag: Some(tag.to_ascii_lowercase()),
            id: None,
            classes: Vec::new(),
        });
        self
    }

    /// Parse an XPath-like suffix such as `/a`, `/text()` or `/img/@src`.
    pub fn parse(expr: &str) -> Result<Self, PathError> {
        let trimmed = expr.trim();
        let body = trimmed.strip_prefix('/').unwrap_or(trimmed);
        if body.is_empty() {
            return Err(PathError("empty path".to_string()));
        }

        let segments: Vec<&str> = body.split('/').collect();
        let last = segments.len() - 1;
        let mut steps = Vec::with_capacity(segments.len());
        let mut target = Target::Elements;

        for (i, segment) in segments.iter().map(|s| s.trim()).enumerate() {
            if segment == "text()" {
                if i != last {
                    return Err(PathError("text() must be the last step".to_string()));
                }
                target = Target::Text;
            } else if segment.starts_with('@') {
                if i != last {
                    return Err(PathError(format!("{segment} must be the last step")));
                }
                let caps = ATTRIBUTE_RE
                    .captures(segment)
                    .ok_or_else(|| PathError(format!("bad attribute step {segment:?}")))?;
                target = Target::Attribute(caps[1].to_string());
            } else {
                let step = Step::parse(segment)
                    .ok_or_else(|| PathError(format!("bad step {segment:?}")))?;
                steps.push(step);
            }
        }

        Ok(Self { steps, target })
    }

    /// Terminal target of this path.
    #[must_use]
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// True when the path selects raw text nodes rather than elements.
    #[must_use]
    pub fn targets_text(&self) -> bool {
        self.target == Target::Text
    }

    /// Nodes reached by walking the steps from each context, in order.
    #[must_use]
    pub fn nodes<'a>(&self, contexts: Vec<NodeRef<'a>>) -> Vec<NodeRef<'a>> {
        self.steps.iter().fold(contexts, |current, step| {
            current
                .iter()
                .flat_map(|node| dom::child_elements(node))
                .filter(|child| step.matches(child))
                .collect()
        })
    }

    /// Evaluate the path against context nodes and read one raw value per
    /// resulting node.
    #[must_use]
    pub fn values(&self, contexts: Vec<NodeRef<'_>>) -> Vec<String> {
        let nodes = self.nodes(contexts);
        match self.target {
            Target::Elements => nodes.iter().map(|n| dom::node_text(n).to_string()).collect(),
            Target::Text => nodes
                .iter()
                .flat_map(|n| dom::child_text_nodes(n))
                .map(|t| dom::node_text(&t).to_string())
                .collect(),
            Target::Attribute(ref name) => nodes
                .iter()
                .map(|n| dom::node_attribute(n, name).unwrap_or_default())
                .collect(),
        }
    }
}

impl FromStr for NodePath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "/{step}")?;
        }
        match self.target {
            Target::Elements => Ok(()),
            Target::Text => f.write_str("/text()"),
            Target::Attribute(ref name) => write!(f, "/@{name}"),
        }
    }
}

/// A CSS anchor evaluated from the document root, followed by a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    anchor: &'static str,
    path: NodePath,
}

impl Query {
    /// Anchor on every element matching `css`.
    #[must_use]
    pub fn select(css: &'static str) -> Self {
        Self { anchor: css, path: NodePath::elements() }
    }

    /// Read the anchored elements' text-node children instead.
    #[must_use]
    pub fn text(mut self) -> Self {
        self.path.target = Target::Text;
        self
    }

    /// Read one attribute of the anchored elements instead.
    #[must_use]
    pub fn attr(mut self, name: &str) -> Self {
        self.path.target = Target::Attribute(name.to_string());
        self
    }

    /// The raw value sequence for this query, in document order.
    #[must_use]
    pub fn evaluate(&self, doc: &Document) -> Vec<String> {
        let anchored = doc.select(self.anchor);
        self.path.values(anchored.nodes().to_vec())
    }

    /// First value, if the query matched anything.
    #[must_use]
    pub fn first(&self, doc: &Document) -> Option<String> {
        self.evaluate(doc).into_iter().next()
    }

    /// Whether the query matched at least one node.
    #[must_use]
    pub fn exists(&self, doc: &Document) -> bool {
        !doc.select(self.anchor).is_empty()
    }
}

/// Locates heading-labelled metadata blocks.
///
/// A block is any element matching `blocks`; its label is the trimmed text of
/// its first direct child matching the `heading` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockQuery {
    /// CSS selector for candidate blocks.
    pub blocks: &'static str,
    /// Tag name of the heading child, e.g. `h4`.
    pub heading: &'static str,
}

impl BlockQuery {
    /// Every candidate block in document order, headed or not.
    #[must_use]
    pub fn blocks<'a>(&self, doc: &'a Document) -> Vec<NodeRef<'a>> {
        doc.select(self.blocks).nodes().to_vec()
    }

    /// Every block with its heading label, in document order.
    ///
    /// Blocks without a heading child are skipped.
    #[must_use]
    pub fn labelled<'a>(&self, doc: &'a Document) -> Vec<(String, NodeRef<'a>)> {
        self.blocks(doc)
            .into_iter()
            .filter_map(|block| self.label(&block).map(|label| (label, block)))
            .collect()
    }

    /// Blocks whose heading label equals `label` (both sides trimmed).
    #[must_use]
    pub fn matching<'a>(&self, doc: &'a Document, label: &str) -> Vec<NodeRef<'a>> {
        let wanted = label.trim();
        self.labelled(doc)
            .into_iter()
            .filter(|(found, _)| found == wanted)
            .map(|(_, block)| block)
            .collect()
    }

    /// Raw values of `suffix` evaluated under every block labelled `label`.
    #[must_use]
    pub fn values(&self, doc: &Document, label: &str, suffix: &NodePath) -> Vec<String> {
        suffix.values(self.matching(doc, label))
    }

    /// Trimmed text of the block's first heading child.
    #[must_use]
    pub fn label(&self, block: &NodeRef) -> Option<String> {
        dom::child_elements(block)
            .into_iter()
            .find(|child| dom::tag_name(child).as_deref() == Some(self.heading))
            .map(|heading| dom::node_text(&heading).trim().to_string())
    }
}
