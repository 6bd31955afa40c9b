use std::fmt;

use serde::{Deserialize, Serialize};

/// Host identifier of a text node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque, document-scoped reference to a text style definition.
///
/// The empty identifier means the text carries no style; it never resolves
/// against the style registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleId(pub String);

impl StyleId {
    pub fn is_unset(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StyleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StyleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A contiguous span `start..end` of a node's text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSegment {
    pub start: usize,
    pub end: usize,
    pub style: StyleId,
}

impl StyleSegment {
    pub fn new(start: usize, end: usize, style: impl Into<StyleId>) -> Self {
        Self {
            start,
            end,
            style: style.into(),
        }
    }
}

/// How a text node is styled: one style for all of it, or disjoint ordered
/// segments. On the wire a string is uniform and an array is segmented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleAssignment {
    Uniform(StyleId),
    Segmented(Vec<StyleSegment>),
}

impl StyleAssignment {
    /// Every style id in use, in text order. Repeats are kept.
    pub fn style_ids(&self) -> Vec<&StyleId> {
        match self {
            Self::Uniform(id) => vec![id],
            Self::Segmented(segments) => segments.iter().map(|s| &s.style).collect(),
        }
    }
}

impl Default for StyleAssignment {
    fn default() -> Self {
        Self::Uniform(StyleId::default())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    pub id: NodeId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub characters: String,

    #[serde(default = "default_visible")]
    pub visible: bool,

    /// Whether the node sits inside a component instance
    #[serde(default)]
    pub in_instance: bool,

    #[serde(default)]
    pub style: StyleAssignment,
}

fn default_visible() -> bool {
    true
}

impl TextNode {
    pub fn uniform(id: &str, style: &str) -> Self {
        Self {
            id: NodeId::from(id),
            name: String::new(),
            characters: String::new(),
            visible: true,
            in_instance: false,
            style: StyleAssignment::Uniform(StyleId::from(style)),
        }
    }

    pub fn segmented(id: &str, segments: Vec<StyleSegment>) -> Self {
        Self {
            id: NodeId::from(id),
            name: String::new(),
            characters: String::new(),
            visible: true,
            in_instance: false,
            style: StyleAssignment::Segmented(segments),
        }
    }

    /// Hidden text inside a component instance. Hidden nodes elsewhere in the
    /// document are still regular text nodes.
    pub fn is_invisible_instance_child(&self) -> bool {
        self.in_instance && !self.visible
    }
}
