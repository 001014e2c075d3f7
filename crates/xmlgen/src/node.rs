//! Canonical tree types consumed by the formatter

use std::borrow::Cow;
use std::fmt;

use crate::attribute::Attributes;
use crate::document::Doctype;
use crate::escape::cdata;

/// A single value usable as element text or as an attribute value
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    /// Text, escaped on output
    Text(String),
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    UInt(u64),
    /// Floating point number
    Float(f64),
    /// Boolean, rendered as `true`/`false`
    Bool(bool),
    /// Raw data emitted verbatim inside a CDATA section
    CData(String),
}

impl Scalar {
    /// Returns true if this value is a CDATA block
    pub fn is_cdata(&self) -> bool {
        matches!(self, Self::CData(_))
    }

    /// String form of the value, `None` for CDATA which has no plain text form
    pub fn stringify(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Text(text) => Some(Cow::Borrowed(text)),
            Self::Int(n) => Some(Cow::Owned(n.to_string())),
            Self::UInt(n) => Some(Cow::Owned(n.to_string())),
            Self::Float(n) => Some(Cow::Owned(n.to_string())),
            Self::Bool(b) => Some(Cow::Owned(b.to_string())),
            Self::CData(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CData(data) => f.write_str(&cdata(data)),
            other => write!(f, "{}", other.stringify().unwrap_or_default()),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Scalar {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<char> for Scalar {
    fn from(value: char) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::UInt(value.into())
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<usize> for Scalar {
    fn from(value: usize) -> Self {
        // usize is at most 64 bits on every supported target
        Self::UInt(u64::try_from(value).unwrap_or(u64::MAX))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Normalized element content
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    /// Inline scalar content
    Scalar(Scalar),
    /// Ordered child elements, rendered one per line even when empty
    Children(Vec<Node>),
}

/// A canonical element: name, attributes and optional content
///
/// Only produced by normalization, so a nameless node always carries
/// scalar content and child lists hold normalized nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    name: Option<String>,
    attributes: Attributes,
    content: Option<Content>,
}

impl Node {
    pub(crate) fn element(name: String, attributes: Attributes, content: Option<Content>) -> Self {
        Self {
            name: Some(name),
            attributes,
            content,
        }
    }

    pub(crate) fn text(value: Scalar) -> Self {
        Self {
            name: None,
            attributes: Attributes::new(),
            content: Some(Content::Scalar(value)),
        }
    }

    /// Element name, `None` for a bare text node
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    /// Returns true if the node is bare text with no surrounding tags
    pub fn is_text(&self) -> bool {
        self.name.is_none()
    }
}

/// Anything the formatter can render
#[derive(Clone, Debug, PartialEq)]
pub enum Markup {
    /// The `<?xml ...?>` declaration line
    Prolog,
    /// A `<!DOCTYPE ...>` line
    Doctype(Doctype),
    /// One element or text node
    Node(Node),
    /// Sibling items rendered at the same level, one per line
    Sequence(Vec<Markup>),
}

impl From<Node> for Markup {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Doctype> for Markup {
    fn from(doctype: Doctype) -> Self {
        Self::Doctype(doctype)
    }
}
