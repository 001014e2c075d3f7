//! xmlgen - build XML trees in memory and render them as text
//!
//! # Quick Start
//!
//! ```
//! use xmlgen::{attributes, document_full, element, element_content, element_with, render};
//! # fn main() -> Result<(), xmlgen::Error> {
//! assert_eq!(render(element("person"))?, "<person/>");
//!
//! let xml = document_full("person", attributes([("occupation", "Developer")]), "Josh")?;
//! assert_eq!(
//!     xml,
//!     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<person occupation=\"Developer\">Josh</person>"
//! );
//!
//! let list = element_content("list", vec![element_with("item", 1), element_with("item", 2)]);
//! assert_eq!(render(list)?, "<list>\n\t<item>1</item>\n\t<item>2</item>\n</list>");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use tracing::{debug, instrument};

pub mod error;
pub use error::{Error, ErrorKind, Result};

pub mod escape;
pub use escape::escape;

pub mod attribute;
pub use attribute::{attributes, Attributes};

pub mod node;
pub use node::{Content, Markup, Node, Scalar};

pub mod build;
pub use build::{
    cdata, element, element_attrs, element_content, element_full, element_with, normalize, text,
    Argument, Body, Shape,
};

pub mod document;
pub use document::{prepare_document, Doctype, PROLOG};

pub mod format;
pub use format::{render_indented, render_markup};

#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "json")]
pub use json::from_json_str;

/// Render a tree as a full document: the prolog line, a newline, then the body
///
/// A multi-root list may start with a [`Doctype`], which is emitted right
/// after the prolog.
#[instrument(skip_all)]
pub fn document(tree: impl Into<Shape>) -> Result<String> {
    let markup = prepare_document(tree.into())?;
    let output = render_markup(&markup)?;
    debug!(bytes = output.len(), "rendered document");
    Ok(output)
}

/// Render a single-root document from a name and either attributes or content
pub fn document_with(name: impl Into<String>, argument: impl Into<Argument>) -> Result<String> {
    document(element_with(name, argument))
}

/// Render a single-root document from a name, attributes and content
pub fn document_full(
    name: impl Into<String>,
    attributes: Attributes,
    content: impl Into<Body>,
) -> Result<String> {
    document(element_full(name, attributes, content))
}

/// Render a tree fragment without the prolog
#[instrument(skip_all)]
pub fn render(tree: impl Into<Shape>) -> Result<String> {
    let markup = normalize(tree.into())?;
    render_markup(&markup)
}
