//! Prolog and doctype declarations, and document assembly

use tracing::debug;

use crate::build::{normalize, Shape};
use crate::error::{Error, ErrorKind, Result};
use crate::node::Markup;

/// The XML declaration emitted at the top of every document
pub const PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// A `<!DOCTYPE ...>` declaration in its system or public identifier form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Doctype {
    name: String,
    public_id: Option<String>,
    system_id: String,
}

impl Doctype {
    /// `<!DOCTYPE name SYSTEM "system_id">`
    pub fn system(name: impl Into<String>, system_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            public_id: None,
            system_id: system_id.into(),
        }
    }

    /// `<!DOCTYPE name PUBLIC "public_id" "system_id">`
    pub fn public(
        name: impl Into<String>,
        public_id: impl Into<String>,
        system_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            public_id: Some(public_id.into()),
            system_id: system_id.into(),
        }
    }

    /// Pick the variant from the identifier count: one is system, two are public then system
    pub fn from_parts<S: AsRef<str>>(name: &str, identifiers: &[S]) -> Result<Self> {
        match identifiers {
            [system] => Ok(Self::system(name, system.as_ref())),
            [public, system] => Ok(Self::public(name, public.as_ref(), system.as_ref())),
            other => Err(Error::new(ErrorKind::DoctypeShape {
                expected: "1 or 2 identifiers".to_string(),
                found: other.len().to_string(),
            })),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn public_id(&self) -> Option<&str> {
        self.public_id.as_deref()
    }

    pub fn system_id(&self) -> &str {
        &self.system_id
    }

    /// The declaration line, without a trailing newline
    pub fn declaration(&self) -> String {
        match &self.public_id {
            Some(public) => format!(
                r#"<!DOCTYPE {} PUBLIC "{}" "{}">"#,
                self.name, public, self.system_id
            ),
            None => format!(r#"<!DOCTYPE {} SYSTEM "{}">"#, self.name, self.system_id),
        }
    }
}

/// Normalize `shape` as a document body and prefix it with the prolog
///
/// In a multi-root list the first entry may be a doctype, which is kept as
/// is. A single root, or a one-item list, is normalized plainly. A doctype
/// with no root after it is rejected.
pub fn prepare_document(shape: Shape) -> Result<Markup> {
    let body = match shape {
        Shape::Doctype(_) => return Err(doctype_without_root()),
        Shape::List(items) if matches!(items.as_slice(), [Shape::Doctype(_)]) => {
            return Err(doctype_without_root());
        }
        Shape::List(items) if items.len() > 1 => {
            let mut items = items.into_iter();
            let mut body = Vec::with_capacity(items.len());
            match items.next() {
                Some(Shape::Doctype(doctype)) => {
                    debug!(name = doctype.name(), "document starts with doctype");
                    body.push(Markup::Doctype(doctype));
                }
                Some(first) => body.push(normalize(first)?),
                None => {}
            }
            for item in items {
                body.push(normalize(item)?);
            }
            Markup::Sequence(body)
        }
        other => normalize(other)?,
    };
    Ok(Markup::Sequence(vec![Markup::Prolog, body]))
}

fn doctype_without_root() -> Error {
    Error::with_message(
        ErrorKind::MisplacedDeclaration {
            declaration: "doctype",
        },
        "doctype must be followed by a root element",
    )
}
