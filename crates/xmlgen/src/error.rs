//! Error types for xmlgen

use std::fmt;
use thiserror::Error;

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// An input shape that does not describe a node
    UnsupportedShape { found: String },
    /// Content given as a mapping instead of a scalar or a list
    MappingContent,
    /// An attribute value with no string form (CDATA, null, lists, mappings)
    NonStringifiableAttribute { name: String },
    /// Doctype arguments that match neither the system nor the public form
    DoctypeShape { expected: String, found: String },
    /// Prolog or doctype used below the top level or out of position
    MisplacedDeclaration { declaration: &'static str },
    /// The JSON tree description is not valid JSON
    InvalidJson(String),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedShape { found } => write!(f, "unsupported element shape: {found}"),
            Self::MappingContent => write!(f, "element content cannot be a mapping"),
            Self::NonStringifiableAttribute { name } => {
                write!(f, "attribute {name} has no string value")
            }
            Self::DoctypeShape { expected, found } => {
                write!(f, "doctype expected {expected}, found {found}")
            }
            Self::MisplacedDeclaration { declaration } => {
                write!(f, "{declaration} is only allowed first at the top level")
            }
            Self::InvalidJson(reason) => write!(f, "invalid json: {reason}"),
        }
    }
}

/// Main error type for xmlgen
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    path: String,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            path: String::new(),
            message,
        }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: String::new(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Slash separated element path where the error occurred, empty at the top level
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Record that the error happened inside the element `name`
    #[must_use]
    pub fn within(mut self, name: &str) -> Self {
        self.path = format!("/{name}{}", self.path);
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "error at {}: {}", self.path, self.message)
        }
    }
}

/// Result type alias for xmlgen
pub type Result<T> = std::result::Result<T, Error>;
