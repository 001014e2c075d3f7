//! Inline attribute rendering

use indexmap::IndexMap;

use crate::error::{Error, ErrorKind, Result};
use crate::escape::escape;
use crate::node::Scalar;

/// Attribute name to value, iterated in insertion order
pub type Attributes = IndexMap<String, Scalar>;

/// Build an [`Attributes`] map from `(name, value)` pairs
///
/// ```
/// let attrs = xmlgen::attributes([("id", 7)]);
/// assert_eq!(attrs.len(), 1);
/// ```
pub fn attributes<K, V, I>(pairs: I) -> Attributes
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Scalar>,
{
    pairs
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect()
}

/// Render attributes as `name="value"` pairs separated by single spaces
pub fn render_attributes(attributes: &Attributes) -> Result<String> {
    let mut output = String::new();
    for (name, value) in attributes {
        let text = value.stringify().ok_or_else(|| {
            Error::new(ErrorKind::NonStringifiableAttribute { name: name.clone() })
        })?;
        if !output.is_empty() {
            output.push(' ');
        }
        output.push_str(name);
        output.push('=');
        output.push_str(&quote_value(&text));
    }
    Ok(output)
}

/// Escape a value and wrap it in the quote character it does not contain
pub fn quote_value(value: &str) -> String {
    let escaped = escape(value);
    let double = value.contains('"');
    let single = value.contains('\'');

    if double && single {
        format!("\"{}\"", escaped.replace('"', "&quot;"))
    } else if double {
        format!("'{escaped}'")
    } else {
        format!("\"{escaped}\"")
    }
}
