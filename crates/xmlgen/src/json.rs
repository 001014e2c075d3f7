//! JSON tree descriptions
//!
//! A compact JSON notation for [`Shape`] trees, used by the command line
//! tool:
//!
//! - a string, number or boolean is bare text;
//! - `["name"]`, `["name", {attrs}]`, `["name", content]` and
//!   `["name", {attrs}, content]` are elements;
//! - any other array is a list of shapes;
//! - `{"$cdata": "..."}` is raw CDATA text;
//! - `{"$doctype": {"name": .., "system": .., "public": ..}}` is a doctype.
//!
//! In content position an array is always a list of children.

use serde_json::{Map, Number, Value};

use crate::attribute::Attributes;
use crate::build::{Body, Shape};
use crate::document::Doctype;
use crate::error::{Error, ErrorKind, Result};
use crate::node::Scalar;

const CDATA_KEY: &str = "$cdata";
const DOCTYPE_KEY: &str = "$doctype";

/// Parse a JSON tree description
///
/// ```
/// let shape = xmlgen::from_json_str(r#"["person", {"id": 7}, "Josh"]"#).unwrap();
/// assert_eq!(xmlgen::render(shape).unwrap(), r#"<person id="7">Josh</person>"#);
/// ```
pub fn from_json_str(input: &str) -> Result<Shape> {
    let value: Value = serde_json::from_str(input)
        .map_err(|err| Error::new(ErrorKind::InvalidJson(err.to_string())))?;
    Shape::try_from(&value)
}

impl TryFrom<&Value> for Shape {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Err(unsupported("null")),
            Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                scalar(value).map(Shape::Text)
            }
            Value::Array(items) => match items.split_first() {
                Some((Value::String(name), rest)) => element(name, rest),
                _ => items
                    .iter()
                    .map(Self::try_from)
                    .collect::<Result<Vec<_>>>()
                    .map(Shape::List),
            },
            Value::Object(map) => {
                if let Some(data) = cdata(map) {
                    return data.map(Shape::Text);
                }
                if let Some(doctype) = map.get(DOCTYPE_KEY) {
                    return parse_doctype(doctype).map(Shape::Doctype);
                }
                Err(unsupported("mapping"))
            }
        }
    }
}

fn element(name: &str, rest: &[Value]) -> Result<Shape> {
    let shape = match rest {
        [] => Shape::Name(name.to_string()),
        [Value::Object(map)] if !is_tagged(map) => {
            Shape::Attrs(name.to_string(), parse_attributes(map)?)
        }
        [content] => Shape::Content(name.to_string(), body(content)?),
        [Value::Object(map), content] if !is_tagged(map) => {
            Shape::Full(name.to_string(), parse_attributes(map)?, body(content)?)
        }
        [_, _] => {
            return Err(unsupported("non-mapping attributes in three item element"));
        }
        _ => {
            return Err(unsupported(&format!("element with {} items", rest.len() + 1)));
        }
    };
    Ok(shape)
}

fn body(value: &Value) -> Result<Body> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(Shape::try_from)
            .collect::<Result<Vec<_>>>()
            .map(Body::List),
        Value::Object(map) => match cdata(map) {
            Some(data) => data.map(Body::Scalar),
            None => Err(Error::new(ErrorKind::MappingContent)),
        },
        Value::Null => Err(unsupported("null content")),
        other => scalar(other).map(Body::Scalar),
    }
}

fn parse_attributes(map: &Map<String, Value>) -> Result<Attributes> {
    map.iter()
        .map(|(name, value)| {
            let value = match value {
                Value::Object(inner) => cdata(inner).transpose()?,
                Value::Bool(_) | Value::Number(_) | Value::String(_) => Some(scalar(value)?),
                Value::Null | Value::Array(_) => None,
            };
            value.map(|value| (name.clone(), value)).ok_or_else(|| {
                Error::new(ErrorKind::NonStringifiableAttribute { name: name.clone() })
            })
        })
        .collect()
}

fn parse_doctype(value: &Value) -> Result<Doctype> {
    let Value::Object(fields) = value else {
        return Err(doctype_shape(describe(value)));
    };
    let field = |key: &str| match fields.get(key) {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.as_str())),
        Some(other) => Err(doctype_shape(format!("{key} as {}", describe(other)))),
    };
    let name = field("name")?.ok_or_else(|| doctype_shape("no name".to_string()))?;
    let system = field("system")?.ok_or_else(|| doctype_shape("no system".to_string()))?;
    match field("public")? {
        Some(public) => Ok(Doctype::public(name, public, system)),
        None => Ok(Doctype::system(name, system)),
    }
}

/// `Some` when the object is a `$cdata` tag, with an error if its payload is not text
fn cdata(map: &Map<String, Value>) -> Option<Result<Scalar>> {
    let data = map.get(CDATA_KEY)?;
    Some(match data {
        Value::String(text) if map.len() == 1 => Ok(Scalar::CData(text.clone())),
        _ => Err(unsupported("malformed $cdata tag")),
    })
}

fn is_tagged(map: &Map<String, Value>) -> bool {
    map.contains_key(CDATA_KEY) || map.contains_key(DOCTYPE_KEY)
}

fn scalar(value: &Value) -> Result<Scalar> {
    match value {
        Value::String(text) => Ok(Scalar::Text(text.clone())),
        Value::Bool(b) => Ok(Scalar::Bool(*b)),
        Value::Number(n) => Ok(number(n)),
        other => Err(unsupported(describe(other))),
    }
}

fn number(n: &Number) -> Scalar {
    if let Some(int) = n.as_i64() {
        Scalar::Int(int)
    } else if let Some(uint) = n.as_u64() {
        Scalar::UInt(uint)
    } else {
        Scalar::Float(n.as_f64().unwrap_or_default())
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "mapping",
    }
}

fn unsupported(found: &str) -> Error {
    Error::new(ErrorKind::UnsupportedShape {
        found: found.to_string(),
    })
}

fn doctype_shape(found: impl Into<String>) -> Error {
    Error::new(ErrorKind::DoctypeShape {
        expected: "{name, system[, public]} strings".to_string(),
        found: found.into(),
    })
}
