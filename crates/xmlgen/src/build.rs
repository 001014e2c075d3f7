//! Element constructors and normalization into canonical nodes
//!
//! Trees are described with [`Shape`], one variant per constructor form.
//! [`normalize`] turns a shape into [`Markup`], recursing through child
//! lists so every form ends up as a [`Node`].

use tracing::trace;

use crate::attribute::Attributes;
use crate::document::Doctype;
use crate::error::{Error, ErrorKind, Result};
use crate::node::{Content, Markup, Node, Scalar};

/// An element description before normalization
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Bare text with no element name
    Text(Scalar),
    /// `name` alone
    Name(String),
    /// `name` with attributes and no content
    Attrs(String, Attributes),
    /// `name` with content and no attributes
    Content(String, Body),
    /// `name`, attributes and content taken literally
    Full(String, Attributes, Body),
    /// An already normalized node
    Node(Node),
    /// Independent items, used for multi-root documents and child runs
    List(Vec<Shape>),
    /// A doctype, only meaningful as the first item of a document
    Doctype(Doctype),
}

/// Element content before normalization
#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Scalar(Scalar),
    List(Vec<Shape>),
}

impl From<Scalar> for Body {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<Shape>> for Body {
    fn from(children: Vec<Shape>) -> Self {
        Self::List(children)
    }
}

/// Second argument of a two argument constructor
///
/// Attribute maps become [`Argument::Attributes`]; everything else is content.
#[derive(Clone, Debug, PartialEq)]
pub enum Argument {
    Attributes(Attributes),
    Content(Body),
}

impl From<Attributes> for Argument {
    fn from(attributes: Attributes) -> Self {
        Self::Attributes(attributes)
    }
}

impl From<Body> for Argument {
    fn from(content: Body) -> Self {
        Self::Content(content)
    }
}

impl From<Vec<Shape>> for Argument {
    fn from(children: Vec<Shape>) -> Self {
        Self::Content(Body::List(children))
    }
}

macro_rules! scalar_content {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Body {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.into())
                }
            }

            impl From<$ty> for Argument {
                fn from(value: $ty) -> Self {
                    Self::Content(Body::Scalar(value.into()))
                }
            }
        )*
    };
}

scalar_content!(&str, String, &String, char, i32, i64, u32, u64, usize, f64, bool);

impl From<Scalar> for Argument {
    fn from(value: Scalar) -> Self {
        Self::Content(Body::Scalar(value))
    }
}

impl From<Node> for Shape {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Doctype> for Shape {
    fn from(doctype: Doctype) -> Self {
        Self::Doctype(doctype)
    }
}

impl From<Vec<Shape>> for Shape {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

/// Bare text, rendered without surrounding tags
pub fn text(value: impl Into<Scalar>) -> Shape {
    Shape::Text(value.into())
}

/// Raw data wrapped in a CDATA section instead of being escaped
pub fn cdata(data: impl Into<String>) -> Scalar {
    Scalar::CData(data.into())
}

/// An element with only a name, rendered self-closing
pub fn element(name: impl Into<String>) -> Shape {
    Shape::Name(name.into())
}

/// An element with either attributes or content
///
/// ```
/// use xmlgen::{attributes, element_with, render};
///
/// assert_eq!(render(element_with("person", "Josh")).unwrap(), "<person>Josh</person>");
/// assert_eq!(
///     render(element_with("person", attributes([("id", 1)]))).unwrap(),
///     r#"<person id="1"/>"#
/// );
/// ```
pub fn element_with(name: impl Into<String>, argument: impl Into<Argument>) -> Shape {
    match argument.into() {
        Argument::Attributes(attributes) => Shape::Attrs(name.into(), attributes),
        Argument::Content(body) => Shape::Content(name.into(), body),
    }
}

/// An element with attributes and no content
pub fn element_attrs(name: impl Into<String>, attributes: Attributes) -> Shape {
    Shape::Attrs(name.into(), attributes)
}

/// An element with content and no attributes
pub fn element_content(name: impl Into<String>, content: impl Into<Body>) -> Shape {
    Shape::Content(name.into(), content.into())
}

/// An element with attributes and content
pub fn element_full(
    name: impl Into<String>,
    attributes: Attributes,
    content: impl Into<Body>,
) -> Shape {
    Shape::Full(name.into(), attributes, content.into())
}

/// Normalize a shape into renderable markup
///
/// Lists become sequences with every item normalized on its own; every
/// other shape becomes a single node.
pub fn normalize(shape: Shape) -> Result<Markup> {
    match shape {
        Shape::List(items) => items
            .into_iter()
            .map(normalize)
            .collect::<Result<Vec<_>>>()
            .map(Markup::Sequence),
        other => normalize_node(other).map(Markup::Node),
    }
}

/// Normalize a single, non-list shape into a node
pub fn normalize_node(shape: Shape) -> Result<Node> {
    match shape {
        Shape::Text(value) => Ok(Node::text(value)),
        Shape::Name(name) => build(name, Attributes::new(), None),
        Shape::Attrs(name, attributes) => build(name, attributes, None),
        Shape::Content(name, body) => build(name, Attributes::new(), Some(body)),
        Shape::Full(name, attributes, body) => build(name, attributes, Some(body)),
        Shape::Node(node) => Ok(node),
        Shape::List(items) => Err(Error::new(ErrorKind::UnsupportedShape {
            found: format!("list of {} items where one element is expected", items.len()),
        })),
        Shape::Doctype(_) => Err(Error::new(ErrorKind::MisplacedDeclaration {
            declaration: "doctype",
        })),
    }
}

fn build(name: String, attributes: Attributes, body: Option<Body>) -> Result<Node> {
    if name.is_empty() {
        return Err(Error::new(ErrorKind::UnsupportedShape {
            found: "empty element name".to_string(),
        }));
    }
    trace!(name = %name, attributes = attributes.len(), "normalizing element");

    let content = match body {
        None => None,
        Some(Body::Scalar(value)) => Some(Content::Scalar(value)),
        Some(Body::List(items)) => {
            let mut children = Vec::with_capacity(items.len());
            for item in items {
                collect_children(item, &mut children).map_err(|err| err.within(&name))?;
            }
            Some(Content::Children(children))
        }
    };
    Ok(Node::element(name, attributes, content))
}

/// Push the normalized form of `shape`, splicing nested lists in place
fn collect_children(shape: Shape, children: &mut Vec<Node>) -> Result<()> {
    match shape {
        Shape::List(items) => {
            for item in items {
                collect_children(item, children)?;
            }
            Ok(())
        }
        other => {
            children.push(normalize_node(other)?);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::attributes;

    fn node(shape: Shape) -> Node {
        match normalize(shape) {
            Ok(Markup::Node(node)) => node,
            other => panic!("expected node, got {other:?}"),
        }
    }

    #[test]
    fn test_bare_text() {
        let node = node(text("hello"));
        assert!(node.is_text());
        assert_eq!(
            node.content(),
            Some(&Content::Scalar(Scalar::Text("hello".to_string())))
        );
    }

    #[test]
    fn test_bare_name() {
        let node = node(element("person"));
        assert_eq!(node.name(), Some("person"));
        assert!(node.attributes().is_empty());
        assert_eq!(node.content(), None);
    }

    #[test]
    fn test_two_arguments_with_attributes() {
        let node = node(element_with("person", attributes([("id", 12)])));
        assert_eq!(node.attributes().get("id"), Some(&Scalar::Int(12)));
        assert_eq!(node.content(), None);
    }

    #[test]
    fn test_two_arguments_with_content() {
        let person = node(element_with("person", "Josh"));
        assert!(person.attributes().is_empty());
        assert_eq!(
            person.content(),
            Some(&Content::Scalar(Scalar::Text("Josh".to_string())))
        );

        let answer = node(element_with("answer", 42));
        assert_eq!(answer.content(), Some(&Content::Scalar(Scalar::Int(42))));

        let script = node(element_with("script", cdata("a < b")));
        assert!(matches!(
            script.content(),
            Some(Content::Scalar(value)) if value.is_cdata()
        ));
    }

    #[test]
    fn test_three_arguments_taken_literally() {
        let person = node(element_full(
            "person",
            attributes([("occupation", "Developer")]),
            "Josh",
        ));
        assert_eq!(person.attributes().len(), 1);
        assert!(matches!(person.content(), Some(Content::Scalar(_))));

        let empty = node(element_full("e", Attributes::new(), Vec::<Shape>::new()));
        assert!(matches!(
            empty.content(),
            Some(Content::Children(children)) if children.is_empty()
        ));
    }

    #[test]
    fn test_children_normalize_uniformly() -> Result<()> {
        let prebuilt = normalize_node(element("prebuilt"))?;
        let node = node(element_content(
            "root",
            vec![
                element("a"),
                element_with("b", "text"),
                text("loose"),
                Shape::Node(prebuilt.clone()),
            ],
        ));
        let Some(Content::Children(children)) = node.content() else {
            panic!("expected children");
        };
        let names: Vec<_> = children.iter().map(Node::name).collect();
        assert_eq!(names, vec![Some("a"), Some("b"), None, Some("prebuilt")]);
        assert_eq!(children.get(3), Some(&prebuilt));
        Ok(())
    }

    #[test]
    fn test_nested_lists_in_content_are_spliced() {
        let node = node(element_content(
            "root",
            vec![element("a"), Shape::List(vec![element("b"), element("c")])],
        ));
        let Some(Content::Children(children)) = node.content() else {
            panic!("expected children");
        };
        assert_eq!(children.len(), 3);
    }

    #[test]
    fn test_top_level_list() -> Result<()> {
        let markup = normalize(Shape::List(vec![element("a"), element("b")]))?;
        let Markup::Sequence(items) = markup else {
            panic!("expected sequence");
        };
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| matches!(item, Markup::Node(_))));
        Ok(())
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let err = normalize(element("")).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::UnsupportedShape { .. }));
    }

    #[test]
    fn test_error_reports_element_path() {
        let shape = element_content(
            "catalog",
            vec![element_content("book", vec![element("")])],
        );
        let err = normalize(shape).unwrap_err();
        assert_eq!(err.path(), "/catalog/book");
    }

    #[test]
    fn test_doctype_inside_content_is_rejected() {
        let shape = element_content(
            "root",
            vec![Shape::Doctype(Doctype::system("root", "root.dtd"))],
        );
        let err = normalize(shape).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::MisplacedDeclaration {
                declaration: "doctype"
            }
        );
        assert_eq!(err.path(), "/root");
    }
}
