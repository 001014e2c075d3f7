//! Recursive formatter rendering normalized markup as indented text

use crate::attribute::render_attributes;
use crate::document::PROLOG;
use crate::error::{Error, ErrorKind, Result};
use crate::escape::{cdata, escape};
use crate::node::{Content, Markup, Node, Scalar};

const INDENT: char = '\t';

/// Render markup at the top level
pub fn render_markup(markup: &Markup) -> Result<String> {
    render_indented(markup, 0)
}

/// Render markup with every line indented by `level` tabs
///
/// Prolog and doctype declarations are only accepted at level 0; the prolog
/// must also be the first thing written.
pub fn render_indented(markup: &Markup, level: usize) -> Result<String> {
    let mut output = String::new();
    write_markup(markup, level, &mut output)?;
    Ok(output)
}

fn write_markup(markup: &Markup, level: usize, output: &mut String) -> Result<()> {
    match markup {
        Markup::Prolog => {
            top_level_only("prolog", level)?;
            if !output.is_empty() {
                return Err(Error::new(ErrorKind::MisplacedDeclaration {
                    declaration: "prolog",
                }));
            }
            output.push_str(PROLOG);
        }
        Markup::Doctype(doctype) => {
            top_level_only("doctype", level)?;
            output.push_str(&doctype.declaration());
        }
        Markup::Node(node) => write_node(node, level, output)?,
        Markup::Sequence(items) => {
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    output.push('\n');
                }
                write_markup(item, level, output)?;
            }
        }
    }
    Ok(())
}

fn top_level_only(declaration: &'static str, level: usize) -> Result<()> {
    if level == 0 {
        Ok(())
    } else {
        Err(Error::new(ErrorKind::MisplacedDeclaration { declaration }))
    }
}

fn write_node(node: &Node, level: usize, output: &mut String) -> Result<()> {
    push_indent(level, output);

    let Some(name) = node.name() else {
        if let Some(Content::Scalar(value)) = node.content() {
            write_scalar(value, output);
        }
        return Ok(());
    };

    output.push('<');
    output.push_str(name);
    if !node.attributes().is_empty() {
        let attrs = render_attributes(node.attributes()).map_err(|err| err.within(name))?;
        output.push(' ');
        output.push_str(&attrs);
    }

    match node.content() {
        None => output.push_str("/>"),
        Some(Content::Scalar(value)) => {
            output.push('>');
            write_scalar(value, output);
            write_close(name, output);
        }
        Some(Content::Children(children)) => {
            output.push_str(">\n");
            for (idx, child) in children.iter().enumerate() {
                if idx > 0 {
                    output.push('\n');
                }
                write_node(child, level + 1, output).map_err(|err| err.within(name))?;
            }
            output.push('\n');
            push_indent(level, output);
            write_close(name, output);
        }
    }
    Ok(())
}

fn write_scalar(value: &Scalar, output: &mut String) {
    match value {
        Scalar::CData(data) => output.push_str(&cdata(data)),
        other => output.push_str(&escape(&other.stringify().unwrap_or_default())),
    }
}

fn write_close(name: &str, output: &mut String) {
    output.push_str("</");
    output.push_str(name);
    output.push('>');
}

fn push_indent(level: usize, output: &mut String) {
    output.extend(std::iter::repeat(INDENT).take(level));
}
