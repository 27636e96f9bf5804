use std::borrow::Cow;

use crate::ast::{Component, Element, Node};
use crate::error::{ConvertError, Result};

/// A node left after composites are expanded and groupings flattened.
#[derive(Debug, Clone, PartialEq)]
pub enum Flat<'a> {
    Text(Cow<'a, str>),
    Element(Cow<'a, Element>),
}

/// Flatten `node` into its ordered sequence of text leaves and primitive
/// elements. Elements are not descended into.
pub fn normalize(node: &Node) -> Result<Vec<Flat<'_>>> {
    let mut out = Vec::new();
    normalize_into(node, &mut out)?;
    Ok(out)
}

/// Normalize each node of `nodes` in turn and concatenate the results.
pub fn normalize_all(nodes: &[Node]) -> Result<Vec<Flat<'_>>> {
    let mut out = Vec::new();
    for node in nodes {
        normalize_into(node, &mut out)?;
    }
    Ok(out)
}

fn normalize_into<'a>(node: &'a Node, out: &mut Vec<Flat<'a>>) -> Result<()> {
    match node {
        Node::Null | Node::Bool(_) => {}
        Node::Text(text) => out.push(Flat::Text(Cow::Borrowed(text))),
        Node::Integer(n) => out.push(Flat::Text(Cow::Owned(n.to_string()))),
        Node::Number(n) => out.push(Flat::Text(Cow::Owned(format_number(*n)))),
        Node::Element(element) => out.push(Flat::Element(Cow::Borrowed(element))),
        Node::Fragment(children) | Node::List(children) => {
            for child in children {
                normalize_into(child, out)?;
            }
        }
        Node::Component(component) => normalize_owned(expand(component)?, out)?,
    }
    Ok(())
}

/// Same as `normalize_into` for nodes produced by a composite expansion,
/// which the output takes ownership of.
fn normalize_owned(node: Node, out: &mut Vec<Flat<'_>>) -> Result<()> {
    match node {
        Node::Null | Node::Bool(_) => {}
        Node::Text(text) => out.push(Flat::Text(Cow::Owned(text))),
        Node::Integer(n) => out.push(Flat::Text(Cow::Owned(n.to_string()))),
        Node::Number(n) => out.push(Flat::Text(Cow::Owned(format_number(n)))),
        Node::Element(element) => out.push(Flat::Element(Cow::Owned(element))),
        Node::Fragment(children) | Node::List(children) => {
            for child in children {
                normalize_owned(child, out)?;
            }
        }
        Node::Component(component) => normalize_owned(expand(&component)?, out)?,
    }
    Ok(())
}

fn expand(component: &Component) -> Result<Node> {
    log::trace!("expanding component {}", component.name);
    component.expand().map_err(|source| ConvertError::Component {
        name: component.name.clone(),
        source,
    })
}

/// String form of a floating-point leaf. Integral values print without a
/// fraction; magnitudes at or above `1e21` or below `1e-6` switch to
/// exponent form with an explicit exponent sign (`1e+21`, `1e-7`).
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let exp = format!("{n:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        }
    } else {
        n.to_string()
    }
}
