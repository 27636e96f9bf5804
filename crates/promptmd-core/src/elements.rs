//! Constructors for the primitive elements the converter knows how to render.
//!
//! Each takes anything convertible into a [`Node`]; sequences passed as
//! content become the element's children.

use crate::ast::{Element, Node};

/// An element named `tag` with `content` as its children.
pub fn el(tag: &str, content: impl Into<Node>) -> Node {
    Element::new(tag).content(content).into()
}

/// Heading of `level`, clamped to 1..=6.
pub fn heading(level: u8, content: impl Into<Node>) -> Node {
    el(&format!("h{}", level.clamp(1, 6)), content)
}

macro_rules! simple_elements {
    ($($(#[$doc:meta])* $name:ident => $tag:literal),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(content: impl Into<Node>) -> Node {
                el($tag, content)
            }
        )*
    };
}

simple_elements! {
    h1 => "h1",
    h2 => "h2",
    h3 => "h3",
    h4 => "h4",
    h5 => "h5",
    h6 => "h6",
    p => "p",
    strong => "strong",
    b => "b",
    em => "em",
    i => "i",
    /// Inline code. Content is whitespace-collapsed but tags are kept.
    code => "code",
    del => "del",
    s => "s",
    ul => "ul",
    ol => "ol",
    li => "li",
    blockquote => "blockquote",
    /// Preformatted block, fenced verbatim.
    pre => "pre",
    span => "span",
}

pub fn a(href: &str, content: impl Into<Node>) -> Node {
    Element::new("a").attr("href", href).content(content).into()
}

pub fn pre_lang(language: &str, content: impl Into<Node>) -> Node {
    Element::new("pre").attr("language", language).content(content).into()
}

pub fn hr() -> Node {
    Element::new("hr").into()
}

pub fn br() -> Node {
    Element::new("br").into()
}
