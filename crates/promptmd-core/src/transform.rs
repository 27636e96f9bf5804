use crate::ast::{Element, Node};
use crate::config::Config;
use crate::custom::serialize_custom_element;
use crate::error::Result;
use crate::join::{join, Part};
use crate::layout::classify;
use crate::normalize::{normalize_all, Flat};
use crate::render::Renderer;

/// Convert one normalized node into a part.
pub fn to_part(flat: &Flat<'_>, config: &Config) -> Result<Part> {
    match flat {
        Flat::Text(text) => Ok(Part::text(text.as_ref())),
        Flat::Element(element) => element_to_part(element, config),
    }
}

/// Convert a normalized sibling sequence into parts, in order.
pub fn to_parts(flat: &[Flat<'_>], config: &Config) -> Result<Vec<Part>> {
    flat.iter().map(|f| to_part(f, config)).collect()
}

/// Normalize, convert and join a child sequence into one string.
pub fn convert_children(children: &[Node], config: &Config) -> Result<String> {
    let flat = normalize_all(children)?;
    let parts = to_parts(&flat, config)?;
    Ok(join(&parts))
}

fn element_to_part(element: &Element, config: &Config) -> Result<Part> {
    let content = convert_children(&element.children, config)?;
    let tag = element.tag.to_lowercase();
    let dispatch = config.dispatch_tag(&tag);

    let rendered = match Renderer::for_tag(&dispatch) {
        Some(renderer) => renderer.render(&content, &element.attributes),
        None => {
            log::trace!("no renderer for <{tag}>, serializing as custom element");
            serialize_custom_element(&tag, &element.attributes, &content)
        }
    };

    Ok(Part::rendered(rendered, classify(&dispatch)))
}
