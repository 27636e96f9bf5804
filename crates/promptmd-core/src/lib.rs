pub mod ast;
pub mod components;
pub mod config;
pub mod custom;
pub mod elements;
pub mod error;
pub mod join;
pub mod layout;
pub mod normalize;
pub mod render;
pub mod transform;

use once_cell::sync::Lazy;

pub use ast::{AttrValue, Attributes, Component, Element, Node, Props};
pub use config::Config;
pub use error::{BoxError, ConvertError};

static DEFAULT_CONFIG: Lazy<Config> = Lazy::new(Config::default);

/// Convert a node tree into prompt text with the default configuration.
pub fn convert(node: &Node) -> Result<String, ConvertError> {
    convert_with_config(node, &DEFAULT_CONFIG)
}

/// Convert a node tree into prompt text.
pub fn convert_with_config(node: &Node, config: &Config) -> Result<String, ConvertError> {
    convert_nodes_with_config(std::slice::from_ref(node), config)
}

/// Convert top-level nodes as siblings of one implicit block parent.
pub fn convert_nodes(nodes: &[Node]) -> Result<String, ConvertError> {
    convert_nodes_with_config(nodes, &DEFAULT_CONFIG)
}

pub fn convert_nodes_with_config(nodes: &[Node], config: &Config) -> Result<String, ConvertError> {
    let flat = normalize::normalize_all(nodes)?;
    let parts = transform::to_parts(&flat, config)?;
    log::debug!("joining {} top-level parts", parts.len());
    Ok(join::join(&parts))
}
