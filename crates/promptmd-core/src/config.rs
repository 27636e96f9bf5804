use serde::{Deserialize, Deserializer};
use std::borrow::Cow;
use std::collections::HashMap;

use crate::layout;
use crate::render::Renderer;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Custom tag name -> recognized tag it should be treated as. Both sides
    /// are stored lower-cased.
    #[serde(default, deserialize_with = "lowercase_aliases")]
    aliases: HashMap<String, String>,
}

impl Config {
    pub fn from_toml(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    /// Treat elements tagged `name` (any case) as `target`. A later alias for
    /// the same name replaces the earlier one.
    pub fn with_alias(mut self, name: &str, target: &str) -> Self {
        self.aliases.insert(name.to_lowercase(), target.to_lowercase());
        self
    }

    /// The tag used for rendering and layout of an element whose lower-cased
    /// tag is `tag`. Aliases pointing at unknown tags are ignored.
    pub fn dispatch_tag<'a>(&'a self, tag: &'a str) -> Cow<'a, str> {
        match self.aliases.get(tag) {
            Some(target) if Renderer::for_tag(target).is_some() || layout::is_classified(target) => {
                Cow::Borrowed(target.as_str())
            }
            _ => Cow::Borrowed(tag),
        }
    }
}

/// Lower-case every alias; two keys that differ only by case are rejected
/// instead of one silently winning.
fn lowercase_aliases<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = HashMap::<String, String>::deserialize(deserializer)?;
    let mut aliases = HashMap::with_capacity(raw.len());
    for (name, target) in raw {
        let key = name.to_lowercase();
        if aliases.insert(key.clone(), target.to_lowercase()).is_some() {
            return Err(serde::de::Error::custom(format!(
                "duplicate alias for tag `{key}`"
            )));
        }
    }
    Ok(aliases)
}
