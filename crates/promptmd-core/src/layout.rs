/// How a converted part is spaced against its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Separated from adjacent blocks by a blank line.
    Block,
    /// Flows within a line.
    Inline,
    /// Separated from adjacent list items by a single newline.
    ListItem,
}

const INLINE_TAGS: &[&str] = &["strong", "b", "em", "i", "code", "del", "s", "a", "span"];

const LIST_ITEM_TAGS: &[&str] = &["li"];

/// Layout category of a lower-cased tag name. Unknown tags are blocks.
pub fn classify(tag: &str) -> Layout {
    if LIST_ITEM_TAGS.contains(&tag) {
        Layout::ListItem
    } else if INLINE_TAGS.contains(&tag) {
        Layout::Inline
    } else {
        Layout::Block
    }
}

/// Whether `tag` has a layout category of its own rather than the block default.
pub(crate) fn is_classified(tag: &str) -> bool {
    LIST_ITEM_TAGS.contains(&tag) || INLINE_TAGS.contains(&tag)
}
