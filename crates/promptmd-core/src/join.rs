use crate::layout::Layout;

/// A converted node, alive only for the duration of one conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub content: String,
    pub layout: Layout,
    pub whitespace_only: bool,
}

impl Part {
    pub fn text(content: impl Into<String>) -> Self {
        let content = content.into();
        let whitespace_only = content.trim().is_empty();
        Self {
            content,
            layout: Layout::Inline,
            whitespace_only,
        }
    }

    pub fn rendered(content: String, layout: Layout) -> Self {
        Self {
            content,
            layout,
            whitespace_only: false,
        }
    }
}

/// Combine sibling parts into one string.
///
/// Adjacent blocks get a blank line between them and adjacent list items a
/// single newline. Otherwise the most recent whitespace-only part seen since
/// the last emission decides the separator: two or more newlines give a blank
/// line, one newline gives a newline, anything else a space. Whitespace-only
/// parts are never emitted themselves, and parts with empty content are
/// skipped as if absent.
pub fn join(parts: &[Part]) -> String {
    let mut out = String::new();
    let mut previous: Option<Layout> = None;
    let mut pending: Option<&str> = None;

    for part in parts {
        if part.whitespace_only {
            pending = Some(part.content.as_str());
            continue;
        }
        if part.content.is_empty() {
            continue;
        }

        if let Some(previous) = previous {
            let separator = match (previous, part.layout) {
                (Layout::Block, Layout::Block) => "\n\n",
                (Layout::ListItem, Layout::ListItem) => "\n",
                _ => pending.map_or("", whitespace_separator),
            };
            out.push_str(separator);
        }
        pending = None;

        out.push_str(&part.content);
        previous = Some(part.layout);
    }

    out
}

fn whitespace_separator(whitespace: &str) -> &'static str {
    match whitespace.matches('\n').count() {
        0 => " ",
        1 => "\n",
        _ => "\n\n",
    }
}
