use crate::ast::Attributes;
use once_cell::sync::Lazy;
use regex::Regex;

static TAG_LIKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Tags with a dedicated Markdown rendering. Everything else goes through
/// the custom element serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    Heading(u8),
    Paragraph,
    Bold,
    Italic,
    InlineCode,
    Strikethrough,
    Link,
    List,
    ListItem,
    Blockquote,
    Rule,
    LineBreak,
    Preformatted,
}

impl Renderer {
    /// Look up the renderer for a lower-cased tag name.
    pub fn for_tag(tag: &str) -> Option<Renderer> {
        let renderer = match tag {
            "h1" => Renderer::Heading(1),
            "h2" => Renderer::Heading(2),
            "h3" => Renderer::Heading(3),
            "h4" => Renderer::Heading(4),
            "h5" => Renderer::Heading(5),
            "h6" => Renderer::Heading(6),
            "p" => Renderer::Paragraph,
            "strong" | "b" => Renderer::Bold,
            "em" | "i" => Renderer::Italic,
            "code" => Renderer::InlineCode,
            "del" | "s" => Renderer::Strikethrough,
            "a" => Renderer::Link,
            "ul" | "ol" => Renderer::List,
            "li" => Renderer::ListItem,
            "blockquote" => Renderer::Blockquote,
            "hr" => Renderer::Rule,
            "br" => Renderer::LineBreak,
            "pre" => Renderer::Preformatted,
            _ => return None,
        };
        Some(renderer)
    }

    /// Render already-joined child content.
    pub fn render(self, content: &str, attributes: &Attributes) -> String {
        match self {
            Renderer::Heading(level) => {
                format!("{} {}", "#".repeat(level as usize), inline_prepare(content))
            }
            Renderer::Paragraph | Renderer::List => content.to_string(),
            Renderer::Bold => format!("**{}**", inline_prepare(content)),
            Renderer::Italic => format!("_{}_", inline_prepare(content)),
            Renderer::InlineCode => format!("`{}`", collapse_whitespace(content)),
            Renderer::Strikethrough => format!("~~{}~~", inline_prepare(content)),
            Renderer::Link => {
                let href = attributes.get_str("href").unwrap_or("");
                format!("[{}]({})", inline_prepare(content), inline_prepare(href))
            }
            Renderer::ListItem => format!("- {}", inline_prepare(content)),
            Renderer::Blockquote => content
                .split('\n')
                .map(|line| format!("> {}", inline_prepare(line)))
                .collect::<Vec<_>>()
                .join("\n"),
            Renderer::Rule => "---".to_string(),
            Renderer::LineBreak => "\n".to_string(),
            Renderer::Preformatted => code_block(content, language(attributes)),
        }
    }
}

/// Collapse whitespace runs to single spaces and trim.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Strip tag-like `<...>` substrings, then collapse whitespace.
pub fn inline_prepare(text: &str) -> String {
    collapse_whitespace(&TAG_LIKE.replace_all(text, ""))
}

/// Length of the longest run of consecutive backticks in `text`.
fn longest_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for ch in text.chars() {
        if ch == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Backtick fence long enough that no run inside `content` can close it.
pub fn fence_for(content: &str) -> String {
    "`".repeat((longest_backtick_run(content) + 1).max(3))
}

fn language(attributes: &Attributes) -> Option<&str> {
    ["language", "data-language"]
        .into_iter()
        .filter_map(|name| attributes.get_str(name))
        .find(|value| !value.is_empty())
}

fn code_block(content: &str, language: Option<&str>) -> String {
    let fence = fence_for(content);
    format!("{fence}{}\n{content}\n{fence}", language.unwrap_or(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(tag: &str, content: &str) -> String {
        Renderer::for_tag(tag).unwrap().render(content, &Attributes::new())
    }

    #[test]
    fn test_headings() {
        assert_eq!(render("h1", "test"), "# test");
        assert_eq!(render("h4", "test"), "#### test");
        assert_eq!(render("h6", "a\n  b"), "###### a b");
    }

    #[test]
    fn test_inline_prepare_strips_tags() {
        assert_eq!(
            inline_prepare("System <custom>\nInstructions\n</custom> for AI"),
            "System Instructions for AI"
        );
    }

    #[test]
    fn test_inline_code_keeps_tags() {
        assert_eq!(render("code", "const x = <value>\n1\n</value>"), "`const x = <value> 1 </value>`");
        assert_eq!(render("code", "<findings>"), "`<findings>`");
    }

    #[test]
    fn test_emphasis_variants() {
        assert_eq!(render("strong", "bold"), "**bold**");
        assert_eq!(render("b", "bold"), "**bold**");
        assert_eq!(render("em", "text with\nnewlines"), "_text with newlines_");
        assert_eq!(render("i", "x"), "_x_");
        assert_eq!(render("del", "gone"), "~~gone~~");
        assert_eq!(render("s", "gone"), "~~gone~~");
    }

    #[test]
    fn test_link() {
        let mut attrs = Attributes::new();
        attrs.insert("href", "https://example.com");
        assert_eq!(Renderer::Link.render("link", &attrs), "[link](https://example.com)");
        assert_eq!(render("a", "link"), "[link]()");
    }

    #[test]
    fn test_blockquote_prefixes_every_line() {
        assert_eq!(render("blockquote", "line 1\nline   2"), "> line 1\n> line 2");
        assert_eq!(render("blockquote", "a\n\nb"), "> a\n> \n> b");
    }

    #[test]
    fn test_rule_and_break_ignore_content() {
        assert_eq!(render("hr", "ignored"), "---");
        assert_eq!(render("br", "ignored"), "\n");
    }

    #[test]
    fn test_pre_without_language() {
        assert_eq!(render("pre", "plain code"), "```\nplain code\n```");
    }

    #[test]
    fn test_pre_language_precedence() {
        let mut attrs = Attributes::new();
        attrs.insert("data-language", "python");
        attrs.insert("language", "");
        assert_eq!(Renderer::Preformatted.render("x", &attrs), "```python\nx\n```");
        attrs.insert("language", "rust");
        assert_eq!(Renderer::Preformatted.render("x", &attrs), "```rust\nx\n```");
    }

    #[test]
    fn test_pre_content_is_verbatim() {
        let code = "def hello():\n    print(\"Hello\")";
        assert_eq!(render("pre", code), format!("```\n{code}\n```"));
    }

    #[test]
    fn test_fence_grows_past_backtick_runs() {
        assert_eq!(fence_for("no ticks"), "```");
        assert_eq!(fence_for("a `b` c"), "```");
        assert_eq!(fence_for("```"), "````");
        assert_eq!(fence_for("x ````` y `` z"), "``````");
    }

    #[test]
    fn test_unknown_tags_have_no_renderer() {
        assert_eq!(Renderer::for_tag("span"), None);
        assert_eq!(Renderer::for_tag("instructions"), None);
        assert_eq!(Renderer::for_tag("h7"), None);
    }
}
