//! Composite components for common prompt sections.
//!
//! Each expands to a lower-case XML-style element wrapping its children, so
//! `instructions(..)` renders as `<instructions>\n...\n</instructions>`.

use crate::ast::{Component, Element, Node, Props};

fn wrapper(name: &'static str, tag: &'static str, content: Node) -> Node {
    Node::component(name, move |props: &Props| {
        Element::new(tag).children(props.children.iter().cloned()).into()
    })
    .content(content)
    .into()
}

macro_rules! wrapper_components {
    ($($fn_name:ident => $name:literal, $tag:literal;)*) => {
        $(
            pub fn $fn_name(content: impl Into<Node>) -> Node {
                wrapper($name, $tag, content.into())
            }
        )*
    };
}

wrapper_components! {
    instructions => "Instructions", "instructions";
    context => "Context", "context";
    data => "Data", "data";
    examples => "Examples", "examples";
    example => "Example", "example";
    thinking => "Thinking", "thinking";
    answer => "Answer", "answer";
    analysis => "Analysis", "analysis";
    reasoning => "Reasoning", "reasoning";
    formatting => "Formatting", "formatting";
    formatting_example => "FormattingExample", "formatting_example";
    output => "Output", "output";
    result => "Result", "result";
    document => "Document", "document";
    documents => "Documents", "documents";
    content => "Content", "content";
    text => "Text", "text";
    contract => "Contract", "contract";
    agreement => "Agreement", "agreement";
    standard_contract => "StandardContract", "standard_contract";
    query => "Query", "query";
    user_query => "UserQuery", "user_query";
    findings => "Findings", "findings";
    recommendations => "Recommendations", "recommendations";
    summary => "Summary", "summary";
    conclusion => "Conclusion", "conclusion";
    conversation => "Conversation", "conversation";
    message => "Message", "message";
    question => "Question", "question";
    response => "Response", "response";
    constraints => "Constraints", "constraints";
    requirements => "Requirements", "requirements";
    guidelines => "Guidelines", "guidelines";
    rules => "Rules", "rules";
    input => "Input", "input";
    reference => "Reference", "reference";
    source => "Source", "source";
    citation => "Citation", "citation";
    task => "Task", "task";
    goal => "Goal", "goal";
    objective => "Objective", "objective";
    error => "Error", "error";
    warning => "Warning", "warning";
    validation => "Validation", "validation";
    metadata => "Metadata", "metadata";
    tags => "Tags", "tags";
    categories => "Categories", "categories";
}

/// A code block. Expands to `pre`, carrying `language` as `data-language`.
pub fn code_block(language: Option<&str>, content: impl Into<Node>) -> Node {
    let mut component: Component = Node::component("Code", |props: &Props| {
        let mut pre = Element::new("pre");
        if let Some(language) = props.get_str("language") {
            pre = pre.attr("data-language", language);
        }
        pre.children(props.children.iter().cloned()).into()
    })
    .content(content);
    if let Some(language) = language {
        component = component.attr("language", language);
    }
    component.into()
}
