use crate::ast::{AttrValue, Attributes};

/// Re-emit an element without a dedicated renderer as a generic tag,
/// keeping its attributes in insertion order.
pub fn serialize_custom_element(tag: &str, attributes: &Attributes, content: &str) -> String {
    let attrs = render_attributes(attributes);
    let open = if attrs.is_empty() {
        format!("<{tag}")
    } else {
        format!("<{tag} {attrs}")
    };

    if content.is_empty() {
        format!("{open} />")
    } else {
        format!("{open}>\n{content}\n</{tag}>")
    }
}

fn render_attributes(attributes: &Attributes) -> String {
    attributes
        .iter()
        .filter(|(name, _)| *name != "children")
        .filter_map(|(name, value)| render_attribute(name, value))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_attribute(name: &str, value: &AttrValue) -> Option<String> {
    match value {
        AttrValue::String(s) => Some(format!("{name}=\"{s}\"")),
        AttrValue::Bool(true) => Some(name.to_string()),
        AttrValue::Bool(false) => None,
        AttrValue::Json(serde_json::Value::Null) => None,
        AttrValue::Json(serde_json::Value::String(s)) => Some(format!("{name}=\"{s}\"")),
        AttrValue::Json(serde_json::Value::Bool(b)) => b.then(|| name.to_string()),
        AttrValue::Json(json) => Some(format!("{name}={{{json}}}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_attributes() {
        let attrs = Attributes::new();
        assert_eq!(
            serialize_custom_element("custom-element", &attrs, "test"),
            "<custom-element>\ntest\n</custom-element>"
        );
    }

    #[test]
    fn test_self_closing() {
        let attrs = Attributes::new();
        assert_eq!(serialize_custom_element("custom-element", &attrs, ""), "<custom-element />");
    }

    #[test]
    fn test_self_closing_keeps_attributes() {
        let attrs: Attributes = [("name", "value")].into_iter().collect();
        assert_eq!(
            serialize_custom_element("tool", &attrs, ""),
            "<tool name=\"value\" />"
        );
    }

    #[test]
    fn test_mixed_attributes_in_order() {
        let mut attrs = Attributes::new();
        attrs.insert("name", "test");
        attrs.insert("enabled", true);
        attrs.insert("hidden", false);
        attrs.insert("limits", json!({"max": 3}));
        attrs.insert("tags", json!(["a", "b"]));
        attrs.insert("missing", AttrValue::Json(json!(null)));
        assert_eq!(
            serialize_custom_element("custom-element", &attrs, "content"),
            "<custom-element name=\"test\" enabled limits={{\"max\":3}} tags={[\"a\",\"b\"]}>\ncontent\n</custom-element>"
        );
    }

    #[test]
    fn test_children_attribute_is_skipped() {
        let attrs: Attributes = [("children", "oops"), ("id", "x")].into_iter().collect();
        assert_eq!(serialize_custom_element("note", &attrs, "hi"), "<note id=\"x\">\nhi\n</note>");
    }

    #[test]
    fn test_numeric_attribute() {
        let attrs: Attributes = [("limit", 10i64)].into_iter().collect();
        assert_eq!(serialize_custom_element("tool", &attrs, ""), "<tool limit={10} />");
    }
}
