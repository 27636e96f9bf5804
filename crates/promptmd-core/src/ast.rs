use std::fmt;
use std::sync::Arc;

use crate::error::BoxError;

/// A node of the input document tree.
#[derive(Debug, Clone, Default)]
pub enum Node {
    /// Nullish leaf. Renders to nothing.
    #[default]
    Null,
    /// Boolean leaf. Renders to nothing, whatever its value.
    Bool(bool),
    Text(String),
    /// Integer leaf, kept exact instead of widening to `f64`.
    Integer(i128),
    Number(f64),
    Element(Element),
    Component(Component),
    /// Transparent grouping; its children splice into the parent's sibling sequence.
    Fragment(Vec<Node>),
    /// Caller-supplied ordered list of nodes. Flattens exactly like a fragment.
    List(Vec<Node>),
}

impl Node {
    pub fn element(tag: impl Into<String>) -> Element {
        Element::new(tag)
    }

    pub fn fragment<I>(children: I) -> Node
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        Node::Fragment(children.into_iter().map(Into::into).collect())
    }

    /// A composite node whose expansion cannot fail.
    pub fn component<F>(name: impl Into<String>, render: F) -> Component
    where
        F: Fn(&Props) -> Node + Send + Sync + 'static,
    {
        Component::new(name, move |props: &Props| Ok(render(props)))
    }

    /// A composite node whose expansion may fail, aborting the conversion.
    pub fn try_component<F, E>(name: impl Into<String>, render: F) -> Component
    where
        F: Fn(&Props) -> Result<Node, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Component::new(name, move |props: &Props| render(props).map_err(Into::into))
    }

    /// Splits a node into a child list: sequences and fragments contribute
    /// their members, nullish leaves contribute nothing.
    pub(crate) fn into_children(self) -> Vec<Node> {
        match self {
            Node::Null => Vec::new(),
            Node::List(nodes) => nodes,
            other => vec![other],
        }
    }
}

/// A primitive element: tag name, ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    pub attributes: Attributes,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::default(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Replace the children with the members of `node` (see [`Node::into_children`]).
    pub fn content(mut self, node: impl Into<Node>) -> Self {
        self.children = node.into().into_children();
        self
    }
}

/// Render function of a composite node.
pub type RenderFn = dyn Fn(&Props) -> Result<Node, BoxError> + Send + Sync;

/// Attributes and children handed to a composite's render function.
#[derive(Debug, Clone, Default)]
pub struct Props {
    pub attributes: Attributes,
    pub children: Vec<Node>,
}

impl Props {
    /// The children as a single fragment node, ready to embed in an expansion.
    pub fn children_node(&self) -> Node {
        Node::Fragment(self.children.clone())
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.attributes.get_str(name)
    }
}

/// A composite node. Never appears in output; only its expansion does.
#[derive(Clone)]
pub struct Component {
    pub name: String,
    pub props: Props,
    render: Arc<RenderFn>,
}

impl Component {
    pub fn new<F>(name: impl Into<String>, render: F) -> Self
    where
        F: Fn(&Props) -> Result<Node, BoxError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            props: Props::default(),
            render: Arc::new(render),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.props.attributes.insert(name, value);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.props.children.push(child.into());
        self
    }

    pub fn content(mut self, node: impl Into<Node>) -> Self {
        self.props.children = node.into().into_children();
        self
    }

    /// Invoke the render function with this node's props.
    pub fn expand(&self) -> Result<Node, BoxError> {
        (self.render)(&self.props)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("name", &self.name)
            .field("props", &self.props)
            .finish_non_exhaustive()
    }
}

/// Elements compare by value; composites only by identity of their render function.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Null, Node::Null) => true,
            (Node::Bool(a), Node::Bool(b)) => a == b,
            (Node::Text(a), Node::Text(b)) => a == b,
            (Node::Integer(a), Node::Integer(b)) => a == b,
            (Node::Number(a), Node::Number(b)) => a == b,
            (Node::Element(a), Node::Element(b)) => a == b,
            (Node::Component(a), Node::Component(b)) => {
                a.name == b.name && Arc::ptr_eq(&a.render, &b.render)
            }
            (Node::Fragment(a), Node::Fragment(b)) | (Node::List(a), Node::List(b)) => a == b,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    String(String),
    Bool(bool),
    /// Any other JSON-serializable value.
    Json(serde_json::Value),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            AttrValue::Json(serde_json::Value::String(s)) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::String(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Json(value.into())
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Json(value.into())
    }
}

impl From<serde_json::Value> for AttrValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => AttrValue::String(s),
            serde_json::Value::Bool(b) => AttrValue::Bool(b),
            other => AttrValue::Json(other),
        }
    }
}

/// Insertion-ordered attribute map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attributes(Vec<(String, AttrValue)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name`. An existing entry keeps its position and takes the new value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// String value of `name`, or `None` when absent or not a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttrValue::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v))
    }

}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl From<&String> for Node {
    fn from(value: &String) -> Self {
        Node::Text(value.clone())
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

impl From<()> for Node {
    fn from(_: ()) -> Self {
        Node::Null
    }
}

macro_rules! integer_into_node {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::Integer(value as i128)
                }
            }
        )*
    };
}

integer_into_node!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<f32> for Node {
    fn from(value: f32) -> Self {
        Node::Number(value.into())
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Number(value)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or(Node::Null, Into::into)
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::List(value)
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Node::Element(value)
    }
}

impl From<Component> for Node {
    fn from(value: Component) -> Self {
        Node::Component(value)
    }
}

impl<T: Into<Node>> FromIterator<T> for Node {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Node::List(iter.into_iter().map(Into::into).collect())
    }
}

/// Build a [`Node::List`] from values of mixed node-convertible types.
#[macro_export]
macro_rules! nodes {
    ($($node:expr),* $(,)?) => {
        $crate::ast::Node::List(vec![$($crate::ast::Node::from($node)),*])
    };
}
