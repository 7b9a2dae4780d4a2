// Owned markup tree.
//
// Used to build input by hand and to model backends that only report an
// element's named children plus its flattened text.

use std::collections::BTreeMap;

use super::{MarkupNode, NodeKind};

/// A node in an owned markup tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Element(Element),
}

/// An element with ordered children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<Node>,
    /// Flattened own text. When set, `children` holds only elements and loose
    /// text is not available as separate nodes.
    pub flattened_text: Option<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// An element in the flattened shape: element children only, plus text.
    pub fn flattened(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            flattened_text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::Text(text.into()))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

fn push_text(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(text),
        Node::Element(el) => match &el.flattened_text {
            Some(text) => out.push_str(text),
            None => el.children.iter().for_each(|c| push_text(c, out)),
        },
    }
}

impl<'a> MarkupNode for &'a Node {
    fn kind(&self) -> NodeKind {
        match *self {
            Node::Text(_) => NodeKind::Text,
            Node::Element(_) => NodeKind::Element,
        }
    }

    fn tag_name(&self) -> Option<String> {
        match *self {
            Node::Element(el) if !el.tag.is_empty() => Some(el.tag.clone()),
            _ => None,
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        match *self {
            Node::Element(el) => el.attributes.get(name).cloned(),
            Node::Text(_) => None,
        }
    }

    fn children(&self) -> Vec<Self> {
        match *self {
            Node::Element(el) => el.children.iter().collect(),
            Node::Text(_) => Vec::new(),
        }
    }

    fn text_content(&self) -> String {
        let mut out = String::new();
        push_text(self, &mut out);
        out
    }

    fn exposes_text_nodes(&self) -> bool {
        !matches!(self, Node::Element(el) if el.flattened_text.is_some())
    }
}
