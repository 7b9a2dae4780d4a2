// html5ever adapter.
//
// Parses HTML into a markup5ever_rcdom tree and exposes `Handle` as a
// `MarkupNode`. Also carries the small class-based query helpers the ticket
// page scraper needs.

use html5ever::parse_document as parse_html5;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use super::{MarkupNode, NodeKind};

/// Parse an HTML string into an html5ever RcDom.
pub fn parse_document(html: &str) -> RcDom {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    };
    parse_html5(RcDom::default(), opts)
        .from_utf8()
        .one(html.as_bytes())
}

/// The `<body>` element of a parsed document.
pub fn body(dom: &RcDom) -> Option<Handle> {
    select_first(&dom.document, |h| is_element(h, "body"))
}

/// All descendants of `handle` matching `pred`, in document order.
pub fn select_all<F>(handle: &Handle, pred: F) -> Vec<Handle>
where
    F: Fn(&Handle) -> bool,
{
    let mut found = Vec::new();
    collect(handle, &pred, &mut found, false);
    found
}

/// The first descendant of `handle` matching `pred`.
pub fn select_first<F>(handle: &Handle, pred: F) -> Option<Handle>
where
    F: Fn(&Handle) -> bool,
{
    let mut found = Vec::new();
    collect(handle, &pred, &mut found, true);
    found.pop()
}

fn collect<F>(handle: &Handle, pred: &F, found: &mut Vec<Handle>, first_only: bool) -> bool
where
    F: Fn(&Handle) -> bool,
{
    for child in handle.children.borrow().iter() {
        if pred(child) {
            found.push(child.clone());
            if first_only {
                return true;
            }
        }
        if collect(child, pred, found, first_only) {
            return true;
        }
    }
    false
}

/// Whether the element's `class` attribute lists `class`.
pub fn has_class(handle: &Handle, class: &str) -> bool {
    get_attr(handle, "class")
        .is_some_and(|value| value.split_ascii_whitespace().any(|c| c == class))
}

/// Whether the node is an element with the given (lowercase) tag name.
pub fn is_element(handle: &Handle, tag: &str) -> bool {
    matches!(handle.data, NodeData::Element { ref name, .. } if name.local.as_ref() == tag)
}

/// Get the value of an attribute on an element node.
pub(crate) fn get_attr(handle: &Handle, name: &str) -> Option<String> {
    if let NodeData::Element { ref attrs, .. } = handle.data {
        for attr in attrs.borrow().iter() {
            if attr.name.local.as_ref() == name {
                return Some(attr.value.to_string());
            }
        }
    }
    None
}

fn push_text(handle: &Handle, out: &mut String) {
    match handle.data {
        NodeData::Text { ref contents } => out.push_str(&contents.borrow()),
        NodeData::Element { .. } | NodeData::Document => {
            for child in handle.children.borrow().iter() {
                push_text(child, out);
            }
        }
        _ => {}
    }
}

impl MarkupNode for Handle {
    fn kind(&self) -> NodeKind {
        match self.data {
            NodeData::Element { .. } | NodeData::Document => NodeKind::Element,
            NodeData::Text { .. } => NodeKind::Text,
            _ => NodeKind::Ignored,
        }
    }

    fn tag_name(&self) -> Option<String> {
        if let NodeData::Element { ref name, .. } = self.data {
            Some(name.local.as_ref().to_string())
        } else {
            None
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        get_attr(self, name)
    }

    fn children(&self) -> Vec<Self> {
        self.children.borrow().clone()
    }

    fn text_content(&self) -> String {
        let mut out = String::new();
        push_text(self, &mut out);
        out
    }
}
