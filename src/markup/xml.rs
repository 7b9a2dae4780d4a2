// roxmltree adapter.
//
// roxmltree keeps text (and CDATA, merged into text) as real child nodes, so
// XHTML comment bodies from RSS get the same exact interleaving as HTML pages.

use roxmltree::{Node, NodeType};

use super::{MarkupNode, NodeKind};

impl<'a, 'input> MarkupNode for Node<'a, 'input> {
    fn kind(&self) -> NodeKind {
        match self.node_type() {
            NodeType::Root | NodeType::Element => NodeKind::Element,
            NodeType::Text => NodeKind::Text,
            _ => NodeKind::Ignored,
        }
    }

    fn tag_name(&self) -> Option<String> {
        self.is_element().then(|| Node::tag_name(self).name().to_string())
    }

    fn attribute(&self, name: &str) -> Option<String> {
        Node::attribute(self, name).map(str::to_string)
    }

    fn children(&self) -> Vec<Self> {
        Node::children(self).collect()
    }

    fn text_content(&self) -> String {
        if self.is_text() {
            return self.text().unwrap_or_default().to_string();
        }
        self.descendants()
            .filter(|n| n.is_text())
            .filter_map(|n| n.text())
            .collect()
    }
}
