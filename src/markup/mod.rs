// Node abstraction shared by every input tree.
//
// The converter only ever sees a `MarkupNode`. Each parser backend gets a thin
// adapter that exposes its tree through this trait:
//   - dom:  html5ever / markup5ever_rcdom (ticket pages)
//   - xml:  roxmltree (RSS-embedded XHTML)
//   - tree: owned nodes built by hand, including the flattened shape

pub mod dom;
pub mod tree;
pub mod xml;

/// What a node contributes to conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// An element (or a tag-less container such as a document root).
    Element,
    /// Character data, emitted verbatim.
    Text,
    /// Comments, doctypes, processing instructions.
    Ignored,
}

/// Read-only view of one node in a parsed markup tree.
pub trait MarkupNode: Sized {
    fn kind(&self) -> NodeKind;

    /// Tag name as the backend reports it. `None` for text and container roots.
    fn tag_name(&self) -> Option<String>;

    /// Case-sensitive attribute lookup. Missing attributes are `None`.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Children in document order.
    fn children(&self) -> Vec<Self>;

    /// Concatenated text of all descendants.
    fn text_content(&self) -> String;

    /// Whether loose text appears as `Text` children.
    ///
    /// Nodes that return `false` only list their element children; their text
    /// is available solely through `text_content`, so interleaving of text and
    /// inline elements cannot be reproduced exactly.
    fn exposes_text_nodes(&self) -> bool {
        true
    }
}
