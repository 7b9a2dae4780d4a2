// Markup tree → Markdown conversion.
//
// One recursive converter over `MarkupNode`, shared by every backend. Entry
// points here parse a string with the matching backend and hand the tree to
// `handlers::all`.

pub(crate) mod handlers;
pub(crate) mod whitespace;

use crate::clean::strip_tags;
use crate::markup::{dom, MarkupNode, NodeKind};
use crate::Options;

/// Conversion state threaded through all handlers. Read-only.
pub(crate) struct State<'a> {
    /// Trac host used to absolutize root-relative links, without a trailing slash.
    pub trac_url: &'a str,
}

impl<'a> State<'a> {
    fn new(options: &'a Options) -> Self {
        Self {
            trac_url: options.trac_url.trim_end_matches('/'),
        }
    }

    /// Prefix root-relative hrefs with the Trac host.
    pub fn resolve(&self, href: &str) -> String {
        if href.starts_with('/') {
            format!("{}{}", self.trac_url, href)
        } else {
            href.to_string()
        }
    }
}

/// Convert the children of `node` to Markdown.
///
/// The node itself only acts as a container; its own tag adds no markup.
pub(crate) fn to_markdown<N: MarkupNode>(node: N, options: &Options) -> String {
    let state = State::new(options);
    match node.kind() {
        NodeKind::Text => whitespace::normalize_whitespace(&node.text_content()),
        NodeKind::Element => handlers::all(&state, &node),
        NodeKind::Ignored => String::new(),
    }
}

/// Parse an HTML string with html5ever and convert its `<body>`.
pub(crate) fn convert_html(html: &str, options: &Options) -> String {
    let dom = dom::parse_document(html);
    match dom::body(&dom) {
        Some(body) => to_markdown(body, options),
        None => String::new(),
    }
}

/// Decode entities in an XHTML fragment, parse it as XML and convert it.
///
/// Fragments that are not well-formed XML fall back to plain tag stripping.
pub(crate) fn convert_xhtml(fragment: &str, options: &Options) -> String {
    let decoded = html_escape::decode_html_entities(fragment);
    let html = decoded.trim();
    if html.is_empty() {
        return String::new();
    }

    let wrapped = format!("<root>{}</root>", html);
    match roxmltree::Document::parse(&wrapped) {
        Ok(doc) => to_markdown(doc.root_element(), options),
        Err(_err) => {
            crate::log_debug!(error = %_err, "XHTML fragment is not well-formed, stripping tags");
            whitespace::normalize_whitespace(&strip_tags(html))
        }
    }
}
