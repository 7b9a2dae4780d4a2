// Element handlers, one arm per supported tag.
//
// Output is built by direct string concatenation; each level normalizes its
// own whitespace before the parent embeds it.

use std::sync::LazyLock;

use regex::Regex;

use super::whitespace::normalize_whitespace;
use super::State;
use crate::markup::{MarkupNode, NodeKind};
use crate::wiki::fence_language;

static WIKI_CODE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bwiki-code-(\w+)\b").expect("WIKI_CODE_CLASS should compile")
});

/// Characters trimmed around `pre` contents. ASCII only, so a leading
/// non-breaking space stays part of the code.
const CODE_TRIM: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0b'];

static LINE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^").expect("LINE_START should compile"));

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Convert all children of a node and normalize the result.
pub(crate) fn all<N: MarkupNode>(state: &State, node: &N) -> String {
    let mut result = String::new();
    let mut has_elements = false;

    for child in node.children() {
        match child.kind() {
            NodeKind::Text => result.push_str(&child.text_content()),
            NodeKind::Element => {
                has_elements = true;
                result.push_str(&one(state, &child));
            }
            NodeKind::Ignored => {}
        }
    }

    // Flattened nodes never list their text, so a leaf contributes it here.
    if !node.exposes_text_nodes() && !has_elements {
        result.push_str(node.text_content().trim());
    }

    normalize_whitespace(&result)
}

/// Route an element to its handler based on tag name.
fn one<N: MarkupNode>(state: &State, node: &N) -> String {
    let tag = node.tag_name().unwrap_or_default().to_ascii_lowercase();
    match tag.as_str() {
        "br" => "\n".to_string(),
        "p" => format!("\n\n{}\n\n", inner_or_text(state, node)),
        "code" => format!("`{}`", node.text_content()),
        "pre" => pre(node),
        "a" => link(state, node),
        "strong" | "b" => format!("**{}**", inner_or_text(state, node)),
        "em" | "i" => format!("_{}_", inner_or_text(state, node)),
        // Ordered lists get dash bullets too.
        "ul" | "ol" => format!("\n{}\n", all(state, node)),
        "li" => format!("- {}\n", inner_or_text(state, node)),
        "blockquote" => blockquote(state, node),
        _ => inner_or_text(state, node),
    }
}

/// Converted children, or the element's own text when a flattened node
/// produced nothing.
fn inner_or_text<N: MarkupNode>(state: &State, node: &N) -> String {
    let inner = all(state, node);
    if inner.is_empty() && !node.exposes_text_nodes() {
        node.text_content()
    } else {
        inner
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn pre<N: MarkupNode>(node: &N) -> String {
    let lang = node
        .attribute("class")
        .and_then(|class| {
            WIKI_CODE_CLASS
                .captures(&class)
                .map(|caps| fence_language(&caps[1]).to_string())
        })
        .unwrap_or_default();
    format!("\n\n```{}\n{}\n```\n\n", lang, node.text_content().trim_matches(CODE_TRIM))
}

fn link<N: MarkupNode>(state: &State, node: &N) -> String {
    let href = state.resolve(&node.attribute("href").unwrap_or_default());
    let text = node.text_content().trim().to_string();
    if href.is_empty() || text.is_empty() {
        text
    } else {
        format!("[{}]({})", text, href)
    }
}

fn blockquote<N: MarkupNode>(state: &State, node: &N) -> String {
    let quoted = inner_or_text(state, node);
    format!("\n{}\n", LINE_START.replace_all(&quoted, "> "))
}
