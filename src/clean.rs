// Plain-text fallback for HTML snippets.
//
// No tree and no Markdown: entities are decoded, line breaks kept, every other
// tag dropped.

use std::sync::LazyLock;

use regex::Regex;

use crate::convert::whitespace::normalize_whitespace;

static BR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("BR_TAG should compile"));

/// Comments, then any tag-like run starting with a letter, `/`, `!` or `?`.
/// A tag left open at the end of the input is removed as well.
static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?(?:-->|$)|</?[A-Za-z!?][^>]*>?").expect("ANY_TAG should compile")
});

/// Decode entities, turn `<br>` into newlines, strip tags and tidy whitespace.
pub fn clean_html(html: &str) -> String {
    let decoded = html_escape::decode_html_entities(html);
    let text = BR_TAG.replace_all(&decoded, "\n");
    normalize_whitespace(&strip_tags(&text))
}

/// Remove all tags and comments, leaving text untouched.
pub fn strip_tags(html: &str) -> String {
    ANY_TAG.replace_all(html, "").into_owned()
}
