// Whitespace normalization applied to every converted subtree.

use std::sync::LazyLock;

use regex::Regex;

static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("BLANK_RUNS should compile"));

/// Characters trimmed from both ends of converted output.
const TRIM: [char; 5] = [' ', '\t', '\n', '\r', '\x0c'];

/// Trim surrounding whitespace and collapse runs of 3+ newlines to one blank line.
///
/// Idempotent: running it on its own output changes nothing.
pub fn normalize_whitespace(text: &str) -> String {
    collapse_blank_lines(text.trim_matches(TRIM))
}

/// Collapse runs of 3+ newlines to exactly two, without trimming.
fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUNS.replace_all(text, "\n\n").into_owned()
}
