// Trac wiki code fences → Markdown fences.
//
// Line-anchored regex passes; fence-like text that is indented or mid-line is
// left alone. Fences are not paired, each line is rewritten on its own.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static FENCE_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\{\{\{(?:#!(\w+))?\r?$").expect("FENCE_OPEN should compile")
});

static FENCE_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\}\}\}\r?$").expect("FENCE_CLOSE should compile"));

/// Language label to put after an opening fence.
pub(crate) fn fence_language(lang: &str) -> &str {
    match lang {
        "xml" => "html",
        other => other,
    }
}

/// Rewrite `{{{#!lang` / `}}}` lines as Markdown code fences.
pub fn translate_wiki_fences(text: &str) -> String {
    let opened = FENCE_OPEN.replace_all(text, |caps: &Captures| {
        let lang = caps.get(1).map_or("", |m| m.as_str());
        format!("```{}", fence_language(lang))
    });
    FENCE_CLOSE.replace_all(&opened, "```").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_fence_becomes_html() {
        assert_eq!(translate_wiki_fences("{{{#!xml\n<x/>\n}}}"), "```html\n<x/>\n```");
    }

    #[test]
    fn test_plain_fence() {
        assert_eq!(
            translate_wiki_fences("Before\n{{{\ncode\n}}}\nAfter"),
            "Before\n```\ncode\n```\nAfter"
        );
    }

    #[test]
    fn test_crlf_lines() {
        assert_eq!(
            translate_wiki_fences("{{{#!php\r\necho 1;\r\n}}}\r\n"),
            "```php\necho 1;\r\n```\n"
        );
    }

    #[test]
    fn test_indented_and_inline_fences_untouched() {
        let text = "  {{{#!php\ninline {{{x}}} here\n }}}\n{{{#!php trailing";
        assert_eq!(translate_wiki_fences(text), text);
    }

    #[test]
    fn test_unbalanced_fences_translated_independently() {
        assert_eq!(translate_wiki_fences("}}}\n}}}"), "```\n```");
    }

    #[test]
    fn test_no_fences() {
        assert_eq!(translate_wiki_fences("just text"), "just text");
        assert_eq!(translate_wiki_fences(""), "");
    }
}
