// Regression tests. Every bug found becomes a test case here.
// Never delete a test from this file.

use pretty_assertions::assert_eq;

/// Ordered lists render with dash bullets; numbering is not reproduced.
#[test]
fn ordered_list_keeps_dash_bullets() {
    let md = trac2markdown::convert_html("<ol><li>first</li><li>second</li></ol>");
    assert_eq!(md, "- first\n- second");
}

/// Newline-only text between block elements must not leave extra blank lines.
#[test]
fn newlines_between_blocks_collapse() {
    let md = trac2markdown::convert_html("<p>a</p>\n\n<p>b</p>\n<pre>c</pre>\n");
    assert_eq!(md, "a\n\nb\n\n```\nc\n```");
}

/// A link whose text sits next to an empty icon span keeps its text.
#[test]
fn link_with_icon_span() {
    let md = trac2markdown::convert_html(
        r#"<a class="ext-link" href="https://example.org/"><span class="icon"></span>example</a>"#,
    );
    assert_eq!(md, "[example](https://example.org/)");
}

/// Inline code keeps markup characters verbatim, even nested tags' text.
#[test]
fn inline_code_not_converted() {
    let md = trac2markdown::convert_html("<code>a <b>*b*</b></code>");
    assert_eq!(md, "`a *b*`");
}

/// Nested blockquotes get one `> ` per level on every line.
#[test]
fn nested_blockquote_prefixes() {
    let md = trac2markdown::convert_html(
        "<blockquote><blockquote><p>inner</p></blockquote><p>outer</p></blockquote>",
    );
    assert_eq!(md, "> > inner\n> \n> outer");
}

/// Wiki fences with a trailing carriage return still translate.
#[test]
fn wiki_fence_crlf() {
    let md = trac2markdown::translate_wiki_fences("{{{#!js\r\nx();\r\n}}}\r\n");
    assert_eq!(md, "```js\nx();\r\n```\n");
}

/// A `pre` whose class merely contains `wiki-code` without a language is unlabeled.
#[test]
fn pre_class_without_language() {
    let md = trac2markdown::convert_html(r#"<pre class="wiki">x</pre>"#);
    assert_eq!(md, "```\nx\n```");
}

/// XHTML that is not well-formed falls back to plain text instead of failing.
#[test]
fn xhtml_not_well_formed_after_decoding() {
    let md = trac2markdown::convert_xhtml("<p>a &amp;&amp; b</p>");
    assert_eq!(md, "a && b");
}

/// The tag-stripping fallback is normalized like converted output.
#[test]
fn xhtml_fallback_collapses_blank_lines() {
    let md = trac2markdown::convert_xhtml("\n<p>a</p>\n\n\n\n<p>b &amp;&amp; c</p>\n");
    assert_eq!(md, "a\n\nb && c");
}

/// Code blocks keep non-ASCII whitespace at their edges.
#[test]
fn pre_trims_ascii_whitespace_only() {
    let md = trac2markdown::convert_html("<pre>\u{a0}\u{a0}x = 1;\n</pre>");
    assert_eq!(md, "```\n\u{a0}\u{a0}x = 1;\n```");
}
