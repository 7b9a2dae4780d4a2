// Ticket comments, scraped from the ticket page or read from its RSS feed.

use std::sync::LazyLock;

use markup5ever_rcdom::Handle;
use regex::Regex;

use super::rss::Channel;
use crate::markup::dom::{self, has_class, is_element};
use crate::markup::MarkupNode;
use crate::{convert, Options};

static COMMENT_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#(comment:\d+|description)").expect("COMMENT_ANCHOR should compile")
});

/// One ticket comment, converted to Markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Display label such as `"3"` or `"comment:3"`.
    pub number: String,
    pub author: String,
    pub text: String,
}

/// Extract comments from a rendered ticket page.
///
/// Every `div.change` is a comment unless it holds a `.chat-bot` marker.
/// Changes without comment text are skipped.
pub fn comments_from_page(html: &str, options: &Options) -> Vec<Comment> {
    let dom = dom::parse_document(html);
    let changes = dom::select_all(&dom.document, |h| is_element(h, "div") && has_class(h, "change"));

    let mut comments = Vec::new();
    for change in changes {
        if dom::select_first(&change, |h| has_class(h, "chat-bot")).is_some() {
            crate::log_debug!("skipping chat-bot change");
            continue;
        }

        let number = trimmed_text(dom::select_first(&change, |h| has_class(h, "cnum")));
        let author = trimmed_text(
            dom::select_first(&change, |h| has_class(h, "username"))
                .and_then(|user| dom::select_first(&user, |h| has_class(h, "trac-author"))),
        );
        let text = dom::select_first(&change, |h| has_class(h, "comment"))
            .map(|comment| convert::to_markdown(comment, options))
            .unwrap_or_default();

        if !text.is_empty() {
            comments.push(Comment { number, author, text });
        }
    }
    comments
}

/// Extract comments from a ticket's RSS feed.
pub fn comments_from_rss(channel: &Channel, options: &Options) -> Vec<Comment> {
    channel
        .items
        .iter()
        .filter_map(|item| {
            let text = convert::convert_xhtml(&item.description, options);
            if text.trim().is_empty() {
                return None;
            }
            let number = COMMENT_ANCHOR
                .captures(&item.link)
                .map(|caps| caps[1].to_string())
                .unwrap_or_default();
            Some(Comment {
                number,
                author: item.creator.clone(),
                text,
            })
        })
        .collect()
}

fn trimmed_text(handle: Option<Handle>) -> String {
    handle
        .map(|h| h.text_content().trim().to_string())
        .unwrap_or_default()
}
