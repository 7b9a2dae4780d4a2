// RSS 2.0 channel reader for Trac's `?format=rss` feeds.

use roxmltree::{Document, Node};

use crate::error::TracError;

const DC_NS: &str = "http://purl.org/dc/elements/1.1/";

/// One `<item>` of a feed. Missing elements are empty strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Item {
    pub title: String,
    pub link: String,
    pub pub_date: String,
    /// `dc:creator`.
    pub creator: String,
    /// Escaped HTML as carried by the feed (XML-unescaped once).
    pub description: String,
    pub category: String,
}

/// The items of an RSS channel, in feed order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Channel {
    pub items: Vec<Item>,
}

impl Channel {
    pub fn parse(xml: &str) -> Result<Self, TracError> {
        let doc = Document::parse(xml)?;
        let root = doc.root_element();
        if !root.has_tag_name("rss") {
            return Err(TracError::RssShape(format!(
                "root element is <{}>, expected <rss>",
                root.tag_name().name()
            )));
        }

        let items = root
            .children()
            .filter(|n| n.has_tag_name("channel"))
            .flat_map(|channel| channel.children().filter(|n| n.has_tag_name("item")))
            .map(parse_item)
            .collect();

        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn parse_item(item: Node) -> Item {
    Item {
        title: child_text(item, |n| n.has_tag_name("title")),
        link: child_text(item, |n| n.has_tag_name("link")),
        pub_date: child_text(item, |n| n.has_tag_name("pubDate")),
        creator: child_text(item, |n| n.has_tag_name((DC_NS, "creator"))),
        description: child_text(item, |n| n.has_tag_name("description")),
        category: child_text(item, |n| n.has_tag_name("category")),
    }
}

/// Text of the first child element matching `pred`, CDATA included.
fn child_text<F>(parent: Node, pred: F) -> String
where
    F: Fn(&Node) -> bool,
{
    parent
        .children()
        .find(|n| n.is_element() && pred(n))
        .map(|n| {
            n.descendants()
                .filter(|d| d.is_text())
                .filter_map(|d| d.text())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0"?>
<rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel>
    <title>Ticket #1</title>
    <item>
      <dc:creator>alice</dc:creator>
      <title>Comment 1</title>
      <link>https://core.trac.wordpress.org/ticket/1#comment:1</link>
      <pubDate>Tue, 07 Jan 2025 10:20:30 GMT</pubDate>
      <description>&lt;p&gt;Hello&lt;/p&gt;</description>
      <category>ticket</category>
    </item>
    <item>
      <title><![CDATA[Second]]></title>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parse_items() {
        let channel = Channel::parse(FEED).unwrap();
        assert_eq!(channel.len(), 2);
        let first = &channel.items[0];
        assert_eq!(first.creator, "alice");
        assert_eq!(first.link, "https://core.trac.wordpress.org/ticket/1#comment:1");
        assert_eq!(first.pub_date, "Tue, 07 Jan 2025 10:20:30 GMT");
        assert_eq!(first.description, "<p>Hello</p>");
        assert_eq!(first.category, "ticket");
        assert_eq!(channel.items[1].title, "Second");
        assert_eq!(channel.items[1].creator, "");
    }

    #[test]
    fn test_malformed_xml() {
        assert!(matches!(Channel::parse("<rss><channel>"), Err(TracError::Rss(_))));
    }

    #[test]
    fn test_wrong_root() {
        assert!(matches!(Channel::parse("<feed/>"), Err(TracError::RssShape(_))));
    }

    #[test]
    fn test_empty_channel() {
        let channel = Channel::parse("<rss><channel><title>x</title></channel></rss>").unwrap();
        assert!(channel.is_empty());
    }
}
