// Document assemblers: headers, metadata fields and separators around the
// converted content.

use std::fmt::Write;

use super::discussion::Comment;
use super::ticket::TicketFields;
use super::timeline::{TimelineEntry, TimelineQuery};
use crate::wiki::translate_wiki_fences;

/// Ticket summary with its wiki description rendered as Markdown.
pub fn render_ticket(ticket: &TicketFields) -> String {
    let description = translate_wiki_fences(ticket.get("description"));
    let mut out = String::new();
    let _ = writeln!(out, "# Trac Ticket #{}", ticket.get("id"));
    out.push('\n');
    for (label, field) in [
        ("Component", "component"),
        ("Summary", "summary"),
        ("Type", "type"),
        ("Status", "status"),
        ("Milestone", "milestone"),
    ] {
        let _ = writeln!(out, "**{}:** {}", label, ticket.get(field));
    }
    out.push_str("\n## Description\n\n");
    let _ = writeln!(out, "{}", description);
    out.push('\n');
    let _ = writeln!(out, "**Keywords:** {}", ticket.get("keywords"));
    let _ = writeln!(out, "**Focuses:** {}", ticket.get("focuses"));
    out
}

/// Ticket discussion: one section per comment.
pub fn render_discussion(ticket: u32, comments: &[Comment]) -> String {
    let mut out = format!("# Trac Ticket #{} Discussion\n\n", ticket);
    if comments.is_empty() {
        out.push_str("_No comments found._\n");
        return out;
    }
    for comment in comments {
        let _ = write!(
            out,
            "## {} ({})\n\n{}\n\n",
            comment.author, comment.number, comment.text
        );
    }
    out
}

/// Timeline activity, newest first as delivered by the feed.
pub fn render_timeline(query: &TimelineQuery, entries: &[TimelineEntry]) -> String {
    if entries.is_empty() {
        return "No activity found for the specified period.\n".to_string();
    }

    let mut out = String::from("# WordPress Trac Timeline\n\n");
    let _ = writeln!(
        out,
        "**Period:** {} days ending {}",
        query.days_back,
        query.from.format("%Y-%m-%d")
    );
    let _ = writeln!(out, "**Authors:** {}", query.author_display());
    let _ = writeln!(out, "**Results:** {} items\n", entries.len());
    out.push_str("---\n\n");

    for (i, entry) in entries.iter().enumerate() {
        let _ = writeln!(out, "## [{}] {}\n", entry.kind, entry.title);
        let _ = writeln!(out, "**Author:** {} | **Date:** {}", entry.author, entry.date);
        let _ = writeln!(out, "**Link:** {}\n", entry.link);
        if !entry.description.is_empty() {
            let _ = writeln!(out, "{}\n", entry.description);
        }
        if i + 1 < entries.len() {
            out.push_str("---\n\n");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_ticket() {
        let tsv = "id\tsummary\tcomponent\ttype\tstatus\tmilestone\tkeywords\tfocuses\tdescription\n\
                   5\tBroken\tGeneral\tdefect (bug)\tnew\t6.8\thas-patch\tdocs\t\"Try:\n{{{#!php\necho 1;\n}}}\"\n";
        let ticket = TicketFields::from_tsv(tsv).unwrap();
        assert_eq!(
            render_ticket(&ticket),
            "# Trac Ticket #5\n\n\
             **Component:** General\n\
             **Summary:** Broken\n\
             **Type:** defect (bug)\n\
             **Status:** new\n\
             **Milestone:** 6.8\n\n\
             ## Description\n\n\
             Try:\n```php\necho 1;\n```\n\n\
             **Keywords:** has-patch\n\
             **Focuses:** docs\n"
        );
    }

    #[test]
    fn test_render_discussion() {
        let comments = vec![Comment {
            number: "comment:2".into(),
            author: "bob".into(),
            text: "LGTM".into(),
        }];
        assert_eq!(
            render_discussion(9, &comments),
            "# Trac Ticket #9 Discussion\n\n## bob (comment:2)\n\nLGTM\n\n"
        );
        assert_eq!(
            render_discussion(9, &[]),
            "# Trac Ticket #9 Discussion\n\n_No comments found._\n"
        );
    }

    #[test]
    fn test_render_timeline() {
        let query = TimelineQuery::new(Some("2025-01-07"), Some("7"), vec![]).unwrap();
        let entries = vec![
            TimelineEntry {
                kind: "Changeset".into(),
                title: "Changeset 1".into(),
                author: "alice".into(),
                date: "2025-01-07 09:20".into(),
                link: "https://core.trac.wordpress.org/changeset/1".into(),
                description: "Fix it.".into(),
            },
            TimelineEntry {
                kind: "Ticket Closed".into(),
                title: "Ticket #2 closed".into(),
                author: "bob".into(),
                date: "2025-01-06 08:00".into(),
                link: "https://core.trac.wordpress.org/ticket/2".into(),
                description: String::new(),
            },
        ];
        assert_eq!(
            render_timeline(&query, &entries),
            "# WordPress Trac Timeline\n\n\
             **Period:** 7 days ending 2025-01-07\n\
             **Authors:** all authors\n\
             **Results:** 2 items\n\n\
             ---\n\n\
             ## [Changeset] Changeset 1\n\n\
             **Author:** alice | **Date:** 2025-01-07 09:20\n\
             **Link:** https://core.trac.wordpress.org/changeset/1\n\n\
             Fix it.\n\n\
             ---\n\n\
             ## [Ticket Closed] Ticket #2 closed\n\n\
             **Author:** bob | **Date:** 2025-01-06 08:00\n\
             **Link:** https://core.trac.wordpress.org/ticket/2\n\n"
        );
    }

    #[test]
    fn test_render_timeline_empty() {
        let query = TimelineQuery::new(Some("2025-01-07"), None, vec![]).unwrap();
        assert_eq!(
            render_timeline(&query, &[]),
            "No activity found for the specified period.\n"
        );
    }
}
