// Timeline window and feed entries.

use std::sync::LazyLock;

use chrono::{DateTime, Local, NaiveDate, Utc};
use regex::Regex;
use url::Url;

use super::rss::Item;
use crate::clean::clean_html;
use crate::error::TracError;

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("ISO_DATE should compile"));

pub const DEFAULT_DAYS_BACK: u32 = 30;
pub const MAX_DAYS_BACK: u32 = 90;

/// A window of timeline activity, optionally filtered by author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineQuery {
    /// Last day of the window.
    pub from: NaiveDate,
    pub days_back: u32,
    pub authors: Vec<String>,
}

impl TimelineQuery {
    /// Validate raw arguments. `from` defaults to today, `days_back` to 30.
    pub fn new(
        from: Option<&str>,
        days_back: Option<&str>,
        authors: Vec<String>,
    ) -> Result<Self, TracError> {
        let from = match from {
            Some(raw) => parse_date(raw)?,
            None => Local::now().date_naive(),
        };
        let days_back = match days_back {
            Some(raw) => parse_days_back(raw)?,
            None => DEFAULT_DAYS_BACK,
        };
        Ok(Self { from, days_back, authors })
    }

    /// Authors joined for display, or `"all authors"`.
    pub fn author_display(&self) -> String {
        if self.authors.is_empty() {
            "all authors".to_string()
        } else {
            self.authors.join(" ")
        }
    }

    /// The RSS timeline URL for this window under `base`.
    pub fn url(&self, base: &Url) -> Result<Url, TracError> {
        let mut url = base.join("timeline")?;
        url.query_pairs_mut()
            .append_pair("from", &self.from.format("%Y-%m-%d").to_string())
            .append_pair("daysback", &self.days_back.to_string())
            .append_pair("authors", &self.authors.join(" "))
            .append_pair("ticket", "on")
            .append_pair("ticket_details", "on")
            .append_pair("repo-", "on")
            .append_pair("format", "rss");
        Ok(url)
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, TracError> {
    if !ISO_DATE.is_match(raw) {
        return Err(TracError::InvalidDate(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| TracError::InvalidDate(raw.to_string()))
}

fn parse_days_back(raw: &str) -> Result<u32, TracError> {
    let invalid = || TracError::InvalidDaysBack(raw.to_string());
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match raw.parse::<u32>() {
        Ok(n) if (1..=MAX_DAYS_BACK).contains(&n) => Ok(n),
        _ => Err(invalid()),
    }
}

/// Human-readable label for an RSS `<category>`.
pub fn event_type(category: &str) -> String {
    match category {
        "changeset" => "Changeset".to_string(),
        "newticket" => "Ticket Created".to_string(),
        "editedticket" => "Ticket Updated".to_string(),
        "closedticket" => "Ticket Closed".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// One timeline event ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub kind: String,
    pub title: String,
    pub author: String,
    /// `YYYY-MM-DD HH:MM` in UTC, or the raw `pubDate` if it did not parse.
    pub date: String,
    pub link: String,
    /// Plain-text description; empty when it only repeats the title.
    pub description: String,
}

impl TimelineEntry {
    pub fn from_item(item: &Item) -> Self {
        let title = item.title.trim().to_string();
        let description = clean_html(&item.description);
        let description = if description == title {
            String::new()
        } else {
            description
        };
        Self {
            kind: event_type(&item.category),
            title,
            author: item.creator.clone(),
            date: format_pub_date(&item.pub_date),
            link: item.link.clone(),
            description,
        }
    }
}

fn format_pub_date(raw: &str) -> String {
    match DateTime::parse_from_rfc2822(raw.trim()) {
        Ok(date) => date.with_timezone(&Utc).format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}
