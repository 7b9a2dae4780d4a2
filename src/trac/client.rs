// Blocking HTTP client for the Trac endpoints.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use super::timeline::TimelineQuery;
use crate::error::TracError;
use crate::Options;

const USER_AGENT: &str = concat!("trac2md/", env!("CARGO_PKG_VERSION"));

/// Fetches raw ticket and timeline documents. Bodies are fully buffered.
#[derive(Debug, Clone)]
pub struct TracClient {
    http: Client,
    base: Url,
}

impl TracClient {
    pub fn new(options: &Options) -> Result<Self, TracError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(options.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base: base_url(&options.trac_url)?,
        })
    }

    /// GET `url` and return the body. Non-2xx statuses are errors.
    pub fn fetch(&self, url: &Url) -> Result<String, TracError> {
        crate::log_debug!(%url, "fetching");
        let response = self.http.get(url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(TracError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.text()?;
        crate::log_debug!(bytes = body.len(), "fetched");
        Ok(body)
    }

    /// The ticket's `?format=tab` export.
    pub fn ticket_tsv(&self, ticket: u32) -> Result<String, TracError> {
        self.fetch(&self.ticket_url(ticket, Some("tab"))?)
    }

    /// The rendered ticket page.
    pub fn ticket_page(&self, ticket: u32) -> Result<String, TracError> {
        self.fetch(&self.ticket_url(ticket, None)?)
    }

    /// The ticket's comment feed.
    pub fn ticket_rss(&self, ticket: u32) -> Result<String, TracError> {
        self.fetch(&self.ticket_url(ticket, Some("rss"))?)
    }

    /// The timeline feed for a window.
    pub fn timeline_rss(&self, query: &TimelineQuery) -> Result<String, TracError> {
        self.fetch(&query.url(&self.base)?)
    }

    fn ticket_url(&self, ticket: u32, format: Option<&str>) -> Result<Url, TracError> {
        let mut url = self.base.join(&format!("ticket/{}", ticket))?;
        if let Some(format) = format {
            url.query_pairs_mut().append_pair("format", format);
        }
        Ok(url)
    }
}

/// Parse the Trac root, making sure relative joins stay beneath it.
fn base_url(raw: &str) -> Result<Url, TracError> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
