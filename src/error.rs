/// Errors raised while fetching or parsing Trac documents.
///
/// Conversion itself never fails; these come from the surrounding I/O.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TracError {
    #[error("Invalid ticket number: {0}")]
    InvalidTicket(String),

    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("daysback must be between 1 and 90")]
    InvalidDaysBack(String),

    #[error("Could not fetch {url} (HTTP {status})")]
    Http { status: u16, url: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Could not parse RSS: {0}")]
    Rss(#[from] roxmltree::Error),

    #[error("Invalid RSS: {0}")]
    RssShape(String),

    #[error("Invalid response: missing {0}")]
    InvalidResponse(&'static str),

    #[error("Malformed TSV data: {headers} headers but {values} values")]
    MalformedTsv { headers: usize, values: usize },
}
