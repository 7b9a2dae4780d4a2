// trac2markdown: WordPress Trac tickets, discussions and timelines as Markdown.
//
// Architecture:
//   HTML string  → html5ever → rcdom   ─┐
//   XHTML string → roxmltree           ─┼→ MarkupNode → convert → Markdown
//   hand-built   → markup::tree        ─┘
//
//   Ticket description (Trac wiki)  → wiki::translate_wiki_fences → Markdown
//   Timeline description (HTML)     → clean::clean_html            → plain text
//
// The `trac` module holds the surrounding I/O: HTTP fetch, TSV/RSS parsing and
// the document assemblers.

/// Debug event, compiled out unless the `tracing` feature is on.
macro_rules! log_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}
pub(crate) use log_debug;

mod clean;
mod convert;
mod error;
pub mod markup;
pub mod trac;
mod wiki;

pub use clean::{clean_html, strip_tags};
pub use convert::whitespace::normalize_whitespace;
pub use error::TracError;
pub use markup::{MarkupNode, NodeKind};
pub use wiki::translate_wiki_fences;

/// Host of the WordPress core Trac.
pub const DEFAULT_TRAC_URL: &str = "https://core.trac.wordpress.org";

/// Conversion and client options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Trac root used for root-relative links and for requests.
    /// Default: `"https://core.trac.wordpress.org"`.
    pub trac_url: String,
    /// HTTP request timeout in seconds. Default: 30.
    pub timeout_secs: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            trac_url: DEFAULT_TRAC_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Options {
    /// Create a new Options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Trac root.
    pub fn with_trac_url(mut self, url: impl Into<String>) -> Self {
        self.trac_url = url.into();
        self
    }

    /// Set the HTTP request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Convert the children of any markup node to Markdown.
///
/// # Examples
///
/// ```
/// use trac2markdown::markup::tree::{Element, Node};
/// use trac2markdown::{to_markdown, Options};
///
/// let p: Node = Element::new("p")
///     .with_text("a ")
///     .with_child(Element::new("strong").with_text("b"))
///     .into();
/// assert_eq!(to_markdown(&p, &Options::default()), "a **b**");
/// ```
pub fn to_markdown<N: MarkupNode>(node: N, options: &Options) -> String {
    convert::to_markdown(node, options)
}

/// Convert an HTML string to Markdown.
///
/// # Examples
///
/// ```
/// let md = trac2markdown::convert_html("<p>See <a href=\"/ticket/5\">#5</a></p>");
/// assert_eq!(md, "See [#5](https://core.trac.wordpress.org/ticket/5)");
/// ```
pub fn convert_html(html: &str) -> String {
    convert_html_with(html, &Options::default())
}

/// Convert an HTML string to Markdown with custom options.
pub fn convert_html_with(html: &str, options: &Options) -> String {
    convert::convert_html(html, options)
}

/// Convert an entity-encoded XHTML fragment (as carried in RSS) to Markdown.
///
/// Fragments that are not well-formed XML are reduced to their text.
pub fn convert_xhtml(fragment: &str) -> String {
    convert_xhtml_with(fragment, &Options::default())
}

/// Convert an XHTML fragment to Markdown with custom options.
pub fn convert_xhtml_with(fragment: &str, options: &Options) -> String {
    convert::convert_xhtml(fragment, options)
}
