// Trac collaborators: fetching, feed and export parsing, document assembly.
//
// Everything here is I/O glue around the converter. Errors surface as
// `TracError`; the converter itself never fails.

pub mod client;
pub mod discussion;
pub mod render;
pub mod rss;
pub mod ticket;
pub mod timeline;

pub use client::TracClient;
pub use discussion::{comments_from_page, comments_from_rss, Comment};
pub use render::{render_discussion, render_ticket, render_timeline};
pub use rss::{Channel, Item};
pub use ticket::{parse_ticket_ref, TicketFields};
pub use timeline::{event_type, TimelineEntry, TimelineQuery};
