use std::process::ExitCode;

use clap::{Parser, Subcommand};
use trac2markdown::trac::{
    comments_from_page, comments_from_rss, parse_ticket_ref, render_discussion, render_ticket,
    render_timeline, Channel, TicketFields, TimelineEntry, TimelineQuery, TracClient,
};
use trac2markdown::{Options, TracError, DEFAULT_TRAC_URL};

/// Fetch WordPress Trac data and print it as Markdown.
#[derive(Debug, Parser)]
#[command(name = "trac2md", version)]
struct Cli {
    /// Trac root URL.
    #[arg(long, global = true, default_value = DEFAULT_TRAC_URL)]
    trac_url: String,

    /// HTTP timeout in seconds.
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Ticket summary and description (or its comments with --discussion).
    Ticket {
        /// Ticket number, `#123`, or ticket URL.
        ticket: String,
        /// Print the comment feed instead of the ticket summary.
        #[arg(long)]
        discussion: bool,
    },
    /// Comments scraped from the rendered ticket page.
    Discussion {
        /// Ticket number, `#123`, or ticket URL.
        ticket: String,
    },
    /// Recent timeline activity.
    Timeline {
        /// End date for the timeline (YYYY-MM-DD, default: today).
        #[arg(long)]
        from: Option<String>,
        /// Number of days to look back (1-90, default: 30).
        #[arg(long)]
        daysback: Option<String>,
        /// Filter by author (repeat for multiple).
        #[arg(long = "author")]
        authors: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(markdown) => {
            print!("{markdown}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, TracError> {
    let options = Options::new()
        .with_trac_url(cli.trac_url)
        .with_timeout_secs(cli.timeout);
    let client = TracClient::new(&options)?;

    match cli.command {
        Command::Ticket { ticket, discussion: false } => {
            let number = parse_ticket_ref(&ticket)?;
            let fields = TicketFields::from_tsv(&client.ticket_tsv(number)?)?;
            Ok(render_ticket(&fields))
        }
        Command::Ticket { ticket, discussion: true } => {
            let number = parse_ticket_ref(&ticket)?;
            let channel = Channel::parse(&client.ticket_rss(number)?)?;
            Ok(render_discussion(number, &comments_from_rss(&channel, &options)))
        }
        Command::Discussion { ticket } => {
            let number = parse_ticket_ref(&ticket)?;
            let page = client.ticket_page(number)?;
            Ok(render_discussion(number, &comments_from_page(&page, &options)))
        }
        Command::Timeline { from, daysback, authors } => {
            let query = TimelineQuery::new(from.as_deref(), daysback.as_deref(), authors)?;
            let channel = Channel::parse(&client.timeline_rss(&query)?)?;
            let entries: Vec<TimelineEntry> =
                channel.items.iter().map(TimelineEntry::from_item).collect();
            Ok(render_timeline(&query, &entries))
        }
    }
}
