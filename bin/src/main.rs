//! readpace CLI - Reading-pace and completion-date estimates for a book catalog.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use readpace_lib::prelude::*;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use display::parse_date;

#[derive(Parser)]
#[command(name = "readpace")]
#[command(about = "Estimate when you will finish the books you are reading", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Session store directory. Defaults to the platform data directory.
    #[arg(long, global = true, env = "READPACE_STORE")]
    store: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate when a reading session will be finished
    Estimate {
        /// Session identifier
        session: SessionId,
    },

    /// Show the page records logged for a session
    Records {
        /// Session identifier
        session: SessionId,
    },

    /// Estimate every reading session of a book
    Book {
        /// Book identifier
        book: BookId,
    },

    /// List reading sessions
    Sessions {
        /// Only show sessions of this book
        #[arg(short, long)]
        book: Option<BookId>,
    },

    /// Start a new reading session for a book
    AddSession {
        /// Book identifier
        book: BookId,

        /// Last readable page of the book
        target_page: u32,

        /// Start date (YYYY-MM-DD). Defaults to today.
        #[arg(short, long, value_parser = parse_date)]
        start: Option<NaiveDate>,
    },

    /// Delete a reading session and its page records
    RemoveSession {
        /// Session identifier
        session: SessionId,
    },

    /// Log the cumulative pages read in a session
    AddPage {
        /// Session identifier
        session: SessionId,

        /// Cumulative pages read
        pages: u32,

        /// Date of the record (YYYY-MM-DD). Defaults to today.
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::WARN,
        (false, 1) => Level::INFO,
        (false, 2) => Level::DEBUG,
        (false, _) => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn open_store(path: Option<PathBuf>) -> Result<JsonStore> {
    let path = path.unwrap_or_else(JsonStore::default_path);
    JsonStore::new(path.clone())
        .with_context(|| format!("Failed to open session store at {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let store = open_store(cli.store)?;

    match command {
        Commands::Estimate { session } => commands::estimate::estimate(&store, session, cli.json),
        Commands::Records { session } => {
            commands::records::show_records(&store, session, cli.json)
        }
        Commands::Book { book } => commands::book::estimate_book(&store, book, cli.json),
        Commands::Sessions { book } => commands::sessions::list_sessions(&store, book, cli.json),
        Commands::AddSession {
            book,
            target_page,
            start,
        } => commands::add::add_session(&store, book, target_page, start, cli.json),
        Commands::RemoveSession { session } => {
            commands::remove::remove_session(&store, session, cli.json)
        }
        Commands::AddPage {
            session,
            pages,
            date,
        } => commands::add::add_page(&store, session, pages, date, cli.json),
    }
}
