//! Telbook - personal telephone book
//!
//! Lists, fuzzy-searches, adds and removes contacts kept in
//! `~/.telephone_book`.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use telbook::commands::CommandProcessor;
use telbook::config::Config;
use telbook::error::BookError;
use telbook::ranker::Query;
use telbook::table;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Use '-' as LAST to match by first name only."
)]
struct Args {
    /// Add one new book entry
    #[arg(
        short,
        long,
        num_args = 3,
        value_names = ["LAST", "FIRST", "NUMBER"],
        conflicts_with_all = ["remove", "last", "first"]
    )]
    add: Option<Vec<String>>,

    /// Remove book entries by their IDs
    #[arg(
        short,
        long,
        num_args = 0..,
        value_name = "ID",
        allow_negative_numbers = true,
        conflicts_with_all = ["last", "first"]
    )]
    remove: Option<Vec<String>>,

    /// Record book file (defaults to ~/.telephone_book)
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Last name to match, or '-' for any
    last: Option<String>,

    /// First name to match
    first: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Setup logging; stdout is reserved for listings
    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::load();
    let book_path = config
        .book_path(args.file.as_deref())
        .context("Cannot locate the record book file")?;
    let processor = CommandProcessor::new(book_path, config.parse_policy());

    if let Some(fields) = args.add {
        let [last, first, number] = fields.as_slice() else {
            return Err(BookError::BadArgument("--add expects LAST FIRST NUMBER".into()).into());
        };
        let added = processor
            .add(last, first, number)
            .context("Cannot add the new entry to the record book")?;
        tracing::debug!("New entry has ID {}", added.id);
        return Ok(());
    }

    if let Some(ids) = args.remove {
        return remove(&processor, &ids);
    }

    let terms: Vec<String> = args.last.into_iter().chain(args.first).collect();
    let records = processor
        .list(&Query::from_terms(&terms))
        .context("Cannot list the record book")?;
    print!("{}", table::render(&records, config.records_per_block));
    Ok(())
}

fn remove(processor: &CommandProcessor, ids: &[String]) -> Result<()> {
    if ids.is_empty() {
        println!("[WARNING] No record IDs given. Nothing to remove.");
        return Ok(());
    }

    let report = processor
        .remove(ids)
        .context("Cannot update the record book")?;
    println!(
        "[INFO] Number of records to remove: {}, removed: {}.",
        report.requested,
        report.removed.len()
    );

    if report.removed.is_empty() {
        println!("[INFO] Nothing to remove.");
    } else {
        println!("[INFO] List of removed entries:");
        print!("{}", table::render_plain(&report.removed));
    }
    Ok(())
}
