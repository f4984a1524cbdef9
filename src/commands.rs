//! Command processing module
//!
//! List, add and remove operations over the record book file. Each call
//! loads the book fresh, normalizes it and writes it back.

use crate::book::Book;
use crate::codec::{self, ParsePolicy};
use crate::error::BookResult;
use crate::ranker::{self, Query};
use crate::record::Record;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Outcome of a remove command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveReport {
    /// Number of ID arguments given, parseable or not
    pub requested: usize,
    /// Arguments that were not integers
    pub bad_ids: Vec<String>,
    /// Records taken out of the book, in argument order
    pub removed: Vec<Record>,
}

/// Runs commands against one record book file
#[derive(Debug, Clone)]
pub struct CommandProcessor {
    book_path: PathBuf,
    policy: ParsePolicy,
}

impl CommandProcessor {
    pub fn new(book_path: PathBuf, policy: ParsePolicy) -> Self {
        Self { book_path, policy }
    }

    pub fn book_path(&self) -> &Path {
        &self.book_path
    }

    fn load_normalized(&self) -> BookResult<Book> {
        let mut book = codec::load(&self.book_path, self.policy)?;
        book.normalize();
        Ok(book)
    }

    /// List the records closest to `query`.
    ///
    /// The normalized book is written back first; a failure there is only
    /// logged, the listing still goes ahead. A book that does not exist yet is not created by listing it.
    pub fn list(&self, query: &Query) -> BookResult<Vec<Record>> {
        let book = self.load_normalized()?;
        if book.is_empty() && !self.book_path.exists() {
            debug!("Nothing to write back to {}", self.book_path.display());
        } else if let Err(e) = codec::save(&book, &self.book_path) {
            warn!("Could not write back the normalized book: {}", e);
        }
        Ok(ranker::closest(&book, query))
    }

    /// Add a new record and return it with its assigned ID
    pub fn add(&self, last_name: &str, first_name: &str, phone_number: &str) -> BookResult<Record> {
        let record = Record::unassigned(last_name, first_name, phone_number)?;
        let mut book = codec::load(&self.book_path, self.policy)?;
        book.add(record.clone())?;
        // IDs are handed out only after the new record is in place
        book.normalize();
        codec::save(&book, &self.book_path)?;

        let added = book
            .iter()
            .find(|r| {
                r.last_name == record.last_name
                    && r.first_name == record.first_name
                    && r.phone_number == record.phone_number
            })
            .cloned()
            .unwrap_or(record);
        info!("Added {}", added);
        Ok(added)
    }

    /// Remove records by ID.
    ///
    /// IDs refer to the normalized book, i.e. what the last listing showed.
    /// Unparseable IDs are skipped with a warning. The book is saved without
    /// renumbering, so gaps remain until the next listing.
    pub fn remove<S: AsRef<str>>(&self, ids: &[S]) -> BookResult<RemoveReport> {
        let mut report = RemoveReport {
            requested: ids.len(),
            ..RemoveReport::default()
        };
        if ids.is_empty() {
            return Ok(report);
        }

        let mut book = self.load_normalized()?;
        for raw in ids {
            let raw = raw.as_ref();
            match raw.trim().parse::<i64>() {
                Ok(id) => match book.remove_by_id(id) {
                    Some(record) => report.removed.push(record),
                    None => debug!("No record with ID {}", id),
                },
                Err(_) => {
                    warn!("Bad ID = '{}'. Ignored.", raw);
                    report.bad_ids.push(raw.to_string());
                }
            }
        }
        codec::save(&book, &self.book_path)?;

        info!(
            "Removed {} of {} requested records",
            report.removed.len(),
            report.requested
        );
        Ok(report)
    }
}
