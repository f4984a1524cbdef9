//! Similarity ranking
//!
//! Picks the records closest to a name query. A record's score is the sum
//! of the edit distances of each queried field; every record tying for the
//! lowest score is kept, in book order.

use crate::book::Book;
use crate::record::Record;
use crate::utils::edit_distance;
use tracing::debug;

/// Command-line token standing for "any value" in a query position
pub const WILDCARD: &str = "-";

/// Name query. An absent field matches every record equally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
}

impl Query {
    pub fn new(last_name: Option<String>, first_name: Option<String>) -> Self {
        Self {
            last_name,
            first_name,
        }
    }

    /// Query matching every record
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a query from up to two positional terms (`LAST [FIRST]`),
    /// translating the wildcard token to an absent field.
    pub fn from_terms<S: AsRef<str>>(terms: &[S]) -> Self {
        let term = |index: usize| {
            terms
                .get(index)
                .map(AsRef::as_ref)
                .filter(|t| *t != WILDCARD)
                .map(str::to_string)
        };
        Self::new(term(0), term(1))
    }

    pub fn is_empty(&self) -> bool {
        self.last_name.is_none() && self.first_name.is_none()
    }

    /// Combined edit distance of `record` from this query
    pub fn score(&self, record: &Record) -> usize {
        let last = self
            .last_name
            .as_deref()
            .map_or(0, |q| edit_distance(q, &record.last_name));
        let first = self
            .first_name
            .as_deref()
            .map_or(0, |q| edit_distance(q, &record.first_name));
        last + first
    }
}

/// Records tying for the lowest score, cloned out of `book` in book order
pub fn closest(book: &Book, query: &Query) -> Vec<Record> {
    let mut best = usize::MAX;
    let mut matches: Vec<Record> = Vec::new();

    for record in book {
        let score = query.score(record);
        if score < best {
            best = score;
            matches.clear();
            matches.push(record.clone());
        } else if score == best {
            matches.push(record.clone());
        }
    }

    if !matches.is_empty() {
        debug!(
            "{} of {} records tie at distance {} for {:?}",
            matches.len(),
            book.size(),
            best,
            query
        );
    }
    matches
}
