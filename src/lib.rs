//! Telbook Library
//!
//! Record store, file codec and fuzzy name ranking for the
//! telephone book command-line tool.

pub mod book;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod ranker;
pub mod record;
pub mod table;
pub mod utils;

pub use book::Book;
pub use error::{BookError, BookResult};
pub use ranker::Query;
pub use record::Record;
