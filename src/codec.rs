//! Telephone book file format
//!
//! One record per line: `LAST FIRST NUMBER ID`, single-space separated.
//! Fields never contain whitespace, so no escaping is needed.

use crate::book::Book;
use crate::error::{BookError, BookResult};
use crate::record::Record;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// What to do with a line that is not a valid record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Log a warning and keep reading
    #[default]
    Skip,
    /// Abort the whole read
    Strict,
}

/// Parse one non-blank line into a record
pub fn parse_line(line: &str) -> Result<Record, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [last, first, number, id] = tokens.as_slice() else {
        return Err(format!("expected 4 fields, found {}", tokens.len()));
    };
    let id = id
        .parse::<i64>()
        .map_err(|e| format!("bad ID '{}': {}", id, e))?;
    Ok(Record::new(*last, *first, *number, id))
}

/// Read a book from `reader`. Blank lines are ignored.
///
/// Lines are decoded one at a time, so a line that is not UTF-8 is
/// handled by `policy` like any other malformed line.
pub fn read<R: BufRead>(mut reader: R, policy: ParsePolicy) -> BookResult<Book> {
    let mut book = Book::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let parsed = std::str::from_utf8(&buf)
            .map_err(|e| format!("not valid UTF-8: {}", e))
            .and_then(|line| {
                if line.trim().is_empty() {
                    Ok(None)
                } else {
                    parse_line(line).map(Some)
                }
            });

        match parsed {
            Ok(Some(record)) => book.add(record)?,
            Ok(None) => {}
            Err(reason) => match policy {
                ParsePolicy::Skip => {
                    warn!("Skipping malformed line {}: {}", line_no, reason);
                }
                ParsePolicy::Strict => {
                    return Err(BookError::Parse {
                        line: line_no,
                        reason,
                    });
                }
            },
        }
    }

    Ok(book)
}

/// Write every record of `book`, in book order
pub fn write<W: Write>(book: &Book, mut writer: W) -> BookResult<()> {
    for record in book {
        writeln!(
            writer,
            "{} {} {} {}",
            record.last_name, record.first_name, record.phone_number, record.id
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Load the book stored at `path`. A missing file is an empty book.
pub fn load(path: &Path, policy: ParsePolicy) -> BookResult<Book> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No record book at {}, starting empty", path.display());
            return Ok(Book::new());
        }
        Err(e) => return Err(BookError::file(path, e)),
    };

    let book = read(BufReader::new(file), policy).map_err(|e| match e {
        BookError::Io(source) => BookError::file(path, source),
        other => other,
    })?;
    debug!("Loaded {} records from {}", book.size(), path.display());
    Ok(book)
}

/// Overwrite the book at `path`.
///
/// The records go to a temporary file next to the real book, which then
/// replaces it, so a failed write leaves the previous contents in place.
/// A symlinked book is written through to its target and an existing
/// file keeps its permissions.
pub fn save(book: &Book, path: &Path) -> BookResult<()> {
    let target = match std::fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(BookError::file(path, e)),
    };
    let permissions = std::fs::metadata(&target).ok().map(|m| m.permissions());
    let tmp_path = temp_path(&target);

    let result = File::create(&tmp_path)
        .map_err(BookError::from)
        .and_then(|file| {
            if let Some(permissions) = permissions {
                file.set_permissions(permissions)?;
            }
            write(book, BufWriter::new(file))
        })
        .and_then(|()| std::fs::rename(&tmp_path, &target).map_err(BookError::from));

    if let Err(e) = result {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(match e {
            BookError::Io(source) => BookError::file(path, source),
            other => other,
        });
    }

    debug!("Saved {} records to {}", book.size(), target.display());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("telephone_book"));
    name.push(".tmp");
    path.with_file_name(name)
}
