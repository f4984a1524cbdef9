//! Table rendering for listings
//!
//! Column widths fit the longest value (or title) of each column.

use crate::record::Record;
use std::fmt::Write;

const TITLE_LAST_NAME: &str = "Last name";
const TITLE_FIRST_NAME: &str = "First name";
const TITLE_PHONE_NUMBER: &str = "Telephone number";
const TITLE_ID: &str = "ID";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Widths {
    last: usize,
    first: usize,
    number: usize,
    id: usize,
}

impl Widths {
    fn fit(mut self, records: &[Record]) -> Self {
        for r in records {
            self.last = self.last.max(r.last_name.chars().count());
            self.first = self.first.max(r.first_name.chars().count());
            self.number = self.number.max(r.phone_number.chars().count());
            self.id = self.id.max(r.id.to_string().len());
        }
        self
    }

    fn titles() -> Self {
        Self {
            last: TITLE_LAST_NAME.len(),
            first: TITLE_FIRST_NAME.len(),
            number: TITLE_PHONE_NUMBER.len(),
            id: TITLE_ID.len(),
        }
    }

    fn separator(&self) -> String {
        format!(
            "{}+{}+{}+{}",
            "-".repeat(self.last + 1),
            "-".repeat(self.first + 2),
            "-".repeat(self.number + 2),
            "-".repeat(self.id + 1)
        )
    }
}

/// Render `records` as a titled table.
///
/// A separator line is inserted after every `per_block` rows, except after
/// the last one. `per_block == 0` disables the inner separators.
pub fn render(records: &[Record], per_block: usize) -> String {
    let w = Widths::titles().fit(records);
    let separator = w.separator();
    let mut out = String::new();

    let _ = writeln!(out, "{}", separator);
    let _ = writeln!(
        out,
        "{:<lw$} | {:<fw$} | {:<nw$} | {:<iw$}",
        TITLE_LAST_NAME,
        TITLE_FIRST_NAME,
        TITLE_PHONE_NUMBER,
        TITLE_ID,
        lw = w.last,
        fw = w.first,
        nw = w.number,
        iw = w.id
    );
    let _ = writeln!(out, "{}", separator);

    for (index, r) in records.iter().enumerate() {
        if per_block > 0 && index > 0 && index % per_block == 0 {
            let _ = writeln!(out, "{}", separator);
        }
        let _ = writeln!(
            out,
            "{:<lw$} | {:<fw$} | {:<nw$} | {:<iw$}",
            r.last_name,
            r.first_name,
            r.phone_number,
            r.id,
            lw = w.last,
            fw = w.first,
            nw = w.number,
            iw = w.id
        );
    }

    out
}

/// Render removed records as plain aligned columns, no titles
pub fn render_plain(records: &[Record]) -> String {
    let w = Widths::default().fit(records);
    let mut out = String::new();
    for r in records {
        let _ = writeln!(
            out,
            "{:<lw$} {:<fw$} {:<nw$} {:<iw$}",
            r.last_name,
            r.first_name,
            r.phone_number,
            r.id,
            lw = w.last,
            fw = w.first,
            nw = w.number,
            iw = w.id
        );
    }
    out
}
