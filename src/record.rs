//! Contact records
//!
//! A record is one line of the telephone book: last name, first name,
//! telephone number and a numeric ID owned by the book.

use crate::error::{BookError, BookResult};
use std::cmp::Ordering;
use std::fmt;

/// A single telephone book entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub last_name: String,
    pub first_name: String,
    pub phone_number: String,
    pub id: i64,
}

impl Record {
    /// ID carried by a record that the book has not numbered yet
    pub const UNASSIGNED_ID: i64 = -1;

    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        phone_number: impl Into<String>,
        id: i64,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            phone_number: phone_number.into(),
            id,
        }
    }

    /// Build a record for insertion, rejecting fields the line format cannot hold
    pub fn unassigned(last_name: &str, first_name: &str, phone_number: &str) -> BookResult<Self> {
        validate_field("last name", last_name)?;
        validate_field("first name", first_name)?;
        validate_field("telephone number", phone_number)?;
        Ok(Self::new(
            last_name,
            first_name,
            phone_number,
            Self::UNASSIGNED_ID,
        ))
    }

    /// Ordering used by the book: last name first, then first name.
    /// Plain byte comparison, so upper case sorts before lower case.
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        self.last_name
            .as_bytes()
            .cmp(other.last_name.as_bytes())
            .then_with(|| self.first_name.as_bytes().cmp(other.first_name.as_bytes()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} - {}, ID {}",
            self.last_name, self.first_name, self.phone_number, self.id
        )
    }
}

fn validate_field(field: &'static str, value: &str) -> BookResult<()> {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(BookError::InvalidField {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
