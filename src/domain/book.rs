//! Book domain model
//!
//! A book is either on the shelf or out on loan. The loan carries both the
//! borrowing member and the date it left, so a book can never claim a
//! borrower without a borrow date or the other way round.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::id::{BookId, MemberId};

/// An active loan of a book to a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    /// Member holding the book
    pub member: MemberId,
    /// Date the book was borrowed
    pub since: NaiveDate,
}

/// A book in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Free-text category (e.g. "Fiction")
    pub category: String,
    /// Present while the book is borrowed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan: Option<Loan>,
}

impl Book {
    /// Creates an available book
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            category: category.into(),
            loan: None,
        }
    }

    /// Returns true if the book is on the shelf
    pub fn is_available(&self) -> bool {
        self.loan.is_none()
    }

    /// Returns the member holding the book, if any
    pub fn borrowed_by(&self) -> Option<MemberId> {
        self.loan.map(|loan| loan.member)
    }

    /// Returns the date the book was borrowed, if it is out
    pub fn borrow_date(&self) -> Option<NaiveDate> {
        self.loan.map(|loan| loan.since)
    }

    /// Case-insensitive substring match on the title
    pub fn matches_title(&self, query: &str) -> bool {
        contains_ignore_case(&self.title, query)
    }

    /// Case-insensitive substring match on the author
    pub fn matches_author(&self, query: &str) -> bool {
        contains_ignore_case(&self.author, query)
    }

    pub(crate) fn lend(&mut self, member: MemberId, since: NaiveDate) {
        self.loan = Some(Loan { member, since });
    }

    pub(crate) fn shelve(&mut self) -> Option<Loan> {
        self.loan.take()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
