//! Identifiers for books and members
//!
//! Both are plain integers chosen by whoever adds the record. They are
//! stored as bare JSON numbers and printed without decoration, so `42`
//! on the command line, in a listing and in `books.jsonl` all mean the
//! same book.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid book ID: expected a non-negative integer, got '{0}'")]
    InvalidBookId(String),

    #[error("Invalid member ID: expected a non-negative integer, got '{0}'")]
    InvalidMemberId(String),
}

/// Identity of a book in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u32);

impl BookId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw integer value
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| IdError::InvalidBookId(s.to_string()))
    }
}

/// Identity of a member in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(u32);

impl MemberId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw integer value
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MemberId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| IdError::InvalidMemberId(s.to_string()))
    }
}
