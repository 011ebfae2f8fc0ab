//! Domain models for the library
//!
//! Contains the catalog, registry and lending rules without any I/O concerns.

mod book;
mod fine;
mod id;
mod library;
mod member;

pub use book::{Book, Loan};
pub use fine::{days_between, late_fine, BORROW_LIMIT, FINE_PER_DAY, GRACE_DAYS};
pub use id::{BookId, IdError, MemberId};
pub use library::{
    Inconsistency, Library, LibraryError, ReturnReceipt, SearchMode, SearchQuery, Stats,
};
pub use member::Member;
