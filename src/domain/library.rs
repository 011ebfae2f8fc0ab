//! The library service: catalog, registry and the lending rules
//!
//! [`Library`] owns both collections and is the only place either is
//! mutated. Every operation validates everything it needs before touching
//! state, so a failed call leaves the catalog and registry exactly as they
//! were.
//!
//! ## Lending state machine
//!
//! ```text
//!            borrow(member, book, today)
//! Available ─────────────────────────────▶ Borrowed { member, since }
//!     ▲                                            │
//!     └────────────────────────────────────────────┘
//!            return_book(member, book, today)
//! ```
//!
//! A book is Borrowed exactly when its id appears in the holding member's
//! `borrowed_books`; [`Library::check_consistency`] verifies this.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use super::book::Book;
use super::fine::{days_between, late_fine, BORROW_LIMIT};
use super::id::{BookId, IdError, MemberId};
use super::member::Member;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LibraryError {
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),

    #[error("Book not found: {0}")]
    BookNotFound(BookId),

    #[error("Borrow limit reached: member {member} already holds {limit} books")]
    BorrowLimitExceeded { member: MemberId, limit: usize },

    #[error("Book already borrowed: {0}")]
    BookAlreadyBorrowed(BookId),

    #[error("Invalid book ID or book not borrowed: {0}")]
    BookNotFoundOrNotBorrowed(BookId),

    #[error("Book {book} is held by member {holder}, not member {member}")]
    NotBorrowedByMember {
        book: BookId,
        member: MemberId,
        holder: MemberId,
    },

    #[error("A book with ID {0} already exists")]
    DuplicateBook(BookId),

    #[error("A member with ID {0} already exists")]
    DuplicateMember(MemberId),
}

/// A violation of the catalog/registry invariants found in loaded data
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Inconsistency {
    #[error("Book ID {0} appears more than once in the catalog")]
    DuplicateBookId(BookId),

    #[error("Member ID {0} appears more than once in the registry")]
    DuplicateMemberId(MemberId),

    #[error("Book {book} is lent to unknown member {member}")]
    UnknownBorrower { book: BookId, member: MemberId },

    #[error("Book {book} is lent to member {member} but missing from their borrowed list")]
    MissingFromMember { book: BookId, member: MemberId },

    #[error("Member {member} lists book {book}, which is not lent to them")]
    NotLentToMember { book: BookId, member: MemberId },

    #[error("Member {member} holds {count} books, over the limit")]
    OverLimit { member: MemberId, count: usize },
}

/// Field a search runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Id,
    Title,
    Author,
}

/// A catalog search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Exact id match
    ById(BookId),
    /// Case-insensitive substring of the title
    ByTitle(String),
    /// Case-insensitive substring of the author
    ByAuthor(String),
}

impl SearchQuery {
    /// Builds a query from a mode and the raw text the user typed
    pub fn parse(mode: SearchMode, text: &str) -> Result<Self, IdError> {
        Ok(match mode {
            SearchMode::Id => SearchQuery::ById(text.parse()?),
            SearchMode::Title => SearchQuery::ByTitle(text.to_string()),
            SearchMode::Author => SearchQuery::ByAuthor(text.to_string()),
        })
    }

    fn matches(&self, book: &Book) -> bool {
        match self {
            SearchQuery::ById(id) => book.id == *id,
            SearchQuery::ByTitle(text) => book.matches_title(text),
            SearchQuery::ByAuthor(text) => book.matches_author(text),
        }
    }
}

/// Outcome of a successful return
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnReceipt {
    pub book: BookId,
    pub member: MemberId,
    pub title: String,
    pub days_held: i64,
    /// Late fine; reported only, never charged or stored
    pub fine: u64,
}

/// Catalog and registry counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_books: usize,
    pub available_books: usize,
    pub borrowed_books: usize,
    pub total_members: usize,
}

/// The book catalog and member registry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    books: Vec<Book>,
    members: Vec<Member>,
}

impl Library {
    /// Creates an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a library from persisted collections, as-is
    pub fn from_parts(books: Vec<Book>, members: Vec<Member>) -> Self {
        Self { books, members }
    }

    /// Returns the catalog in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns the registry in insertion order
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Returns true if the library holds no books and no members
    pub fn is_empty(&self) -> bool {
        self.books.is_empty() && self.members.is_empty()
    }

    // ---------------------------------------------------------------------
    // Catalog
    // ---------------------------------------------------------------------

    /// Adds an available book to the end of the catalog
    pub fn add_book(
        &mut self,
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<&Book, LibraryError> {
        if self.book_index(id).is_some() {
            return Err(LibraryError::DuplicateBook(id));
        }

        self.books.push(Book::new(id, title, author, category));
        Ok(&self.books[self.books.len() - 1])
    }

    /// Finds a book by id
    pub fn find_book(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Returns all matching books in catalog order (possibly none)
    pub fn search_books(&self, query: &SearchQuery) -> Vec<&Book> {
        self.books.iter().filter(|book| query.matches(book)).collect()
    }

    // ---------------------------------------------------------------------
    // Registry
    // ---------------------------------------------------------------------

    /// Adds a member holding no books
    pub fn add_member(
        &mut self,
        id: MemberId,
        name: impl Into<String>,
    ) -> Result<&Member, LibraryError> {
        if self.member_index(id).is_some() {
            return Err(LibraryError::DuplicateMember(id));
        }

        self.members.push(Member::new(id, name));
        Ok(&self.members[self.members.len() - 1])
    }

    /// Finds a member by id
    pub fn find_member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    /// Returns the books a member currently holds, in borrow order
    pub fn borrowed_by(&self, member: &Member) -> Vec<&Book> {
        member
            .borrowed_books
            .iter()
            .filter_map(|id| self.find_book(*id))
            .collect()
    }

    // ---------------------------------------------------------------------
    // Lending
    // ---------------------------------------------------------------------

    /// Checks the member side of a borrow: the member exists and is under the limit
    pub fn check_can_borrow(&self, member_id: MemberId) -> Result<&Member, LibraryError> {
        let member = self
            .find_member(member_id)
            .ok_or(LibraryError::MemberNotFound(member_id))?;

        if member.at_limit() {
            return Err(LibraryError::BorrowLimitExceeded {
                member: member_id,
                limit: BORROW_LIMIT,
            });
        }
        Ok(member)
    }

    /// Lends a book to a member as of `today`
    pub fn borrow(
        &mut self,
        member_id: MemberId,
        book_id: BookId,
        today: NaiveDate,
    ) -> Result<&Book, LibraryError> {
        self.check_can_borrow(member_id)?;
        let member_idx = self
            .member_index(member_id)
            .ok_or(LibraryError::MemberNotFound(member_id))?;

        let book_idx = self
            .book_index(book_id)
            .ok_or(LibraryError::BookNotFound(book_id))?;

        if !self.books[book_idx].is_available() {
            return Err(LibraryError::BookAlreadyBorrowed(book_id));
        }

        self.books[book_idx].lend(member_id, today);
        self.members[member_idx].take(book_id);

        Ok(&self.books[book_idx])
    }

    /// Takes a book back from a member as of `today`, computing the late fine
    pub fn return_book(
        &mut self,
        member_id: MemberId,
        book_id: BookId,
        today: NaiveDate,
    ) -> Result<ReturnReceipt, LibraryError> {
        let member_idx = self
            .member_index(member_id)
            .ok_or(LibraryError::MemberNotFound(member_id))?;

        let book_idx = self
            .book_index(book_id)
            .ok_or(LibraryError::BookNotFoundOrNotBorrowed(book_id))?;

        let loan = self.books[book_idx]
            .loan
            .ok_or(LibraryError::BookNotFoundOrNotBorrowed(book_id))?;

        if loan.member != member_id {
            return Err(LibraryError::NotBorrowedByMember {
                book: book_id,
                member: member_id,
                holder: loan.member,
            });
        }

        let days_held = days_between(loan.since, today);
        let fine = late_fine(days_held);

        self.books[book_idx].shelve();
        self.members[member_idx].give_back(book_id);

        Ok(ReturnReceipt {
            book: book_id,
            member: member_id,
            title: self.books[book_idx].title.clone(),
            days_held,
            fine,
        })
    }

    // ---------------------------------------------------------------------
    // Reporting
    // ---------------------------------------------------------------------

    /// Counts books by availability and members
    pub fn stats(&self) -> Stats {
        let total_books = self.books.len();
        let borrowed_books = self.books.iter().filter(|b| !b.is_available()).count();

        Stats {
            total_books,
            available_books: total_books - borrowed_books,
            borrowed_books,
            total_members: self.members.len(),
        }
    }

    /// Lists every violation of the catalog/registry invariants
    pub fn check_consistency(&self) -> Vec<Inconsistency> {
        let mut problems = Vec::new();

        let mut seen_books = HashSet::new();
        for book in &self.books {
            if !seen_books.insert(book.id) {
                problems.push(Inconsistency::DuplicateBookId(book.id));
            }
        }

        let mut seen_members = HashSet::new();
        for member in &self.members {
            if !seen_members.insert(member.id) {
                problems.push(Inconsistency::DuplicateMemberId(member.id));
            }
        }

        for book in &self.books {
            let Some(holder) = book.borrowed_by() else {
                continue;
            };
            match self.find_member(holder) {
                None => problems.push(Inconsistency::UnknownBorrower {
                    book: book.id,
                    member: holder,
                }),
                Some(member) if !member.holds(book.id) => {
                    problems.push(Inconsistency::MissingFromMember {
                        book: book.id,
                        member: holder,
                    })
                }
                Some(_) => {}
            }
        }

        for member in &self.members {
            if member.borrowed_count() > BORROW_LIMIT {
                problems.push(Inconsistency::OverLimit {
                    member: member.id,
                    count: member.borrowed_count(),
                });
            }

            let mut listed = HashSet::new();
            for &book_id in &member.borrowed_books {
                let lent_here = self
                    .find_book(book_id)
                    .and_then(|book| book.borrowed_by())
                    == Some(member.id);

                // A second listing of the same id is never backed by a loan
                if !lent_here || !listed.insert(book_id) {
                    problems.push(Inconsistency::NotLentToMember {
                        book: book_id,
                        member: member.id,
                    });
                }
            }
        }

        problems
    }

    fn book_index(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    fn member_index(&self, id: MemberId) -> Option<usize> {
        self.members.iter().position(|member| member.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use proptest::prelude::*;

    fn day(n: u64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap() + Days::new(n)
    }

    fn b(id: u32) -> BookId {
        BookId::new(id)
    }

    fn m(id: u32) -> MemberId {
        MemberId::new(id)
    }

    /// Library with books 1..=5 and members 1..=2
    fn make_library() -> Library {
        let mut lib = Library::new();
        lib.add_book(b(1), "Harry Potter", "J. K. Rowling", "Fantasy").unwrap();
        lib.add_book(b(2), "The Hobbit", "J. R. R. Tolkien", "Fantasy").unwrap();
        lib.add_book(b(3), "Dune", "Frank Herbert", "Sci-Fi").unwrap();
        lib.add_book(b(4), "Emma", "Jane Austen", "Classic").unwrap();
        lib.add_book(b(5), "Harvest", "Jim Crace", "Fiction").unwrap();
        lib.add_member(m(1), "Bob").unwrap();
        lib.add_member(m(2), "Alice").unwrap();
        lib
    }

    #[test]
    fn borrow_then_return_scenario() {
        let mut lib = Library::new();
        lib.add_book(b(1), "A", "X", "Fic").unwrap();
        lib.add_member(m(1), "Bob").unwrap();

        lib.borrow(m(1), b(1), day(0)).unwrap();
        let book = lib.find_book(b(1)).unwrap();
        assert!(!book.is_available());
        assert_eq!(book.borrowed_by(), Some(m(1)));
        assert_eq!(book.borrow_date(), Some(day(0)));
        assert_eq!(lib.find_member(m(1)).unwrap().borrowed_books, vec![b(1)]);

        let receipt = lib.return_book(m(1), b(1), day(0)).unwrap();
        assert_eq!(receipt.fine, 0);
        assert_eq!(receipt.days_held, 0);
        assert!(lib.find_book(b(1)).unwrap().is_available());
        assert!(lib.find_member(m(1)).unwrap().borrowed_books.is_empty());
        assert!(lib.check_consistency().is_empty());
    }

    #[test]
    fn return_fines() {
        for (days, expected) in [(10, 15), (7, 0), (8, 5)] {
            let mut lib = make_library();
            lib.borrow(m(1), b(1), day(0)).unwrap();
            let receipt = lib.return_book(m(1), b(1), day(days)).unwrap();
            assert_eq!(receipt.fine, expected, "returned after {} days", days);
            assert_eq!(receipt.title, "Harry Potter");
        }
    }

    #[test]
    fn borrow_unknown_member() {
        let mut lib = make_library();
        let before = lib.clone();
        assert_eq!(
            lib.borrow(m(99), b(1), day(0)),
            Err(LibraryError::MemberNotFound(m(99)))
        );
        assert_eq!(lib, before);
    }

    #[test]
    fn borrow_unknown_book() {
        let mut lib = make_library();
        let before = lib.clone();
        assert_eq!(
            lib.borrow(m(1), b(99), day(0)),
            Err(LibraryError::BookNotFound(b(99)))
        );
        assert_eq!(lib, before);
    }

    #[test]
    fn borrow_already_borrowed_book() {
        let mut lib = make_library();
        lib.borrow(m(1), b(1), day(0)).unwrap();
        let before = lib.clone();

        assert_eq!(
            lib.borrow(m(2), b(1), day(1)),
            Err(LibraryError::BookAlreadyBorrowed(b(1)))
        );
        assert_eq!(
            lib.borrow(m(1), b(1), day(1)),
            Err(LibraryError::BookAlreadyBorrowed(b(1)))
        );
        assert_eq!(lib, before);
    }

    #[test]
    fn fourth_borrow_exceeds_limit() {
        let mut lib = make_library();
        for id in 1..=3 {
            lib.borrow(m(1), b(id), day(0)).unwrap();
        }
        let before = lib.clone();

        assert_eq!(
            lib.borrow(m(1), b(4), day(0)),
            Err(LibraryError::BorrowLimitExceeded {
                member: m(1),
                limit: 3
            })
        );
        assert_eq!(lib.find_member(m(1)).unwrap().borrowed_count(), 3);
        assert!(lib.find_book(b(4)).unwrap().is_available());
        assert_eq!(lib, before);
    }

    #[test]
    fn limit_is_checked_before_book_lookup() {
        let mut lib = make_library();
        for id in 1..=3 {
            lib.borrow(m(1), b(id), day(0)).unwrap();
        }
        assert!(matches!(
            lib.borrow(m(1), b(99), day(0)),
            Err(LibraryError::BorrowLimitExceeded { .. })
        ));
    }

    #[test]
    fn return_unknown_member() {
        let mut lib = make_library();
        lib.borrow(m(1), b(1), day(0)).unwrap();
        assert_eq!(
            lib.return_book(m(42), b(1), day(1)),
            Err(LibraryError::MemberNotFound(m(42)))
        );
    }

    #[test]
    fn return_missing_or_available_book() {
        let mut lib = make_library();
        assert_eq!(
            lib.return_book(m(1), b(99), day(0)),
            Err(LibraryError::BookNotFoundOrNotBorrowed(b(99)))
        );
        assert_eq!(
            lib.return_book(m(1), b(2), day(0)),
            Err(LibraryError::BookNotFoundOrNotBorrowed(b(2)))
        );
    }

    #[test]
    fn return_by_another_member_is_rejected() {
        let mut lib = make_library();
        lib.borrow(m(1), b(3), day(0)).unwrap();
        let before = lib.clone();

        assert_eq!(
            lib.return_book(m(2), b(3), day(2)),
            Err(LibraryError::NotBorrowedByMember {
                book: b(3),
                member: m(2),
                holder: m(1),
            })
        );
        assert_eq!(lib, before);
    }

    #[test]
    fn return_frees_a_slot_under_the_limit() {
        let mut lib = make_library();
        for id in 1..=3 {
            lib.borrow(m(1), b(id), day(0)).unwrap();
        }
        lib.return_book(m(1), b(2), day(1)).unwrap();
        assert_eq!(lib.find_member(m(1)).unwrap().borrowed_books, vec![b(1), b(3)]);

        lib.borrow(m(1), b(4), day(1)).unwrap();
        assert_eq!(
            lib.find_member(m(1)).unwrap().borrowed_books,
            vec![b(1), b(3), b(4)]
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut lib = make_library();
        assert_eq!(
            lib.add_book(b(1), "Other", "Someone", "Misc").unwrap_err(),
            LibraryError::DuplicateBook(b(1))
        );
        assert_eq!(
            lib.add_member(m(2), "Carol").unwrap_err(),
            LibraryError::DuplicateMember(m(2))
        );
        assert_eq!(lib.books().len(), 5);
        assert_eq!(lib.members().len(), 2);
    }

    #[test]
    fn search_by_title_is_case_insensitive_substring() {
        let lib = make_library();
        let found = lib.search_books(&SearchQuery::ByTitle("har".to_string()));
        let ids: Vec<_> = found.iter().map(|book| book.id).collect();
        assert_eq!(ids, vec![b(1), b(5)]);
    }

    #[test]
    fn search_by_author_and_id() {
        let lib = make_library();
        let by_author = lib.search_books(&SearchQuery::ByAuthor("TOLKIEN".to_string()));
        assert_eq!(by_author.len(), 1);
        assert_eq!(by_author[0].title, "The Hobbit");

        let by_id = lib.search_books(&SearchQuery::ById(b(4)));
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].title, "Emma");
    }

    #[test]
    fn search_without_matches_is_empty() {
        let lib = make_library();
        assert!(lib
            .search_books(&SearchQuery::ByTitle("zzz".to_string()))
            .is_empty());
        assert!(lib.search_books(&SearchQuery::ById(b(77))).is_empty());
    }

    #[test]
    fn parse_search_query() {
        assert_eq!(
            SearchQuery::parse(SearchMode::Id, "3").unwrap(),
            SearchQuery::ById(b(3))
        );
        assert_eq!(
            SearchQuery::parse(SearchMode::Author, "Austen").unwrap(),
            SearchQuery::ByAuthor("Austen".to_string())
        );
        assert!(SearchQuery::parse(SearchMode::Id, "three").is_err());
    }

    #[test]
    fn stats_count_books_and_members() {
        let mut lib = make_library();
        assert_eq!(
            lib.stats(),
            Stats {
                total_books: 5,
                available_books: 5,
                borrowed_books: 0,
                total_members: 2,
            }
        );

        lib.borrow(m(1), b(1), day(0)).unwrap();
        lib.borrow(m(2), b(2), day(0)).unwrap();
        let stats = lib.stats();
        assert_eq!(stats.available_books, 3);
        assert_eq!(stats.borrowed_books, 2);
        assert_eq!(Library::new().stats(), Stats::default());
    }

    #[test]
    fn borrowed_by_lists_held_books() {
        let mut lib = make_library();
        lib.borrow(m(2), b(4), day(0)).unwrap();
        lib.borrow(m(2), b(1), day(0)).unwrap();

        let member = lib.find_member(m(2)).unwrap();
        let titles: Vec<_> = lib
            .borrowed_by(member)
            .into_iter()
            .map(|book| book.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Emma", "Harry Potter"]);
    }

    #[test]
    fn consistency_detects_broken_loaded_data() {
        let mut book = Book::new(b(1), "A", "X", "Fic");
        book.lend(m(7), day(0));
        let mut lister = Member::new(m(1), "Bob");
        lister.borrowed_books.push(b(2));
        let lib = Library::from_parts(
            vec![book, Book::new(b(2), "B", "Y", "Fic"), Book::new(b(2), "C", "Z", "Fic")],
            vec![lister],
        );

        let problems = lib.check_consistency();
        assert!(problems.contains(&Inconsistency::DuplicateBookId(b(2))));
        assert!(problems.contains(&Inconsistency::UnknownBorrower {
            book: b(1),
            member: m(7)
        }));
        assert!(problems.contains(&Inconsistency::NotLentToMember {
            book: b(2),
            member: m(1)
        }));
    }

    #[test]
    fn consistency_detects_duplicate_member_ids() {
        let lib = Library::from_parts(
            vec![],
            vec![Member::new(m(1), "Bob"), Member::new(m(1), "Robert")],
        );

        assert_eq!(
            lib.check_consistency(),
            vec![Inconsistency::DuplicateMemberId(m(1))]
        );
    }

    #[test]
    fn consistency_detects_loan_missing_from_member() {
        let mut book = Book::new(b(1), "A", "X", "Fic");
        book.lend(m(1), day(0));
        let lib = Library::from_parts(vec![book], vec![Member::new(m(1), "Bob")]);

        assert_eq!(
            lib.check_consistency(),
            vec![Inconsistency::MissingFromMember {
                book: b(1),
                member: m(1)
            }]
        );
    }

    #[test]
    fn consistency_detects_member_over_limit() {
        let mut member = Member::new(m(1), "Bob");
        let books = (1..=4)
            .map(|n| {
                let mut book = Book::new(b(n), "T", "A", "C");
                book.lend(m(1), day(0));
                member.borrowed_books.push(b(n));
                book
            })
            .collect();
        let lib = Library::from_parts(books, vec![member]);

        assert_eq!(
            lib.check_consistency(),
            vec![Inconsistency::OverLimit {
                member: m(1),
                count: 4
            }]
        );
    }

    #[derive(Debug, Clone)]
    enum Op {
        Borrow(u32, u32),
        Return(u32, u32),
        AddBook(u32),
        AddMember(u32),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => (0u32..4, 0u32..8).prop_map(|(mem, book)| Op::Borrow(mem, book)),
            3 => (0u32..4, 0u32..8).prop_map(|(mem, book)| Op::Return(mem, book)),
            1 => (0u32..8).prop_map(Op::AddBook),
            1 => (0u32..4).prop_map(Op::AddMember),
        ]
    }

    proptest! {
        #[test]
        fn lending_keeps_catalog_and_registry_consistent(
            ops in proptest::collection::vec((op_strategy(), 0u64..30), 1..60)
        ) {
            let mut lib = Library::new();
            let mut today = day(0);

            for (op, advance) in ops {
                today = today + Days::new(advance);
                let before = lib.clone();

                let failed = match op {
                    Op::Borrow(mem, book) => lib.borrow(m(mem), b(book), today).is_err(),
                    Op::Return(mem, book) => match lib.return_book(m(mem), b(book), today) {
                        Ok(receipt) => {
                            prop_assert_eq!(receipt.fine, late_fine(receipt.days_held));
                            false
                        }
                        Err(_) => true,
                    },
                    Op::AddBook(id) => lib.add_book(b(id), "T", "A", "C").is_err(),
                    Op::AddMember(id) => lib.add_member(m(id), "N").is_err(),
                };

                if failed {
                    prop_assert_eq!(&lib, &before);
                }
                prop_assert!(lib.check_consistency().is_empty());
                for member in lib.members() {
                    prop_assert!(member.borrowed_count() <= BORROW_LIMIT);
                }
            }
        }
    }
}
