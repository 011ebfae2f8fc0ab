//! Member domain model

use serde::{Deserialize, Serialize};

use super::fine::BORROW_LIMIT;
use super::id::{BookId, MemberId};

/// A registered library member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    /// Books currently held, in the order they were borrowed
    #[serde(default)]
    pub borrowed_books: Vec<BookId>,
}

impl Member {
    /// Creates a member holding no books
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            borrowed_books: Vec::new(),
        }
    }

    /// Returns the number of books currently held
    pub fn borrowed_count(&self) -> usize {
        self.borrowed_books.len()
    }

    /// Returns true if the member may not borrow another book
    pub fn at_limit(&self) -> bool {
        self.borrowed_count() >= BORROW_LIMIT
    }

    /// Returns true if the member holds the given book
    pub fn holds(&self, book: BookId) -> bool {
        self.borrowed_books.contains(&book)
    }

    pub(crate) fn take(&mut self, book: BookId) {
        self.borrowed_books.push(book);
    }

    /// Removes the first occurrence of `book`; returns false if not held
    pub(crate) fn give_back(&mut self, book: BookId) -> bool {
        match self.borrowed_books.iter().position(|held| *held == book) {
            Some(index) => {
                self.borrowed_books.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_member_holds_nothing() {
        let member = Member::new(MemberId::new(1), "Bob");
        assert_eq!(member.borrowed_count(), 0);
        assert!(!member.at_limit());
    }

    #[test]
    fn limit_reached_at_three_books() {
        let mut member = Member::new(MemberId::new(1), "Bob");
        for id in 1..=3 {
            assert!(!member.at_limit());
            member.take(BookId::new(id));
        }
        assert!(member.at_limit());
    }

    #[test]
    fn give_back_removes_one_occurrence_by_value() {
        let mut member = Member::new(MemberId::new(1), "Bob");
        member.borrowed_books = vec![BookId::new(4), BookId::new(2), BookId::new(4)];

        assert!(member.give_back(BookId::new(4)));
        assert_eq!(member.borrowed_books, vec![BookId::new(2), BookId::new(4)]);

        assert!(!member.give_back(BookId::new(9)));
        assert_eq!(member.borrowed_count(), 2);
    }

    #[test]
    fn missing_borrowed_books_defaults_to_empty() {
        let member: Member = serde_json::from_str(r#"{"id":5,"name":"Ann"}"#).unwrap();
        assert!(member.borrowed_books.is_empty());
    }
}
