//! Interactive menu
//!
//! `library shell` asks for the configured login, then loops over a
//! numbered menu until the user picks "Save & Exit" or input ends. The
//! whole session runs on one in-memory [`Library`]; the caller loads it
//! before and saves it after.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use chrono::NaiveDate;

use crate::domain::{Book, BookId, Library, MemberId, SearchQuery, BORROW_LIMIT};
use crate::storage::AdminConfig;

const MENU: &str = "
=== LIBRARY MANAGEMENT SYSTEM ===
1. Add Book
2. Display All Books
3. Search Book (by ID/Title/Author)
4. Add Member
5. Display Members
6. Borrow Book
7. Return Book
8. View Statistics
9. Save & Exit";

/// How a shell session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The login was rejected; nothing may be saved
    LoginFailed,
    /// The user chose to exit (or input ended); the library should be saved
    SaveAndExit,
}

enum Flow {
    Continue,
    Exit,
}

/// Runs a full session: login, then the menu loop
pub fn run_session<R: BufRead, W: Write>(
    library: &mut Library,
    admin: &AdminConfig,
    today: NaiveDate,
    input: R,
    out: W,
) -> io::Result<SessionEnd> {
    let mut shell = Shell {
        library,
        today,
        input,
        out,
    };

    if !shell.login(admin)? {
        return Ok(SessionEnd::LoginFailed);
    }

    loop {
        writeln!(shell.out, "{}", MENU)?;
        let Some(choice) = shell.ask("Enter your choice: ")? else {
            return Ok(SessionEnd::SaveAndExit);
        };

        let flow = match choice.trim() {
            "1" => shell.add_book()?,
            "2" => shell.display_books()?,
            "3" => shell.search()?,
            "4" => shell.add_member()?,
            "5" => shell.display_members()?,
            "6" => shell.borrow()?,
            "7" => shell.return_book()?,
            "8" => shell.statistics()?,
            "9" => Flow::Exit,
            _ => {
                writeln!(shell.out, "Invalid choice! Try again.")?;
                Flow::Continue
            }
        };

        if let Flow::Exit = flow {
            return Ok(SessionEnd::SaveAndExit);
        }
    }
}

struct Shell<'a, R, W> {
    library: &'a mut Library,
    today: NaiveDate,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Shell<'_, R, W> {
    fn login(&mut self, admin: &AdminConfig) -> io::Result<bool> {
        writeln!(self.out, "=== ADMIN LOGIN ===")?;
        let username = self.ask("Username: ")?.unwrap_or_default();
        let password = self.ask("Password: ")?.unwrap_or_default();

        if admin.accepts(&username, &password) {
            writeln!(self.out, "Login successful!")?;
            Ok(true)
        } else {
            writeln!(self.out, "Invalid credentials!")?;
            Ok(false)
        }
    }

    /// Prompts and reads one line; `None` at end of input
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    /// Prompts until the answer parses; `None` at end of input
    fn ask_parsed<T: FromStr>(&mut self, prompt: &str) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match answer.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.out, "Please enter a whole number.")?,
            }
        }
    }

    fn add_book(&mut self) -> io::Result<Flow> {
        let Some(id) = self.ask_parsed::<BookId>("Enter Book ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(title) = self.ask("Enter Title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.ask("Enter Author: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(category) = self.ask("Enter Category: ")? else {
            return Ok(Flow::Exit);
        };

        match self.library.add_book(id, title, author, category) {
            Ok(_) => writeln!(self.out, "Book added successfully!")?,
            Err(e) => writeln!(self.out, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn display_books(&mut self) -> io::Result<Flow> {
        if self.library.books().is_empty() {
            writeln!(self.out, "No books available.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.out, "\n--- Book List ---")?;
        for book in self.library.books() {
            write_book(&mut self.out, book)?;
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> io::Result<Flow> {
        writeln!(self.out, "Search by: 1.ID  2.Title  3.Author")?;
        let Some(option) = self.ask("Enter option: ")? else {
            return Ok(Flow::Exit);
        };

        let query = match option.trim() {
            "1" => match self.ask_parsed::<BookId>("Enter Book ID: ")? {
                Some(id) => SearchQuery::ById(id),
                None => return Ok(Flow::Exit),
            },
            "2" => match self.ask("Enter Title keyword: ")? {
                Some(text) => SearchQuery::ByTitle(text),
                None => return Ok(Flow::Exit),
            },
            "3" => match self.ask("Enter Author keyword: ")? {
                Some(text) => SearchQuery::ByAuthor(text),
                None => return Ok(Flow::Exit),
            },
            _ => {
                writeln!(self.out, "Invalid choice! Try again.")?;
                return Ok(Flow::Continue);
            }
        };

        let results = self.library.search_books(&query);
        if results.is_empty() {
            writeln!(self.out, "No matching books found.")?;
        }
        for book in results {
            write_book(&mut self.out, book)?;
        }
        Ok(Flow::Continue)
    }

    fn add_member(&mut self) -> io::Result<Flow> {
        let Some(id) = self.ask_parsed::<MemberId>("Enter Member ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = self.ask("Enter Member Name: ")? else {
            return Ok(Flow::Exit);
        };

        match self.library.add_member(id, name) {
            Ok(_) => writeln!(self.out, "Member added successfully!")?,
            Err(e) => writeln!(self.out, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn display_members(&mut self) -> io::Result<Flow> {
        if self.library.members().is_empty() {
            writeln!(self.out, "No members available.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.out, "\n--- Member List ---")?;
        for member in self.library.members() {
            writeln!(
                self.out,
                "Member ID: {} | Name: {} | Books Borrowed: {}/{}",
                member.id,
                member.name,
                member.borrowed_count(),
                BORROW_LIMIT
            )?;
        }
        Ok(Flow::Continue)
    }

    fn borrow(&mut self) -> io::Result<Flow> {
        let Some(member_id) = self.ask_parsed::<MemberId>("Enter Member ID: ")? else {
            return Ok(Flow::Exit);
        };
        if let Err(e) = self.library.check_can_borrow(member_id) {
            writeln!(self.out, "{}", e)?;
            return Ok(Flow::Continue);
        }
        let Some(book_id) = self.ask_parsed::<BookId>("Enter Book ID to borrow: ")? else {
            return Ok(Flow::Exit);
        };

        match self.library.borrow(member_id, book_id, self.today) {
            Ok(book) => {
                let title = book.title.clone();
                let name = self
                    .library
                    .find_member(member_id)
                    .map(|m| m.name.clone())
                    .unwrap_or_default();
                writeln!(self.out, "{} borrowed: {}", name, title)?;
            }
            Err(e) => writeln!(self.out, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn return_book(&mut self) -> io::Result<Flow> {
        let Some(member_id) = self.ask_parsed::<MemberId>("Enter Member ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(book_id) = self.ask_parsed::<BookId>("Enter Book ID to return: ")? else {
            return Ok(Flow::Exit);
        };

        match self.library.return_book(member_id, book_id, self.today) {
            Ok(receipt) => {
                if receipt.fine > 0 {
                    writeln!(self.out, "Late return! Fine: {}", receipt.fine)?;
                }
                writeln!(self.out, "Book returned successfully!")?;
            }
            Err(e) => writeln!(self.out, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn statistics(&mut self) -> io::Result<Flow> {
        let stats = self.library.stats();
        writeln!(self.out, "\n--- Library Statistics ---")?;
        writeln!(self.out, "Total Books: {}", stats.total_books)?;
        writeln!(self.out, "Available Books: {}", stats.available_books)?;
        writeln!(self.out, "Borrowed Books: {}", stats.borrowed_books)?;
        writeln!(self.out, "Total Members: {}", stats.total_members)?;
        Ok(Flow::Continue)
    }
}

fn write_book<W: Write>(out: &mut W, book: &Book) -> io::Result<()> {
    writeln!(
        out,
        "ID: {} | Title: {} | Author: {} | Category: {} | Available: {}",
        book.id,
        book.title,
        book.author,
        book.category,
        if book.is_available() { "Yes" } else { "No" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
    }

    /// Runs a session against `library` with the given input lines
    fn run(library: &mut Library, input: &str) -> (SessionEnd, String) {
        let mut out = Vec::new();
        let end = run_session(
            library,
            &AdminConfig::default(),
            today(),
            Cursor::new(input.as_bytes()),
            &mut out,
        )
        .unwrap();
        (end, String::from_utf8(out).unwrap())
    }

    #[test]
    fn wrong_credentials_end_session() {
        let mut library = Library::new();
        let (end, out) = run(&mut library, "admin\nwrong\n1\n");

        assert_eq!(end, SessionEnd::LoginFailed);
        assert!(out.contains("Invalid credentials!"));
        assert!(!out.contains("LIBRARY MANAGEMENT SYSTEM"));
    }

    #[test]
    fn custom_credentials() {
        let admin = AdminConfig {
            username: "librarian".to_string(),
            password: "books".to_string(),
        };
        let mut library = Library::new();
        let mut out = Vec::new();
        let end = run_session(
            &mut library,
            &admin,
            today(),
            Cursor::new("librarian\nbooks\n9\n"),
            &mut out,
        )
        .unwrap();
        assert_eq!(end, SessionEnd::SaveAndExit);
    }

    #[test]
    fn add_borrow_and_return() {
        let mut library = Library::new();
        let input = "admin\n1234\n\
                     1\n1\nHarry Potter\nJ. K. Rowling\nFantasy\n\
                     4\n1\nBob\n\
                     6\n1\n1\n\
                     8\n\
                     7\n1\n1\n\
                     9\n";
        let (end, out) = run(&mut library, input);

        assert_eq!(end, SessionEnd::SaveAndExit);
        assert!(out.contains("Login successful!"));
        assert!(out.contains("Book added successfully!"));
        assert!(out.contains("Member added successfully!"));
        assert!(out.contains("Bob borrowed: Harry Potter"));
        assert!(out.contains("Borrowed Books: 1"));
        assert!(out.contains("Book returned successfully!"));
        assert!(!out.contains("Late return!"));

        assert!(library.find_book(BookId::new(1)).unwrap().is_available());
        assert!(library
            .find_member(MemberId::new(1))
            .unwrap()
            .borrowed_books
            .is_empty());
    }

    #[test]
    fn late_return_reports_fine() {
        let mut library = Library::new();
        library.add_book(BookId::new(2), "Dune", "Frank Herbert", "Sci-Fi").unwrap();
        library.add_member(MemberId::new(5), "Ann").unwrap();
        let borrowed_on = NaiveDate::from_ymd_opt(2024, 8, 20).unwrap();
        library.borrow(MemberId::new(5), BookId::new(2), borrowed_on).unwrap();

        // 12 days held: 5 late days at 5 each
        let (_, out) = run(&mut library, "admin\n1234\n7\n5\n2\n9\n");
        assert!(out.contains("Late return! Fine: 25"));
    }

    #[test]
    fn invalid_choice_reprompts() {
        let mut library = Library::new();
        let (end, out) = run(&mut library, "admin\n1234\n42\nhello\n9\n");

        assert_eq!(end, SessionEnd::SaveAndExit);
        assert_eq!(out.matches("Invalid choice! Try again.").count(), 2);
        assert_eq!(out.matches("Enter your choice: ").count(), 3);
    }

    #[test]
    fn errors_are_reported_and_session_continues() {
        let mut library = Library::new();
        let (end, out) = run(&mut library, "admin\n1234\n6\n3\n2\n9\n");

        assert_eq!(end, SessionEnd::SaveAndExit);
        assert!(out.contains("Member not found: 3"));
        assert!(!out.contains("Enter Book ID to borrow: "));
        assert!(out.contains("No books available."));
    }

    #[test]
    fn member_at_limit_is_stopped_before_book_prompt() {
        let mut library = Library::new();
        library.add_member(MemberId::new(1), "Bob").unwrap();
        for n in 1..=3 {
            library.add_book(BookId::new(n), "T", "A", "C").unwrap();
            library.borrow(MemberId::new(1), BookId::new(n), today()).unwrap();
        }

        let (end, out) = run(&mut library, "admin\n1234\n6\n1\n9\n");

        assert_eq!(end, SessionEnd::SaveAndExit);
        assert!(out.contains("Borrow limit reached: member 1 already holds 3 books"));
        assert!(!out.contains("Enter Book ID to borrow: "));
    }

    #[test]
    fn non_numeric_id_is_asked_again() {
        let mut library = Library::new();
        let (_, out) = run(&mut library, "admin\n1234\n4\nseven\n7\nGreta\n9\n");

        assert!(out.contains("Please enter a whole number."));
        assert!(library.find_member(MemberId::new(7)).is_some());
    }

    #[test]
    fn search_reports_no_matches() {
        let mut library = Library::new();
        library.add_book(BookId::new(1), "Harry Potter", "J. K. Rowling", "Fantasy").unwrap();

        let (_, out) = run(&mut library, "admin\n1234\n3\n2\nHAR\n3\n3\ntolkien\n9\n");
        assert!(out.contains("ID: 1 | Title: Harry Potter"));
        assert!(out.contains("No matching books found."));
    }

    #[test]
    fn end_of_input_saves_and_exits() {
        let mut library = Library::new();
        let (end, _) = run(&mut library, "admin\n1234\n4\n3\n");

        assert_eq!(end, SessionEnd::SaveAndExit);
        assert!(library.members().is_empty());
    }
}
