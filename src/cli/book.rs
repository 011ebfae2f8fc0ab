//! Book CLI commands

use anyhow::Result;
use clap::{Subcommand, ValueEnum};

use super::output::Output;
use super::session::{read_library, update_library};
use crate::domain::{Book, BookId, SearchMode, SearchQuery};

#[derive(Subcommand)]
pub enum BookCommands {
    /// Add a book to the catalog
    ///
    /// Example:
    ///   library book add 1 "Harry Potter" "J. K. Rowling" Fantasy
    Add {
        /// Book ID (must not already exist)
        id: BookId,

        /// Title
        title: String,

        /// Author
        author: String,

        /// Category (free text)
        category: String,
    },

    /// List all books
    List,

    /// Show book details
    Show {
        /// Book ID
        id: BookId,
    },
}

/// Field to search books by
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchBy {
    Id,
    Title,
    Author,
}

impl From<SearchBy> for SearchMode {
    fn from(by: SearchBy) -> Self {
        match by {
            SearchBy::Id => SearchMode::Id,
            SearchBy::Title => SearchMode::Title,
            SearchBy::Author => SearchMode::Author,
        }
    }
}

pub fn run(cmd: BookCommands, output: &Output) -> Result<()> {
    match cmd {
        BookCommands::Add {
            id,
            title,
            author,
            category,
        } => add_book(output, id, title, author, category),
        BookCommands::List => list_books(output),
        BookCommands::Show { id } => show_book(output, id),
    }
}

fn add_book(
    output: &Output,
    id: BookId,
    title: String,
    author: String,
    category: String,
) -> Result<()> {
    let book = update_library(output, |library| {
        Ok(library.add_book(id, title, author, category)?.clone())
    })?;

    if output.is_json() {
        output.data(&book_json(&book));
    } else {
        output.success(&format!("Book added: {} - {}", book.id, book.title));
    }

    Ok(())
}

fn list_books(output: &Output) -> Result<()> {
    let library = read_library(output)?;
    let books: Vec<&Book> = library.books().iter().collect();

    if output.is_json() {
        let items: Vec<_> = books.iter().map(|b| book_json(b)).collect();
        output.data(&items);
    } else if books.is_empty() {
        println!("No books available.");
    } else {
        print_table(&books);
    }

    Ok(())
}

fn show_book(output: &Output, id: BookId) -> Result<()> {
    let library = read_library(output)?;
    let book = library
        .find_book(id)
        .ok_or_else(|| anyhow::anyhow!("Book not found: {}", id))?;

    if output.is_json() {
        output.data(&book_json(book));
        return Ok(());
    }

    println!("ID:        {}", book.id);
    println!("Title:     {}", book.title);
    println!("Author:    {}", book.author);
    println!("Category:  {}", book.category);
    match &book.loan {
        None => println!("Available: Yes"),
        Some(loan) => {
            let holder = library
                .find_member(loan.member)
                .map(|m| format!("{} ({})", m.name, m.id))
                .unwrap_or_else(|| loan.member.to_string());
            println!("Available: No");
            println!("Borrowed by: {}", holder);
            println!("Since:     {}", loan.since);
        }
    }

    Ok(())
}

/// Search the catalog
pub fn search(output: &Output, by: SearchBy, query: &str) -> Result<()> {
    let query = SearchQuery::parse(by.into(), query)?;
    let library = read_library(output)?;

    output.verbose_ctx("search", &format!("Searching for: {:?}", query));
    let results = library.search_books(&query);
    output.verbose_ctx("search", &format!("Found {} results", results.len()));

    if output.is_json() {
        let items: Vec<_> = results.iter().map(|b| book_json(b)).collect();
        output.data(&items);
    } else if results.is_empty() {
        println!("No matching books found.");
    } else {
        print_table(&results);
        println!();
        println!("Found {} book(s)", results.len());
    }

    Ok(())
}

fn print_table(books: &[&Book]) {
    println!(
        "{:<6} {:<30} {:<22} {:<14} AVAILABLE",
        "ID", "TITLE", "AUTHOR", "CATEGORY"
    );
    println!("{}", "-".repeat(84));
    for book in books {
        println!(
            "{:<6} {:<30} {:<22} {:<14} {}",
            book.id,
            truncate(&book.title, 30),
            truncate(&book.author, 22),
            truncate(&book.category, 14),
            if book.is_available() { "Yes" } else { "No" }
        );
    }
}

fn book_json(book: &Book) -> serde_json::Value {
    serde_json::json!({
        "id": book.id,
        "title": book.title,
        "author": book.author,
        "category": book.category,
        "available": book.is_available(),
        "borrowed_by": book.borrowed_by(),
        "borrow_date": book.borrow_date(),
    })
}

/// Shortens `s` to at most `max` characters
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
