//! Borrow, return and statistics commands

use anyhow::Result;
use chrono::NaiveDate;

use super::output::Output;
use super::session::{read_library, update_library};
use crate::domain::{BookId, MemberId};

/// Lend a book to a member
pub fn borrow(output: &Output, member_id: MemberId, book_id: BookId, today: NaiveDate) -> Result<()> {
    output.verbose_ctx(
        "borrow",
        &format!("Member {} borrowing book {} on {}", member_id, book_id, today),
    );

    let (member_name, title) = update_library(output, |library| {
        let title = library.borrow(member_id, book_id, today)?.title.clone();
        let member_name = library
            .find_member(member_id)
            .map(|m| m.name.clone())
            .unwrap_or_default();
        Ok((member_name, title))
    })?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "member": member_id,
            "book": book_id,
            "title": title,
            "borrow_date": today,
        }));
    } else {
        output.success(&format!("{} borrowed: {}", member_name, title));
    }

    Ok(())
}

/// Take a book back and report any late fine
pub fn return_book(
    output: &Output,
    member_id: MemberId,
    book_id: BookId,
    today: NaiveDate,
) -> Result<()> {
    output.verbose_ctx(
        "return",
        &format!("Member {} returning book {} on {}", member_id, book_id, today),
    );

    let receipt =
        update_library(output, |library| Ok(library.return_book(member_id, book_id, today)?))?;

    output.verbose_ctx("return", &format!("Held for {} days", receipt.days_held));

    if output.is_json() {
        output.data(&receipt);
    } else {
        if receipt.fine > 0 {
            println!("Late return! Fine: {}", receipt.fine);
        }
        output.success(&format!("Book returned: {}", receipt.title));
    }

    Ok(())
}

/// Show catalog and registry counts
pub fn stats(output: &Output) -> Result<()> {
    let stats = read_library(output)?.stats();

    if output.is_json() {
        output.data(&stats);
    } else {
        println!("Library Statistics");
        println!("{}", "-".repeat(24));
        println!("Total Books:     {}", stats.total_books);
        println!("Available Books: {}", stats.available_books);
        println!("Borrowed Books:  {}", stats.borrowed_books);
        println!("Total Members:   {}", stats.total_members);
    }

    Ok(())
}
