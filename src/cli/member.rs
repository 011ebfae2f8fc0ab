//! Member CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::book::truncate;
use super::output::Output;
use super::session::{read_library, update_library};
use crate::domain::{Library, Member, MemberId, BORROW_LIMIT};

#[derive(Subcommand)]
pub enum MemberCommands {
    /// Register a member
    ///
    /// Example:
    ///   library member add 1 "Bob"
    Add {
        /// Member ID (must not already exist)
        id: MemberId,

        /// Member name
        name: String,
    },

    /// List all members
    List,

    /// Show a member and the books they hold
    Show {
        /// Member ID
        id: MemberId,
    },
}

pub fn run(cmd: MemberCommands, output: &Output) -> Result<()> {
    match cmd {
        MemberCommands::Add { id, name } => add_member(output, id, name),
        MemberCommands::List => list_members(output),
        MemberCommands::Show { id } => show_member(output, id),
    }
}

fn add_member(output: &Output, id: MemberId, name: String) -> Result<()> {
    let member = update_library(output, |library| Ok(library.add_member(id, name)?.clone()))?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "id": member.id,
            "name": member.name,
            "borrowed_books": member.borrowed_books,
        }));
    } else {
        output.success(&format!("Member added: {} - {}", member.id, member.name));
    }

    Ok(())
}

fn list_members(output: &Output) -> Result<()> {
    let library = read_library(output)?;
    let members = library.members();

    if output.is_json() {
        let items: Vec<_> = members.iter().map(|m| member_json(&library, m)).collect();
        output.data(&items);
    } else if members.is_empty() {
        println!("No members available.");
    } else {
        println!("{:<6} {:<30} BORROWED", "ID", "NAME");
        println!("{}", "-".repeat(48));
        for member in members {
            println!(
                "{:<6} {:<30} {}/{}",
                member.id,
                truncate(&member.name, 30),
                member.borrowed_count(),
                BORROW_LIMIT
            );
        }
    }

    Ok(())
}

fn show_member(output: &Output, id: MemberId) -> Result<()> {
    let library = read_library(output)?;
    let member = library
        .find_member(id)
        .ok_or_else(|| anyhow::anyhow!("Member not found: {}", id))?;

    if output.is_json() {
        output.data(&member_json(&library, member));
        return Ok(());
    }

    println!("ID:       {}", member.id);
    println!("Name:     {}", member.name);
    println!("Borrowed: {}/{}", member.borrowed_count(), BORROW_LIMIT);

    let held = library.borrowed_by(member);
    if !held.is_empty() {
        println!();
        println!("{:<6} {:<30} SINCE", "ID", "TITLE");
        println!("{}", "-".repeat(48));
        for book in held {
            let since = book
                .borrow_date()
                .map(|d| d.to_string())
                .unwrap_or_default();
            println!("{:<6} {:<30} {}", book.id, truncate(&book.title, 30), since);
        }
    }

    Ok(())
}

fn member_json(library: &Library, member: &Member) -> serde_json::Value {
    let held: Vec<_> = library
        .borrowed_by(member)
        .into_iter()
        .map(|book| {
            serde_json::json!({
                "id": book.id,
                "title": book.title,
                "since": book.borrow_date(),
            })
        })
        .collect();

    serde_json::json!({
        "id": member.id,
        "name": member.name,
        "borrowed_books": member.borrowed_books,
        "borrowed": held,
    })
}
