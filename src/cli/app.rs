//! Main CLI application structure

use std::io;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use super::book::{self, BookCommands, SearchBy};
use super::loan;
use super::member::{self, MemberCommands};
use super::output::{Output, OutputFormat};
use super::shell::{self, SessionEnd};
use crate::domain::{BookId, MemberId};
use crate::storage::{load_or_cold_start, Config, Persistence, Workspace};

#[derive(Parser)]
#[command(name = "library")]
#[command(author, version, about = "Local-first library catalog: books, members, loans and fines")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the global config, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Treat this date (YYYY-MM-DD) as today for borrowing and fines
    #[arg(long, global = true, env = "LIBRARY_TODAY", hide = true)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new library workspace
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,
    },

    /// Manage the book catalog
    #[command(subcommand)]
    Book(BookCommands),

    /// Manage members
    #[command(subcommand)]
    Member(MemberCommands),

    /// Search books by id, title or author
    ///
    /// Title and author searches are case-insensitive substring matches.
    Search {
        /// Field to search
        #[arg(value_enum)]
        by: SearchBy,

        /// Book id, or text to look for
        query: String,
    },

    /// Lend a book to a member
    Borrow {
        /// Member ID
        member: MemberId,

        /// Book ID
        book: BookId,
    },

    /// Return a borrowed book (reports any late fine)
    Return {
        /// Member ID
        member: MemberId,

        /// Book ID
        book: BookId,
    },

    /// Show catalog statistics
    Stats,

    /// Interactive menu (login required)
    Shell,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = match cli.format {
        Some(format) => format,
        None => Config::load()?.global.default_format.into(),
    };
    let output = Output::new(format, cli.verbose);
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    output.verbose("Library CLI starting");
    output.verbose(&format!("Today is {}", today));

    match cli.command {
        Commands::Init { path } => {
            output.verbose_ctx("init", &format!("Initializing workspace at: {}", path));
            let workspace = Workspace::init(&path)?;
            output.verbose_ctx(
                "init",
                &format!("Created directory at: {}", workspace.library_dir().display()),
            );
            output.success(&format!(
                "Initialized library workspace at {}",
                workspace.root().display()
            ));
        }

        Commands::Book(cmd) => book::run(cmd, &output)?,
        Commands::Member(cmd) => member::run(cmd, &output)?,

        Commands::Search { by, query } => book::search(&output, by, &query)?,

        Commands::Borrow { member, book } => loan::borrow(&output, member, book, today)?,
        Commands::Return { member, book } => loan::return_book(&output, member, book, today)?,
        Commands::Stats => loan::stats(&output)?,

        Commands::Shell => run_shell(&output, today)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}

/// Runs the interactive menu on stdin/stdout, holding the store lock
/// for the whole session
fn run_shell(output: &Output, today: NaiveDate) -> Result<()> {
    let workspace = Workspace::open_current()?;
    let store = workspace.store();
    let _lock = store.lock_exclusive()?;

    let (mut library, failure) = load_or_cold_start(&store);
    match failure {
        None => println!("Data loaded successfully!"),
        Some(e) => {
            if !e.is_not_found() {
                output.warn(&e.to_string());
            }
            println!("No previous data found, starting fresh.");
        }
    }
    for problem in library.check_consistency() {
        output.warn(&format!("Inconsistent data: {}", problem));
    }

    let stdin = io::stdin();
    let end = shell::run_session(
        &mut library,
        &workspace.config().project.admin,
        today,
        stdin.lock(),
        io::stdout(),
    )
    .context("Shell input/output failed")?;

    match end {
        SessionEnd::LoginFailed => anyhow::bail!("Login failed"),
        SessionEnd::SaveAndExit => {
            store.save(&library).context("Data was not saved")?;
            println!("Data saved. Exiting...");
        }
    }

    Ok(())
}
