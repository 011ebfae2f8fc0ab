//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Command Groups
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | Core | Workspace setup | `init`, `stats` |
//! | Book | Catalog management | `book add`, `book list`, `book show`, `search` |
//! | Member | Registry management | `member add`, `member list`, `member show` |
//! | Lending | Loans and fines | `borrow`, `return` |
//! | Interactive | Menu-driven session | `shell` |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output:
//! ```bash
//! library --verbose borrow 1 42
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod book;
mod loan;
mod member;
mod output;
mod session;
mod shell;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
pub use shell::{run_session, SessionEnd};
