//! # Storage Layer
//!
//! Persistence layer for the library with git-friendly file formats.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Books | JSONL (one JSON per line) | `.library/books.jsonl` |
//! | Members | JSONL (one JSON per line) | `.library/members.jsonl` |
//! | Config | TOML | `.library/config.toml` |
//!
//! ## Concurrency Safety
//!
//! - [`FileStore`] takes a store-wide `fs2` lock (`.library/lock`); mutating
//!   commands hold it exclusively from load to save
//! - All writes are atomic (temp file + rename)
//!
//! ## Workspace Structure
//!
//! ```text
//! .library/
//! ├── books.jsonl           # Catalog, in insertion order
//! ├── members.jsonl         # Registry, in insertion order
//! ├── config.toml           # Workspace configuration
//! ├── lock                  # Store-wide lock file
//! └── .gitignore            # Ignores the lock and temp files
//! ```
//!
//! ## Key Types
//!
//! - [`Workspace`] - Entry point for accessing a library workspace
//! - [`Persistence`] - Load/save contract for the whole library
//! - [`FileStore`] - JSONL-backed [`Persistence`]
//! - [`Config`] - Workspace and global configuration

mod config;
mod jsonl;
mod persistence;
mod workspace;

pub use config::{
    AdminConfig, Config, ConfigError, DefaultFormat, GlobalConfig, ProjectConfig, WORKSPACE_DIR,
};
pub use jsonl::JsonlStore;
pub use persistence::{
    load_or_cold_start, FileStore, MemoryPersistence, Persistence, PersistenceError, StoreLock,
};
pub use workspace::{Workspace, WorkspaceError};
