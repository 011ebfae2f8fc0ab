//! Library CLI - a local-first catalog manager for a small library
//!
//! Tracks books and members, lends books with a per-member limit, computes
//! late-return fines and keeps everything in git-friendly JSONL files.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Book, BookId, Library, LibraryError, Member, MemberId};
