//! Persistence adapter for the catalog and registry
//!
//! The library is loaded once per command (or shell session) and saved
//! back afterwards. A library that cannot be loaded is never fatal: callers
//! go through [`load_or_cold_start`] and continue with empty collections.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use fs2::FileExt;
use thiserror::Error;

use super::jsonl::JsonlStore;
use crate::domain::{Book, Library, Member};

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("No saved library data at {0}")]
    NotFound(PathBuf),

    #[error("Failed to load library data: {0}")]
    LoadFailed(String),

    #[error("Failed to save library data: {0}")]
    SaveFailed(String),
}

impl PersistenceError {
    /// Returns true for a missing store, as opposed to an unreadable one
    pub fn is_not_found(&self) -> bool {
        matches!(self, PersistenceError::NotFound(_))
    }
}

/// Loads and saves the whole library
pub trait Persistence {
    /// Loads both collections
    fn load(&self) -> Result<Library, PersistenceError>;

    /// Saves both collections, replacing whatever was stored
    fn save(&self, library: &Library) -> Result<(), PersistenceError>;
}

/// Loads the library, falling back to an empty one on any failure
///
/// The failure is handed back so the caller can tell the user.
pub fn load_or_cold_start(store: &dyn Persistence) -> (Library, Option<PersistenceError>) {
    match store.load() {
        Ok(library) => (library, None),
        Err(e) => (Library::new(), Some(e)),
    }
}

/// File-backed persistence: `books.jsonl` and `members.jsonl` in one directory
pub struct FileStore {
    dir: PathBuf,
    books: JsonlStore<Book>,
    members: JsonlStore<Member>,
}

impl FileStore {
    /// Creates a store rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            books: JsonlStore::new(dir.join("books.jsonl")),
            members: JsonlStore::new(dir.join("members.jsonl")),
            dir,
        }
    }

    /// Returns the data directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path of the catalog file
    pub fn books_path(&self) -> &Path {
        self.books.path()
    }

    /// Returns the path of the registry file
    pub fn members_path(&self) -> &Path {
        self.members.path()
    }

    /// Takes the store-wide write lock, held until the guard is dropped
    ///
    /// Mutating commands hold this across load, change and save so that
    /// concurrent processes apply their changes one at a time.
    pub fn lock_exclusive(&self) -> Result<StoreLock, PersistenceError> {
        let file = self
            .open_lock_file()
            .map_err(|e| PersistenceError::LoadFailed(e.to_string()))?;
        file.lock_exclusive()
            .map_err(|e| PersistenceError::LoadFailed(format!("Failed to lock store: {}", e)))?;
        Ok(StoreLock { _file: file })
    }

    /// Takes the store-wide read lock, held until the guard is dropped
    pub fn lock_shared(&self) -> Result<StoreLock, PersistenceError> {
        let file = self
            .open_lock_file()
            .map_err(|e| PersistenceError::LoadFailed(e.to_string()))?;
        file.lock_shared()
            .map_err(|e| PersistenceError::LoadFailed(format!("Failed to lock store: {}", e)))?;
        Ok(StoreLock { _file: file })
    }

    fn open_lock_file(&self) -> std::io::Result<File> {
        fs::create_dir_all(&self.dir)?;
        OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(self.dir.join("lock"))
    }
}

impl Persistence for FileStore {
    fn load(&self) -> Result<Library, PersistenceError> {
        match (self.books.exists(), self.members.exists()) {
            (true, true) => {}
            (false, false) => return Err(PersistenceError::NotFound(self.dir.clone())),
            (true, false) => {
                return Err(PersistenceError::LoadFailed(format!(
                    "{} is missing",
                    self.members_path().display()
                )))
            }
            (false, true) => {
                return Err(PersistenceError::LoadFailed(format!(
                    "{} is missing",
                    self.books_path().display()
                )))
            }
        }

        let books = self
            .books
            .read_all()
            .map_err(|e| PersistenceError::LoadFailed(format!("{:#}", e)))?;
        let members = self
            .members
            .read_all()
            .map_err(|e| PersistenceError::LoadFailed(format!("{:#}", e)))?;

        Ok(Library::from_parts(books, members))
    }

    fn save(&self, library: &Library) -> Result<(), PersistenceError> {
        self.books
            .write_all(library.books())
            .map_err(|e| PersistenceError::SaveFailed(format!("{:#}", e)))?;
        self.members
            .write_all(library.members())
            .map_err(|e| PersistenceError::SaveFailed(format!("{:#}", e)))?;
        Ok(())
    }
}

/// Guard for a store-wide lock; the lock is released on drop
pub struct StoreLock {
    _file: File,
}

/// In-memory persistence holding the last saved snapshot
#[derive(Default)]
pub struct MemoryPersistence {
    snapshot: Mutex<Option<Library>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Persistence for MemoryPersistence {
    fn load(&self) -> Result<Library, PersistenceError> {
        let snapshot = self
            .snapshot
            .lock()
            .map_err(|_| PersistenceError::LoadFailed("snapshot lock poisoned".to_string()))?;
        snapshot
            .clone()
            .ok_or_else(|| PersistenceError::NotFound(PathBuf::from("<memory>")))
    }

    fn save(&self, library: &Library) -> Result<(), PersistenceError> {
        let mut snapshot = self
            .snapshot
            .lock()
            .map_err(|_| PersistenceError::SaveFailed("snapshot lock poisoned".to_string()))?;
        *snapshot = Some(library.clone());
        Ok(())
    }
}
