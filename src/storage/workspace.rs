//! Workspace management
//!
//! Handles workspace initialization and provides access to the store.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::config::WORKSPACE_DIR;
use super::{Config, FileStore};

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("Not in a library workspace. Run 'library init' first.")]
    NotInWorkspace,
}

/// A library workspace: a directory containing `.library/`
pub struct Workspace {
    root: PathBuf,
    config: Config,
}

impl Workspace {
    /// Opens an existing workspace at the given path
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.join(WORKSPACE_DIR).is_dir() {
            return Err(WorkspaceError::NotInWorkspace.into());
        }

        let config = Config::for_project(&root)?;

        Ok(Self { root, config })
    }

    /// Opens the workspace at the current directory or a parent
    pub fn open_current() -> Result<Self> {
        let root = Config::find_workspace_root().ok_or(WorkspaceError::NotInWorkspace)?;

        Self::open(root)
    }

    /// Initializes a new workspace at the given path
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let library_dir = root.join(WORKSPACE_DIR);

        fs::create_dir_all(&library_dir).with_context(|| {
            format!(
                "Failed to create {} directory: {}",
                WORKSPACE_DIR,
                library_dir.display()
            )
        })?;

        // Create default config
        let config_path = library_dir.join("config.toml");
        if !config_path.exists() {
            let default_config = r#"# Library CLI configuration

# Where books.jsonl and members.jsonl live, relative to this workspace
data_dir = ".library"

# Login for `library shell`
[admin]
username = "admin"
password = "1234"
"#;
            fs::write(&config_path, default_config)
                .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
        }

        let gitignore_path = library_dir.join(".gitignore");
        if !gitignore_path.exists() {
            let gitignore = r#"# Lock file and interrupted writes
lock
*.tmp
"#;
            fs::write(&gitignore_path, gitignore).with_context(|| {
                format!("Failed to write .gitignore: {}", gitignore_path.display())
            })?;
        }

        Self::open(root)
    }

    /// Returns the workspace root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the .library directory path
    pub fn library_dir(&self) -> PathBuf {
        self.root.join(WORKSPACE_DIR)
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the directory holding the data files
    pub fn data_dir(&self) -> PathBuf {
        self.root.join(&self.config.project.data_dir)
    }

    /// Returns the book/member store
    pub fn store(&self) -> FileStore {
        FileStore::new(self.data_dir())
    }
}
