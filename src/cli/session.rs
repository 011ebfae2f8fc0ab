//! Loading and saving the library around a command
//!
//! Read-only commands hold the store's shared lock while loading; mutating
//! commands hold the exclusive lock from load to save so that two
//! processes never interleave a borrow or return.

use anyhow::{Context, Result};

use super::output::Output;
use crate::domain::Library;
use crate::storage::{load_or_cold_start, FileStore, Persistence, Workspace};

/// Loads the library for reading
pub fn read_library(output: &Output) -> Result<Library> {
    let workspace = Workspace::open_current()?;
    let store = workspace.store();
    let _lock = store.lock_shared()?;

    Ok(load(&store, output))
}

/// Loads the library, applies `change` and saves the result
///
/// Nothing is written if `change` fails.
pub fn update_library<T>(
    output: &Output,
    change: impl FnOnce(&mut Library) -> Result<T>,
) -> Result<T> {
    let workspace = Workspace::open_current()?;
    let store = workspace.store();
    let _lock = store.lock_exclusive()?;

    let mut library = load(&store, output);
    let value = change(&mut library)?;

    store
        .save(&library)
        .context("Changes were not saved")?;
    output.verbose_ctx(
        "store",
        &format!(
            "Saved {} books and {} members to {}",
            library.books().len(),
            library.members().len(),
            store.dir().display()
        ),
    );

    Ok(value)
}

/// Loads with cold start, reporting what happened
fn load(store: &FileStore, output: &Output) -> Library {
    let (library, failure) = load_or_cold_start(store);

    match failure {
        None => output.verbose_ctx(
            "store",
            &format!(
                "Loaded {} books and {} members from {}",
                library.books().len(),
                library.members().len(),
                store.dir().display()
            ),
        ),
        Some(e) if e.is_not_found() => {
            output.verbose_ctx("store", "No previous data found, starting fresh")
        }
        Some(e) => output.warn(&format!("{}; starting fresh", e)),
    }

    for problem in library.check_consistency() {
        output.warn(&format!("Inconsistent data: {}", problem));
    }

    library
}
