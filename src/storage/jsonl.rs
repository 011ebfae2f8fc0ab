//! JSONL storage for records
//!
//! Records are stored one JSON object per line, in collection order.
//! Uses file locking for concurrent access safety.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Store for an ordered collection of records in JSONL format
pub struct JsonlStore<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonlStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a new store at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the store file exists
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Reads all records in file order
    pub fn read_all(&self) -> Result<Vec<T>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open store: {}", self.path.display()))?;

        // Acquire shared lock for reading
        file.lock_shared()
            .with_context(|| format!("Failed to acquire read lock on {}", self.path.display()))?;

        let reader = BufReader::new(&file);
        let mut records = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read line {}", line_num + 1))?;

            if line.trim().is_empty() {
                continue;
            }

            let record: T = serde_json::from_str(&line).with_context(|| {
                format!(
                    "Failed to parse record at {}:{}",
                    self.path.display(),
                    line_num + 1
                )
            })?;

            records.push(record);
        }

        // Lock is released when file is dropped
        Ok(records)
    }

    /// Writes all records to the store (full rewrite)
    pub fn write_all(&self, records: &[T]) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        // Write to temp file first
        let temp_path = self.path.with_extension("jsonl.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            // Acquire exclusive lock
            file.lock_exclusive()
                .with_context(|| format!("Failed to acquire write lock on {}", temp_path.display()))?;

            let mut writer = BufWriter::new(&file);

            for record in records {
                let line = serde_json::to_string(record).context("Failed to serialize record")?;
                writeln!(writer, "{}", line).context("Failed to write record")?;
            }

            writer.flush().context("Failed to flush store")?;
        }

        // Atomic rename
        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}
