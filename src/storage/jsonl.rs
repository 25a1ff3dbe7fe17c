//! JSONL (JSON Lines) record files.
//!
//! Each line is a valid JSON object representing one record. Reads are
//! plain buffered scans; writes go through [`FileTxn`](super::FileTxn) so
//! they commit atomically.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::StorageError;

/// Typed read access to one JSONL file.
pub struct JsonlFile<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlFile<T> {
    /// Create a handle for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// The underlying file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Check if the file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read all records. A missing file reads as an empty collection.
    ///
    /// Unparseable lines are skipped with a warning rather than failing the
    /// whole read; the store never writes such lines itself.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();
        let mut line_num = 0;

        for line in reader.lines() {
            line_num += 1;
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(
                        line = line_num,
                        path = %self.path.display(),
                        error = %e,
                        "skipping unparseable record"
                    );
                }
            }
        }

        debug!(
            count = records.len(),
            path = %self.path.display(),
            "read records"
        );
        Ok(records)
    }

    /// Count records in the file without deserializing them.
    pub fn count(&self) -> Result<u64, StorageError> {
        if !self.path.exists() {
            return Ok(0);
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut count = 0u64;
        for line in reader.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                count += 1;
            }
        }

        Ok(count)
    }
}
