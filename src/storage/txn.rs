//! Scoped file transactions.
//!
//! A [`FileTxn`] stages replacement contents for a single file and makes
//! them visible with one atomic rename on commit. Dropping an uncommitted
//! transaction removes the staged file, so every exit path either commits
//! fully or rolls back cleanly.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use super::StorageError;

/// An in-flight replacement of one file's contents.
///
/// `commit()` renames the staged file over the target; until then the
/// target is untouched. If the transaction is dropped without committing
/// (including on an error path), the staged file is deleted.
pub struct FileTxn {
    target: PathBuf,
    staged: PathBuf,
    writer: Option<BufWriter<File>>,
    committed: bool,
}

impl FileTxn {
    /// Begin a transaction against `target`, creating its parent directory
    /// if needed.
    pub fn begin(target: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        let staged = staged_path(target);
        let file = File::create(&staged)?;

        debug!(target = %target.display(), "began file transaction");
        Ok(Self {
            target: target.to_path_buf(),
            staged,
            writer: Some(BufWriter::new(file)),
            committed: false,
        })
    }

    /// Stage one record as a JSONL line.
    pub fn write_record<T: Serialize>(&mut self, record: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(record)?;
        let writer = self.writer.as_mut().expect("transaction still open");
        writeln!(writer, "{}", json)?;
        Ok(())
    }

    /// Stage a batch of records.
    pub fn write_records<T: Serialize>(&mut self, records: &[T]) -> Result<(), StorageError> {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Make the staged contents visible, replacing the target atomically.
    pub fn commit(mut self) -> Result<(), StorageError> {
        let mut writer = self.writer.take().expect("transaction still open");
        writer.flush()?;
        drop(writer);

        fs::rename(&self.staged, &self.target)?;
        self.committed = true;

        debug!(target = %self.target.display(), "committed file transaction");
        Ok(())
    }
}

impl Drop for FileTxn {
    fn drop(&mut self) {
        if !self.committed {
            // Rollback: close the writer, then discard the staged file.
            self.writer.take();
            if let Err(e) = fs::remove_file(&self.staged) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!(
                        staged = %self.staged.display(),
                        error = %e,
                        "failed to remove staged transaction file"
                    );
                }
            }
        }
    }
}

fn staged_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".txn");
    target.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestRecord {
        id: u64,
        name: String,
    }

    #[test]
    fn test_commit_makes_contents_visible() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("records.jsonl");

        let mut txn = FileTxn::begin(&target).unwrap();
        txn.write_record(&TestRecord {
            id: 1,
            name: "first".to_string(),
        })
        .unwrap();
        txn.commit().unwrap();

        let contents = fs::read_to_string(&target).unwrap();
        assert!(contents.contains("first"));
    }

    #[test]
    fn test_target_untouched_until_commit() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("records.jsonl");
        fs::write(&target, "{\"id\":1,\"name\":\"old\"}\n").unwrap();

        let mut txn = FileTxn::begin(&target).unwrap();
        txn.write_record(&TestRecord {
            id: 2,
            name: "new".to_string(),
        })
        .unwrap();

        // Not yet committed; old contents still visible.
        let contents = fs::read_to_string(&target).unwrap();
        assert!(contents.contains("old"));

        txn.commit().unwrap();
        let contents = fs::read_to_string(&target).unwrap();
        assert!(contents.contains("new"));
        assert!(!contents.contains("old"));
    }

    #[test]
    fn test_drop_without_commit_rolls_back() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("records.jsonl");
        fs::write(&target, "{\"id\":1,\"name\":\"old\"}\n").unwrap();

        {
            let mut txn = FileTxn::begin(&target).unwrap();
            txn.write_record(&TestRecord {
                id: 2,
                name: "new".to_string(),
            })
            .unwrap();
            // Dropped here without commit.
        }

        let contents = fs::read_to_string(&target).unwrap();
        assert!(contents.contains("old"));

        // No staged file left behind.
        let leftovers: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".txn"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_commit_empty_truncates_target() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("records.jsonl");
        fs::write(&target, "{\"id\":1,\"name\":\"old\"}\n").unwrap();

        let txn = FileTxn::begin(&target).unwrap();
        txn.commit().unwrap();

        let contents = fs::read_to_string(&target).unwrap();
        assert!(contents.is_empty());
    }

    #[test]
    fn test_begin_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("nested").join("dir").join("f.jsonl");

        let txn = FileTxn::begin(&target).unwrap();
        txn.commit().unwrap();

        assert!(target.exists());
    }

    #[test]
    fn test_write_records_batch() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("batch.jsonl");

        let records = vec![
            TestRecord {
                id: 1,
                name: "a".to_string(),
            },
            TestRecord {
                id: 2,
                name: "b".to_string(),
            },
        ];

        let mut txn = FileTxn::begin(&target).unwrap();
        txn.write_records(&records).unwrap();
        txn.commit().unwrap();

        let contents = fs::read_to_string(&target).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }
}
