//! File-backed store for player and match records.
//!
//! The store keeps two JSONL files under a configured data directory:
//! - `players.jsonl`: one registered player per line
//! - `matches.jsonl`: one reported match outcome per line
//!
//! Every mutation goes through a scoped file transaction ([`txn::FileTxn`])
//! that stages the new contents beside the target and commits with an
//! atomic rename, so a failed write leaves no partial visible state.

mod jsonl;
mod store;
mod txn;

pub use jsonl::JsonlFile;
pub use store::{StoreError, TournamentStore};
pub use txn::FileTxn;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations.
///
/// Write failures surface here after the transaction guard has discarded
/// any staged state; the caller sees either the full effect of an
/// operation or none of it.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn players_path(&self) -> PathBuf {
        self.data_dir.join("players.jsonl")
    }

    pub fn matches_path(&self) -> PathBuf {
        self.data_dir.join("matches.jsonl")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}
