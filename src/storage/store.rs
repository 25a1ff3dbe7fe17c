//! The tournament store: registration, match reporting, and the derived
//! standings/pairings views over the persisted collections.

use thiserror::Error;
use tracing::{debug, info};

use crate::models::{MatchRecord, Pairing, Player, PlayerId, Standing};
use crate::standings::{compute_standings, StandingsError};
use crate::storage::{FileTxn, JsonlFile, StorageConfig, StorageError};
use crate::swiss::{generate_pairings, PairingError};

/// Errors surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Standings(#[from] StandingsError),

    #[error(transparent)]
    Pairing(#[from] PairingError),
}

/// A file-backed store of players and matches.
///
/// Each write rewrites the affected JSONL file through a scoped
/// transaction, so a failure mid-operation leaves no partial state. The
/// store holds no in-memory state between calls and no locks; concurrent
/// writers are governed only by the filesystem's rename atomicity.
pub struct TournamentStore {
    config: StorageConfig,
}

impl TournamentStore {
    /// Open a store over the configured data directory. The directory and
    /// record files are created lazily on first write.
    pub fn open(config: StorageConfig) -> Self {
        Self { config }
    }

    fn players_file(&self) -> JsonlFile<Player> {
        JsonlFile::new(self.config.players_path())
    }

    fn matches_file(&self) -> JsonlFile<MatchRecord> {
        JsonlFile::new(self.config.matches_path())
    }

    /// Register a new player. The store assigns the id; the username is
    /// stored as given, with no uniqueness check.
    pub fn create_player(&self, username: &str) -> Result<PlayerId, StoreError> {
        let mut players = self.players_file().read_all()?;

        let next = players
            .iter()
            .map(|p| p.id.as_u64())
            .max()
            .map_or(1, |m| m + 1);
        let id = PlayerId::new(next);
        players.push(Player::new(id, username.to_string()));

        let mut txn = FileTxn::begin(&self.config.players_path())?;
        txn.write_records(&players)?;
        txn.commit()?;

        info!(%id, username, "registered player");
        Ok(id)
    }

    /// Remove all players and, cascading, all matches referencing them.
    pub fn reset_players(&self) -> Result<(), StoreError> {
        // Matches reference players, so they go first; each file commit is
        // individually atomic.
        FileTxn::begin(&self.config.matches_path())?.commit()?;
        FileTxn::begin(&self.config.players_path())?.commit()?;

        info!("removed all players and matches");
        Ok(())
    }

    /// Remove all match records without affecting players.
    pub fn reset_matches(&self) -> Result<(), StoreError> {
        FileTxn::begin(&self.config.matches_path())?.commit()?;

        info!("removed all matches");
        Ok(())
    }

    /// Number of currently registered players.
    pub fn count_players(&self) -> Result<u64, StoreError> {
        Ok(self.players_file().count()?)
    }

    /// All registered players, in registration order.
    pub fn list_players(&self) -> Result<Vec<Player>, StoreError> {
        Ok(self.players_file().read_all()?)
    }

    /// All reported matches, in report order.
    pub fn list_matches(&self) -> Result<Vec<MatchRecord>, StoreError> {
        Ok(self.matches_file().read_all()?)
    }

    /// Record the outcome of a single match.
    ///
    /// Does not check that either id is registered, and places no limit on
    /// rematches between the same players. Unregistered ids surface later
    /// as a validation error when standings are computed.
    pub fn record_match(&self, winner: PlayerId, loser: PlayerId) -> Result<(), StoreError> {
        let mut matches = self.matches_file().read_all()?;
        matches.push(MatchRecord::new(winner, loser));

        let mut txn = FileTxn::begin(&self.config.matches_path())?;
        txn.write_records(&matches)?;
        txn.commit()?;

        debug!(%winner, %loser, "recorded match");
        Ok(())
    }

    /// Current standings, ranked best first (wins descending, ties by
    /// player id ascending).
    pub fn player_standings(&self) -> Result<Vec<Standing>, StoreError> {
        let players = self.players_file().read_all()?;
        let matches = self.matches_file().read_all()?;
        Ok(compute_standings(&players, &matches)?)
    }

    /// Next-round pairings derived from the current standings.
    pub fn swiss_pairings(&self) -> Result<Vec<Pairing>, StoreError> {
        let standings = self.player_standings()?;
        Ok(generate_pairings(&standings)?)
    }
}
