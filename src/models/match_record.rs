//! Match outcome model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PlayerId;

/// The recorded outcome of a single match between two players.
///
/// Directional: the winner is always listed first. Draws are not
/// representable, and nothing at this layer prevents a player from being
/// recorded against themselves or an unregistered id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Winning player
    pub winner: PlayerId,

    /// Losing player
    pub loser: PlayerId,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl MatchRecord {
    /// Create a new MatchRecord.
    pub fn new(winner: PlayerId, loser: PlayerId) -> Self {
        Self {
            winner,
            loser,
            created_at: Utc::now(),
        }
    }

    /// Check whether the given player took part in this match.
    pub fn involves(&self, player: PlayerId) -> bool {
        self.winner == player || self.loser == player
    }
}
