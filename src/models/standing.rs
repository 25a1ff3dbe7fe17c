//! Derived standing model — a player's win/match record used for ranking.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// A player's position in the current standings.
///
/// Derived on demand from the player and match collections; never
/// persisted. `matches` counts every match the player took part in, so
/// `matches >= wins` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Player this standing belongs to
    pub player_id: PlayerId,

    /// Player username (as registered)
    pub username: String,

    /// Number of matches won
    pub wins: u32,

    /// Number of matches played (wins + losses)
    pub matches: u32,
}

impl Standing {
    /// Create a new Standing.
    pub fn new(player_id: PlayerId, username: String, wins: u32, matches: u32) -> Self {
        Self {
            player_id,
            username,
            wins,
            matches,
        }
    }

    /// Number of matches lost.
    pub fn losses(&self) -> u32 {
        self.matches - self.wins
    }
}
