//! Pairing model — an assignment of two players for the next round.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// A single next-round pairing between two players.
///
/// Derived on demand by the pairing engine; never persisted. The two
/// players are always distinct, and within one round's result no player
/// appears in more than one pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    /// First player
    pub player1_id: PlayerId,

    /// First player's username
    pub player1_username: String,

    /// Second player
    pub player2_id: PlayerId,

    /// Second player's username
    pub player2_username: String,
}

impl Pairing {
    /// Create a new Pairing.
    pub fn new(
        player1_id: PlayerId,
        player1_username: String,
        player2_id: PlayerId,
        player2_username: String,
    ) -> Self {
        Self {
            player1_id,
            player1_username,
            player2_id,
            player2_username,
        }
    }

    /// Check whether the given player takes part in this pairing.
    pub fn involves(&self, player: PlayerId) -> bool {
        self.player1_id == player || self.player2_id == player
    }
}
