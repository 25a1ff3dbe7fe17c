//! Registered player model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PlayerId;

/// A registered tournament player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier (assigned by the store)
    pub id: PlayerId,

    /// Player username. Free-form text; intended to be unique but this
    /// layer does not enforce it.
    pub username: String,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl Player {
    /// Create a new Player record.
    pub fn new(id: PlayerId, username: String) -> Self {
        Self {
            id,
            username,
            created_at: Utc::now(),
        }
    }
}
