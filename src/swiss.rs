//! Swiss pairing engine.
//!
//! Consumes a ranked standings sequence and produces the next round's
//! pairings: bye selection when the player count is odd, then adjacent
//! pairing in rank order. Stateless: safe to call repeatedly and
//! concurrently, since it operates only on its input.

use thiserror::Error;
use tracing::debug;

use crate::models::{Pairing, Standing};

/// Errors from pairing generation.
#[derive(Debug, Error)]
pub enum PairingError {
    /// The working set was still odd after bye removal. Unreachable in
    /// correct operation; a defect signal, never to be swallowed.
    #[error("internal invariant violated: {0} players remain after bye removal")]
    InvariantViolation(usize),
}

/// Generate the next round's pairings from ranked standings.
///
/// The input is expected to be ranked as produced by
/// [`compute_standings`](crate::standings::compute_standings).
///
/// With an odd number of standings, exactly one player sits the round out:
/// the first player in ranked order whose match count equals the maximum
/// match count across all standings. Biasing the bye toward the most-played
/// player is a coarse approximation of spreading byes over time; it does
/// not track whether a player already had a bye, and since a bye creates no
/// match record the same player can be selected again next round.
///
/// The remaining players are paired adjacently in rank order: (0,1), (2,3),
/// and so on. Nearest-ranked opponents approximate the Swiss ideal of
/// similar-strength matches without solving an optimal matching; there is
/// no rematch avoidance and no seat balancing.
///
/// Returns `floor(n/2)` pairings for `n` input standings, covering every
/// non-bye player exactly once.
pub fn generate_pairings(standings: &[Standing]) -> Result<Vec<Pairing>, PairingError> {
    let mut working: Vec<&Standing> = standings.iter().collect();

    if working.len() % 2 == 1 {
        let bye = select_bye(&working);
        let sat_out = working.remove(bye);
        debug!(
            player = %sat_out.player_id,
            matches = sat_out.matches,
            "odd player count, assigning bye"
        );
    }

    if working.len() % 2 != 0 {
        return Err(PairingError::InvariantViolation(working.len()));
    }

    let pairings: Vec<Pairing> = working
        .chunks_exact(2)
        .map(|pair| {
            Pairing::new(
                pair[0].player_id,
                pair[0].username.clone(),
                pair[1].player_id,
                pair[1].username.clone(),
            )
        })
        .collect();

    debug!(
        standings = standings.len(),
        pairings = pairings.len(),
        "generated pairings"
    );
    Ok(pairings)
}

/// Index of the bye recipient: the first player in ranked order attaining
/// the maximum match count. Only called with a non-empty working set.
fn select_bye(working: &[&Standing]) -> usize {
    let most_matches = working.iter().map(|s| s.matches).max().unwrap_or(0);
    working
        .iter()
        .position(|s| s.matches == most_matches)
        .unwrap_or(0)
}
