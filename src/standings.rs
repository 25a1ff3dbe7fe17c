//! Standings computation.
//!
//! Turns the raw player and match collections into an ordered ranking.
//! Pure and stateless: the aggregation happens entirely in memory over the
//! collections passed in, so it can be unit-tested with no live store.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use crate::models::{MatchRecord, Player, PlayerId, Standing};

/// Errors from standings computation.
#[derive(Debug, Error)]
pub enum StandingsError {
    /// A match references a player id absent from the player collection.
    /// Surfaced to the caller rather than silently dropping the match.
    #[error("match references unregistered player id {id}")]
    UnknownPlayer { id: PlayerId },
}

/// Compute the current standings, ordered best first.
///
/// For each registered player, `wins` is the number of matches won and
/// `matches` the number of matches played (winner or loser side). Players
/// with no matches appear with (0, 0), so the result always has one entry
/// per registered player.
///
/// Ordering is wins descending; ties are broken by player id ascending,
/// which makes the output deterministic regardless of the order of the
/// input collections.
pub fn compute_standings(
    players: &[Player],
    matches: &[MatchRecord],
) -> Result<Vec<Standing>, StandingsError> {
    // BTreeMap keeps tallies keyed in id order, which is the tie-break key.
    let mut tallies: BTreeMap<PlayerId, (u32, u32)> = BTreeMap::new();
    for player in players {
        tallies.insert(player.id, (0, 0));
    }

    for m in matches {
        {
            let (wins, played) = tallies
                .get_mut(&m.winner)
                .ok_or(StandingsError::UnknownPlayer { id: m.winner })?;
            *wins += 1;
            *played += 1;
        }
        {
            let (_, played) = tallies
                .get_mut(&m.loser)
                .ok_or(StandingsError::UnknownPlayer { id: m.loser })?;
            *played += 1;
        }
    }

    let usernames: BTreeMap<PlayerId, &str> = players
        .iter()
        .map(|p| (p.id, p.username.as_str()))
        .collect();

    let mut standings: Vec<Standing> = tallies
        .into_iter()
        .map(|(id, (wins, played))| Standing::new(id, usernames[&id].to_string(), wins, played))
        .collect();

    // Stable sort over an id-ordered vector: equal win counts stay in id
    // ascending order.
    standings.sort_by(|a, b| b.wins.cmp(&a.wins));

    debug!(
        players = players.len(),
        matches = matches.len(),
        "computed standings"
    );
    Ok(standings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn player(id: u64, name: &str) -> Player {
        Player::new(PlayerId::new(id), name.to_string())
    }

    fn result(winner: u64, loser: u64) -> MatchRecord {
        MatchRecord::new(PlayerId::new(winner), PlayerId::new(loser))
    }

    #[test]
    fn test_no_matches_all_zero() {
        let players = vec![player(1, "Alice"), player(2, "Bob"), player(3, "Carol")];

        let standings = compute_standings(&players, &[]).unwrap();

        assert_eq!(standings.len(), 3);
        for standing in &standings {
            assert_eq!(standing.wins, 0);
            assert_eq!(standing.matches, 0);
        }
    }

    #[test]
    fn test_empty_players_empty_standings() {
        let standings = compute_standings(&[], &[]).unwrap();
        assert!(standings.is_empty());
    }

    #[test]
    fn test_win_and_match_counts() {
        let players = vec![player(1, "Alice"), player(2, "Bob")];
        let matches = vec![result(1, 2), result(1, 2), result(2, 1)];

        let standings = compute_standings(&players, &matches).unwrap();

        assert_eq!(standings[0].player_id, PlayerId::new(1));
        assert_eq!(standings[0].wins, 2);
        assert_eq!(standings[0].matches, 3);
        assert_eq!(standings[1].wins, 1);
        assert_eq!(standings[1].matches, 3);
    }

    #[test]
    fn test_ordered_by_wins_descending() {
        let players = vec![player(1, "Alice"), player(2, "Bob"), player(3, "Carol")];
        // Carol 2 wins, Bob 1 win, Alice 0
        let matches = vec![result(3, 1), result(3, 2), result(2, 1)];

        let standings = compute_standings(&players, &matches).unwrap();

        assert_eq!(standings[0].player_id, PlayerId::new(3));
        assert_eq!(standings[1].player_id, PlayerId::new(2));
        assert_eq!(standings[2].player_id, PlayerId::new(1));
    }

    #[test]
    fn test_ties_broken_by_id_ascending() {
        // Registered out of id order; ties must still come out id ascending.
        let players = vec![player(4, "Dave"), player(2, "Bob"), player(3, "Carol")];

        let standings = compute_standings(&players, &[]).unwrap();

        let ids: Vec<u64> = standings.iter().map(|s| s.player_id.as_u64()).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_four_player_scenario() {
        // A, B, C, D register in order; A beats B, C beats D.
        let players = vec![
            player(1, "A"),
            player(2, "B"),
            player(3, "C"),
            player(4, "D"),
        ];
        let matches = vec![result(1, 2), result(3, 4)];

        let standings = compute_standings(&players, &matches).unwrap();

        let summary: Vec<(&str, u32, u32)> = standings
            .iter()
            .map(|s| (s.username.as_str(), s.wins, s.matches))
            .collect();
        assert_eq!(
            summary,
            vec![("A", 1, 1), ("C", 1, 1), ("B", 0, 1), ("D", 0, 1)]
        );
    }

    #[test]
    fn test_unknown_winner_rejected() {
        let players = vec![player(1, "Alice")];
        let matches = vec![result(99, 1)];

        let err = compute_standings(&players, &matches).unwrap_err();
        assert!(matches!(
            err,
            StandingsError::UnknownPlayer { id } if id == PlayerId::new(99)
        ));
    }

    #[test]
    fn test_unknown_loser_rejected() {
        let players = vec![player(1, "Alice")];
        let matches = vec![result(1, 99)];

        let err = compute_standings(&players, &matches).unwrap_err();
        assert!(matches!(
            err,
            StandingsError::UnknownPlayer { id } if id == PlayerId::new(99)
        ));
    }

    #[test]
    fn test_deterministic_across_calls() {
        let players = vec![player(2, "Bob"), player(1, "Alice"), player(3, "Carol")];
        let matches = vec![result(1, 2), result(3, 2)];

        let first = compute_standings(&players, &matches).unwrap();
        let second = compute_standings(&players, &matches).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_match_count_at_least_wins() {
        let players = vec![player(1, "Alice"), player(2, "Bob"), player(3, "Carol")];
        let matches = vec![result(1, 2), result(2, 3), result(1, 3), result(3, 1)];

        let standings = compute_standings(&players, &matches).unwrap();
        for standing in &standings {
            assert!(standing.matches >= standing.wins);
        }
    }
}
