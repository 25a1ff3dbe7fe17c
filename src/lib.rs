//! # Swiss Rounds
//!
//! A Swiss-system tournament core: players register, match outcomes are
//! recorded, standings are derived, and pairings for the next round are
//! generated.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (players, matches, standings, pairings)
//! - **standings**: Pure standings computation over the raw collections
//! - **swiss**: The pairing engine (bye selection and adjacent pairing)
//! - **storage**: File-backed store with scoped transactional writes
//! - **config**: Configuration loading and validation
//!
//! The ranking and pairing functions are pure and hold no state between
//! calls; only the store touches the filesystem. The fairness policy is
//! deliberately simple: adjacent-rank pairing with no rematch avoidance,
//! and an odd player count sits out the player with the most matches
//! played (first in rank order on ties).

pub mod config;
pub mod models;
pub mod standings;
pub mod storage;
pub mod swiss;

pub use models::*;
pub use standings::compute_standings;
pub use swiss::generate_pairings;
