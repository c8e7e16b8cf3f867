//! Moves a player can make.
//!
//! A move is either `Pass` or a play of `count` cards that counts as
//! `rank`. Which physical cards leave the hand (natural cards first,
//! wildcards for any shortfall) is decided when the play is applied.

use serde::{Deserialize, Serialize};

use super::rank::Rank;

/// A single decision.
///
/// `Pass` is the default move: search drivers return it when a position
/// offers nothing else.
///
/// ```
/// use rust_dalmuti::core::{Move, Rank};
///
/// let play = Move::play(Rank::new(3), 2);
/// assert_eq!(play.count(), 2);
/// assert!(Move::default().is_pass());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action_type", rename_all = "snake_case")]
pub enum Move {
    #[default]
    Pass,
    Play { rank: Rank, count: u8 },
}

impl Move {
    #[must_use]
    pub const fn play(rank: Rank, count: u8) -> Self {
        Move::Play { rank, count }
    }

    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }

    /// Cards played (zero for a pass).
    #[must_use]
    pub const fn count(&self) -> u8 {
        match self {
            Move::Pass => 0,
            Move::Play { count, .. } => *count,
        }
    }

    #[must_use]
    pub const fn rank(&self) -> Option<Rank> {
        match self {
            Move::Pass => None,
            Move::Play { rank, .. } => Some(*rank),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Pass => write!(f, "pass"),
            Move::Play { rank, count } => write!(f, "{count} x {rank}"),
        }
    }
}
