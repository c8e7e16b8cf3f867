//! Errors raised at the crate's edges.
//!
//! The rules engine itself never returns errors: moves are validated with
//! `is_valid_move` / `legal_moves` before the mutators are called. The
//! variants below cover construction, configuration and the game driver.

use thiserror::Error;

use crate::core::PlayerId;

/// Errors produced while building games, loading configuration or driving play.
#[derive(Debug, Error)]
pub enum DalmutiError {
    #[error("player count must be between 2 and 8, got {0}")]
    InvalidPlayerCount(usize),

    #[error("unknown player style: {0:?}")]
    UnknownStyle(String),

    #[error("rank {0} is outside 1..=13")]
    InvalidRank(u8),

    #[error("invalid deal: {0}")]
    InvalidDeal(String),

    #[error("initial leader {0} is not seated")]
    InvalidLeader(PlayerId),

    #[error("{strategies} strategies given for {seats} seats")]
    SeatMismatch { seats: usize, strategies: usize },

    #[error("{0} has no automated strategy")]
    HumanSeat(PlayerId),

    #[error("game did not finish within {0} turns")]
    TurnLimit(u32),

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results carrying a [`DalmutiError`].
pub type Result<T> = std::result::Result<T, DalmutiError>;
