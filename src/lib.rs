//! # rust-dalmuti
//!
//! A Great Dalmuti rules engine with MCTS players.
//!
//! ## Design Principles
//!
//! 1. **Pre-validated mutation**: the engine enumerates and checks moves
//!    (`legal_moves`, `is_valid_move`); mutators trust their callers.
//!
//! 2. **N-Player First**: two to eight seats, and every API takes the
//!    player count from the state.
//!
//! 3. **Cheap clones**: hands are per-rank counts and the seat list is a
//!    persistent `im` vector, so search can copy states freely.
//!
//! ## Architecture
//!
//! - **Perfect-information MCTS**: UCB1 descent, one expansion per
//!   iteration, uniformly random rollouts, robust-child move choice.
//!
//! - **Determinizing MCTS**: the same tree, with opponents' hands redrawn
//!   from the unseen cards before each rollout.
//!
//! ## Modules
//!
//! - `core`: ranks, hands, players, moves, RNG, rules config and game state
//! - `rules`: legality, transitions and the `RulesEngine` trait
//! - `mcts`: Monte Carlo Tree Search drivers
//! - `ai`: heuristic players, the `Strategy` set and `play_game`
//! - `features`: versioned feature vectors for training logs
//! - `error`: `DalmutiError`

pub mod ai;
pub mod core;
pub mod error;
pub mod features;
pub mod mcts;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameState, Hand, Move, OpeningPass, Player, PlayerId, PlayerMap, Rank, RankCounts,
    RulesConfig, Style, Table,
};

pub use crate::rules::RulesEngine;

pub use crate::mcts::{
    Determinize, DeterminizingSearch, MCTSConfig, MCTSNode, MCTSSearch, MCTSTree, NodeId,
    SearchStats,
};

pub use crate::ai::{play_game, GameOutcome, Strategy};

pub use crate::error::{DalmutiError, Result};
