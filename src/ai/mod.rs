//! Automated players.
//!
//! - `heuristic`: rule-based candidate plays and style orderings
//! - `strategy`: `Strategy`, the closed set of players behind `decide`
//! - `game`: `play_game`, a full game with one strategy per seat

pub mod game;
pub mod heuristic;
pub mod strategy;

pub use game::{play_game, GameOutcome, DEFAULT_MAX_TURNS};
pub use heuristic::{Candidate, HeuristicStyle};
pub use strategy::{Strategy, DEFAULT_ITERATIONS};
