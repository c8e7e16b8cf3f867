//! Core data model: ranks, hands, players, moves, RNG and game state.
//!
//! These types carry no rule logic beyond deck composition and dealing;
//! legality and transitions live in [`crate::rules`].

pub mod rank;
pub mod hand;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use rank::{Rank, RankCounts, DECK_SIZE};
pub use hand::Hand;
pub use player::{seat_names, Player, PlayerId, PlayerMap, Style};
pub use rng::GameRng;
pub use config::{OpeningPass, RulesConfig};
pub use action::Move;
pub use state::{GameState, Table, MAX_PLAYERS, MIN_PLAYERS};
