//! The closed set of automated players.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameState, Move, Style};
use crate::mcts::{DeterminizingSearch, MCTSConfig, MCTSSearch};

use super::heuristic::{self, HeuristicStyle};

/// Iterations per decision for the MCTS styles unless configured otherwise.
pub const DEFAULT_ITERATIONS: u32 = 1000;

/// How an automated seat picks its move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    Balanced,
    Aggressive,
    Defensive,
    /// Perfect-information MCTS.
    Mcts { iterations: u32, config: MCTSConfig },
    /// Determinizing MCTS.
    MctsPro { iterations: u32, config: MCTSConfig },
}

impl Strategy {
    /// Strategy for a seat style, or `None` for a human seat.
    ///
    /// MCTS styles get `iterations` per decision and their driver's default
    /// config.
    #[must_use]
    pub fn from_style(style: Style, iterations: u32) -> Option<Self> {
        match style {
            Style::Human => None,
            Style::Balanced => Some(Strategy::Balanced),
            Style::Aggressive => Some(Strategy::Aggressive),
            Style::Defensive => Some(Strategy::Defensive),
            Style::Mcts => Some(Strategy::Mcts {
                iterations,
                config: MCTSConfig::default(),
            }),
            Style::MctsPro => Some(Strategy::MctsPro {
                iterations,
                config: MCTSConfig::determinizing(),
            }),
        }
    }

    /// One strategy slot per seat.
    #[must_use]
    pub fn for_styles(styles: &[Style], iterations: u32) -> Vec<Option<Self>> {
        styles
            .iter()
            .map(|&style| Self::from_style(style, iterations))
            .collect()
    }

    /// Replace the search config of an MCTS strategy. Heuristics are
    /// returned unchanged.
    #[must_use]
    pub fn with_config(self, new_config: MCTSConfig) -> Self {
        match self {
            Strategy::Mcts { iterations, .. } => Strategy::Mcts {
                iterations,
                config: new_config,
            },
            Strategy::MctsPro { iterations, .. } => Strategy::MctsPro {
                iterations,
                config: new_config,
            },
            other => other,
        }
    }

    /// Pick a move for the seat to move.
    ///
    /// A seat with a single legal move (for instance one that already passed
    /// this round) gets it without searching. MCTS searches are seeded from
    /// `rng`, so a fixed game seed replays identically.
    pub fn decide(&self, state: &GameState, rng: &mut GameRng) -> Move {
        let moves = state.legal_moves();
        if moves.len() <= 1 {
            return moves.first().copied().unwrap_or_default();
        }

        match self {
            Strategy::Balanced => heuristic::choose(state, HeuristicStyle::Balanced),
            Strategy::Aggressive => heuristic::choose(state, HeuristicStyle::Aggressive),
            Strategy::Defensive => heuristic::choose(state, HeuristicStyle::Defensive),
            Strategy::Mcts { iterations, config } => {
                let config = config.clone().with_seed(rng.next_seed());
                MCTSSearch::new(config).find_best_move(state, *iterations)
            }
            Strategy::MctsPro { iterations, config } => {
                let config = config.clone().with_seed(rng.next_seed());
                DeterminizingSearch::new(config).find_best_move(state, *iterations)
            }
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Balanced => "balanced",
            Strategy::Aggressive => "aggressive",
            Strategy::Defensive => "defensive",
            Strategy::Mcts { .. } => "mcts",
            Strategy::MctsPro { .. } => "mcts_pro",
        }
    }
}
