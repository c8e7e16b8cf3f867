//! MCTS policies for selection and simulation.
//!
//! Policies are trait-based to allow customization:
//! - `SelectionPolicy`: How to score children during descent (UCB1)
//! - `SimulationPolicy`: How to run rollouts (uniform random)

use crate::core::{GameRng, PlayerId};
use crate::rules::RulesEngine;

use super::config::MCTSConfig;

// =============================================================================
// Selection Policy
// =============================================================================

/// Policy for scoring children during tree descent. Highest score wins.
pub trait SelectionPolicy: Send + Sync {
    fn score(&self, parent_visits: u32, child_visits: u32, child_wins: f64, config: &MCTSConfig) -> f64;
}

/// UCB1 (Upper Confidence Bound) selection policy.
///
/// Balances exploitation (high win rate) with exploration (low visits).
/// Formula: w/n + c * sqrt(ln(N) / n), with unvisited children scored infinite.
#[derive(Clone, Debug, Default)]
pub struct UCB1;

impl SelectionPolicy for UCB1 {
    fn score(&self, parent_visits: u32, child_visits: u32, child_wins: f64, config: &MCTSConfig) -> f64 {
        if child_visits == 0 {
            return f64::INFINITY;
        }
        let n = child_visits as f64;
        let ln_parent = (parent_visits.max(1) as f64).ln();
        child_wins / n + config.exploration_constant * (ln_parent / n).sqrt()
    }
}

// =============================================================================
// Simulation Policy
// =============================================================================

/// Outcome of one rollout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rollout {
    /// Winner if the game finished.
    pub winner: Option<PlayerId>,
    /// Plies played.
    pub plies: u32,
    /// True if the ply cap stopped the rollout.
    pub truncated: bool,
}

/// Policy for running simulations (rollouts) from a leaf state.
pub trait SimulationPolicy<E: RulesEngine>: Send + Sync {
    /// Play `state` forward, returning the outcome. The state is consumed.
    ///
    /// `max_plies` of 0 means unlimited.
    fn simulate(&self, state: E, rng: &mut GameRng, max_plies: u32) -> Rollout;
}

/// Random simulation policy.
///
/// Plays uniformly random legal moves (the default move when none are
/// offered) until the game ends or the ply cap is hit.
#[derive(Clone, Debug, Default)]
pub struct RandomSimulation;

impl<E: RulesEngine> SimulationPolicy<E> for RandomSimulation {
    fn simulate(&self, mut state: E, rng: &mut GameRng, max_plies: u32) -> Rollout {
        let mut plies = 0;

        while !state.is_terminal() {
            if max_plies > 0 && plies >= max_plies {
                return Rollout {
                    winner: None,
                    plies,
                    truncated: true,
                };
            }

            let moves = state.legal_moves();
            let mv = rng.choose(&moves).copied().unwrap_or_default();
            state.apply_move(mv);
            plies += 1;
        }

        Rollout {
            winner: state.winner(),
            plies,
            truncated: false,
        }
    }
}
