//! Determinizing MCTS for play under hidden hands.
//!
//! Tree mechanics are those of [`MCTSSearch`]. The tree itself runs on the
//! true state (the root player's own moves only depend on their own hand);
//! before every rollout the leaf state is determinized from the root
//! player's point of view, so each simulation plays out one sampled world.

use crate::core::GameRng;

use super::config::MCTSConfig;
use super::determinize::Determinize;
use super::search::MCTSSearch;
use super::stats::SearchStats;
use super::tree::MCTSTree;

/// MCTS driver that resamples opponents' hands before each rollout.
pub struct DeterminizingSearch<E: Determinize + 'static> {
    inner: MCTSSearch<E>,
}

impl<E: Determinize + 'static> DeterminizingSearch<E> {
    /// Create a driver. [`MCTSConfig::determinizing`] is the usual config:
    /// it caps rollouts at 1000 plies.
    pub fn new(config: MCTSConfig) -> Self {
        Self {
            inner: MCTSSearch::new(config),
        }
    }

    /// Run `iterations` determinized MCTS rounds from `state` and return the
    /// most visited root move (the default move when the root has none).
    pub fn find_best_move(&mut self, state: &E, iterations: u32) -> E::Move {
        self.inner.run(state, iterations, |node_state, root_player, rng: &mut GameRng| {
            node_state.determinize(root_player, rng)
        })
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        self.inner.stats()
    }

    /// Tree of the most recent search.
    #[must_use]
    pub fn tree(&self) -> Option<&MCTSTree<E>> {
        self.inner.tree()
    }

    pub fn move_visits(&self) -> Vec<(E::Move, u32)> {
        self.inner.move_visits()
    }

    pub fn move_probabilities(&self) -> Vec<(E::Move, f64)> {
        self.inner.move_probabilities()
    }

    pub fn config(&self) -> &MCTSConfig {
        self.inner.config()
    }
}
