//! Core MCTS search algorithm.
//!
//! Perfect-information MCTS: every node holds a full state snapshot and
//! rollouts run on that state as-is. The determinizing driver reuses the
//! same loop and swaps in a resampled world before each rollout.

use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::core::{GameRng, PlayerId};
use crate::rules::RulesEngine;

use super::config::MCTSConfig;
use super::policy::{RandomSimulation, SelectionPolicy, SimulationPolicy, UCB1};
use super::stats::SearchStats;
use super::tree::MCTSTree;

/// Main MCTS search context.
///
/// Generic over the rules engine type. Owns the configuration, the RNG
/// stream and the tree of the last search. Each call to `find_best_move`
/// builds a fresh tree.
pub struct MCTSSearch<E: RulesEngine + 'static> {
    /// Search configuration.
    config: MCTSConfig,

    /// The tree of the most recent search (None before the first search or
    /// when the last root had no moves).
    tree: Option<MCTSTree<E>>,

    /// RNG for simulations.
    rng: GameRng,

    /// Selection policy.
    selection: Box<dyn SelectionPolicy>,

    /// Simulation policy.
    simulation: Box<dyn SimulationPolicy<E>>,

    /// Search statistics.
    stats: SearchStats,
}

impl<E: RulesEngine + 'static> MCTSSearch<E> {
    /// Create a new MCTS search context.
    pub fn new(config: MCTSConfig) -> Self {
        let rng = GameRng::new(config.seed);

        Self {
            config,
            tree: None,
            rng,
            selection: Box::new(UCB1),
            simulation: Box::new(RandomSimulation),
            stats: SearchStats::default(),
        }
    }

    /// Set a custom selection policy.
    pub fn with_selection<S: SelectionPolicy + 'static>(mut self, selection: S) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Set a custom simulation policy.
    pub fn with_simulation<S: SimulationPolicy<E> + 'static>(mut self, simulation: S) -> Self {
        self.simulation = Box::new(simulation);
        self
    }

    /// Run `iterations` rounds of MCTS from `state` and return the most
    /// visited root move.
    ///
    /// A root with no legal moves returns the default move (a pass) without
    /// building a tree. Zero iterations return the move expansion would try
    /// first.
    pub fn find_best_move(&mut self, state: &E, iterations: u32) -> E::Move {
        self.run(state, iterations, |node_state, _, _| node_state.clone())
    }

    /// Shared search loop. `prepare_world` builds the rollout state from a
    /// node state, the root player and the search RNG.
    pub(crate) fn run<F>(&mut self, state: &E, iterations: u32, mut prepare_world: F) -> E::Move
    where
        F: FnMut(&E, PlayerId, &mut GameRng) -> E,
    {
        let start = Instant::now();
        self.stats.reset();

        let root_moves = state.legal_moves();
        let Some(&first_expanded) = root_moves.last() else {
            self.tree = None;
            return E::Move::default();
        };

        let root_player = state.to_move();
        let capacity = self.config.max_nodes.min(iterations as usize + 1);
        let mut tree = MCTSTree::with_capacity(state.clone(), capacity);

        for _ in 0..iterations {
            self.iteration(&mut tree, root_player, &mut prepare_world);
            self.stats.iterations += 1;

            // Check node limit
            if tree.len() >= self.config.max_nodes {
                break;
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        // With no iterations run, fall back to the move expansion tries first.
        let best = tree
            .best_child_by_visits()
            .and_then(|id| tree.get(id).mv)
            .unwrap_or(first_expanded);

        debug!(
            iterations = self.stats.iterations,
            nodes = tree.len(),
            simulations = self.stats.simulations,
            avg_plies = self.stats.avg_rollout_plies(),
            truncated = self.stats.truncated_rollouts,
            max_depth = self.stats.max_depth,
            time_us = self.stats.time_us,
            best = ?best,
            "search finished"
        );
        if self.stats.truncated_rollouts > 0 {
            warn!(
                truncated = self.stats.truncated_rollouts,
                cap = self.config.max_rollout_plies,
                "rollouts hit the ply cap"
            );
        }

        self.tree = Some(tree);
        best
    }

    /// Single MCTS iteration: select, expand, simulate, backpropagate.
    fn iteration<F>(&mut self, tree: &mut MCTSTree<E>, root_player: PlayerId, prepare_world: &mut F)
    where
        F: FnMut(&E, PlayerId, &mut GameRng) -> E,
    {
        // === SELECTION ===
        let mut current = tree.root();
        while !tree.get(current).has_unexplored() {
            match tree.select_child(current, self.selection.as_ref(), &self.config) {
                Some(child) => current = child,
                None => break,
            }
        }

        // === EXPANSION ===
        if let Some(child) = tree.expand(current) {
            self.stats.nodes_expanded += 1;
            self.stats.max_depth = self.stats.max_depth.max(tree.get(child).depth);
            current = child;
        }

        // === SIMULATION ===
        let world = prepare_world(&tree.get(current).state, root_player, &mut self.rng);
        let mut sim_rng = self.rng.fork();
        let rollout = self
            .simulation
            .simulate(world, &mut sim_rng, self.config.max_rollout_plies);
        self.stats.record_rollout(rollout.plies, rollout.truncated);
        if rollout.truncated {
            trace!(node = %current, plies = rollout.plies, "rollout truncated");
        }

        // === BACKPROPAGATION ===
        let reward = if rollout.winner == Some(root_player) { 1.0 } else { 0.0 };
        tree.backpropagate(current, reward);
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the tree of the most recent search.
    #[must_use]
    pub fn tree(&self) -> Option<&MCTSTree<E>> {
        self.tree.as_ref()
    }

    /// Root move visit counts from the last search, in expansion order.
    pub fn move_visits(&self) -> Vec<(E::Move, u32)> {
        let Some(tree) = &self.tree else {
            return Vec::new();
        };
        tree.root_node()
            .children
            .iter()
            .filter_map(|&id| {
                let child = tree.get(id);
                child.mv.map(|mv| (mv, child.visits))
            })
            .collect()
    }

    /// Root move probabilities (visit share) from the last search.
    ///
    /// Returns (move, probability) pairs where probabilities sum to ~1.0.
    pub fn move_probabilities(&self) -> Vec<(E::Move, f64)> {
        let visits = self.move_visits();
        let total: u32 = visits.iter().map(|(_, v)| v).sum();

        if total == 0 {
            let uniform = 1.0 / visits.len().max(1) as f64;
            return visits.into_iter().map(|(mv, _)| (mv, uniform)).collect();
        }

        visits
            .into_iter()
            .map(|(mv, v)| (mv, v as f64 / total as f64))
            .collect()
    }

    /// Get the configuration.
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, Move, Rank, RulesConfig, Style};

    fn state(hands: Vec<Vec<u8>>) -> GameState {
        let styles = vec![Style::Mcts; hands.len()];
        let hands = hands
            .into_iter()
            .map(|h| h.into_iter().map(Rank).collect())
            .collect();
        GameState::from_hands(&styles, hands, PlayerId::new(0), RulesConfig::default())
            .unwrap()
    }

    #[test]
    fn test_search_returns_legal_move() {
        let game = GameState::new(&[Style::Mcts; 4], 42).unwrap();
        let mut search = MCTSSearch::new(MCTSConfig::default());

        let mv = search.find_best_move(&game, 100);

        assert!(game.is_legal(mv));
    }

    #[test]
    fn test_search_stats() {
        let game = GameState::new(&[Style::Mcts; 3], 42).unwrap();
        let mut search = MCTSSearch::new(MCTSConfig::default());
        search.find_best_move(&game, 50);

        let stats = search.stats();
        assert_eq!(stats.iterations, 50);
        assert_eq!(stats.simulations, 50);
        assert!(stats.nodes_expanded > 0);
        assert_eq!(stats.truncated_rollouts, 0);
    }

    #[test]
    fn test_search_deterministic() {
        let game = GameState::new(&[Style::Mcts; 4], 7).unwrap();
        let config = MCTSConfig::default().with_seed(12345);

        let mut search1 = MCTSSearch::new(config.clone());
        let mut search2 = MCTSSearch::new(config);

        assert_eq!(search1.find_best_move(&game, 100), search2.find_best_move(&game, 100));
        assert_eq!(search1.move_visits(), search2.move_visits());
    }

    #[test]
    fn test_avoids_losing_move() {
        // Leading the lone wildcard lets the opponent's 1 win at once; both
        // plays of the 2s win for the opener.
        let game = state(vec![vec![2, 2, 13], vec![1]]);
        let mut search = MCTSSearch::new(MCTSConfig::default());

        let mv = search.find_best_move(&game, 200);
        assert_ne!(mv, Move::play(Rank::JOKER, 1));
        assert_eq!(mv.rank(), Some(Rank(2)));
    }

    #[test]
    fn test_no_moves_returns_pass() {
        let mut game = state(vec![vec![4], vec![9, 9]]);
        game.apply(Move::play(Rank(4), 1));
        assert!(game.is_game_over());

        let mut search = MCTSSearch::new(MCTSConfig::default());
        assert_eq!(search.find_best_move(&game, 10), Move::Pass);
        assert!(search.tree().is_none());
        assert!(search.move_visits().is_empty());
    }

    #[test]
    fn test_move_probabilities_sum_to_one() {
        let game = GameState::new(&[Style::Mcts; 4], 3).unwrap();
        let mut search = MCTSSearch::new(MCTSConfig::default());
        search.find_best_move(&game, 100);

        let probs = search.move_probabilities();
        let sum: f64 = probs.iter().map(|(_, p)| p).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_visits_add_up_to_iterations() {
        let game = GameState::new(&[Style::Mcts; 4], 11).unwrap();
        let mut search = MCTSSearch::new(MCTSConfig::default());
        search.find_best_move(&game, 120);

        let tree = search.tree().unwrap();
        assert_eq!(tree.root_node().visits, 120);
        let child_visits: u32 = search.move_visits().iter().map(|(_, v)| v).sum();
        assert_eq!(child_visits, 120);
    }

    #[test]
    fn test_node_limit_stops_early() {
        let game = GameState::new(&[Style::Mcts; 4], 11).unwrap();
        let mut search = MCTSSearch::new(MCTSConfig::default().with_max_nodes(10));
        search.find_best_move(&game, 500);

        assert!(search.stats().iterations < 500);
        assert_eq!(search.tree().unwrap().len(), 10);
    }

    #[test]
    fn test_best_child_matches_move() {
        let game = GameState::new(&[Style::Mcts; 2], 5).unwrap();
        let mut search = MCTSSearch::new(MCTSConfig::default());
        let mv = search.find_best_move(&game, 80);

        let tree = search.tree().unwrap();
        let best = tree.best_child_by_visits().unwrap();
        assert_eq!(tree.get(best).mv, Some(mv));
    }
}
