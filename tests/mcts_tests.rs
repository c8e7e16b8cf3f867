//! MCTS integration tests for both drivers.

use rust_dalmuti::core::{GameState, Move, PlayerId, Rank, RulesConfig, Style};
use rust_dalmuti::mcts::{DeterminizingSearch, MCTSConfig, MCTSSearch, MCTSTree};

fn ranks(values: &[u8]) -> Vec<Rank> {
    values.iter().copied().map(Rank).collect()
}

fn two_seat(a: &[u8], b: &[u8]) -> GameState {
    GameState::from_hands(
        &[Style::Mcts, Style::Mcts],
        vec![ranks(a), ranks(b)],
        PlayerId::new(0),
        RulesConfig::default(),
    )
    .unwrap()
}

// =============================================================================
// Basic Search Tests
// =============================================================================

#[test]
fn test_mcts_returns_legal_move() {
    for players in [2usize, 4, 8] {
        let state = GameState::new(&vec![Style::Mcts; players], 42).unwrap();
        let mut search = MCTSSearch::new(MCTSConfig::default());

        let mv = search.find_best_move(&state, 100);

        assert!(state.is_legal(mv), "{players} players: {mv}");
    }
}

#[test]
fn test_mcts_with_low_iterations() {
    let state = GameState::new(&[Style::Mcts; 3], 42).unwrap();
    let mut search = MCTSSearch::new(MCTSConfig::default());

    // One iteration expands a single child, which is then the answer.
    let mv = search.find_best_move(&state, 1);

    assert!(state.is_legal(mv));
    assert_eq!(search.move_visits(), vec![(mv, 1)]);
}

#[test]
fn test_zero_iterations_still_answers() {
    let state = GameState::new(&[Style::Mcts; 3], 42).unwrap();
    let mut search = MCTSSearch::new(MCTSConfig::default());

    let mv = search.find_best_move(&state, 0);
    assert!(state.is_legal(mv));
    assert_eq!(Some(&mv), state.legal_moves().last());
    assert!(search.move_visits().is_empty());
}

// =============================================================================
// Determinism Tests
// =============================================================================

#[test]
fn test_mcts_deterministic_with_seed() {
    let state = GameState::new(&[Style::Mcts; 4], 15).unwrap();
    let config = MCTSConfig::default().with_seed(12345);

    let mut search1 = MCTSSearch::new(config.clone());
    let mut search2 = MCTSSearch::new(config);

    assert_eq!(
        search1.find_best_move(&state, 150),
        search2.find_best_move(&state, 150)
    );
    assert_eq!(search1.move_visits(), search2.move_visits());
}

#[test]
fn test_determinizing_deterministic_with_seed() {
    let state = GameState::new(&[Style::MctsPro; 4], 15).unwrap();
    let config = MCTSConfig::determinizing().with_seed(12345);

    let mut search1 = DeterminizingSearch::new(config.clone());
    let mut search2 = DeterminizingSearch::new(config);

    assert_eq!(
        search1.find_best_move(&state, 150),
        search2.find_best_move(&state, 150)
    );
    assert_eq!(search1.move_visits(), search2.move_visits());
}

// =============================================================================
// Tree Structure Tests
// =============================================================================

#[test]
fn test_tree_growth() {
    let state = GameState::new(&[Style::Mcts; 4], 20).unwrap();
    let mut search = MCTSSearch::new(MCTSConfig::default());
    search.find_best_move(&state, 300);

    let tree = search.tree().unwrap();
    let stats = tree.stats();
    assert_eq!(stats.node_count, 301);
    assert!(stats.max_depth > 1);
    assert_eq!(search.stats().nodes_expanded, 300);
}

#[test]
fn test_child_visits_sum_to_parent() {
    let state = GameState::new(&[Style::Mcts; 3], 20).unwrap();
    let mut search = MCTSSearch::new(MCTSConfig::default());
    search.find_best_move(&state, 250);

    let tree: &MCTSTree<GameState> = search.tree().unwrap();
    for (id, node) in tree.iter() {
        let child_visits: u32 = node.children.iter().map(|&c| tree.get(c).visits).sum();
        if node.children.is_empty() {
            continue;
        }
        // A node's own rollout accounts for the remaining visit.
        assert_eq!(node.visits, child_visits + u32::from(id != tree.root()), "{id}");
    }
}

#[test]
fn test_robust_child_is_most_visited() {
    let state = GameState::new(&[Style::Mcts; 4], 21).unwrap();
    let mut search = MCTSSearch::new(MCTSConfig::default());
    let mv = search.find_best_move(&state, 200);

    let visits = search.move_visits();
    let max = visits.iter().map(|(_, v)| *v).max().unwrap();
    let first_max = visits.iter().find(|(_, v)| *v == max).unwrap().0;
    assert_eq!(mv, first_max);
}

// =============================================================================
// Play Strength Tests
// =============================================================================

#[test]
fn test_both_drivers_go_out_when_they_can() {
    // Wildcard pair ends the game; a single wildcard hands the opponent the
    // lead and the win.
    let state = two_seat(&[13, 13], &[1, 4]);

    let mut perfect = MCTSSearch::new(MCTSConfig::default());
    assert_eq!(perfect.find_best_move(&state, 200), Move::play(Rank::JOKER, 2));

    let mut hidden = DeterminizingSearch::new(MCTSConfig::determinizing());
    assert_eq!(hidden.find_best_move(&state, 200), Move::play(Rank::JOKER, 2));
}

#[test]
fn test_perfect_info_uses_opponent_hand() {
    // Leading the 3 lets the opponent answer with the 1 and go out with
    // the 2. Leading the pair first wins: nothing beats it.
    let state = two_seat(&[3, 6, 6], &[1, 2]);
    let mut search = MCTSSearch::new(MCTSConfig::default());

    assert_eq!(search.find_best_move(&state, 400), Move::play(Rank(6), 2));
}

#[test]
fn test_rollout_cap_counts_truncations() {
    let state = GameState::new(&[Style::Mcts; 6], 4).unwrap();
    let mut search = MCTSSearch::new(MCTSConfig::default().with_max_rollout_plies(2));
    let mv = search.find_best_move(&state, 30);

    assert!(state.is_legal(mv));
    assert_eq!(search.stats().truncated_rollouts, 30);
}

#[test]
fn test_determinizing_rollout_cap_counts_truncations() {
    let state = GameState::new(&[Style::MctsPro; 4], 9).unwrap();
    let config = MCTSConfig::determinizing().with_max_rollout_plies(3);
    let mut search = DeterminizingSearch::new(config);
    let mv = search.find_best_move(&state, 40);

    assert!(state.is_legal(mv));
    assert_eq!(search.stats().simulations, 40);
    assert_eq!(search.stats().truncated_rollouts, 40);
    assert!(search.stats().rollout_plies <= 40 * 3);
}

#[test]
fn test_determinizing_preset_cap_is_not_hit_by_real_games() {
    let state = GameState::new(&[Style::MctsPro; 4], 12).unwrap();
    let mut search = DeterminizingSearch::new(MCTSConfig::determinizing());
    search.find_best_move(&state, 60);

    assert_eq!(search.stats().truncated_rollouts, 0);
    assert!(search.stats().avg_rollout_plies() > 0.0);
}
