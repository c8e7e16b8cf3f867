//! Rules engine trait: the seam the search drivers are generic over.
//!
//! A rules engine here *is* the state: it enumerates moves for whoever is
//! to move, applies them in place and reports the winner. `Clone` must give
//! a fully independent copy, since search clones for every branch.
//!
//! ## Implementation Notes
//!
//! - `legal_moves`: empty once the game is over
//! - `apply_move`: must be deterministic for MCTS
//! - `winner`: `None` while the game continues

use std::fmt::Debug;

use crate::core::{GameState, Move, PlayerId};

/// Rules engine trait.
pub trait RulesEngine: Clone {
    /// Move type. `Default` must be the no-op move (a pass) that drivers
    /// fall back to when a position offers nothing.
    type Move: Clone + Copy + PartialEq + Debug + Default;

    /// Seat that moves next.
    fn to_move(&self) -> PlayerId;

    /// Legal moves for the seat to move.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Apply a move for the seat to move.
    fn apply_move(&mut self, mv: Self::Move);

    /// Has the game ended?
    fn is_terminal(&self) -> bool;

    /// The single winner, once the game has ended.
    fn winner(&self) -> Option<PlayerId>;
}

impl RulesEngine for GameState {
    type Move = Move;

    fn to_move(&self) -> PlayerId {
        self.turn_index()
    }

    fn legal_moves(&self) -> Vec<Move> {
        GameState::legal_moves(self)
    }

    fn apply_move(&mut self, mv: Move) {
        self.apply(mv);
    }

    fn is_terminal(&self) -> bool {
        self.is_game_over()
    }

    fn winner(&self) -> Option<PlayerId> {
        self.winner_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rank, RulesConfig, Style};

    fn drive_to_end<E: RulesEngine>(mut engine: E) -> (E, u32) {
        let mut plies = 0;
        while !engine.is_terminal() {
            let mv = engine.legal_moves().first().copied().unwrap_or_default();
            engine.apply_move(mv);
            plies += 1;
        }
        (engine, plies)
    }

    #[test]
    fn test_game_state_through_trait() {
        let state = GameState::from_hands(
            &[Style::Balanced, Style::Balanced],
            vec![vec![Rank(1), Rank(5)], vec![Rank(2), Rank(2)]],
            PlayerId::new(0),
            RulesConfig::default(),
        )
        .unwrap();

        let (done, plies) = drive_to_end(state);
        assert!(done.is_terminal());
        assert!(done.winner().is_some());
        assert!(plies >= 2);
        assert!(done.legal_moves().is_empty());
    }
}
