//! State transitions: plays, passes and turn advancement.
//!
//! Mutators perform no legality checks. Callers gate them behind
//! `is_valid_move` / `legal_moves`; everything asserted here is an internal
//! consistency violation, not a user error.

use smallvec::SmallVec;
use tracing::trace;

use crate::core::{GameState, Move, PlayerId, Rank};

impl GameState {
    /// Play `count` cards counting as `rank` from `player`'s hand.
    ///
    /// Natural cards are used first and wildcards cover any shortfall. The
    /// play becomes the table, resets the consecutive-pass counter and makes
    /// `player` the round leader. Emptying the hand ends the game with
    /// `player` as winner and leaves the turn where it is.
    pub fn play_cards(&mut self, player: PlayerId, rank: Rank, count: u8) {
        self.assert_can_act(player);

        let hand = &mut self.players[player].hand;
        let natural = if rank.is_joker() {
            0
        } else {
            hand.count(rank).min(count)
        };
        let jokers = count - natural;
        hand.remove(rank, natural);
        hand.remove(Rank::JOKER, jokers);
        let emptied = hand.is_empty();

        let mut played: SmallVec<[Rank; 16]> = SmallVec::new();
        played.extend(std::iter::repeat(rank).take(natural as usize));
        played.extend(std::iter::repeat(Rank::JOKER).take(jokers as usize));
        self.table.set(played, rank);
        self.consecutive_passes = 0;
        self.round_lead_index = player;

        if emptied {
            self.game_over = true;
            self.winner_index = Some(player);
            trace!(winner = player.0, "game over");
            return;
        }
        self.advance_turn();
    }

    /// Record a pass by `player`.
    ///
    /// Once at most one seat still holding cards has not passed, the round
    /// clears: the table and pass set empty, the counter resets and the turn
    /// returns to the round leader (or the next seat holding cards).
    pub fn player_pass(&mut self, player: PlayerId) {
        self.assert_can_act(player);

        self.passed_in_round.insert(player);
        self.consecutive_passes += 1;

        let holding: Vec<PlayerId> = self
            .players
            .iter()
            .filter(|(_, p)| p.has_cards())
            .map(|(id, _)| id)
            .collect();
        let unpassed = holding
            .iter()
            .filter(|id| !self.passed_in_round.contains(*id))
            .count();

        if unpassed <= 1 && holding.len() > 1 {
            self.table.clear();
            self.passed_in_round.clear();
            self.consecutive_passes = 0;
            self.turn_index = self.round_lead_index;
            trace!(leader = self.round_lead_index.0, "round cleared");
            if !self.current_player().has_cards() {
                self.advance_turn();
            }
        } else {
            self.advance_turn();
        }
    }

    /// Move the turn to the next seat clockwise that still holds cards.
    /// No-op once the game is over.
    pub fn advance_turn(&mut self) {
        if self.game_over {
            return;
        }
        assert!(
            self.players.values().any(|p| p.has_cards()),
            "advancing the turn with every hand empty"
        );

        let n = self.player_count();
        self.turn_index = self.turn_index.next(n);
        while !self.current_player().has_cards() {
            self.turn_index = self.turn_index.next(n);
        }
    }

    /// Apply `mv` for the player whose turn it is.
    pub fn apply(&mut self, mv: Move) {
        let player = self.turn_index;
        match mv {
            Move::Pass => self.player_pass(player),
            Move::Play { rank, count } => self.play_cards(player, rank, count),
        }
    }

    fn assert_can_act(&self, player: PlayerId) {
        assert!(!self.game_over, "mutating a finished game");
        assert!(
            self.players[player].has_cards(),
            "{player} acted with an empty hand"
        );
    }
}
