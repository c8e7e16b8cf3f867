//! Legality predicate and legal-move enumeration.

use crate::core::{GameState, Move, OpeningPass, PlayerId, Rank};

impl GameState {
    /// Can `player` play `count` cards counting as `rank` right now?
    ///
    /// A play is legal when the player has not passed this round, their
    /// supply covers `count` (natural `rank` cards plus wildcards, or
    /// wildcards alone for rank 13), and the table is either empty or holds
    /// exactly `count` cards of a strictly weaker effective rank.
    ///
    /// Ranks outside `1..=13` and unseated players are never valid.
    #[must_use]
    pub fn is_valid_move(&self, player: PlayerId, rank: Rank, count: u8) -> bool {
        if count == 0 || !rank.is_valid() || player.index() >= self.player_count() {
            return false;
        }
        if self.has_passed(player) {
            return false;
        }

        let hand = self.hand(player);
        let supply = if rank.is_joker() {
            hand.jokers()
        } else {
            hand.count(rank) + hand.jokers()
        };
        if supply < count {
            return false;
        }

        match self.table.effective_rank() {
            None => true,
            Some(table_rank) => count as usize == self.table.len() && rank < table_rank,
        }
    }

    /// Legal moves for the player whose turn it is.
    ///
    /// Order: each natural group at full count (ascending rank), then each
    /// natural group topped up with 1..=wildcards, then wildcards alone at
    /// 1..=wildcards, then `Pass`. A seat that already passed this round only
    /// gets `Pass`. Under [`OpeningPass::Forbidden`] the opener of a fresh
    /// round is not offered `Pass`. A finished game has no moves.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.game_over {
            return Vec::new();
        }

        let player = self.turn_index;
        if self.has_passed(player) {
            return vec![Move::Pass];
        }

        let hand = self.hand(player);
        let jokers = hand.jokers();
        let mut moves = Vec::new();

        for (rank, natural) in hand.natural_groups() {
            if self.is_valid_move(player, rank, natural) {
                moves.push(Move::play(rank, natural));
            }
        }

        if jokers > 0 {
            for (rank, natural) in hand.natural_groups() {
                for extra in 1..=jokers {
                    if self.is_valid_move(player, rank, natural + extra) {
                        moves.push(Move::play(rank, natural + extra));
                    }
                }
            }
            for count in 1..=jokers {
                if self.is_valid_move(player, Rank::JOKER, count) {
                    moves.push(Move::play(Rank::JOKER, count));
                }
            }
        }

        if self.may_pass() {
            moves.push(Move::Pass);
        }
        moves
    }

    /// Whether the current player is offered `Pass`.
    #[must_use]
    pub fn may_pass(&self) -> bool {
        match self.rules.opening_pass {
            OpeningPass::Allowed => true,
            OpeningPass::Forbidden => !self.table.is_empty() || self.has_passed(self.turn_index),
        }
    }

    /// Is `mv` legal for the current player?
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        match mv {
            Move::Pass => !self.game_over && self.may_pass(),
            Move::Play { rank, count } => {
                !self.game_over && self.is_valid_move(self.turn_index, rank, count)
            }
        }
    }
}
