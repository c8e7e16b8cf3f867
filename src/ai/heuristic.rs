//! Rule-based players: enumerate a fixed candidate set and take the first
//! one under a style-specific ordering.

use std::cmp::Reverse;

use crate::core::{GameState, Move, Rank};

/// Heuristic play styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeuristicStyle {
    /// Fewest wildcards, then lowest (strongest) rank.
    Balanced,
    /// Fewest wildcards, then the biggest group when opening a round.
    Aggressive,
    /// Wildcards weighed heavily, then strongest rank, then biggest group.
    Defensive,
}

/// A play the heuristics consider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub rank: Rank,
    pub count: u8,
    /// Wildcards spent on this play.
    pub jokers_used: u8,
    /// True when the play opens a round.
    pub is_start: bool,
}

impl Candidate {
    #[must_use]
    pub fn to_move(self) -> Move {
        Move::play(self.rank, self.count)
    }
}

/// Candidate plays for the seat to move, in enumeration order.
///
/// Every natural group at full count, then each natural group topped up
/// with 1..=wildcards, then the wildcards alone at full count, plus a single
/// wildcard when more than one is held. Only plays passing
/// [`GameState::is_valid_move`] are kept.
#[must_use]
pub fn candidates(state: &GameState) -> Vec<Candidate> {
    if state.is_game_over() {
        return Vec::new();
    }

    let player = state.turn_index();
    let hand = state.hand(player);
    let jokers = hand.jokers();
    let is_start = state.table().is_empty();
    let mut out = Vec::new();

    let mut push = |rank: Rank, count: u8, jokers_used: u8| {
        if state.is_valid_move(player, rank, count) {
            out.push(Candidate {
                rank,
                count,
                jokers_used,
                is_start,
            });
        }
    };

    for (rank, natural) in hand.natural_groups() {
        push(rank, natural, 0);
    }
    if jokers > 0 {
        for (rank, natural) in hand.natural_groups() {
            for extra in 1..=jokers {
                push(rank, natural + extra, extra);
            }
        }
        push(Rank::JOKER, jokers, jokers);
        if jokers > 1 {
            push(Rank::JOKER, 1, 1);
        }
    }
    out
}

/// Choose a move for the seat to move. Pass when nothing is playable.
#[must_use]
pub fn choose(state: &GameState, style: HeuristicStyle) -> Move {
    let mut plays = candidates(state);

    // Stable sorts: ties keep enumeration order.
    match style {
        HeuristicStyle::Balanced => plays.sort_by_key(|c| (c.jokers_used, c.rank)),
        HeuristicStyle::Aggressive => plays.sort_by_key(|c| {
            let size = if c.is_start { Reverse(c.count) } else { Reverse(0) };
            (c.jokers_used, size, c.rank)
        }),
        HeuristicStyle::Defensive => {
            plays.sort_by_key(|c| (u16::from(c.jokers_used) * 10, c.rank, Reverse(c.count)))
        }
    }

    plays.first().map_or(Move::Pass, |c| c.to_move())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, RulesConfig, Style};

    fn opener(hand: Vec<u8>) -> GameState {
        GameState::from_hands(
            &[Style::Balanced, Style::Balanced],
            vec![hand.into_iter().map(Rank).collect(), vec![Rank(12)]],
            PlayerId::new(0),
            RulesConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_candidates_wildcards_alone() {
        let state = opener(vec![9, 13, 13]);
        let plays: Vec<Move> = candidates(&state).into_iter().map(Candidate::to_move).collect();

        assert_eq!(
            plays,
            vec![
                Move::play(Rank(9), 1),
                Move::play(Rank(9), 2),
                Move::play(Rank(9), 3),
                Move::play(Rank::JOKER, 2),
                Move::play(Rank::JOKER, 1),
            ]
        );
        assert!(candidates(&state).iter().all(|c| c.is_start));
    }

    #[test]
    fn test_balanced_plays_strongest_natural() {
        let state = opener(vec![4, 9, 9, 13]);
        assert_eq!(choose(&state, HeuristicStyle::Balanced), Move::play(Rank(4), 1));
    }

    #[test]
    fn test_aggressive_opens_with_biggest_group() {
        let state = opener(vec![4, 9, 9, 13]);
        assert_eq!(choose(&state, HeuristicStyle::Aggressive), Move::play(Rank(9), 2));
    }

    #[test]
    fn test_defensive_keeps_wildcards() {
        let state = opener(vec![12, 13]);
        assert_eq!(choose(&state, HeuristicStyle::Defensive), Move::play(Rank(12), 1));
    }

    #[test]
    fn test_aggressive_follows_by_rank() {
        // Not opening: group size no longer matters, strongest rank wins.
        let mut state = GameState::from_hands(
            &[Style::Aggressive, Style::Aggressive],
            vec![vec![Rank(2), Rank(11), Rank(11)], vec![Rank(3), Rank(3), Rank(6), Rank(6)]],
            PlayerId::new(0),
            RulesConfig::default(),
        )
        .unwrap();
        state.apply(Move::play(Rank(11), 2));

        assert_eq!(choose(&state, HeuristicStyle::Aggressive), Move::play(Rank(3), 2));
    }

    #[test]
    fn test_passes_when_nothing_fits() {
        let mut state = GameState::from_hands(
            &[Style::Defensive, Style::Defensive],
            vec![vec![Rank(1), Rank(8)], vec![Rank(5)]],
            PlayerId::new(0),
            RulesConfig::default(),
        )
        .unwrap();
        state.apply(Move::play(Rank(1), 1));

        assert!(candidates(&state).is_empty());
        assert_eq!(choose(&state, HeuristicStyle::Defensive), Move::Pass);
    }
}
