//! Game state: seats, table, round bookkeeping.
//!
//! ## GameState
//!
//! - Players in seat order with their hands
//! - The current table play (only the latest accepted play is kept)
//! - Pass set, consecutive-pass counter and round leader
//! - Whose turn it is, and the winner once the game ends
//!
//! Containers are persistent (`im`) or inline (`SmallVec`, `RankCounts`),
//! so `Clone` is cheap and a clone never shares mutable storage with its
//! source. Move enumeration and transitions live in [`crate::rules`].

use im::OrdSet;
use smallvec::SmallVec;
use tracing::trace;

use super::config::RulesConfig;
use super::hand::Hand;
use super::player::{seat_names, Player, PlayerId, PlayerMap, Style};
use super::rank::{Rank, RankCounts, DECK_SIZE};
use super::rng::GameRng;
use crate::error::{DalmutiError, Result};

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 8;

/// The most recently accepted play.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    cards: SmallVec<[Rank; 16]>,
    effective_rank: Option<Rank>,
}

impl Table {
    /// Played cards: natural cards then wildcards, ascending.
    #[must_use]
    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    /// Rank the play counts as. `None` while the round is open.
    #[must_use]
    pub fn effective_rank(&self) -> Option<Rank> {
        self.effective_rank
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Per-rank counts of the played cards.
    #[must_use]
    pub fn counts(&self) -> RankCounts {
        RankCounts::from_cards(self.cards.iter().copied())
    }

    pub(crate) fn set(&mut self, cards: SmallVec<[Rank; 16]>, effective_rank: Rank) {
        self.cards = cards;
        self.effective_rank = Some(effective_rank);
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
        self.effective_rank = None;
    }
}

/// Complete game state.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) players: PlayerMap<Player>,
    pub(crate) turn_index: PlayerId,
    pub(crate) round_lead_index: PlayerId,
    pub(crate) table: Table,
    pub(crate) passed_in_round: OrdSet<PlayerId>,
    pub(crate) consecutive_passes: u32,
    pub(crate) game_over: bool,
    pub(crate) winner_index: Option<PlayerId>,
    pub(crate) rules: RulesConfig,
}

impl GameState {
    /// Shuffle, deal and pick a random leader from `seed` with default rules.
    pub fn new(styles: &[Style], seed: u64) -> Result<Self> {
        let mut rng = GameRng::new(seed);
        Self::deal(styles, RulesConfig::default(), &mut rng)
    }

    /// Build seats in order, shuffle the full deck, deal round-robin and pick
    /// a uniformly random starting leader (who also takes the first turn).
    pub fn deal(styles: &[Style], rules: RulesConfig, rng: &mut GameRng) -> Result<Self> {
        check_player_count(styles.len())?;

        let mut deck = RankCounts::full_deck().to_cards();
        rng.shuffle(&mut deck);

        let mut hands = vec![Hand::new(); styles.len()];
        for (i, card) in deck.into_iter().enumerate() {
            hands[i % styles.len()].add(card);
        }

        let leader = PlayerId::new(rng.gen_range_usize(0..styles.len()) as u8);
        trace!(players = styles.len(), leader = leader.0, "dealt new game");

        Ok(Self::assemble(styles, hands, leader, rules))
    }

    /// Build a state from explicit hands, for puzzles, replays and tests.
    ///
    /// Hands must fit inside one deck between them and every seat must hold
    /// at least one card. Cards not in any hand are treated as discarded.
    pub fn from_hands(
        styles: &[Style],
        hands: Vec<Vec<Rank>>,
        leader: PlayerId,
        rules: RulesConfig,
    ) -> Result<Self> {
        check_player_count(styles.len())?;
        if hands.len() != styles.len() {
            return Err(DalmutiError::InvalidDeal(format!(
                "{} hands for {} seats",
                hands.len(),
                styles.len()
            )));
        }
        if leader.index() >= styles.len() {
            return Err(DalmutiError::InvalidLeader(leader));
        }

        let mut dealt = RankCounts::new();
        let mut dealt_total = 0;
        let mut built = Vec::with_capacity(hands.len());
        for (i, cards) in hands.into_iter().enumerate() {
            if let Some(bad) = cards.iter().find(|r| !r.is_valid()) {
                return Err(DalmutiError::InvalidRank(bad.0));
            }
            if cards.is_empty() {
                return Err(DalmutiError::InvalidDeal(format!("seat {i} has no cards")));
            }
            // Per-rank counts are u8: bound the total first.
            dealt_total += cards.len();
            if dealt_total > DECK_SIZE {
                return Err(DalmutiError::InvalidDeal(format!(
                    "hands hold more than the deck's {DECK_SIZE} cards"
                )));
            }
            let hand = Hand::from_cards(cards);
            dealt = dealt.union(hand.counts());
            built.push(hand);
        }
        if !dealt.is_subset_of(&RankCounts::full_deck()) {
            return Err(DalmutiError::InvalidDeal(
                "hands hold more copies of a rank than the deck has".to_string(),
            ));
        }

        Ok(Self::assemble(styles, built, leader, rules))
    }

    fn assemble(styles: &[Style], hands: Vec<Hand>, leader: PlayerId, rules: RulesConfig) -> Self {
        let players = seat_names(styles)
            .into_iter()
            .zip(styles.iter().zip(hands))
            .map(|(name, (&style, hand))| Player {
                hand,
                ..Player::new(name, style)
            })
            .collect();

        Self {
            players,
            turn_index: leader,
            round_lead_index: leader,
            table: Table::default(),
            passed_in_round: OrdSet::new(),
            consecutive_passes: 0,
            game_over: false,
            winner_index: None,
            rules,
        }
    }

    // === Observers ===

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn turn_index(&self) -> PlayerId {
        self.turn_index
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.players[player].hand
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn_index]
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Seats that have passed in the current round.
    #[must_use]
    pub fn passed_in_round(&self) -> &OrdSet<PlayerId> {
        &self.passed_in_round
    }

    #[must_use]
    pub fn has_passed(&self, player: PlayerId) -> bool {
        self.passed_in_round.contains(&player)
    }

    #[must_use]
    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }

    /// Seat that made the last accepted play (or the initial leader).
    #[must_use]
    pub fn round_lead_index(&self) -> PlayerId {
        self.round_lead_index
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn winner_index(&self) -> Option<PlayerId> {
        self.winner_index
    }

    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Union of every hand.
    #[must_use]
    pub fn cards_in_hands(&self) -> RankCounts {
        self.players
            .values()
            .fold(RankCounts::new(), |acc, p| acc.union(p.hand.counts()))
    }

    /// Cards no longer in any hand: full deck minus every hand.
    ///
    /// Includes the current table play.
    #[must_use]
    pub fn discarded(&self) -> RankCounts {
        RankCounts::full_deck().saturating_sub(&self.cards_in_hands())
    }
}

fn check_player_count(count: usize) -> Result<()> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        Ok(())
    } else {
        Err(DalmutiError::InvalidPlayerCount(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styles(n: usize) -> Vec<Style> {
        vec![Style::Balanced; n]
    }

    #[test]
    fn test_deal_uses_whole_deck() {
        for n in MIN_PLAYERS..=MAX_PLAYERS {
            let state = GameState::new(&styles(n), 7).unwrap();
            assert_eq!(state.cards_in_hands(), RankCounts::full_deck());

            let sizes: Vec<usize> = state.players().values().map(|p| p.hand.len()).collect();
            assert_eq!(sizes.iter().sum::<usize>(), DECK_SIZE);
            let max = *sizes.iter().max().unwrap();
            let min = *sizes.iter().min().unwrap();
            assert!(max - min <= 1, "round-robin deal should be even: {sizes:?}");
        }
    }

    #[test]
    fn test_leader_takes_first_turn() {
        let state = GameState::new(&styles(5), 11).unwrap();
        assert_eq!(state.turn_index(), state.round_lead_index());
        assert!(state.table().is_empty());
        assert!(state.passed_in_round().is_empty());
        assert!(!state.is_game_over());
        assert_eq!(state.winner_index(), None);
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = GameState::new(&styles(4), 99).unwrap();
        let b = GameState::new(&styles(4), 99).unwrap();
        for p in PlayerId::all(4) {
            assert_eq!(a.hand(p), b.hand(p));
        }
        assert_eq!(a.turn_index(), b.turn_index());
    }

    #[test]
    fn test_invalid_player_count() {
        assert!(matches!(
            GameState::new(&styles(1), 0),
            Err(DalmutiError::InvalidPlayerCount(1))
        ));
        assert!(matches!(
            GameState::new(&styles(9), 0),
            Err(DalmutiError::InvalidPlayerCount(9))
        ));
    }

    #[test]
    fn test_from_hands_rejects_impossible_deal() {
        let result = GameState::from_hands(
            &styles(2),
            vec![vec![Rank(1), Rank(1)], vec![Rank(2)]],
            PlayerId::new(0),
            RulesConfig::default(),
        );
        assert!(matches!(result, Err(DalmutiError::InvalidDeal(_))));
    }

    #[test]
    fn test_from_hands_rejects_oversized_hands() {
        // 256 copies would wrap a u8 count to zero.
        for copies in [81, 256, 300] {
            let result = GameState::from_hands(
                &styles(2),
                vec![vec![Rank(12); copies], vec![Rank(1)]],
                PlayerId::new(0),
                RulesConfig::default(),
            );
            assert!(matches!(result, Err(DalmutiError::InvalidDeal(_))), "{copies} copies");
        }

        let result = GameState::from_hands(
            &styles(2),
            vec![vec![Rank(12); 60], vec![Rank(11); 30]],
            PlayerId::new(0),
            RulesConfig::default(),
        );
        assert!(matches!(result, Err(DalmutiError::InvalidDeal(_))));
    }

    #[test]
    fn test_from_hands_rejects_unknown_rank() {
        let result = GameState::from_hands(
            &styles(2),
            vec![vec![Rank(0)], vec![Rank(14)]],
            PlayerId::new(0),
            RulesConfig::default(),
        );
        assert!(matches!(result, Err(DalmutiError::InvalidRank(0))));
    }

    #[test]
    fn test_from_hands_rejects_bad_leader() {
        let result = GameState::from_hands(
            &styles(2),
            vec![vec![Rank(1)], vec![Rank(2)]],
            PlayerId::new(5),
            RulesConfig::default(),
        );
        assert!(matches!(result, Err(DalmutiError::InvalidLeader(_))));
    }

    #[test]
    fn test_clone_is_independent() {
        let state = GameState::new(&styles(4), 3).unwrap();
        let mut copy = state.clone();

        let p = PlayerId::new(0);
        let rank = copy.hand(p).cards()[0];
        copy.players[p].hand.remove(rank, 1);
        copy.passed_in_round.insert(PlayerId::new(2));

        assert_eq!(copy.hand(p).len() + 1, state.hand(p).len());
        assert!(state.passed_in_round().is_empty());
    }

    #[test]
    fn test_discarded_counts_table() {
        let state = GameState::from_hands(
            &styles(2),
            vec![vec![Rank(3), Rank(3)], vec![Rank(2)]],
            PlayerId::new(0),
            RulesConfig::default(),
        )
        .unwrap();
        let discarded = state.discarded();
        assert_eq!(discarded.total(), DECK_SIZE - 3);
        assert_eq!(discarded.get(Rank(3)), 1);
        assert_eq!(discarded.get(Rank(2)), 1);
    }
}
