//! Determinization: resample hidden hands into one concrete world.
//!
//! The observer keeps their own hand. Every other seat keeps its hand size
//! but gets fresh cards drawn without replacement from the pool the
//! observer cannot see: the full deck minus the observer's hand minus the
//! cards on the table.

use crate::core::{GameRng, GameState, Hand, PlayerId, RankCounts};
use crate::rules::RulesEngine;

/// Engines whose hidden information can be resampled.
pub trait Determinize: RulesEngine {
    /// A copy of `self` with every hand except `observer`'s redrawn from the
    /// cards `observer` cannot see.
    fn determinize(&self, observer: PlayerId, rng: &mut GameRng) -> Self;
}

/// Cards `observer` cannot see, per rank.
///
/// Subtraction saturates at zero per rank.
#[must_use]
pub fn unseen_pool(state: &GameState, observer: PlayerId) -> RankCounts {
    RankCounts::full_deck()
        .saturating_sub(state.hand(observer).counts())
        .saturating_sub(&state.table().counts())
}

impl Determinize for GameState {
    /// # Panics
    ///
    /// If the unseen pool holds fewer cards than the other seats' hands
    /// together. That only happens when the state itself is inconsistent.
    fn determinize(&self, observer: PlayerId, rng: &mut GameRng) -> Self {
        let mut pool = unseen_pool(self, observer).to_cards();
        let needed: usize = self
            .players
            .iter()
            .filter(|(id, _)| *id != observer)
            .map(|(_, player)| player.hand.len())
            .sum();
        assert!(
            pool.len() >= needed,
            "unseen pool of {} cards cannot refill {needed} opponent cards",
            pool.len()
        );

        rng.shuffle(&mut pool);

        let mut world = self.clone();
        let mut drawn = pool.into_iter();
        for id in self.players.player_ids() {
            if id == observer {
                continue;
            }
            let size = self.hand(id).len();
            world.players[id].hand = Hand::from_cards(drawn.by_ref().take(size));
        }
        world
    }
}
