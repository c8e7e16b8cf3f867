//! A player's hand: an unordered multiset of ranks.
//!
//! Order carries no rule meaning; `cards()` always yields ranks sorted
//! ascending so display and iteration are deterministic.

use serde::{Deserialize, Serialize};

use super::rank::{Rank, RankCounts};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    counts: RankCounts,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards<I: IntoIterator<Item = Rank>>(cards: I) -> Self {
        Self {
            counts: RankCounts::from_cards(cards),
        }
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.total()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Copies of `rank` held.
    #[must_use]
    pub fn count(&self, rank: Rank) -> u8 {
        self.counts.get(rank)
    }

    /// Wildcards held.
    #[must_use]
    pub fn jokers(&self) -> u8 {
        self.counts.get(Rank::JOKER)
    }

    pub fn add(&mut self, rank: Rank) {
        self.counts.add(rank, 1);
    }

    /// Remove `n` copies of `rank`. Panics if the hand holds fewer.
    pub fn remove(&mut self, rank: Rank, n: u8) {
        self.counts.remove(rank, n);
    }

    /// Cards sorted ascending.
    #[must_use]
    pub fn cards(&self) -> Vec<Rank> {
        self.counts.to_cards()
    }

    /// Per-rank counts.
    #[must_use]
    pub fn counts(&self) -> &RankCounts {
        &self.counts
    }

    /// Natural ranks held with their counts, ascending.
    pub fn natural_groups(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        self.counts.iter().filter(|(rank, _)| !rank.is_joker())
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cards: Vec<String> = self.cards().iter().map(Rank::to_string).collect();
        write!(f, "[{}]", cards.join(" "))
    }
}
