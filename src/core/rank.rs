//! Card ranks and per-rank multisets.
//!
//! The deck holds one 1, two 2s, ... twelve 12s, plus two wildcards
//! (rank 13): 80 cards in total. A lower rank beats a higher one.

use serde::{Deserialize, Serialize};

use crate::error::DalmutiError;

/// A card rank. `1..=12` are natural ranks, `13` is the wildcard.
///
/// The field is public so ranks can be written as literals; anything
/// outside `1..=13` is rejected by `is_valid_move` and refused on
/// deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(pub u8);

impl Rank {
    /// The wildcard rank.
    pub const JOKER: Rank = Rank(13);

    /// Strongest natural rank.
    pub const MIN_NATURAL: u8 = 1;

    /// Weakest natural rank.
    pub const MAX_NATURAL: u8 = 12;

    /// Number of distinct ranks including the wildcard.
    pub const COUNT: usize = 13;

    /// Create a rank. Panics outside `1..=13`.
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        assert!(rank >= 1 && rank <= 13, "rank must be in 1..=13");
        Self(rank)
    }

    /// Whether this is a rank the deck contains.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 >= 1 && self.0 <= 13
    }

    /// Raw rank value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_joker(self) -> bool {
        self.0 == 13
    }

    /// Zero-based slot in a [`RankCounts`] array.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Number of copies of this rank in a full deck.
    #[must_use]
    pub const fn deck_multiplicity(self) -> u8 {
        if self.is_joker() {
            2
        } else {
            self.0
        }
    }

    /// All natural ranks, strongest first.
    pub fn naturals() -> impl Iterator<Item = Rank> {
        (Self::MIN_NATURAL..=Self::MAX_NATURAL).map(Rank)
    }

    /// Every rank including the wildcard.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_joker() {
            write!(f, "J")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = DalmutiError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let rank = Rank(value);
        if rank.is_valid() {
            Ok(rank)
        } else {
            Err(DalmutiError::InvalidRank(value))
        }
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

/// Total cards in a full deck.
pub const DECK_SIZE: usize = 80;

/// Per-rank card counts: a multiset of ranks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankCounts([u8; Rank::COUNT]);

impl RankCounts {
    /// Empty multiset.
    #[must_use]
    pub const fn new() -> Self {
        Self([0; Rank::COUNT])
    }

    /// Counts of a complete 80-card deck.
    #[must_use]
    pub fn full_deck() -> Self {
        let mut counts = Self::new();
        for rank in Rank::all() {
            counts.0[rank.index()] = rank.deck_multiplicity();
        }
        counts
    }

    /// Count the given cards.
    pub fn from_cards<I: IntoIterator<Item = Rank>>(cards: I) -> Self {
        let mut counts = Self::new();
        for rank in cards {
            counts.0[rank.index()] += 1;
        }
        counts
    }

    #[inline]
    #[must_use]
    pub fn get(&self, rank: Rank) -> u8 {
        self.0[rank.index()]
    }

    #[inline]
    pub fn add(&mut self, rank: Rank, n: u8) {
        self.0[rank.index()] += n;
    }

    /// Remove `n` copies of `rank`. Panics if fewer are present.
    pub fn remove(&mut self, rank: Rank, n: u8) {
        let slot = &mut self.0[rank.index()];
        assert!(*slot >= n, "removing {n} x {rank} from a multiset holding {slot}");
        *slot -= n;
    }

    /// Total number of cards.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| c as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    /// Per-rank `self - other`, clamped at zero.
    #[must_use]
    pub fn saturating_sub(&self, other: &RankCounts) -> Self {
        let mut out = *self;
        for (slot, &sub) in out.0.iter_mut().zip(other.0.iter()) {
            *slot = slot.saturating_sub(sub);
        }
        out
    }

    /// Per-rank sum.
    #[must_use]
    pub fn union(&self, other: &RankCounts) -> Self {
        let mut out = *self;
        for (slot, &add) in out.0.iter_mut().zip(other.0.iter()) {
            *slot += add;
        }
        out
    }

    /// True if every per-rank count fits inside `other`.
    #[must_use]
    pub fn is_subset_of(&self, other: &RankCounts) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a <= b)
    }

    /// Ranks present with their counts, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        Rank::all()
            .map(|rank| (rank, self.get(rank)))
            .filter(|&(_, count)| count > 0)
    }

    /// Expand into a sorted card list.
    #[must_use]
    pub fn to_cards(&self) -> Vec<Rank> {
        let mut cards = Vec::with_capacity(self.total());
        for (rank, count) in self.iter() {
            cards.extend(std::iter::repeat(rank).take(count as usize));
        }
        cards
    }

    /// Raw counts ordered by rank (index 0 = rank 1).
    #[must_use]
    pub fn as_array(&self) -> &[u8; Rank::COUNT] {
        &self.0
    }
}
