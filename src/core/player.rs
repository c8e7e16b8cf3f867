//! Player identification, per-player storage and seat metadata.
//!
//! ## PlayerId
//!
//! Type-safe seat index. Seats are 0-based: the first player is `PlayerId(0)`.
//!
//! ## PlayerMap
//!
//! Per-player data backed by a persistent `im::Vector`, so cloning a map is
//! O(1) and a later write copies only the touched chunk. MCTS clones game
//! states constantly; this keeps the clones independent without deep copies.

use std::ops::{Index, IndexMut};
use std::str::FromStr;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::hand::Hand;
use crate::error::DalmutiError;

/// Seat identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The next seat clockwise.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all seats for a game with `player_count` players.
    ///
    /// ```
    /// use rust_dalmuti::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) clone.
///
/// ```
/// use rust_dalmuti::core::{PlayerId, PlayerMap};
///
/// let mut cards: PlayerMap<u32> = PlayerMap::new(4, |_| 20);
/// let snapshot = cards.clone();
///
/// cards[PlayerId::new(1)] = 15;
/// assert_eq!(cards[PlayerId::new(1)], 15);
/// assert_eq!(snapshot[PlayerId::new(1)], 20);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T: Clone> {
    data: Vector<T>,
}

impl<T: Clone> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8).map(|i| factory(PlayerId(i))).collect();
        Self { data }
    }

    /// Create a map with every entry set to `value`.
    pub fn with_value(player_count: usize, value: T) -> Self {
        Self::new(player_count, |_| value.clone())
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }
}

impl<T: Clone> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T: Clone> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

impl<T: Clone> FromIterator<T> for PlayerMap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let data: Vector<T> = iter.into_iter().collect();
        assert!(!data.is_empty(), "Must have at least 1 player");
        Self { data }
    }
}

/// How a seat chooses its moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// Moves come from outside the engine.
    Human,
    Balanced,
    Aggressive,
    Defensive,
    /// Perfect-information MCTS.
    Mcts,
    /// Determinizing MCTS.
    MctsPro,
}

impl Style {
    #[must_use]
    pub fn is_ai(self) -> bool {
        self != Style::Human
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Human => "human",
            Style::Balanced => "balanced",
            Style::Aggressive => "aggressive",
            Style::Defensive => "defensive",
            Style::Mcts => "mcts",
            Style::MctsPro => "mcts_pro",
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Style {
    type Err = DalmutiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "you" | "human" => Ok(Style::Human),
            "balanced" => Ok(Style::Balanced),
            "aggressive" => Ok(Style::Aggressive),
            "defensive" => Ok(Style::Defensive),
            "mcts" => Ok(Style::Mcts),
            "mcts_pro" | "mcts-pro" => Ok(Style::MctsPro),
            _ => Err(DalmutiError::UnknownStyle(s.to_string())),
        }
    }
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub style: Style,
    pub hand: Hand,
}

impl Player {
    pub fn new(name: impl Into<String>, style: Style) -> Self {
        Self {
            name: name.into(),
            style,
            hand: Hand::new(),
        }
    }

    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }
}

/// Seat names: "You" for a human seat, otherwise "AI n".
///
/// With a human seated, AIs are numbered by seat index; without one they
/// are numbered from 1.
#[must_use]
pub fn seat_names(styles: &[Style]) -> Vec<String> {
    let human_seated = styles.contains(&Style::Human);
    styles
        .iter()
        .enumerate()
        .map(|(i, style)| match (style, human_seated) {
            (Style::Human, _) => "You".to_string(),
            (_, true) => format!("AI {i}"),
            (_, false) => format!("AI {}", i + 1),
        })
        .collect()
}
