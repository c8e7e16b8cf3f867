//! State encoding for the training-data schema.
//!
//! Encodes state as a flat vector of raw counts, from one seat's point of
//! view:
//! - 13 counts of the seat's own hand, by rank (index 0 = rank 1)
//! - hand sizes of the other seats, starting from the next seat
//! - table effective rank (0 when empty) and table card count
//! - number of seats that passed this round
//! - 13 per-rank counts of cards in no hand (full deck minus every hand)
//!
//! Total features = 13 + (player_count - 1) + 2 + 1 + 13

use serde::{Deserialize, Serialize};

use crate::core::{GameState, PlayerId, Rank};

/// Version of the feature layout.
pub const FEATURE_SCHEMA_VERSION: u32 = 1;

/// Length of the feature vector for `player_count` seats.
#[must_use]
pub const fn feature_len(player_count: usize) -> usize {
    Rank::COUNT + player_count.saturating_sub(1) + 2 + 1 + Rank::COUNT
}

/// A feature vector tagged with its schema version.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub version: u32,
    pub values: Vec<f32>,
}

impl FeatureVector {
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Encode from the point of view of the seat to move.
#[must_use]
pub fn encode(state: &GameState) -> FeatureVector {
    encode_for(state, state.turn_index())
}

/// Encode from `perspective`'s point of view.
#[must_use]
pub fn encode_for(state: &GameState, perspective: PlayerId) -> FeatureVector {
    let player_count = state.player_count();
    let mut values = Vec::with_capacity(feature_len(player_count));

    values.extend(
        state
            .hand(perspective)
            .counts()
            .as_array()
            .iter()
            .map(|&c| f32::from(c)),
    );

    let mut seat = perspective;
    for _ in 1..player_count {
        seat = seat.next(player_count);
        values.push(state.hand(seat).len() as f32);
    }

    let table = state.table();
    values.push(table.effective_rank().map_or(0.0, |r| f32::from(r.value())));
    values.push(table.len() as f32);

    values.push(state.passed_in_round().len() as f32);

    values.extend(state.discarded().as_array().iter().map(|&c| f32::from(c)));

    debug_assert_eq!(values.len(), feature_len(player_count));
    FeatureVector {
        version: FEATURE_SCHEMA_VERSION,
        values,
    }
}
