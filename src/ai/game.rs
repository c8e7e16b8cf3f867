//! Drive a whole game with one strategy per seat.

use tracing::info;

use crate::core::{GameRng, GameState, Move, PlayerId};
use crate::error::{DalmutiError, Result};

use super::strategy::Strategy;

/// Default turn guard for [`play_game`].
pub const DEFAULT_MAX_TURNS: u32 = 10_000;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: PlayerId,
    /// Moves applied, passes included.
    pub turns: u32,
}

/// Play `state` to the end.
///
/// `strategies[i]` moves for seat `i`. A seat that already passed this round
/// is passed automatically, with or without a strategy; any other decision
/// at a seat without one fails with [`DalmutiError::HumanSeat`]. More than
/// `max_turns` moves fails with [`DalmutiError::TurnLimit`].
pub fn play_game(
    mut state: GameState,
    strategies: &[Option<Strategy>],
    rng: &mut GameRng,
    max_turns: u32,
) -> Result<GameOutcome> {
    if strategies.len() != state.player_count() {
        return Err(DalmutiError::SeatMismatch {
            seats: state.player_count(),
            strategies: strategies.len(),
        });
    }

    let mut turns = 0;
    while !state.is_game_over() {
        if turns >= max_turns {
            return Err(DalmutiError::TurnLimit(max_turns));
        }

        let seat = state.turn_index();
        let mv = if state.has_passed(seat) {
            Move::Pass
        } else {
            match &strategies[seat.index()] {
                Some(strategy) => strategy.decide(&state, rng),
                None => return Err(DalmutiError::HumanSeat(seat)),
            }
        };

        state.apply(mv);
        turns += 1;
    }

    let winner = state
        .winner_index()
        .expect("a finished game always records its winner");
    info!(
        winner = winner.0,
        name = %state.player(winner).name,
        turns,
        "game finished"
    );

    Ok(GameOutcome { winner, turns })
}
