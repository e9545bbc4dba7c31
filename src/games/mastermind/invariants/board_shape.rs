//! Board shape invariant: fixed row count and an in-bounds cursor.

use super::super::{GameState, MAX_GUESSES};
use super::Invariant;

/// Invariant: the board has exactly `max_guesses` rows and the cursor
/// points at one of them.
pub struct BoardShapeInvariant;

impl Invariant<GameState> for BoardShapeInvariant {
    fn holds(state: &GameState) -> bool {
        state.max_guesses() == MAX_GUESSES
            && state.guesses().len() == state.max_guesses()
            && state.current_guess_index() < state.max_guesses()
    }

    fn description() -> &'static str {
        "Board has max_guesses rows and the cursor is in range"
    }
}
