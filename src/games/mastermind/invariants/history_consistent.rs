//! History consistency invariant: submitted rows form a prefix that
//! agrees with the game status.

use super::super::{GameState, GameStatus};
use super::Invariant;

/// Invariant: rows before the cursor are submitted, rows after it are
/// untouched, and the cursor row is submitted exactly when the game is over.
///
/// A won game's deciding row is solved; a lost game ended on the last row
/// without solving it.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let cursor = state.current_guess_index();
        let rows = state.guesses();

        let Some(current) = rows.get(cursor) else {
            return false;
        };

        let prefix_ok = rows.iter().take(cursor).all(|row| row.is_complete());
        let suffix_ok = rows
            .iter()
            .skip(cursor + 1)
            .all(|row| !row.is_complete() && row.feedback().is_empty());

        let current_ok = match state.status() {
            GameStatus::Playing => !current.is_complete() && current.feedback().is_empty(),
            GameStatus::Won => current.is_complete() && current.feedback().is_solved(),
            GameStatus::Lost => {
                current.is_complete()
                    && !current.feedback().is_solved()
                    && cursor + 1 == state.max_guesses()
            }
        };

        let no_early_win = rows
            .iter()
            .take(cursor)
            .all(|row| !row.feedback().is_solved());

        prefix_ok && suffix_ok && current_ok && no_early_win
    }

    fn description() -> &'static str {
        "Submitted rows form a prefix consistent with the game status"
    }
}
