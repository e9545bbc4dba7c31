//! Guess completeness checks.

use super::super::{CODE_LENGTH, Color, GuessError};
use tracing::instrument;

/// True iff there are exactly [`CODE_LENGTH`] slots and none is empty.
#[instrument]
pub fn is_complete_guess(slots: &[Option<Color>]) -> bool {
    slots.len() == CODE_LENGTH && slots.iter().all(Option::is_some)
}

/// Converts complete slots into a code, reporting why incomplete ones fail.
///
/// # Errors
///
/// Returns [`GuessError::WrongLength`] or [`GuessError::Incomplete`].
#[instrument]
pub fn complete_code(slots: &[Option<Color>]) -> Result<[Color; CODE_LENGTH], GuessError> {
    if slots.len() != CODE_LENGTH {
        return Err(GuessError::WrongLength(slots.len()));
    }
    let filled: Vec<Color> = slots.iter().flatten().cloned().collect();
    let count = filled.len();
    filled
        .try_into()
        .map_err(|_| GuessError::Incomplete { filled: count })
}
