//! Game rules for the code-breaking game.
//!
//! Pure functions for validating and scoring guesses, kept apart from
//! game state so they can be tested and composed on their own.

pub mod score;
pub mod validate;

pub use score::{check_win, evaluate};
pub use validate::{complete_code, is_complete_guess};
