//! First-class results of player actions.
//!
//! A submitted guess either is rejected, keeps the game going, or ends it.
//! Ending a game produces a [`GameEnded`] event that statistics consume.

use super::types::{Difficulty, Feedback, GameStatus};
use serde::{Deserialize, Serialize};

/// Final outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Outcome {
    /// The code was cracked.
    Won,
    /// Guesses ran out.
    Lost,
}

/// Emitted exactly once, on the submission that ends a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEnded {
    /// Win or loss.
    pub outcome: Outcome,
    /// Difficulty of the finished game.
    pub difficulty: Difficulty,
    /// Guesses consumed, including the deciding one.
    pub guesses_used: usize,
}

impl GameEnded {
    /// True for a win.
    pub fn won(&self) -> bool {
        self.outcome == Outcome::Won
    }
}

/// What an accepted guess did to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Scored; the next row is now active.
    Continue(Feedback),
    /// Scored and the game is over.
    Ended(Feedback, GameEnded),
}

impl Transition {
    /// Feedback for the submitted guess.
    pub fn feedback(&self) -> &Feedback {
        match self {
            Self::Continue(feedback) | Self::Ended(feedback, _) => feedback,
        }
    }

    /// The end-of-game event, if this guess decided the game.
    pub fn ended(&self) -> Option<&GameEnded> {
        match self {
            Self::Continue(_) => None,
            Self::Ended(_, ended) => Some(ended),
        }
    }
}

/// Why a guess or draft edit was rejected. The game is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// The game has already finished.
    #[display("Game is already over ({})", _0)]
    GameOver(GameStatus),

    /// The guess does not have exactly four slots.
    #[display("Guess must have 4 pegs (got {})", _0)]
    WrongLength(usize),

    /// Some slots are empty.
    #[display("Guess is incomplete ({} of 4 pegs placed)", filled)]
    Incomplete {
        /// Number of filled slots.
        filled: usize,
    },

    /// Draft position outside 0..4.
    #[display("Position {} is out of range (must be 0-3)", _0)]
    PositionOutOfRange(usize),
}

impl std::error::Error for GuessError {}
