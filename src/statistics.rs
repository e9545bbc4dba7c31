//! Cumulative game statistics.

use crate::games::mastermind::{Difficulty, GameEnded, Outcome};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Running counters folded from finished games.
///
/// Only [`GameStatistics::record`] mutates the counters, once per finished game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GameStatistics {
    games_played: u32,
    games_won: u32,
    best_streak: u32,
    current_streak: u32,
    wins_by_difficulty: BTreeMap<Difficulty, u32>,
    average_guesses: f64,
    total_guesses: u32,
}

impl Default for GameStatistics {
    fn default() -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            best_streak: 0,
            current_streak: 0,
            wins_by_difficulty: Difficulty::iter().map(|d| (d, 0)).collect(),
            average_guesses: 0.0,
            total_guesses: 0,
        }
    }
}

impl GameStatistics {
    /// Zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a finished game into the counters.
    #[instrument(skip(self))]
    pub fn record(&mut self, ended: &GameEnded) {
        self.games_played += 1;
        match ended.outcome {
            Outcome::Won => {
                self.games_won += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
                *self.wins_by_difficulty.entry(ended.difficulty).or_insert(0) += 1;
                self.total_guesses += ended.guesses_used as u32;
                self.average_guesses = f64::from(self.total_guesses) / f64::from(self.games_won);
            }
            Outcome::Lost => {
                self.current_streak = 0;
            }
        }
        debug!(
            games_played = self.games_played,
            games_won = self.games_won,
            current_streak = self.current_streak,
            "Statistics updated"
        );
    }

    /// Wins at `difficulty`.
    pub fn wins_at(&self, difficulty: Difficulty) -> u32 {
        self.wins_by_difficulty.get(&difficulty).copied().unwrap_or(0)
    }

    /// Win rate as a percentage (0.0–100.0).
    #[instrument(skip(self))]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played) * 100.0
        }
    }
}
