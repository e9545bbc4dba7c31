//! Game progression engine.

use super::action::{GameEnded, GuessError, Outcome, Transition};
use super::invariants::{InvariantSet, MastermindInvariants, InvariantViolation};
use super::palette::Palette;
use super::rules::{complete_code, evaluate};
use super::secret::{RandomSource, generate_secret};
use super::types::{CODE_LENGTH, Color, Difficulty, GameState, GameStatus, Guess};
use tracing::{debug, info, instrument};

/// Code-breaking game engine.
///
/// Owns one [`GameState`] and drives it from `Playing` to `Won` or `Lost`.
/// Rejected actions return `Err` and leave the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Starts a new game with a freshly drawn secret.
    #[instrument(skip(palette, rng))]
    pub fn new<P, R>(difficulty: Difficulty, palette: &P, rng: &mut R) -> Self
    where
        P: Palette + ?Sized,
        R: RandomSource + ?Sized,
    {
        let secret = generate_secret(difficulty, palette, rng);
        info!(difficulty = %difficulty, "New game started");
        Self {
            state: GameState::new(secret, difficulty),
        }
    }

    /// Resumes a game from a saved state.
    ///
    /// # Errors
    ///
    /// Returns every violated invariant if the state is not one the engine
    /// could have produced.
    #[instrument(skip(state))]
    pub fn restore(state: GameState) -> Result<Self, Vec<InvariantViolation>> {
        MastermindInvariants::check_all(&state)?;
        debug!(
            status = %state.status(),
            current_guess_index = state.current_guess_index(),
            "Game restored"
        );
        Ok(Self { state })
    }

    /// True when `palette` offers every secret color at this game's
    /// difficulty, so the secret can be guessed at all.
    #[instrument(skip(self, palette))]
    pub fn is_playable_with<P: Palette + ?Sized>(&self, palette: &P) -> bool {
        let difficulty = self.state.difficulty();
        self.state
            .secret_code()
            .colors()
            .iter()
            .all(|color| palette.color_by_id(difficulty, color.id()).is_some())
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consumes the engine, returning its state.
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// True once the game is won or lost.
    pub fn is_over(&self) -> bool {
        self.state.status().is_terminal()
    }

    /// The row currently being composed.
    pub fn current_guess(&self) -> Option<&Guess> {
        self.state.current_guess()
    }

    /// Scores a guess and advances the game.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::GameOver`] once the game has finished, and
    /// [`GuessError::WrongLength`] / [`GuessError::Incomplete`] for guesses
    /// that are not four filled slots.
    #[instrument(skip(self), fields(index = self.state.current_guess_index()))]
    pub fn submit_guess(&mut self, slots: &[Option<Color>]) -> Result<Transition, GuessError> {
        self.ensure_playing()?;
        let colors = complete_code(slots)?;
        let feedback = evaluate(&colors, self.state.secret_code().colors());

        let index = self.state.current_guess_index();
        let max_guesses = self.state.max_guesses();
        if let Some(row) = self.state.current_guess_mut() {
            row.complete(colors, feedback.clone());
        }

        let outcome = if feedback.is_solved() {
            Some(Outcome::Won)
        } else if index + 1 == max_guesses {
            Some(Outcome::Lost)
        } else {
            None
        };

        let transition = match outcome {
            Some(outcome) => {
                self.state.set_status(match outcome {
                    Outcome::Won => GameStatus::Won,
                    Outcome::Lost => GameStatus::Lost,
                });
                let ended = GameEnded {
                    outcome,
                    difficulty: self.state.difficulty(),
                    guesses_used: index + 1,
                };
                info!(outcome = %outcome, guesses_used = ended.guesses_used, "Game ended");
                Transition::Ended(feedback, ended)
            }
            None => {
                self.state.advance();
                debug!(feedback = %feedback, "Guess scored");
                Transition::Continue(feedback)
            }
        };

        debug_assert!(
            MastermindInvariants::check_all(&self.state).is_ok(),
            "Game invariants violated after guess"
        );

        Ok(transition)
    }

    /// Sets or clears one slot of the row being composed.
    ///
    /// Feedback, completion and the rest of the row are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::GameOver`] once the game has finished and
    /// [`GuessError::PositionOutOfRange`] for positions past the last slot.
    #[instrument(skip(self))]
    pub fn update_draft_color(
        &mut self,
        position: usize,
        color: Option<Color>,
    ) -> Result<(), GuessError> {
        self.ensure_playing()?;
        if position >= CODE_LENGTH {
            return Err(GuessError::PositionOutOfRange(position));
        }
        if let Some(row) = self.state.current_guess_mut() {
            row.set_color(position, color);
        }
        Ok(())
    }

    fn ensure_playing(&self) -> Result<(), GuessError> {
        match self.state.status() {
            GameStatus::Playing => Ok(()),
            status => {
                debug!(status = %status, "Action rejected: game over");
                Err(GuessError::GameOver(status))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::mastermind::test_support::{code, fresh_game};
    use crate::games::mastermind::{ColorTheme, MAX_GUESSES, ScriptedDraws};

    #[test]
    fn test_new_game_draws_secret_from_source() {
        let mut rng = ScriptedDraws::new([3, 2, 1, 0]);
        let game = Game::new(Difficulty::Seven, &ColorTheme::Classic, &mut rng);
        let ids: Vec<_> = game.state().secret_code().colors().iter().map(|c| c.id()).collect();
        assert_eq!(ids, ["yellow", "green", "blue", "red"]);
        assert_eq!(game.state().difficulty(), Difficulty::Seven);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn test_secret_outside_difficulty_is_unplayable() {
        let state = GameState::new(
            crate::games::mastermind::SecretCode::new(code(["red", "blue", "green", "pink"])),
            Difficulty::Six,
        );
        let game = Game::restore(state).unwrap();
        assert!(!game.is_playable_with(&ColorTheme::Classic));
        assert!(fresh_game(["red", "blue", "green", "pink"]).is_playable_with(&ColorTheme::Classic));
    }

    #[test]
    fn test_incomplete_guess_leaves_state_unchanged() {
        let mut game = fresh_game(["red", "blue", "green", "yellow"]);
        let before = game.clone();
        let mut slots = code(["red", "blue", "green", "yellow"]).map(Some);
        slots[2] = None;
        assert_eq!(
            game.submit_guess(&slots),
            Err(GuessError::Incomplete { filled: 3 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_draft_edit_touches_only_one_slot() {
        let mut game = fresh_game(["red", "blue", "green", "yellow"]);
        let blue = Color::new("blue", "#4444FF", "Blue", true);
        game.update_draft_color(1, Some(blue.clone())).unwrap();

        let row = game.current_guess().unwrap();
        assert_eq!(row.colors()[1], Some(blue));
        assert!(row.colors()[0].is_none());
        assert!(!row.is_complete());
        assert!(row.feedback().is_empty());

        game.update_draft_color(1, None).unwrap();
        assert!(game.current_guess().unwrap().colors()[1].is_none());
    }

    #[test]
    fn test_draft_edit_rejects_bad_position() {
        let mut game = fresh_game(["red", "blue", "green", "yellow"]);
        assert_eq!(
            game.update_draft_color(4, None),
            Err(GuessError::PositionOutOfRange(4))
        );
    }

    #[test]
    fn test_submit_overwrites_draft_row() {
        let mut game = fresh_game(["red", "blue", "green", "yellow"]);
        game.update_draft_color(0, Some(Color::new("pink", "#FFB6C1", "Pink", true)))
            .unwrap();
        game.submit_guess(&code(["blue", "blue", "blue", "blue"]).map(Some))
            .unwrap();
        let first = &game.state().guesses()[0];
        assert_eq!(first.colors()[0].as_ref().map(|c| c.id()), Some("blue"));
        assert_eq!(game.state().current_guess_index(), 1);
    }

    #[test]
    fn test_last_guess_loses() {
        let mut game = fresh_game(["red", "blue", "green", "yellow"]);
        let miss = code(["purple", "purple", "purple", "purple"]).map(Some);
        for _ in 0..MAX_GUESSES - 1 {
            assert!(matches!(game.submit_guess(&miss), Ok(Transition::Continue(_))));
        }
        let transition = game.submit_guess(&miss).unwrap();
        let ended = transition.ended().copied().unwrap();
        assert_eq!(ended.outcome, Outcome::Lost);
        assert_eq!(ended.guesses_used, MAX_GUESSES);
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.state().current_guess_index(), MAX_GUESSES - 1);
    }

    #[test]
    fn test_restore_rejects_corrupt_state() {
        let game = fresh_game(["red", "blue", "green", "yellow"]);
        let mut state = game.state().clone();
        state.set_cursor(3);
        assert!(Game::restore(state).is_err());
        assert!(Game::restore(game.into_state()).is_ok());
    }
}
