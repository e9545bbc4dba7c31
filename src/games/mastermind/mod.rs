mod action;
mod game;
pub mod invariants;
mod palette;
pub mod rules;
mod secret;
mod types;

pub use action::{GameEnded, GuessError, Outcome, Transition};
pub use game::Game;
pub use palette::{ColorTheme, Palette};
pub use rules::{check_win, evaluate, is_complete_guess};
pub use secret::{RandomSource, ScriptedDraws, generate_secret};
pub use types::{
    CODE_LENGTH, Color, Difficulty, DifficultyError, Feedback, FeedbackMarker, GameState,
    GameStatus, Guess, MAX_GUESSES, SecretCode,
};

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Classic-palette colors by id, for building codes in tests.
    pub fn code(ids: [&str; CODE_LENGTH]) -> [Color; CODE_LENGTH] {
        ids.map(|id| {
            ColorTheme::Classic
                .color_by_id(Difficulty::Eight, id)
                .unwrap_or_else(|| panic!("unknown test color {id}"))
        })
    }

    /// A game whose secret is exactly `ids`.
    pub fn fresh_game(ids: [&str; CODE_LENGTH]) -> Game {
        let offered = ColorTheme::Classic.colors_for(Difficulty::Eight);
        let draws = ids.map(|id| {
            offered
                .iter()
                .position(|c| c.id() == id)
                .unwrap_or_else(|| panic!("unknown test color {id}"))
        });
        Game::new(Difficulty::Eight, &ColorTheme::Classic, &mut ScriptedDraws::new(draws))
    }
}
