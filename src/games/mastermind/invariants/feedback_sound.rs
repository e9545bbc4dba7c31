//! Feedback soundness invariant: recorded feedback is what the rules say.

use super::super::rules::{complete_code, evaluate};
use super::super::GameState;
use super::Invariant;

/// Invariant: every submitted row is a complete code whose recorded
/// feedback equals a fresh evaluation against the secret.
pub struct FeedbackSoundInvariant;

impl Invariant<GameState> for FeedbackSoundInvariant {
    fn holds(state: &GameState) -> bool {
        let secret = state.secret_code().colors();
        state.completed_guesses().all(|row| {
            complete_code(row.colors())
                .map(|colors| evaluate(&colors, secret) == *row.feedback())
                .unwrap_or(false)
        })
    }

    fn description() -> &'static str {
        "Recorded feedback matches re-evaluation against the secret"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::mastermind::Feedback;
    use crate::games::mastermind::test_support::{code, fresh_game};

    #[test]
    fn test_scored_rows_hold() {
        let mut game = fresh_game(["red", "red", "green", "green"]);
        game.submit_guess(&code(["red", "blue", "green", "yellow"]).map(Some))
            .unwrap();
        game.submit_guess(&code(["green", "green", "red", "red"]).map(Some))
            .unwrap();
        assert!(FeedbackSoundInvariant::holds(game.state()));
    }

    #[test]
    fn test_tampered_feedback_violates() {
        let mut game = fresh_game(["red", "red", "green", "green"]);
        game.submit_guess(&code(["red", "blue", "green", "yellow"]).map(Some))
            .unwrap();
        let mut state = game.state().clone();
        state.guesses_mut()[0].complete(
            code(["red", "blue", "green", "yellow"]),
            Feedback::from_counts(3, 1),
        );
        assert!(!FeedbackSoundInvariant::holds(&state));
    }
}
