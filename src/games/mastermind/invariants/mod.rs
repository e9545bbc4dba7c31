//! First-class invariants for the code-breaking game.
//!
//! Invariants are logical properties of [`GameState`](super::GameState)
//! that must hold after every transition. The engine asserts them in debug
//! builds, and the session uses them to reject corrupt saved snapshots.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose by type alias.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

pub mod board_shape;
pub mod feedback_sound;
pub mod history_consistent;

pub use board_shape::BoardShapeInvariant;
pub use feedback_sound::FeedbackSoundInvariant;
pub use history_consistent::HistoryConsistentInvariant;

/// Every game-state invariant as a composable set.
pub type MastermindInvariants = (
    BoardShapeInvariant,
    HistoryConsistentInvariant,
    FeedbackSoundInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::mastermind::test_support::{code, fresh_game};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = fresh_game(["red", "blue", "green", "yellow"]);
        assert!(MastermindInvariants::check_all(game.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_guesses() {
        let mut game = fresh_game(["red", "blue", "green", "yellow"]);
        game.submit_guess(&code(["red", "red", "blue", "blue"]).map(Some))
            .unwrap();
        game.submit_guess(&code(["red", "blue", "green", "yellow"]).map(Some))
            .unwrap();
        assert!(MastermindInvariants::check_all(game.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_every_violation() {
        let mut game = fresh_game(["red", "blue", "green", "yellow"]);
        let mut state = game.state().clone();
        state.set_cursor(12);
        state.guesses_mut().truncate(3);

        let violations = MastermindInvariants::check_all(&state).unwrap_err();
        assert!(violations.len() >= 2);

        game.submit_guess(&code(["red", "red", "red", "red"]).map(Some))
            .unwrap();
        type TwoInvariants = (BoardShapeInvariant, FeedbackSoundInvariant);
        assert!(TwoInvariants::check_all(game.state()).is_ok());
    }
}
