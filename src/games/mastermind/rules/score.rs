//! Guess scoring.

use super::super::{CODE_LENGTH, Color, Feedback};
use tracing::instrument;

/// Scores `guess` against `secret`.
///
/// Exact matches are counted first and remove their pegs from both sides.
/// Each remaining guess peg, in position order, then consumes the first
/// remaining secret peg of the same color for one partial marker. This
/// credits every color at most `min(count in guess, count in secret)` times.
#[instrument]
pub fn evaluate(guess: &[Color; CODE_LENGTH], secret: &[Color; CODE_LENGTH]) -> Feedback {
    let mut guess_open = [true; CODE_LENGTH];
    let mut secret_open = [true; CODE_LENGTH];

    let mut exact = 0;
    for (i, (g, s)) in guess.iter().zip(secret).enumerate() {
        if g == s {
            exact += 1;
            guess_open[i] = false;
            secret_open[i] = false;
        }
    }

    let mut partial = 0;
    for (g, _) in guess.iter().zip(guess_open).filter(|(_, open)| *open) {
        let hit = secret
            .iter()
            .enumerate()
            .position(|(j, s)| secret_open[j] && s == g);
        if let Some(j) = hit {
            secret_open[j] = false;
            partial += 1;
        }
    }

    Feedback::from_counts(exact, partial)
}

/// True when every position of `guess` matches `secret`.
#[instrument]
pub fn check_win(guess: &[Color; CODE_LENGTH], secret: &[Color; CODE_LENGTH]) -> bool {
    guess.iter().zip(secret).all(|(g, s)| g == s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(id: &str) -> Color {
        Color::new(id, "#000000", id, true)
    }

    fn code(ids: [&str; CODE_LENGTH]) -> [Color; CODE_LENGTH] {
        ids.map(color)
    }

    #[test]
    fn test_exact_and_partial_mixed() {
        let secret = code(["red", "blue", "green", "yellow"]);
        let guess = code(["red", "green", "blue", "purple"]);
        let feedback = evaluate(&guess, &secret);
        assert_eq!((feedback.exact(), feedback.partial()), (1, 2));
        assert!(feedback.is_grouped());
    }

    #[test]
    fn test_guess_duplicate_matched_partially_once() {
        let secret = code(["red", "blue", "blue", "green"]);
        let guess = code(["blue", "red", "red", "red"]);
        let feedback = evaluate(&guess, &secret);
        assert_eq!((feedback.exact(), feedback.partial()), (0, 2));
    }

    #[test]
    fn test_exact_pass_consumes_before_partial_pass() {
        // The blue in position 1 is exact; the leading blue must not steal it.
        let secret = code(["red", "blue", "green", "yellow"]);
        let guess = code(["blue", "blue", "purple", "purple"]);
        let feedback = evaluate(&guess, &secret);
        assert_eq!((feedback.exact(), feedback.partial()), (1, 0));
    }

    #[test]
    fn test_check_win() {
        let secret = code(["red", "red", "green", "green"]);
        assert!(check_win(&secret.clone(), &secret));
        assert!(!check_win(&code(["green", "green", "red", "red"]), &secret));
    }
}
