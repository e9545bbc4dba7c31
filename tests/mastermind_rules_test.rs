//! Tests for guess scoring and validation.

use std::collections::HashMap;
use strictly_mastermind::{
    CODE_LENGTH, Color, ColorTheme, Difficulty, FeedbackMarker, Palette, check_win, evaluate,
    is_complete_guess,
};

fn color(id: &str) -> Color {
    ColorTheme::Classic
        .color_by_id(Difficulty::Eight, id)
        .expect("Known color")
}

fn code(ids: [&str; CODE_LENGTH]) -> [Color; CODE_LENGTH] {
    ids.map(color)
}

fn counts(guess: [&str; 4], secret: [&str; 4]) -> (usize, usize) {
    let feedback = evaluate(&code(guess), &code(secret));
    (feedback.exact(), feedback.partial())
}

const SECRET: [&str; 4] = ["red", "blue", "green", "yellow"];

#[test]
fn test_correct_guess_is_four_exact() {
    assert_eq!(counts(SECRET, SECRET), (4, 0));
    assert!(check_win(&code(SECRET), &code(SECRET)));
}

#[test]
fn test_disjoint_guess_is_empty() {
    let feedback = evaluate(&code(["purple", "orange", "purple", "orange"]), &code(SECRET));
    assert!(feedback.is_empty());
}

#[test]
fn test_repeated_guess_color_scores_once() {
    assert_eq!(counts(["red", "red", "red", "red"], SECRET), (1, 0));
}

#[test]
fn test_repeated_secret_color_scores_once_per_match() {
    assert_eq!(
        counts(SECRET, ["red", "red", "green", "green"]),
        (2, 0)
    );
}

#[test]
fn test_three_misplaced() {
    let feedback = evaluate(&code(["blue", "red", "yellow", "purple"]), &code(SECRET));
    assert_eq!(
        feedback.markers(),
        &[FeedbackMarker::Partial, FeedbackMarker::Partial, FeedbackMarker::Partial]
    );
}

#[test]
fn test_exact_markers_come_first() {
    let feedback = evaluate(&code(["red", "green", "blue", "purple"]), &code(SECRET));
    assert_eq!(
        feedback.markers(),
        &[FeedbackMarker::Exact, FeedbackMarker::Partial, FeedbackMarker::Partial]
    );
}

#[test]
fn test_validator_requires_four_filled_slots() {
    let full: Vec<_> = code(SECRET).into_iter().map(Some).collect();
    assert!(is_complete_guess(&full));
    assert!(!is_complete_guess(&full[..3]));

    let mut gap = full.clone();
    gap[3] = None;
    assert!(!is_complete_guess(&gap));

    let mut long = full.clone();
    long.push(Some(color("pink")));
    assert!(!is_complete_guess(&long));
}

/// Every code over a four-color alphabet.
fn all_codes() -> Vec<[Color; CODE_LENGTH]> {
    let alphabet = ["red", "blue", "green", "yellow"].map(color);
    (0..256usize)
        .map(|n| std::array::from_fn(|i| alphabet[(n >> (2 * i)) & 3].clone()))
        .collect()
}

fn occurrences(code: &[Color; CODE_LENGTH]) -> HashMap<&str, usize> {
    let mut map = HashMap::new();
    for c in code {
        *map.entry(c.id()).or_insert(0) += 1;
    }
    map
}

#[test]
fn test_scoring_properties_hold_exhaustively() {
    let codes = all_codes();
    for secret in &codes {
        let secret_counts = occurrences(secret);
        for guess in &codes {
            let feedback = evaluate(guess, secret);

            let positional = guess.iter().zip(secret).filter(|(g, s)| g == s).count();
            assert_eq!(feedback.exact(), positional);

            let common: usize = occurrences(guess)
                .iter()
                .map(|(id, n)| (*n).min(secret_counts.get(id).copied().unwrap_or(0)))
                .sum();
            assert_eq!(feedback.len(), common);
            assert!(feedback.len() <= CODE_LENGTH);
            assert!(feedback.is_grouped());

            assert_eq!(check_win(guess, secret), feedback.is_solved());
            assert_eq!(
                feedback.is_solved(),
                feedback.exact() == 4 && feedback.partial() == 0
            );
        }
    }
}

#[test]
fn test_counts_ignore_position_permutation() {
    // Rotating both codes together must not change the score.
    let guess = code(["blue", "red", "red", "green"]);
    let secret = code(["red", "green", "blue", "red"]);
    let base = evaluate(&guess, &secret);
    for shift in 1..CODE_LENGTH {
        let mut g = guess.clone();
        let mut s = secret.clone();
        g.rotate_left(shift);
        s.rotate_left(shift);
        assert_eq!(evaluate(&g, &s), base);
    }
}
