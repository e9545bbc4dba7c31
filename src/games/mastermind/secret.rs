//! Secret code generation.
//!
//! Randomness is injected through [`RandomSource`] so a fixed sequence of
//! draws always produces the same secret.

use super::palette::Palette;
use super::types::{CODE_LENGTH, Color, Difficulty, SecretCode};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// A source of uniform index draws.
pub trait RandomSource {
    /// Returns an index drawn uniformly from `0..bound`. `bound` is never zero.
    fn draw_index(&mut self, bound: usize) -> usize;
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    fn draw_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Replays a fixed list of draws, wrapping each into range.
///
/// Once exhausted it keeps returning `0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws {
    draws: VecDeque<usize>,
}

impl ScriptedDraws {
    /// Creates a source that yields `draws` in order.
    pub fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedDraws {
    fn draw_index(&mut self, bound: usize) -> usize {
        self.draws.pop_front().unwrap_or(0) % bound
    }
}

/// Draws a secret of [`CODE_LENGTH`] colors, with replacement.
#[instrument(skip(palette, rng))]
pub fn generate_secret<P, R>(difficulty: Difficulty, palette: &P, rng: &mut R) -> SecretCode
where
    P: Palette + ?Sized,
    R: RandomSource + ?Sized,
{
    let colors = palette.colors_for(difficulty);
    debug_assert_eq!(colors.len(), difficulty.color_count());

    let code: [Color; CODE_LENGTH] =
        std::array::from_fn(|_| colors[rng.draw_index(colors.len())].clone());

    debug!(difficulty = %difficulty, "Secret generated");
    SecretCode::new(code)
}
