//! Core domain types for the code-breaking game.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of pegs in every code and guess, independent of difficulty.
pub const CODE_LENGTH: usize = 4;

/// Number of guesses allowed per game.
pub const MAX_GUESSES: usize = 10;

/// A peg color supplied by a [`Palette`](super::Palette).
///
/// Equality and hashing consider only the `id`; hex value, name and
/// accessibility flag are display data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Color {
    id: String,
    hex: String,
    name: String,
    accessible: bool,
}

impl Color {
    /// Creates a color. Palettes are the only intended callers.
    pub fn new(
        id: impl Into<String>,
        hex: impl Into<String>,
        name: impl Into<String>,
        accessible: bool,
    ) -> Self {
        Self {
            id: id.into(),
            hex: hex.into(),
            name: name.into(),
            accessible,
        }
    }

    /// Unique identifier, e.g. `"red"`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display hex value, e.g. `"#FF4444"`.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Human-readable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the color is considered accessible.
    pub fn accessible(&self) -> bool {
        self.accessible
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Color {}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Size of the color pool a secret is drawn from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Difficulty {
    /// Six colors.
    #[default]
    Six,
    /// Seven colors.
    Seven,
    /// Eight colors.
    Eight,
}

impl Difficulty {
    /// Number of colors available at this difficulty.
    pub fn color_count(self) -> usize {
        match self {
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.color_count() as u8
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = DifficultyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            6 => Ok(Self::Six),
            7 => Ok(Self::Seven),
            8 => Ok(Self::Eight),
            other => Err(DifficultyError::OutOfRange(other.to_string())),
        }
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| DifficultyError::OutOfRange(s.to_string()))
            .and_then(Self::try_from)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color_count())
    }
}

/// Error produced when parsing a difficulty level.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DifficultyError {
    /// Value is not one of 6, 7 or 8.
    #[display("Difficulty must be 6, 7 or 8 (got '{}')", _0)]
    OutOfRange(String),
}

impl std::error::Error for DifficultyError {}

/// One unit of feedback for a scored guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FeedbackMarker {
    /// Right color in the right position.
    Exact,
    /// Right color in a different, unconsumed position.
    Partial,
}

/// Feedback for a scored guess.
///
/// Markers are grouped, all [`FeedbackMarker::Exact`] first, so the
/// sequence reveals how many pegs matched but never which ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feedback {
    markers: Vec<FeedbackMarker>,
}

impl Feedback {
    /// Builds grouped feedback from exact and partial counts.
    pub fn from_counts(exact: usize, partial: usize) -> Self {
        let markers = std::iter::repeat_n(FeedbackMarker::Exact, exact)
            .chain(std::iter::repeat_n(FeedbackMarker::Partial, partial))
            .collect();
        Self { markers }
    }

    /// Markers in grouped order.
    pub fn markers(&self) -> &[FeedbackMarker] {
        &self.markers
    }

    /// Number of exact markers.
    pub fn exact(&self) -> usize {
        self.count(FeedbackMarker::Exact)
    }

    /// Number of partial markers.
    pub fn partial(&self) -> usize {
        self.count(FeedbackMarker::Partial)
    }

    /// Total markers.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// True when nothing in the guess matched.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// True when every peg matched in place.
    pub fn is_solved(&self) -> bool {
        self.exact() == CODE_LENGTH && self.partial() == 0
    }

    /// True when markers are exact-then-partial.
    pub fn is_grouped(&self) -> bool {
        self.markers
            .windows(2)
            .all(|pair| !(pair[0] == FeedbackMarker::Partial && pair[1] == FeedbackMarker::Exact))
    }

    fn count(&self, marker: FeedbackMarker) -> usize {
        self.markers.iter().filter(|m| **m == marker).count()
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "exact:{} partial:{}", self.exact(), self.partial())
    }
}

/// The hidden code for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretCode([Color; CODE_LENGTH]);

impl SecretCode {
    /// Wraps a full code.
    pub fn new(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }

    /// The pegs, in position order.
    pub fn colors(&self) -> &[Color; CODE_LENGTH] {
        &self.0
    }
}

/// One guess row: the slots, its feedback and whether it was submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guess {
    colors: [Option<Color>; CODE_LENGTH],
    feedback: Feedback,
    is_complete: bool,
}

impl Guess {
    /// An empty, unsubmitted row.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Slot contents; `None` is an empty slot.
    pub fn colors(&self) -> &[Option<Color>; CODE_LENGTH] {
        &self.colors
    }

    /// Feedback, empty until submitted.
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Whether the row has been submitted.
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub(super) fn set_color(&mut self, position: usize, color: Option<Color>) {
        self.colors[position] = color;
    }

    pub(super) fn complete(&mut self, colors: [Color; CODE_LENGTH], feedback: Feedback) {
        self.colors = colors.map(Some);
        self.feedback = feedback;
        self.is_complete = true;
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameStatus {
    /// Guesses are still accepted.
    Playing,
    /// The code was cracked.
    Won,
    /// All guesses used without cracking the code.
    Lost,
}

impl GameStatus {
    /// True for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }

    /// Player-facing message for this status.
    #[instrument]
    pub fn message(self) -> &'static str {
        match self {
            Self::Playing => "Game in progress",
            Self::Won => "Congratulations! You cracked the code!",
            Self::Lost => "Game over! Better luck next time!",
        }
    }
}

/// Complete game state, persisted as a snapshot after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    secret_code: SecretCode,
    guesses: Vec<Guess>,
    current_guess_index: usize,
    game_status: GameStatus,
    difficulty: Difficulty,
    max_guesses: usize,
}

impl GameState {
    /// Creates a fresh game around the given secret.
    pub fn new(secret_code: SecretCode, difficulty: Difficulty) -> Self {
        Self {
            secret_code,
            guesses: vec![Guess::empty(); MAX_GUESSES],
            current_guess_index: 0,
            game_status: GameStatus::Playing,
            difficulty,
            max_guesses: MAX_GUESSES,
        }
    }

    /// The secret code.
    pub fn secret_code(&self) -> &SecretCode {
        &self.secret_code
    }

    /// All guess rows, submitted or not.
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Index of the row being composed (or the deciding row once over).
    pub fn current_guess_index(&self) -> usize {
        self.current_guess_index
    }

    /// Game status.
    pub fn status(&self) -> GameStatus {
        self.game_status
    }

    /// Difficulty this game was created with.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Maximum number of guesses.
    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// The row at the cursor.
    pub fn current_guess(&self) -> Option<&Guess> {
        self.guesses.get(self.current_guess_index)
    }

    /// Submitted rows, in order.
    pub fn completed_guesses(&self) -> impl Iterator<Item = &Guess> {
        self.guesses.iter().filter(|g| g.is_complete())
    }

    pub(super) fn current_guess_mut(&mut self) -> Option<&mut Guess> {
        self.guesses.get_mut(self.current_guess_index)
    }

    pub(super) fn advance(&mut self) {
        self.current_guess_index += 1;
    }

    pub(super) fn set_status(&mut self, status: GameStatus) {
        self.game_status = status;
    }

    #[cfg(test)]
    pub(crate) fn guesses_mut(&mut self) -> &mut Vec<Guess> {
        &mut self.guesses
    }

    #[cfg(test)]
    pub(crate) fn set_cursor(&mut self, index: usize) {
        self.current_guess_index = index;
    }
}
