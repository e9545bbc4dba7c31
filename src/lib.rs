//! Strictly Mastermind library - type-safe code-breaking game engine
//!
//! # Architecture
//!
//! - **Games**: pure game logic - secret generation, guess validation,
//!   duplicate-safe scoring and the playing/won/lost state machine
//! - **Statistics**: win/loss counters folded from finished games
//! - **Persistence**: key-value snapshot stores (in-memory and SQLite)
//! - **Session**: one player's active game, settings and statistics,
//!   written through to a store after every change
//!
//! # Example
//!
//! ```
//! use strictly_mastermind::{ColorTheme, Difficulty, MemoryStore, ScriptedDraws, Session};
//!
//! let mut session = Session::open(
//!     MemoryStore::new(),
//!     ColorTheme::Classic,
//!     ScriptedDraws::new([0, 1, 2, 3]),
//!     Difficulty::Six,
//! );
//!
//! let guess: Vec<_> = ["red", "blue", "green", "yellow"]
//!     .iter()
//!     .map(|id| session.color(id))
//!     .collect();
//! let transition = session.submit_guess(&guess).unwrap();
//! assert!(transition.feedback().is_solved());
//! assert!(session.is_game_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod db;
mod games;
mod session;
mod statistics;

// Crate-level exports - Configuration
pub use config::{Config, ConfigError};

// Crate-level exports - Persistence
pub use db::{MemoryStore, NewSnapshot, Snapshot, SnapshotRepository, SnapshotStore, StoreError};

// Crate-level exports - Session management
pub use session::{GAME_KEY, SETTINGS_KEY, STATS_KEY, Session, Settings};

// Crate-level exports - Statistics
pub use statistics::GameStatistics;

// Crate-level exports - Game types
pub use games::mastermind::{
    CODE_LENGTH, Color, ColorTheme, Difficulty, DifficultyError, Feedback, FeedbackMarker, Game,
    GameEnded, GameState, GameStatus, Guess, GuessError, MAX_GUESSES, Outcome, Palette,
    RandomSource, ScriptedDraws, SecretCode, Transition, check_win, evaluate, generate_secret,
    is_complete_guess,
};

// Crate-level exports - Invariants
pub use games::mastermind::invariants::{
    Invariant, InvariantSet, InvariantViolation, MastermindInvariants,
};
