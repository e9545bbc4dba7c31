//! Single-player game session with persisted progress.
//!
//! A [`Session`] owns the active [`Game`], the player's [`Settings`] and
//! cumulative [`GameStatistics`]. Every mutation is written through the
//! injected [`SnapshotStore`]. Storage problems never interrupt play:
//! failed loads and corrupt snapshots fall back to defaults, failed saves
//! are logged and the in-memory state stands.

use crate::db::SnapshotStore;
use crate::games::mastermind::{
    Color, Difficulty, Game, GameState, GameStatus, Guess, GuessError, Palette, RandomSource,
    SecretCode, Transition,
};
use crate::statistics::GameStatistics;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Store key of the active game snapshot.
pub const GAME_KEY: &str = "mastermind-game";
/// Store key of the user settings snapshot.
pub const SETTINGS_KEY: &str = "mastermind-settings";
/// Store key of the statistics snapshot.
pub const STATS_KEY: &str = "mastermind-stats";

/// User-configurable settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Difficulty used for the next new game.
    pub difficulty: Difficulty,
}

/// A player's session: one active game plus settings and statistics.
pub struct Session<S, P, R> {
    store: S,
    palette: P,
    rng: R,
    game: Game,
    settings: Settings,
    stats: GameStatistics,
}

impl<S, P, R> std::fmt::Debug for Session<S, P, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("game", &self.game)
            .field("settings", &self.settings)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl<S, P, R> Session<S, P, R>
where
    S: SnapshotStore,
    P: Palette,
    R: RandomSource,
{
    /// Restores a session from `store`, using `fallback` as the difficulty
    /// when no settings were saved.
    ///
    /// Missing, unreadable or corrupt records are replaced by defaults: a
    /// fresh game, `fallback` settings, zeroed statistics.
    #[instrument(skip(store, palette, rng))]
    pub fn open(mut store: S, palette: P, mut rng: R, fallback: Difficulty) -> Self {
        let settings = load_record::<Settings>(&mut store, SETTINGS_KEY)
            .unwrap_or(Settings { difficulty: fallback });
        let stats = load_record::<GameStatistics>(&mut store, STATS_KEY).unwrap_or_default();

        let restored = load_record::<GameState>(&mut store, GAME_KEY).and_then(|state| {
            Game::restore(state)
                .map_err(|violations| {
                    warn!(?violations, "Discarding saved game that violates invariants");
                })
                .ok()
                .filter(|game| {
                    let playable = game.is_playable_with(&palette);
                    if !playable {
                        warn!("Discarding saved game whose secret uses colors not on offer");
                    }
                    playable
                })
        });

        let mut session = match restored {
            Some(game) => {
                info!(status = %game.status(), "Resumed saved game");
                Self {
                    store,
                    palette,
                    rng,
                    game,
                    settings,
                    stats,
                }
            }
            None => {
                let game = Game::new(settings.difficulty, &palette, &mut rng);
                Self {
                    store,
                    palette,
                    rng,
                    game,
                    settings,
                    stats,
                }
            }
        };
        session.save_game();
        session
    }

    /// Starts a new game.
    ///
    /// With `Some(difficulty)` the choice is also saved as the setting for
    /// future games; with `None` the current setting is used.
    #[instrument(skip(self))]
    pub fn new_game(&mut self, difficulty: Option<Difficulty>) {
        if let Some(difficulty) = difficulty {
            self.settings.difficulty = difficulty;
            self.save_settings();
        }
        self.game = Game::new(self.settings.difficulty, &self.palette, &mut self.rng);
        self.save_game();
    }

    /// Starts a new game at the current difficulty.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.new_game(None);
    }

    /// Scores a guess against the active game.
    ///
    /// When the guess ends the game, statistics are updated and saved.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError`] if the game is over or the guess is not four
    /// filled slots; nothing changes in that case.
    #[instrument(skip(self))]
    pub fn submit_guess(&mut self, slots: &[Option<Color>]) -> Result<Transition, GuessError> {
        let transition = self.game.submit_guess(slots).inspect_err(|e| {
            debug!(error = %e, "Guess rejected");
        })?;
        if let Some(ended) = transition.ended() {
            self.stats.record(ended);
            self.save_stats();
        }
        self.save_game();
        Ok(transition)
    }

    /// Submits the row currently being composed.
    ///
    /// # Errors
    ///
    /// Same as [`Session::submit_guess`].
    #[instrument(skip(self))]
    pub fn submit_draft(&mut self) -> Result<Transition, GuessError> {
        let slots = self
            .game
            .current_guess()
            .map(|row| row.colors().to_vec())
            .unwrap_or_default();
        self.submit_guess(&slots)
    }

    /// Sets or clears one slot of the row being composed.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError`] if the game is over or `position` is out of range.
    #[instrument(skip(self))]
    pub fn update_draft_color(
        &mut self,
        position: usize,
        color: Option<Color>,
    ) -> Result<(), GuessError> {
        self.game.update_draft_color(position, color)?;
        self.save_game();
        Ok(())
    }

    /// Saves the difficulty for future games. The active game is unchanged.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.settings.difficulty = difficulty;
        self.save_settings();
    }

    /// Removes the saved game and starts fresh at the current difficulty.
    #[instrument(skip(self))]
    pub fn clear_saved_game(&mut self) {
        if let Err(e) = self.store.remove(GAME_KEY) {
            warn!(error = %e, "Failed to remove saved game");
        }
        self.game = Game::new(self.settings.difficulty, &self.palette, &mut self.rng);
    }

    /// Zeroes and saves the statistics.
    #[instrument(skip(self))]
    pub fn reset_statistics(&mut self) {
        self.stats = GameStatistics::new();
        self.save_stats();
    }

    /// The active game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The active game's state.
    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    /// The active game's status.
    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    /// True once the active game is won or lost.
    pub fn is_game_over(&self) -> bool {
        self.game.is_over()
    }

    /// The row currently being composed.
    pub fn current_guess(&self) -> Option<&Guess> {
        self.game.current_guess()
    }

    /// Submitted rows of the active game.
    pub fn completed_guesses(&self) -> Vec<&Guess> {
        self.game.state().completed_guesses().collect()
    }

    /// The active game's secret, for the game-over reveal.
    pub fn secret_code(&self) -> &SecretCode {
        self.game.state().secret_code()
    }

    /// The palette colors are drawn from.
    pub fn palette(&self) -> &P {
        &self.palette
    }

    /// Colors offered for the active game's difficulty.
    pub fn available_colors(&self) -> Vec<Color> {
        self.palette.colors_for(self.game.state().difficulty())
    }

    /// Looks up an offered color by id.
    pub fn color(&self, id: &str) -> Option<Color> {
        self.palette.color_by_id(self.game.state().difficulty(), id)
    }

    /// Current settings.
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Cumulative statistics.
    pub fn statistics(&self) -> &GameStatistics {
        &self.stats
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the session, returning the backing store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn save_game(&mut self) {
        save_record(&mut self.store, GAME_KEY, self.game.state());
    }

    fn save_settings(&mut self) {
        save_record(&mut self.store, SETTINGS_KEY, &self.settings);
    }

    fn save_stats(&mut self) {
        save_record(&mut self.store, STATS_KEY, &self.stats);
    }
}

/// Loads and parses a record, logging and swallowing every failure.
#[instrument(skip(store))]
fn load_record<T: DeserializeOwned>(store: &mut impl SnapshotStore, key: &str) -> Option<T> {
    let payload = match store.load(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => {
            debug!("No saved record");
            return None;
        }
        Err(e) => {
            warn!(error = %e, "Failed to load record");
            return None;
        }
    };
    serde_json::from_str(&payload)
        .inspect_err(|e| warn!(error = %e, "Discarding corrupt record"))
        .ok()
}

/// Serializes and saves a record, logging failures.
#[instrument(skip(store, value))]
fn save_record<T: Serialize>(store: &mut impl SnapshotStore, key: &str, value: &T) {
    let payload = match serde_json::to_string(value) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = %e, "Failed to serialize record");
            return;
        }
    };
    if let Err(e) = store.save(key, &payload) {
        warn!(error = %e, "Failed to save record");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MemoryStore, StoreError};
    use crate::games::mastermind::{ColorTheme, ScriptedDraws};

    type TestSession = Session<MemoryStore, ColorTheme, ScriptedDraws>;

    fn open(store: MemoryStore) -> TestSession {
        Session::open(store, ColorTheme::Classic, ScriptedDraws::new([0, 1, 2, 3]), Difficulty::Six)
    }

    #[derive(Debug, Default)]
    struct BrokenStore;

    impl SnapshotStore for BrokenStore {
        fn save(&mut self, _key: &str, _payload: &str) -> Result<(), StoreError> {
            Err(StoreError::new("disk full"))
        }

        fn load(&mut self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::new("disk unreadable"))
        }

        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::new("disk unreadable"))
        }
    }

    #[test]
    fn test_open_saves_fresh_game() {
        let session = open(MemoryStore::new());
        assert!(session.store().get(GAME_KEY).is_some());
        assert_eq!(session.status(), GameStatus::Playing);
    }

    #[test]
    fn test_corrupt_records_fall_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.save(GAME_KEY, "{not json").unwrap();
        store.save(SETTINGS_KEY, r#"{"difficulty": 11}"#).unwrap();
        store.save(STATS_KEY, "[]").unwrap();

        let session = open(store);
        assert_eq!(session.settings().difficulty, Difficulty::Six);
        assert_eq!(*session.statistics(), GameStatistics::new());
        assert_eq!(session.state().current_guess_index(), 0);
    }

    #[test]
    fn test_broken_store_never_blocks_play() {
        let mut session = Session::open(
            BrokenStore,
            ColorTheme::Classic,
            ScriptedDraws::new([0, 1, 2, 3]),
            Difficulty::Seven,
        );
        assert_eq!(session.settings().difficulty, Difficulty::Seven);

        let guess: Vec<_> = ["red", "blue", "green", "yellow"]
            .iter()
            .map(|id| session.color(id))
            .collect();
        let transition = session.submit_guess(&guess).unwrap();
        assert!(transition.feedback().is_solved());
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(*session.statistics().games_won(), 1);

        session.clear_saved_game();
        assert_eq!(session.status(), GameStatus::Playing);
    }

    #[test]
    fn test_set_difficulty_does_not_touch_active_game() {
        let mut session = open(MemoryStore::new());
        let before = session.state().clone();
        session.set_difficulty(Difficulty::Eight);
        assert_eq!(session.state(), &before);
        assert_eq!(session.settings().difficulty, Difficulty::Eight);
        assert!(session.store().get(SETTINGS_KEY).unwrap().contains('8'));

        session.reset_game();
        assert_eq!(session.state().difficulty(), Difficulty::Eight);
    }

    #[test]
    fn test_submit_draft_uses_composed_row() {
        let mut session = open(MemoryStore::new());
        for (position, id) in ["red", "blue", "green", "yellow"].iter().enumerate() {
            let color = session.color(id);
            session.update_draft_color(position, color).unwrap();
        }
        let transition = session.submit_draft().unwrap();
        assert!(transition.ended().is_some_and(|e| e.won()));
    }
}
