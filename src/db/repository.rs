//! SQLite-backed snapshot repository.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::db::{NewSnapshot, Snapshot, SnapshotStore, StoreError, schema};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Snapshot store persisted to a SQLite database file.
///
/// Each operation opens its own connection, so the handle is cheap to clone.
#[derive(Debug, Clone)]
pub struct SnapshotRepository {
    db_path: String,
}

impl SnapshotRepository {
    /// Opens the database at `db_path`, creating it and applying pending
    /// migrations as needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the database cannot be opened or migrated.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn open(db_path: String) -> Result<Self, StoreError> {
        info!(path = %db_path, "Opening SnapshotRepository");
        let repository = Self { db_path };
        let mut conn = repository.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::new(format!("Migration failed: {}", e)))?;
        debug!(applied = applied.len(), "Migrations applied");
        Ok(repository)
    }

    /// Path of the backing database file.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, StoreError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| StoreError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Returns the full stored row for `key`, including its timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn snapshot(&self, key: &str) -> Result<Option<Snapshot>, StoreError> {
        let mut conn = self.connection().map_err(|e| e.for_key(key))?;
        let row = schema::snapshots::table
            .find(key)
            .select(Snapshot::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| StoreError::from(e).for_key(key))?;
        Ok(row)
    }

    /// Lists stored keys in alphabetical order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut conn = self.connection()?;
        let keys = schema::snapshots::table
            .select(schema::snapshots::name)
            .order(schema::snapshots::name.asc())
            .load::<String>(&mut conn)?;
        debug!(count = keys.len(), "Keys loaded");
        Ok(keys)
    }
}

impl SnapshotStore for SnapshotRepository {
    #[instrument(skip(self, payload))]
    fn save(&mut self, key: &str, payload: &str) -> Result<(), StoreError> {
        debug!(bytes = payload.len(), "Saving snapshot");
        let mut conn = self.connection().map_err(|e| e.for_key(key))?;
        let row = NewSnapshot::new(key.to_string(), payload.to_string());
        diesel::replace_into(schema::snapshots::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| StoreError::from(e).for_key(key))?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn load(&mut self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.connection().map_err(|e| e.for_key(key))?;
        let payload = schema::snapshots::table
            .find(key)
            .select(schema::snapshots::payload)
            .first::<String>(&mut conn)
            .optional()
            .map_err(|e| StoreError::from(e).for_key(key))?;
        debug!(found = payload.is_some(), "Snapshot lookup");
        Ok(payload)
    }

    #[instrument(skip(self))]
    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.connection().map_err(|e| e.for_key(key))?;
        let removed = diesel::delete(schema::snapshots::table.find(key))
            .execute(&mut conn)
            .map_err(|e| StoreError::from(e).for_key(key))?;
        debug!(removed, "Snapshot removed");
        Ok(())
    }
}
