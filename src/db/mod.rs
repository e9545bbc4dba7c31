//! Persistence layer for game, settings and statistics snapshots.

mod error;
mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only
mod store;

pub use error::StoreError;
pub use models::{NewSnapshot, Snapshot};
pub use repository::SnapshotRepository;
pub use store::{MemoryStore, SnapshotStore};
