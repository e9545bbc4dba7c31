//! Persistence error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Snapshot store failure, with the record it concerned and the call site.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error{}: {} at {}:{}", key_context(key), message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Snapshot key being read or written, when the failure concerns one.
    pub key: Option<String>,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

fn key_context(key: &Option<String>) -> String {
    key.as_deref()
        .map(|key| format!(" for snapshot '{key}'"))
        .unwrap_or_default()
}

impl StoreError {
    /// Creates a store error at the caller's location.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            key: None,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Attaches the snapshot key the failed operation was working on.
    pub fn for_key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }
}

impl From<diesel::result::Error> for StoreError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        Self::new(format!("query failed: {err}"))
    }
}
