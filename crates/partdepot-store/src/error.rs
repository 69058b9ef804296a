//! Storage error types for partdepot-store.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying SQLite call failed (constraint violation, bad
    /// statement, busy handle).
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Applying schema migrations failed while opening the database.
    #[error("migration error: {0}")]
    Migration(String),
}
