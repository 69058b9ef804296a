//! Shared server state: one store handle for all connection threads.
//!
//! The store holds a single `rusqlite::Connection`, which is `!Sync`, so
//! the whole [`InventoryDb`] sits behind a `std::sync::Mutex`. Every action
//! holds the lock for its full statement sequence, which also serializes
//! the untransacted multi-statement writes against each other.

use std::sync::{Arc, Mutex};

use partdepot_store::{InventoryDb, StoreError};

/// Shared application state, cloned into each connection thread.
#[derive(Clone)]
pub struct AppState {
    /// The shared store handle.
    pub db: Arc<Mutex<InventoryDb>>,
}

impl AppState {
    /// Opens (or creates) the SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StoreError> {
        Ok(AppState {
            db: Arc::new(Mutex::new(InventoryDb::open(path)?)),
        })
    }

    /// Backs the state with an in-memory database (for testing).
    pub fn in_memory() -> Result<Self, StoreError> {
        Ok(AppState {
            db: Arc::new(Mutex::new(InventoryDb::in_memory()?)),
        })
    }
}
