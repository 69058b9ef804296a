//! Schema migration setup and connection pragmas for the SQLite backend.
//!
//! Uses `rusqlite_migration` to track the schema via SQLite's
//! `user_version` pragma. The SQL itself is embedded at compile time with
//! `include_str!`.

use rusqlite::Connection;
use rusqlite_migration::{Migrations, M};

use crate::error::StoreError;

/// All schema migrations, applied in order via `user_version` tracking.
fn migrations() -> Migrations<'static> {
    Migrations::new(vec![
        M::up(include_str!("migrations/001_inventory_schema.sql")),
        // Future migrations added here as new M::up(...) entries.
    ])
}

/// Opens (or creates) a SQLite database at `path` with pragmas set and all
/// pending migrations applied.
pub fn open_database(path: &str) -> Result<Connection, StoreError> {
    let mut conn = Connection::open(path)?;
    configure_and_migrate(&mut conn)?;
    Ok(conn)
}

/// Opens an in-memory SQLite database (for testing).
pub fn open_in_memory() -> Result<Connection, StoreError> {
    let mut conn = Connection::open_in_memory()?;
    configure_and_migrate(&mut conn)?;
    Ok(conn)
}

fn configure_and_migrate(conn: &mut Connection) -> Result<(), StoreError> {
    // WAL keeps readers off the writer's back; a no-op for in-memory DBs.
    conn.pragma_update(None, "journal_mode", "WAL")?;
    // NORMAL synchronous is safe under WAL.
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    // SQLite ships with foreign key enforcement off.
    conn.pragma_update(None, "foreign_keys", "ON")?;

    migrations()
        .to_latest(conn)
        .map_err(|e| StoreError::Migration(e.to_string()))?;

    Ok(())
}
