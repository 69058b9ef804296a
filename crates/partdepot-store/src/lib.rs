//! SQLite persistence for the partdepot four-entity inventory schema.
//!
//! The store owns all four tables (suppliers, products, locations,
//! inventory) and exposes one method per server action plus the
//! upsert-by-name helpers those actions share. Callers never see SQL.
//!
//! # Modules
//!
//! - [`error`]: StoreError enum with all failure modes
//! - [`types`]: id newtypes for the four tables
//! - [`schema`]: migration setup and connection pragmas
//! - [`sqlite`]: the [`InventoryDb`] implementation

pub mod error;
pub mod schema;
pub mod sqlite;
pub mod types;

// Re-export key types for ergonomic use.
pub use error::StoreError;
pub use sqlite::InventoryDb;
pub use types::{InventoryId, LocationId, ProductId, SupplierId};
