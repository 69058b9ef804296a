//! SQLite implementation of the inventory store.
//!
//! [`InventoryDb`] owns a single `rusqlite::Connection`; callers that share
//! one handle across threads wrap the whole store in a mutex, the store
//! itself performs no locking. Multi-statement actions are NOT wrapped in a
//! transaction: each statement commits on its own, so concurrent writers
//! that bypass the shared mutex interleave at statement granularity.

use rusqlite::{params, OptionalExtension};

use partdepot_proto::ItemRow;

use crate::error::StoreError;
use crate::types::{InventoryId, LocationId, ProductId, SupplierId};

/// The four-way join behind `get_items` and `search_item`. Column order is
/// the wire contract: inventory id, product name, quantity, location name,
/// supplier name.
const ITEM_SELECT: &str = "SELECT inventory.inventory_id, products.product_name, \
     inventory.quantity, locations.location_name, suppliers.supplier_name \
     FROM inventory \
     JOIN products ON inventory.product_id = products.product_id \
     JOIN locations ON inventory.location_id = locations.location_id \
     JOIN suppliers ON products.supplier_id = suppliers.supplier_id";

/// SQLite-backed store for the four inventory tables.
pub struct InventoryDb {
    conn: rusqlite::Connection,
}

impl InventoryDb {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn open(path: &str) -> Result<Self, StoreError> {
        let conn = crate::schema::open_database(path)?;
        Ok(InventoryDb { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(InventoryDb { conn })
    }

    // -----------------------------------------------------------------------
    // Upsert helpers
    // -----------------------------------------------------------------------

    /// Inserts a supplier if the name is new, then returns its id.
    ///
    /// Calling this twice with the same name yields the same id and exactly
    /// one row.
    pub fn upsert_supplier(&self, name: &str) -> Result<SupplierId, StoreError> {
        self.conn.execute(
            "INSERT OR IGNORE INTO suppliers (supplier_name) VALUES (?1)",
            params![name],
        )?;
        let id = self.conn.query_row(
            "SELECT supplier_id FROM suppliers WHERE supplier_name = ?1",
            params![name],
            |row| row.get(0),
        )?;
        Ok(SupplierId(id))
    }

    /// Inserts a location if the name is new, then returns its id.
    pub fn upsert_location(&self, name: &str) -> Result<LocationId, StoreError> {
        self.conn.execute(
            "INSERT OR IGNORE INTO locations (location_name) VALUES (?1)",
            params![name],
        )?;
        let id = self.conn.query_row(
            "SELECT location_id FROM locations WHERE location_name = ?1",
            params![name],
            |row| row.get(0),
        )?;
        Ok(LocationId(id))
    }

    /// Oldest products row with this exact name, if any. Product names are
    /// not unique, so "oldest" is the tiebreak.
    fn find_product(&self, name: &str) -> Result<Option<ProductId>, StoreError> {
        let id: Option<i64> = self
            .conn
            .query_row(
                "SELECT product_id FROM products WHERE product_name = ?1 \
                 ORDER BY product_id LIMIT 1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(id.map(ProductId))
    }

    /// Unconditionally inserts a products row and returns its id.
    fn insert_product(&self, name: &str, supplier: SupplierId) -> Result<ProductId, StoreError> {
        self.conn.execute(
            "INSERT INTO products (product_name, supplier_id) VALUES (?1, ?2)",
            params![name, supplier.0],
        )?;
        Ok(ProductId(self.conn.last_insert_rowid()))
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Records a new stock line.
    ///
    /// Always inserts a fresh products row, even when the name already
    /// exists. The inventory row then references the OLDEST product with
    /// that name -- only the new row when the name was previously unseen.
    /// `update_item` resolves products the other way around; the asymmetry
    /// is deliberate and kept.
    pub fn add_item(
        &self,
        product_name: &str,
        quantity: i64,
        location: &str,
        supplier_name: &str,
    ) -> Result<(), StoreError> {
        let supplier = self.upsert_supplier(supplier_name)?;
        self.insert_product(product_name, supplier)?;
        // Resolve by name, not by the id just generated.
        let product: i64 = self.conn.query_row(
            "SELECT product_id FROM products WHERE product_name = ?1 \
             ORDER BY product_id LIMIT 1",
            params![product_name],
            |row| row.get(0),
        )?;
        let location = self.upsert_location(location)?;
        self.conn.execute(
            "INSERT INTO inventory (product_id, quantity, location_id) VALUES (?1, ?2, ?3)",
            params![product, quantity, location.0],
        )?;
        Ok(())
    }

    /// Repoints an existing stock line at freshly resolved parents and sets
    /// its quantity.
    ///
    /// The product is resolved by name first; a new products row is
    /// inserted only when no product with that name exists. An
    /// `inventory_id` that matches no row updates nothing and is not an
    /// error.
    pub fn update_item(
        &self,
        inventory_id: InventoryId,
        product_name: &str,
        quantity: i64,
        location: &str,
        supplier_name: &str,
    ) -> Result<(), StoreError> {
        let supplier = self.upsert_supplier(supplier_name)?;
        let product = match self.find_product(product_name)? {
            Some(id) => id,
            None => self.insert_product(product_name, supplier)?,
        };
        let location = self.upsert_location(location)?;
        self.conn.execute(
            "UPDATE inventory SET product_id = ?1, quantity = ?2, location_id = ?3 \
             WHERE inventory_id = ?4",
            params![product.0, quantity, location.0, inventory_id.0],
        )?;
        Ok(())
    }

    /// Deletes one stock line by id.
    ///
    /// Supplier, product, and location rows stay in place regardless of
    /// remaining references. A missing id deletes nothing and is not an
    /// error.
    pub fn delete_item(&self, inventory_id: InventoryId) -> Result<(), StoreError> {
        self.conn.execute(
            "DELETE FROM inventory WHERE inventory_id = ?1",
            params![inventory_id.0],
        )?;
        Ok(())
    }

    /// All stock lines, one [`ItemRow`] per inventory row.
    ///
    /// Row order is whatever SQLite produces; no ordering is guaranteed.
    pub fn list_items(&self) -> Result<Vec<ItemRow>, StoreError> {
        let mut stmt = self.conn.prepare_cached(ITEM_SELECT)?;
        let rows = stmt.query_map([], Self::item_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Stock lines whose product name contains `query` as a substring.
    ///
    /// Matching uses LIKE under SQLite's default collation, so it is
    /// case-insensitive for ASCII; `%` and `_` in the query act as
    /// wildcards.
    pub fn search_items(&self, query: &str) -> Result<Vec<ItemRow>, StoreError> {
        let sql = format!("{ITEM_SELECT} WHERE products.product_name LIKE '%' || ?1 || '%'");
        let mut stmt = self.conn.prepare_cached(&sql)?;
        let rows = stmt.query_map(params![query], Self::item_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn item_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ItemRow> {
        Ok(ItemRow {
            inventory_id: row.get(0)?,
            product_name: row.get(1)?,
            quantity: row.get(2)?,
            location_name: row.get(3)?,
            supplier_name: row.get(4)?,
        })
    }
}
