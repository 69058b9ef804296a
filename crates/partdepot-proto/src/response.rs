//! Response types and the five-column item row.

use serde::{Deserialize, Serialize};

/// Flat wire form of an item row: a 5-element JSON array.
type ItemRowWire = (i64, String, i64, String, String);

/// One joined inventory row as it appears on the wire.
///
/// Serializes as a 5-element array in the fixed order
/// `[inventory_id, product_name, quantity, location_name, supplier_name]`.
/// That order is part of the wire contract and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRowWire", into = "ItemRowWire")]
pub struct ItemRow {
    /// Surrogate id of the inventory row.
    pub inventory_id: i64,
    /// Name of the referenced product.
    pub product_name: String,
    /// Units in stock.
    pub quantity: i64,
    /// Name of the referenced storage location.
    pub location_name: String,
    /// Name of the product's supplier.
    pub supplier_name: String,
}

impl From<ItemRowWire> for ItemRow {
    fn from(wire: ItemRowWire) -> Self {
        let (inventory_id, product_name, quantity, location_name, supplier_name) = wire;
        ItemRow {
            inventory_id,
            product_name,
            quantity,
            location_name,
            supplier_name,
        }
    }
}

impl From<ItemRow> for ItemRowWire {
    fn from(row: ItemRow) -> Self {
        (
            row.inventory_id,
            row.product_name,
            row.quantity,
            row.location_name,
            row.supplier_name,
        )
    }
}

/// The one JSON object sent back per connection.
///
/// Success responses carry `items` only for the read actions (`get_items`,
/// `search_item`); mutations answer with a bare `{"status":"success"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response {
    /// The action completed.
    Success {
        /// Joined rows for the read actions; absent for mutations.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        items: Option<Vec<ItemRow>>,
    },
    /// The action failed; `message` is shown to the user verbatim.
    Error {
        /// Human-readable failure description.
        message: String,
    },
}

impl Response {
    /// Bare success, for mutations.
    pub fn success() -> Self {
        Response::Success { items: None }
    }

    /// Success carrying joined rows, for the read actions.
    pub fn with_items(items: Vec<ItemRow>) -> Self {
        Response::Success { items: Some(items) }
    }

    /// Error response with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Response::Error {
            message: message.into(),
        }
    }
}
