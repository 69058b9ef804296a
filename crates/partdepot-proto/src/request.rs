//! Request types for the five inventory actions.
//!
//! A request is one JSON object selected by its `action` field. Dispatch is
//! done by hand on the action string rather than through a serde-tagged enum
//! so that an unknown or missing action maps to the exact wire message
//! `"Invalid action"` instead of a serde variant error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProtocolError;

/// Fields of an `add_item` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddItem {
    /// Part name. Not deduplicated: every add inserts a fresh product row.
    pub product_name: String,
    /// Units in stock. The server stores whatever integer arrives,
    /// negative included; range checks are the client's job.
    pub quantity: i64,
    /// Storage location name, deduplicated by exact match.
    pub location: String,
    /// Supplier name, deduplicated by exact match.
    pub supplier_name: String,
}

/// Fields of an `update_item` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateItem {
    /// The stock line to rewrite. An id that matches no row updates
    /// nothing and still succeeds.
    pub inventory_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub location: String,
    pub supplier_name: String,
}

/// Fields of a `delete_item` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteItem {
    /// The stock line to remove. A missing id deletes nothing and
    /// still succeeds.
    pub inventory_id: i64,
}

/// Fields of a `search_item` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchItem {
    /// Substring matched against product names. `%` and `_` pass through
    /// to the underlying LIKE pattern as wildcards.
    pub search_query: String,
}

/// One decoded request, ready for dispatch.
#[derive(Debug, Clone)]
pub enum Request {
    /// Record a new stock line.
    AddItem(AddItem),
    /// List every stock line.
    GetItems,
    /// Rewrite an existing stock line.
    UpdateItem(UpdateItem),
    /// Remove a stock line by id.
    DeleteItem(DeleteItem),
    /// Find stock lines by product-name substring.
    SearchItem(SearchItem),
}

impl Request {
    /// Wire name of this request's action.
    pub fn action(&self) -> &'static str {
        match self {
            Request::AddItem(_) => "add_item",
            Request::GetItems => "get_items",
            Request::UpdateItem(_) => "update_item",
            Request::DeleteItem(_) => "delete_item",
            Request::SearchItem(_) => "search_item",
        }
    }

    /// Decodes a request from a parsed JSON object.
    ///
    /// An unknown or missing `action` is reported as
    /// [`ProtocolError::InvalidAction`] without touching the remaining
    /// fields; a known action with missing or mistyped fields surfaces the
    /// serde error instead.
    pub fn from_value(value: Value) -> Result<Self, ProtocolError> {
        let action = value
            .get("action")
            .and_then(Value::as_str)
            .map(str::to_owned);
        match action.as_deref() {
            Some("add_item") => Ok(Request::AddItem(serde_json::from_value(value)?)),
            Some("get_items") => Ok(Request::GetItems),
            Some("update_item") => Ok(Request::UpdateItem(serde_json::from_value(value)?)),
            Some("delete_item") => Ok(Request::DeleteItem(serde_json::from_value(value)?)),
            Some("search_item") => Ok(Request::SearchItem(serde_json::from_value(value)?)),
            _ => Err(ProtocolError::InvalidAction),
        }
    }

    /// Encodes the request as the tagged JSON object the server expects.
    pub fn to_value(&self) -> Result<Value, ProtocolError> {
        let mut payload = match self {
            Request::AddItem(req) => serde_json::to_value(req)?,
            Request::GetItems => Value::Object(Default::default()),
            Request::UpdateItem(req) => serde_json::to_value(req)?,
            Request::DeleteItem(req) => serde_json::to_value(req)?,
            Request::SearchItem(req) => serde_json::to_value(req)?,
        };
        if let Value::Object(map) = &mut payload {
            map.insert("action".to_string(), Value::String(self.action().to_string()));
        }
        Ok(payload)
    }
}
