//! Storage-layer identifier newtypes.
//!
//! All ids are distinct newtype wrappers over `i64` (SQLite's INTEGER
//! PRIMARY KEY), providing type safety so that a `ProductId` cannot be
//! passed where a `LocationId` is expected.

use std::fmt;

/// Surrogate id of a suppliers row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SupplierId(pub i64);

/// Surrogate id of a products row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub i64);

/// Surrogate id of a locations row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationId(pub i64);

/// Surrogate id of an inventory row -- the "item" id on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InventoryId(pub i64);

// Display implementations -- just print the inner value.

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for InventoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
