//! Task item data model
//!
//! Items are owned by the store; the view reads them and requests
//! mutations by id.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store when an item is created.
pub type ItemId = u64;

/// A single task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    /// Pre-formatted display date (e.g. "14:30"), not a raw timestamp.
    pub date: String,
    pub is_done: bool,
}

impl Item {
    /// Create a new, not-yet-done item.
    pub fn new(id: ItemId, title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            date: date.into(),
            is_done: false,
        }
    }
}
