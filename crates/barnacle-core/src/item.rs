//! Item — a single todo entry with a unique id and free-form text.

use serde::{Deserialize, Serialize};

use crate::id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Immutable once created, unique within the list.
    pub id: String,
    /// Free-form text, never empty after creation.
    pub value: String,
}

impl Item {
    /// Create an item with a freshly generated id.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            id: id::new_item_id(),
            value: value.into(),
        }
    }
}
