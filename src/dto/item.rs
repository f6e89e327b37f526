//! Transfer shapes for item operations.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::item::Item;

/// Incoming payload for creating or renaming an item.
///
/// A non-empty name is the convention; the service layer does not enforce
/// it, so callers that want the guarantee run `validate()` first.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ItemRequest {
    #[validate(length(min = 1))]
    pub name: String,
}

/// Outgoing representation of a stored item.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ItemResponse {
    pub id: i32,
    pub name: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
        }
    }
}

/// Sort order requested by a listing caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Listing filter accepted from callers.
///
/// No query consumes these fields yet: the consuming listing endpoint was
/// never written, so applying them here would pin down semantics nothing
/// depends on. [`crate::services::item::list_items`] ignores the filter and
/// returns items in store order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemListFilter {
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub direction: Option<SortDirection>,
}
