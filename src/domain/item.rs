use serde::{Deserialize, Serialize};

/// A catalogued item as stored. The identifier is assigned on first save
/// and never changes afterwards.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Item {
    pub id: i32,
    pub name: String,
}

/// Data for an item that has not been persisted yet; carries no identity.
#[derive(Clone, Debug, Deserialize)]
pub struct NewItem {
    pub name: String,
}

impl NewItem {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Replacement data applied to an existing item.
#[derive(Clone, Debug, Deserialize)]
pub struct UpdateItem {
    pub name: String,
}

impl UpdateItem {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
