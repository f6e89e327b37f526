use crate::domain::item::{Item, NewItem, UpdateItem};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod item;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Read side of the item store.
pub trait ItemReader {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Item>>;
    fn list(&self) -> RepositoryResult<Vec<Item>>;
    /// Exact, case-sensitive name match (SQLite BINARY collation).
    fn exists_by_name(&self, name: &str) -> RepositoryResult<bool>;
}

/// Write side of the item store.
///
/// `exists_by_name` followed by `create` is two separate statements; the
/// schema carries no unique constraint on `name`, so concurrent callers can
/// both pass the check and insert the same name.
pub trait ItemWriter {
    fn create(&self, new_item: &NewItem) -> RepositoryResult<Item>;
    /// Fails with [`errors::RepositoryError::NotFound`] when no row has
    /// the given id.
    fn update(&self, item_id: i32, updates: &UpdateItem) -> RepositoryResult<Item>;
    /// Deleting an absent id is not an error.
    fn delete(&self, item_id: i32) -> RepositoryResult<()>;
}
