//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::item::{Item, NewItem, UpdateItem};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ItemReader, ItemWriter};

mock! {
    pub Repository {}

    impl ItemReader for Repository {
        fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Item>>;
        fn list(&self) -> RepositoryResult<Vec<Item>>;
        fn exists_by_name(&self, name: &str) -> RepositoryResult<bool>;
    }

    impl ItemWriter for Repository {
        fn create(&self, new_item: &NewItem) -> RepositoryResult<Item>;
        fn update(&self, item_id: i32, updates: &UpdateItem) -> RepositoryResult<Item>;
        fn delete(&self, item_id: i32) -> RepositoryResult<()>;
    }
}
