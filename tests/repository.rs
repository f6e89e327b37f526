use item_catalog::domain::item::{NewItem, UpdateItem};
use item_catalog::repository::item::DieselItemRepository;
use item_catalog::repository::{ItemReader, ItemWriter, errors::RepositoryError};

mod common;

#[test]
fn test_item_repository_crud() {
    let test_db = common::TestDb::new("test_item_repository_crud.db");
    let repo = DieselItemRepository::new(test_db.pool());

    let book = repo.create(&NewItem::new("Book")).unwrap();
    let pen = repo.create(&NewItem::new("Pen")).unwrap();
    assert_ne!(book.id, pen.id);
    assert_eq!(book.name, "Book");

    let fetched = repo.get_by_id(book.id).unwrap().unwrap();
    assert_eq!(fetched.name, "Book");

    let items = repo.list().unwrap();
    assert_eq!(items.len(), 2);

    assert!(repo.exists_by_name("Book").unwrap());
    assert!(!repo.exists_by_name("Missing").unwrap());
    // Exact match only, BINARY collation.
    assert!(!repo.exists_by_name("book").unwrap());

    let updated = repo.update(book.id, &UpdateItem::new("Notebook")).unwrap();
    assert_eq!(updated.id, book.id);
    assert_eq!(updated.name, "Notebook");
    assert!(!repo.exists_by_name("Book").unwrap());

    repo.delete(book.id).unwrap();
    assert!(repo.get_by_id(book.id).unwrap().is_none());

    let items_after = repo.list().unwrap();
    assert_eq!(items_after.len(), 1);
    assert_eq!(items_after[0].name, "Pen");
}

#[test]
fn test_update_missing_item_fails() {
    let test_db = common::TestDb::new("test_update_missing_item_fails.db");
    let repo = DieselItemRepository::new(test_db.pool());

    let err = repo.update(999, &UpdateItem::new("X")).unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_delete_is_idempotent() {
    let test_db = common::TestDb::new("test_delete_is_idempotent.db");
    let repo = DieselItemRepository::new(test_db.pool());

    let item = repo.create(&NewItem::new("Book")).unwrap();
    repo.delete(item.id).unwrap();
    repo.delete(item.id).unwrap();
    assert!(repo.get_by_id(item.id).unwrap().is_none());
}

#[test]
fn test_duplicate_names_are_allowed() {
    let test_db = common::TestDb::new("test_duplicate_names_are_allowed.db");
    let repo = DieselItemRepository::new(test_db.pool());

    // Uniqueness is advisory; nothing stops two rows with the same name.
    repo.create(&NewItem::new("Book")).unwrap();
    repo.create(&NewItem::new("Book")).unwrap();
    assert_eq!(repo.list().unwrap().len(), 2);
    assert!(repo.exists_by_name("Book").unwrap());
}

#[test]
fn test_list_empty_store() {
    let test_db = common::TestDb::new("test_list_empty_store.db");
    let repo = DieselItemRepository::new(test_db.pool());

    assert!(repo.list().unwrap().is_empty());
    assert!(repo.get_by_id(1).unwrap().is_none());
}
