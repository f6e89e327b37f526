//! Item facade: each operation is a single call into the repository
//! followed by a mapping into the response shape. Repository failures
//! propagate untranslated apart from the NotFound taxonomy in
//! [`ServiceError`].

use crate::domain::item::{Item, NewItem, UpdateItem};
use crate::dto::item::{ItemRequest, ItemResponse};
use crate::repository::{ItemReader, ItemWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns every stored item in store order.
pub fn list_items<R>(repo: &R) -> ServiceResult<Vec<ItemResponse>>
where
    R: ItemReader + ?Sized,
{
    let items = repo.list().map_err(ServiceError::from)?;

    Ok(items.into_iter().map(ItemResponse::from).collect())
}

/// Fetches an item by its identifier.
pub fn get_item<R>(repo: &R, item_id: i32) -> ServiceResult<Option<ItemResponse>>
where
    R: ItemReader + ?Sized,
{
    let item = repo.get_by_id(item_id).map_err(ServiceError::from)?;

    Ok(item.map(ItemResponse::from))
}

/// Fetches the stored record itself, for composition by other services.
pub fn get_item_model<R>(repo: &R, item_id: i32) -> ServiceResult<Option<Item>>
where
    R: ItemReader + ?Sized,
{
    repo.get_by_id(item_id).map_err(ServiceError::from)
}

/// Persists a new item and returns it with its assigned identifier.
///
/// The name is taken as given; see [`ItemRequest`] for the validation
/// convention.
pub fn create_item<R>(repo: &R, request: &ItemRequest) -> ServiceResult<ItemResponse>
where
    R: ItemWriter + ?Sized,
{
    let new_item = NewItem::new(request.name.clone());

    let created = repo.create(&new_item).map_err(ServiceError::from)?;

    Ok(created.into())
}

/// Renames an existing item.
///
/// Fails with [`ServiceError::NotFound`] when the id does not exist; the
/// failure is passed through to the caller, not recovered here.
pub fn update_item<R>(repo: &R, item_id: i32, request: &ItemRequest) -> ServiceResult<ItemResponse>
where
    R: ItemWriter + ?Sized,
{
    let updates = UpdateItem::new(request.name.clone());

    let updated = repo.update(item_id, &updates).map_err(ServiceError::from)?;

    Ok(updated.into())
}

/// Deletes an item. Succeeds even when the id was already absent.
pub fn delete_item<R>(repo: &R, item_id: i32) -> ServiceResult<()>
where
    R: ItemWriter + ?Sized,
{
    repo.delete(item_id).map_err(ServiceError::from)
}

/// Checks whether any stored item carries exactly the given name.
///
/// Advisory only: a create racing this check can still insert a duplicate
/// name, since the store enforces no uniqueness.
pub fn item_name_exists<R>(repo: &R, name: &str) -> ServiceResult<bool>
where
    R: ItemReader + ?Sized,
{
    repo.exists_by_name(name).map_err(ServiceError::from)
}
