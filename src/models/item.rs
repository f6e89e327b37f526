use diesel::prelude::*;

use crate::domain::item::{
    Item as DomainItem, NewItem as DomainNewItem, UpdateItem as DomainUpdateItem,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::items)]
/// Diesel model for [`crate::domain::item::Item`].
pub struct Item {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::items)]
/// Insertable form of [`Item`].
pub struct NewItem<'a> {
    pub name: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::items)]
/// Data used when updating an [`Item`] record.
pub struct UpdateItem<'a> {
    pub name: &'a str,
}

impl From<Item> for DomainItem {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
        }
    }
}

impl<'a> From<&'a DomainNewItem> for NewItem<'a> {
    fn from(item: &'a DomainNewItem) -> Self {
        Self {
            name: item.name.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateItem> for UpdateItem<'a> {
    fn from(item: &'a DomainUpdateItem) -> Self {
        Self {
            name: item.name.as_str(),
        }
    }
}
