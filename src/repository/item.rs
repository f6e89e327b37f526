use diesel::dsl::exists;
use diesel::prelude::*;

use crate::{
    db::DbPool,
    domain::item::{Item, NewItem, UpdateItem},
    repository::{ItemReader, ItemWriter, errors::RepositoryResult},
};

/// Diesel implementation of [`ItemReader`] and [`ItemWriter`].
pub struct DieselItemRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselItemRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl ItemReader for DieselItemRepository<'_> {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Item>> {
        use crate::models::item::Item as DbItem;
        use crate::schema::items;

        let mut conn = self.pool.get()?;
        let item = items::table.find(id).first::<DbItem>(&mut conn).optional()?;

        Ok(item.map(Into::into))
    }

    fn list(&self) -> RepositoryResult<Vec<Item>> {
        use crate::models::item::Item as DbItem;
        use crate::schema::items;

        let mut conn = self.pool.get()?;
        let items = items::table
            .order(items::id.asc())
            .load::<DbItem>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn exists_by_name(&self, name: &str) -> RepositoryResult<bool> {
        use crate::schema::items;

        let mut conn = self.pool.get()?;
        let found = diesel::select(exists(items::table.filter(items::name.eq(name))))
            .get_result::<bool>(&mut conn)?;

        Ok(found)
    }
}

impl ItemWriter for DieselItemRepository<'_> {
    fn create(&self, new_item: &NewItem) -> RepositoryResult<Item> {
        use crate::models::item::{Item as DbItem, NewItem as DbNewItem};
        use crate::schema::items;

        let mut conn = self.pool.get()?;
        let insertable: DbNewItem = new_item.into();
        let created = diesel::insert_into(items::table)
            .values(&insertable)
            .get_result::<DbItem>(&mut conn)?;

        Ok(created.into())
    }

    fn update(&self, item_id: i32, updates: &UpdateItem) -> RepositoryResult<Item> {
        use crate::models::item::{Item as DbItem, UpdateItem as DbUpdateItem};
        use crate::schema::items;

        let mut conn = self.pool.get()?;
        let db_updates: DbUpdateItem = updates.into();

        let updated = diesel::update(items::table.find(item_id))
            .set(&db_updates)
            .get_result::<DbItem>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete(&self, item_id: i32) -> RepositoryResult<()> {
        use crate::schema::items;

        let mut conn = self.pool.get()?;
        diesel::delete(items::table.find(item_id)).execute(&mut conn)?;
        Ok(())
    }
}
