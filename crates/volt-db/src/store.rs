//! SQLite implementation of the catalog store ports.

use async_trait::async_trait;
use sqlx::SqlitePool;
use volt_catalog::{CategoryOrder, CategoryStore, ItemStore, StoreError, StoreResult};
use volt_core::{Category, Item};

use crate::error::DbError;
use crate::repository::category::CategoryRepository;
use crate::repository::item::ItemRepository;

/// Catalog store backed by the SQLite repositories.
#[derive(Debug, Clone)]
pub struct SqliteCatalogStore {
    categories: CategoryRepository,
    items: ItemRepository,
}

impl SqliteCatalogStore {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteCatalogStore {
            categories: CategoryRepository::new(pool.clone()),
            items: ItemRepository::new(pool),
        }
    }
}

fn missing_category(category_id: &str) -> StoreError {
    StoreError::MissingReference {
        entity: "Category".to_string(),
        id: category_id.to_string(),
    }
}

#[async_trait]
impl CategoryStore for SqliteCatalogStore {
    async fn insert_category(&self, category: &Category) -> StoreResult<()> {
        Ok(self.categories.insert(category).await?)
    }

    async fn category_by_id(&self, id: &str) -> StoreResult<Option<Category>> {
        Ok(self.categories.get_by_id(id).await?)
    }

    async fn category_by_name(&self, name: &str) -> StoreResult<Option<Category>> {
        Ok(self.categories.get_by_name(name).await?)
    }

    async fn list_categories(&self, order: CategoryOrder) -> StoreResult<Vec<Category>> {
        Ok(self.categories.list(order).await?)
    }

    async fn update_category(&self, category: &Category) -> StoreResult<bool> {
        match self.categories.update(category).await {
            Ok(()) => Ok(true),
            Err(DbError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_category_if_unreferenced(&self, id: &str) -> StoreResult<bool> {
        Ok(self.categories.delete_if_unreferenced(id).await?)
    }

    async fn count_categories(&self) -> StoreResult<u64> {
        Ok(self.categories.count().await?)
    }
}

#[async_trait]
impl ItemStore for SqliteCatalogStore {
    async fn insert_item(&self, item: &Item) -> StoreResult<()> {
        match self.items.insert(item).await {
            Ok(()) => Ok(()),
            Err(DbError::ForeignKeyViolation { .. }) => Err(missing_category(&item.category_id)),
            Err(e) => Err(e.into()),
        }
    }

    async fn item_by_id(&self, id: &str) -> StoreResult<Option<Item>> {
        Ok(self.items.get_by_id(id).await?)
    }

    async fn items_in_category(&self, category_id: &str) -> StoreResult<Vec<Item>> {
        Ok(self.items.list_by_category(category_id).await?)
    }

    async fn count_items_in_category(&self, category_id: &str) -> StoreResult<u64> {
        Ok(self.items.count_by_category(category_id).await?)
    }

    async fn list_items(&self) -> StoreResult<Vec<Item>> {
        Ok(self.items.list().await?)
    }

    async fn update_item(&self, item: &Item) -> StoreResult<bool> {
        match self.items.update(item).await {
            Ok(()) => Ok(true),
            Err(DbError::NotFound { .. }) => Ok(false),
            Err(DbError::ForeignKeyViolation { .. }) => Err(missing_category(&item.category_id)),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_item(&self, id: &str) -> StoreResult<bool> {
        match self.items.delete(id).await {
            Ok(()) => Ok(true),
            Err(DbError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn count_items(&self) -> StoreResult<u64> {
        Ok(self.items.count().await?)
    }
}
