//! In-process entity store.
//!
//! Both tables sit behind one `RwLock`, so every port method is atomic with
//! respect to every other. Records are kept in insertion order, which is the
//! creation order the listings promise.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use volt_core::{name_key, Category, Item};

use crate::error::{StoreError, StoreResult};
use crate::store::{CategoryOrder, CategoryStore, ItemStore};

#[derive(Debug, Default)]
struct Tables {
    categories: Vec<Category>,
    items: Vec<Item>,
}

impl Tables {
    fn category_exists(&self, id: &str) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }

    fn missing_category(id: &str) -> StoreError {
        StoreError::MissingReference {
            entity: "Category".to_string(),
            id: id.to_string(),
        }
    }
}

/// Catalog store kept entirely in memory.
///
/// Cloning yields another handle onto the same tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryStore for MemoryCatalogStore {
    async fn insert_category(&self, category: &Category) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        let key = category.name_key();
        if tables.categories.iter().any(|c| c.name_key() == key) {
            return Err(StoreError::UniqueViolation {
                field: "categories.name_key".to_string(),
            });
        }
        tables.categories.push(category.clone());
        Ok(())
    }

    async fn category_by_id(&self, id: &str) -> StoreResult<Option<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn category_by_name(&self, name: &str) -> StoreResult<Option<Category>> {
        let key = name_key(name);
        let tables = self.tables.read().await;
        Ok(tables
            .categories
            .iter()
            .find(|c| c.name_key() == key)
            .cloned())
    }

    async fn list_categories(&self, order: CategoryOrder) -> StoreResult<Vec<Category>> {
        let mut categories = self.tables.read().await.categories.clone();
        if order == CategoryOrder::Name {
            // stable, so equal keys keep creation order
            categories.sort_by_key(|c| c.name_key());
        }
        Ok(categories)
    }

    async fn update_category(&self, category: &Category) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let key = category.name_key();
        if tables
            .categories
            .iter()
            .any(|c| c.id != category.id && c.name_key() == key)
        {
            return Err(StoreError::UniqueViolation {
                field: "categories.name_key".to_string(),
            });
        }
        match tables.categories.iter_mut().find(|c| c.id == category.id) {
            Some(slot) => {
                *slot = category.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_category_if_unreferenced(&self, id: &str) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.items.iter().any(|i| i.category_id == id) {
            return Ok(false);
        }
        let before = tables.categories.len();
        tables.categories.retain(|c| c.id != id);
        Ok(tables.categories.len() < before)
    }

    async fn count_categories(&self) -> StoreResult<u64> {
        Ok(self.tables.read().await.categories.len() as u64)
    }
}

#[async_trait]
impl ItemStore for MemoryCatalogStore {
    async fn insert_item(&self, item: &Item) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        if !tables.category_exists(&item.category_id) {
            return Err(Tables::missing_category(&item.category_id));
        }
        tables.items.push(item.clone());
        Ok(())
    }

    async fn item_by_id(&self, id: &str) -> StoreResult<Option<Item>> {
        let tables = self.tables.read().await;
        Ok(tables.items.iter().find(|i| i.id == id).cloned())
    }

    async fn items_in_category(&self, category_id: &str) -> StoreResult<Vec<Item>> {
        let tables = self.tables.read().await;
        Ok(tables
            .items
            .iter()
            .filter(|i| i.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn count_items_in_category(&self, category_id: &str) -> StoreResult<u64> {
        let tables = self.tables.read().await;
        Ok(tables
            .items
            .iter()
            .filter(|i| i.category_id == category_id)
            .count() as u64)
    }

    async fn list_items(&self) -> StoreResult<Vec<Item>> {
        Ok(self.tables.read().await.items.clone())
    }

    async fn update_item(&self, item: &Item) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let Some(index) = tables.items.iter().position(|i| i.id == item.id) else {
            return Ok(false);
        };
        if !tables.category_exists(&item.category_id) {
            return Err(Tables::missing_category(&item.category_id));
        }
        tables.items[index] = item.clone();
        Ok(true)
    }

    async fn delete_item(&self, id: &str) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.items.len();
        tables.items.retain(|i| i.id != id);
        Ok(tables.items.len() < before)
    }

    async fn count_items(&self) -> StoreResult<u64> {
        Ok(self.tables.read().await.items.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use volt_core::{CategoryFields, ItemFields, Money};

    fn category(name: &str) -> Category {
        Category::new(CategoryFields {
            name: name.to_string(),
            description: "Some category description".to_string(),
        })
    }

    fn item(name: &str, category_id: &str) -> Item {
        Item::new(ItemFields {
            name: name.to_string(),
            description: "d".to_string(),
            price: Money::from_cents(100),
            number_in_stock: 1,
            category_id: category_id.to_string(),
        })
    }

    #[tokio::test]
    async fn test_insert_rejects_case_insensitive_duplicate() {
        let store = MemoryCatalogStore::new();
        store.insert_category(&category("Televisions")).await.unwrap();

        let err = store
            .insert_category(&category("TELEVISIONS"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation { .. }));
        assert_eq!(store.count_categories().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_lookup_by_name_ignores_case() {
        let store = MemoryCatalogStore::new();
        let tv = category("Televisions");
        store.insert_category(&tv).await.unwrap();

        let found = store.category_by_name("televisions").await.unwrap();
        assert_eq!(found.map(|c| c.id), Some(tv.id));
        assert!(store.category_by_name("Radios").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_name_order_vs_creation_order() {
        let store = MemoryCatalogStore::new();
        for name in ["Televisions", "computers", "Audio"] {
            store.insert_category(&category(name)).await.unwrap();
        }

        let created: Vec<String> = store
            .list_categories(CategoryOrder::Created)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(created, ["Televisions", "computers", "Audio"]);

        let by_name: Vec<String> = store
            .list_categories(CategoryOrder::Name)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(by_name, ["Audio", "computers", "Televisions"]);
    }

    #[tokio::test]
    async fn test_guarded_delete() {
        let store = MemoryCatalogStore::new();
        let tv = category("Televisions");
        store.insert_category(&tv).await.unwrap();
        let set = item("TV1", &tv.id);
        store.insert_item(&set).await.unwrap();

        assert!(!store.delete_category_if_unreferenced(&tv.id).await.unwrap());
        assert!(store.category_by_id(&tv.id).await.unwrap().is_some());

        assert!(store.delete_item(&set.id).await.unwrap());
        assert!(store.delete_category_if_unreferenced(&tv.id).await.unwrap());
        assert!(!store.delete_category_if_unreferenced(&tv.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_item_writes_require_category() {
        let store = MemoryCatalogStore::new();
        let err = store.insert_item(&item("TV1", "nope")).await.unwrap_err();
        assert!(matches!(err, StoreError::MissingReference { .. }));

        let tv = category("Televisions");
        store.insert_category(&tv).await.unwrap();
        let mut set = item("TV1", &tv.id);
        store.insert_item(&set).await.unwrap();

        set.category_id = "gone".to_string();
        assert!(store.update_item(&set).await.is_err());

        let ghost = item("Ghost", &tv.id);
        assert!(!store.update_item(&ghost).await.unwrap());
    }
}
