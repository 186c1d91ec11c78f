//! # Entity Store Ports
//!
//! The storage contract the consistency engine is written against.
//!
//! ## Atomic Primitives
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The store has no foreign keys. Three writes carry their own check so  │
//! │  that concurrent callers cannot break referential integrity:           │
//! │                                                                         │
//! │  insert_category                  UNIQUE on name_key                   │
//! │       └── taken? ──► StoreError::UniqueViolation                       │
//! │                                                                         │
//! │  delete_category_if_unreferenced  delete WHERE no item references it   │
//! │       └── referenced? ──► Ok(false), nothing deleted                   │
//! │                                                                         │
//! │  insert_item / update_item        write WHERE category exists          │
//! │       └── missing? ──► StoreError::MissingReference                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use volt_core::{Category, Item};

use crate::error::StoreResult;

/// Order for category listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryOrder {
    /// Oldest first.
    #[default]
    Created,
    /// Alphabetical, ignoring case.
    Name,
}

/// Category persistence.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Persists a new category.
    ///
    /// Fails with `UniqueViolation` if another category has the same
    /// normalised name.
    async fn insert_category(&self, category: &Category) -> StoreResult<()>;

    async fn category_by_id(&self, id: &str) -> StoreResult<Option<Category>>;

    /// Looks a category up by name, ignoring case and surrounding spaces.
    async fn category_by_name(&self, name: &str) -> StoreResult<Option<Category>>;

    async fn list_categories(&self, order: CategoryOrder) -> StoreResult<Vec<Category>>;

    /// Replaces a stored category. `Ok(false)` if the id does not exist.
    async fn update_category(&self, category: &Category) -> StoreResult<bool>;

    /// Deletes the category only if no item references it, atomically.
    ///
    /// `Ok(false)` if the category is absent or still referenced.
    async fn delete_category_if_unreferenced(&self, id: &str) -> StoreResult<bool>;

    async fn count_categories(&self) -> StoreResult<u64>;
}

/// Item persistence.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Persists a new item.
    ///
    /// Fails with `MissingReference` if `item.category_id` does not name an
    /// existing category at write time.
    async fn insert_item(&self, item: &Item) -> StoreResult<()>;

    async fn item_by_id(&self, id: &str) -> StoreResult<Option<Item>>;

    /// Items whose category is `category_id`, oldest first.
    async fn items_in_category(&self, category_id: &str) -> StoreResult<Vec<Item>>;

    async fn count_items_in_category(&self, category_id: &str) -> StoreResult<u64>;

    /// All items, oldest first.
    async fn list_items(&self) -> StoreResult<Vec<Item>>;

    /// Replaces a stored item. `Ok(false)` if the id does not exist;
    /// `MissingReference` if the new category does not exist.
    async fn update_item(&self, item: &Item) -> StoreResult<bool>;

    /// Deletes an item unconditionally. `Ok(false)` if the id does not exist.
    async fn delete_item(&self, id: &str) -> StoreResult<bool>;

    async fn count_items(&self) -> StoreResult<u64>;
}

/// A store holding both entity types.
pub trait CatalogStore: CategoryStore + ItemStore {}

impl<T: CategoryStore + ItemStore + ?Sized> CatalogStore for T {}
