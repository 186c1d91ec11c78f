//! # Catalog Consistency Engine
//!
//! Create / read / update / delete for categories and items, with the
//! integrity rules that tie them together.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  caller ──► CategoryForm / ItemForm                                     │
//! │               │                                                         │
//! │               ▼                                                         │
//! │  validate() (volt-core) ── errors? ──► CatalogError::Validation         │
//! │               │                                                         │
//! │               ▼                                                         │
//! │  CatalogService (THIS MODULE)                                           │
//! │  ├── create_category: dedup by name_key                                 │
//! │  ├── delete_category: blocked while items reference it                  │
//! │  ├── create/update_item: category reference must resolve                │
//! │  └── detail views: fan-out fetch, NotFound / DanglingReference          │
//! │               │                                                         │
//! │               ▼                                                         │
//! │  CatalogStore (port) ──► SQLite (volt-db) or memory                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! The service holds no state besides the store handle. Where a check and a
//! write must not be separated, the store's conditional primitives are used
//! and their refusal is turned back into the same outcome the check would
//! have produced:
//! - a `UniqueViolation` while creating means another caller created the
//!   category first: re-read it and return it as `DuplicateResolved`
//! - `delete_category_if_unreferenced` returning false after the dependent
//!   count came back zero means an item was added in between: report
//!   `Blocked` with the fresh dependent list
//! - `MissingReference` on an item write means the category was deleted
//!   after it was resolved: report `InvalidReference`

use serde::Serialize;
use std::any::type_name;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};
use volt_core::{Category, CategoryForm, Item, ItemForm, ValidationError, ValidationErrors};

use crate::error::{CatalogError, CatalogResult, StoreError};
use crate::store::{CatalogStore, CategoryOrder};

// =============================================================================
// Outcomes
// =============================================================================

/// Result of [`CatalogService::create_category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "category", rename_all = "snake_case")]
pub enum CategoryCreation {
    /// A new category was stored.
    Created(Category),
    /// A category with the same name (ignoring case) already existed; it is
    /// returned unchanged and the submitted description is discarded.
    DuplicateResolved(Category),
}

impl CategoryCreation {
    pub fn category(&self) -> &Category {
        match self {
            CategoryCreation::Created(c) | CategoryCreation::DuplicateResolved(c) => c,
        }
    }

    pub fn into_category(self) -> Category {
        match self {
            CategoryCreation::Created(c) | CategoryCreation::DuplicateResolved(c) => c,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, CategoryCreation::Created(_))
    }
}

/// Result of [`CatalogService::delete_category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DeleteOutcome {
    /// The category was removed.
    Deleted { category: Category },
    /// Items still reference the category; nothing was removed.
    Blocked {
        category: Category,
        dependents: Vec<Item>,
    },
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted { .. })
    }

    /// Items preventing the delete (empty when deleted).
    pub fn dependents(&self) -> &[Item] {
        match self {
            DeleteOutcome::Deleted { .. } => &[],
            DeleteOutcome::Blocked { dependents, .. } => dependents,
        }
    }
}

/// A category with every item that belongs to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDetail {
    pub category: Category,
    pub items: Vec<Item>,
}

/// An item with the category it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDetail {
    pub item: Item,
    pub category: Category,
}

/// Record counts for the store home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub categories: u64,
    pub items: u64,
}

// =============================================================================
// Service
// =============================================================================

/// The catalog consistency engine.
///
/// Cheap to clone; clones share the store handle.
pub struct CatalogService<S>
where
    S: CatalogStore + ?Sized,
{
    store: Arc<S>,
}

impl<S> Clone for CatalogService<S>
where
    S: CatalogStore + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> fmt::Debug for CatalogService<S>
where
    S: CatalogStore + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogService")
            .field("store", &type_name::<S>())
            .finish()
    }
}

impl<S> CatalogService<S>
where
    S: CatalogStore + ?Sized,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // -------------------------------------------------------------------------
    // Categories
    // -------------------------------------------------------------------------

    /// Creates a category, or resolves to the existing one with the same
    /// name under case-insensitive comparison.
    ///
    /// Performs at most one write.
    pub async fn create_category(&self, form: CategoryForm) -> CatalogResult<CategoryCreation> {
        let fields = form.validate()?;

        if let Some(existing) = self.store.category_by_name(&fields.name).await? {
            debug!(id = %existing.id, name = %existing.name, "Category name already taken");
            return Ok(CategoryCreation::DuplicateResolved(existing));
        }

        let category = Category::new(fields);
        match self.store.insert_category(&category).await {
            Ok(()) => {
                info!(id = %category.id, name = %category.name, "Category created");
                Ok(CategoryCreation::Created(category))
            }
            Err(StoreError::UniqueViolation { .. }) => {
                // lost the race against a concurrent create
                let existing = self
                    .store
                    .category_by_name(&category.name)
                    .await?
                    .ok_or_else(|| StoreError::UniqueViolation {
                        field: "categories.name_key".to_string(),
                    })?;
                debug!(id = %existing.id, "Concurrent create resolved to existing category");
                Ok(CategoryCreation::DuplicateResolved(existing))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Replaces every field of a category.
    ///
    /// Renaming onto another category's name (ignoring case) fails with a
    /// `Duplicate` validation error on `name`.
    pub async fn update_category(&self, id: &str, form: CategoryForm) -> CatalogResult<Category> {
        let fields = form.validate()?;

        let current = self
            .store
            .category_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::category_not_found(id))?;

        if let Some(other) = self.store.category_by_name(&fields.name).await? {
            if other.id != current.id {
                return Err(duplicate_name(&fields.name));
            }
        }

        let updated = current.replaced_with(fields);
        match self.store.update_category(&updated).await {
            Ok(true) => {
                debug!(id = %updated.id, name = %updated.name, "Category updated");
                Ok(updated)
            }
            Ok(false) => Err(CatalogError::category_not_found(id)),
            Err(StoreError::UniqueViolation { .. }) => Err(duplicate_name(&updated.name)),
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes a category unless items still reference it.
    pub async fn delete_category(&self, id: &str) -> CatalogResult<DeleteOutcome> {
        let category = self
            .store
            .category_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::category_not_found(id))?;

        if self.store.count_items_in_category(id).await? > 0 {
            let dependents = self.store.items_in_category(id).await?;
            warn!(id = %id, dependents = dependents.len(), "Category delete blocked");
            return Ok(DeleteOutcome::Blocked {
                category,
                dependents,
            });
        }

        if self.store.delete_category_if_unreferenced(id).await? {
            info!(id = %id, name = %category.name, "Category deleted");
            return Ok(DeleteOutcome::Deleted { category });
        }

        // Something changed between the check and the delete.
        let category = self
            .store
            .category_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::category_not_found(id))?;
        let dependents = self.store.items_in_category(id).await?;
        warn!(id = %id, dependents = dependents.len(), "Category gained items during delete");
        Ok(DeleteOutcome::Blocked {
            category,
            dependents,
        })
    }

    /// What a delete confirmation page shows: the category and the items
    /// that would block its deletion. Changes nothing.
    pub async fn delete_preview_category(&self, id: &str) -> CatalogResult<CategoryDetail> {
        self.get_category_with_items(id).await
    }

    /// A category and all of its items.
    pub async fn get_category_with_items(&self, id: &str) -> CatalogResult<CategoryDetail> {
        let (category, items) = tokio::try_join!(
            self.store.category_by_id(id),
            self.store.items_in_category(id),
        )?;

        let category = category.ok_or_else(|| {
            debug!(id = %id, "Category not found on detail fetch");
            CatalogError::category_not_found(id)
        })?;

        Ok(CategoryDetail { category, items })
    }

    /// All categories, oldest first.
    pub async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        Ok(self.store.list_categories(CategoryOrder::Created).await?)
    }

    /// All categories by name, for the item form's category selector.
    pub async fn category_choices(&self) -> CatalogResult<Vec<Category>> {
        Ok(self.store.list_categories(CategoryOrder::Name).await?)
    }

    // -------------------------------------------------------------------------
    // Items
    // -------------------------------------------------------------------------

    /// Creates an item in an existing category.
    pub async fn create_item(&self, form: ItemForm) -> CatalogResult<Item> {
        let fields = form.validate()?;
        self.resolve_category(&fields.category_id).await?;

        let item = Item::new(fields);
        match self.store.insert_item(&item).await {
            Ok(()) => {
                info!(id = %item.id, category_id = %item.category_id, "Item created");
                Ok(item)
            }
            Err(StoreError::MissingReference { .. }) => Err(CatalogError::InvalidReference {
                category_id: item.category_id,
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Replaces every field of an item, possibly moving it to another
    /// category.
    pub async fn update_item(&self, id: &str, form: ItemForm) -> CatalogResult<Item> {
        let fields = form.validate()?;

        let current = self
            .store
            .item_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::item_not_found(id))?;
        self.resolve_category(&fields.category_id).await?;

        let updated = current.replaced_with(fields);
        match self.store.update_item(&updated).await {
            Ok(true) => {
                debug!(id = %updated.id, category_id = %updated.category_id, "Item updated");
                Ok(updated)
            }
            Ok(false) => Err(CatalogError::item_not_found(id)),
            Err(StoreError::MissingReference { .. }) => Err(CatalogError::InvalidReference {
                category_id: updated.category_id,
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes an item and returns what was removed.
    pub async fn delete_item(&self, id: &str) -> CatalogResult<Item> {
        let item = self
            .store
            .item_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::item_not_found(id))?;

        if !self.store.delete_item(id).await? {
            return Err(CatalogError::item_not_found(id));
        }

        info!(id = %id, "Item deleted");
        Ok(item)
    }

    /// An item and its category.
    pub async fn get_item_with_category(&self, id: &str) -> CatalogResult<ItemDetail> {
        let item = self.store.item_by_id(id).await?.ok_or_else(|| {
            debug!(id = %id, "Item not found on detail fetch");
            CatalogError::item_not_found(id)
        })?;

        match self.store.category_by_id(&item.category_id).await? {
            Some(category) => Ok(ItemDetail { item, category }),
            None => {
                warn!(id = %id, category_id = %item.category_id, "Item has dangling category reference");
                Err(CatalogError::DanglingReference {
                    item_id: item.id,
                    category_id: item.category_id,
                })
            }
        }
    }

    /// All items, oldest first.
    pub async fn list_items(&self) -> CatalogResult<Vec<Item>> {
        Ok(self.store.list_items().await?)
    }

    // -------------------------------------------------------------------------
    // Overview
    // -------------------------------------------------------------------------

    /// Number of categories and items.
    pub async fn summary(&self) -> CatalogResult<CatalogSummary> {
        let (categories, items) =
            tokio::try_join!(self.store.count_categories(), self.store.count_items())?;
        Ok(CatalogSummary { categories, items })
    }

    async fn resolve_category(&self, category_id: &str) -> CatalogResult<Category> {
        self.store
            .category_by_id(category_id)
            .await?
            .ok_or_else(|| CatalogError::InvalidReference {
                category_id: category_id.to_string(),
            })
    }
}

fn duplicate_name(name: &str) -> CatalogError {
    ValidationErrors::from(ValidationError::Duplicate {
        field: "name".to_string(),
        value: name.to_string(),
    })
    .into()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryCatalogStore;
    use crate::store::{CategoryStore, ItemStore};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use volt_core::{ItemFields, Money};

    const TV_DESCRIPTION: &str =
        "Display devices that use electronics to produce images and sound.";

    fn service() -> CatalogService<MemoryCatalogStore> {
        CatalogService::new(Arc::new(MemoryCatalogStore::new()))
    }

    fn item_form(name: &str, category_id: &str) -> ItemForm {
        ItemForm {
            name: name.to_string(),
            description: "d".to_string(),
            price: "10".to_string(),
            number_in_stock: "1".to_string(),
            category: category_id.to_string(),
        }
    }

    async fn televisions(service: &CatalogService<MemoryCatalogStore>) -> Category {
        service
            .create_category(CategoryForm::new("Televisions", TV_DESCRIPTION))
            .await
            .unwrap()
            .into_category()
    }

    #[tokio::test]
    async fn test_create_then_duplicate_resolves() {
        let service = service();
        let first = televisions(&service).await;

        let second = service
            .create_category(CategoryForm::new("televisions", "anything 15+ chars"))
            .await
            .unwrap();

        assert!(!second.was_created());
        assert_eq!(second.category().id, first.id);
        assert_eq!(second.category().description, TV_DESCRIPTION);
        assert_eq!(service.store().count_categories().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_form() {
        let service = service();
        let err = service
            .create_category(CategoryForm::new("TV", "short"))
            .await
            .unwrap_err();

        match err {
            CatalogError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(service.store().count_categories().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_category_rejects_name_collision() {
        let service = service();
        televisions(&service).await;
        let computers = service
            .create_category(CategoryForm::new(
                "Computers",
                "Electronic machines that can store and process data.",
            ))
            .await
            .unwrap()
            .into_category();

        let err = service
            .update_category(
                &computers.id,
                CategoryForm::new("TELEVISIONS", "Now pretending to be televisions."),
            )
            .await
            .unwrap_err();
        assert!(matches!(&err, CatalogError::Validation(e) if e.has_field("name")));

        // renaming onto its own name with different case is fine
        let renamed = service
            .update_category(
                &computers.id,
                CategoryForm::new("COMPUTERS", "Electronic machines, shouted."),
            )
            .await
            .unwrap();
        assert_eq!(renamed.id, computers.id);
        assert_eq!(renamed.name, "COMPUTERS");
        assert_eq!(renamed.created_at, computers.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_category() {
        let err = service()
            .update_category("missing", CategoryForm::new("Televisions", TV_DESCRIPTION))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_blocked_then_released() {
        let service = service();
        let tv = televisions(&service).await;
        let set = service.create_item(item_form("TV1", &tv.id)).await.unwrap();

        let outcome = service.delete_category(&tv.id).await.unwrap();
        assert!(!outcome.is_deleted());
        assert_eq!(outcome.dependents().len(), 1);
        assert_eq!(outcome.dependents()[0].name, "TV1");
        assert!(service.store().category_by_id(&tv.id).await.unwrap().is_some());
        assert!(service.store().item_by_id(&set.id).await.unwrap().is_some());

        service.delete_item(&set.id).await.unwrap();
        let outcome = service.delete_category(&tv.id).await.unwrap();
        assert!(outcome.is_deleted());
        assert!(service.store().category_by_id(&tv.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_category() {
        assert!(service()
            .delete_category("missing")
            .await
            .unwrap_err()
            .is_not_found());
    }

    #[tokio::test]
    async fn test_create_item_requires_existing_category() {
        let service = service();
        let err = service
            .create_item(item_form("TV1", "no-such-category"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidReference { ref category_id } if category_id == "no-such-category"
        ));
        assert_eq!(service.store().count_items().await.unwrap(), 0);
    }

    /// Delegates to a memory store while replaying what a concurrent
    /// request could do between the engine's check and its write.
    struct ScriptedStore {
        inner: MemoryCatalogStore,
        /// Reads as absent, like a category row removed out of band.
        hidden: Option<String>,
        /// `category_by_name` calls that still miss a concurrent insert.
        stale_name_lookups: AtomicUsize,
        /// Written by "another request" right before the guarded delete.
        late_item: Mutex<Option<Item>>,
    }

    impl ScriptedStore {
        fn over(inner: MemoryCatalogStore) -> Self {
            ScriptedStore {
                inner,
                hidden: None,
                stale_name_lookups: AtomicUsize::new(0),
                late_item: Mutex::new(None),
            }
        }
    }

    #[async_trait::async_trait]
    impl CategoryStore for ScriptedStore {
        async fn insert_category(&self, category: &Category) -> crate::StoreResult<()> {
            self.inner.insert_category(category).await
        }
        async fn category_by_id(&self, id: &str) -> crate::StoreResult<Option<Category>> {
            if self.hidden.as_deref() == Some(id) {
                return Ok(None);
            }
            self.inner.category_by_id(id).await
        }
        async fn category_by_name(&self, name: &str) -> crate::StoreResult<Option<Category>> {
            let stale = self
                .stale_name_lookups
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
            if stale {
                return Ok(None);
            }
            self.inner.category_by_name(name).await
        }
        async fn list_categories(&self, order: CategoryOrder) -> crate::StoreResult<Vec<Category>> {
            self.inner.list_categories(order).await
        }
        async fn update_category(&self, category: &Category) -> crate::StoreResult<bool> {
            self.inner.update_category(category).await
        }
        async fn delete_category_if_unreferenced(&self, id: &str) -> crate::StoreResult<bool> {
            let late = self.late_item.lock().unwrap().take();
            if let Some(item) = late {
                self.inner.insert_item(&item).await?;
            }
            self.inner.delete_category_if_unreferenced(id).await
        }
        async fn count_categories(&self) -> crate::StoreResult<u64> {
            self.inner.count_categories().await
        }
    }

    #[async_trait::async_trait]
    impl ItemStore for ScriptedStore {
        async fn insert_item(&self, item: &Item) -> crate::StoreResult<()> {
            self.inner.insert_item(item).await
        }
        async fn item_by_id(&self, id: &str) -> crate::StoreResult<Option<Item>> {
            self.inner.item_by_id(id).await
        }
        async fn items_in_category(&self, category_id: &str) -> crate::StoreResult<Vec<Item>> {
            self.inner.items_in_category(category_id).await
        }
        async fn count_items_in_category(&self, category_id: &str) -> crate::StoreResult<u64> {
            self.inner.count_items_in_category(category_id).await
        }
        async fn list_items(&self) -> crate::StoreResult<Vec<Item>> {
            self.inner.list_items().await
        }
        async fn update_item(&self, item: &Item) -> crate::StoreResult<bool> {
            self.inner.update_item(item).await
        }
        async fn delete_item(&self, id: &str) -> crate::StoreResult<bool> {
            self.inner.delete_item(id).await
        }
        async fn count_items(&self) -> crate::StoreResult<u64> {
            self.inner.count_items().await
        }
    }

    #[tokio::test]
    async fn test_dangling_reference_on_detail() {
        let inner = MemoryCatalogStore::new();
        let seeding = CatalogService::new(Arc::new(inner.clone()));
        let tv = televisions(&seeding).await;
        let set = seeding.create_item(item_form("TV1", &tv.id)).await.unwrap();

        let detail = seeding.get_item_with_category(&set.id).await.unwrap();
        assert_eq!(detail.category.id, tv.id);

        let mut store = ScriptedStore::over(inner);
        store.hidden = Some(tv.id.clone());
        let service = CatalogService::new(Arc::new(store));
        let err = service.get_item_with_category(&set.id).await.unwrap_err();
        assert!(matches!(
            &err,
            CatalogError::DanglingReference { item_id, category_id }
                if *item_id == set.id && *category_id == tv.id
        ));
        assert!(!err.is_recoverable());
    }

    #[tokio::test]
    async fn test_create_losing_insert_race_resolves_to_winner() {
        let inner = MemoryCatalogStore::new();
        let winner = televisions(&CatalogService::new(Arc::new(inner.clone()))).await;

        // the name lookup runs before the winner's insert lands
        let store = ScriptedStore::over(inner);
        store.stale_name_lookups.store(1, Ordering::SeqCst);
        let service = CatalogService::new(Arc::new(store));

        let outcome = service
            .create_category(CategoryForm::new("TELEVISIONS", "Submitted a moment too late."))
            .await
            .unwrap();

        assert!(matches!(&outcome, CategoryCreation::DuplicateResolved(c) if c.id == winner.id));
        assert_eq!(outcome.category().description, TV_DESCRIPTION);
        assert_eq!(service.store().stale_name_lookups.load(Ordering::SeqCst), 0);
        assert_eq!(service.store().count_categories().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_rename_losing_race_is_duplicate_name() {
        let inner = MemoryCatalogStore::new();
        let seeding = CatalogService::new(Arc::new(inner.clone()));
        televisions(&seeding).await;
        let computers = seeding
            .create_category(CategoryForm::new(
                "Computers",
                "Electronic machines that can store and process data.",
            ))
            .await
            .unwrap()
            .into_category();

        let store = ScriptedStore::over(inner.clone());
        store.stale_name_lookups.store(1, Ordering::SeqCst);
        let service = CatalogService::new(Arc::new(store));

        let err = service
            .update_category(
                &computers.id,
                CategoryForm::new("televisions", "Renamed while another rename landed."),
            )
            .await
            .unwrap_err();
        match err {
            CatalogError::Validation(errors) => {
                assert!(errors.has_field("name"));
                assert_eq!(errors.len(), 1);
            }
            other => panic!("expected duplicate name, got {other:?}"),
        }

        let stored = inner.category_by_id(&computers.id).await.unwrap().unwrap();
        assert_eq!(stored, computers);
    }

    #[tokio::test]
    async fn test_delete_losing_race_reports_new_dependents() {
        let inner = MemoryCatalogStore::new();
        let tv = televisions(&CatalogService::new(Arc::new(inner.clone()))).await;

        let late = Item::new(ItemFields {
            name: "TV1".to_string(),
            description: "Added while the delete was in flight.".to_string(),
            price: Money::from_cents(59999),
            number_in_stock: 1,
            category_id: tv.id.clone(),
        });
        let store = ScriptedStore::over(inner.clone());
        *store.late_item.lock().unwrap() = Some(late.clone());
        let service = CatalogService::new(Arc::new(store));

        match service.delete_category(&tv.id).await.unwrap() {
            DeleteOutcome::Blocked {
                category,
                dependents,
            } => {
                assert_eq!(category.id, tv.id);
                assert_eq!(dependents, vec![late]);
            }
            DeleteOutcome::Deleted { .. } => panic!("delete should have lost the race"),
        }
        assert!(inner.category_by_id(&tv.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_summary_counts() {
        let service = service();
        let tv = televisions(&service).await;
        service.create_item(item_form("TV1", &tv.id)).await.unwrap();
        service.create_item(item_form("TV2", &tv.id)).await.unwrap();

        let summary = service.summary().await.unwrap();
        assert_eq!(
            summary,
            CatalogSummary {
                categories: 1,
                items: 2
            }
        );
    }

    #[test]
    fn test_outcome_serialization() {
        let category = Category::new(volt_core::CategoryFields {
            name: "Televisions".to_string(),
            description: TV_DESCRIPTION.to_string(),
        });
        let json = serde_json::to_value(CategoryCreation::DuplicateResolved(category)).unwrap();
        assert_eq!(json["outcome"], "duplicate_resolved");
        assert_eq!(json["category"]["name"], "Televisions");
    }
}
