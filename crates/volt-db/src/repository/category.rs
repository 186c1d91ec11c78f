//! # Category Repository
//!
//! Database operations for categories.
//!
//! ## Name Uniqueness
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  name         name_key       idx_categories_name_key (UNIQUE)          │
//! │  ───────────  ───────────                                               │
//! │  Televisions  televisions    ← stored                                   │
//! │  TELEVISIONS  televisions    ← INSERT fails: UNIQUE constraint failed   │
//! │                                 categories.name_key                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! `name_key` is written by this repository from [`volt_core::name_key`];
//! callers never set it.

use sqlx::SqlitePool;
use tracing::debug;
use volt_catalog::CategoryOrder;
use volt_core::{name_key, Category};

use crate::error::{DbError, DbResult};

const CATEGORY_COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Repository for category database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = CategoryRepository::new(pool);
///
/// repo.insert(&category).await?;
/// let found = repo.get_by_name("televisions").await?;
/// ```
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CategoryRepository { pool }
    }

    /// Inserts a new category.
    ///
    /// ## Errors
    /// `DbError::UniqueViolation` on `categories.name_key` if the name is
    /// taken under case-insensitive comparison.
    pub async fn insert(&self, category: &Category) -> DbResult<()> {
        debug!(id = %category.id, name = %category.name, "Inserting category");

        sqlx::query(
            r#"
            INSERT INTO categories (id, name, name_key, description, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&category.id)
        .bind(&category.name)
        .bind(category.name_key())
        .bind(&category.description)
        .bind(category.created_at)
        .bind(category.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Gets a category by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Category>> {
        let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = ?1");
        let category = sqlx::query_as::<_, Category>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(category)
    }

    /// Gets a category by name, ignoring case and surrounding whitespace.
    pub async fn get_by_name(&self, name: &str) -> DbResult<Option<Category>> {
        let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE name_key = ?1");
        let category = sqlx::query_as::<_, Category>(&sql)
            .bind(name_key(name))
            .fetch_optional(&self.pool)
            .await?;

        Ok(category)
    }

    /// Lists every category.
    pub async fn list(&self, order: CategoryOrder) -> DbResult<Vec<Category>> {
        let order_by = match order {
            CategoryOrder::Created => "rowid",
            CategoryOrder::Name => "name_key, rowid",
        };
        let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY {order_by}");
        let categories = sqlx::query_as::<_, Category>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = categories.len(), "Listed categories");
        Ok(categories)
    }

    /// Replaces name and description. `created_at` is never rewritten.
    ///
    /// ## Errors
    /// - `DbError::NotFound` if no category has this id
    /// - `DbError::UniqueViolation` if the new name is taken
    pub async fn update(&self, category: &Category) -> DbResult<()> {
        debug!(id = %category.id, name = %category.name, "Updating category");

        let result = sqlx::query(
            r#"
            UPDATE categories
            SET name = ?2, name_key = ?3, description = ?4, updated_at = ?5
            WHERE id = ?1
            "#,
        )
        .bind(&category.id)
        .bind(&category.name)
        .bind(category.name_key())
        .bind(&category.description)
        .bind(category.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Category", &category.id));
        }

        Ok(())
    }

    /// Deletes the category if, and only if, no item references it.
    ///
    /// Check and delete are one statement, so an item inserted concurrently
    /// either lands first (nothing deleted) or fails its own existence check.
    ///
    /// ## Returns
    /// `true` if a row was deleted.
    pub async fn delete_if_unreferenced(&self, id: &str) -> DbResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM categories
            WHERE id = ?1
              AND NOT EXISTS (SELECT 1 FROM items WHERE category_id = ?1)
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        let deleted = result.rows_affected() > 0;
        debug!(id = %id, deleted, "Guarded category delete");
        Ok(deleted)
    }

    /// Counts all categories.
    pub async fn count(&self) -> DbResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;

        Ok(count as u64)
    }
}
