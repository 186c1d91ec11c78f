//! # Item Repository
//!
//! Database operations for items.
//!
//! Writes that set `category_id` are conditional on the category existing
//! at the moment of the write:
//! ```text
//! INSERT INTO items (...) SELECT ... WHERE EXISTS (SELECT 1 FROM categories WHERE id = ?)
//! UPDATE items SET ...    WHERE id = ? AND EXISTS (SELECT 1 FROM categories WHERE id = ?)
//! ```
//! Zero rows affected means the category was missing (or, for updates, the
//! item itself).

use sqlx::SqlitePool;
use tracing::debug;
use volt_core::Item;

use crate::error::{DbError, DbResult};

const ITEM_COLUMNS: &str =
    "id, name, description, price_cents, number_in_stock, category_id, created_at, updated_at";

/// Repository for item database operations.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Inserts a new item into an existing category.
    ///
    /// ## Errors
    /// `DbError::ForeignKeyViolation` if `item.category_id` does not exist.
    pub async fn insert(&self, item: &Item) -> DbResult<()> {
        debug!(id = %item.id, category_id = %item.category_id, "Inserting item");

        let result = sqlx::query(
            r#"
            INSERT INTO items (
                id, name, description, price_cents, number_in_stock,
                category_id, created_at, updated_at
            )
            SELECT ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8
            WHERE EXISTS (SELECT 1 FROM categories WHERE id = ?6)
            "#,
        )
        .bind(&item.id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.price_cents)
        .bind(item.number_in_stock)
        .bind(&item.category_id)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::missing_category(&item.category_id));
        }

        Ok(())
    }

    /// Gets an item by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Item>> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = ?1");
        let item = sqlx::query_as::<_, Item>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    /// Lists the items of one category, oldest first.
    pub async fn list_by_category(&self, category_id: &str) -> DbResult<Vec<Item>> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM items WHERE category_id = ?1 ORDER BY rowid");
        let items = sqlx::query_as::<_, Item>(&sql)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }

    /// Counts the items of one category.
    pub async fn count_by_category(&self, category_id: &str) -> DbResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items WHERE category_id = ?1")
            .bind(category_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count as u64)
    }

    /// Lists every item, oldest first.
    pub async fn list(&self) -> DbResult<Vec<Item>> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM items ORDER BY rowid");
        let items = sqlx::query_as::<_, Item>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = items.len(), "Listed items");
        Ok(items)
    }

    /// Replaces every field except `id` and `created_at`.
    ///
    /// ## Errors
    /// - `DbError::NotFound` if no item has this id
    /// - `DbError::ForeignKeyViolation` if the new category does not exist
    pub async fn update(&self, item: &Item) -> DbResult<()> {
        debug!(id = %item.id, category_id = %item.category_id, "Updating item");

        let result = sqlx::query(
            r#"
            UPDATE items
            SET name = ?2, description = ?3, price_cents = ?4,
                number_in_stock = ?5, category_id = ?6, updated_at = ?7
            WHERE id = ?1
              AND EXISTS (SELECT 1 FROM categories WHERE id = ?6)
            "#,
        )
        .bind(&item.id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.price_cents)
        .bind(item.number_in_stock)
        .bind(&item.category_id)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            if self.get_by_id(&item.id).await?.is_none() {
                return Err(DbError::not_found("Item", &item.id));
            }
            return Err(DbError::missing_category(&item.category_id));
        }

        Ok(())
    }

    /// Deletes an item.
    ///
    /// ## Errors
    /// `DbError::NotFound` if no item has this id.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Item", id));
        }

        debug!(id = %id, "Item deleted");
        Ok(())
    }

    /// Counts all items.
    pub async fn count(&self) -> DbResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count as u64)
    }
}
