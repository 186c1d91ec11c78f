//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (volt-catalog) ← What the engine can react to              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError ← DuplicateResolved / InvalidReference / fatal           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use volt_catalog::StoreError;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in database.
    ///
    /// ## When This Occurs
    /// - `fetch_one` returns no rows
    /// - UPDATE / DELETE matched no row
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - Inserting a category whose name differs only in case
    /// - Renaming a category onto a taken name
    #[error("Duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// A row referenced another row that does not exist.
    ///
    /// ## When This Occurs
    /// - Writing an item whose category_id names no category
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates a UniqueViolation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        DbError::UniqueViolation {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates a ForeignKeyViolation for a missing category.
    pub fn missing_category(category_id: &str) -> Self {
        DbError::ForeignKeyViolation {
            message: format!("category {category_id} does not exist"),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → UniqueViolation or QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // "UNIQUE constraint failed: <table>.<column>"
                // The schema declares no foreign keys; a missing category is
                // detected by the conditional writes instead.
                if msg.contains("UNIQUE constraint failed") {
                    let field = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    DbError::UniqueViolation {
                        field,
                        value: "unknown".to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Hands database failures to the catalog engine.
///
/// ```text
/// UniqueViolation      → StoreError::UniqueViolation
/// ForeignKeyViolation  → StoreError::MissingReference
/// anything else        → StoreError::Backend
/// ```
impl From<DbError> for StoreError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation { field, .. } => StoreError::UniqueViolation { field },
            DbError::ForeignKeyViolation { .. } => StoreError::MissingReference {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },
            other => StoreError::backend(other),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_mapping() {
        let err: StoreError = DbError::duplicate("categories.name_key", "televisions").into();
        assert!(matches!(err, StoreError::UniqueViolation { ref field } if field == "categories.name_key"));

        let err: StoreError = DbError::missing_category("c1").into();
        assert!(matches!(err, StoreError::MissingReference { .. }));

        let err: StoreError = DbError::PoolExhausted.into();
        assert!(matches!(err, StoreError::Backend(_)));
        assert_eq!(err.to_string(), "store backend failed: Connection pool exhausted");
    }

    #[tokio::test]
    async fn test_sqlite_constraint_messages() {
        let db = crate::pool::Database::new(crate::pool::DbConfig::in_memory())
            .await
            .unwrap();
        let insert = |id: &'static str, price_cents: i64| {
            sqlx::query(
                "INSERT INTO items (id, name, description, price_cents, number_in_stock, \
                 category_id, created_at, updated_at) \
                 VALUES (?1, 'TV1', 'd', ?2, 1, 'c1', '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z')",
            )
            .bind(id)
            .bind(price_cents)
        };

        insert("i1", 100).execute(db.pool()).await.unwrap();

        let err: DbError = insert("i1", 100).execute(db.pool()).await.unwrap_err().into();
        assert!(matches!(err, DbError::UniqueViolation { ref field, .. } if field == "items.id"));

        // CHECK failures are plain query errors, never a missing reference
        let err: DbError = insert("i2", -1).execute(db.pool()).await.unwrap_err().into();
        assert!(matches!(err, DbError::QueryFailed(ref msg) if msg.contains("CHECK constraint failed")));
        assert!(matches!(StoreError::from(err), StoreError::Backend(_)));
    }
}
