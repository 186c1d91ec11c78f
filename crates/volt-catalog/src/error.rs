//! # Catalog Error Types
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Outcome              Kind           Caller reaction                    │
//! │  ──────────────────   ────────────   ─────────────────────────────────  │
//! │  Validation           recoverable    re-render form with field errors   │
//! │  NotFound             recoverable    not-found page                     │
//! │  InvalidReference     recoverable    re-prompt for a category           │
//! │  DanglingReference    fatal (fetch)  detail page cannot be shown        │
//! │  Store                fatal          generic error page                 │
//! │                                                                         │
//! │  Not errors:                                                            │
//! │  DeleteOutcome::Blocked          → show the dependents                  │
//! │  CategoryCreation::DuplicateResolved → redirect to the existing record  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::error::Error as StdError;
use thiserror::Error;
use volt_core::ValidationErrors;

// =============================================================================
// Store Error
// =============================================================================

/// Failures reported by an entity store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The normalised category name is already taken.
    #[error("unique constraint violated on {field}")]
    UniqueViolation { field: String },

    /// An item write named a category that does not exist at write time.
    #[error("{entity} {id} does not exist")]
    MissingReference { entity: String, id: String },

    /// Storage I/O failed; nothing the caller can fix.
    #[error("store backend failed: {0}")]
    Backend(#[source] Box<dyn StdError + Send + Sync>),
}

impl StoreError {
    /// Wraps any backend error.
    pub fn backend<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        StoreError::Backend(Box::new(err))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Catalog Error
// =============================================================================

/// Errors returned by [`CatalogService`](crate::CatalogService) operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// One or more form fields failed validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// The id does not resolve.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// An item names a category that does not exist.
    #[error("category {category_id} does not exist")]
    InvalidReference { category_id: String },

    /// A stored item points at a category that no longer exists.
    #[error("item {item_id} references missing category {category_id}")]
    DanglingReference {
        item_id: String,
        category_id: String,
    },

    /// The entity store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CatalogError {
    pub(crate) fn category_not_found(id: &str) -> Self {
        CatalogError::NotFound {
            entity: "Category",
            id: id.to_string(),
        }
    }

    pub(crate) fn item_not_found(id: &str) -> Self {
        CatalogError::NotFound {
            entity: "Item",
            id: id.to_string(),
        }
    }

    /// True for outcomes the caller can act on (re-prompt, show 404);
    /// false for store failures.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            CatalogError::Store(StoreError::Backend(_)) | CatalogError::DanglingReference { .. }
        )
    }

    /// True if this is a `NotFound` outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================
