//! # volt-db: Database Layer for Voltstore Catalog
//!
//! SQLite storage for categories and items, and the [`SqliteCatalogStore`]
//! that plugs it into the catalog engine.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Voltstore Catalog Data Flow                        │
//! │                                                                         │
//! │  Presentation (create_category form post)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogService (volt-catalog)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     volt-db (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │               │    │  (embedded)  │  │   │
//! │  │   │               │    │ CategoryRepo  │    │ 001_catalog_ │  │   │
//! │  │   │ SqlitePool    │◄───│ ItemRepo      │    │   schema.sql │  │   │
//! │  │   │ DbConfig      │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                │                                │   │
//! │  │                     SqliteCatalogStore (store.rs)               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database (./voltstore.db or VOLT_DB_PATH)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`config`] - Configuration from environment variables
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Category and item repositories
//! - [`store`] - Store port implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use volt_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::from_env()?).await?;
//!
//! let catalog = db.catalog();
//! let summary = catalog.summary().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::ConfigError;
pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use store::SqliteCatalogStore;

// Repository re-exports for convenience
pub use repository::category::CategoryRepository;
pub use repository::item::ItemRepository;
