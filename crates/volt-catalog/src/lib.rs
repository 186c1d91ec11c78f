//! # volt-catalog: Catalog Consistency Engine
//!
//! Keeps categories and items consistent with each other: one category per
//! name (ignoring case), no category deleted while items reference it, and
//! no item written against a category that does not exist.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         volt-catalog                                    │
//! │                                                                         │
//! │   ┌───────────────────┐      ┌────────────────────────────────────┐    │
//! │   │  CatalogService   │─────►│  CatalogStore (port)               │    │
//! │   │  (service.rs)     │      │  CategoryStore + ItemStore         │    │
//! │   └───────────────────┘      └──────────┬─────────────────┬───────┘    │
//! │                                         │                 │            │
//! │                              ┌──────────▼──────┐ ┌────────▼────────┐   │
//! │                              │ MemoryCatalog-  │ │ SqliteCatalog-  │   │
//! │                              │ Store (memory)  │ │ Store (volt-db) │   │
//! │                              └─────────────────┘ └─────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use volt_catalog::{CatalogService, MemoryCatalogStore};
//! use volt_core::CategoryForm;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let catalog = CatalogService::new(Arc::new(MemoryCatalogStore::new()));
//! let form = CategoryForm::new(
//!     "Televisions",
//!     "Display devices that use electronics to produce images and sound.",
//! );
//! let created = catalog.create_category(form).await.unwrap();
//! assert!(created.was_created());
//! # });
//! ```

pub mod error;
pub mod memory;
pub mod service;
pub mod store;

pub use error::{CatalogError, CatalogResult, StoreError, StoreResult};
pub use memory::MemoryCatalogStore;
pub use service::{
    CatalogService, CatalogSummary, CategoryCreation, CategoryDetail, DeleteOutcome, ItemDetail,
};
pub use store::{CatalogStore, CategoryOrder, CategoryStore, ItemStore};
