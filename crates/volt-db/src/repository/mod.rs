//! # Repository Module
//!
//! Database repository implementations for the catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SqliteCatalogStore (store port)                                        │
//! │       │                                                                 │
//! │       │  db.categories().get_by_name("televisions")                     │
//! │       ▼                                                                 │
//! │  CategoryRepository              ItemRepository                         │
//! │  ├── insert                      ├── insert (category must exist)       │
//! │  ├── get_by_id / get_by_name     ├── get_by_id / list_by_category       │
//! │  ├── list(order)                 ├── list / count / count_by_category   │
//! │  ├── update                      ├── update (category must exist)       │
//! │  └── delete_if_unreferenced      └── delete                             │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CategoryRepository`](category::CategoryRepository) - Category CRUD and guarded delete
//! - [`ItemRepository`](item::ItemRepository) - Item CRUD with reference checks

pub mod category;
pub mod item;
