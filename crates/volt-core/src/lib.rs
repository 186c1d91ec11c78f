//! # volt-core: Pure Catalog Types for Voltstore
//!
//! The record types, money arithmetic and field rules shared by every other
//! crate in the workspace. Nothing in here touches a database or a socket.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Voltstore Catalog Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Presentation layer (routes, forms, templates)        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CategoryForm / ItemForm               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ volt-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ validation│  │   route   │  │   │
//! │  │   │ Category  │  │   Money   │  │   forms   │  │ route_for │  │   │
//! │  │   │   Item    │  │  parsing  │  │   rules   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              volt-catalog (Consistency Engine)                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    volt-db (SQLite store)                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Category and Item records and their field sets
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation error types
//! - [`validation`] - Form validation pipeline
//! - [`route`] - Presentation paths for records
//!
//! ## Example Usage
//!
//! ```rust
//! use volt_core::validation::CategoryForm;
//!
//! let form = CategoryForm::new(
//!     " Televisions ",
//!     "Display devices that use electronics to produce images and sound.",
//! );
//! let fields = form.validate().unwrap();
//! assert_eq!(fields.name, "Televisions");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod route;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{FieldError, ValidationError, ValidationErrors};
pub use money::Money;
pub use route::{route_for, Routable};
pub use types::*;
pub use validation::{CategoryForm, ItemForm};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum length of a category name after trimming.
pub const CATEGORY_NAME_MIN_LEN: usize = 3;

/// Minimum length of a category description after trimming.
pub const CATEGORY_DESCRIPTION_MIN_LEN: usize = 15;
