//! # Domain Types
//!
//! The two catalog records and their validated field sets.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐  1      0..n  ┌─────────────────┐                 │
//! │  │    Category     │◄──────────────│      Item       │                 │
//! │  │  ─────────────  │  category_id  │  ─────────────  │                 │
//! │  │  id (UUID)      │               │  id (UUID)      │                 │
//! │  │  name (unique,  │               │  name           │                 │
//! │  │   no case)      │               │  description    │                 │
//! │  │  description    │               │  price_cents    │                 │
//! │  └─────────────────┘               │  number_in_stock│                 │
//! │                                    └─────────────────┘                 │
//! │                                                                         │
//! │  Ownership is by reference: an Item names its Category by id and the   │
//! │  store has no foreign keys. volt-catalog keeps the reference valid.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

/// Generates a fresh record id (UUID v4).
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Comparison key for category names.
///
/// Two categories collide when their keys are equal, so "Televisions" and
/// " televisions" are the same category.
///
/// ## Example
/// ```rust
/// use volt_core::types::name_key;
///
/// assert_eq!(name_key(" Televisions "), name_key("televisions"));
/// ```
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

// =============================================================================
// Category
// =============================================================================

/// A named grouping of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Category {
    /// Unique identifier (UUID v4), never changes.
    pub id: String,

    /// Display name, unique under case-insensitive comparison.
    pub name: String,

    pub description: String,

    /// When the category was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the category was last replaced.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Builds a new record with a fresh id from validated fields.
    pub fn new(fields: CategoryFields) -> Self {
        let now = Utc::now();
        Category {
            id: new_id(),
            name: fields.name,
            description: fields.description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full-record replace: same id and creation time, new fields.
    pub fn replaced_with(&self, fields: CategoryFields) -> Self {
        Category {
            id: self.id.clone(),
            name: fields.name,
            description: fields.description,
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }

    /// The normalised comparison key of this category's name.
    pub fn name_key(&self) -> String {
        name_key(&self.name)
    }

    /// Projects the record back onto its editable fields.
    pub fn fields(&self) -> CategoryFields {
        CategoryFields {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

/// Validated category fields, as produced by
/// [`CategoryForm::validate`](crate::validation::CategoryForm::validate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFields {
    pub name: String,
    pub description: String,
}

// =============================================================================
// Item
// =============================================================================

/// A sellable product belonging to exactly one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Item {
    /// Unique identifier (UUID v4), never changes.
    pub id: String,

    pub name: String,

    pub description: String,

    /// Price in cents (smallest currency unit), never negative.
    pub price_cents: i64,

    /// Units on hand, never negative.
    pub number_in_stock: i64,

    /// Id of the owning category.
    pub category_id: String,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Builds a new record with a fresh id from validated fields.
    pub fn new(fields: ItemFields) -> Self {
        let now = Utc::now();
        Item {
            id: new_id(),
            name: fields.name,
            description: fields.description,
            price_cents: fields.price.cents(),
            number_in_stock: fields.number_in_stock,
            category_id: fields.category_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full-record replace, including re-pointing the category.
    pub fn replaced_with(&self, fields: ItemFields) -> Self {
        Item {
            id: self.id.clone(),
            name: fields.name,
            description: fields.description,
            price_cents: fields.price.cents(),
            number_in_stock: fields.number_in_stock,
            category_id: fields.category_id,
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Projects the record back onto its editable fields.
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price(),
            number_in_stock: self.number_in_stock,
            category_id: self.category_id.clone(),
        }
    }
}

/// Validated item fields, as produced by
/// [`ItemForm::validate`](crate::validation::ItemForm::validate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFields {
    pub name: String,
    pub description: String,
    pub price: Money,
    pub number_in_stock: i64,
    pub category_id: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tv_fields() -> CategoryFields {
        CategoryFields {
            name: "Televisions".to_string(),
            description: "Display devices that use electronics to produce images and sound."
                .to_string(),
        }
    }

    #[test]
    fn test_name_key_ignores_case_and_padding() {
        assert_eq!(name_key("Televisions"), "televisions");
        assert_eq!(name_key("  TELEVISIONS "), "televisions");
        assert_ne!(name_key("Computers"), name_key("Televisions"));
    }

    #[test]
    fn test_new_category_gets_uuid() {
        let category = Category::new(tv_fields());
        assert!(Uuid::parse_str(&category.id).is_ok());
        assert_eq!(category.created_at, category.updated_at);
        assert_eq!(category.name_key(), "televisions");
    }

    #[test]
    fn test_category_replace_keeps_identity() {
        let original = Category::new(tv_fields());
        let replaced = original.replaced_with(CategoryFields {
            name: "Displays".to_string(),
            description: "Anything with a panel and a backlight.".to_string(),
        });

        assert_eq!(replaced.id, original.id);
        assert_eq!(replaced.created_at, original.created_at);
        assert_eq!(replaced.name, "Displays");
        assert!(replaced.updated_at >= original.updated_at);
    }

    #[test]
    fn test_item_fields_round_trip() {
        let fields = ItemFields {
            name: "TV1".to_string(),
            description: "d".to_string(),
            price: Money::from_cents(1000),
            number_in_stock: 1,
            category_id: new_id(),
        };
        let item = Item::new(fields.clone());

        assert_eq!(item.price_cents, 1000);
        assert_eq!(item.fields(), fields);
    }

    #[test]
    fn test_item_replace_can_move_category() {
        let item = Item::new(ItemFields {
            name: "Robot Vacuum Cleaner".to_string(),
            description: "Cleans floors".to_string(),
            price: Money::from_cents(24999),
            number_in_stock: 1,
            category_id: "old".to_string(),
        });
        let mut fields = item.fields();
        fields.category_id = "new".to_string();

        let moved = item.replaced_with(fields);
        assert_eq!(moved.id, item.id);
        assert_eq!(moved.category_id, "new");
    }
}
