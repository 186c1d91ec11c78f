//! Presentation paths for catalog records.
//!
//! Records carry no URL of their own; the presentation layer asks for one
//! through [`route_for`].

use crate::types::{Category, Item};

/// Path of the category list page.
pub const CATEGORY_LIST_ROUTE: &str = "/categories";

/// Path of the item list page.
pub const ITEM_LIST_ROUTE: &str = "/items";

/// A record with a detail page.
pub trait Routable {
    /// Path of the record's detail page.
    fn route(&self) -> String;
}

impl Routable for Category {
    fn route(&self) -> String {
        format!("/category/{}", self.id)
    }
}

impl Routable for Item {
    fn route(&self) -> String {
        format!("/item/{}", self.id)
    }
}

/// Detail path for any routable record.
///
/// ```rust
/// use volt_core::{route_for, Category, CategoryFields};
///
/// let category = Category::new(CategoryFields {
///     name: "Computers".into(),
///     description: "Electronic machines that process data.".into(),
/// });
/// assert_eq!(route_for(&category), format!("/category/{}", category.id));
/// ```
pub fn route_for<R: Routable + ?Sized>(entity: &R) -> String {
    entity.route()
}
