//! # Validation Module
//!
//! The validation pipeline that runs before any catalog mutation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation (forms)                                         │
//! │  ├── Raw strings exactly as submitted                                  │
//! │  └── Escaping for HTML output (not here)                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Trim, length, alphanumeric, numeric rules                         │
//! │  └── CategoryForm → CategoryFields, ItemForm → ItemFields              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: volt-catalog                                                 │
//! │  ├── Case-insensitive name uniqueness                                  │
//! │  └── Item → Category reference resolution                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 4: Store (SQLite)                                               │
//! │  ├── NOT NULL / CHECK constraints                                      │
//! │  └── UNIQUE index on the normalised name                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validators collect every failed rule rather than stopping at the first,
//! so a form can be re-rendered with all of its messages at once.
//!
//! ## Usage
//! ```rust
//! use volt_core::validation::ItemForm;
//!
//! let form = ItemForm {
//!     name: "TV1".into(),
//!     description: "d".into(),
//!     price: "10".into(),
//!     number_in_stock: "1".into(),
//!     category: "0b6e2a5c-6a0e-4d54-9d4c-7f1f0c1b2a3d".into(),
//! };
//! let fields = form.validate().unwrap();
//! assert_eq!(fields.price.cents(), 1000);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationErrors};
use crate::money::{Money, ParseMoneyError};
use crate::types::{CategoryFields, ItemFields};
use crate::{CATEGORY_DESCRIPTION_MIN_LEN, CATEGORY_NAME_MIN_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationErrors>;

// =============================================================================
// Category Form
// =============================================================================

/// Category fields exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
}

impl CategoryForm {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        CategoryForm {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Runs the category rules.
    ///
    /// ## Rules
    /// - name: at least 3 characters after trimming, ASCII letters and
    ///   digits only
    /// - description: at least 15 characters after trimming
    ///
    /// ## Example
    /// ```rust
    /// use volt_core::validation::CategoryForm;
    ///
    /// assert!(CategoryForm::new("TV", "Display devices and more").validate().is_err());
    /// assert!(CategoryForm::new("Mobile Phones", "Handheld devices that make calls").validate().is_err());
    /// assert!(CategoryForm::new("Computers", "Electronic machines that process data").validate().is_ok());
    /// ```
    pub fn validate(&self) -> ValidationResult<CategoryFields> {
        let mut errors = ValidationErrors::new();

        let name = self.name.trim();
        if let Err(e) = validate_category_name(name) {
            errors.push(e);
        }

        let description = self.description.trim();
        if let Err(e) = validate_min_len("description", description, CATEGORY_DESCRIPTION_MIN_LEN)
        {
            errors.push(e);
        }

        errors.into_result(CategoryFields {
            name: name.to_string(),
            description: description.to_string(),
        })
    }
}

// =============================================================================
// Item Form
// =============================================================================

/// Item fields exactly as submitted; numbers arrive as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub number_in_stock: String,
    /// Id of the category the item belongs to.
    pub category: String,
}

impl ItemForm {
    /// Runs the item rules.
    ///
    /// ## Rules
    /// - name, description, category: not empty after trimming
    /// - price: non-negative decimal with at most two fractional digits
    /// - number_in_stock: non-negative integer
    ///
    /// Whether `category` names an existing category is NOT checked here;
    /// that needs the store and belongs to volt-catalog.
    pub fn validate(&self) -> ValidationResult<ItemFields> {
        let mut errors = ValidationErrors::new();

        let name = required("name", &self.name, &mut errors);
        let description = required("description", &self.description, &mut errors);
        let category_id = required("category", &self.category, &mut errors);

        let price = match parse_price(&self.price) {
            Ok(price) => price,
            Err(e) => {
                errors.push(e);
                Money::zero()
            }
        };

        let number_in_stock = match parse_stock(&self.number_in_stock) {
            Ok(n) => n,
            Err(e) => {
                errors.push(e);
                0
            }
        };

        errors.into_result(ItemFields {
            name,
            description,
            price,
            number_in_stock,
            category_id,
        })
    }
}

impl From<&ItemFields> for ItemForm {
    /// Pre-fills an edit form from stored values.
    fn from(fields: &ItemFields) -> Self {
        let price = fields.price;
        ItemForm {
            name: fields.name.clone(),
            description: fields.description.clone(),
            price: format!("{}.{:02}", price.dollars(), price.cents_part()),
            number_in_stock: fields.number_in_stock.to_string(),
            category: fields.category_id.clone(),
        }
    }
}

impl From<&CategoryFields> for CategoryForm {
    fn from(fields: &CategoryFields) -> Self {
        CategoryForm::new(fields.name.clone(), fields.description.clone())
    }
}

// =============================================================================
// Field Rules
// =============================================================================

/// Validates a category name (already trimmed).
///
/// ## Example
/// ```rust
/// use volt_core::validation::validate_category_name;
///
/// assert!(validate_category_name("Televisions").is_ok());
/// assert!(validate_category_name("TV").is_err());
/// assert!(validate_category_name("Home Appliances").is_err());
/// ```
pub fn validate_category_name(name: &str) -> Result<(), ValidationError> {
    validate_min_len("name", name, CATEGORY_NAME_MIN_LEN)?;

    if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::invalid(
            "name",
            "must contain only letters and numbers",
        ));
    }

    Ok(())
}

fn validate_min_len(field: &str, value: &str, min: usize) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        return Err(ValidationError::TooShort {
            field: field.to_string(),
            min,
        });
    }
    Ok(())
}

/// Trims `value`, recording a `Required` error when nothing is left.
fn required(field: &str, value: &str, errors: &mut ValidationErrors) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.push(ValidationError::required(field));
    }
    value.to_string()
}

/// Parses a submitted price.
///
/// ## Example
/// ```rust
/// use volt_core::validation::parse_price;
///
/// assert_eq!(parse_price("1799.99").unwrap().cents(), 179999);
/// assert!(parse_price("-5").is_err());
/// assert!(parse_price("ten").is_err());
/// ```
pub fn parse_price(raw: &str) -> Result<Money, ValidationError> {
    raw.parse::<Money>().map_err(|e| match e {
        ParseMoneyError::Empty => ValidationError::required("price"),
        ParseMoneyError::Negative => ValidationError::Negative {
            field: "price".to_string(),
        },
        ParseMoneyError::Invalid => ValidationError::invalid("price", "must be a decimal number"),
        ParseMoneyError::TooPrecise => ValidationError::invalid(
            "price",
            "must be in whole cents (at most two decimal places)",
        ),
        ParseMoneyError::Overflow => ValidationError::invalid("price", "is too large"),
    })
}

/// Parses a submitted stock count.
pub fn parse_stock(raw: &str) -> Result<i64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::required("numberInStock"));
    }

    let digits = raw.strip_prefix('+').unwrap_or(raw);
    if let Some(rest) = digits.strip_prefix('-') {
        if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()) {
            if rest.chars().all(|c| c == '0') {
                return Ok(0);
            }
            return Err(ValidationError::Negative {
                field: "numberInStock".to_string(),
            });
        }
    }

    if !digits.chars().all(|c| c.is_ascii_digit()) || digits.is_empty() {
        return Err(ValidationError::invalid(
            "numberInStock",
            "must be a whole number",
        ));
    }

    digits
        .parse::<i64>()
        .map_err(|_| ValidationError::invalid("numberInStock", "is too large"))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TV_DESCRIPTION: &str =
        "Display devices that use electronics to produce images and sound.";

    fn item_form() -> ItemForm {
        ItemForm {
            name: "TV1".to_string(),
            description: "d".to_string(),
            price: "10".to_string(),
            number_in_stock: "1".to_string(),
            category: "c1".to_string(),
        }
    }

    #[test]
    fn test_category_form_trims() {
        let fields = CategoryForm::new("  Televisions  ", format!(" {} ", TV_DESCRIPTION))
            .validate()
            .unwrap();
        assert_eq!(fields.name, "Televisions");
        assert_eq!(fields.description, TV_DESCRIPTION);
    }

    #[test]
    fn test_category_name_rules() {
        assert!(validate_category_name("abc").is_ok());
        assert!(validate_category_name("Phones2024").is_ok());

        assert!(matches!(
            validate_category_name("ab"),
            Err(ValidationError::TooShort { min: 3, .. })
        ));
        assert!(matches!(
            validate_category_name("Mobile Phones"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(validate_category_name("Télé").is_err());
        assert!(validate_category_name("TV-Sets").is_err());
    }

    #[test]
    fn test_category_form_collects_all_errors() {
        let errors = CategoryForm::new(" a ", "too short").validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.has_field("name"));
        assert!(errors.has_field("description"));
    }

    #[test]
    fn test_description_counts_characters_after_trim() {
        // 14 characters padded with spaces is still too short
        let errors = CategoryForm::new("Televisions", "   fourteen chars  ")
            .validate()
            .unwrap_err();
        assert!(errors.has_field("description"));

        assert!(CategoryForm::new("Televisions", "exactly fifteen").validate().is_ok());
    }

    #[test]
    fn test_item_form_valid() {
        let fields = item_form().validate().unwrap();
        assert_eq!(fields.name, "TV1");
        assert_eq!(fields.price, Money::from_cents(1000));
        assert_eq!(fields.number_in_stock, 1);
        assert_eq!(fields.category_id, "c1");
    }

    #[test]
    fn test_item_form_required_fields() {
        let form = ItemForm {
            name: "  ".to_string(),
            description: String::new(),
            category: " ".to_string(),
            ..item_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.has_field("name"));
        assert!(errors.has_field("description"));
        assert!(errors.has_field("category"));
    }

    #[test]
    fn test_item_form_numeric_rules() {
        let form = ItemForm {
            price: "-1".to_string(),
            number_in_stock: "2.5".to_string(),
            ..item_form()
        };
        let errors: Vec<ValidationError> = form.validate().unwrap_err().into_iter().collect();
        assert_eq!(
            errors,
            vec![
                ValidationError::Negative {
                    field: "price".to_string()
                },
                ValidationError::InvalidFormat {
                    field: "numberInStock".to_string(),
                    reason: "must be a whole number".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_sub_cent_price_is_explained() {
        let form = ItemForm {
            price: "1.999".to_string(),
            ..item_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.field_errors(),
            vec![crate::error::FieldError {
                field: "price".to_string(),
                message: "price must be in whole cents (at most two decimal places)".to_string(),
            }]
        );
    }

    #[test]
    fn test_parse_stock() {
        assert_eq!(parse_stock("0"), Ok(0));
        assert_eq!(parse_stock(" 11 "), Ok(11));
        assert_eq!(parse_stock("+3"), Ok(3));
        assert_eq!(parse_stock("-0"), Ok(0));
        assert!(matches!(parse_stock("-4"), Err(ValidationError::Negative { .. })));
        assert!(matches!(parse_stock(""), Err(ValidationError::Required { .. })));
        assert!(matches!(parse_stock("x"), Err(ValidationError::InvalidFormat { .. })));
        assert!(matches!(parse_stock("-"), Err(ValidationError::InvalidFormat { .. })));
        assert!(parse_stock("99999999999999999999").is_err());
    }

    #[test]
    fn test_edit_form_prefill_round_trips() {
        let fields = item_form().validate().unwrap();
        let form = ItemForm::from(&fields);
        assert_eq!(form.price, "10.00");
        assert_eq!(form.validate().unwrap(), fields);
    }
}
