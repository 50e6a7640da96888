//! # Validation Module
//!
//! Input validation for the storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation Shell                                           │
//! │  └── `required` inputs, immediate feedback                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: mangal-core (THIS MODULE)                                    │
//! │  ├── Delivery form: every field present                                │
//! │  └── Catalog: names present, prices non-negative                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Phone and address are free text. Presence is the only rule; surrounding
//! whitespace does not count as presence.
//!
//! ## Usage
//! ```rust
//! use mangal_core::validation::validate_required;
//!
//! assert!(validate_required("phone", "+7 999 123-45-67").is_ok());
//! assert!(validate_required("phone", "   ").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{CustomerForm, FormField};
use crate::MAX_PRICE;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a text field is present.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a product name.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_required("name", name)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a catalog price.
///
/// ## Rules
/// - Must be non-negative (zero is allowed)
/// - Must not exceed [`MAX_PRICE`]
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price.units() > MAX_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE,
        });
    }

    Ok(())
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates a delivery form before submission.
///
/// Fields are checked in form order; the first missing one is reported.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Order Form: "Подтвердить заказ"                                       │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_customer_form(form) ← THIS FUNCTION                          │
/// │       │                                                                 │
/// │       ├── name blank?    → Required { field: "name" }                  │
/// │       ├── phone blank?   → Required { field: "phone" }                 │
/// │       ├── address blank? → Required { field: "address" }               │
/// │       │                                                                 │
/// │       └── OK → order::submit proceeds                                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_customer_form(form: &CustomerForm) -> ValidationResult<()> {
    for field in FormField::ALL {
        validate_required(field.as_str(), form.get(field))?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
