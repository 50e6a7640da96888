//! # Error Types
//!
//! Domain-specific error types for mangal-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  mangal-core errors (this file)                                        │
//! │  ├── CoreError        - Cart, session and order rule violations        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Shell errors (in app)                                                 │
//! │  └── ApiError         - What the shell prints (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Presentation Shell     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There are no transient or retryable errors: nothing here performs I/O.

use thiserror::Error;

use crate::types::{ProductId, View};

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// `remove_item` was called for a product that has no cart line.
    ///
    /// The cart is left untouched when this is returned.
    #[error("Product {0} is not in the cart")]
    ItemNotInCart(ProductId),

    /// A product id does not exist in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Checkout was requested with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// The cart is read-only while the order form is open.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart Panel ──► "Оформить заказ" ──► Order Form (cart frozen)
    ///                                          │
    ///                         add / remove ────┘──► CartFrozen
    /// ```
    #[error("Cart cannot be changed while the order form is open")]
    CartFrozen,

    /// A navigation action is not valid from the current view.
    #[error("Cannot {action} while {from}")]
    InvalidTransition { from: View, action: &'static str },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Duplicate value (e.g., duplicate product id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// A collection that must have members is empty.
    #[error("{field} must not be empty")]
    Empty { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
