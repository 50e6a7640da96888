//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  CustomerForm   │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  name           │   │  id (UUID)      │       │
//! │  │  name           │   │  phone          │   │  items          │       │
//! │  │  price          │   │  address        │   │  total          │       │
//! │  │  image_glyph    │   └─────────────────┘   │  customer       │       │
//! │  │  description    │                         └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      View       │   │   StateChange   │   │  Confirmation   │       │
//! │  │  Browsing       │   │  Cart           │   │  message        │       │
//! │  │  ReviewingCart  │   │  Form           │   │  total          │       │
//! │  │  FillingOrder   │   │  View           │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Orders are ephemeral snapshots: built at submission, logged, and dropped.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartItem;
use crate::money::Money;

/// Stable catalog identifier of a product.
pub type ProductId = u32;

// =============================================================================
// Product
// =============================================================================

/// A dish on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique, stable catalog id.
    pub id: ProductId,

    /// Display name shown on the product card and in the cart.
    pub name: String,

    /// Price in whole units.
    pub price: Money,

    /// Emoji shown in place of a photo.
    pub image_glyph: String,

    /// Portion and composition notes.
    pub description: String,
}

impl Product {
    /// Creates a product.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: i64,
        image_glyph: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Product {
            id,
            name: name.into(),
            price: Money::from_units(price),
            image_glyph: image_glyph.into(),
            description: description.into(),
        }
    }
}

// =============================================================================
// Customer Form
// =============================================================================

/// One of the three delivery form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FormField {
    Name,
    Phone,
    Address,
}

impl FormField {
    /// All fields in form order.
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Phone, FormField::Address];

    /// Field name as used in validation messages and shell input.
    pub const fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Phone => "phone",
            FormField::Address => "address",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no form field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field '{0}' (expected name, phone or address)")]
pub struct UnknownFormField(pub String);

impl FromStr for FormField {
    type Err = UnknownFormField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(FormField::Name),
            "phone" => Ok(FormField::Phone),
            "address" => Ok(FormField::Address),
            other => Err(UnknownFormField(other.to_string())),
        }
    }
}

/// Delivery details collected before an order is placed.
///
/// All fields are free text; presence is the only rule (see
/// [`crate::validation::validate_customer_form`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CustomerForm {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl CustomerForm {
    /// Sets a single field, replacing its previous value.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Phone => self.phone = value,
            FormField::Address => self.address = value,
        }
    }

    /// Returns the current value of a field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::Address => &self.address,
        }
    }

    /// Restores the all-empty default.
    pub fn reset(&mut self) {
        *self = CustomerForm::default();
    }

    /// True when every field is empty.
    pub fn is_blank(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

// =============================================================================
// Order
// =============================================================================

/// Snapshot of a cart and form at the moment of submission.
///
/// Never stored; exists only long enough to produce a [`Confirmation`].
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    /// Correlation id for logs (UUID v4).
    pub id: String,
    pub items: Vec<CartItem>,
    pub total: Money,
    pub customer: CustomerForm,
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
}

/// What the shell shows after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Confirmation {
    pub order_id: String,
    pub customer_name: String,
    pub phone: String,
    pub total: Money,
    /// Ready-to-display thank-you text.
    pub message: String,
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// =============================================================================
// View & Change Signals
// =============================================================================

/// Which part of the page is active. Exactly one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum View {
    /// Menu visible, no panel open.
    #[default]
    Browsing,
    /// Cart panel open.
    ReviewingCart,
    /// Delivery form open; the cart is read-only context.
    FillingOrder,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            View::Browsing => "browsing",
            View::ReviewingCart => "reviewing the cart",
            View::FillingOrder => "filling in the order",
        })
    }
}

/// Re-render signal. Carries no payload beyond which state moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StateChange {
    Cart,
    Form,
    View,
}

// =============================================================================
// Unit Tests
// =============================================================================
