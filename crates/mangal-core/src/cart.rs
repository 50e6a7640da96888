//! # Cart Engine
//!
//! Owns the cart line items and derives every figure from them.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Shell Action             Cart Method             Cart State Change     │
//! │  ────────────             ───────────             ─────────────────     │
//! │                                                                         │
//! │  "Добавить" / "+" ───────► add_item() ──────────► qty += 1 or push     │
//! │                                                                         │
//! │  "−" ────────────────────► remove_item() ───────► qty -= 1 or remove   │
//! │                                                                         │
//! │  Order placed ───────────► clear() ─────────────► items.clear()        │
//! │                                                                         │
//! │  Badge / Итого ──────────► item_count() / total() (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Distinct products stay few, so every lookup is a linear scan by id.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::validation::validate_price;

/// A product line in the cart.
///
/// Product fields are copied when the line is created, so the line renders
/// on its own without a catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub image_glyph: String,
    pub description: String,
    /// Always >= 1; a line that would reach 0 is removed instead.
    pub quantity: u32,
}

impl CartItem {
    /// Creates a line with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        CartItem {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image_glyph: product.image_glyph.clone(),
            description: product.description.clone(),
            quantity: 1,
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per product id (repeat adds bump the quantity)
/// - Every quantity is >= 1
/// - Lines keep first-add order; later adds and removes never reorder them
///
/// The wire form is the bare line list. Deserializing goes through
/// [`Cart::from_items`], so a decoded cart holds the same invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Rebuilds a cart from existing lines, keeping their order.
    ///
    /// ## Errors
    /// - `Duplicate` if two lines share a product id
    /// - `OutOfRange` for a zero quantity or an out-of-range price
    pub fn from_items(items: Vec<CartItem>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(ValidationError::Duplicate {
                    field: "cart line".to_string(),
                    value: item.id.to_string(),
                }
                .into());
            }
            if item.quantity == 0 {
                return Err(ValidationError::OutOfRange {
                    field: "quantity".to_string(),
                    min: 1,
                    max: i64::from(u32::MAX),
                }
                .into());
            }
            validate_price(item.price)?;
        }

        Ok(Cart { items })
    }

    /// Adds one unit of `product`.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity + 1, position unchanged
    /// - Otherwise: new line with quantity 1 appended at the end
    pub fn add_item(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == product.id) {
            item.quantity = item.quantity.saturating_add(1);
            debug!(product_id = product.id, quantity = item.quantity, "cart quantity increased");
            return;
        }

        self.items.push(CartItem::from_product(product));
        debug!(product_id = product.id, quantity = 1, "cart line added");
    }

    /// Removes one unit of the product with `product_id`.
    ///
    /// ## Behavior
    /// - Quantity 1: the line is deleted
    /// - Quantity > 1: quantity - 1, position unchanged
    ///
    /// ## Errors
    /// `ItemNotInCart` when there is no such line; the cart is unchanged.
    pub fn remove_item(&mut self, product_id: ProductId) -> CoreResult<()> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == product_id)
            .ok_or(CoreError::ItemNotInCart(product_id))?;

        let item = &mut self.items[index];
        if item.quantity > 1 {
            item.quantity -= 1;
            debug!(product_id, quantity = item.quantity, "cart quantity decreased");
        } else {
            self.items.remove(index);
            debug!(product_id, "cart line removed");
        }

        Ok(())
    }

    /// Sum of price × quantity over all lines. Zero for an empty cart.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Number of distinct lines (what the cart badge shows), not units.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total number of units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
        debug!("cart cleared");
    }

    /// Lines in first-add order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl TryFrom<Vec<CartItem>> for Cart {
    type Error = CoreError;

    fn try_from(items: Vec<CartItem>) -> CoreResult<Self> {
        Cart::from_items(items)
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

/// Cart figures for shell responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSummary {
    pub item_count: usize,
    #[ts(type = "number")]
    pub total_quantity: u64,
    pub total: Money,
}

impl CartSummary {
    /// Amount still needed to reach `threshold` (zero once reached).
    pub fn amount_until(&self, threshold: Money) -> Money {
        self.total.remaining_until(threshold)
    }
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        CartSummary {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total: cart.total(),
        }
    }
}
