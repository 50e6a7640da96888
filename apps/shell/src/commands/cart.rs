//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│  Order   │────►│  Order   │       │
//! │  │  Cart    │     │          │     │   Form   │     │  Placed  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │       ▲                │                                  │             │
//! │       │           add_to_cart                        submit_order      │
//! │       │           remove_from_cart                   (order.rs)        │
//! │       │                                                   │             │
//! │       └───────────────────────────────────────────────────┘             │
//! │                          (back to empty)                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use mangal_core::{Cart, CartItem, CartSummary, CoreError, Money, ProductId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub summary: CartSummary,
    /// How much more to order for free delivery (zero once reached)
    pub free_delivery_remaining: Money,
}

impl CartResponse {
    fn build(cart: &Cart, config: &ConfigState) -> Self {
        let summary = CartSummary::from(cart);
        CartResponse {
            items: cart.items().to_vec(),
            free_delivery_remaining: summary.amount_until(config.free_delivery_from),
            summary,
        }
    }
}

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Корзина                                                      ✕        │
/// │  ───────────────────────────────────────────────────────────────       │
/// │  🥩 Шашлык из свинины     450 ₽ × 2              [−] 2 [+]             │
/// │  🍅 Овощи на мангале      250 ₽ × 1              [−] 1 [+]             │
/// │  ───────────────────────────────────────────────────────────────       │
/// │  Итого: 1150 ₽                                                         │
/// │                                                                         │
/// │  cart → { items: [...], summary: {...}, freeDeliveryRemaining: 0 }    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(session: &SessionState, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    session.with_session(|s| CartResponse::build(s.cart(), config))
}

/// Adds one unit of a catalog product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity increases
/// - Product not in cart: appended as a new line
/// - Unknown product id: `NOT_FOUND`
pub fn add_to_cart(
    session: &mut SessionState,
    config: &ConfigState,
    product_id: ProductId,
) -> Result<CartResponse, ApiError> {
    debug!(product_id, "add_to_cart command");

    session.with_session_mut(|catalog, s| -> Result<CartResponse, ApiError> {
        let product = catalog
            .get(product_id)
            .ok_or(CoreError::ProductNotFound(product_id))?;
        s.add_item(product)?;
        Ok(CartResponse::build(s.cart(), config))
    })
}

/// Removes one unit of a product from the cart.
///
/// ## Behavior
/// - Last unit: the line disappears
/// - Product not in cart: `CART_ERROR`, cart unchanged
pub fn remove_from_cart(
    session: &mut SessionState,
    config: &ConfigState,
    product_id: ProductId,
) -> Result<CartResponse, ApiError> {
    debug!(product_id, "remove_from_cart command");

    session.with_session_mut(|_, s| -> Result<CartResponse, ApiError> {
        s.remove_item(product_id)?;
        Ok(CartResponse::build(s.cart(), config))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_add_and_remove() {
        let mut state = SessionState::default();
        let config = ConfigState::default();

        add_to_cart(&mut state, &config, 1).unwrap();
        add_to_cart(&mut state, &config, 1).unwrap();
        let response = add_to_cart(&mut state, &config, 5).unwrap();
        assert_eq!(response.summary.item_count, 2);
        assert_eq!(response.summary.total.units(), 1150);
        assert!(response.free_delivery_remaining.is_zero());

        let response = remove_from_cart(&mut state, &config, 1).unwrap();
        assert_eq!(response.summary.total.units(), 700);
        assert_eq!(response.free_delivery_remaining.units(), 300);
    }

    #[test]
    fn test_add_unknown_product() {
        let mut state = SessionState::default();
        let err = add_to_cart(&mut state, &ConfigState::default(), 42).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_cart(&state, &ConfigState::default()).items.is_empty());
    }

    #[test]
    fn test_remove_missing_line() {
        let mut state = SessionState::default();
        let err = remove_from_cart(&mut state, &ConfigState::default(), 3).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
    }

    #[test]
    fn test_empty_cart_response() {
        let state = SessionState::default();
        let response = get_cart(&state, &ConfigState::default());
        assert!(response.items.is_empty());
        assert!(response.summary.total.is_zero());
        assert_eq!(response.free_delivery_remaining.units(), 1000);
    }
}
