//! # Order Submission
//!
//! Turns the current cart and delivery form into a confirmation, then
//! resets both.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submit(cart, form)                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. validate_customer_form ──── blank field? ──► Err, nothing reset     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. Order snapshot { id, items, total, customer, placed_at }           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. Confirmation { name, phone, total, message }                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  4. cart.clear() + form.reset()                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ok(confirmation) ── the Order itself is dropped here                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Steps 2-4 cannot fail, so callers observe either no reset or both.
//! An empty cart is accepted here; the session refuses to open the order
//! form for one.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::cart::Cart;
use crate::error::CoreResult;
use crate::types::{Confirmation, CustomerForm, Order};
use crate::validation::validate_customer_form;

/// Places the order described by `cart` and `form`.
///
/// ## Example
/// ```rust
/// use mangal_core::{order, Cart, Catalog, CustomerForm};
///
/// let catalog = Catalog::standard();
/// let mut cart = Cart::new();
/// cart.add_item(catalog.get(5).unwrap());
///
/// let mut form = CustomerForm {
///     name: "Ann".into(),
///     phone: "123".into(),
///     address: "X".into(),
/// };
///
/// let confirmation = order::submit(&mut cart, &mut form).unwrap();
/// assert_eq!(confirmation.total.units(), 250);
/// assert!(cart.is_empty());
/// assert_eq!(form, CustomerForm::default());
/// ```
pub fn submit(cart: &mut Cart, form: &mut CustomerForm) -> CoreResult<Confirmation> {
    validate_customer_form(form)?;

    let order = snapshot(cart, form);
    info!(
        order_id = %order.id,
        items = order.items.len(),
        total = order.total.units(),
        "order placed"
    );

    let confirmation = confirm(&order);

    cart.clear();
    form.reset();

    Ok(confirmation)
}

/// Freezes the cart and form into an [`Order`].
pub fn snapshot(cart: &Cart, form: &CustomerForm) -> Order {
    Order {
        id: Uuid::new_v4().to_string(),
        items: cart.items().to_vec(),
        total: cart.total(),
        customer: form.clone(),
        placed_at: Utc::now(),
    }
}

/// Builds the thank-you confirmation for `order`.
pub fn confirm(order: &Order) -> Confirmation {
    let message = format!(
        "Спасибо за заказ, {}! Мы свяжемся с вами по телефону {} для подтверждения. Сумма заказа: {}",
        order.customer.name, order.customer.phone, order.total
    );

    Confirmation {
        order_id: order.id.clone(),
        customer_name: order.customer.name.clone(),
        phone: order.customer.phone.clone(),
        total: order.total,
        message,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};
    use crate::types::FormField;
    use crate::Catalog;
    use proptest::collection::vec;
    use proptest::prelude::*;

    fn filled_form() -> CustomerForm {
        CustomerForm {
            name: "Ann".to_string(),
            phone: "123".to_string(),
            address: "X".to_string(),
        }
    }

    #[test]
    fn test_submit_confirms_and_resets() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_item(catalog.get(5).unwrap());
        let mut form = filled_form();

        let confirmation = submit(&mut cart, &mut form).unwrap();

        assert_eq!(confirmation.customer_name, "Ann");
        assert_eq!(confirmation.phone, "123");
        assert_eq!(confirmation.total.units(), 250);
        assert!(confirmation.message.contains("Ann"));
        assert!(confirmation.message.contains("123"));
        assert!(confirmation.message.contains("250 ₽"));

        assert!(cart.is_empty());
        assert_eq!(form, CustomerForm::default());
    }

    #[test]
    fn test_submit_resets_regardless_of_cart_contents() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        for product in catalog.list_products() {
            cart.add_item(product);
            cart.add_item(product);
        }
        let mut form = filled_form();

        let confirmation = submit(&mut cart, &mut form).unwrap();
        assert_eq!(confirmation.total.units(), 2 * (450 + 350 + 550 + 400 + 250 + 100 + 80 + 80));
        assert!(cart.is_empty());
        assert!(form.is_blank());
    }

    #[test]
    fn test_submit_with_empty_cart_is_allowed() {
        let mut cart = Cart::new();
        let mut form = filled_form();

        let confirmation = submit(&mut cart, &mut form).unwrap();
        assert!(confirmation.total.is_zero());
        assert!(form.is_blank());
    }

    #[test]
    fn test_invalid_form_resets_nothing() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_item(catalog.get(1).unwrap());
        let mut form = filled_form();
        form.set(FormField::Address, "  ");

        let err = submit(&mut cart, &mut form).unwrap_err();
        assert_eq!(
            err,
            CoreError::Validation(ValidationError::Required {
                field: "address".to_string()
            })
        );
        assert_eq!(cart.item_count(), 1);
        assert_eq!(form.name, "Ann");
    }

    #[test]
    fn test_snapshot_is_independent_of_later_changes() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_item(catalog.get(2).unwrap());
        let form = filled_form();

        let order = snapshot(&cart, &form);
        cart.clear();

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.total.units(), 350);
        assert_eq!(order.customer, form);
        assert!(uuid::Uuid::parse_str(&order.id).is_ok());
    }

    proptest! {
        #[test]
        fn prop_submit_always_empties_cart_and_form(
            picks in vec(0..8usize, 0..30),
            name in "[A-Za-z]{1,12}",
            phone in "[0-9]{3,11}",
            address in "[A-Za-z0-9 ,.]{0,20}[A-Za-z]",
        ) {
            let catalog = Catalog::standard();
            let products = catalog.list_products();
            let mut cart = Cart::new();
            for i in picks {
                cart.add_item(&products[i]);
            }
            let expected_total = cart.total();
            let mut form = CustomerForm { name: name.clone(), phone, address };

            let confirmation = submit(&mut cart, &mut form).unwrap();

            prop_assert_eq!(confirmation.total, expected_total);
            prop_assert_eq!(confirmation.customer_name, name);
            prop_assert!(cart.is_empty());
            prop_assert!(form.is_blank());
        }

        #[test]
        fn prop_blank_field_resets_nothing(picks in vec(0..8usize, 1..10), field in 0..3usize) {
            let catalog = Catalog::standard();
            let products = catalog.list_products();
            let mut cart = Cart::new();
            for i in picks {
                cart.add_item(&products[i]);
            }
            let mut form = filled_form();
            form.set(FormField::ALL[field], " ");
            let (cart_before, form_before) = (cart.clone(), form.clone());

            prop_assert!(submit(&mut cart, &mut form).is_err());
            prop_assert_eq!(cart, cart_before);
            prop_assert_eq!(form, form_before);
        }
    }
}
