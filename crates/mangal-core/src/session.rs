//! # Session
//!
//! The session-scoped state object: one cart, one delivery form, the active
//! view, and the re-render signals the shell has not yet consumed.
//!
//! ## View Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session View State Machine                           │
//! │                                                                         │
//! │               toggle_cart                proceed_to_order               │
//! │  ┌──────────┐ ──────────► ┌───────────────┐ ──────────► ┌────────────┐ │
//! │  │ Browsing │             │ ReviewingCart │             │FillingOrder│ │
//! │  └──────────┘ ◄────────── └───────────────┘ ◄────────── └────────────┘ │
//! │       ▲       toggle_cart                     toggle_cart      │        │
//! │       │       close_cart                                      │        │
//! │       │                                                       │        │
//! │       └──────────── cancel_order (cart kept) ─────────────────┤        │
//! │       └──────────── submit_order (cart + form reset) ─────────┘        │
//! │                                                                         │
//! │  No terminal state: the cycle repeats for the life of the session.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutation records a [`StateChange`]; the shell drains them with
//! [`Session::drain_changes`] and re-renders what moved.

use tracing::debug;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::order;
use crate::types::{Confirmation, CustomerForm, FormField, Product, ProductId, StateChange, View};

/// State for a single browsing session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    cart: Cart,
    form: CustomerForm,
    view: View,
    pending: Vec<StateChange>,
}

impl Session {
    /// Starts browsing with an empty cart and blank form.
    pub fn new() -> Self {
        Session::default()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn form(&self) -> &CustomerForm {
        &self.form
    }

    pub fn view(&self) -> View {
        self.view
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    /// Adds one unit of `product`. Rejected while the order form is open.
    pub fn add_item(&mut self, product: &Product) -> CoreResult<()> {
        self.ensure_cart_editable()?;
        self.cart.add_item(product);
        self.signal(StateChange::Cart);
        Ok(())
    }

    /// Removes one unit of `product_id`. Rejected while the order form is open.
    pub fn remove_item(&mut self, product_id: ProductId) -> CoreResult<()> {
        self.ensure_cart_editable()?;
        self.cart.remove_item(product_id)?;
        self.signal(StateChange::Cart);
        Ok(())
    }

    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Distinct lines, as shown on the cart button badge.
    pub fn item_count(&self) -> usize {
        self.cart.item_count()
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// The cart button: opens the panel, or closes it when already open.
    ///
    /// From the order form it returns to the cart panel; form contents stay.
    pub fn toggle_cart(&mut self) -> View {
        let next = match self.view {
            View::Browsing | View::FillingOrder => View::ReviewingCart,
            View::ReviewingCart => View::Browsing,
        };
        self.transition(next);
        next
    }

    /// Closes the cart panel.
    pub fn close_cart(&mut self) -> CoreResult<View> {
        self.require(View::ReviewingCart, "close the cart")?;
        self.transition(View::Browsing);
        Ok(View::Browsing)
    }

    /// Opens the delivery form from a non-empty cart.
    pub fn proceed_to_order(&mut self) -> CoreResult<View> {
        self.require(View::ReviewingCart, "proceed to order")?;
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }
        self.transition(View::FillingOrder);
        Ok(View::FillingOrder)
    }

    /// Closes the delivery form without ordering. Cart and form are kept.
    pub fn cancel_order(&mut self) -> CoreResult<View> {
        self.require(View::FillingOrder, "cancel order")?;
        self.transition(View::Browsing);
        Ok(View::Browsing)
    }

    // -------------------------------------------------------------------------
    // Order
    // -------------------------------------------------------------------------

    /// Sets one delivery form field. Allowed in every view.
    pub fn update_form(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
        self.signal(StateChange::Form);
    }

    /// Places the order and returns to browsing with a fresh cart and form.
    ///
    /// On a validation error the session is left exactly as it was.
    pub fn submit_order(&mut self) -> CoreResult<Confirmation> {
        self.require(View::FillingOrder, "submit order")?;

        let confirmation = order::submit(&mut self.cart, &mut self.form)?;
        self.signal(StateChange::Cart);
        self.signal(StateChange::Form);
        self.transition(View::Browsing);

        Ok(confirmation)
    }

    // -------------------------------------------------------------------------
    // Change signals
    // -------------------------------------------------------------------------

    /// Returns pending signals once each, in first-signal order, and clears them.
    pub fn drain_changes(&mut self) -> Vec<StateChange> {
        std::mem::take(&mut self.pending)
    }

    fn signal(&mut self, change: StateChange) {
        if !self.pending.contains(&change) {
            self.pending.push(change);
        }
    }

    fn transition(&mut self, next: View) {
        debug!(from = ?self.view, view = ?next, "view transition");
        self.view = next;
        self.signal(StateChange::View);
    }

    fn require(&self, expected: View, action: &'static str) -> CoreResult<()> {
        if self.view == expected {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition {
                from: self.view,
                action,
            })
        }
    }

    fn ensure_cart_editable(&self) -> CoreResult<()> {
        if self.view == View::FillingOrder {
            return Err(CoreError::CartFrozen);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::Catalog;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing::Level;
    use tracing_subscriber::fmt::MakeWriter;

    fn fill_form(session: &mut Session) {
        session.update_form(FormField::Name, "Ann");
        session.update_form(FormField::Phone, "123");
        session.update_form(FormField::Address, "X");
    }

    fn lines(session: &Session) -> Vec<(ProductId, u32)> {
        session.cart().items().iter().map(|i| (i.id, i.quantity)).collect()
    }

    #[test]
    fn test_full_order_scenario() {
        let catalog = Catalog::standard();
        let pork = catalog.get(1).unwrap();
        let veg = catalog.get(5).unwrap();
        let mut session = Session::new();

        session.add_item(pork).unwrap();
        session.add_item(pork).unwrap();
        session.add_item(veg).unwrap();
        assert_eq!(lines(&session), vec![(1, 2), (5, 1)]);
        assert_eq!(session.total().units(), 1150);

        session.remove_item(1).unwrap();
        assert_eq!(lines(&session), vec![(1, 1), (5, 1)]);
        assert_eq!(session.total().units(), 700);

        session.remove_item(1).unwrap();
        assert_eq!(lines(&session), vec![(5, 1)]);
        assert_eq!(session.total().units(), 250);

        session.toggle_cart();
        session.proceed_to_order().unwrap();
        fill_form(&mut session);

        let confirmation = session.submit_order().unwrap();
        assert!(confirmation.message.contains("Ann"));
        assert!(confirmation.message.contains("123"));
        assert_eq!(confirmation.total.units(), 250);

        assert!(session.cart().is_empty());
        assert_eq!(session.form(), &CustomerForm::default());
        assert_eq!(session.view(), View::Browsing);
    }

    #[test]
    fn test_toggle_cart_cycles() {
        let mut session = Session::new();
        assert_eq!(session.toggle_cart(), View::ReviewingCart);
        assert_eq!(session.toggle_cart(), View::Browsing);
    }

    #[test]
    fn test_toggle_from_order_form_keeps_form() {
        let catalog = Catalog::standard();
        let mut session = Session::new();
        session.add_item(catalog.get(6).unwrap()).unwrap();
        session.toggle_cart();
        session.proceed_to_order().unwrap();
        session.update_form(FormField::Name, "Ann");

        assert_eq!(session.toggle_cart(), View::ReviewingCart);
        assert_eq!(session.form().name, "Ann");
    }

    #[test]
    fn test_proceed_requires_items() {
        let mut session = Session::new();
        session.toggle_cart();
        assert_eq!(session.proceed_to_order(), Err(CoreError::EmptyCart));
        assert_eq!(session.view(), View::ReviewingCart);
    }

    #[test]
    fn test_invalid_transitions() {
        let mut session = Session::new();
        assert!(matches!(
            session.close_cart(),
            Err(CoreError::InvalidTransition { from: View::Browsing, .. })
        ));
        assert!(matches!(
            session.cancel_order(),
            Err(CoreError::InvalidTransition { .. })
        ));
        assert!(matches!(
            session.submit_order(),
            Err(CoreError::InvalidTransition { .. })
        ));
        assert_eq!(session.view(), View::Browsing);
    }

    #[test]
    fn test_cart_frozen_while_filling_order() {
        let catalog = Catalog::standard();
        let mut session = Session::new();
        session.add_item(catalog.get(2).unwrap()).unwrap();
        session.toggle_cart();
        session.proceed_to_order().unwrap();

        assert_eq!(session.add_item(catalog.get(3).unwrap()), Err(CoreError::CartFrozen));
        assert_eq!(session.remove_item(2), Err(CoreError::CartFrozen));
        assert_eq!(lines(&session), vec![(2, 1)]);
    }

    #[test]
    fn test_cancel_keeps_cart_and_form() {
        let catalog = Catalog::standard();
        let mut session = Session::new();
        session.add_item(catalog.get(4).unwrap()).unwrap();
        session.toggle_cart();
        session.proceed_to_order().unwrap();
        session.update_form(FormField::Phone, "555");

        assert_eq!(session.cancel_order(), Ok(View::Browsing));
        assert_eq!(session.item_count(), 1);
        assert_eq!(session.form().phone, "555");
    }

    #[test]
    fn test_failed_submit_leaves_session_unchanged() {
        let catalog = Catalog::standard();
        let mut session = Session::new();
        session.add_item(catalog.get(1).unwrap()).unwrap();
        session.toggle_cart();
        session.proceed_to_order().unwrap();
        session.update_form(FormField::Name, "Ann");

        let err = session.submit_order().unwrap_err();
        assert_eq!(
            err,
            CoreError::Validation(ValidationError::Required {
                field: "phone".to_string()
            })
        );
        assert_eq!(session.view(), View::FillingOrder);
        assert_eq!(session.item_count(), 1);
        assert_eq!(session.form().name, "Ann");
    }

    #[test]
    fn test_remove_unknown_item_signals_nothing() {
        let mut session = Session::new();
        assert_eq!(session.remove_item(8), Err(CoreError::ItemNotInCart(8)));
        assert!(session.drain_changes().is_empty());
    }

    #[test]
    fn test_drain_changes_deduplicates_and_clears() {
        let catalog = Catalog::standard();
        let mut session = Session::new();
        session.add_item(catalog.get(1).unwrap()).unwrap();
        session.add_item(catalog.get(2).unwrap()).unwrap();
        session.toggle_cart();
        session.update_form(FormField::Name, "Ann");

        assert_eq!(
            session.drain_changes(),
            vec![StateChange::Cart, StateChange::View, StateChange::Form]
        );
        assert!(session.drain_changes().is_empty());
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_transition_logs_view_field() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            Session::new().toggle_cart();
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("view transition"));
        assert!(output.contains("from=Browsing"));
        assert!(output.contains("view=ReviewingCart"));
    }

    #[test]
    fn test_submit_signals_cart_form_and_view() {
        let catalog = Catalog::standard();
        let mut session = Session::new();
        session.add_item(catalog.get(1).unwrap()).unwrap();
        session.toggle_cart();
        session.proceed_to_order().unwrap();
        fill_form(&mut session);
        session.drain_changes();

        session.submit_order().unwrap();
        assert_eq!(
            session.drain_changes(),
            vec![StateChange::Cart, StateChange::Form, StateChange::View]
        );
    }
}
