//! # mangal-core: Pure Business Logic for the Mangal Storefront
//!
//! This crate is the **heart** of the storefront. It holds the catalog, the
//! cart engine, order submission and the per-session view state machine as
//! pure, synchronous code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Mangal Storefront                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation Shell                           │   │
//! │  │    Menu ──► Cart Panel ──► Order Form ──► Confirmation          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ in-process calls                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ mangal-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   cart    │  │   order   │  │  session  │  │   │
//! │  │   │  Product  │  │   Cart    │  │  submit   │  │   View    │  │   │
//! │  │   │   menu    │  │ CartItem  │  │  Confirm  │  │  changes  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • SINGLE SESSION        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CustomerForm, Order, View, etc.)
//! - [`money`] - Whole-unit money type with integer arithmetic
//! - [`catalog`] - The fixed, read-only menu
//! - [`cart`] - Cart engine (add/remove/total)
//! - [`order`] - Order submission and confirmation
//! - [`session`] - Session-scoped state object driving the view lifecycle
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use mangal_core::{Catalog, FormField, Session};
//!
//! let catalog = Catalog::standard();
//! let mut session = Session::new();
//!
//! let pork = catalog.get(1).unwrap();
//! session.add_item(pork).unwrap();
//! session.add_item(pork).unwrap();
//! assert_eq!(session.total().units(), 900);
//!
//! session.toggle_cart();
//! session.proceed_to_order().unwrap();
//! session.update_form(FormField::Name, "Ann");
//! session.update_form(FormField::Phone, "123");
//! session.update_form(FormField::Address, "X");
//!
//! let confirmation = session.submit_order().unwrap();
//! assert!(confirmation.message.contains("Ann"));
//! assert!(session.cart().is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod order;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem, CartSummary};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use session::Session;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency symbol used when rendering [`Money`].
///
/// Prices are in whole rubles; there is no multi-currency support.
pub const CURRENCY_SYMBOL: &str = "₽";

/// Order total from which delivery is free (whole units).
pub const FREE_DELIVERY_FROM: i64 = 1000;

/// Highest price a catalog product may carry (whole units).
pub const MAX_PRICE: i64 = 1_000_000;
