//! # Shell Commands Module
//!
//! One function per call the Presentation Shell makes into the core.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Menu and store facts
//! ├── cart.rs     ◄─── Cart manipulation
//! ├── view.rs     ◄─── Cart panel / order form navigation
//! └── order.rs    ◄─── Delivery form and submission
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the session
//! fn toggle_cart(session: &mut SessionState) -> ViewResponse
//!
//! // Needs session and config (free delivery threshold)
//! fn add_to_cart(session: &mut SessionState, config: &ConfigState, product_id: u32)
//! ```

pub mod cart;
pub mod catalog;
pub mod order;
pub mod view;
