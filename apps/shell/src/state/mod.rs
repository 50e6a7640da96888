//! # State Module
//!
//! State held by the shell for the life of the process.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐      │
//! │  │      SessionState        │        │       ConfigState        │      │
//! │  │                          │        │                          │      │
//! │  │  Catalog (read-only)     │        │  store name, phone       │      │
//! │  │  Session (cart, form,    │        │  hours, delivery window  │      │
//! │  │           view)          │        │  free delivery threshold │      │
//! │  └──────────────────────────┘        └──────────────────────────┘      │
//! │                                                                         │
//! │  Commands borrow only the state they need.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::ConfigState;
pub use session::SessionState;
