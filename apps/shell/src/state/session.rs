//! # Session State
//!
//! The single browsing session the shell drives, plus the catalog it sells
//! from.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  Shell Line          Command                 Session Change             │
//! │  ──────────          ───────                 ──────────────             │
//! │                                                                         │
//! │  add 1 ────────────► add_to_cart() ────────► cart line +1              │
//! │  remove 1 ─────────► remove_from_cart() ───► cart line -1              │
//! │  toggle ───────────► toggle_cart() ────────► view change               │
//! │  set name Ann ─────► update_form() ────────► form field                │
//! │  submit ───────────► submit_order() ───────► cart + form reset         │
//! │  cart ─────────────► get_cart() ───────────► (read only)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input is handled one line at a time to completion, so the session is
//! owned outright; no locking is involved.

use mangal_core::{Catalog, Session};

/// Shell-owned session state.
#[derive(Debug, Default)]
pub struct SessionState {
    catalog: Catalog,
    session: Session,
}

impl SessionState {
    /// Creates a fresh session over `catalog`.
    pub fn new(catalog: Catalog) -> Self {
        SessionState {
            catalog,
            session: Session::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = state.with_session(|s| s.total());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        f(&self.session)
    }

    /// Executes a function with write access to the session and the catalog.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_session_mut(|catalog, s| s.add_item(catalog.get(1).unwrap()))?;
    /// ```
    pub fn with_session_mut<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&Catalog, &mut Session) -> R,
    {
        f(&self.catalog, &mut self.session)
    }
}
