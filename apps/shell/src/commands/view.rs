//! # View Commands
//!
//! Cart panel and order form navigation. Transitions the current view does
//! not allow come back as `INVALID_ACTION`.

use mangal_core::{CoreResult, Money, Session, View};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::SessionState;

/// The active view plus the cart figures the panel or order form shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
    pub view: View,
    /// Distinct lines, as shown on the cart button
    pub item_count: usize,
    /// Cart total ("Сумма заказа" on the order form)
    pub total: Money,
}

fn respond(session: &Session, view: View) -> ViewResponse {
    ViewResponse {
        view,
        item_count: session.item_count(),
        total: session.total(),
    }
}

fn navigate<F>(session: &mut SessionState, action: F) -> Result<ViewResponse, ApiError>
where
    F: FnOnce(&mut Session) -> CoreResult<View>,
{
    session.with_session_mut(|_, s| -> Result<ViewResponse, ApiError> {
        let view = action(s)?;
        Ok(respond(s, view))
    })
}

/// The cart button in the header.
pub fn toggle_cart(session: &mut SessionState) -> ViewResponse {
    debug!("toggle_cart command");
    session.with_session_mut(|_, s| {
        let view = s.toggle_cart();
        respond(s, view)
    })
}

/// The ✕ on the cart panel.
pub fn close_cart(session: &mut SessionState) -> Result<ViewResponse, ApiError> {
    debug!("close_cart command");
    navigate(session, Session::close_cart)
}

/// "Оформить заказ" in the cart panel.
pub fn proceed_to_order(session: &mut SessionState) -> Result<ViewResponse, ApiError> {
    debug!("proceed_to_order command");
    navigate(session, Session::proceed_to_order)
}

/// The ✕ on the order form.
pub fn cancel_order(session: &mut SessionState) -> Result<ViewResponse, ApiError> {
    debug!("cancel_order command");
    navigate(session, Session::cancel_order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::error::ErrorCode;
    use crate::state::ConfigState;

    #[test]
    fn test_checkout_navigation() {
        let mut state = SessionState::default();
        add_to_cart(&mut state, &ConfigState::default(), 6).unwrap();

        assert_eq!(toggle_cart(&mut state).view, View::ReviewingCart);
        let response = proceed_to_order(&mut state).unwrap();
        assert_eq!(response.view, View::FillingOrder);
        assert_eq!(response.item_count, 1);
        assert_eq!(response.total.units(), 100);

        assert_eq!(cancel_order(&mut state).unwrap().view, View::Browsing);
    }

    #[test]
    fn test_checkout_with_empty_cart() {
        let mut state = SessionState::default();
        toggle_cart(&mut state);
        let err = proceed_to_order(&mut state).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
    }

    #[test]
    fn test_close_when_not_open() {
        let mut state = SessionState::default();
        let err = close_cart(&mut state).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidAction);
    }
}
