//! # Order Commands
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Оформление заказа                                            ✕        │
//! │                                                                         │
//! │  Имя:             [ Ann        ]  ◄── set name Ann                     │
//! │  Телефон:         [ 123        ]  ◄── set phone 123                    │
//! │  Адрес доставки:  [ X          ]  ◄── set address X                    │
//! │                                                                         │
//! │  Сумма заказа: 250 ₽                                                    │
//! │  [ Подтвердить заказ ]            ◄── submit                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Confirmation ── cart and form reset, back to the menu                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use mangal_core::{Confirmation, CustomerForm, FormField};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::SessionState;

/// Current delivery form contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    pub form: CustomerForm,
}

/// Sets one field of the pending delivery form.
pub fn update_form(session: &mut SessionState, field: FormField, value: String) -> FormResponse {
    debug!(%field, "update_form command");
    session.with_session_mut(|_, s| {
        s.update_form(field, value);
        FormResponse {
            form: s.form().clone(),
        }
    })
}

/// Places the order.
///
/// ## Returns
/// The confirmation to display; cart and form are reset afterwards.
pub fn submit_order(session: &mut SessionState) -> Result<Confirmation, ApiError> {
    debug!("submit_order command");
    let confirmation = session.with_session_mut(|_, s| s.submit_order())?;
    info!(order_id = %confirmation.order_id, "order confirmed");
    Ok(confirmation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::{add_to_cart, get_cart};
    use crate::commands::view::{proceed_to_order, toggle_cart};
    use crate::error::ErrorCode;
    use crate::state::ConfigState;

    fn at_order_form() -> SessionState {
        let mut state = SessionState::default();
        add_to_cart(&mut state, &ConfigState::default(), 5).unwrap();
        toggle_cart(&mut state);
        proceed_to_order(&mut state).unwrap();
        state
    }

    #[test]
    fn test_submit_order() {
        let mut state = at_order_form();
        update_form(&mut state, FormField::Name, "Ann".to_string());
        update_form(&mut state, FormField::Phone, "123".to_string());
        let response = update_form(&mut state, FormField::Address, "X".to_string());
        assert_eq!(response.form.address, "X");

        let confirmation = submit_order(&mut state).unwrap();
        assert_eq!(confirmation.customer_name, "Ann");
        assert_eq!(confirmation.total.units(), 250);

        assert!(get_cart(&state, &ConfigState::default()).items.is_empty());
        assert!(state.with_session(|s| s.form().is_blank()));
    }

    #[test]
    fn test_submit_with_missing_field() {
        let mut state = at_order_form();
        update_form(&mut state, FormField::Name, "Ann".to_string());

        let err = submit_order(&mut state).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "phone is required");
        assert_eq!(get_cart(&state, &ConfigState::default()).items.len(), 1);
    }
}
