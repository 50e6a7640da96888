//! # Catalog Commands

use mangal_core::Product;
use tracing::debug;

use crate::state::{ConfigState, SessionState};

/// Returns the menu in display order.
pub fn list_products(session: &SessionState) -> Vec<Product> {
    debug!("list_products command");
    session.catalog().list_products().to_vec()
}

/// Returns the store facts shown in the header and footer.
pub fn get_store_info(config: &ConfigState) -> ConfigState {
    debug!("get_store_info command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_products_keeps_menu_order() {
        let state = SessionState::default();
        let products = list_products(&state);
        assert_eq!(products.len(), 8);
        assert_eq!(products[0].name, "Шашлык из свинины");
        assert_eq!(products[7].name, "Аджика");
    }
}
