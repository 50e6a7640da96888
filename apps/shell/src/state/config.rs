//! # Configuration State
//!
//! Store facts shown around the menu, loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--store-name`, ...)
//! 2. Environment variables (`MANGAL_*`)
//! 3. Defaults (this file)
//!
//! Read-only after initialization.

use mangal_core::{Money, FREE_DELIVERY_FROM};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (page header)
    pub store_name: String,

    /// Line under the store name
    pub tagline: String,

    /// Phone number customers can call
    pub contact_phone: String,

    pub opening_hours: String,

    /// Promised delivery time
    pub delivery_window: String,

    /// Order total from which delivery is free
    pub free_delivery_from: Money,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Шашлычная".to_string(),
            tagline: "Свежий шашлык с доставкой на дом".to_string(),
            contact_phone: "+7 (999) 123-45-67".to_string(),
            opening_hours: "Ежедневно с 10:00 до 23:00".to_string(),
            delivery_window: "40-60 минут".to_string(),
            free_delivery_from: Money::from_units(FREE_DELIVERY_FROM),
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `MANGAL_STORE_NAME`: Override store name
    /// - `MANGAL_CONTACT_PHONE`: Override contact phone
    /// - `MANGAL_FREE_DELIVERY_FROM`: Override free delivery threshold (e.g. "1500")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("MANGAL_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(phone) = lookup("MANGAL_CONTACT_PHONE") {
            config.contact_phone = phone;
        }

        if let Some(raw) = lookup("MANGAL_FREE_DELIVERY_FROM") {
            match raw.trim().parse::<i64>() {
                Ok(units) if units >= 0 => config.free_delivery_from = Money::from_units(units),
                _ => warn!(value = %raw, "ignoring invalid MANGAL_FREE_DELIVERY_FROM"),
            }
        }

        config
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn with_overrides(
        mut self,
        store_name: Option<String>,
        free_delivery_from: Option<u32>,
    ) -> Self {
        if let Some(store_name) = store_name {
            self.store_name = store_name;
        }
        if let Some(units) = free_delivery_from {
            self.free_delivery_from = Money::from_units(i64::from(units));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.store_name, "Шашлычная");
        assert_eq!(config.free_delivery_from.units(), 1000);
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("MANGAL_STORE_NAME", "Мангал №1"),
            ("MANGAL_FREE_DELIVERY_FROM", "1500"),
        ]));
        assert_eq!(config.store_name, "Мангал №1");
        assert_eq!(config.free_delivery_from.units(), 1500);
        assert_eq!(config.contact_phone, "+7 (999) 123-45-67");
    }

    #[test]
    fn test_invalid_threshold_is_ignored() {
        let config = ConfigState::from_lookup(lookup_from(&[("MANGAL_FREE_DELIVERY_FROM", "-3")]));
        assert_eq!(config.free_delivery_from.units(), 1000);

        let config = ConfigState::from_lookup(lookup_from(&[("MANGAL_FREE_DELIVERY_FROM", "lots")]));
        assert_eq!(config.free_delivery_from.units(), 1000);
    }

    #[test]
    fn test_flag_overrides_win() {
        let config = ConfigState::from_lookup(lookup_from(&[("MANGAL_STORE_NAME", "env")]))
            .with_overrides(Some("flag".to_string()), Some(0));
        assert_eq!(config.store_name, "flag");
        assert!(config.free_delivery_from.is_zero());
    }
}
