use std::env;
use std::str::FromStr;

use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;

use crate::currency::StoreCurrency;

/// Represents the storefront's settings: branding, pricing currency and the
/// checkout hand-off target.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct StorePrefs {
    brand: String,
    currency: StoreCurrency,
    checkout_phone: String,
    checkout_greeting: String,
}

impl StorePrefs {
    /// Creates a StorePrefs instance from environment variables,
    /// with in-code defaults.
    ///
    /// # Environment Variables
    /// - `STORE_BRAND`: text shown in the navigation logo.
    /// - `STORE_CURRENCY`: "USD", "EUR", ... (case-insensitive).
    /// - `STORE_CHECKOUT_PHONE`: international number orders are sent to.
    /// - `STORE_CHECKOUT_GREETING`: first line of the pre-filled order message.
    ///
    /// There is no process environment in the browser, so a WASM build always
    /// gets the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`StorePrefs::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        const BRAND: &str = "MC NUTRITION";
        const CHECKOUT_PHONE: &str = "+96103903800";
        const CHECKOUT_GREETING: &str = "I want to order";

        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let currency = non_empty("STORE_CURRENCY")
            .and_then(|s| match StoreCurrency::from_str(s.trim()) {
                Ok(currency) => Some(currency),
                Err(_) => {
                    warn!(
                        "unknown STORE_CURRENCY {:?}, using {}",
                        s,
                        StoreCurrency::default().code()
                    );
                    None
                }
            })
            .unwrap_or_default();

        Self {
            brand: non_empty("STORE_BRAND").unwrap_or_else(|| BRAND.to_string()),
            currency,
            checkout_phone: non_empty("STORE_CHECKOUT_PHONE")
                .unwrap_or_else(|| CHECKOUT_PHONE.to_string()),
            checkout_greeting: non_empty("STORE_CHECKOUT_GREETING")
                .unwrap_or_else(|| CHECKOUT_GREETING.to_string()),
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn currency(&self) -> StoreCurrency {
        self.currency
    }

    pub fn checkout_phone(&self) -> &str {
        &self.checkout_phone
    }

    pub fn checkout_greeting(&self) -> &str {
        &self.checkout_greeting
    }
}

impl Default for StorePrefs {
    fn default() -> Self {
        Self::from_env()
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
    fn defaults_apply_without_environment() {
        let prefs = StorePrefs::from_lookup(|_| None);
        assert_eq!(prefs.brand(), "MC NUTRITION");
        assert_eq!(prefs.currency(), StoreCurrency::USD);
        assert_eq!(prefs.checkout_phone(), "+96103903800");
        assert_eq!(prefs.checkout_greeting(), "I want to order");
    }

    #[test]
    fn environment_overrides_defaults() {
        let prefs = StorePrefs::from_lookup(lookup_from(&[
            ("STORE_BRAND", "ACME FUEL"),
            ("STORE_CURRENCY", "eur"),
            ("STORE_CHECKOUT_PHONE", "+441234567890"),
        ]));
        assert_eq!(prefs.brand(), "ACME FUEL");
        assert_eq!(prefs.currency(), StoreCurrency::EUR);
        assert_eq!(prefs.checkout_phone(), "+441234567890");
        assert_eq!(prefs.checkout_greeting(), "I want to order");
    }

    #[test]
    fn unknown_currency_and_blank_values_fall_back() {
        let prefs = StorePrefs::from_lookup(lookup_from(&[
            ("STORE_CURRENCY", "doubloons"),
            ("STORE_BRAND", "   "),
        ]));
        assert_eq!(prefs.currency(), StoreCurrency::USD);
        assert_eq!(prefs.brand(), "MC NUTRITION");
    }
}
