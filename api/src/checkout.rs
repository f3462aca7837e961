//! Builds the outbound order hand-off for a cart.

use crate::cart::CartLineItem;
use crate::prefs::store_prefs::StorePrefs;
use crate::price::Price;

const WHATSAPP_BASE: &str = "https://wa.me";

/// A pre-filled order message addressed to the store's checkout number.
///
/// Building one never touches the cart; whether items get cleared after an
/// order is up to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    phone: String,
    message: String,
}

impl CheckoutRequest {
    /// Summarizes `items` into an order message. Lines with a zero quantity
    /// are left out.
    pub fn for_items(prefs: &StorePrefs, items: &[CartLineItem], total: Price) -> Self {
        let currency = prefs.currency();
        let mut message = prefs.checkout_greeting().to_string();
        for item in items.iter().filter(|item| item.quantity > 0) {
            message.push_str(&format!(
                "\n{} x {} ({})",
                item.quantity,
                item.name,
                item.line_total().to_string_with_symbol(currency)
            ));
        }
        message.push_str(&format!("\nTotal: {}", total.to_string_with_symbol(currency)));

        Self {
            phone: prefs
                .checkout_phone()
                .chars()
                .filter(char::is_ascii_digit)
                .collect(),
            message,
        }
    }

    /// The order text, before percent-encoding.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The click-to-chat link carrying the percent-encoded message.
    pub fn url(&self) -> String {
        format!(
            "{}/{}?text={}",
            WHATSAPP_BASE,
            self.phone,
            urlencoding::encode(&self.message)
        )
    }
}
