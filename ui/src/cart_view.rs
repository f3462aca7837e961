//! Derived cart figures and the intents the cart dropdown sends to the store.
//!
//! Nothing here holds on to store data between renders: a [`CartSnapshot`] is
//! captured, displayed, and thrown away.

use api::checkout::CheckoutRequest;
use api::prefs::store_prefs::StorePrefs;
use api::CartError;
use api::CartLineItem;
use api::CartStore;
use api::ItemId;
use api::Price;

/// What the cart dropdown shows for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    pub items: Vec<CartLineItem>,
    pub item_count: u32,
    pub total: Price,
}

impl CartSnapshot {
    pub fn capture<S: CartStore + ?Sized>(store: &S) -> Self {
        let items = store.line_items().to_vec();
        Self {
            item_count: item_count(&items),
            total: grand_total(&items),
            items,
        }
    }

    /// An empty cart hides the line list and the checkout action.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// The order hand-off, or `None` when there is nothing to buy.
    pub fn checkout(&self, prefs: &StorePrefs) -> Option<CheckoutRequest> {
        if self.is_empty() {
            return None;
        }
        Some(CheckoutRequest::for_items(prefs, &self.items, self.total))
    }
}

/// Sum of quantities, capped at `u32::MAX`.
pub fn item_count(items: &[CartLineItem]) -> u32 {
    items
        .iter()
        .fold(0u32, |count, item| count.saturating_add(item.quantity))
}

pub fn line_total(item: &CartLineItem) -> Price {
    item.line_total()
}

pub fn grand_total(items: &[CartLineItem]) -> Price {
    items.iter().map(line_total).sum()
}

/// Quantities below zero become zero; values past `u32::MAX` saturate.
pub fn clamp_quantity(quantity: i64) -> u32 {
    u32::try_from(quantity.max(0)).unwrap_or(u32::MAX)
}

/// Forwards a clamped quantity to the store, which stays the only writer.
pub fn request_quantity_change<S: CartStore + ?Sized>(
    store: &mut S,
    id: ItemId,
    new_quantity: i64,
) -> Result<(), CartError> {
    store.update_quantity(id, clamp_quantity(new_quantity))
}

pub fn request_removal<S: CartStore + ?Sized>(store: &mut S, id: ItemId) -> Result<(), CartError> {
    store.remove(id)
}
