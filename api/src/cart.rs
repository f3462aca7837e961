//! The cart contract shared by every store implementation and its readers.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::price::Price;

/// Identifies one product line in a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One cart entry: a product, its unit price and the purchased quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub id: ItemId,
    pub name: String,
    pub image_url: String,
    pub unit_price: Price,
    pub quantity: u32,
}

impl CartLineItem {
    /// `unit_price × quantity`, unrounded.
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// Reasons a store can refuse a mutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("no line item with id {0} in the cart")]
    UnknownItem(ItemId),
}

/// The read/write contract of a cart store.
///
/// The store is the single writer of its line items. Readers never cache what
/// they get back: every render asks again.
pub trait CartStore {
    /// Current line items, in display order.
    fn line_items(&self) -> &[CartLineItem];

    /// Sum of quantities across all line items.
    fn item_count(&self) -> u32 {
        self.line_items()
            .iter()
            .fold(0u32, |count, item| count.saturating_add(item.quantity))
    }

    /// Sum of `unit_price × quantity` across all line items.
    fn total(&self) -> Price {
        self.line_items().iter().map(CartLineItem::line_total).sum()
    }

    /// Sets the quantity of an existing line item.
    fn update_quantity(&mut self, id: ItemId, quantity: u32) -> Result<(), CartError>;

    /// Removes a line item.
    fn remove(&mut self, id: ItemId) -> Result<(), CartError>;

    /// Adds `item` to the cart. An existing line with the same id grows by
    /// `item.quantity` instead of being duplicated.
    fn add(&mut self, item: CartLineItem);
}
