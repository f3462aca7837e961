//! A cart store that lives for the duration of the page session.

use dioxus_logger::tracing::debug;

use crate::cart::CartError;
use crate::cart::CartLineItem;
use crate::cart::CartStore;
use crate::cart::ItemId;

/// An in-memory, insertion-ordered `CartStore`.
///
/// Setting a line's quantity to zero removes the line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryCart {
    items: Vec<CartLineItem>,
}

impl InMemoryCart {
    /// Creates a new, empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cart holding `items`. Lines with a repeated id are merged.
    pub fn with_items(items: impl IntoIterator<Item = CartLineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            cart.add(item);
        }
        cart
    }

    fn position(&self, id: ItemId) -> Result<usize, CartError> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(CartError::UnknownItem(id))
    }
}

impl CartStore for InMemoryCart {
    fn line_items(&self) -> &[CartLineItem] {
        &self.items
    }

    fn update_quantity(&mut self, id: ItemId, quantity: u32) -> Result<(), CartError> {
        let index = self.position(id)?;
        if quantity == 0 {
            let removed = self.items.remove(index);
            debug!("cart: quantity of {} set to 0, line removed", removed.name);
        } else {
            self.items[index].quantity = quantity;
            debug!("cart: quantity of item {id} set to {quantity}");
        }
        Ok(())
    }

    fn remove(&mut self, id: ItemId) -> Result<(), CartError> {
        let index = self.position(id)?;
        let removed = self.items.remove(index);
        debug!("cart: removed {}", removed.name);
        Ok(())
    }

    fn add(&mut self, item: CartLineItem) {
        match self.items.iter_mut().find(|line| line.id == item.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(item.quantity);
                debug!("cart: {} now x{}", line.name, line.quantity);
            }
            None => {
                debug!("cart: added {} x{}", item.name, item.quantity);
                self.items.push(item);
            }
        }
    }
}
