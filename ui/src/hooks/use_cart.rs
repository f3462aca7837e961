use api::CartLineItem;
use api::CartStore;
use api::ItemId;
use dioxus::prelude::*;

use crate::cart_view;
use crate::cart_view::CartSnapshot;

/// The cart store shared through context. Any `CartStore` can be plugged in.
pub type SharedCart = Signal<Box<dyn CartStore>>;

/// Component-side access to the shared cart.
///
/// Mutations go straight to the store. A rejected mutation is logged and
/// otherwise ignored: the next render shows whatever the store holds.
#[derive(Clone, Copy)]
pub struct CartHandle {
    store: SharedCart,
}

impl CartHandle {
    /// Reads the store and derives count and total. Subscribes the caller.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::capture(&**self.store.read())
    }

    pub fn item_count(&self) -> u32 {
        cart_view::item_count(self.store.read().line_items())
    }

    pub fn request_quantity_change(&mut self, id: ItemId, new_quantity: i64) {
        let result = cart_view::request_quantity_change(&mut **self.store.write(), id, new_quantity);
        if let Err(e) = result {
            dioxus_logger::tracing::warn!("cart rejected quantity change: {}", e);
        }
    }

    pub fn request_removal(&mut self, id: ItemId) {
        if let Err(e) = cart_view::request_removal(&mut **self.store.write(), id) {
            dioxus_logger::tracing::warn!("cart rejected removal: {}", e);
        }
    }

    pub fn add(&mut self, item: CartLineItem) {
        dioxus_logger::tracing::info!("adding {} x{} to cart", item.name, item.quantity);
        self.store.write().add(item);
    }
}

/// Installs `store` as the cart for every component below the caller.
pub fn use_cart_provider(store: impl FnOnce() -> Box<dyn CartStore>) -> CartHandle {
    let store = use_context_provider(|| Signal::new(store()));
    CartHandle { store }
}

pub fn use_cart() -> CartHandle {
    let store = use_context::<SharedCart>();
    CartHandle { store }
}
