use api::ItemId;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::cart_item::CartItemRow;
use crate::components::empty_state::EmptyState;
use crate::hooks::use_cart::use_cart;

/// The inline cart panel under the navigation bar.
///
/// Renders from a fresh snapshot of the shared store on every pass and sends
/// quantity/removal intents back to it.
#[component]
pub fn CartDropdown() -> Element {
    let app_state = use_context::<AppState>();
    let mut cart = use_cart();
    let snapshot = cart.snapshot();
    let currency = app_state.prefs.currency();
    let checkout = snapshot.checkout(&app_state.prefs);
    let total = snapshot.total.to_string_with_symbol(currency);
    let item_count = snapshot.item_count;

    rsx! {
        div { class: "cart-dropdown", role: "dialog", "aria-label": "Shopping cart",
            div { class: "cart-dropdown-header",
                h2 { "Shopping Cart" }
            }
            div { class: "cart-dropdown-items",
                if snapshot.is_empty() {
                    EmptyState { title: "Your cart is empty".to_string(), compact: true }
                } else {
                    for item in snapshot.items.iter().cloned() {
                        CartItemRow {
                            key: "{item.id}",
                            item,
                            currency,
                            on_quantity_change: move |(id, quantity): (ItemId, i64)| cart.request_quantity_change(id, quantity),
                            on_remove: move |id: ItemId| cart.request_removal(id),
                        }
                    }
                }
            }
            if let Some(request) = checkout {
                div { class: "cart-dropdown-footer",
                    div { class: "cart-dropdown-total",
                        span { "Total:" }
                        span { class: "cart-dropdown-total-value", "{total}" }
                    }
                    a {
                        href: "{request.url()}",
                        title: "{request.message()}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        onclick: move |_| {
                            dioxus_logger::tracing::info!("checkout hand-off opened for {} item(s)", item_count);
                        },
                        button { class: "checkout-button", "Checkout" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::use_cart::use_cart_provider;
    use crate::test_render::first_render;
    use api::catalog::Catalog;
    use api::prefs::store_prefs::StorePrefs;
    use api::CartError;
    use api::CartLineItem;
    use api::CartStore;
    use api::Price;

    /// Keeps zero-quantity lines around instead of dropping them.
    struct KeepingStore {
        items: Vec<CartLineItem>,
    }

    impl CartStore for KeepingStore {
        fn line_items(&self) -> &[CartLineItem] {
            &self.items
        }

        fn update_quantity(&mut self, id: ItemId, quantity: u32) -> Result<(), CartError> {
            let item = self
                .items
                .iter_mut()
                .find(|i| i.id == id)
                .ok_or(CartError::UnknownItem(id))?;
            item.quantity = quantity;
            Ok(())
        }

        fn remove(&mut self, id: ItemId) -> Result<(), CartError> {
            self.items.retain(|i| i.id != id);
            Ok(())
        }

        fn add(&mut self, item: CartLineItem) {
            self.items.push(item);
        }
    }

    fn line(id: u32, name: &str, price: f64, quantity: u32) -> CartLineItem {
        CartLineItem {
            id: ItemId(id),
            name: name.to_string(),
            image_url: String::new(),
            unit_price: Price::new(price).unwrap(),
            quantity,
        }
    }

    fn dropdown_over(items: Vec<CartLineItem>) -> Element {
        use_context_provider(|| {
            AppState::new(
                StorePrefs::from_lookup(|_| None),
                Catalog::builtin().unwrap(),
            )
        });
        use_cart_provider(move || Box::new(KeepingStore { items }) as Box<dyn CartStore>);
        rsx! {
            CartDropdown {}
        }
    }

    #[test]
    fn empty_cart_shows_placeholder_and_no_checkout() {
        let mut dom = VirtualDom::new_with_props(dropdown_over, vec![]);
        let rendered = first_render(&mut dom);
        assert!(rendered.has_text("Your cart is empty"));
        assert!(!rendered.has_class("cart-dropdown-footer"));
        assert!(!rendered.has_text("Checkout"));
    }

    #[test]
    fn lines_at_zero_quantity_count_as_empty() {
        let mut dom = VirtualDom::new_with_props(dropdown_over, vec![line(1, "Whey", 10.0, 0)]);
        let rendered = first_render(&mut dom);
        assert!(rendered.has_text("Your cart is empty"));
        assert!(!rendered.has_class("cart-item"));
        assert!(!rendered.has_text("Checkout"));
    }

    #[test]
    fn filled_cart_lists_lines_total_and_checkout() {
        let items = vec![line(1, "Whey", 10.0, 2), line(2, "Creatine", 5.0, 1)];
        let mut dom = VirtualDom::new_with_props(dropdown_over, items);
        let rendered = first_render(&mut dom);
        assert!(!rendered.has_text("Your cart is empty"));
        assert!(rendered.has_text("Whey"));
        assert!(rendered.has_text("Creatine"));
        assert!(rendered.has_text("$20.00"));
        assert!(rendered.has_text("$25.00"));
        assert!(rendered.has_class("cart-dropdown-footer"));
        assert!(rendered.has_text("Checkout"));
    }
}
