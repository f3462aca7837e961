//=============================================================================
// File: src/screens/shop.rs
//=============================================================================
use api::catalog::Product;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::empty_state::EmptyState;
use crate::components::product_card::ProductCard;
use crate::hooks::use_cart::use_cart;

#[component]
pub fn ShopScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut cart = use_cart();
    let currency = app_state.prefs.currency();
    let products = app_state.catalog.products();

    rsx! {
        section { class: "shop",
            h2 { "Shop" }
            if products.is_empty() {
                EmptyState {
                    title: "Nothing on the shelves".to_string(),
                    description: Some("Check back soon.".to_string()),
                }
            } else {
                div { class: "product-grid",
                    for product in products.iter().cloned() {
                        ProductCard {
                            key: "{product.id}",
                            product,
                            currency,
                            on_add: move |p: Product| cart.add(p.to_line_item(1)),
                        }
                    }
                }
            }
        }
    }
}
