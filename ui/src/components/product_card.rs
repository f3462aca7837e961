use api::catalog::Product;
use api::currency::StoreCurrency;
use dioxus::prelude::*;

/// A catalog tile with an "Add to cart" action.
#[component]
pub fn ProductCard(
    product: Product,
    currency: StoreCurrency,
    on_add: EventHandler<Product>,
) -> Element {
    let price = product.price.to_string_with_symbol(currency);
    let clicked = product.clone();

    rsx! {
        article { class: "product-card",
            img {
                class: "product-card-image",
                src: "{product.image_url}",
                alt: "{product.name}",
            }
            div { class: "product-card-body",
                h3 { "{product.name}" }
                if !product.blurb.is_empty() {
                    p { class: "product-card-blurb", "{product.blurb}" }
                }
                div { class: "product-card-footer",
                    span { class: "product-card-price", "{price}" }
                    button {
                        class: "add-to-cart",
                        onclick: move |_| on_add.call(clicked.clone()),
                        "Add to cart"
                    }
                }
            }
        }
    }
}
