use api::currency::StoreCurrency;
use api::CartLineItem;
use api::ItemId;
use dioxus::prelude::*;

use crate::cart_view::line_total;

/// One line in the cart dropdown: image, name, quantity stepper, line total
/// and a remove button.
#[component]
pub fn CartItemRow(
    item: CartLineItem,
    currency: StoreCurrency,
    on_quantity_change: EventHandler<(ItemId, i64)>,
    on_remove: EventHandler<ItemId>,
) -> Element {
    let id = item.id;
    let quantity = i64::from(item.quantity);
    let total = line_total(&item).to_string_with_symbol(currency);

    rsx! {
        div { class: "cart-item",
            div { class: "cart-item-info",
                img {
                    class: "cart-item-image",
                    src: "{item.image_url}",
                    alt: "{item.name}",
                }
                div {
                    h3 { class: "cart-item-name", "{item.name}" }
                    div { class: "cart-item-stepper",
                        button {
                            "aria-label": "Decrease quantity",
                            onclick: move |_| on_quantity_change.call((id, quantity - 1)),
                            "-"
                        }
                        span { class: "cart-item-quantity", "{item.quantity}" }
                        button {
                            "aria-label": "Increase quantity",
                            onclick: move |_| on_quantity_change.call((id, quantity + 1)),
                            "+"
                        }
                    }
                }
            }
            div { class: "cart-item-actions",
                span { class: "cart-item-total", "{total}" }
                button {
                    class: "cart-item-remove",
                    "aria-label": "Remove {item.name}",
                    onclick: move |_| on_remove.call(id),
                    svg {
                        fill: "none",
                        stroke: "currentColor",
                        view_box: "0 0 24 24",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "2",
                            d: "M6 18L18 6M6 6l12 12",
                        }
                    }
                }
            }
        }
    }
}
