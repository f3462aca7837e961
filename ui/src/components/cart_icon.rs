use std::time::Duration;

use dioxus::prelude::*;

use crate::compat;

const RIPPLE: Duration = Duration::from_millis(600);

/// The cart trigger's face: bag icon, label and a badge when non-empty.
///
/// Clicking plays a ripple. The timer that clears it only affects the ripple.
#[component]
pub fn CartIcon(count: u32) -> Element {
    let mut rippling = use_signal(|| false);

    rsx! {
        div {
            class: "cart-icon",
            onclick: move |_| {
                rippling.set(true);
                spawn(async move {
                    compat::sleep(RIPPLE).await;
                    rippling.set(false);
                });
            },
            div { class: "cart-icon-glow", "aria-hidden": "true" }
            div { class: "cart-icon-body",
                if rippling() {
                    div { class: "cart-ripple" }
                }
                svg {
                    class: "cart-icon-bag",
                    fill: "none",
                    stroke: "currentColor",
                    view_box: "0 0 24 24",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M16 11V7a4 4 0 00-8 0v4M5 9h14l1 12H4L5 9z",
                    }
                }
                span { "Cart" }
                if count > 0 {
                    span { class: "cart-badge", "{count}" }
                }
            }
        }
    }
}
