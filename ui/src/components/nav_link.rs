use dioxus::prelude::*;

use crate::hooks::use_navigation_flags::close_for_navigation;
use crate::hooks::use_navigation_flags::use_navigation_flags;

/// A desktop navigation entry. The active one carries an underline.
#[component]
pub fn NavLink(to: &'static str, label: &'static str, active: bool) -> Element {
    let flags = use_navigation_flags();

    rsx! {
        Link {
            to,
            class: if active { "nav-link active" } else { "nav-link" },
            onclick: move |_| close_for_navigation(flags, to),
            span { class: "nav-link-hover", "aria-hidden": "true" }
            span { class: "nav-link-label",
                "{label}"
                if active {
                    span { class: "nav-link-underline" }
                }
            }
        }
    }
}
