use dioxus::prelude::*;

use crate::hooks::use_navigation_flags::close_for_navigation;
use crate::hooks::use_navigation_flags::use_navigation_flags;
use crate::nav_flags::NAV_LINKS;

/// The stacked link list shown under the bar on small screens.
#[component]
pub fn MobileMenu(current_path: String) -> Element {
    let flags = use_navigation_flags();

    rsx! {
        div { class: "mobile-menu",
            div { class: "mobile-menu-backdrop", "aria-hidden": "true" }
            div { class: "mobile-menu-links",
                for (i, entry) in NAV_LINKS.iter().enumerate() {
                    div {
                        key: "{entry.path}",
                        class: "mobile-menu-item",
                        style: format!("animation-delay: {}ms;", i * 100),
                        Link {
                            to: entry.path,
                            onclick: move |_| close_for_navigation(flags, entry.path),
                            class: if entry.is_active(&current_path) { "mobile-menu-link active" } else { "mobile-menu-link" },
                            "{entry.label}"
                        }
                    }
                }
            }
        }
    }
}

/// Three bars that fold into an X while the mobile menu is open.
#[component]
pub fn HamburgerButton(open: bool, on_toggle: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: if open { "hamburger open" } else { "hamburger" },
            "aria-label": "Toggle navigation menu",
            "aria-expanded": if open { "true" } else { "false" },
            onclick: move |evt| on_toggle.call(evt),
            span { class: "hamburger-glow", "aria-hidden": "true" }
            span { class: "hamburger-bar top" }
            span { class: "hamburger-bar middle" }
            span { class: "hamburger-bar bottom" }
        }
    }
}
