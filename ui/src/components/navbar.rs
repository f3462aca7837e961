//! The site header: the navigation bar, its overlays and the routed page.

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use crate::app_state::AppState;
use crate::components::cart_dropdown::CartDropdown;
use crate::components::cart_icon::CartIcon;
use crate::components::effects::NeonLine;
use crate::components::effects::ParticleField;
use crate::components::logo::Logo;
use crate::components::mobile_menu::HamburgerButton;
use crate::components::mobile_menu::MobileMenu;
use crate::components::nav_link::NavLink;
use crate::hooks::use_cart::use_cart;
use crate::hooks::use_navigation_flags::use_navigation_flags_provider;
use crate::hooks::use_scroll_offset::use_scroll_offset;
use crate::nav_flags::NavigationFlags;
use crate::nav_flags::NAV_LINKS;
use crate::Route;

/// Layout wrapping every route. Owns the navigation flags for as long as it
/// is mounted and drives them from scroll, route and click events.
#[component]
pub fn NavigationShell() -> Element {
    let app_state = use_context::<AppState>();
    let cart = use_cart();
    let mut flags = use_navigation_flags_provider();
    let scroll_offset = use_scroll_offset();
    let current_path = use_route::<Route>().to_string();

    use_effect(move || {
        let offset = scroll_offset();
        if flags.peek().scrolled != NavigationFlags::scrolled_at(offset) {
            flags.write().on_scroll(offset);
        }
    });

    use_effect(use_reactive((&current_path,), move |(path,)| {
        if flags.peek().any_overlay_open() {
            debug!("route changed to {path}, closing overlays");
        }
        flags.write().on_route_change(&path);
    }));

    let state = flags();
    let item_count = cart.item_count();

    rsx! {
        header { class: "site-header",
            nav {
                class: if state.scrolled { "navbar scrolled" } else { "navbar" },
                NeonLine {}
                ParticleField {}
                div { class: "navbar-inner",
                    Logo { brand: app_state.prefs.brand().to_string() }

                    div { class: "nav-links",
                        for entry in NAV_LINKS.iter() {
                            NavLink {
                                key: "{entry.path}",
                                to: entry.path,
                                label: entry.label,
                                active: entry.is_active(&current_path),
                            }
                        }
                    }

                    div { class: "nav-actions",
                        button {
                            class: "cart-trigger",
                            "aria-label": "Toggle cart",
                            "aria-expanded": if state.cart_open { "true" } else { "false" },
                            onclick: move |_| {
                                flags.write().toggle_cart();
                                debug!("cart open: {}", flags.peek().cart_open);
                            },
                            CartIcon { count: item_count }
                        }
                        HamburgerButton {
                            open: state.mobile_menu_open,
                            on_toggle: move |_| {
                                flags.write().toggle_mobile_menu();
                                debug!("mobile menu open: {}", flags.peek().mobile_menu_open);
                            },
                        }
                    }
                }

                if state.mobile_menu_open {
                    MobileMenu { current_path: current_path.clone() }
                }

                if state.cart_open {
                    CartDropdown {}
                }
            }

            if state.any_overlay_open() {
                div {
                    class: "overlay-backdrop",
                    onclick: move |_| flags.write().close_overlays(),
                }
            }
        }

        main { class: "page-content",
            Outlet::<Route> {}
        }
    }
}
