// The client-side Dioxus storefront.

use dioxus::prelude::*;

mod app_state;
mod cart_view;
pub mod compat;
mod components;
pub mod hooks;
mod nav_flags;
mod screens;
#[cfg(test)]
mod test_render;

use api::catalog::Catalog;
use api::prefs::store_prefs::StorePrefs;
use api::CartStore;
use api::InMemoryCart;
use app_state::AppState;
use components::navbar::NavigationShell;
use hooks::use_cart::use_cart_provider;
use screens::about::AboutScreen;
use screens::contact::ContactScreen;
use screens::home::HomeScreen;
use screens::not_found::NotFoundScreen;
use screens::shop::ShopScreen;

/// The storefront's routes. Every page renders inside the navigation shell.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavigationShell)]
        #[route("/")]
        HomeScreen {},
        #[route("/shop")]
        ShopScreen {},
        #[route("/about")]
        AboutScreen {},
        #[route("/contact")]
        ContactScreen {},
        #[route("/:..segments")]
        NotFoundScreen { segments: Vec<String> },
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: asset!("/assets/storefront.css"),
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    let prefs = use_hook(StorePrefs::from_env);
    let catalog = use_hook(|| Catalog::builtin().map_err(|e| e.to_string()));

    match catalog {
        Ok(catalog) => rsx! {
            LoadedApp {
                app_state: AppState::new(prefs, catalog),
            }
        },
        Err(e) => {
            dioxus_logger::tracing::warn!("failed to load catalog: {}", e);
            rsx! {
                p {
                    "An error occurred: {e}"
                }
            }
        }
    }
}

/// Provides the app-wide contexts, then hands over to the router.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    use_cart_provider(|| Box::new(InMemoryCart::new()) as Box<dyn CartStore>);

    rsx! {
        Router::<Route> {}
    }
}
