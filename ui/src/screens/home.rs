use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::Route;

#[component]
pub fn HomeScreen() -> Element {
    let app_state = use_context::<AppState>();

    rsx! {
        section { class: "hero",
            h1 { class: "hero-title", "{app_state.prefs.brand()}" }
            p { class: "hero-subtitle", "Supplements for people who train." }
            Link { to: Route::ShopScreen {}, class: "hero-cta", "Shop now" }
        }
    }
}
