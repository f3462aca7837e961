use dioxus::prelude::*;

use crate::app_state::AppState;

#[component]
pub fn AboutScreen() -> Element {
    let app_state = use_context::<AppState>();

    rsx! {
        section { class: "page-section",
            h2 { "About" }
            p {
                "{app_state.prefs.brand()} stocks a short list of lab-tested supplements. "
                "Order from the cart and we confirm by message."
            }
        }
    }
}
