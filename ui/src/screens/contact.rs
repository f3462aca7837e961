use dioxus::prelude::*;

use crate::app_state::AppState;

#[component]
pub fn ContactScreen() -> Element {
    let app_state = use_context::<AppState>();
    let phone = app_state.prefs.checkout_phone();
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();

    rsx! {
        section { class: "page-section",
            h2 { "Contact" }
            p { "Questions about an order? Message us." }
            a {
                class: "contact-link",
                href: "https://wa.me/{digits}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{phone}"
            }
        }
    }
}
