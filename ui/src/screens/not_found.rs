use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::Route;

#[component]
pub fn NotFoundScreen(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "page-section",
            EmptyState {
                title: "Page not found".to_string(),
                description: Some(format!("Nothing lives at {path}.")),
                primary_action: rsx! {
                    Link { to: Route::HomeScreen {}, "Back to home" }
                },
            }
        }
    }
}
