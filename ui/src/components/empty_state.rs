// File: src/components/empty_state.rs
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Props)]
pub struct EmptyStateProps {
    title: String,
    #[props(default)]
    description: Option<String>,
    #[props(default)]
    primary_action: Option<Element>,
    #[props(default = false)]
    compact: bool,
}

/// A muted placeholder for "nothing here" situations: an empty cart, an
/// unknown page.
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            class: if props.compact { "empty-state compact" } else { "empty-state" },

            h4 { class: "empty-state-title", "{props.title}" }

            if let Some(desc) = props.description {
                p { class: "empty-state-description", "{desc}" }
            }

            if let Some(action) = props.primary_action {
                div {
                    {action}
                }
            }
        }
    }
}
