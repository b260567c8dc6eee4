//! Full-page loading indicator

use dioxus::prelude::*;

/// Centered spinner with a message, shown while the catalog loads.
#[component]
pub fn LoadingSpinner(
    #[props(default = "Loading...".to_string())] message: String,
) -> Element {
    rsx! {
        div { class: "min-h-screen flex items-center justify-center",
            div { class: "text-center",
                div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-teal-700 mx-auto mb-4" }
                p { class: "text-teal-700", "{message}" }
            }
        }
    }
}
