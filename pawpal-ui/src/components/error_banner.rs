//! Amber warning banner for surfacing a failed submission.

use crate::components::icons::{AlertTriangleIcon, XIcon};
use dioxus::prelude::*;

/// Dismissible warning banner with icon, heading, and detail text.
/// Shown above the form when the create request fails; the entered
/// values stay in the form for retry.
#[component]
pub fn ErrorBanner(heading: String, detail: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { class: "bg-amber-50 border border-amber-300 rounded-lg p-4 mb-8",
            div { class: "flex items-start gap-3",
                AlertTriangleIcon { class: "w-5 h-5 text-amber-600 flex-shrink-0 mt-0.5" }
                div { class: "flex-1",
                    p { class: "text-sm font-medium text-amber-800 mb-1", "{heading}" }
                    p { class: "text-sm text-stone-600 break-words", "{detail}" }
                }
                button {
                    class: "text-stone-400 hover:text-stone-600",
                    aria_label: "Dismiss",
                    onclick: move |_| on_dismiss.call(()),
                    XIcon {}
                }
            }
        }
    }
}
