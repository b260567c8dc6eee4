use crate::Route;
use dioxus::prelude::*;

#[component]
fn PreviewLink(to: Route, title: &'static str, description: &'static str) -> Element {
    rsx! {
        Link {
            to,
            class: "block bg-white rounded-lg border border-stone-200 p-4 hover:border-teal-600 transition-colors",
            p { class: "font-semibold text-teal-800", "{title}" }
            p { class: "text-sm text-stone-500", "{description}" }
        }
    }
}

#[component]
pub fn MockIndex() -> Element {
    rsx! {
        div { class: "max-w-2xl mx-auto p-8",
            h1 { class: "text-2xl font-bold text-teal-800 mb-6", "PawPal mocks" }

            h2 { class: "text-lg font-semibold text-stone-500 mb-3", "Booking form states" }
            div { class: "space-y-2 mb-8",
                PreviewLink {
                    to: Route::BookingStates { state: None },
                    title: "Editing (default)",
                    description: "Catalog loaded, empty form",
                }
                PreviewLink {
                    to: Route::BookingStates { state: Some("loading".to_string()) },
                    title: "Loading",
                    description: "Catalog fetch still in flight",
                }
                PreviewLink {
                    to: Route::BookingStates { state: Some("empty".to_string()) },
                    title: "Empty catalog",
                    description: "Catalog fetch failed, dropdowns empty",
                }
                PreviewLink {
                    to: Route::BookingStates { state: Some("errors".to_string()) },
                    title: "Validation errors",
                    description: "Submit rejected, per-field messages",
                }
                PreviewLink {
                    to: Route::BookingStates { state: Some("submitting".to_string()) },
                    title: "Submitting",
                    description: "Busy flag set, button disabled",
                }
                PreviewLink {
                    to: Route::BookingStates { state: Some("failed".to_string()) },
                    title: "Submit failed",
                    description: "Error banner, fields preserved",
                }
                PreviewLink {
                    to: Route::BookingStates { state: Some("submitted".to_string()) },
                    title: "Confirmed",
                    description: "Confirmation view",
                }
            }

            h2 { class: "text-lg font-semibold text-stone-500 mb-3", "Interactive" }
            div { class: "space-y-2",
                PreviewLink {
                    to: Route::BookingDemo {},
                    title: "Booking demo",
                    description: "Full workflow against the in-memory client",
                }
            }
        }
    }
}
