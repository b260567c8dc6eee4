use crate::query::BookingQuery;
use crate::Route;
use dioxus::prelude::*;
use pawpal_ui::{Button, ButtonSize, ButtonVariant};

#[derive(Clone, Copy)]
struct ServiceBlurb {
    service_type: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const BLURBS: [ServiceBlurb; 4] = [
    ServiceBlurb {
        service_type: "Grooming",
        title: "Pet Grooming",
        blurb: "Baths, haircuts, and nail trims that keep your pet comfortable.",
    },
    ServiceBlurb {
        service_type: "Vet",
        title: "Veterinary Care",
        blurb: "Checkups and vaccinations with licensed veterinarians.",
    },
    ServiceBlurb {
        service_type: "Sitting",
        title: "Pet Sitting",
        blurb: "In-home care and company while you're away.",
    },
    ServiceBlurb {
        service_type: "Training",
        title: "Training",
        blurb: "Positive-reinforcement sessions for puppies and adults.",
    },
];

#[component]
pub fn Services() -> Element {
    rsx! {
        section { class: "w-full bg-teal-800 py-16 px-6 text-center",
            h1 { class: "text-5xl font-bold uppercase tracking-wider text-white", "Our Services" }
        }
        section { class: "w-full max-w-5xl mx-auto px-6 py-16 grid md:grid-cols-2 gap-8",
            for blurb in BLURBS {
                div { class: "bg-white rounded-lg border border-stone-200 p-6",
                    h2 { class: "text-xl font-bold text-teal-800 mb-2", "{blurb.title}" }
                    p { class: "text-stone-600 mb-4", "{blurb.blurb}" }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Medium,
                        onclick: move |_| {
                            navigator().push(Route::Booking {
                                query: BookingQuery {
                                    service: None,
                                    service_type: Some(blurb.service_type.to_string()),
                                },
                            });
                        },
                        "Book {blurb.title}"
                    }
                }
            }
        }
    }
}
