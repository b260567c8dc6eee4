use crate::query::BookingQuery;
use crate::Route;
use dioxus::prelude::*;
use pawpal_ui::{Button, ButtonSize, ButtonVariant};

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "w-full bg-teal-800 py-24 px-6 text-center",
            h1 { class: "text-5xl md:text-6xl font-bold uppercase tracking-wider text-white mb-6",
                "Care Your Pet Will Love"
            }
            p { class: "text-lg text-teal-100 max-w-2xl mx-auto mb-10",
                "Grooming, veterinary care, sitting, and training from trusted "
                "professionals. Book an appointment in minutes."
            }
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Large,
                class: "bg-amber-400 text-teal-900 hover:bg-amber-300",
                onclick: move |_| {
                    navigator().push(Route::Booking { query: BookingQuery::default() });
                },
                "Book an Appointment"
            }
        }
        section { class: "w-full max-w-5xl mx-auto px-6 py-20 grid md:grid-cols-3 gap-8 text-center",
            div {
                h2 { class: "text-xl font-bold text-teal-800 mb-2", "Trusted Professionals" }
                p { class: "text-stone-600", "Vetted groomers, vets, and sitters near you." }
            }
            div {
                h2 { class: "text-xl font-bold text-teal-800 mb-2", "Easy Scheduling" }
                p { class: "text-stone-600", "Pick a service, a date, and a time that suits you." }
            }
            div {
                h2 { class: "text-xl font-bold text-teal-800 mb-2", "Fast Confirmation" }
                p { class: "text-stone-600", "We confirm every appointment within 24 hours." }
            }
        }
    }
}
