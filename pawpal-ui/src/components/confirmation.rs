//! Confirmation view shown after a successful booking.

use dioxus::prelude::*;
use pawpal_client::Appointment;

use crate::components::{Button, ButtonSize, ButtonVariant, HeartIcon};
use crate::validation::time_slot_label;

/// Replaces the form once the appointment record is created.
#[component]
pub fn ConfirmationView(
    appointment: Appointment,
    on_return_home: EventHandler<()>,
    on_browse_services: EventHandler<()>,
) -> Element {
    let time_label = time_slot_label(&appointment.appointment_time);

    rsx! {
        section { class: "w-full max-w-2xl mx-auto px-6 py-20 text-center",
            div { class: "w-20 h-20 bg-teal-700 rounded-full flex items-center justify-center mx-auto mb-8",
                HeartIcon { class: "w-10 h-10 text-white" }
            }
            h1 { class: "text-4xl font-bold uppercase tracking-wider text-teal-800 mb-4",
                "Booking Confirmed!"
            }
            p { class: "text-lg text-stone-600 mb-8",
                "Thank you for choosing PawPal! We've received your appointment request "
                "and will contact you shortly to confirm the details."
            }
            div { class: "bg-white rounded-lg border border-stone-200 p-8 mb-8 text-left",
                h2 { class: "text-xl font-bold text-teal-800 mb-4", "Your Request" }
                p { class: "text-stone-600",
                    "{appointment.service_name} for {appointment.pet_name} on "
                    "{appointment.appointment_date} at {time_label}"
                }
                h2 { class: "text-xl font-bold text-teal-800 mt-6 mb-4", "What's Next?" }
                ul { class: "text-stone-600 space-y-2",
                    li { "• You'll receive a confirmation email within 24 hours" }
                    li { "• Our team will contact you to finalize appointment details" }
                    li { "• Prepare any questions you'd like to ask during your visit" }
                    li { "• We'll send you a reminder before your appointment" }
                }
            }
            div { class: "space-x-4",
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    onclick: move |_| on_return_home.call(()),
                    "Return Home"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Medium,
                    onclick: move |_| on_browse_services.call(()),
                    "Browse More Services"
                }
            }
        }
    }
}
