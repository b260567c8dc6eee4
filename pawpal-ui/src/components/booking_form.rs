//! The booking form, as a pure props-based view.

use dioxus::prelude::*;
use pawpal_client::AppointmentDraft;

use crate::components::{
    Button, ButtonSize, ButtonVariant, ErrorBanner, HeartIcon, LabeledField, SelectField, TextInput,
};
use crate::display_types::ServiceChoice;
use crate::stores::FormField;
use crate::validation::{time_slot_label, FieldErrors, TIME_SLOTS};

/// The whole booking form: customer card, service card, notes, submit.
///
/// All state lives in the page's `BookingState`; this view only renders
/// the draft and forwards edits through `on_field_change`.
#[component]
pub fn BookingFormView(
    draft: AppointmentDraft,
    errors: FieldErrors,
    service_types: Vec<String>,
    services: Vec<ServiceChoice>,
    busy: bool,
    submit_error: Option<String>,
    /// `min` hint for the date input, normally today.
    min_date: String,
    on_field_change: EventHandler<(FormField, String)>,
    on_submit: EventHandler<()>,
    on_dismiss_error: EventHandler<()>,
) -> Element {
    let type_options: Vec<(String, String)> = service_types
        .iter()
        .map(|t| (t.clone(), t.clone()))
        .collect();
    let service_options: Vec<(String, String)> = services
        .iter()
        .map(|s| (s.service_name.clone(), s.label()))
        .collect();
    let time_options: Vec<(String, String)> = TIME_SLOTS
        .into_iter()
        .map(|slot| (slot.to_string(), time_slot_label(slot).to_string()))
        .collect();

    // The dependent dropdown stays disabled until a type is chosen.
    let service_select_disabled = draft.service_type.is_empty();

    rsx! {
        section { class: "w-full max-w-5xl mx-auto px-6 py-16",
            if let Some(detail) = submit_error {
                ErrorBanner {
                    heading: "There was an error booking your appointment.",
                    detail: "{detail} Please try again.",
                    on_dismiss: move |_| on_dismiss_error.call(()),
                }
            }

            form {
                class: "space-y-8",
                onsubmit: move |e| {
                    e.prevent_default();
                    on_submit.call(());
                },
                div { class: "grid md:grid-cols-2 gap-8",
                    // Customer information
                    div { class: "bg-white rounded-lg border border-stone-200 p-6",
                        h2 { class: "text-xl font-bold text-teal-800 mb-1", "Your Information" }
                        p { class: "text-sm text-stone-500 mb-4",
                            "Tell us about yourself so we can contact you"
                        }
                        div { class: "space-y-4",
                            LabeledField {
                                label: "Full Name *",
                                html_for: "customerName",
                                error: errors.customer_name.clone(),
                                TextInput {
                                    id: "customerName",
                                    value: draft.customer_name.clone(),
                                    placeholder: "Enter your full name",
                                    on_input: move |v| on_field_change.call((FormField::CustomerName, v)),
                                }
                            }
                            LabeledField {
                                label: "Email Address *",
                                html_for: "customerEmail",
                                error: errors.customer_email.clone(),
                                TextInput {
                                    id: "customerEmail",
                                    r#type: "email",
                                    value: draft.customer_email.clone(),
                                    placeholder: "Enter your email",
                                    on_input: move |v| on_field_change.call((FormField::CustomerEmail, v)),
                                }
                            }
                            LabeledField {
                                label: "Phone Number *",
                                html_for: "customerPhone",
                                error: errors.customer_phone.clone(),
                                TextInput {
                                    id: "customerPhone",
                                    r#type: "tel",
                                    value: draft.customer_phone.clone(),
                                    placeholder: "Enter your phone number",
                                    on_input: move |v| on_field_change.call((FormField::CustomerPhone, v)),
                                }
                            }
                            LabeledField {
                                label: "Pet's Name *",
                                html_for: "petName",
                                error: errors.pet_name.clone(),
                                TextInput {
                                    id: "petName",
                                    value: draft.pet_name.clone(),
                                    placeholder: "Enter your pet's name",
                                    on_input: move |v| on_field_change.call((FormField::PetName, v)),
                                }
                            }
                        }
                    }

                    // Service selection
                    div { class: "bg-white rounded-lg border border-stone-200 p-6",
                        h2 { class: "text-xl font-bold text-teal-800 mb-1 flex items-center gap-2",
                            HeartIcon { class: "w-5 h-5" }
                            "Service Details"
                        }
                        p { class: "text-sm text-stone-500 mb-4",
                            "Choose the service your pet needs"
                        }
                        div { class: "space-y-4",
                            LabeledField {
                                label: "Service Type *",
                                html_for: "serviceType",
                                error: errors.service_type.clone(),
                                SelectField {
                                    id: "serviceType",
                                    value: draft.service_type.clone(),
                                    placeholder: "Select service type",
                                    options: type_options,
                                    onchange: move |v| on_field_change.call((FormField::ServiceType, v)),
                                }
                            }
                            LabeledField {
                                label: "Specific Service *",
                                html_for: "serviceName",
                                error: errors.service_name.clone(),
                                SelectField {
                                    id: "serviceName",
                                    value: draft.service_name.clone(),
                                    placeholder: "Select specific service",
                                    options: service_options,
                                    disabled: service_select_disabled,
                                    onchange: move |v| on_field_change.call((FormField::ServiceName, v)),
                                }
                            }
                            LabeledField {
                                label: "Preferred Date *",
                                html_for: "appointmentDate",
                                error: errors.appointment_date.clone(),
                                TextInput {
                                    id: "appointmentDate",
                                    r#type: "date",
                                    value: draft.appointment_date.clone(),
                                    min: min_date.clone(),
                                    on_input: move |v| on_field_change.call((FormField::AppointmentDate, v)),
                                }
                            }
                            LabeledField {
                                label: "Preferred Time *",
                                html_for: "appointmentTime",
                                error: errors.appointment_time.clone(),
                                SelectField {
                                    id: "appointmentTime",
                                    value: draft.appointment_time.clone(),
                                    placeholder: "Select preferred time",
                                    options: time_options,
                                    onchange: move |v| on_field_change.call((FormField::AppointmentTime, v)),
                                }
                            }
                        }
                    }
                }

                // Additional notes
                div { class: "bg-white rounded-lg border border-stone-200 p-6",
                    h2 { class: "text-xl font-bold text-teal-800 mb-1", "Additional Information" }
                    p { class: "text-sm text-stone-500 mb-4",
                        "Any special requests or information about your pet"
                    }
                    textarea {
                        class: "w-full min-h-24 rounded-lg border border-stone-300 bg-white px-3 py-2 text-stone-800 placeholder-stone-400 focus:outline-none focus:ring-1 focus:ring-teal-600",
                        placeholder: "Tell us anything special about your pet or any specific requests...",
                        value: "{draft.notes}",
                        oninput: move |e| on_field_change.call((FormField::Notes, e.value())),
                    }
                }

                div { class: "text-center",
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Large,
                        r#type: "submit",
                        disabled: busy,
                        onclick: |_| {},
                        if busy { "Booking..." } else { "Book Appointment" }
                    }
                    p { class: "text-sm text-stone-500 mt-4",
                        "We'll contact you within 24 hours to confirm your appointment details."
                    }
                }
            }
        }
    }
}
