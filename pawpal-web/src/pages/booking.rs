use chrono::Local;
use dioxus::prelude::*;
use pawpal_ui::stores::{BookingEvent, BookingPhase, BookingState};
use pawpal_ui::{
    ArrowLeftIcon, BookingFormView, ConfirmationView, LoadingSpinner, ServiceChoice,
};
use tracing::error;

use crate::api;
use crate::query::BookingQuery;
use crate::Route;

#[component]
pub fn Booking(query: BookingQuery) -> Element {
    let mut state = use_signal(|| {
        let mut state = BookingState::new();
        state.prefill(query.service.clone(), query.service_type.clone());
        state
    });

    // One catalog fetch on mount. Failure degrades to an empty dropdown;
    // either way the loading phase exits exactly once.
    use_future(move || async move {
        match api::fetch_services().await {
            Ok(services) => state.write().apply(BookingEvent::CatalogLoaded(services)),
            Err(e) => {
                error!("Error fetching services: {e}");
                state.write().apply(BookingEvent::CatalogFailed(e));
            }
        }
    });

    let on_submit = move |_: ()| {
        let appointment = state.write().submit();
        // No record returned means validation failed; no request goes out.
        if let Some(appointment) = appointment {
            spawn(async move {
                match api::create_appointment(appointment).await {
                    Ok(_) => state.write().apply(BookingEvent::SubmitSucceeded),
                    Err(e) => {
                        error!("Error creating appointment: {e}");
                        state.write().apply(BookingEvent::SubmitFailed(e));
                    }
                }
            });
        }
    };

    let phase = state.read().phase;

    match phase {
        BookingPhase::Loading => rsx! {
            LoadingSpinner { message: "Loading booking form..." }
        },
        BookingPhase::Submitted => {
            let Some(appointment) = state.read().appointment.clone() else {
                return rsx! {
                    LoadingSpinner {}
                };
            };
            rsx! {
                ConfirmationView {
                    appointment,
                    on_return_home: move |_| {
                        navigator().push(Route::Home {});
                    },
                    on_browse_services: move |_| {
                        navigator().push(Route::Services {});
                    },
                }
            }
        }
        BookingPhase::Editing | BookingPhase::Submitting => {
            let read = state.read();
            let draft = read.draft.clone();
            let errors = read.errors.clone();
            let service_types = read.service_types();
            let services: Vec<ServiceChoice> =
                read.filtered_services().iter().map(ServiceChoice::from).collect();
            let busy = read.is_busy();
            let submit_error = read.submit_error.clone();
            drop(read);

            let min_date = Local::now().format("%Y-%m-%d").to_string();

            rsx! {
                section { class: "w-full bg-teal-800 py-16 px-6",
                    div { class: "max-w-5xl mx-auto",
                        button {
                            class: "flex items-center gap-2 text-teal-100 hover:text-white mb-8",
                            onclick: move |_| {
                                navigator().push(Route::Home {});
                            },
                            ArrowLeftIcon {}
                            "Back to Home"
                        }
                        div { class: "text-center",
                            h1 { class: "text-5xl font-bold uppercase tracking-wider text-white mb-4",
                                "Book a Service"
                            }
                            p { class: "text-lg text-teal-100 max-w-2xl mx-auto",
                                "Schedule professional care for your beloved pet. Fill out the "
                                "form below and we'll contact you to confirm your appointment."
                            }
                        }
                    }
                }
                BookingFormView {
                    draft,
                    errors,
                    service_types,
                    services,
                    busy,
                    submit_error,
                    min_date,
                    on_field_change: move |(field, value)| state.write().set_field(field, value),
                    on_submit,
                    on_dismiss_error: move |_| state.write().dismiss_submit_error(),
                }
            }
        }
    }
}
