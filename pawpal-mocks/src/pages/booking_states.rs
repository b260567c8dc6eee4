//! Booking form previews with states forced through the URL.

use crate::demo_data::{demo_draft, demo_services};
use dioxus::prelude::*;
use pawpal_ui::stores::{BookingEvent, BookingPhase, BookingState};
use pawpal_ui::{BookingFormView, ConfirmationView, LoadingSpinner, ServiceChoice};

/// Fixed so screenshots do not churn with the calendar.
const MIN_DATE: &str = "2026-08-24";

fn loaded() -> BookingState {
    let mut state = BookingState::new();
    state.apply(BookingEvent::CatalogLoaded(demo_services().to_vec()));
    state
}

fn filled_and_submitting() -> BookingState {
    let mut state = loaded();
    state.draft = demo_draft();
    state.submit();
    state
}

/// Walk the real state machine into the requested state; no view-only
/// flags that could drift from the app's behavior.
fn forced_state(name: &str) -> BookingState {
    match name {
        "loading" => BookingState::new(),
        "empty" => {
            let mut state = BookingState::new();
            state.apply(BookingEvent::CatalogFailed("connection refused".to_string()));
            state
        }
        "errors" => {
            let mut state = loaded();
            state.submit();
            state
        }
        "submitting" => filled_and_submitting(),
        "failed" => {
            let mut state = filled_and_submitting();
            state.apply(BookingEvent::SubmitFailed(
                "server returned 503 for appointments: service unavailable".to_string(),
            ));
            state
        }
        "submitted" => {
            let mut state = filled_and_submitting();
            state.apply(BookingEvent::SubmitSucceeded);
            state
        }
        _ => loaded(),
    }
}

#[component]
pub fn BookingStates(state: Option<String>) -> Element {
    // Rebuilt from the URL on every render so the links switch states.
    let booking = forced_state(state.as_deref().unwrap_or_default());

    let body = match booking.phase {
        BookingPhase::Loading => rsx! {
            LoadingSpinner { message: "Loading booking form..." }
        },
        BookingPhase::Submitted => {
            let appointment = booking.appointment.clone();
            match appointment {
                Some(appointment) => rsx! {
                    ConfirmationView {
                        appointment,
                        on_return_home: |_| {},
                        on_browse_services: |_| {},
                    }
                },
                None => rsx! {
                    LoadingSpinner {}
                },
            }
        }
        _ => {
            let services: Vec<ServiceChoice> = booking
                .filtered_services()
                .iter()
                .map(ServiceChoice::from)
                .collect();
            rsx! {
                BookingFormView {
                    draft: booking.draft.clone(),
                    errors: booking.errors.clone(),
                    service_types: booking.service_types(),
                    services,
                    busy: booking.is_busy(),
                    submit_error: booking.submit_error.clone(),
                    min_date: MIN_DATE.to_string(),
                    on_field_change: |_| {},
                    on_submit: |_| {},
                    on_dismiss_error: |_| {},
                }
            }
        }
    };

    let state_name = state.as_deref().unwrap_or("editing").to_string();

    rsx! {
        div { class: "bg-teal-800 px-6 py-3 text-teal-100 text-sm",
            "booking form preview / state: {state_name}"
        }
        {body}
    }
}
