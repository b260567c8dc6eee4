//! Interactive booking demo backed by the in-memory client.

use std::rc::Rc;

use crate::demo_data::demo_services;
use dioxus::prelude::*;
use pawpal_client::{Appointment, BookingApi, InMemoryBookingApi};
use pawpal_ui::stores::{BookingEvent, BookingPhase, BookingState};
use pawpal_ui::{BookingFormView, ConfirmationView, LoadingSpinner, ServiceChoice};
use tracing::error;

const MIN_DATE: &str = "2026-08-24";

#[component]
pub fn BookingDemo() -> Element {
    let api = use_hook(|| Rc::new(InMemoryBookingApi::with_services(demo_services().to_vec())));
    let mut state = use_signal(BookingState::new);
    let mut created = use_signal(Vec::<Appointment>::new);
    let mut fail_create = use_signal(|| false);

    {
        let api = api.clone();
        use_future(move || {
            let api = api.clone();
            async move {
                match api.list_services().await {
                    Ok(services) => state.write().apply(BookingEvent::CatalogLoaded(services)),
                    Err(e) => {
                        error!("Error fetching services: {e}");
                        state.write().apply(BookingEvent::CatalogFailed(e.to_string()));
                    }
                }
            }
        });
    }

    let on_submit = {
        let api = api.clone();
        move |_: ()| {
            let appointment = state.write().submit();
            if let Some(appointment) = appointment {
                let api = api.clone();
                spawn(async move {
                    match api.create_appointment(appointment).await {
                        Ok(record) => {
                            created.write().push(record);
                            state.write().apply(BookingEvent::SubmitSucceeded);
                        }
                        Err(e) => {
                            error!("Error creating appointment: {e}");
                            state.write().apply(BookingEvent::SubmitFailed(e.to_string()));
                        }
                    }
                });
            }
        }
    };

    let on_fail_toggle = {
        let api = api.clone();
        move |e: FormEvent| {
            let fail = e.checked();
            fail_create.set(fail);
            api.set_fail_create(fail);
        }
    };

    let reset = move |_| {
        let mut fresh = BookingState::new();
        fresh.apply(BookingEvent::CatalogLoaded(demo_services().to_vec()));
        state.set(fresh);
    };

    let phase = state.read().phase;

    let body = match phase {
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
                    on_return_home: reset,
                    on_browse_services: reset,
                }
            }
        }
        _ => {
            let read = state.read();
            let draft = read.draft.clone();
            let errors = read.errors.clone();
            let service_types = read.service_types();
            let services: Vec<ServiceChoice> =
                read.filtered_services().iter().map(ServiceChoice::from).collect();
            let busy = read.is_busy();
            let submit_error = read.submit_error.clone();
            drop(read);

            rsx! {
                BookingFormView {
                    draft,
                    errors,
                    service_types,
                    services,
                    busy,
                    submit_error,
                    min_date: MIN_DATE.to_string(),
                    on_field_change: move |(field, value)| state.write().set_field(field, value),
                    on_submit,
                    on_dismiss_error: move |_| state.write().dismiss_submit_error(),
                }
            }
        }
    };

    rsx! {
        div { class: "bg-teal-800 px-6 py-3 flex items-center gap-6 text-teal-100 text-sm",
            span { "booking demo / in-memory client" }
            label { class: "flex items-center gap-2",
                input {
                    r#type: "checkbox",
                    checked: fail_create(),
                    onchange: on_fail_toggle,
                }
                "fail next create"
            }
            span { "created: {created.read().len()}" }
        }
        {body}
        if !created.read().is_empty() {
            div { class: "max-w-5xl mx-auto px-6 pb-16",
                h2 { class: "text-lg font-bold text-teal-800 mb-2", "Created appointments" }
                ul { class: "text-sm text-stone-600 space-y-1",
                    for appointment in created.read().iter() {
                        li { class: "font-mono",
                            "{appointment.id}: {appointment.service_name} for {appointment.pet_name} on {appointment.appointment_date} {appointment.appointment_time}"
                        }
                    }
                }
            }
        }
    }
}
