//! Drives the booking state machine end to end against the in-memory
//! client, the way the pages drive it against the HTTP client.

use pawpal_client::{BookingApi, InMemoryBookingApi, Service};
use pawpal_ui::stores::{BookingEvent, BookingPhase, BookingState, FormField};

fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn catalog() -> Vec<Service> {
    vec![
        Service {
            id: "svc-1".to_string(),
            service_type: "Grooming".to_string(),
            service_name: "Bath".to_string(),
            price: Some(45.0),
            description: None,
        },
        Service {
            id: "svc-2".to_string(),
            service_type: "Grooming".to_string(),
            service_name: "Haircut".to_string(),
            price: Some(60.0),
            description: None,
        },
        Service {
            id: "svc-3".to_string(),
            service_type: "Vet".to_string(),
            service_name: "Checkup".to_string(),
            price: Some(80.0),
            description: None,
        },
    ]
}

async fn load_catalog(state: &mut BookingState, api: &InMemoryBookingApi) {
    match api.list_services().await {
        Ok(services) => state.apply(BookingEvent::CatalogLoaded(services)),
        Err(e) => state.apply(BookingEvent::CatalogFailed(e.to_string())),
    }
}

/// One validated submit, driven to completion. Mirrors the page driver:
/// no request at all when validation fails.
async fn drive_submit(state: &mut BookingState, api: &InMemoryBookingApi) {
    let Some(appointment) = state.submit() else {
        return;
    };
    match api.create_appointment(appointment).await {
        Ok(_) => state.apply(BookingEvent::SubmitSucceeded),
        Err(e) => state.apply(BookingEvent::SubmitFailed(e.to_string())),
    }
}

fn fill_valid(state: &mut BookingState) {
    state.set_field(FormField::CustomerName, "Dana Lee".to_string());
    state.set_field(FormField::CustomerEmail, "dana@example.com".to_string());
    state.set_field(FormField::CustomerPhone, "555-0101".to_string());
    state.set_field(FormField::PetName, "Biscuit".to_string());
    state.set_field(FormField::ServiceType, "Grooming".to_string());
    state.set_field(FormField::ServiceName, "Bath".to_string());
    state.set_field(FormField::AppointmentDate, "2026-09-01".to_string());
    state.set_field(FormField::AppointmentTime, "09:00".to_string());
}

#[tokio::test]
async fn successful_booking_reaches_confirmation() {
    tracing_init();
    let api = InMemoryBookingApi::with_services(catalog());
    let mut state = BookingState::new();

    load_catalog(&mut state, &api).await;
    assert_eq!(state.phase, BookingPhase::Editing);
    assert_eq!(state.service_types(), vec!["Grooming", "Vet"]);

    fill_valid(&mut state);
    drive_submit(&mut state, &api).await;

    assert_eq!(state.phase, BookingPhase::Submitted);
    assert!(!state.is_busy());
    let created = api.created();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].pet_name, "Biscuit");
    assert_eq!(
        state.appointment.as_ref().map(|a| a.id.clone()),
        Some(created[0].id.clone())
    );
}

#[tokio::test]
async fn invalid_email_issues_no_request() {
    tracing_init();
    let api = InMemoryBookingApi::with_services(catalog());
    let mut state = BookingState::new();
    load_catalog(&mut state, &api).await;

    fill_valid(&mut state);
    state.set_field(FormField::CustomerEmail, "not-an-email".to_string());
    drive_submit(&mut state, &api).await;

    assert_eq!(state.phase, BookingPhase::Editing);
    assert!(state.errors.customer_email.is_some());
    assert!(api.created().is_empty());
}

#[tokio::test]
async fn failed_create_returns_to_editing_and_retry_succeeds() {
    tracing_init();
    let api = InMemoryBookingApi::with_services(catalog());
    let mut state = BookingState::new();
    load_catalog(&mut state, &api).await;

    fill_valid(&mut state);
    state.set_field(FormField::Notes, "first visit".to_string());
    let draft_before = state.draft.clone();

    api.set_fail_create(true);
    drive_submit(&mut state, &api).await;

    assert_eq!(state.phase, BookingPhase::Editing);
    assert!(!state.is_busy());
    assert!(state.submit_error.is_some());
    assert_eq!(state.draft, draft_before);
    assert!(api.created().is_empty());

    // Retry with the preserved values.
    api.set_fail_create(false);
    drive_submit(&mut state, &api).await;
    assert_eq!(state.phase, BookingPhase::Submitted);
    assert_eq!(api.created().len(), 1);
    assert_eq!(api.created()[0].notes, "first visit");
}

#[tokio::test]
async fn catalog_failure_degrades_to_empty_form() {
    tracing_init();
    let mut state = BookingState::new();

    // Simulate a failed fetch: the page dispatches CatalogFailed.
    state.apply(BookingEvent::CatalogFailed("connection refused".to_string()));
    assert_eq!(state.phase, BookingPhase::Editing);
    assert!(state.service_types().is_empty());
    assert!(state.filtered_services().is_empty());

    // Loading exits exactly once; a late load event is ignored.
    state.apply(BookingEvent::CatalogLoaded(catalog()));
    assert!(state.catalog.is_empty());
}

#[tokio::test]
async fn query_prefill_flows_into_the_created_record() {
    tracing_init();
    let api = InMemoryBookingApi::with_services(catalog());
    let mut state = BookingState::new();
    state.prefill(Some("Bath".to_string()), Some("Grooming".to_string()));
    load_catalog(&mut state, &api).await;

    assert_eq!(state.draft.service_name, "Bath");
    assert_eq!(state.draft.service_type, "Grooming");
    let names: Vec<_> = state
        .filtered_services()
        .iter()
        .map(|s| s.service_name.clone())
        .collect();
    assert_eq!(names, vec!["Bath", "Haircut"]);

    state.set_field(FormField::CustomerName, "Dana Lee".to_string());
    state.set_field(FormField::CustomerEmail, "dana@example.com".to_string());
    state.set_field(FormField::CustomerPhone, "555-0101".to_string());
    state.set_field(FormField::PetName, "Biscuit".to_string());
    state.set_field(FormField::AppointmentDate, "2026-09-01".to_string());
    state.set_field(FormField::AppointmentTime, "10:00".to_string());
    drive_submit(&mut state, &api).await;

    assert_eq!(state.phase, BookingPhase::Submitted);
    assert_eq!(api.created()[0].service_name, "Bath");
    assert_eq!(api.created()[0].service_type, "Grooming");
}

#[tokio::test]
async fn booking_twice_creates_two_records() {
    // The generated id is the only key; nothing deduplicates a repeat
    // booking from a fresh form.
    tracing_init();
    let api = InMemoryBookingApi::with_services(catalog());

    for _ in 0..2 {
        let mut state = BookingState::new();
        load_catalog(&mut state, &api).await;
        fill_valid(&mut state);
        drive_submit(&mut state, &api).await;
        assert_eq!(state.phase, BookingPhase::Submitted);
    }

    let created = api.created();
    assert_eq!(created.len(), 2);
    assert_ne!(created[0].id, created[1].id);
}
