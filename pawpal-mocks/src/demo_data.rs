//! Fixture data for design previews
//!
//! Static services and a filled-in draft for rendering the booking views
//! without a data service.

use std::sync::OnceLock;

use pawpal_client::{AppointmentDraft, Service};

/// Embedded fixture data (compiled into the binary)
const SERVICES_JSON: &str = include_str!("../fixtures/services.json");

/// The preview catalog, in the wire format of the data service.
pub fn demo_services() -> &'static [Service] {
    static SERVICES: OnceLock<Vec<Service>> = OnceLock::new();
    SERVICES.get_or_init(|| serde_json::from_str(SERVICES_JSON).expect("fixture services parse"))
}

/// A completely filled form draft.
pub fn demo_draft() -> AppointmentDraft {
    AppointmentDraft {
        customer_name: "Dana Lee".to_string(),
        customer_email: "dana@example.com".to_string(),
        customer_phone: "555-0101".to_string(),
        pet_name: "Biscuit".to_string(),
        service_type: "Grooming".to_string(),
        service_name: "Bath".to_string(),
        appointment_date: "2026-09-01".to_string(),
        appointment_time: "09:00".to_string(),
        notes: "Biscuit is nervous around clippers.".to_string(),
    }
}
