//! Same-origin glue to the CRUD data service.
//!
//! Errors cross into the UI as display strings; the pages decide what
//! to do with them.

use pawpal_client::{Appointment, BookingApi, CrudClient, Service};

fn client() -> CrudClient {
    // Empty base: relative /api/... URLs against the serving origin.
    CrudClient::new("")
}

/// Fetch the full service catalog.
pub async fn fetch_services() -> Result<Vec<Service>, String> {
    client().list_services().await.map_err(|e| e.to_string())
}

/// Create one appointment record.
pub async fn create_appointment(appointment: Appointment) -> Result<Appointment, String> {
    client()
        .create_appointment(appointment)
        .await
        .map_err(|e| e.to_string())
}
