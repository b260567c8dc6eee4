//! In-memory [`BookingApi`] for tests and design previews.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::crud::{BookingApi, CrudError};
use crate::entities::{Appointment, Service};

/// Keeps created appointments in memory and serves a fixed catalog.
#[derive(Default)]
pub struct InMemoryBookingApi {
    services: Vec<Service>,
    appointments: RwLock<Vec<Appointment>>,
    fail_create: AtomicBool,
}

impl InMemoryBookingApi {
    pub fn with_services(services: Vec<Service>) -> Self {
        Self {
            services,
            ..Self::default()
        }
    }

    /// When set, `create_appointment` answers 503 until cleared.
    pub fn set_fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::Relaxed);
    }

    /// Snapshot of everything created so far.
    pub fn created(&self) -> Vec<Appointment> {
        self.appointments
            .read()
            .expect("appointment store lock poisoned")
            .clone()
    }
}

#[async_trait(?Send)]
impl BookingApi for InMemoryBookingApi {
    async fn list_services(&self) -> Result<Vec<Service>, CrudError> {
        Ok(self.services.clone())
    }

    async fn create_appointment(
        &self,
        appointment: Appointment,
    ) -> Result<Appointment, CrudError> {
        if self.fail_create.load(Ordering::Relaxed) {
            return Err(CrudError::Server {
                collection: "appointments",
                status: 503,
                message: "service unavailable".to_string(),
            });
        }
        self.appointments
            .write()
            .expect("appointment store lock poisoned")
            .push(appointment.clone());
        Ok(appointment)
    }
}
