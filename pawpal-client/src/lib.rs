//! pawpal-client - Data-service client for PawPal
//!
//! Entities stored in the CRUD collections, the [`crud::BookingApi`]
//! contract the booking page talks to, an HTTP implementation, and an
//! in-memory implementation for tests and design previews.

pub mod crud;
pub mod entities;
pub mod mock;

pub use crud::{BookingApi, CrudClient, CrudError};
pub use entities::{Appointment, AppointmentDraft, AppointmentStatus, Service};
pub use mock::InMemoryBookingApi;
