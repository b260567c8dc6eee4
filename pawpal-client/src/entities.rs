//! Records stored in the PawPal CRUD collections.
//!
//! Field names follow the wire format of the data service: camelCase keys
//! and an `_id` primary key on every record.

use serde::{Deserialize, Serialize};

/// A bookable service from the `services` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "serviceType", default)]
    pub service_type: String,
    #[serde(rename = "serviceName", default)]
    pub service_name: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Lifecycle of an appointment record. New bookings always start out
/// `Pending`; the later states are set by staff through the back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

/// An appointment record in the `appointments` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(rename = "_id")]
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub pet_name: String,
    pub service_type: String,
    pub service_name: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub notes: String,
    pub status: AppointmentStatus,
}

/// Form input for a new appointment, before an id or status exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentDraft {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub pet_name: String,
    pub service_type: String,
    pub service_name: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub notes: String,
}

impl Appointment {
    /// Build a record from form input: fresh client-side id, `Pending` status.
    pub fn new_pending(draft: AppointmentDraft) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            customer_name: draft.customer_name,
            customer_email: draft.customer_email,
            customer_phone: draft.customer_phone,
            pet_name: draft.pet_name,
            service_type: draft.service_type,
            service_name: draft.service_name,
            appointment_date: draft.appointment_date,
            appointment_time: draft.appointment_time,
            notes: draft.notes,
            status: AppointmentStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> AppointmentDraft {
        AppointmentDraft {
            customer_name: "Dana Lee".to_string(),
            customer_email: "dana@example.com".to_string(),
            customer_phone: "555-0101".to_string(),
            pet_name: "Biscuit".to_string(),
            service_type: "Grooming".to_string(),
            service_name: "Bath".to_string(),
            appointment_date: "2026-09-01".to_string(),
            appointment_time: "09:00".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn new_pending_copies_fields_and_sets_status() {
        let appointment = Appointment::new_pending(sample_draft());
        assert_eq!(appointment.customer_name, "Dana Lee");
        assert_eq!(appointment.service_name, "Bath");
        assert_eq!(appointment.appointment_time, "09:00");
        assert_eq!(appointment.status, AppointmentStatus::Pending);
        assert!(!appointment.id.is_empty());
    }

    #[test]
    fn new_pending_generates_distinct_ids() {
        let first = Appointment::new_pending(sample_draft());
        let second = Appointment::new_pending(sample_draft());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn appointment_serializes_with_wire_keys() {
        let appointment = Appointment::new_pending(sample_draft());
        let json = serde_json::to_value(&appointment).unwrap();
        assert!(json.get("_id").is_some());
        assert_eq!(json["customerName"], "Dana Lee");
        assert_eq!(json["petName"], "Biscuit");
        assert_eq!(json["appointmentDate"], "2026-09-01");
        assert_eq!(json["status"], "pending");
    }

    #[test]
    fn service_deserializes_with_missing_optionals() {
        let service: Service = serde_json::from_str(
            r#"{"_id": "svc-1", "serviceType": "Grooming", "serviceName": "Bath"}"#,
        )
        .unwrap();
        assert_eq!(service.id, "svc-1");
        assert_eq!(service.service_type, "Grooming");
        assert_eq!(service.price, None);
        assert_eq!(service.description, None);
    }

    #[test]
    fn service_tolerates_absent_type() {
        let service: Service =
            serde_json::from_str(r#"{"_id": "svc-2", "serviceName": "Nail Trim"}"#).unwrap();
        assert_eq!(service.service_type, "");
    }
}
