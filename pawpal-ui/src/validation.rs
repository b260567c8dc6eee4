//! Client-side validation for the booking form.
//!
//! Purely local: per-field messages rendered next to the inputs, never
//! logged. Submission is blocked while any message is present.

use std::sync::OnceLock;

use pawpal_client::AppointmentDraft;
use regex::Regex;

/// Bookable time slots, as stored on the appointment record.
pub const TIME_SLOTS: [&str; 6] = ["09:00", "10:00", "11:00", "14:00", "15:00", "16:00"];

/// Human label for a time slot ("09:00" -> "9:00 AM").
pub fn time_slot_label(slot: &str) -> &'static str {
    match slot {
        "09:00" => "9:00 AM",
        "10:00" => "10:00 AM",
        "11:00" => "11:00 AM",
        "14:00" => "2:00 PM",
        "15:00" => "3:00 PM",
        "16:00" => "4:00 PM",
        _ => "",
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern compiles")
    })
}

/// Per-field validation messages. `None` means the field is fine; notes
/// is free text and never carries a message.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub pet_name: Option<String>,
    pub service_type: Option<String>,
    pub service_name: Option<String>,
    pub appointment_date: Option<String>,
    pub appointment_time: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.customer_name.is_none()
            && self.customer_email.is_none()
            && self.customer_phone.is_none()
            && self.pet_name.is_none()
            && self.service_type.is_none()
            && self.service_name.is_none()
            && self.appointment_date.is_none()
            && self.appointment_time.is_none()
    }
}

/// Check every field of the draft. Catalog membership of the selected
/// service is deliberately not checked here; the dropdowns restrict the
/// choices and query-parameter pre-fill bypasses them unvalidated.
pub fn validate(draft: &AppointmentDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if draft.customer_name.is_empty() {
        errors.customer_name = Some("Name is required".to_string());
    }
    if draft.customer_email.is_empty() {
        errors.customer_email = Some("Email is required".to_string());
    } else if !email_regex().is_match(&draft.customer_email) {
        errors.customer_email = Some("Invalid email address".to_string());
    }
    if draft.customer_phone.is_empty() {
        errors.customer_phone = Some("Phone number is required".to_string());
    }
    if draft.pet_name.is_empty() {
        errors.pet_name = Some("Pet name is required".to_string());
    }
    if draft.service_type.is_empty() {
        errors.service_type = Some("Service type is required".to_string());
    }
    if draft.service_name.is_empty() {
        errors.service_name = Some("Please select a service".to_string());
    }
    if draft.appointment_date.is_empty() {
        errors.appointment_date = Some("Date is required".to_string());
    }
    if draft.appointment_time.is_empty() {
        errors.appointment_time = Some("Time is required".to_string());
    } else if !TIME_SLOTS.contains(&draft.appointment_time.as_str()) {
        // Unreachable through the dropdown, reachable programmatically.
        errors.appointment_time = Some("Please choose an available time slot".to_string());
    }

    errors
}
