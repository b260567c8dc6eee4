//! Booking page state machine.
//!
//! Phases: `Loading` gates the whole form until the catalog fetch
//! settles, then `Editing` -> `Submitting` -> `Submitted`. A failed
//! create drops back to `Editing` with every field value intact. The
//! async drivers live in the pages; this struct only transitions.

use pawpal_client::{Appointment, AppointmentDraft, Service};

use crate::catalog::{distinct_service_types, filter_services_by_type};
use crate::validation::{validate, FieldErrors};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookingPhase {
    #[default]
    Loading,
    Editing,
    Submitting,
    Submitted,
}

/// Completion events dispatched by the async drivers.
#[derive(Clone, Debug, PartialEq)]
pub enum BookingEvent {
    CatalogLoaded(Vec<Service>),
    CatalogFailed(String),
    SubmitSucceeded,
    SubmitFailed(String),
}

/// The nine editable form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    CustomerName,
    CustomerEmail,
    CustomerPhone,
    PetName,
    ServiceType,
    ServiceName,
    AppointmentDate,
    AppointmentTime,
    Notes,
}

/// State for the booking page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingState {
    pub phase: BookingPhase,
    /// Loaded service catalog; stays empty when the fetch fails.
    pub catalog: Vec<Service>,
    /// Current form field values.
    pub draft: AppointmentDraft,
    /// Per-field validation messages from the last rejected submit.
    pub errors: FieldErrors,
    /// Message for the banner after a failed create.
    pub submit_error: Option<String>,
    /// The record sent by the last validated submit, shown on the
    /// confirmation view once the create succeeds.
    pub appointment: Option<Appointment>,
}

impl BookingState {
    /// Starts in `Loading`, everything empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `?service=`/`?type=` query parameters, unvalidated against
    /// the catalog (which typically has not loaded yet).
    pub fn prefill(&mut self, service: Option<String>, service_type: Option<String>) {
        if let Some(name) = service {
            self.draft.service_name = name;
        }
        if let Some(service_type) = service_type {
            self.draft.service_type = service_type;
        }
    }

    /// Dispatch a completion event. Events arriving in the wrong phase
    /// are ignored.
    pub fn apply(&mut self, event: BookingEvent) {
        match event {
            BookingEvent::CatalogLoaded(services) if self.phase == BookingPhase::Loading => {
                self.catalog = services;
                self.phase = BookingPhase::Editing;
            }
            BookingEvent::CatalogFailed(_) if self.phase == BookingPhase::Loading => {
                // Degrade to an empty catalog; the form still renders.
                self.catalog.clear();
                self.phase = BookingPhase::Editing;
            }
            BookingEvent::SubmitSucceeded if self.phase == BookingPhase::Submitting => {
                self.phase = BookingPhase::Submitted;
            }
            BookingEvent::SubmitFailed(message) if self.phase == BookingPhase::Submitting => {
                self.phase = BookingPhase::Editing;
                self.submit_error = Some(message);
                self.appointment = None;
            }
            event => {
                tracing::debug!(?event, phase = ?self.phase, "event ignored in this phase");
            }
        }
    }

    /// Update one field and clear its validation message.
    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::CustomerName => {
                self.draft.customer_name = value;
                self.errors.customer_name = None;
            }
            FormField::CustomerEmail => {
                self.draft.customer_email = value;
                self.errors.customer_email = None;
            }
            FormField::CustomerPhone => {
                self.draft.customer_phone = value;
                self.errors.customer_phone = None;
            }
            FormField::PetName => {
                self.draft.pet_name = value;
                self.errors.pet_name = None;
            }
            FormField::ServiceType => {
                self.draft.service_type = value;
                self.errors.service_type = None;
            }
            FormField::ServiceName => {
                self.draft.service_name = value;
                self.errors.service_name = None;
            }
            FormField::AppointmentDate => {
                self.draft.appointment_date = value;
                self.errors.appointment_date = None;
            }
            FormField::AppointmentTime => {
                self.draft.appointment_time = value;
                self.errors.appointment_time = None;
            }
            FormField::Notes => {
                self.draft.notes = value;
            }
        }
    }

    /// Validated submit. Returns the record to send when the form passes
    /// and moves to `Submitting`; otherwise stores the per-field messages
    /// and stays in `Editing` with no request issued.
    pub fn submit(&mut self) -> Option<Appointment> {
        if self.phase != BookingPhase::Editing {
            return None;
        }
        let errors = validate(&self.draft);
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }
        self.errors = FieldErrors::default();
        self.submit_error = None;
        let appointment = Appointment::new_pending(self.draft.clone());
        self.appointment = Some(appointment.clone());
        self.phase = BookingPhase::Submitting;
        Some(appointment)
    }

    /// True exactly while a create request is in flight.
    pub fn is_busy(&self) -> bool {
        self.phase == BookingPhase::Submitting
    }

    pub fn dismiss_submit_error(&mut self) {
        self.submit_error = None;
    }

    pub fn service_types(&self) -> Vec<String> {
        distinct_service_types(&self.catalog)
    }

    pub fn filtered_services(&self) -> Vec<Service> {
        filter_services_by_type(&self.catalog, &self.draft.service_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawpal_client::AppointmentStatus;

    fn service(id: &str, service_type: &str, name: &str) -> Service {
        Service {
            id: id.to_string(),
            service_type: service_type.to_string(),
            service_name: name.to_string(),
            price: None,
            description: None,
        }
    }

    fn editing_state() -> BookingState {
        let mut state = BookingState::new();
        state.apply(BookingEvent::CatalogLoaded(vec![
            service("1", "Grooming", "Bath"),
            service("2", "Grooming", "Haircut"),
            service("3", "Vet", "Checkup"),
        ]));
        state
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

    #[test]
    fn starts_loading_with_empty_catalog() {
        let state = BookingState::new();
        assert_eq!(state.phase, BookingPhase::Loading);
        assert!(state.catalog.is_empty());
        assert!(!state.is_busy());
    }

    #[test]
    fn catalog_load_enters_editing() {
        let state = editing_state();
        assert_eq!(state.phase, BookingPhase::Editing);
        assert_eq!(state.service_types(), vec!["Grooming", "Vet"]);
    }

    #[test]
    fn catalog_failure_enters_editing_with_empty_catalog() {
        let mut state = BookingState::new();
        state.apply(BookingEvent::CatalogFailed("boom".to_string()));
        assert_eq!(state.phase, BookingPhase::Editing);
        assert!(state.catalog.is_empty());
        assert!(state.service_types().is_empty());
    }

    #[test]
    fn selecting_a_type_filters_the_services() {
        let mut state = editing_state();
        state.set_field(FormField::ServiceType, "Grooming".to_string());
        let names: Vec<_> = state
            .filtered_services()
            .iter()
            .map(|s| s.service_name.clone())
            .collect();
        assert_eq!(names, vec!["Bath", "Haircut"]);
    }

    #[test]
    fn no_selection_passes_the_whole_catalog() {
        let state = editing_state();
        assert_eq!(state.filtered_services().len(), 3);
    }

    #[test]
    fn prefill_sets_both_fields_unvalidated() {
        let mut state = BookingState::new();
        state.prefill(Some("Bath".to_string()), Some("Grooming".to_string()));
        assert_eq!(state.draft.service_name, "Bath");
        assert_eq!(state.draft.service_type, "Grooming");

        // Values absent from any catalog are accepted as-is.
        let mut state = BookingState::new();
        state.prefill(Some("Dragon Wash".to_string()), None);
        assert_eq!(state.draft.service_name, "Dragon Wash");
        assert_eq!(state.draft.service_type, "");
    }

    #[test]
    fn invalid_submit_stays_editing_with_errors() {
        let mut state = editing_state();
        assert!(state.submit().is_none());
        assert_eq!(state.phase, BookingPhase::Editing);
        assert!(!state.errors.is_empty());
        assert!(!state.is_busy());
    }

    #[test]
    fn bad_email_blocks_the_submit() {
        let mut state = editing_state();
        fill_valid(&mut state);
        state.set_field(FormField::CustomerEmail, "not-an-email".to_string());
        assert!(state.submit().is_none());
        assert_eq!(state.phase, BookingPhase::Editing);
        assert!(state.errors.customer_email.is_some());
    }

    #[test]
    fn valid_submit_builds_a_pending_record_and_goes_busy() {
        let mut state = editing_state();
        fill_valid(&mut state);
        let appointment = state.submit().expect("submit passes");
        assert_eq!(state.phase, BookingPhase::Submitting);
        assert!(state.is_busy());
        assert_eq!(appointment.status, AppointmentStatus::Pending);
        assert_eq!(appointment.customer_name, "Dana Lee");
        assert_eq!(appointment.service_name, "Bath");
        assert!(!appointment.id.is_empty());
    }

    #[test]
    fn success_reaches_submitted_and_clears_busy() {
        let mut state = editing_state();
        fill_valid(&mut state);
        state.submit().expect("submit passes");
        state.apply(BookingEvent::SubmitSucceeded);
        assert_eq!(state.phase, BookingPhase::Submitted);
        assert!(!state.is_busy());
        assert!(state.appointment.is_some());
    }

    #[test]
    fn failure_returns_to_editing_with_fields_intact() {
        let mut state = editing_state();
        fill_valid(&mut state);
        state.set_field(FormField::Notes, "first visit".to_string());
        let before = state.draft.clone();
        state.submit().expect("submit passes");
        state.apply(BookingEvent::SubmitFailed("server returned 503".to_string()));
        assert_eq!(state.phase, BookingPhase::Editing);
        assert!(!state.is_busy());
        assert_eq!(state.draft, before);
        assert_eq!(state.submit_error.as_deref(), Some("server returned 503"));
    }

    #[test]
    fn submit_is_ignored_while_busy() {
        let mut state = editing_state();
        fill_valid(&mut state);
        state.submit().expect("first submit passes");
        assert!(state.submit().is_none());
        assert_eq!(state.phase, BookingPhase::Submitting);
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut state = editing_state();
        state.submit();
        assert!(state.errors.customer_name.is_some());
        assert!(state.errors.customer_email.is_some());
        state.set_field(FormField::CustomerName, "Dana".to_string());
        assert!(state.errors.customer_name.is_none());
        assert!(state.errors.customer_email.is_some());
    }

    #[test]
    fn changing_the_type_keeps_the_chosen_service_name() {
        // Same as the source form: the dependent field is not reset, the
        // dropdown just re-filters.
        let mut state = editing_state();
        state.set_field(FormField::ServiceName, "Bath".to_string());
        state.set_field(FormField::ServiceType, "Vet".to_string());
        assert_eq!(state.draft.service_name, "Bath");
    }

    #[test]
    fn dismissing_the_banner_clears_the_message() {
        let mut state = editing_state();
        fill_valid(&mut state);
        state.submit().expect("submit passes");
        state.apply(BookingEvent::SubmitFailed("boom".to_string()));
        state.dismiss_submit_error();
        assert!(state.submit_error.is_none());
    }
}
