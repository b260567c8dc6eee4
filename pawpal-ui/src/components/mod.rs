//! Shared UI components

pub mod booking_form;
pub mod button;
pub mod confirmation;
pub mod error_banner;
pub mod icons;
pub mod labeled_field;
pub mod loading_spinner;
pub mod select_field;
pub mod site_layout;
pub mod text_input;

pub use booking_form::BookingFormView;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use confirmation::ConfirmationView;
pub use error_banner::ErrorBanner;
pub use icons::{AlertTriangleIcon, ArrowLeftIcon, HeartIcon, PawIcon, XIcon};
pub use labeled_field::LabeledField;
pub use loading_spinner::LoadingSpinner;
pub use select_field::SelectField;
pub use site_layout::{SiteFooterView, SiteNavView};
pub use text_input::TextInput;
