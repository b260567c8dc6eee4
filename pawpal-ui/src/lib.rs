//! pawpal-ui - Shared UI types and components for PawPal
//!
//! Contains display types, the booking state machine, client-side
//! validation, and pure view components used by both the web app and the
//! design-preview app.

pub mod catalog;
pub mod components;
pub mod display_types;
pub mod stores;
pub mod validation;

pub use components::*;
pub use display_types::*;
