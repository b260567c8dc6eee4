//! Store types for UI state management
//!
//! Plain state structs held in signals by the pages, so the same logic
//! drives pawpal-web (real app) and pawpal-mocks (design tool).

pub mod booking;

pub use booking::*;
