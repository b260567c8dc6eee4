//! Display types for UI components
//!
//! Lightweight versions of the stored records, containing only the fields
//! the views need. They enable props-based components that work with
//! either real or fixture data.

use pawpal_client::Service;

/// A service as offered in the booking dropdown.
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceChoice {
    pub id: String,
    pub service_name: String,
    pub price: Option<f64>,
}

impl ServiceChoice {
    /// Option label, with the price appended when one is known.
    pub fn label(&self) -> String {
        match self.price {
            Some(price) => format!("{} - ${}", self.service_name, price),
            None => self.service_name.clone(),
        }
    }
}

impl From<&Service> for ServiceChoice {
    fn from(service: &Service) -> Self {
        Self {
            id: service.id.clone(),
            service_name: service.service_name.clone(),
            price: service.price,
        }
    }
}

/// Site navigation entry
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}
