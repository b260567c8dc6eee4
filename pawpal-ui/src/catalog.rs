//! Derivations over the loaded service catalog.
//!
//! Pure functions recomputed whenever the catalog or the selected type
//! changes; the dependent dropdowns are populated from their results.

use pawpal_client::Service;

/// Distinct non-empty service types, first-seen order preserved.
pub fn distinct_service_types(catalog: &[Service]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for service in catalog {
        if service.service_type.is_empty() {
            continue;
        }
        if !types.contains(&service.service_type) {
            types.push(service.service_type.clone());
        }
    }
    types
}

/// Services matching the selected type. An empty selection passes the
/// whole catalog through unfiltered.
pub fn filter_services_by_type(catalog: &[Service], selected_type: &str) -> Vec<Service> {
    catalog
        .iter()
        .filter(|service| selected_type.is_empty() || service.service_type == selected_type)
        .cloned()
        .collect()
}
