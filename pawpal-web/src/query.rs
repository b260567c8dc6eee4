//! Typed query parameters for the booking route.

use std::fmt;

/// The optional `service` and `type` parameters on `/booking`, read once
/// at load to pre-fill the matching form fields. Modeled as an explicit
/// input handed to the page by the router rather than an ambient
/// location read, so the workflow is testable without a navigation
/// context. Values are not checked against the catalog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingQuery {
    pub service: Option<String>,
    pub service_type: Option<String>,
}

fn decode(value: &str) -> String {
    urlencoding::decode(value)
        .map(|v| v.into_owned())
        .unwrap_or_else(|_| value.to_string())
}

impl From<&str> for BookingQuery {
    fn from(query: &str) -> Self {
        let mut parsed = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or_default();
            let value = parts.next().unwrap_or_default();
            match key {
                "service" => parsed.service = Some(decode(value)),
                "type" => parsed.service_type = Some(decode(value)),
                // Unknown parameters are ignored.
                _ => {}
            }
        }
        parsed
    }
}

impl fmt::Display for BookingQuery {
    /// Renders the query-string body only; the router prepends the `?`
    /// itself, so a default query serializes `/booking` links with a
    /// bare trailing `?`. Harmless, and `From<&str>` parses it back to
    /// the default.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs = Vec::new();
        if let Some(service) = &self.service {
            pairs.push(format!("service={}", urlencoding::encode(service)));
        }
        if let Some(service_type) = &self.service_type {
            pairs.push(format!("type={}", urlencoding::encode(service_type)));
        }
        write!(f, "{}", pairs.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_parameters() {
        let query = BookingQuery::from("service=Bath&type=Grooming");
        assert_eq!(query.service.as_deref(), Some("Bath"));
        assert_eq!(query.service_type.as_deref(), Some("Grooming"));
    }

    #[test]
    fn parameters_are_optional() {
        let query = BookingQuery::from("");
        assert_eq!(query, BookingQuery::default());

        let query = BookingQuery::from("type=Vet");
        assert_eq!(query.service, None);
        assert_eq!(query.service_type.as_deref(), Some("Vet"));
    }

    #[test]
    fn percent_encoded_values_are_decoded() {
        let query = BookingQuery::from("service=Full%20Groom&type=Pet%20Sitting");
        assert_eq!(query.service.as_deref(), Some("Full Groom"));
        assert_eq!(query.service_type.as_deref(), Some("Pet Sitting"));
    }

    #[test]
    fn unknown_parameters_are_ignored() {
        let query = BookingQuery::from("service=Bath&utm_source=mailer");
        assert_eq!(query.service.as_deref(), Some("Bath"));
        assert_eq!(query.service_type, None);
    }

    #[test]
    fn leading_question_mark_is_tolerated() {
        let query = BookingQuery::from("?service=Bath");
        assert_eq!(query.service.as_deref(), Some("Bath"));

        // A default-query link serializes as `/booking?`; the bare `?`
        // parses back to the default.
        assert_eq!(BookingQuery::from("?"), BookingQuery::default());
    }

    #[test]
    fn display_round_trips() {
        let query = BookingQuery {
            service: Some("Full Groom".to_string()),
            service_type: Some("Grooming".to_string()),
        };
        let rendered = query.to_string();
        assert_eq!(rendered, "service=Full%20Groom&type=Grooming");
        assert_eq!(BookingQuery::from(rendered.as_str()), query);

        assert_eq!(BookingQuery::default().to_string(), "");
    }
}
