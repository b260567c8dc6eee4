//! Client for the PawPal CRUD data service.
//!
//! Collections are plain REST resources under `/api/{collection}`. Listing
//! returns an `{"items": [...]}` envelope; creating posts the record and
//! gets the stored record echoed back.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::entities::{Appointment, Service};

const SERVICES_COLLECTION: &str = "services";
const APPOINTMENTS_COLLECTION: &str = "appointments";

#[derive(Debug, thiserror::Error)]
pub enum CrudError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status} for {collection}: {message}")]
    Server {
        collection: &'static str,
        status: u16,
        message: String,
    },
    #[error("failed to parse {0} response: {1}")]
    Parse(&'static str, serde_json::Error),
}

/// Wire envelope for collection listings.
#[derive(Debug, Deserialize)]
struct ItemsEnvelope<T> {
    items: Vec<T>,
}

/// Operations the booking page needs from the data service.
///
/// `?Send` because the web build drives this from single-threaded wasm
/// tasks; native callers run it on a current-thread runtime.
#[async_trait(?Send)]
pub trait BookingApi {
    /// Fetch every offerable service, in whatever order the store returns.
    async fn list_services(&self) -> Result<Vec<Service>, CrudError>;

    /// Persist a new appointment and echo the stored record back.
    async fn create_appointment(&self, appointment: Appointment)
        -> Result<Appointment, CrudError>;
}

/// HTTP-backed [`BookingApi`].
pub struct CrudClient {
    base_url: String,
    client: reqwest::Client,
}

impl CrudClient {
    /// `base_url` is the service origin, e.g. `https://pawpal.example.com`.
    /// An empty base yields same-origin relative URLs.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/api/{}", self.base_url, collection)
    }

    async fn get_items<T: DeserializeOwned>(
        &self,
        collection: &'static str,
    ) -> Result<Vec<T>, CrudError> {
        let url = self.collection_url(collection);
        tracing::debug!(collection, %url, "listing collection");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CrudError::Server {
                collection,
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        let body = response.text().await?;
        let envelope: ItemsEnvelope<T> =
            serde_json::from_str(&body).map_err(|e| CrudError::Parse(collection, e))?;
        Ok(envelope.items)
    }

    async fn post_item<T: Serialize + DeserializeOwned>(
        &self,
        collection: &'static str,
        item: &T,
    ) -> Result<T, CrudError> {
        let url = self.collection_url(collection);
        tracing::debug!(collection, %url, "creating record");
        let response = self.client.post(url).json(item).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CrudError::Server {
                collection,
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| CrudError::Parse(collection, e))
    }
}

#[async_trait(?Send)]
impl BookingApi for CrudClient {
    async fn list_services(&self) -> Result<Vec<Service>, CrudError> {
        self.get_items(SERVICES_COLLECTION).await
    }

    async fn create_appointment(
        &self,
        appointment: Appointment,
    ) -> Result<Appointment, CrudError> {
        self.post_item(APPOINTMENTS_COLLECTION, &appointment).await
    }
}
