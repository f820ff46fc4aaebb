//! reqwest-backed gateway talking to the car REST backend.

use garage_protocol::{CarFields, CarId, CarRecord, ErrorBody, ListQuery};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

use super::errors::GatewayError;
use super::traits::CarGateway;
use crate::config::ApiConfig;

const CARS_PATH: &str = "/cars/";

#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(api: &ApiConfig) -> Result<Self, GatewayError> {
        let mut builder = Client::builder();
        if let Some(timeout) = api.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|source| GatewayError::Transport { source })?;

        debug!(
            event = "core.gateway.client_built",
            base_url = api.base_url(),
            timeout = ?api.timeout()
        );

        Ok(Self {
            client,
            base_url: api.base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, CARS_PATH)
    }

    fn item_url(&self, id: CarId) -> String {
        format!("{}{}{}", self.base_url, CARS_PATH, id)
    }
}

impl CarGateway for HttpGateway {
    async fn list(&self, query: &ListQuery) -> Result<Vec<CarRecord>, GatewayError> {
        debug!(
            event = "core.gateway.list_started",
            filter = %query.filter,
            skip = ?query.skip,
            limit = ?query.limit
        );

        let response = self
            .client
            .get(self.collection_url())
            .query(&query.query_pairs())
            .send()
            .await
            .map_err(transport_error)?;
        let cars: Vec<CarRecord> = decode(response, None).await?;

        info!(
            event = "core.gateway.list_completed",
            filter = %query.filter,
            count = cars.len()
        );
        Ok(cars)
    }

    async fn get(&self, id: CarId) -> Result<CarRecord, GatewayError> {
        debug!(event = "core.gateway.get_started", id = %id);

        let response = self
            .client
            .get(self.item_url(id))
            .send()
            .await
            .map_err(transport_error)?;
        let car = decode(response, Some(id)).await?;

        info!(event = "core.gateway.get_completed", id = %id);
        Ok(car)
    }

    async fn create(&self, fields: &CarFields) -> Result<CarRecord, GatewayError> {
        debug!(event = "core.gateway.create_started", model = %fields.model);

        let response = self
            .client
            .post(self.collection_url())
            .json(fields)
            .send()
            .await
            .map_err(transport_error)?;
        let car: CarRecord = decode(response, None).await?;

        info!(event = "core.gateway.create_completed", id = %car.id);
        Ok(car)
    }

    async fn update(&self, id: CarId, fields: &CarFields) -> Result<CarRecord, GatewayError> {
        debug!(event = "core.gateway.update_started", id = %id);

        let response = self
            .client
            .put(self.item_url(id))
            .json(fields)
            .send()
            .await
            .map_err(transport_error)?;
        let car = decode(response, Some(id)).await?;

        info!(event = "core.gateway.update_completed", id = %id);
        Ok(car)
    }

    async fn delete(&self, id: CarId) -> Result<(), GatewayError> {
        debug!(event = "core.gateway.delete_started", id = %id);

        let response = self
            .client
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(transport_error)?;
        // Any 2xx counts; the body, when JSON, carries a confirmation message.
        let body = success_body(response, Some(id)).await?;
        let message = serde_json::from_slice::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| value.get("message")?.as_str().map(str::to_string));

        info!(
            event = "core.gateway.delete_completed",
            id = %id,
            message = message.as_deref().unwrap_or_default()
        );
        Ok(())
    }
}

fn transport_error(source: reqwest::Error) -> GatewayError {
    error!(event = "core.gateway.transport_failed", error = %source);
    GatewayError::Transport { source }
}

/// Decode a success body, or map an error response onto [`GatewayError`].
async fn decode<T: DeserializeOwned>(
    response: Response,
    id: Option<CarId>,
) -> Result<T, GatewayError> {
    let body = success_body(response, id).await?;
    serde_json::from_slice(&body).map_err(|e| GatewayError::Decode {
        message: e.to_string(),
    })
}

/// Raw body of a 2xx response. Other statuses become a [`GatewayError`].
///
/// `id` is the record the request addressed; a 404 on such a request is
/// reported as `NotFound`.
async fn success_body(response: Response, id: Option<CarId>) -> Result<Vec<u8>, GatewayError> {
    let status = response.status();
    let body = response.bytes().await.map_err(transport_error)?;

    if status.is_success() {
        return Ok(body.to_vec());
    }

    let detail = serde_json::from_slice::<ErrorBody>(&body)
        .ok()
        .map(|body| body.detail_text());
    let err = classify_error(status, id, detail);

    error!(
        event = "core.gateway.request_failed",
        status = status.as_u16(),
        error = %err
    );
    Err(err)
}

fn classify_error(status: StatusCode, id: Option<CarId>, detail: Option<String>) -> GatewayError {
    match (status, id, detail) {
        (StatusCode::NOT_FOUND, Some(id), detail) => GatewayError::NotFound { id, detail },
        (status, _, Some(detail)) if status.is_client_error() => GatewayError::Validation {
            status: status.as_u16(),
            detail,
        },
        (status, _, detail) => GatewayError::Status {
            status: status.as_u16(),
            detail,
        },
    }
}
