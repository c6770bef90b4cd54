//! Provides a client for interacting with the IQAir (AirVisual) v2 API.
//!
//! This module defines the `IqAirClient` struct, which resolves a [`Query`] to one
//! of the `city` / `nearest_city` endpoints, performs a single GET, and turns the
//! provider's reply into either [`StationData`] or an [`AppError`].

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{ApiEnvelope, Query, StationData};
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// An asynchronous client for fetching air quality readings from IQAir.
pub struct IqAirClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl IqAirClient {
    /// Creates a client from the loaded configuration.
    ///
    /// Fails with [`AppError::MissingApiKey`] when no key is configured, so no
    /// request is ever built without one.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a new `IqAirClient` with a custom base URL.
    ///
    /// This is primarily intended for testing purposes (e.g., using a mock server).
    #[cfg(test)]
    pub fn new_with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches the current reading for `query`.
    ///
    /// HTTP failure statuses are translated before the body is looked at; a 2xx body
    /// whose `status` is not `success` becomes [`AppError::Provider`].
    pub async fn fetch(&self, query: &Query) -> Result<StationData> {
        let endpoint = query
            .endpoint()
            .ok_or_else(|| AppError::usage("Help requests do not query the API"))?;

        let url = format!("{}/{}", self.base_url, endpoint.path());
        let mut params = query.params();
        info!("Fetching air quality from {} with {:?}", url, params);
        params.push(("key", self.api_key.clone()));

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                // The request URL carries the API key
                let e = e.without_url();
                warn!("Request to {} failed: {}", url, e);
                AppError::from(e)
            })?;

        let status = response.status();
        if let Some(err) = status_error(status) {
            warn!("IQAir responded with status {}", status);
            return Err(err);
        }

        let body = response.text().await?;
        let envelope: ApiEnvelope = serde_json::from_str(&body).map_err(|e| {
            warn!("Could not parse IQAir response body: {}", e);
            AppError::from(e)
        })?;

        if !envelope.is_success() {
            let message = envelope.error_message();
            warn!(
                "IQAir returned status {:?}: {}",
                envelope.status.as_deref().unwrap_or("<missing>"),
                message
            );
            return Err(AppError::Provider(message));
        }

        let station: StationData = serde_json::from_value(envelope.data)?;
        if let Some(pollution) = station.pollution() {
            debug!(
                "Reading for {}: aqius={:?}, mainus={:?}, ts={:?}",
                station.city_name(),
                pollution.aqius,
                pollution.mainus,
                pollution.ts
            );
        }

        Ok(station)
    }
}

/// Maps a non-success HTTP status to its error. `None` for 2xx.
pub fn status_error(status: StatusCode) -> Option<AppError> {
    if status.is_success() {
        return None;
    }

    Some(match status {
        StatusCode::UNAUTHORIZED => AppError::Unauthorized,
        StatusCode::NOT_FOUND => AppError::NotFound,
        StatusCode::TOO_MANY_REQUESTS => AppError::RateLimited,
        other => AppError::Http {
            status: other.as_u16(),
            reason: other.canonical_reason().unwrap_or("Unknown").to_string(),
        },
    })
}
