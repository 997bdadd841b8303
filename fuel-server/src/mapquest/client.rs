//! MapQuest HTTP client.
//!
//! Provides async methods for the Directions and Geocoding APIs. A single
//! directions call both geocodes the endpoints and returns the full route
//! shape, so one trip request costs exactly one provider call.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::info;

use crate::domain::{LocationQuery, Route};

use super::convert::convert_directions;
use super::error::MapquestError;
use super::types::{DirectionsResponse, GeocodeResponse};

/// Default base URL for the Directions API.
const DEFAULT_BASE_URL: &str = "https://www.mapquestapi.com/directions/v2/route";

/// Default base URL for the Geocoding API.
const DEFAULT_GEOCODE_URL: &str = "https://www.mapquestapi.com/geocoding/v1/address";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the MapQuest client.
#[derive(Debug, Clone)]
pub struct MapquestConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the Directions API (override for testing)
    pub base_url: String,
    /// Base URL for the Geocoding API (override for testing)
    pub geocode_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MapquestConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            geocode_url: DEFAULT_GEOCODE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 15,
        }
    }

    /// Set a custom Directions base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom Geocoding base URL (for testing).
    pub fn with_geocode_url(mut self, url: impl Into<String>) -> Self {
        self.geocode_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// A geocoded coordinate with the provider's match quality.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPoint {
    pub lat: f64,
    pub lon: f64,
    /// e.g. "POINT", "ADDRESS", "CITY"
    pub quality: Option<String>,
}

/// MapQuest API client.
///
/// Uses a semaphore to limit concurrent requests and avoid tripping the
/// provider's rate limits.
#[derive(Debug, Clone)]
pub struct MapquestClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    geocode_url: String,
    semaphore: Arc<Semaphore>,
}

impl MapquestClient {
    /// Create a new MapQuest client with the given configuration.
    ///
    /// Fails with [`MapquestError::MissingApiKey`] if the key is empty, so
    /// misconfiguration surfaces at startup rather than on the first request.
    pub fn new(config: MapquestConfig) -> Result<Self, MapquestError> {
        if config.api_key.is_empty() {
            return Err(MapquestError::MissingApiKey);
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url,
            geocode_url: config.geocode_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Geocode both endpoints and fetch the route between them, in one call.
    ///
    /// Requests the full shape in raw (unencoded) form with distances in
    /// miles, then converts to a domain [`Route`].
    pub async fn route(
        &self,
        from: &LocationQuery,
        to: &LocationQuery,
    ) -> Result<Route, MapquestError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| MapquestError::ApiError {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        info!(from = %from, to = %to, "requesting route from MapQuest");

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("from", from.as_str()),
                ("to", to.as_str()),
                ("unit", "m"),
                ("routeType", "fastest"),
                ("fullShape", "true"),
                ("shapeFormat", "raw"),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(MapquestError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MapquestError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MapquestError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let directions: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| MapquestError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        if directions.info.statuscode != 0 {
            return Err(MapquestError::RouteFailed {
                statuscode: directions.info.statuscode,
                messages: directions.info.messages,
            });
        }

        convert_directions(&directions).map_err(|e| MapquestError::Json {
            message: e.to_string(),
            body: None,
        })
    }

    /// Geocode a single free-text location.
    ///
    /// Returns `None` when the provider has no usable match; transport and
    /// auth failures are still errors.
    pub async fn geocode(&self, location: &str) -> Result<Option<GeocodedPoint>, MapquestError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| MapquestError::ApiError {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let response = self
            .http
            .get(&self.geocode_url)
            .query(&[("key", self.api_key.as_str()), ("location", location)])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(MapquestError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MapquestError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MapquestError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let geocoded: GeocodeResponse =
            serde_json::from_str(&body).map_err(|e| MapquestError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        let point = geocoded
            .results
            .first()
            .and_then(|r| r.locations.first())
            .map(|loc| GeocodedPoint {
                lat: loc.lat_lng.lat,
                lon: loc.lat_lng.lng,
                quality: loc.geocode_quality.clone(),
            });

        Ok(point)
    }
}
