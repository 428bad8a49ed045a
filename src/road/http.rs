//! HTTP directions client.

use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};
use tokio::runtime::Runtime;

use super::{RoadGeometryError, RoadGeometryProvider, MAX_WAYPOINTS};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default routing profile segment of the directions endpoint.
const DEFAULT_PROFILE: &str = "driving-car";

/// Configuration for [`HttpDirectionsProvider`].
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// Base URL of the directions service.
    pub base_url: String,
    /// API key sent in the Authorization header.
    pub api_key: String,
    /// Routing profile segment of the endpoint path.
    pub profile: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl DirectionsConfig {
    /// Creates a configuration for the given service and credentials.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            profile: DEFAULT_PROFILE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Sets the routing profile.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Directions client bridging synchronous callers onto async HTTP.
///
/// Owns a current-thread Tokio runtime that is reused across calls. The
/// tour pipeline is synchronous end to end, so the provider must be called
/// from outside any async runtime.
pub struct HttpDirectionsProvider {
    client: Client,
    config: DirectionsConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpDirectionsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDirectionsProvider")
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpDirectionsProvider {
    /// Creates a provider from the given configuration.
    ///
    /// # Errors
    ///
    /// [`RoadGeometryError::Build`] when the HTTP client or the runtime
    /// fails to construct.
    pub fn new(config: DirectionsConfig) -> Result<Self, RoadGeometryError> {
        let client = Client::builder()
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|err| RoadGeometryError::Build {
                message: err.to_string(),
            })?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|err| RoadGeometryError::Build {
                message: err.to_string(),
            })?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// Endpoint URL: `{base_url}/v2/directions/{profile}/geojson`.
    fn directions_url(&self) -> String {
        format!(
            "{}/v2/directions/{}/geojson",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile
        )
    }

    /// Request body for the coordinate sequence. Directions services expect
    /// `[lon, lat]` pairs.
    fn request_body(coords: &[(f64, f64)]) -> Value {
        let pairs: Vec<[f64; 2]> = coords.iter().map(|&(lat, lon)| [lon, lat]).collect();
        json!({ "coordinates": pairs })
    }

    async fn fetch_async(&self, coords: &[(f64, f64)]) -> Result<Value, RoadGeometryError> {
        let url = self.directions_url();
        let response = self
            .client
            .post(&url)
            .header("Authorization", &self.config.api_key)
            .json(&Self::request_body(coords))
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        response
            .json::<Value>()
            .await
            .map_err(|err| RoadGeometryError::Parse {
                message: err.to_string(),
            })
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> RoadGeometryError {
        if error.is_timeout() {
            return RoadGeometryError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }
        if let Some(status) = error.status() {
            return RoadGeometryError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }
        RoadGeometryError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

impl RoadGeometryProvider for HttpDirectionsProvider {
    fn fetch_geometry(&self, coords: &[(f64, f64)]) -> Result<Value, RoadGeometryError> {
        if coords.len() > MAX_WAYPOINTS {
            return Err(RoadGeometryError::TooManyWaypoints {
                count: coords.len(),
                max: MAX_WAYPOINTS,
            });
        }
        self.runtime.block_on(self.fetch_async(coords))
    }
}
