//! Road-geometry overlay for optimized tours.
//!
//! Optional collaborator: hands the tour's coordinate sequence to a
//! directions HTTP service and returns the road geometry it responds with,
//! uninterpreted. The straight-line tour stays valid whether or not this
//! succeeds — failures here must never abort route computation, only omit
//! the overlay.

mod http;

pub use http::{DirectionsConfig, HttpDirectionsProvider};

use thiserror::Error;

/// Maximum number of waypoints directions providers accept per request.
pub const MAX_WAYPOINTS: usize = 25;

/// Failures while fetching road geometry.
///
/// Deliberately disjoint from [`TourError`](crate::error::TourError): a
/// failed overlay degrades the presentation, not the tour.
#[derive(Debug, Error)]
pub enum RoadGeometryError {
    /// The tour has more stops than the provider accepts.
    #[error("{count} waypoints exceed the provider maximum of {max}")]
    TooManyWaypoints {
        /// Waypoints in the request.
        count: usize,
        /// Provider ceiling.
        max: usize,
    },

    /// The request exceeded the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Request URL.
        url: String,
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// The provider answered with an HTTP error status.
    #[error("HTTP {status} from {url}: {message}")]
    Http {
        /// Request URL.
        url: String,
        /// Status code.
        status: u16,
        /// Provider diagnostic.
        message: String,
    },

    /// The request never completed.
    #[error("network failure for {url}: {message}")]
    Network {
        /// Request URL.
        url: String,
        /// Transport diagnostic.
        message: String,
    },

    /// The response body was not the expected JSON.
    #[error("could not parse directions response: {message}")]
    Parse {
        /// Decoder diagnostic.
        message: String,
    },

    /// The HTTP client or runtime could not be constructed.
    #[error("failed to build directions client: {message}")]
    Build {
        /// Builder diagnostic.
        message: String,
    },
}

/// Fetches road geometry for an ordered coordinate sequence.
///
/// Coordinates are `(lat, lon)` pairs in visiting order, as produced by
/// [`Tour::coordinates`](crate::models::Tour::coordinates). The returned
/// JSON is whatever the provider sent; callers pass it straight to their
/// rendering layer.
pub trait RoadGeometryProvider {
    /// Returns the provider's geometry for the sequence, uninterpreted.
    fn fetch_geometry(&self, coords: &[(f64, f64)]) -> Result<serde_json::Value, RoadGeometryError>;
}
