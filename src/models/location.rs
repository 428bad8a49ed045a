//! Geographic location records.

use serde::Serialize;

/// Mean Earth radius, kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A named geographic location to be visited.
///
/// Coordinates are decimal degrees and are validated once at construction;
/// a `Location` is immutable afterward. Region/network/address labels are
/// carried for downstream reporting and never interpreted by the optimizer.
///
/// # Examples
///
/// ```
/// use geotour::models::Location;
///
/// let loc = Location::new("0001", "Central Depot", -12.046, -77.043)
///     .expect("valid coordinates")
///     .with_region("LIMA");
/// assert_eq!(loc.name(), "Central Depot");
/// assert_eq!(loc.region(), Some("LIMA"));
///
/// assert!(Location::new("bad", "North Pole Offset", 95.0, 0.0).is_none());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Location {
    id: String,
    name: String,
    lat: f64,
    lon: f64,
    region: Option<String>,
    network: Option<String>,
    address: Option<String>,
}

impl Location {
    /// Creates a validated location.
    ///
    /// Returns `None` when either coordinate is non-finite or outside
    /// ±90° latitude / ±180° longitude.
    pub fn new(id: impl Into<String>, name: impl Into<String>, lat: f64, lon: f64) -> Option<Self> {
        if !lat.is_finite() || !lon.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return None;
        }
        Some(Self {
            id: id.into(),
            name: name.into(),
            lat,
            lon,
            region: None,
            network: None,
            address: None,
        })
    }

    /// Sets the region label.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the network label.
    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }

    /// Sets the street address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Caller-supplied identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude, decimal degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude, decimal degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// `(lat, lon)` pair.
    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }

    /// Region label, if any.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Network label, if any.
    pub fn network(&self) -> Option<&str> {
        self.network.as_deref()
    }

    /// Street address, if any.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Great-circle distance to another location, in kilometers.
    ///
    /// Haversine on a spherical Earth; duplicate coordinates yield zero.
    pub fn distance_km(&self, other: &Location) -> f64 {
        let (lat1, lat2) = (self.lat.to_radians(), other.lat.to_radians());
        let dlat = (other.lat - self.lat).to_radians();
        let dlon = (other.lon - self.lon).to_radians();
        let s1 = (dlat / 2.0).sin();
        let s2 = (dlon / 2.0).sin();
        let h = s1 * s1 + lat1.cos() * lat2.cos() * s2 * s2;
        2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
    }
}
