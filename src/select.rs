//! Raw record selection and validation.
//!
//! Sits between tabular ingestion and the optimizer: records with unusable
//! coordinates are dropped, an optional region filter selects a subset, and
//! the survivors are truncated to the configured maximum. Parsing files
//! into [`LocationRecord`] values is the caller's concern.

use log::warn;
use serde::Deserialize;

use crate::error::TourError;
use crate::models::Location;

/// A loosely-shaped location row as produced by tabular ingestion.
///
/// Only the name and coordinates are required for optimization; everything
/// else is carried through as labels. Coordinate fields are optional here
/// because upstream sources routinely hold blank or unparsable cells —
/// validation happens in [`LocationRecord::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationRecord {
    /// Source identifier, if any.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Latitude, decimal degrees.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude, decimal degrees.
    #[serde(default)]
    pub lon: Option<f64>,
    /// Regional grouping label.
    #[serde(default)]
    pub region: Option<String>,
    /// Network grouping label.
    #[serde(default)]
    pub network: Option<String>,
    /// Street address.
    #[serde(default)]
    pub address: Option<String>,
}

impl LocationRecord {
    /// Validates this record into a [`Location`].
    ///
    /// # Errors
    ///
    /// [`TourError::InvalidCoordinate`] when either coordinate is missing,
    /// non-finite, or outside valid ranges.
    pub fn validate(self) -> Result<Location, TourError> {
        let lat = self.lat.unwrap_or(f64::NAN);
        let lon = self.lon.unwrap_or(f64::NAN);
        let mut location = Location::new(self.id.unwrap_or_default(), self.name, lat, lon)
            .ok_or(TourError::InvalidCoordinate { lat, lon })?;
        if let Some(region) = self.region {
            location = location.with_region(region);
        }
        if let Some(network) = self.network {
            location = location.with_network(network);
        }
        if let Some(address) = self.address {
            location = location.with_address(address);
        }
        Ok(location)
    }
}

/// Filters raw records into validated locations.
///
/// Records failing coordinate validation are dropped with a warning. When
/// `region` is given, only records whose region label matches it
/// (case-insensitive, whitespace-trimmed) are kept. The survivors are
/// truncated to `max_locations`, again with a warning, since the exact
/// solver scales quadratically in the location count.
///
/// # Errors
///
/// [`TourError::NoLocations`] when nothing survives selection.
pub fn select_locations(
    records: Vec<LocationRecord>,
    region: Option<&str>,
    max_locations: usize,
) -> Result<Vec<Location>, TourError> {
    let wanted = region.map(|r| r.trim().to_uppercase());
    let mut locations = Vec::new();
    let mut dropped = 0usize;

    for record in records {
        if let Some(wanted) = &wanted {
            match &record.region {
                Some(label) if label.trim().to_uppercase() == *wanted => {}
                _ => continue,
            }
        }
        match record.validate() {
            Ok(location) => locations.push(location),
            Err(_) => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!("dropped {dropped} records with unusable coordinates");
    }
    if locations.is_empty() {
        return Err(TourError::NoLocations);
    }
    if locations.len() > max_locations {
        warn!(
            "keeping the first {max_locations} of {} selected locations",
            locations.len()
        );
        locations.truncate(max_locations);
    }

    Ok(locations)
}
