//! Error taxonomy for the tour-optimization pipeline.

use thiserror::Error;

/// Errors produced while planning a tour.
///
/// A solver that hits its time budget with a usable incumbent is *not* an
/// error: the pipeline returns a [`Tour`](crate::models::Tour) tagged
/// [`TourStatus::TimeLimit`](crate::models::TourStatus::TimeLimit) instead,
/// and the caller decides whether to accept it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TourError {
    /// The location list (or selection result) was empty.
    #[error("no locations to route")]
    NoLocations,

    /// A coordinate pair was missing, non-finite, or outside valid ranges.
    #[error("invalid coordinates ({lat}, {lon})")]
    InvalidCoordinate {
        /// Latitude as given, decimal degrees.
        lat: f64,
        /// Longitude as given, decimal degrees.
        lon: f64,
    },

    /// More locations than the configured ceiling for exact solving.
    #[error("{count} locations exceed the configured maximum of {max}")]
    TooManyLocations {
        /// Number of locations supplied.
        count: usize,
        /// Configured ceiling.
        max: usize,
    },

    /// The start index does not address any supplied location.
    #[error("start index {start} out of range for {len} locations")]
    StartOutOfRange {
        /// Requested start index.
        start: usize,
        /// Number of locations supplied.
        len: usize,
    },

    /// The solver proved the model infeasible. A complete graph should never
    /// produce this; it is surfaced rather than swallowed.
    #[error("solver reported the tour model infeasible")]
    Infeasible,

    /// The backend terminated without producing a usable assignment.
    #[error("solver backend failed: {message}")]
    Solver {
        /// Backend diagnostic.
        message: String,
    },

    /// The arc assignment did not decode into a single Hamiltonian cycle.
    #[error("arc assignment did not form a single closed tour: {reason}")]
    InvalidSolution {
        /// What the extraction walk observed.
        reason: String,
    },
}
