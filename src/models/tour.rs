//! Optimized tour artifact.

use serde::Serialize;

use super::Location;

/// How the solve call terminated for a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TourStatus {
    /// Proven minimum-distance tour.
    Optimal,
    /// Best tour found inside the time budget; optimality unproven.
    TimeLimit,
}

/// A closed tour over the input locations.
///
/// `order` holds n+1 location indices: every index exactly once in positions
/// 0..n, then the start index again to close the cycle. `leg_km[i]` is the
/// distance from `order[i]` to `order[i+1]`, so there are n legs.
#[derive(Debug, Clone, Serialize)]
pub struct Tour {
    order: Vec<usize>,
    leg_km: Vec<f64>,
    total_km: f64,
    status: TourStatus,
}

impl Tour {
    pub(crate) fn new(order: Vec<usize>, leg_km: Vec<f64>, total_km: f64, status: TourStatus) -> Self {
        Self {
            order,
            leg_km,
            total_km,
            status,
        }
    }

    /// Visiting order, closed at the start index.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// The start (and final) location index.
    pub fn start(&self) -> usize {
        self.order[0]
    }

    /// Number of distinct locations visited.
    pub fn num_stops(&self) -> usize {
        self.order.len() - 1
    }

    /// Distance of each leg, in visiting order.
    pub fn leg_km(&self) -> &[f64] {
        &self.leg_km
    }

    /// Total tour distance in kilometers.
    pub fn total_km(&self) -> f64 {
        self.total_km
    }

    /// How the solver terminated.
    pub fn status(&self) -> TourStatus {
        self.status
    }

    /// `true` when the tour is proven minimal, `false` for a time-limited
    /// best effort.
    pub fn is_optimal(&self) -> bool {
        self.status == TourStatus::Optimal
    }

    /// `(lat, lon)` sequence along the tour, for handing to mapping or
    /// road-routing collaborators.
    pub fn coordinates(&self, locations: &[Location]) -> Vec<(f64, f64)> {
        self.order.iter().map(|&i| locations[i].coords()).collect()
    }
}
