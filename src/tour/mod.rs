//! Closed-tour optimization pipeline.
//!
//! Wires the stages together: validate input, build the geodesic distance
//! matrix, assemble the subtour-eliminating formulation, invoke the MILP
//! backend under the configured time budget, and decode the assignment into
//! a [`Tour`]. Every stage is pure and sequential; the solve call is the
//! only step allowed to block, and only up to the budget.

mod extract;
mod model;

pub use extract::extract_order;
pub use model::TourModel;

use log::{debug, warn};

use crate::config::TourConfig;
use crate::distance::DistanceMatrix;
use crate::error::TourError;
use crate::milp::{MilpSolver, SolverConfig, SolverStatus};
use crate::models::{Location, Tour, TourStatus};

/// Computes the minimum-distance closed tour over `locations`, starting and
/// ending at `start`.
///
/// Builds the pairwise geodesic matrix and delegates to
/// [`plan_tour_with_matrix`].
///
/// # Errors
///
/// [`TourError::NoLocations`] for an empty list,
/// [`TourError::TooManyLocations`] beyond the configured ceiling,
/// [`TourError::StartOutOfRange`] for a bad start index, and the solve-side
/// errors of [`plan_tour_with_matrix`].
///
/// # Examples
///
/// ```no_run
/// use geotour::config::TourConfig;
/// use geotour::milp::HighsSolver;
/// use geotour::models::Location;
/// use geotour::tour::plan_tour;
///
/// let locations = vec![
///     Location::new("0", "Depot", -12.046, -77.043).expect("valid"),
///     Location::new("1", "North site", -11.986, -77.061).expect("valid"),
///     Location::new("2", "East site", -12.052, -76.972).expect("valid"),
/// ];
/// let tour = plan_tour(&locations, 0, &TourConfig::default(), &HighsSolver::new())?;
/// assert_eq!(tour.order().first(), tour.order().last());
/// # Ok::<(), geotour::error::TourError>(())
/// ```
pub fn plan_tour(
    locations: &[Location],
    start: usize,
    config: &TourConfig,
    solver: &dyn MilpSolver,
) -> Result<Tour, TourError> {
    if locations.is_empty() {
        return Err(TourError::NoLocations);
    }
    if locations.len() > config.max_locations() {
        return Err(TourError::TooManyLocations {
            count: locations.len(),
            max: config.max_locations(),
        });
    }
    let distances = DistanceMatrix::from_locations(locations);
    plan_tour_with_matrix(&distances, start, config, solver)
}

/// Computes the minimum-cost closed tour over an explicit distance matrix.
///
/// The matrix must be square with a zero diagonal; symmetry is expected for
/// geographic use but not required by the formulation. A single-location
/// matrix yields the trivial tour without invoking the solver.
///
/// A solver that exhausts its budget with a usable incumbent still returns
/// a tour, tagged [`TourStatus::TimeLimit`] and logged as a warning — never
/// presented as optimal.
///
/// # Errors
///
/// [`TourError::Infeasible`] when the backend proves infeasibility,
/// [`TourError::Solver`] when it fails outright, and
/// [`TourError::InvalidSolution`] when the assignment does not decode into
/// a single Hamiltonian cycle.
pub fn plan_tour_with_matrix(
    distances: &DistanceMatrix,
    start: usize,
    config: &TourConfig,
    solver: &dyn MilpSolver,
) -> Result<Tour, TourError> {
    let n = distances.size();
    if n == 0 {
        return Err(TourError::NoLocations);
    }
    if n > config.max_locations() {
        return Err(TourError::TooManyLocations {
            count: n,
            max: config.max_locations(),
        });
    }
    if start >= n {
        return Err(TourError::StartOutOfRange { start, len: n });
    }
    if n == 1 {
        return Ok(Tour::new(vec![start, start], vec![0.0], 0.0, TourStatus::Optimal));
    }

    let tour_model = TourModel::build(distances, start);
    debug!(
        "tour model built: {} nodes, {} variables, {} constraints",
        n,
        tour_model.model().num_variables(),
        tour_model.model().num_constraints()
    );

    let solver_config = SolverConfig {
        time_limit: config.time_limit(),
        verbose: false,
    };
    let solution = solver.solve(tour_model.model(), &solver_config);

    let status = match solution.status() {
        SolverStatus::Optimal => TourStatus::Optimal,
        SolverStatus::TimeLimitFeasible => {
            warn!(
                "time budget of {:.0?} exhausted before optimality was proven; returning best incumbent",
                config.time_limit()
            );
            TourStatus::TimeLimit
        }
        SolverStatus::Infeasible => return Err(TourError::Infeasible),
        SolverStatus::Error => {
            return Err(TourError::Solver {
                message: "backend returned no usable assignment".to_string(),
            })
        }
    };

    let order = extract_order(&tour_model, &solution)?;
    let leg_km: Vec<f64> = order.windows(2).map(|w| distances.get(w[0], w[1])).collect();
    let total_km = leg_km.iter().sum();
    debug!("tour solved: {n} stops, {total_km:.2} km, {status:?}");

    Ok(Tour::new(order, leg_km, total_km, status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::milp::{MilpModel, MilpSolution};

    /// Canned backend: selects the 0→1→2→0 cycle over a 3-node model and
    /// reports the given status.
    struct CannedSolver {
        status: SolverStatus,
    }

    impl MilpSolver for CannedSolver {
        fn solve(&self, model: &MilpModel, _config: &SolverConfig) -> MilpSolution {
            match self.status {
                SolverStatus::Optimal | SolverStatus::TimeLimitFeasible => {
                    // Arc variables precede the potentials, row-major with
                    // the diagonal skipped: (0,1) (0,2) (1,0) (1,2) (2,0) (2,1).
                    let mut columns = vec![0.0; model.num_variables()];
                    columns[0] = 1.0; // 0→1
                    columns[3] = 1.0; // 1→2
                    columns[4] = 1.0; // 2→0
                    MilpSolution::new(self.status, columns, None)
                }
                _ => MilpSolution::empty(self.status),
            }
        }
    }

    fn triangle() -> DistanceMatrix {
        DistanceMatrix::from_data(3, vec![0.0, 3.0, 4.0, 3.0, 0.0, 5.0, 4.0, 5.0, 0.0])
            .expect("square data")
    }

    #[test]
    fn test_empty_input_rejected() {
        let solver = CannedSolver {
            status: SolverStatus::Optimal,
        };
        let err = plan_tour(&[], 0, &TourConfig::default(), &solver).expect_err("empty");
        assert_eq!(err, TourError::NoLocations);
    }

    #[test]
    fn test_max_locations_enforced() {
        let config = TourConfig::default().with_max_locations(2);
        let solver = CannedSolver {
            status: SolverStatus::Optimal,
        };
        let err =
            plan_tour_with_matrix(&triangle(), 0, &config, &solver).expect_err("over the cap");
        assert_eq!(err, TourError::TooManyLocations { count: 3, max: 2 });
    }

    #[test]
    fn test_start_out_of_range() {
        let solver = CannedSolver {
            status: SolverStatus::Optimal,
        };
        let err = plan_tour_with_matrix(&triangle(), 7, &TourConfig::default(), &solver)
            .expect_err("bad start");
        assert_eq!(err, TourError::StartOutOfRange { start: 7, len: 3 });
    }

    #[test]
    fn test_single_location_trivial_tour() {
        let solver = CannedSolver {
            status: SolverStatus::Error, // must not be consulted
        };
        let dm = DistanceMatrix::new(1);
        let tour =
            plan_tour_with_matrix(&dm, 0, &TourConfig::default(), &solver).expect("trivial");
        assert_eq!(tour.order(), &[0, 0]);
        assert_eq!(tour.total_km(), 0.0);
        assert!(tour.is_optimal());
    }

    #[test]
    fn test_optimal_tour_metrics() {
        let solver = CannedSolver {
            status: SolverStatus::Optimal,
        };
        let tour = plan_tour_with_matrix(&triangle(), 0, &TourConfig::default(), &solver)
            .expect("solved");
        assert_eq!(tour.order(), &[0, 1, 2, 0]);
        assert_eq!(tour.leg_km(), &[3.0, 5.0, 4.0]);
        assert!((tour.total_km() - 12.0).abs() < 1e-12);
        assert!(tour.is_optimal());
    }

    #[test]
    fn test_time_limited_tour_tagged_not_optimal() {
        let solver = CannedSolver {
            status: SolverStatus::TimeLimitFeasible,
        };
        let tour = plan_tour_with_matrix(&triangle(), 0, &TourConfig::default(), &solver)
            .expect("incumbent");
        // Still a full closed cycle, but explicitly degraded.
        assert_eq!(tour.order(), &[0, 1, 2, 0]);
        assert_eq!(tour.status(), TourStatus::TimeLimit);
        assert!(!tour.is_optimal());
    }

    #[test]
    fn test_infeasible_surfaces() {
        let solver = CannedSolver {
            status: SolverStatus::Infeasible,
        };
        let err = plan_tour_with_matrix(&triangle(), 0, &TourConfig::default(), &solver)
            .expect_err("infeasible");
        assert_eq!(err, TourError::Infeasible);
    }

    #[test]
    fn test_backend_failure_surfaces() {
        let solver = CannedSolver {
            status: SolverStatus::Error,
        };
        let err = plan_tour_with_matrix(&triangle(), 0, &TourConfig::default(), &solver)
            .expect_err("backend failure");
        assert!(matches!(err, TourError::Solver { .. }));
    }
}
