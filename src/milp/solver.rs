//! Solver interface and solve results.

use std::time::Duration;

use super::model::MilpModel;
use super::variables::VarId;

/// Status of the backend after a solve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStatus {
    /// Proven optimal assignment.
    Optimal,
    /// Best incumbent at the time budget; optimality unproven.
    TimeLimitFeasible,
    /// No feasible assignment exists.
    Infeasible,
    /// The backend failed or produced nothing usable.
    Error,
}

/// Wall-clock budget and output knobs for one solve call.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Hard wall-clock limit for the backend.
    pub time_limit: Duration,
    /// Forward backend log output.
    pub verbose: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(300),
            verbose: false,
        }
    }
}

/// Variable assignment plus status returned by a backend.
#[derive(Debug, Clone)]
pub struct MilpSolution {
    status: SolverStatus,
    columns: Vec<f64>,
    objective: Option<f64>,
}

impl MilpSolution {
    /// Creates a solution from a column assignment.
    pub fn new(status: SolverStatus, columns: Vec<f64>, objective: Option<f64>) -> Self {
        Self {
            status,
            columns,
            objective,
        }
    }

    /// Creates an assignment-free solution with the given status.
    pub fn empty(status: SolverStatus) -> Self {
        Self {
            status,
            columns: Vec::new(),
            objective: None,
        }
    }

    /// Backend termination status.
    pub fn status(&self) -> SolverStatus {
        self.status
    }

    /// Value assigned to a variable; zero if absent from the assignment.
    pub fn value(&self, var: VarId) -> f64 {
        self.columns.get(var.index()).copied().unwrap_or(0.0)
    }

    /// The raw column assignment, in [`VarId`] order.
    pub fn columns(&self) -> &[f64] {
        &self.columns
    }

    /// Objective value, when the backend produced an assignment.
    pub fn objective(&self) -> Option<f64> {
        self.objective
    }

    /// `true` when the status carries a usable assignment.
    pub fn has_assignment(&self) -> bool {
        matches!(
            self.status,
            SolverStatus::Optimal | SolverStatus::TimeLimitFeasible
        )
    }
}

/// A mixed-integer linear programming backend.
///
/// Implementations must support binary and bounded-continuous variables,
/// linear Eq/Le/Ge constraints, and the minimize objective, and must not
/// block past `config.time_limit`. When the budget elapses before
/// optimality is proven, the best incumbent is returned as
/// [`SolverStatus::TimeLimitFeasible`] — never silently as optimal; when no
/// incumbent exists, the status must be [`SolverStatus::Infeasible`] or
/// [`SolverStatus::Error`].
pub trait MilpSolver {
    /// Solves the model within the configured budget.
    fn solve(&self, model: &MilpModel, config: &SolverConfig) -> MilpSolution;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_value_lookup() {
        let solution = MilpSolution::new(SolverStatus::Optimal, vec![1.0, 0.0, 0.5], Some(2.5));
        assert_eq!(solution.value(VarId(0)), 1.0);
        assert_eq!(solution.value(VarId(2)), 0.5);
        // Out-of-range lookups read as zero rather than panicking.
        assert_eq!(solution.value(VarId(9)), 0.0);
        assert_eq!(solution.objective(), Some(2.5));
    }

    #[test]
    fn test_empty_solution() {
        let solution = MilpSolution::empty(SolverStatus::Infeasible);
        assert!(solution.columns().is_empty());
        assert!(solution.objective().is_none());
        assert!(!solution.has_assignment());
    }

    #[test]
    fn test_has_assignment_by_status() {
        assert!(MilpSolution::empty(SolverStatus::Optimal).has_assignment());
        assert!(MilpSolution::empty(SolverStatus::TimeLimitFeasible).has_assignment());
        assert!(!MilpSolution::empty(SolverStatus::Error).has_assignment());
    }

    #[test]
    fn test_config_default() {
        let config = SolverConfig::default();
        assert_eq!(config.time_limit, Duration::from_secs(300));
        assert!(!config.verbose);
    }
}
