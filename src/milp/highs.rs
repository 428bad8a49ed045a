//! HiGHS-backed MILP solver.

use highs::{HighsModelStatus, RowProblem, Sense};

use super::model::{ConstraintOp, MilpModel};
use super::solver::{MilpSolution, MilpSolver, SolverConfig, SolverStatus};
use super::variables::VarKind;

/// Tolerance for vetting a time-limit incumbent against the model.
const FEASIBILITY_TOL: f64 = 1e-6;

/// [`MilpSolver`] implementation on the HiGHS branch-and-bound backend.
///
/// Stateless; the model and budget arrive per call.
#[derive(Debug, Clone, Copy)]
pub struct HighsSolver;

impl HighsSolver {
    /// Creates the solver.
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl MilpSolver for HighsSolver {
    fn solve(&self, model: &MilpModel, config: &SolverConfig) -> MilpSolution {
        let mut problem = RowProblem::default();

        let mut cols = Vec::with_capacity(model.num_variables());
        for var in model.variables() {
            let col = match var.kind {
                VarKind::Binary => problem.add_integer_column(var.objective, 0..=1),
                VarKind::Continuous { lb, ub } => problem.add_column(var.objective, lb..=ub),
            };
            cols.push(col);
        }

        for constraint in model.constraints() {
            let factors: Vec<_> = constraint
                .terms
                .iter()
                .map(|&(v, w)| (cols[v.index()], w))
                .collect();
            match constraint.op {
                ConstraintOp::Eq => problem.add_row(constraint.rhs..=constraint.rhs, &factors),
                ConstraintOp::Le => problem.add_row(..=constraint.rhs, &factors),
                ConstraintOp::Ge => problem.add_row(constraint.rhs.., &factors),
            }
        }

        let mut highs_model = problem.optimise(Sense::Minimise);
        highs_model.set_option("time_limit", config.time_limit.as_secs_f64());
        highs_model.set_option("output_flag", config.verbose);

        let solved = highs_model.solve();
        let status = match solved.status() {
            HighsModelStatus::Optimal => SolverStatus::Optimal,
            HighsModelStatus::ReachedTimeLimit => SolverStatus::TimeLimitFeasible,
            HighsModelStatus::Infeasible => SolverStatus::Infeasible,
            _ => SolverStatus::Error,
        };
        if !matches!(
            status,
            SolverStatus::Optimal | SolverStatus::TimeLimitFeasible
        ) {
            return MilpSolution::empty(status);
        }

        let columns = solved.get_solution().columns().to_vec();
        // A time limit can be reported with no incumbent behind it; in that
        // case the column values are meaningless and must not be decoded.
        if status == SolverStatus::TimeLimitFeasible
            && !model.is_satisfied(&columns, FEASIBILITY_TOL)
        {
            return MilpSolution::empty(SolverStatus::Error);
        }

        let objective = model.objective_value(&columns);
        MilpSolution::new(status, columns, Some(objective))
    }
}
