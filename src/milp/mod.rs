//! Mixed-integer linear programming layer.
//!
//! Defines the modeling types and the solver capability trait; it does NOT
//! implement branch-and-bound itself. Any backend that supports binary and
//! bounded-continuous variables, linear constraints, and a minimize
//! objective can plug in behind [`MilpSolver`]. The default backend is
//! HiGHS, behind the `solver-highs` feature (enabled by default).
//!
//! # Key Components
//!
//! - **Variables**: [`VarId`], [`VarKind`], [`Variable`]
//! - **Model**: [`MilpModel`] — variables, constraints, objective
//! - **Solver**: [`MilpSolver`] trait, [`SolverConfig`], [`MilpSolution`]
//! - **Backend**: [`HighsSolver`] (feature `solver-highs`)

#[cfg(feature = "solver-highs")]
mod highs;
mod model;
mod solver;
mod variables;

#[cfg(feature = "solver-highs")]
pub use highs::HighsSolver;
pub use model::{Constraint, ConstraintOp, MilpModel};
pub use solver::{MilpSolution, MilpSolver, SolverConfig, SolverStatus};
pub use variables::{VarId, VarKind, Variable};
