//! Linear model container.

use super::variables::{VarId, VarKind, Variable};

/// Comparison operator of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintOp {
    /// Left-hand side equals the right-hand side.
    Eq,
    /// Left-hand side at most the right-hand side.
    Le,
    /// Left-hand side at least the right-hand side.
    Ge,
}

/// A linear constraint: `Σ coeff·var (op) rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Weighted variable terms of the left-hand side.
    pub terms: Vec<(VarId, f64)>,
    /// Comparison operator.
    pub op: ConstraintOp,
    /// Right-hand side constant.
    pub rhs: f64,
}

/// A minimize-objective mixed-integer linear model.
///
/// Variables carry their objective coefficient; constraints reference
/// variables by [`VarId`]. The model is a pure description — backends
/// consume it read-only.
///
/// # Examples
///
/// ```
/// use geotour::milp::{ConstraintOp, MilpModel};
///
/// let mut model = MilpModel::new();
/// let x = model.add_binary(3.0);
/// let y = model.add_binary(2.0);
/// model.add_constraint(vec![(x, 1.0), (y, 1.0)], ConstraintOp::Eq, 1.0);
/// assert_eq!(model.num_variables(), 2);
/// assert_eq!(model.num_constraints(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MilpModel {
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
}

impl MilpModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self {
            variables: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Adds a 0/1 variable with the given objective coefficient.
    pub fn add_binary(&mut self, objective: f64) -> VarId {
        self.variables.push(Variable {
            kind: VarKind::Binary,
            objective,
        });
        VarId(self.variables.len() - 1)
    }

    /// Adds a bounded continuous variable with the given objective
    /// coefficient.
    pub fn add_continuous(&mut self, objective: f64, lb: f64, ub: f64) -> VarId {
        self.variables.push(Variable {
            kind: VarKind::Continuous { lb, ub },
            objective,
        });
        VarId(self.variables.len() - 1)
    }

    /// Adds the constraint `Σ terms (op) rhs`.
    pub fn add_constraint(&mut self, terms: Vec<(VarId, f64)>, op: ConstraintOp, rhs: f64) {
        self.constraints.push(Constraint { terms, op, rhs });
    }

    /// All variables, in [`VarId`] order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// All constraints, in insertion order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Number of variables.
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Number of constraints.
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Objective value of a column assignment.
    pub fn objective_value(&self, columns: &[f64]) -> f64 {
        self.variables
            .iter()
            .zip(columns)
            .map(|(v, &x)| v.objective * x)
            .sum()
    }

    /// Returns `true` if the assignment satisfies every constraint within
    /// the given tolerance.
    ///
    /// Used to vet incumbents handed back at the time limit before they are
    /// decoded into a tour.
    pub fn is_satisfied(&self, columns: &[f64], tol: f64) -> bool {
        if columns.len() != self.variables.len() {
            return false;
        }
        self.constraints.iter().all(|c| {
            let lhs: f64 = c
                .terms
                .iter()
                .map(|&(v, w)| w * columns[v.index()])
                .sum();
            match c.op {
                ConstraintOp::Eq => (lhs - c.rhs).abs() <= tol,
                ConstraintOp::Le => lhs <= c.rhs + tol,
                ConstraintOp::Ge => lhs >= c.rhs - tol,
            }
        })
    }
}
