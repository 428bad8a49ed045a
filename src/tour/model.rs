//! MILP formulation of the closed-tour problem.

use crate::distance::DistanceMatrix;
use crate::milp::{ConstraintOp, MilpModel, VarId};

/// The arc-based tour model for one optimization run.
///
/// Holds the assembled [`MilpModel`] plus the arc-variable lookup needed to
/// decode a solution back into a visiting order. Built fresh per run and
/// consumed once.
#[derive(Debug, Clone)]
pub struct TourModel {
    model: MilpModel,
    arcs: Vec<Vec<Option<VarId>>>,
    start: usize,
    n: usize,
}

impl TourModel {
    /// Builds the degree-constrained formulation with Miller–Tucker–Zemlin
    /// subtour elimination over the given matrix.
    ///
    /// One binary arc variable per ordered pair (i ≠ j), weighted by the
    /// pair's distance; one continuous order potential per node bounded to
    /// [0, n−1]. Degree equalities force exactly one selected arc into and
    /// out of every node; that alone still admits disjoint sub-cycles, so
    /// for every ordered pair avoiding the start node the potentials must
    /// satisfy `u[i] − u[j] + n·x[i][j] ≤ n − 1`, which only the single
    /// cycle through the start can do. The start potential is anchored to
    /// zero.
    ///
    /// Requires `distances.size() >= 2` and `start < distances.size()`.
    pub fn build(distances: &DistanceMatrix, start: usize) -> Self {
        let n = distances.size();
        let mut model = MilpModel::new();

        let mut arcs: Vec<Vec<Option<VarId>>> = vec![vec![None; n]; n];
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    arcs[i][j] = Some(model.add_binary(distances.get(i, j)));
                }
            }
        }

        let order: Vec<VarId> = (0..n)
            .map(|_| model.add_continuous(0.0, 0.0, (n - 1) as f64))
            .collect();

        // Exactly one selected arc into every node.
        for j in 0..n {
            let terms: Vec<_> = (0..n).filter_map(|i| arcs[i][j].map(|v| (v, 1.0))).collect();
            model.add_constraint(terms, ConstraintOp::Eq, 1.0);
        }

        // Exactly one selected arc out of every node.
        for i in 0..n {
            let terms: Vec<_> = (0..n).filter_map(|j| arcs[i][j].map(|v| (v, 1.0))).collect();
            model.add_constraint(terms, ConstraintOp::Eq, 1.0);
        }

        // Subtour elimination over all ordered pairs avoiding the start.
        for i in 0..n {
            for j in 0..n {
                if i == j || i == start || j == start {
                    continue;
                }
                if let Some(x) = arcs[i][j] {
                    model.add_constraint(
                        vec![(order[i], 1.0), (order[j], -1.0), (x, n as f64)],
                        ConstraintOp::Le,
                        (n - 1) as f64,
                    );
                }
            }
        }

        model.add_constraint(vec![(order[start], 1.0)], ConstraintOp::Eq, 0.0);

        Self {
            model,
            arcs,
            start,
            n,
        }
    }

    /// The assembled MILP model.
    pub fn model(&self) -> &MilpModel {
        &self.model
    }

    /// The anchored start node.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of nodes in the formulation.
    pub fn num_nodes(&self) -> usize {
        self.n
    }

    /// The arc variable for the ordered pair `(from, to)`; `None` on the
    /// diagonal.
    pub(crate) fn arc(&self, from: usize, to: usize) -> Option<VarId> {
        self.arcs[from][to]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_matrix() -> DistanceMatrix {
        let s = 2.0_f64.sqrt();
        DistanceMatrix::from_data(
            4,
            vec![
                0.0, 1.0, s, 1.0, //
                1.0, 0.0, 1.0, s, //
                s, 1.0, 0.0, 1.0, //
                1.0, s, 1.0, 0.0,
            ],
        )
        .expect("square data")
    }

    #[test]
    fn test_dimensions() {
        let model = TourModel::build(&square_matrix(), 0);
        // n(n−1) arcs + n potentials.
        assert_eq!(model.model().num_variables(), 12 + 4);
        // 2n degree + (n−1)(n−2) MTZ + 1 anchor.
        assert_eq!(model.model().num_constraints(), 8 + 6 + 1);
        assert_eq!(model.num_nodes(), 4);
        assert_eq!(model.start(), 0);
    }

    #[test]
    fn test_arc_lookup() {
        let model = TourModel::build(&square_matrix(), 0);
        assert!(model.arc(0, 0).is_none());
        assert!(model.arc(0, 1).is_some());
        assert!(model.arc(3, 2).is_some());
        assert_ne!(model.arc(0, 1), model.arc(1, 0));
    }

    #[test]
    fn test_arc_objective_is_distance() {
        let distances = square_matrix();
        let model = TourModel::build(&distances, 0);
        let x = model.arc(0, 2).expect("off-diagonal");
        let var = &model.model().variables()[x.index()];
        assert!((var.objective - distances.get(0, 2)).abs() < 1e-12);
    }

    #[test]
    fn test_perimeter_assignment_satisfies_model() {
        let model = TourModel::build(&square_matrix(), 0);
        let mut columns = vec![0.0; model.model().num_variables()];
        for &(i, j) in &[(0, 1), (1, 2), (2, 3), (3, 0)] {
            columns[model.arc(i, j).expect("arc").index()] = 1.0;
        }
        // Matching potentials: u grows along the walk from the start.
        let base = 12; // potentials follow the 12 arc variables
        for (node, u) in [(0, 0.0), (1, 1.0), (2, 2.0), (3, 3.0)] {
            columns[base + node] = u;
        }
        assert!(model.model().is_satisfied(&columns, 1e-9));
    }

    #[test]
    fn test_two_disjoint_pairs_violate_model() {
        // 0↔1 and 2↔3 satisfy all degree constraints but not the
        // subtour-elimination inequalities.
        let model = TourModel::build(&square_matrix(), 0);
        let mut columns = vec![0.0; model.model().num_variables()];
        for &(i, j) in &[(0, 1), (1, 0), (2, 3), (3, 2)] {
            columns[model.arc(i, j).expect("arc").index()] = 1.0;
        }
        assert!(!model.model().is_satisfied(&columns, 1e-9));
    }
}
