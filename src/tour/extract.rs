//! Decode a solver assignment into an ordered tour.

use crate::error::TourError;
use crate::milp::MilpSolution;

use super::model::TourModel;

/// Arc variables above this value count as selected. Backends return
/// near-integral values for integer columns.
const ARC_SELECTED: f64 = 0.5;

/// Reconstructs the visiting order from the selected arcs.
///
/// Walks from the start node along the unique selected outgoing arc of each
/// node until the start reappears, producing the closed order of n+1
/// indices. For a fixed assignment the walk is fully determined, so
/// extraction is reproducible.
///
/// # Errors
///
/// [`TourError::InvalidSolution`] when the assignment does not decode into
/// a single Hamiltonian cycle: a node with no (or more than one) selected
/// outgoing arc, an early return to an already-visited node, or a cycle
/// that closes before covering every node.
pub fn extract_order(model: &TourModel, solution: &MilpSolution) -> Result<Vec<usize>, TourError> {
    let n = model.num_nodes();
    let start = model.start();
    let mut order = Vec::with_capacity(n + 1);
    let mut visited = vec![false; n];
    let mut current = start;

    for _ in 0..n {
        order.push(current);
        visited[current] = true;

        let mut selected = None;
        for next in 0..n {
            let var = match model.arc(current, next) {
                Some(var) => var,
                None => continue,
            };
            if solution.value(var) > ARC_SELECTED {
                if selected.is_some() {
                    return Err(TourError::InvalidSolution {
                        reason: format!("node {current} has multiple selected outgoing arcs"),
                    });
                }
                selected = Some(next);
            }
        }

        let next = match selected {
            Some(next) => next,
            None => {
                return Err(TourError::InvalidSolution {
                    reason: format!("node {current} has no selected outgoing arc"),
                })
            }
        };

        if next == start {
            if order.len() < n {
                return Err(TourError::InvalidSolution {
                    reason: format!("cycle closed after {} of {} nodes", order.len(), n),
                });
            }
        } else if visited[next] {
            return Err(TourError::InvalidSolution {
                reason: format!("node {next} visited twice"),
            });
        }
        current = next;
    }

    if current != start {
        return Err(TourError::InvalidSolution {
            reason: format!("walk did not return to start node {start}"),
        });
    }

    order.push(start);
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::milp::{MilpSolution, SolverStatus};

    fn tour_model(n: usize, start: usize) -> TourModel {
        TourModel::build(&DistanceMatrix::new(n), start)
    }

    fn solution_with_arcs(model: &TourModel, arcs: &[(usize, usize)]) -> MilpSolution {
        let mut columns = vec![0.0; model.model().num_variables()];
        for &(i, j) in arcs {
            columns[model.arc(i, j).expect("off-diagonal arc").index()] = 1.0;
        }
        MilpSolution::new(SolverStatus::Optimal, columns, None)
    }

    #[test]
    fn test_extracts_full_cycle() {
        let model = tour_model(4, 0);
        let solution = solution_with_arcs(&model, &[(0, 2), (2, 3), (3, 1), (1, 0)]);
        let order = extract_order(&model, &solution).expect("valid cycle");
        assert_eq!(order, vec![0, 2, 3, 1, 0]);
    }

    #[test]
    fn test_extracts_from_nonzero_start() {
        let model = tour_model(3, 1);
        let solution = solution_with_arcs(&model, &[(1, 2), (2, 0), (0, 1)]);
        let order = extract_order(&model, &solution).expect("valid cycle");
        assert_eq!(order, vec![1, 2, 0, 1]);
    }

    #[test]
    fn test_two_node_cycle() {
        let model = tour_model(2, 0);
        let solution = solution_with_arcs(&model, &[(0, 1), (1, 0)]);
        let order = extract_order(&model, &solution).expect("valid cycle");
        assert_eq!(order, vec![0, 1, 0]);
    }

    #[test]
    fn test_rejects_premature_close() {
        // 0→1→0 closes before node 2 is reached.
        let model = tour_model(3, 0);
        let solution = solution_with_arcs(&model, &[(0, 1), (1, 0), (2, 1)]);
        let err = extract_order(&model, &solution).expect_err("premature cycle");
        assert!(matches!(err, TourError::InvalidSolution { .. }));
    }

    #[test]
    fn test_rejects_missing_outgoing_arc() {
        let model = tour_model(3, 0);
        let solution = solution_with_arcs(&model, &[(0, 1)]);
        let err = extract_order(&model, &solution).expect_err("dead end");
        assert!(matches!(err, TourError::InvalidSolution { .. }));
    }

    #[test]
    fn test_rejects_multiple_outgoing_arcs() {
        let model = tour_model(3, 0);
        let solution = solution_with_arcs(&model, &[(0, 1), (0, 2), (1, 0), (2, 0)]);
        let err = extract_order(&model, &solution).expect_err("branching walk");
        assert!(matches!(err, TourError::InvalidSolution { .. }));
    }

    #[test]
    fn test_rejects_revisit_of_non_start_node() {
        // 0→1→2→1 revisits node 1 instead of closing at the start.
        let model = tour_model(4, 0);
        let solution = solution_with_arcs(&model, &[(0, 1), (1, 2), (2, 1), (3, 0)]);
        let err = extract_order(&model, &solution).expect_err("revisit");
        assert!(matches!(err, TourError::InvalidSolution { .. }));
    }

    #[test]
    fn test_deterministic_for_fixed_assignment() {
        let model = tour_model(4, 0);
        let solution = solution_with_arcs(&model, &[(0, 2), (2, 3), (3, 1), (1, 0)]);
        let first = extract_order(&model, &solution).expect("valid cycle");
        let second = extract_order(&model, &solution).expect("valid cycle");
        assert_eq!(first, second);
    }
}
