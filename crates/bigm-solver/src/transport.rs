//! Balanced transportation problems.
//!
//! Variable `i * demand.len() + j` is the amount shipped from supplier `i` to
//! consumer `j`.

use crate::error::SolverError;
use crate::problem::{Constraint, Relation};

/// One equality per supplier (ships out its whole supply) followed by one per
/// consumer (receives exactly its demand).
pub fn transportation_constraints(
    supply: &[f64],
    demand: &[f64],
) -> Result<Vec<Constraint>, SolverError> {
    if supply.is_empty() || demand.is_empty() {
        return Err(SolverError::invalid(
            "transportation problem needs at least one supplier and one consumer",
        ));
    }

    let n_vars = supply.len() * demand.len();
    let mut constraints = Vec::with_capacity(supply.len() + demand.len());

    for (i, &amount) in supply.iter().enumerate() {
        let mut coefficients = vec![0.0; n_vars];
        for j in 0..demand.len() {
            coefficients[i * demand.len() + j] = 1.0;
        }
        constraints.push(Constraint::new(coefficients, Relation::Equal, amount));
    }

    for (j, &amount) in demand.iter().enumerate() {
        let mut coefficients = vec![0.0; n_vars];
        for i in 0..supply.len() {
            coefficients[i * demand.len() + j] = 1.0;
        }
        constraints.push(Constraint::new(coefficients, Relation::Equal, amount));
    }

    Ok(constraints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::canonicalize;
    use crate::problem::TargetFunction;
    use crate::solution::SolutionStatus;
    use crate::Solver;

    #[test]
    fn test_constraint_pattern() {
        let constraints = transportation_constraints(&[30.0, 20.0], &[25.0, 25.0]).unwrap();
        assert_eq!(constraints.len(), 4);
        assert_eq!(constraints[0].coefficients(), &[1.0, 1.0, 0.0, 0.0]);
        assert_eq!(constraints[1].coefficients(), &[0.0, 0.0, 1.0, 1.0]);
        assert_eq!(constraints[2].coefficients(), &[1.0, 0.0, 1.0, 0.0]);
        assert_eq!(constraints[3].coefficients(), &[0.0, 1.0, 0.0, 1.0]);
        assert_eq!(constraints[3].rhs(), 25.0);
    }

    #[test]
    fn test_summary_row_generated() {
        let constraints = transportation_constraints(&[30.0, 20.0], &[25.0, 25.0]).unwrap();
        let canonical = canonicalize(&constraints).unwrap();
        assert_eq!(canonical.len(), constraints.len() + 1);
        assert_eq!(canonical[4].rhs(), 100.0);
    }

    #[test]
    fn test_solve_square_transportation() {
        // cost 185 - 4t along x11 = t, minimized at t = 25
        let constraints = transportation_constraints(&[30.0, 20.0], &[25.0, 25.0]).unwrap();
        let objective = TargetFunction::new(vec![1.0, 4.0, 3.0, 2.0], 0.0);
        let solution = Solver::new().optimize(&objective, &constraints, true).unwrap();

        assert_eq!(solution.status, SolutionStatus::Optimal);
        let expected = [25.0, 5.0, 0.0, 20.0];
        for (value, expected) in solution.values.iter().zip(expected) {
            assert!((value - expected).abs() < 1e-6, "{:?}", solution.values);
        }
        assert!((solution.objective_value - 85.0).abs() < 1e-6);
    }

    #[test]
    fn test_solve_rectangular_transportation() {
        let constraints = transportation_constraints(&[40.0, 60.0], &[20.0, 30.0, 50.0]).unwrap();
        let objective = TargetFunction::new(vec![2.0, 4.0, 5.0, 3.0, 1.0, 6.0], 0.0);
        let solution = Solver::new().optimize(&objective, &constraints, true).unwrap();

        assert_eq!(solution.status, SolutionStatus::Optimal);
        assert!((solution.objective_value - 350.0).abs() < 1e-6);
        for c in &constraints {
            assert!((c.evaluate(&solution.values) - c.rhs()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_empty_side_rejected() {
        assert!(transportation_constraints(&[], &[1.0]).is_err());
    }
}
