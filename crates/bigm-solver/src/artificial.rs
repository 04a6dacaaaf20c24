//! Big-M artificial basis.
//!
//! Rows carrying a surplus marker get an artificial variable. Each artificial
//! `a = b - row · x` is substituted into the objective with weight `-M`, so the
//! objective gains `M × row` and its constant loses `M × b`. The artificial
//! columns end up with a zero objective entry and start in the basis.

use crate::error::SolverError;
use crate::problem::{Constraint, Relation, TargetFunction};
use crate::tableau::Tableau;

/// Textbook Big-M value, also the floor for scaled penalties
pub const DEFAULT_PENALTY: f64 = 500.0;

/// How the Big-M penalty constant is chosen
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Penalty {
    /// Use this value as M
    Fixed(f64),
    /// `max(DEFAULT_PENALTY, factor × largest |objective coefficient|)`
    Scaled(f64),
}

impl Default for Penalty {
    fn default() -> Self {
        Penalty::Scaled(1000.0)
    }
}

impl Penalty {
    pub fn resolve(&self, objective: &TargetFunction) -> Result<f64, SolverError> {
        let m = match *self {
            Penalty::Fixed(m) => m,
            Penalty::Scaled(factor) => {
                let largest = objective
                    .coefficients()
                    .iter()
                    .fold(0.0_f64, |acc, c| acc.max(c.abs()));
                DEFAULT_PENALTY.max(factor * largest)
            }
        };
        if !m.is_finite() || m <= 0.0 {
            return Err(SolverError::invalid(format!(
                "penalty must be positive and finite, got {m}"
            )));
        }
        Ok(m)
    }
}

/// Builds a tableau whose starting basis includes one artificial variable per
/// row listed in `artificial_rows`.
pub fn build(
    objective: &TargetFunction,
    canonical: &[Constraint],
    artificial_rows: &[usize],
    penalty: f64,
) -> Tableau {
    let width = canonical.first().map_or(objective.len(), |c| c.len());
    let n_total = width + artificial_rows.len();

    let mut coefficients = vec![0.0; n_total];
    coefficients[..objective.len()].copy_from_slice(objective.coefficients());
    let mut constant = objective.constant();

    let mut rows = Vec::with_capacity(canonical.len());
    let mut next_artificial = width;
    for (i, c) in canonical.iter().enumerate() {
        let mut lhs = vec![0.0; n_total];
        lhs[..width].copy_from_slice(c.coefficients());

        if artificial_rows.contains(&i) {
            lhs[next_artificial] = 1.0;
            next_artificial += 1;

            for (coef, row_coef) in coefficients.iter_mut().zip(c.coefficients()) {
                *coef += penalty * row_coef;
            }
            constant -= penalty * c.rhs();
        }

        rows.push(Constraint::new(lhs, Relation::Equal, c.rhs()));
    }

    let penalized = TargetFunction::new(coefficients, constant);
    Tableau::with_artificial(&penalized, &rows, objective.len(), artificial_rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::{canonicalize, rows_needing_artificial};

    fn scenario() -> (TargetFunction, Vec<Constraint>) {
        let objective = TargetFunction::new(vec![2.0, -1.0], 0.0);
        let constraints = vec![
            Constraint::new(vec![3.0, -2.0], Relation::LowerOrEqual, 12.0),
            Constraint::new(vec![-1.0, 2.0], Relation::LowerOrEqual, 8.0),
            Constraint::new(vec![2.0, 3.0], Relation::GreaterOrEqual, 6.0),
        ];
        (objective, canonicalize(&constraints).unwrap())
    }

    #[test]
    fn test_penalty_resolution() {
        let objective = TargetFunction::new(vec![2.0, -7.0], 0.0);
        assert_eq!(Penalty::Fixed(42.0).resolve(&objective).unwrap(), 42.0);
        assert_eq!(Penalty::Scaled(1000.0).resolve(&objective).unwrap(), 7000.0);
        assert_eq!(Penalty::Scaled(10.0).resolve(&objective).unwrap(), DEFAULT_PENALTY);
        assert!(Penalty::Fixed(0.0).resolve(&objective).is_err());
        assert!(Penalty::Fixed(f64::INFINITY).resolve(&objective).is_err());
    }

    #[test]
    fn test_build_appends_artificial_column() {
        let (objective, canonical) = scenario();
        let rows = rows_needing_artificial(&canonical, 2);
        assert_eq!(rows, vec![2]);

        let tableau = build(&objective, &canonical, &rows, DEFAULT_PENALTY);

        assert_eq!(tableau.height(), 4);
        assert_eq!(tableau.width(), 2 + 3 + 1 + 2);
        assert_eq!(tableau.original_variable_count(), 2);
        assert_eq!(tableau.slack_variable_count(), 4);
        assert_eq!(tableau.artificial_variable_count(), 1);
        assert_eq!(tableau.artificial_start(), 5);
        assert_eq!(tableau[(2, 5)], 1.0);
        assert_eq!(tableau.basis(), &[Some(2), Some(3), Some(5)]);
    }

    #[test]
    fn test_build_folds_penalty_into_objective() {
        let (objective, canonical) = scenario();
        let tableau = build(&objective, &canonical, &[2], DEFAULT_PENALTY);

        // -(c + M × row) for the variables, 0 for the artificial column
        assert_eq!(
            tableau.objective_row(),
            vec![-1002.0, -1499.0, 0.0, 0.0, 500.0, 0.0, 1.0, 3000.0]
        );
    }
}
