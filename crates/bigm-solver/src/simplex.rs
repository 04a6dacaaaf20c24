use tracing::{debug, trace, warn};

use crate::artificial::{self, Penalty};
use crate::canonical::{canonicalize, rows_needing_artificial};
use crate::error::SolverError;
use crate::observer::{Silent, SolveObserver};
use crate::problem::{check_dimensions, Constraint, LpProblem, TargetFunction};
use crate::solution::{Solution, SolutionStatus};
use crate::tableau::Tableau;

/// Simplex solver for linear programming problems
#[derive(Debug, Clone)]
pub struct Solver {
    /// Maximum pivots before giving up
    max_iterations: usize,
    /// Tolerance for floating point comparisons while pivoting
    tolerance: f64,
    /// Largest value a basic artificial variable may keep at the optimum
    feasibility_tolerance: f64,
    penalty: Penalty,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: 1e-9,
            feasibility_tolerance: 1e-7,
            penalty: Penalty::default(),
        }
    }
}

/// State of the pivot loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PivotState {
    Running,
    Optimal,
    IterationCapReached,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    pub fn with_feasibility_tolerance(mut self, tol: f64) -> Self {
        self.feasibility_tolerance = tol;
        self
    }

    pub fn with_penalty(mut self, penalty: Penalty) -> Self {
        self.penalty = penalty;
        self
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Solve an [`LpProblem`]
    pub fn solve(&self, problem: &LpProblem) -> Result<Solution, SolverError> {
        self.optimize(&problem.objective, &problem.constraints, problem.minimize)
    }

    /// Optimize `objective` subject to `constraints`, all variables non-negative
    pub fn optimize(
        &self,
        objective: &TargetFunction,
        constraints: &[Constraint],
        minimize: bool,
    ) -> Result<Solution, SolverError> {
        self.optimize_observed(objective, constraints, minimize, &mut Silent)
    }

    /// Like [`Solver::optimize`], reporting every checkpoint to `observer`
    pub fn optimize_observed(
        &self,
        objective: &TargetFunction,
        constraints: &[Constraint],
        minimize: bool,
        observer: &mut dyn SolveObserver,
    ) -> Result<Solution, SolverError> {
        check_dimensions(objective, constraints)?;

        // Pivoting always maximizes
        let working = if minimize {
            objective.negated()
        } else {
            objective.clone()
        };

        let canonical = canonicalize(constraints)?;
        observer.canonical_form(&canonical);

        let n_vars = objective.len();
        let artificial_rows = rows_needing_artificial(&canonical, n_vars);

        let mut tableau = if artificial_rows.is_empty() {
            debug!(
                variables = n_vars,
                constraints = constraints.len(),
                "solving from slack basis"
            );
            Tableau::new(&working, &canonical)
        } else {
            let penalty = self.penalty.resolve(&working)?;
            debug!(
                variables = n_vars,
                constraints = constraints.len(),
                artificial = artificial_rows.len(),
                penalty,
                "solving from artificial basis"
            );
            artificial::build(&working, &canonical, &artificial_rows, penalty)
        };
        observer.initial_tableau(&tableau, !artificial_rows.is_empty());

        let (state, iterations) = self.run(&mut tableau, observer)?;
        let status = match state {
            PivotState::IterationCapReached => {
                warn!(
                    max_iterations = self.max_iterations,
                    "no optimal solution within the iteration cap"
                );
                SolutionStatus::IterationLimit
            }
            _ => SolutionStatus::Optimal,
        };
        observer.finished(&tableau, status);

        if status == SolutionStatus::Optimal {
            self.check_artificials(&tableau)?;
        }

        let values = self.extract_values(&tableau);
        let objective_value = objective.evaluate(&values);
        debug!(?status, iterations, objective_value, "solve finished");

        Ok(Solution {
            status,
            values,
            objective_value,
            iterations,
            basis: tableau.basis().to_vec(),
        })
    }

    /// Pivot until the objective row has no negative entry or the cap is hit.
    fn run(
        &self,
        tableau: &mut Tableau,
        observer: &mut dyn SolveObserver,
    ) -> Result<(PivotState, usize), SolverError> {
        let mut state = PivotState::Running;
        let mut iterations = 0;

        while state == PivotState::Running {
            let Some(pivot_col) = self.find_pivot_column(tableau) else {
                state = PivotState::Optimal;
                continue;
            };
            if iterations >= self.max_iterations {
                state = PivotState::IterationCapReached;
                continue;
            }
            let Some(pivot_row) = self.find_pivot_row(tableau, pivot_col) else {
                return Err(SolverError::Unbounded { column: pivot_col });
            };

            trace!(iteration = iterations + 1, row = pivot_row, col = pivot_col, "pivot");
            tableau.pivot(pivot_row, pivot_col);
            iterations += 1;
            observer.pivoted(iterations, pivot_row, pivot_col, tableau);
        }

        Ok((state, iterations))
    }

    /// Most negative objective-row entry, first one on ties
    fn find_pivot_column(&self, tableau: &Tableau) -> Option<usize> {
        let obj_row = tableau.height() - 1;
        let n_cols = tableau.width() - 1;

        let mut min_val = -self.tolerance;
        let mut min_col = None;

        for j in 0..n_cols {
            if tableau[(obj_row, j)] < min_val {
                min_val = tableau[(obj_row, j)];
                min_col = Some(j);
            }
        }

        min_col
    }

    /// Minimum-ratio row among positive entries of `col`
    fn find_pivot_row(&self, tableau: &Tableau, col: usize) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;

        for row in 0..tableau.height() - 1 {
            let entry = tableau[(row, col)];
            if entry <= self.tolerance {
                continue;
            }
            let ratio = tableau.rhs(row) / entry;
            if ratio < 0.0 {
                continue;
            }
            // strict comparison: the first row wins a tie
            if best.is_none_or(|(_, smallest)| ratio < smallest) {
                best = Some((row, ratio));
            }
        }

        best.map(|(row, _)| row)
    }

    /// Fails when an artificial variable is still basic at a nonzero level.
    fn check_artificials(&self, tableau: &Tableau) -> Result<(), SolverError> {
        let art_start = tableau.artificial_start();
        for (row, basic) in tableau.basis().iter().enumerate() {
            let Some(col) = *basic else { continue };
            if col >= art_start && tableau.rhs(row).abs() > self.feasibility_tolerance {
                return Err(SolverError::Infeasible {
                    row,
                    value: tableau.rhs(row),
                });
            }
        }
        Ok(())
    }

    /// Basic original variables take their row's right-hand side, the rest are 0.
    fn extract_values(&self, tableau: &Tableau) -> Vec<f64> {
        let n_vars = tableau.original_variable_count();
        let mut values = vec![0.0; n_vars];
        for (row, basic) in tableau.basis().iter().enumerate() {
            if let Some(col) = *basic {
                if col < n_vars {
                    values[col] = tableau.rhs(row);
                }
            }
        }
        values
    }
}
