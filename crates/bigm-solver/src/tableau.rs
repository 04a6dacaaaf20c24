use std::fmt;
use std::ops::{Index, IndexMut};

use crate::problem::{Constraint, TargetFunction};

const CELL_WIDTH: usize = 10;

/// Simplex tableau: constraint rows followed by the objective row.
///
/// Columns are the variables (original first, then slack/surplus and
/// artificial), a `z` column and the right-hand side `bi`. The objective row
/// holds the negated objective so that an all-nonnegative row means optimal.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau {
    data: Vec<Vec<f64>>,
    basis: Vec<Option<usize>>,
    n_vars: usize,
    n_slack: usize,
    n_artificial: usize,
}

impl Tableau {
    /// Builds the tableau from canonical constraints and a (maximized) objective.
    pub fn new(objective: &TargetFunction, constraints: &[Constraint]) -> Self {
        Self::with_artificial(objective, constraints, objective.len(), 0)
    }

    /// Like [`Tableau::new`] for an objective already widened over auxiliary
    /// columns: the first `n_vars` columns are original variables and the last
    /// `n_artificial` variable columns are artificial.
    pub(crate) fn with_artificial(
        objective: &TargetFunction,
        constraints: &[Constraint],
        n_vars: usize,
        n_artificial: usize,
    ) -> Self {
        let n_total = constraints.first().map_or(n_vars, |c| c.len());
        let n_rows = constraints.len() + 1;
        let n_cols = n_total + 2;
        let obj_row = n_rows - 1;

        let mut data = vec![vec![0.0; n_cols]; n_rows];
        for (i, c) in constraints.iter().enumerate() {
            data[i][..n_total].copy_from_slice(c.coefficients());
            data[i][n_cols - 1] = c.rhs();
        }

        for (j, coef) in objective.coefficients().iter().enumerate() {
            data[obj_row][j] = -coef;
        }
        data[obj_row][n_cols - 2] = 1.0;
        data[obj_row][n_cols - 1] = -objective.constant();

        let mut tableau = Self {
            data,
            basis: vec![None; constraints.len()],
            n_vars,
            n_slack: n_total.saturating_sub(n_vars),
            n_artificial,
        };
        tableau.seed_basis();
        tableau
    }

    /// Picks, for each row, the right-most auxiliary unit column with its 1 there.
    fn seed_basis(&mut self) {
        let n_total = self.n_vars + self.n_slack;
        for col in (self.n_vars..n_total).rev() {
            if let Some(row) = self.unit_row(col, 0.0) {
                if row < self.basis.len() && self.basis[row].is_none() {
                    self.basis[row] = Some(col);
                }
            }
        }
    }

    /// Number of rows, objective row included
    pub fn height(&self) -> usize {
        self.data.len()
    }

    /// Number of columns, `z` and right-hand side included
    pub fn width(&self) -> usize {
        self.data[0].len()
    }

    pub fn original_variable_count(&self) -> usize {
        self.n_vars
    }

    /// Auxiliary columns: slack, surplus and artificial
    pub fn slack_variable_count(&self) -> usize {
        self.n_slack
    }

    pub fn artificial_variable_count(&self) -> usize {
        self.n_artificial
    }

    pub fn variable_count(&self) -> usize {
        self.n_vars + self.n_slack
    }

    /// Index of the first artificial column
    pub fn artificial_start(&self) -> usize {
        self.variable_count() - self.n_artificial
    }

    pub fn objective_row(&self) -> Vec<f64> {
        self.data[self.height() - 1].clone()
    }

    pub fn rhs_column(&self) -> Vec<f64> {
        let rhs = self.width() - 1;
        self.data.iter().map(|row| row[rhs]).collect()
    }

    pub fn rhs(&self, row: usize) -> f64 {
        self.data[row][self.width() - 1]
    }

    /// Basic variable of each constraint row
    pub fn basis(&self) -> &[Option<usize>] {
        &self.basis
    }

    /// Row holding the single 1 of `col` when every other entry is 0.
    pub fn unit_row(&self, col: usize, tolerance: f64) -> Option<usize> {
        let mut unit = None;
        for (i, row) in self.data.iter().enumerate() {
            let val = row[col];
            if (val - 1.0).abs() <= tolerance {
                if unit.is_some() {
                    return None;
                }
                unit = Some(i);
            } else if val.abs() > tolerance {
                return None;
            }
        }
        unit
    }

    /// Gauss-Jordan step making `col` a unit column centered on `row`.
    pub fn pivot(&mut self, row: usize, col: usize) {
        let n_cols = self.width();

        let pivot_val = self.data[row][col];
        for j in 0..n_cols {
            self.data[row][j] /= pivot_val;
        }

        let pivot_row = self.data[row].clone();
        for (i, current) in self.data.iter_mut().enumerate() {
            if i == row {
                continue;
            }
            let factor = current[col];
            if factor == 0.0 {
                continue;
            }
            for (cell, pivot_cell) in current.iter_mut().zip(&pivot_row) {
                *cell -= factor * pivot_cell;
            }
        }

        self.basis[row] = Some(col);
    }
}

impl Index<(usize, usize)> for Tableau {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row][col]
    }
}

impl IndexMut<(usize, usize)> for Tableau {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[row][col]
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = (1..=self.n_vars)
            .map(|j| format!("x{j}"))
            .chain((1..=self.n_slack).map(|j| format!("s{j}")))
            .chain(["z".to_string(), "bi".to_string()]);
        for label in labels {
            write!(f, "{:<width$}", label, width = CELL_WIDTH)?;
        }
        writeln!(f)?;

        for row in &self.data {
            for &val in row {
                // avoid rendering -0.00
                let val = if val == 0.0 { 0.0 } else { val };
                write!(f, "{:<width$.2}", val, width = CELL_WIDTH)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
