//! Checkpoint hooks for watching a solve.

use tracing::debug;

use crate::problem::Constraint;
use crate::solution::SolutionStatus;
use crate::tableau::Tableau;

/// Receives the intermediate state of a solve. Every method defaults to a no-op.
pub trait SolveObserver {
    /// Called once the constraints are in canonical form
    fn canonical_form(&mut self, _constraints: &[Constraint]) {}

    /// Called with the starting tableau; `artificial` tells whether it was
    /// built with an artificial basis
    fn initial_tableau(&mut self, _tableau: &Tableau, _artificial: bool) {}

    /// Called after each pivot
    fn pivoted(&mut self, _iteration: usize, _row: usize, _col: usize, _tableau: &Tableau) {}

    /// Called with the final tableau when the pivot loop stops
    fn finished(&mut self, _tableau: &Tableau, _status: SolutionStatus) {}
}

/// Ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl SolveObserver for Silent {}

/// Renders every checkpoint into `debug` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SolveObserver for TracingObserver {
    fn canonical_form(&mut self, constraints: &[Constraint]) {
        for (i, c) in constraints.iter().enumerate() {
            debug!(row = i, constraint = %c, "canonical constraint");
        }
    }

    fn initial_tableau(&mut self, tableau: &Tableau, artificial: bool) {
        debug!(artificial, "initial tableau\n{tableau}");
    }

    fn pivoted(&mut self, iteration: usize, row: usize, col: usize, tableau: &Tableau) {
        debug!(iteration, row, col, "tableau after pivot\n{tableau}");
    }

    fn finished(&mut self, tableau: &Tableau, status: SolutionStatus) {
        debug!(?status, "final tableau\n{tableau}");
    }
}
