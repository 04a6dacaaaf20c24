/// The result of solving an LP problem
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Solution status
    pub status: SolutionStatus,
    /// Values for each original variable, in declared order
    pub values: Vec<f64>,
    /// Objective (constant included) evaluated at `values`
    pub objective_value: f64,
    /// Pivots performed
    pub iterations: usize,
    /// Basic column of each tableau row at termination
    pub basis: Vec<Option<usize>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolutionStatus {
    /// The objective row signals optimality
    Optimal,
    /// The iteration cap was hit first; values are a best effort
    IterationLimit,
}

impl Solution {
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}
