use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Objective is unbounded: no row limits entering column {column}")]
    Unbounded { column: usize },
    #[error("Problem is infeasible: artificial variable in row {row} stays at {value:.6}")]
    Infeasible { row: usize, value: f64 },
}

impl SolverError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        SolverError::InvalidInput(message.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SolverError::InvalidInput(_))
    }
}
