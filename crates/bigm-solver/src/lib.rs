mod artificial;
mod canonical;
mod error;
mod observer;
mod problem;
mod simplex;
mod solution;
mod tableau;
pub mod transport;

pub use artificial::{build as build_artificial_basis, Penalty, DEFAULT_PENALTY};
pub use canonical::{canonicalize, rows_needing_artificial};
pub use error::SolverError;
pub use observer::{Silent, SolveObserver, TracingObserver};
pub use problem::{Constraint, LpProblem, Relation, TargetFunction};
pub use simplex::Solver;
pub use solution::{Solution, SolutionStatus};
pub use tableau::Tableau;
