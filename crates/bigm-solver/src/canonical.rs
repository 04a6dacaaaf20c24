//! Conversion of a mixed constraint set into canonical (all-equality) form.
//!
//! Every constraint `i` gets an auxiliary column at `n + i` (with `n` the
//! original variable count): `+1` for `<=` and `=` rows, `-1` (surplus) for
//! `>=` rows. When equalities are present, one extra row sums them all with a
//! `-1` in the last auxiliary column. Together with the `+1` slack on each
//! equality row this pins every equality while leaving the surplus marker the
//! artificial basis looks for.
//!
//! Rows with a negative right-hand side are negated first (flipping `<=` and
//! `>=`) so the starting basis is feasible.

use crate::error::SolverError;
use crate::problem::{check_constraint_lengths, Constraint, Relation};

/// Rewrites `constraints` as equalities with slack/surplus columns appended.
pub fn canonicalize(constraints: &[Constraint]) -> Result<Vec<Constraint>, SolverError> {
    check_constraint_lengths(constraints)?;
    let constraints: Vec<Constraint> = constraints.iter().map(non_negative_rhs).collect();
    let Some(first) = constraints.first() else {
        return Ok(Vec::new());
    };

    let n_vars = first.len();
    let has_equality = constraints.iter().any(|c| c.relation() == Relation::Equal);
    let n_rows = if has_equality {
        constraints.len() + 1
    } else {
        constraints.len()
    };
    let width = n_vars + n_rows;

    let mut rows = Vec::with_capacity(n_rows);
    for (i, c) in constraints.iter().enumerate() {
        let mut lhs = vec![0.0; width];
        lhs[..n_vars].copy_from_slice(c.coefficients());
        lhs[n_vars + i] = match c.relation() {
            Relation::LowerOrEqual | Relation::Equal => 1.0,
            Relation::GreaterOrEqual => -1.0,
        };
        rows.push(Constraint::new(lhs, Relation::Equal, c.rhs()));
    }

    if has_equality {
        let mut lhs = vec![0.0; width];
        let mut rhs = 0.0;
        for c in constraints.iter().filter(|c| c.relation() == Relation::Equal) {
            for (sum, coef) in lhs.iter_mut().zip(c.coefficients()) {
                *sum += coef;
            }
            rhs += c.rhs();
        }
        lhs[width - 1] = -1.0;
        rows.push(Constraint::new(lhs, Relation::Equal, rhs));
    }

    Ok(rows)
}

/// Negates `c` when its right-hand side is negative.
fn non_negative_rhs(c: &Constraint) -> Constraint {
    if c.rhs() >= 0.0 {
        return c.clone();
    }
    let relation = match c.relation() {
        Relation::LowerOrEqual => Relation::GreaterOrEqual,
        Relation::GreaterOrEqual => Relation::LowerOrEqual,
        Relation::Equal => Relation::Equal,
    };
    let coefficients = c.coefficients().iter().map(|coef| -coef).collect();
    Constraint::new(coefficients, relation, -c.rhs())
}

/// Rows whose own auxiliary column carries the surplus marker and therefore
/// need an artificial variable to start from a feasible basis.
pub fn rows_needing_artificial(canonical: &[Constraint], n_vars: usize) -> Vec<usize> {
    canonical
        .iter()
        .enumerate()
        .filter(|(i, c)| c.coefficients().get(n_vars + i) == Some(&-1.0))
        .map(|(i, _)| i)
        .collect()
}
