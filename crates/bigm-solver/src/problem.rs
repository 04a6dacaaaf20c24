use std::fmt;

use crate::error::SolverError;

/// Relational operator of a constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relation {
    /// Equal (=)
    #[cfg_attr(feature = "serde", serde(rename = "=", alias = "eq"))]
    Equal,
    /// Less than or equal (<=)
    #[cfg_attr(feature = "serde", serde(rename = "<=", alias = "le"))]
    LowerOrEqual,
    /// Greater than or equal (>=)
    #[cfg_attr(feature = "serde", serde(rename = ">=", alias = "ge"))]
    GreaterOrEqual,
}

impl Relation {
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Equal => "=",
            Relation::LowerOrEqual => "<=",
            Relation::GreaterOrEqual => ">=",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A linear relation `coefficients · x <relation> rhs`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraint {
    coefficients: Vec<f64>,
    relation: Relation,
    rhs: f64,
}

impl Constraint {
    pub fn new(coefficients: Vec<f64>, relation: Relation, rhs: f64) -> Self {
        Self {
            coefficients,
            relation,
            rhs,
        }
    }

    /// Left-hand coefficients, one per variable
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    /// Right-hand side value
    pub fn rhs(&self) -> f64 {
        self.rhs
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Left-hand side evaluated at `values`
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(values)
            .map(|(coef, value)| coef * value)
            .sum()
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_terms(f, &self.coefficients)?;
        write!(f, " {} {:.2}", self.relation, self.rhs)
    }
}

/// Linear objective `coefficients · x + constant`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetFunction {
    coefficients: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    constant: f64,
}

impl TargetFunction {
    pub fn new(coefficients: Vec<f64>, constant: f64) -> Self {
        Self {
            coefficients,
            constant,
        }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Sign-flipped copy, turning a minimization into a maximization
    pub fn negated(&self) -> Self {
        Self {
            coefficients: self.coefficients.iter().map(|c| -c).collect(),
            constant: -self.constant,
        }
    }

    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(values)
            .map(|(coef, value)| coef * value)
            .sum::<f64>()
            + self.constant
    }
}

impl fmt::Display for TargetFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("z(x) = ")?;
        write_terms(f, &self.coefficients)?;
        if self.constant != 0.0 {
            write!(f, " + ({})", self.constant)?;
        }
        Ok(())
    }
}

fn write_terms(f: &mut fmt::Formatter<'_>, coefficients: &[f64]) -> fmt::Result {
    for (j, coef) in coefficients.iter().enumerate() {
        if j > 0 {
            f.write_str(" + ")?;
        }
        write!(f, "x{}*({:.2})", j + 1, coef)?;
    }
    Ok(())
}

/// Represents a linear programming problem
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LpProblem {
    /// Variable names (optional, `x1..xn` when empty)
    #[cfg_attr(feature = "serde", serde(default))]
    pub variables: Vec<String>,
    /// Objective function
    pub objective: TargetFunction,
    /// Whether to minimize or maximize
    #[cfg_attr(feature = "serde", serde(default))]
    pub minimize: bool,
    /// Constraints
    pub constraints: Vec<Constraint>,
}

impl LpProblem {
    pub fn new(variables: Vec<String>) -> Self {
        let n = variables.len();
        Self {
            variables,
            objective: TargetFunction::new(vec![0.0; n], 0.0),
            minimize: false,
            constraints: Vec::new(),
        }
    }

    pub fn set_objective(&mut self, coefficients: Vec<f64>, constant: f64, minimize: bool) {
        self.objective = TargetFunction::new(coefficients, constant);
        self.minimize = minimize;
    }

    pub fn add_constraint(&mut self, coefficients: Vec<f64>, relation: Relation, rhs: f64) {
        self.constraints
            .push(Constraint::new(coefficients, relation, rhs));
    }

    pub fn num_variables(&self) -> usize {
        self.objective.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn variable_name(&self, index: usize) -> String {
        self.variables
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("x{}", index + 1))
    }
}

/// Checks that every constraint and the objective agree on the variable count.
pub(crate) fn check_dimensions(
    objective: &TargetFunction,
    constraints: &[Constraint],
) -> Result<(), SolverError> {
    if objective.is_empty() {
        return Err(SolverError::invalid("objective has no coefficients"));
    }
    if let Some(first) = constraints.first() {
        check_constraint_lengths(constraints)?;
        if first.len() != objective.len() {
            return Err(SolverError::invalid(format!(
                "objective has {} coefficients but constraints have {}",
                objective.len(),
                first.len()
            )));
        }
    }
    if objective
        .coefficients()
        .iter()
        .chain(std::iter::once(&objective.constant()))
        .any(|v| !v.is_finite())
    {
        return Err(SolverError::invalid("objective contains a non-finite value"));
    }
    for (i, c) in constraints.iter().enumerate() {
        if c
            .coefficients()
            .iter()
            .chain(std::iter::once(&c.rhs()))
            .any(|v| !v.is_finite())
        {
            return Err(SolverError::invalid(format!(
                "constraint {} contains a non-finite value",
                i + 1
            )));
        }
    }
    Ok(())
}

pub(crate) fn check_constraint_lengths(constraints: &[Constraint]) -> Result<(), SolverError> {
    let Some(first) = constraints.first() else {
        return Ok(());
    };
    for (i, c) in constraints.iter().enumerate().skip(1) {
        if c.len() != first.len() {
            return Err(SolverError::invalid(format!(
                "constraint {} has {} coefficients, expected {}",
                i + 1,
                c.len(),
                first.len()
            )));
        }
    }
    Ok(())
}
