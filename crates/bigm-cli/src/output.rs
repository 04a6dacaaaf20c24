use bigm_solver::{Constraint, LpProblem, Solution, SolutionStatus, SolveObserver, Tableau};

/// Prints every tableau of a solve to stdout
pub struct PrintObserver;

impl SolveObserver for PrintObserver {
    fn canonical_form(&mut self, constraints: &[Constraint]) {
        println!("Canonical form:");
        for c in constraints {
            println!("  {}", c);
        }
        println!();
    }

    fn initial_tableau(&mut self, tableau: &Tableau, artificial: bool) {
        if artificial {
            println!("Tableau after artificial basis:");
        } else {
            println!("Initial tableau:");
        }
        println!("{}", tableau);
    }

    fn pivoted(&mut self, iteration: usize, row: usize, col: usize, tableau: &Tableau) {
        println!("Iteration {} (row {}, column {}):", iteration, row + 1, col + 1);
        println!("{}", tableau);
    }

    fn finished(&mut self, tableau: &Tableau, _status: SolutionStatus) {
        println!("Final tableau:");
        println!("{}", tableau);
    }
}

pub fn print_solution(problem: &LpProblem, solution: &Solution) {
    match solution.status {
        SolutionStatus::Optimal => println!("Status: OPTIMAL"),
        SolutionStatus::IterationLimit => {
            println!("Status: ITERATION LIMIT");
            println!("No optimal solution within the iteration cap; values are a best effort.");
        }
    }
    println!("Iterations: {}", solution.iterations);
    println!();

    println!("Optimal solution:");
    let assignments: Vec<String> = solution
        .values
        .iter()
        .enumerate()
        .map(|(i, value)| format!("{} = {}", problem.variable_name(i), round2(*value)))
        .collect();
    println!("{};", assignments.join("; "));
    println!();

    let terms: Vec<String> = solution
        .values
        .iter()
        .zip(problem.objective.coefficients())
        .map(|(value, coef)| format!("{}*({})", round2(*value), coef))
        .collect();
    let constant = problem.objective.constant();
    if constant != 0.0 {
        println!("z = {} + ({}) = {:5.2}", terms.join(" + "), constant, solution.objective_value);
    } else {
        println!("z = {} = {:5.2}", terms.join(" + "), solution.objective_value);
    }
}

pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.799999999), 1.8);
        assert_eq!(round2(2.666666), 2.67);
        assert_eq!(round2(-0.0001), 0.0);
    }
}
