mod logging;
mod output;

use bigm_solver::{
    LpProblem, Penalty, Relation, Solution, SolutionStatus, Solver, SolverError, TracingObserver,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;

use crate::logging::LoggingConfig;
use crate::output::{print_solution, PrintObserver};

#[derive(Parser)]
#[command(name = "bigm")]
#[command(about = "Solve linear programs with the Big-M simplex method", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Maximum number of pivots
    #[arg(long, global = true, default_value_t = 1000)]
    max_iterations: usize,

    /// Pivot tolerance
    #[arg(long, global = true, default_value_t = 1e-9)]
    tolerance: f64,

    /// Largest value a basic artificial variable may keep at the optimum
    #[arg(long, global = true, default_value_t = 1e-7)]
    feasibility_tolerance: f64,

    /// Fixed Big-M penalty (overrides --penalty-factor)
    #[arg(long, global = true)]
    penalty: Option<f64>,

    /// Penalty as a multiple of the largest objective coefficient
    #[arg(long, global = true, default_value_t = 1000.0)]
    penalty_factor: f64,

    /// Log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log format (pretty, json)
    #[arg(long, global = true, default_value = "pretty")]
    log_format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a problem described in a JSON file
    Solve {
        /// The file containing the problem
        file: PathBuf,
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
        /// Print every tableau of the solve
        #[arg(long)]
        show_tableaux: bool,
    },
    /// Solve the two textbook tasks
    Demo {
        /// Print every tableau of the solve
        #[arg(long)]
        show_tableaux: bool,
    },
    /// Solve a balanced transportation problem
    Transport {
        /// Supplier capacities, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        supply: Vec<f64>,
        /// Consumer demands, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        demand: Vec<f64>,
        /// Unit costs, row-major by supplier, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        costs: Vec<f64>,
        /// Maximize instead of minimize
        #[arg(long)]
        maximize: bool,
    },
}

impl Cli {
    fn solver(&self) -> Solver {
        let penalty = match self.penalty {
            Some(m) => Penalty::Fixed(m),
            None => Penalty::Scaled(self.penalty_factor),
        };
        Solver::new()
            .with_max_iterations(self.max_iterations)
            .with_tolerance(self.tolerance)
            .with_feasibility_tolerance(self.feasibility_tolerance)
            .with_penalty(penalty)
    }
}

fn main() {
    let cli = Cli::parse();

    LoggingConfig {
        level: cli.log_level.clone(),
        format: cli.log_format.clone(),
    }
    .init();

    let solver = cli.solver();

    match cli.command {
        Commands::Solve {
            file,
            format,
            show_tableaux,
        } => {
            let source = match std::fs::read_to_string(&file) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Error reading file: {}", e);
                    std::process::exit(1);
                }
            };

            let problem: LpProblem = match serde_json::from_str(&source) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Parse error: {}", e);
                    std::process::exit(1);
                }
            };

            let solution = run(&solver, &problem, show_tableaux);
            if format == "json" {
                match serde_json::to_string_pretty(&solution) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error encoding solution: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                print_solution(&problem, &solution);
            }
        }
        Commands::Demo { show_tableaux } => {
            for (i, problem) in demo_problems().iter().enumerate() {
                println!("\nTask {}", i + 1);
                for c in &problem.constraints {
                    println!("  {}", c);
                }
                println!("  {} -> {}", problem.objective, if problem.minimize { "min" } else { "max" });
                println!();
                let solution = run(&solver, problem, show_tableaux);
                print_solution(problem, &solution);
            }
        }
        Commands::Transport {
            supply,
            demand,
            costs,
            maximize,
        } => {
            if costs.len() != supply.len() * demand.len() {
                eprintln!(
                    "Error: expected {} costs ({} suppliers x {} consumers), got {}",
                    supply.len() * demand.len(),
                    supply.len(),
                    demand.len(),
                    costs.len()
                );
                std::process::exit(1);
            }
            let constraints = match bigm_solver::transport::transportation_constraints(&supply, &demand) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            let mut variables = Vec::with_capacity(costs.len());
            for i in 0..supply.len() {
                for j in 0..demand.len() {
                    variables.push(format!("x{}{}", i + 1, j + 1));
                }
            }
            let mut problem = LpProblem::new(variables);
            problem.set_objective(costs, 0.0, !maximize);
            problem.constraints = constraints;

            let solution = run(&solver, &problem, false);
            print_solution(&problem, &solution);
        }
    }
}

/// Solves `problem`, exiting with status 1 on any solver error.
fn run(solver: &Solver, problem: &LpProblem, show_tableaux: bool) -> Solution {
    let result = if show_tableaux {
        solver.optimize_observed(
            &problem.objective,
            &problem.constraints,
            problem.minimize,
            &mut PrintObserver,
        )
    } else {
        solver.optimize_observed(
            &problem.objective,
            &problem.constraints,
            problem.minimize,
            &mut TracingObserver,
        )
    };

    match result {
        Ok(solution) => {
            if solution.status == SolutionStatus::IterationLimit {
                warn!(
                    max_iterations = solver.max_iterations(),
                    iterations = solution.iterations,
                    "returning best-effort solution"
                );
                eprintln!(
                    "Warning: no optimal solution was found within {} iterations",
                    solver.max_iterations()
                );
            }
            solution
        }
        Err(SolverError::Unbounded { .. }) => {
            println!("Status: UNBOUNDED");
            println!("The problem has no finite optimal solution.");
            std::process::exit(1);
        }
        Err(SolverError::Infeasible { .. }) => {
            println!("Status: INFEASIBLE");
            println!("No solution exists that satisfies all constraints.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn demo_problems() -> Vec<LpProblem> {
    let mut first = LpProblem::new(Vec::new());
    first.set_objective(vec![1.0, 2.0], 0.0, false);
    first.add_constraint(vec![1.0, 3.0], Relation::LowerOrEqual, 9.0);
    first.add_constraint(vec![3.0, -2.0], Relation::LowerOrEqual, 5.0);
    first.add_constraint(vec![2.0, 1.0], Relation::LowerOrEqual, 6.0);

    let mut second = LpProblem::new(Vec::new());
    second.set_objective(vec![2.0, -1.0], 0.0, false);
    second.add_constraint(vec![3.0, -2.0], Relation::LowerOrEqual, 12.0);
    second.add_constraint(vec![-1.0, 2.0], Relation::LowerOrEqual, 8.0);
    second.add_constraint(vec![2.0, 3.0], Relation::GreaterOrEqual, 6.0);

    vec![first, second]
}
